#![allow(dead_code)]

use chrono::{Days, NaiveDate, Utc};
use common::test_helpers::{create_test_connection, generate_unique_id};
use orders::model::{CustomerId, NewOrder, customer, order};
use orders::schema::{create_schema, drop_schema};
use orders::SeaOrmOrderService;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::error::Error;

pub type TestResult<T = ()> = Result<T, Box<dyn Error + Send + Sync>>;

/// Customers every seeded store starts with: ids 1, 2 and 3.
pub const SEEDED_CUSTOMERS: CustomerId = 3;

const SEED_CHUNK: usize = 250;

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// A complete order for `customer_id`, due three days from today.
pub fn sample_order(customer_id: CustomerId) -> NewOrder {
    NewOrder {
        customer_id,
        salesperson_person_id: 1,
        contact_person_id: 1,
        order_date: today(),
        expected_delivery_date: today() + Days::new(3),
        is_undersupply_backordered: false,
        last_edited_by: 1,
    }
}

pub async fn insert_customer(db: &DatabaseConnection, customer_id: CustomerId) -> TestResult {
    customer::Entity::insert(customer::ActiveModel {
        customer_id: Set(customer_id),
        customer_name: Set(generate_unique_id(&format!("CUSTOMER-{customer_id}"))),
    })
    .exec_without_returning(db)
    .await?;
    Ok(())
}

/// Empty store with the schema and the seeded customers in place.
pub async fn store() -> TestResult<SeaOrmOrderService> {
    let db = create_test_connection().await?;
    drop_schema(&db).await?;
    create_schema(&db).await?;
    for customer_id in 1..=SEEDED_CUSTOMERS {
        insert_customer(&db, customer_id).await?;
    }
    Ok(SeaOrmOrderService::from_connection(db))
}

/// Store holding `order_count` orders with ids `1..=order_count`.
pub async fn seeded_store(order_count: usize) -> TestResult<SeaOrmOrderService> {
    let service = store().await?;
    let now = Utc::now().naive_utc();

    let rows: Vec<order::ActiveModel> = (0..order_count)
        .map(|i| {
            let customer_id = (i as CustomerId % SEEDED_CUSTOMERS) + 1;
            let order_date = today() - Days::new((i % 30) as u64);
            order::ActiveModel {
                customer_id: Set(customer_id),
                salesperson_person_id: Set(1),
                contact_person_id: Set(1),
                order_date: Set(order_date),
                expected_delivery_date: Set(order_date + Days::new(3)),
                is_undersupply_backordered: Set(i % 2 == 0),
                last_edited_by: Set(1),
                last_edited_when: Set(now),
                ..Default::default()
            }
        })
        .collect();

    for chunk in rows.chunks(SEED_CHUNK) {
        order::Entity::insert_many(chunk.to_vec())
            .exec_without_returning(service.connection())
            .await?;
    }
    Ok(service)
}
