use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::ActiveValue::{NotSet, Set};

pub type OrderId = i32;
pub type CustomerId = i32;
pub type PersonId = i32;

/// A stored order row.
pub type Order = order::Model;

/// SeaORM Customer Entity
///
/// Only carried so `orders.customer_id` has something to reference.
pub mod customer {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "customers")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub customer_id: i32,
        pub customer_name: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::order::Entity")]
        Orders,
    }

    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Orders.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// SeaORM Order Entity
pub mod order {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "orders")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub order_id: i32,
        pub customer_id: i32,
        pub salesperson_person_id: i32,
        pub contact_person_id: i32,
        pub order_date: Date,
        pub expected_delivery_date: Date,
        pub is_undersupply_backordered: bool,
        pub last_edited_by: i32,
        /// Audit column, written by the service on every create and update.
        pub last_edited_when: DateTime,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::customer::Entity",
            from = "Column::CustomerId",
            to = "super::customer::Column::CustomerId"
        )]
        Customer,
    }

    impl Related<super::customer::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Customer.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Caller-supplied order fields.
///
/// Used as the create payload and as the full replacement set on update;
/// the id and the audit column are owned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub salesperson_person_id: PersonId,
    pub contact_person_id: PersonId,
    pub order_date: NaiveDate,
    pub expected_delivery_date: NaiveDate,
    pub is_undersupply_backordered: bool,
    pub last_edited_by: PersonId,
}

impl NewOrder {
    pub(crate) fn into_active(self, edited_at: NaiveDateTime) -> order::ActiveModel {
        order::ActiveModel {
            order_id: NotSet,
            customer_id: Set(self.customer_id),
            salesperson_person_id: Set(self.salesperson_person_id),
            contact_person_id: Set(self.contact_person_id),
            order_date: Set(self.order_date),
            expected_delivery_date: Set(self.expected_delivery_date),
            is_undersupply_backordered: Set(self.is_undersupply_backordered),
            last_edited_by: Set(self.last_edited_by),
            last_edited_when: Set(edited_at),
        }
    }
}

impl From<&Order> for NewOrder {
    fn from(order: &Order) -> Self {
        Self {
            customer_id: order.customer_id,
            salesperson_person_id: order.salesperson_person_id,
            contact_person_id: order.contact_person_id,
            order_date: order.order_date,
            expected_delivery_date: order.expected_delivery_date,
            is_undersupply_backordered: order.is_undersupply_backordered,
            last_edited_by: order.last_edited_by,
        }
    }
}
