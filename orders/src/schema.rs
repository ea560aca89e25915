use crate::model::{customer, order};
use sea_orm::sea_query::Table;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityName, Schema};
use tracing::info;

/// Create the customer and order tables if they do not exist yet.
///
/// Tables are derived from the entity definitions, so the foreign key on
/// `orders.customer_id` comes from the `belongs_to` relation.
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = [
        schema.create_table_from_entity(customer::Entity),
        schema.create_table_from_entity(order::Entity),
    ];
    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    info!(backend = ?backend, "Order schema ready");
    Ok(())
}

/// Drop the order tables, dependents first.
pub async fn drop_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    for table in [order::Entity.table_ref(), customer::Entity.table_ref()] {
        let statement = Table::drop().table(table).if_exists().to_owned();
        db.execute(backend.build(&statement)).await?;
    }
    Ok(())
}
