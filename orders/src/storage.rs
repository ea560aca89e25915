use crate::error::OrderError;
use crate::model::{NewOrder, Order, OrderId, order};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use common::config::StoreConfig;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::time::Duration;
use tracing::{debug, info};

/// CRUD contract over stored orders.
///
/// Write operations report affected rows. A missing order is a normal outcome:
/// `get_by_id` returns `None`, `update` and `delete` return `0`.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// One page of orders, ascending by id.
    ///
    /// `page` is 1-based and `take` is the page size; a page past the end
    /// is empty.
    async fn get_all(&self, page: u64, take: u64) -> Result<Vec<Order>, OrderError>;

    async fn get_by_id(&self, order_id: OrderId) -> Result<Option<Order>, OrderError>;

    async fn create(&self, order: NewOrder) -> Result<u64, OrderError>;

    /// Replace every caller-owned field of the order with id `order_id`.
    async fn update(&self, order_id: OrderId, order: NewOrder) -> Result<u64, OrderError>;

    async fn delete(&self, order_id: OrderId) -> Result<u64, OrderError>;

    /// Write back a full order record, keyed by its own id.
    async fn update_order(&self, order: &Order) -> Result<u64, OrderError> {
        self.update(order.order_id, NewOrder::from(order)).await
    }
}

/// Open the store connection described by `store`.
pub async fn connect(database_url: &str, store: &StoreConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(store.max_connections)
        .min_connections(store.min_connections.min(store.max_connections))
        .connect_timeout(Duration::from_secs(store.connect_timeout_secs))
        .sqlx_logging(store.sqlx_logging);

    let db = Database::connect(options).await?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = store.max_connections,
        "Connected to order store"
    );
    Ok(db)
}

/// Largest row count or offset the store accepts as a bound parameter.
pub(crate) const MAX_ROWS: u64 = i64::MAX as u64;

/// Offset of the first row on a 1-based `page`; page 0 reads as page 1.
/// Clamped to [`MAX_ROWS`].
pub(crate) fn page_offset(page: u64, take: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(take).min(MAX_ROWS)
}

/// SeaORM-backed order service
#[derive(Clone)]
pub struct SeaOrmOrderService {
    db: DatabaseConnection,
}

impl SeaOrmOrderService {
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn connect(database_url: &str, store: &StoreConfig) -> Result<Self, OrderError> {
        Ok(Self::from_connection(connect(database_url, store).await?))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert an order and return the stored row with its assigned id.
    pub async fn create_returning(&self, order: NewOrder) -> Result<Order, OrderError> {
        debug!(customer_id = order.customer_id, "Creating order with returned row");
        let created = order.into_active(edit_timestamp()).insert(&self.db).await?;
        debug!(order_id = created.order_id, "Created order");
        Ok(created)
    }
}

fn edit_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[async_trait]
impl OrderService for SeaOrmOrderService {
    async fn get_all(&self, page: u64, take: u64) -> Result<Vec<Order>, OrderError> {
        let take = take.min(MAX_ROWS);
        let offset = page_offset(page, take);
        debug!(page, take, offset, "Listing orders");

        let orders = order::Entity::find()
            .order_by_asc(order::Column::OrderId)
            .offset(offset)
            .limit(take)
            .all(&self.db)
            .await?;
        Ok(orders)
    }

    async fn get_by_id(&self, order_id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!(order_id, "Getting order");
        Ok(order::Entity::find_by_id(order_id).one(&self.db).await?)
    }

    async fn create(&self, order: NewOrder) -> Result<u64, OrderError> {
        debug!(customer_id = order.customer_id, "Creating order");
        let rows_affected = order::Entity::insert(order.into_active(edit_timestamp()))
            .exec_without_returning(&self.db)
            .await?;
        Ok(rows_affected)
    }

    async fn update(&self, order_id: OrderId, order: NewOrder) -> Result<u64, OrderError> {
        debug!(order_id, customer_id = order.customer_id, "Updating order");
        let result = order::Entity::update_many()
            .set(order.into_active(edit_timestamp()))
            .filter(order::Column::OrderId.eq(order_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    async fn delete(&self, order_id: OrderId) -> Result<u64, OrderError> {
        debug!(order_id, "Deleting order");
        let result = order::Entity::delete_by_id(order_id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
