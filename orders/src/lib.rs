pub mod error;
pub mod executable_utils;
pub mod model;
pub mod schema;
pub mod storage;

pub use error::{ConstraintKind, OrderError};
pub use model::{NewOrder, Order, OrderId};
pub use storage::{OrderService, SeaOrmOrderService};
