use sea_orm::{DbErr, RuntimeErr, SqlErr};
use sqlx::error::ErrorKind;

/// Which store constraint rejected a write.
#[derive(Copy, Clone, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ConstraintKind {
    ForeignKey,
    Unique,
    NotNull,
    Check,
}

/// Errors surfaced by the order service.
///
/// Missing rows are never errors: reads return `None` and writes report
/// zero affected rows. Store errors are kept as the error source unchanged.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Store rejected the write ({kind} constraint): {source}")]
    ConstraintViolation {
        kind: ConstraintKind,
        #[source]
        source: DbErr,
    },

    #[error("Store error: {0}")]
    Database(#[source] DbErr),
}

impl OrderError {
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, OrderError::ConstraintViolation { .. })
    }

    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            OrderError::ConstraintViolation { kind, .. } => Some(*kind),
            OrderError::Database(_) => None,
        }
    }

    /// The store error as it was returned.
    pub fn store_error(&self) -> &DbErr {
        match self {
            OrderError::ConstraintViolation { source, .. } => source,
            OrderError::Database(source) => source,
        }
    }
}

impl From<DbErr> for OrderError {
    fn from(err: DbErr) -> Self {
        match classify_constraint(&err) {
            Some(kind) => {
                tracing::warn!(constraint = %kind, error = %err, "Store constraint violation");
                OrderError::ConstraintViolation { kind, source: err }
            }
            None => OrderError::Database(err),
        }
    }
}

fn classify_constraint(err: &DbErr) -> Option<ConstraintKind> {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => return Some(ConstraintKind::ForeignKey),
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(ConstraintKind::Unique),
        _ => {}
    }

    // sea-orm only names unique and foreign key failures
    let runtime = match err {
        DbErr::Exec(runtime) | DbErr::Query(runtime) | DbErr::Conn(runtime) => runtime,
        _ => return None,
    };
    match runtime {
        RuntimeErr::SqlxError(sqlx::Error::Database(db_err)) => match db_err.kind() {
            ErrorKind::ForeignKeyViolation => Some(ConstraintKind::ForeignKey),
            ErrorKind::UniqueViolation => Some(ConstraintKind::Unique),
            ErrorKind::NotNullViolation => Some(ConstraintKind::NotNull),
            ErrorKind::CheckViolation => Some(ConstraintKind::Check),
            _ => None,
        },
        _ => None,
    }
}
