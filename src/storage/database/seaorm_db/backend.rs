use crate::core::ingest::{BackendError, Order, PersistenceBackend};
use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr};

use super::types::SeaOrmDatabase;

impl From<DbErr> for BackendError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg))
            | Some(SqlErr::ForeignKeyConstraintViolation(msg)) => BackendError::Constraint(msg),
            _ => match err {
                DbErr::ConnectionAcquire(e) => BackendError::Unavailable(e.to_string()),
                DbErr::Conn(e) => BackendError::Unavailable(e.to_string()),
                other => BackendError::Other(other.to_string()),
            },
        }
    }
}

#[async_trait]
impl PersistenceBackend for SeaOrmDatabase {
    async fn create(&self, order: &Order) -> Result<i64, BackendError> {
        self.create_order(order).await.map_err(BackendError::from)
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        self.db.ping().await.map_err(BackendError::from)
    }
}
