//! Database integration tests
//!
//! Tests ingestion through a real in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::fixed_time;
    use crate::common::{OrderFactory, ReportAssertions, TestDatabase};
    use order_ingest::config::DatabaseConfig;
    use order_ingest::core::ingest::{
        BatchIngestCoordinator, BatchValidator, ConcurrentPersister, CorrelationId,
        PersistenceBackend,
    };
    use order_ingest::storage::database::{Database, DatabaseBackendType};

    fn coordinator() -> BatchIngestCoordinator {
        BatchIngestCoordinator::new(BatchValidator::default(), ConcurrentPersister::new(4), None)
    }

    /// Test basic database connection and health check
    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
    }

    /// Migrations can be applied twice
    #[tokio::test]
    async fn test_database_migration_is_idempotent() {
        let db = TestDatabase::new().await;
        assert!(db.db().migrate().await.is_ok());
    }

    #[tokio::test]
    async fn test_batch_rows_carry_correlation_id() {
        let db = TestDatabase::new().await;
        let report = coordinator()
            .ingest(OrderFactory::batch(10), CorrelationId(77), db.db_arc())
            .await
            .unwrap();

        report.assert_accounts_for(10);
        assert_eq!(report.success_count, 10);
        assert_eq!(
            db.db().count_orders_by_request(CorrelationId(77)).await.unwrap(),
            10
        );

        let rows = db
            .db()
            .find_orders_by_request(CorrelationId(77))
            .await
            .unwrap();
        let mut customers: Vec<_> = rows.iter().map(|o| o.customer.clone()).collect();
        customers.sort();
        let mut expected: Vec<_> = (0..10).map(OrderFactory::customer).collect();
        expected.sort();
        assert_eq!(customers, expected);
    }

    #[tokio::test]
    async fn test_concurrent_writers_share_pool() {
        let db = TestDatabase::pooled(4).await;
        let report = coordinator()
            .ingest(OrderFactory::batch(50), CorrelationId(9), db.db_arc())
            .await
            .unwrap();

        report.assert_accounts_for(50);
        assert_eq!(report.success_count, 50);
        assert_eq!(
            db.db().count_orders_by_request(CorrelationId(9)).await.unwrap(),
            50
        );
    }

    #[tokio::test]
    async fn test_caller_timestamp_is_preserved() {
        let db = TestDatabase::new().await;
        coordinator()
            .ingest(
                vec![OrderFactory::created_at(0, fixed_time())],
                CorrelationId(5),
                db.db_arc(),
            )
            .await
            .unwrap();

        let rows = db
            .db()
            .find_orders_by_request(CorrelationId(5))
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].created_at, Some(fixed_time()));
        assert_eq!(rows[0].quantity, 1);
        assert_eq!(rows[0].price, 10.0);
    }

    #[tokio::test]
    async fn test_separate_requests_are_isolated() {
        let db = TestDatabase::new().await;
        let coordinator = coordinator();
        coordinator
            .ingest(OrderFactory::batch(3), CorrelationId(1), db.db_arc())
            .await
            .unwrap();
        coordinator
            .ingest(OrderFactory::batch(2), CorrelationId(2), db.db_arc())
            .await
            .unwrap();

        assert_eq!(db.db().count_orders_by_request(CorrelationId(1)).await.unwrap(), 3);
        assert_eq!(db.db().count_orders_by_request(CorrelationId(2)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unmigrated_database_reports_failures() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Default::default()
        };
        let db = std::sync::Arc::new(Database::new(&config).await.unwrap());
        assert!(PersistenceBackend::health_check(db.as_ref()).await.is_ok());

        let report = coordinator()
            .ingest(OrderFactory::batch(3), CorrelationId(1), db)
            .await
            .unwrap();

        report.assert_accounts_for(3);
        assert_eq!(report.success_count, 0);
        report.assert_failed_indices(&[0, 1, 2]);
    }
}
