//! HTTP endpoint tests
//!
//! Drives the full actix application against in-memory SQLite.

#[cfg(test)]
mod tests {
    use crate::common::backends::UnavailableBackend;
    use crate::common::database::test_db_config;
    use crate::common::{OrderFactory, TestDatabase};
    use order_ingest::config::Config;
    use order_ingest::core::ingest::CorrelationId;
    use order_ingest::server::middleware::REQUEST_ID_HEADER;
    use order_ingest::server::server::HttpServer;
    use order_ingest::server::state::AppState;
    use order_ingest::storage::StorageLayer;
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn sqlite_state(config: Config) -> (AppState, TestDatabase) {
        let db = TestDatabase::new().await;
        let storage = StorageLayer::with_backend(db.db_arc());
        (AppState::new(config, storage), db)
    }

    #[actix_web::test]
    async fn test_post_orders_persists_rows() {
        let (state, db) = sqlite_state(Config::default()).await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(OrderFactory::request_body(42, 5))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["total"], 5);
        assert_eq!(body["success_count"], 5);
        assert!(body["time_ms"].is_u64());

        assert_eq!(
            db.db().count_orders_by_request(CorrelationId(42)).await.unwrap(),
            5
        );
    }

    #[actix_web::test]
    async fn test_storage_layer_from_config() {
        let mut config = Config::default();
        config.service.storage.database = test_db_config();
        let storage = StorageLayer::new(config.storage()).await.unwrap();
        let database = storage.database.clone().unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(AppState::new(
            config, storage,
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(OrderFactory::request_body(8, 2))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            database.count_orders_by_request(CorrelationId(8)).await.unwrap(),
            2
        );
    }

    #[actix_web::test]
    async fn test_oversized_batch_rejected_without_writes() {
        let (state, db) = sqlite_state(Config::default()).await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(OrderFactory::request_body(3, 1001))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "too_many_records");
        assert_eq!(
            db.db().count_orders_by_request(CorrelationId(3)).await.unwrap(),
            0
        );
    }

    #[actix_web::test]
    async fn test_malformed_record_rejected() {
        let (state, db) = sqlite_state(Config::default()).await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let body = json!({
            "request_id": 4,
            "data": [
                {"customer": "alice", "quantity": 1, "price": 1.0},
                {"customer": "", "quantity": 1, "price": 1.0}
            ]
        });
        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "invalid_payload");
        assert_eq!(
            db.db().count_orders_by_request(CorrelationId(4)).await.unwrap(),
            0
        );
    }

    #[actix_web::test]
    async fn test_wrong_field_type_is_invalid_payload() {
        let (state, _db) = sqlite_state(Config::default()).await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(json!({"request_id": 1, "data": [{"customer": "a", "quantity": -1}]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "invalid_payload");
    }

    #[actix_web::test]
    async fn test_body_limit_is_enforced() {
        let mut config = Config::default();
        config.service.server.max_body_size = 64;
        let (state, _db) = sqlite_state(config).await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(OrderFactory::request_body(1, 20))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "invalid_payload");
    }

    #[actix_web::test]
    async fn test_unreachable_store_yields_multi_status() {
        let state = AppState::new(
            Config::default(),
            StorageLayer::with_backend(Arc::new(UnavailableBackend)),
        );
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/orders")
            .set_json(OrderFactory::request_body(9, 3))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::MULTI_STATUS);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["success_count"], 0);
        let indices: Vec<u64> = body["failures"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["index"].as_u64().unwrap())
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_every_response_has_request_id() {
        let (state, _db) = sqlite_state(Config::default()).await;
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        for req in [
            test::TestRequest::get().uri("/health").to_request(),
            test::TestRequest::get().uri("/version").to_request(),
            test::TestRequest::post()
                .uri("/orders")
                .set_json(OrderFactory::request_body(1, 1))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
        }
    }
}
