#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;
    use rocket::http::{ContentType, Header, Status};
    use rocket::local::asynchronous::{Client, LocalResponse};
    use serde_json::{json, Value};
    use shared::models::{NewVote, VoteRecord};
    use crate::{
        build_rocket,
        config::ServerConfig,
        routes::AppState,
        spa::mount_spa,
        store::{MemoryVoteStore, StoreError, VoteStore},
    };
    use uuid::Uuid;

    struct FailingStore;

    #[rocket::async_trait]
    impl VoteStore for FailingStore {
        async fn insert(&self, _vote: &NewVote) -> Result<(), StoreError> {
            Err(StoreError::Database("connection refused".into()))
        }

        async fn votes_at(&self, _scheduled_time: &str) -> Result<Vec<VoteRecord>, StoreError> {
            Err(StoreError::Database("relation \"votes\" does not exist".into()))
        }
    }

    struct NoDataStore;

    #[rocket::async_trait]
    impl VoteStore for NoDataStore {
        async fn insert(&self, _vote: &NewVote) -> Result<(), StoreError> {
            Ok(())
        }

        async fn votes_at(&self, _scheduled_time: &str) -> Result<Vec<VoteRecord>, StoreError> {
            Err(StoreError::NoData)
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    async fn client_with(store: Arc<dyn VoteStore>) -> Client {
        init_tracing();
        let rocket = build_rocket(AppState::new(store), ServerConfig::default());
        Client::tracked(rocket).await.expect("valid rocket instance")
    }

    fn record(route: &str, delay_range: &str, scheduled_time: &str) -> VoteRecord {
        VoteRecord {
            route: route.into(),
            delay_range: delay_range.into(),
            scheduled_time: scheduled_time.into(),
        }
    }

    fn zeros() -> Value {
        json!({"pontual": 0, "menos1": 0, "ate5": 0, "ate10": 0, "mais10": 0})
    }

    async fn post_vote<'c>(client: &'c Client, body: &str) -> LocalResponse<'c> {
        client.post("/api/votar")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await
    }

    async fn post_bytes<'c>(client: &'c Client, body: Vec<u8>) -> LocalResponse<'c> {
        client.post("/api/votar")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await
    }

    fn static_dir_with_index() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vlt_monitor_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create static dir");
        std::fs::write(dir.join("index.html"), "<html>monitor</html>").expect("write index");
        std::fs::write(dir.join("app.js"), "start()").expect("write asset");
        dir
    }

    async fn body_json(response: LocalResponse<'_>) -> Value {
        response.into_json::<Value>().await.expect("json body")
    }

    #[rocket::async_test]
    async fn test_vote_then_tally() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;

        let response = post_vote(&client, r#"{"rotaId":"iate","faixa":"ate5","horario_previsto":"08:30"}"#).await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(body_json(response).await, json!({"success": true}));
        assert_eq!(store.len(), 1);

        let response = client.get("/api/votar?horario=08:30").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(body_json(response).await, json!({
            "iate": {"pontual": 0, "menos1": 0, "ate5": 1, "ate10": 0, "mais10": 0},
            "parangaba": zeros(),
        }));
    }

    #[rocket::async_test]
    async fn test_repeated_votes_are_all_counted() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;
        let body = r#"{"rotaId":"parangaba","faixa":"pontual","horario_previsto":"06:10"}"#;

        for _ in 0..3 {
            assert_eq!(post_vote(&client, body).await.status(), Status::Ok);
        }
        assert_eq!(store.len(), 3);

        let tally = body_json(client.get("/api/votar?horario=06:10").dispatch().await).await;
        assert_eq!(tally["parangaba"]["pontual"], 3);
        assert_eq!(tally["iate"], zeros());
    }

    #[rocket::async_test]
    async fn test_invalid_data_is_rejected_without_insert() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;

        let bodies = [
            r#"{"rotaId":"centro","faixa":"ate5","horario_previsto":"08:30"}"#,
            r#"{"rotaId":"iate","faixa":"ate15","horario_previsto":"08:30"}"#,
            r#"{"rotaId":"iate","faixa":"ate5","horario_previsto":"8:30"}"#,
            r#"{"rotaId":"iate","faixa":"ate5","horario_previsto":"08:30:00"}"#,
            r#"{"rotaId":"IATE","faixa":"ate5","horario_previsto":"08:30"}"#,
            r#"{"rotaId":"iate","faixa":"ate5"}"#,
            r#"{"rotaId":7,"faixa":"ate5","horario_previsto":"08:30"}"#,
            r#"{}"#,
        ];

        for body in bodies {
            let response = post_vote(&client, body).await;
            assert_eq!(response.status(), Status::BadRequest, "body: {}", body);
            assert_eq!(body_json(response).await, json!({"error": "invalid data"}), "body: {}", body);
        }
        assert!(store.is_empty());
    }

    #[rocket::async_test]
    async fn test_malformed_body_is_rejected_without_insert() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;

        for body in ["{\"rotaId\":", "not json", "", "null"] {
            let response = post_vote(&client, body).await;
            assert_eq!(response.status(), Status::BadRequest, "body: {:?}", body);
            assert_eq!(body_json(response).await, json!({"error": "invalid request body"}));
        }
        assert!(store.is_empty());
    }

    #[rocket::async_test]
    async fn test_non_object_json_is_invalid_data() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;

        for body in ["5", "\"x\"", "[]", "true"] {
            let response = post_vote(&client, body).await;
            assert_eq!(response.status(), Status::BadRequest, "body: {:?}", body);
            assert_eq!(body_json(response).await, json!({"error": "invalid data"}), "body: {:?}", body);
        }
        assert!(store.is_empty());
    }

    #[rocket::async_test]
    async fn test_unreadable_body_is_malformed() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;

        let response = post_bytes(&client, vec![0xff, 0xfe, b'{']).await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(body_json(response).await, json!({"error": "invalid request body"}));

        let mut oversized = br#"{"rotaId":"iate","faixa":"ate5","horario_previsto":"08:30"}"#.to_vec();
        oversized.resize(2 * 1024 * 1024, b' ');
        let response = post_bytes(&client, oversized).await;
        assert_eq!(response.status(), Status::BadRequest);
        assert_eq!(body_json(response).await, json!({"error": "invalid request body"}));

        assert!(store.is_empty());
    }

    #[rocket::async_test]
    async fn test_padded_vote_is_accepted() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;

        let mut padded = br#"{"rotaId":"parangaba","faixa":"mais10","horario_previsto":"18:10"}"#.to_vec();
        padded.resize(10 * 1024, b' ');
        let response = post_bytes(&client, padded).await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(body_json(response).await, json!({"success": true}));
        assert_eq!(store.len(), 1);
    }

    #[rocket::async_test]
    async fn test_time_is_only_shape_checked() {
        let store = Arc::new(MemoryVoteStore::new());
        let client = client_with(store.clone()).await;

        let response = post_vote(&client, r#"{"rotaId":"iate","faixa":"mais10","horario_previsto":"99:99"}"#).await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(store.len(), 1);
    }

    #[rocket::async_test]
    async fn test_tally_without_votes_is_all_zero() {
        let client = client_with(Arc::new(MemoryVoteStore::new())).await;

        let response = client.get("/api/votar?horario=23:30").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(body_json(response).await, json!({"iate": zeros(), "parangaba": zeros()}));
    }

    #[rocket::async_test]
    async fn test_tally_rejects_bad_time() {
        let client = client_with(Arc::new(MemoryVoteStore::new())).await;

        for uri in ["/api/votar", "/api/votar?horario=", "/api/votar?horario=8:30", "/api/votar?horario=0830"] {
            let response = client.get(uri).dispatch().await;
            assert_eq!(response.status(), Status::BadRequest, "uri: {}", uri);
            assert_eq!(body_json(response).await, json!({"error": "invalid time"}));
        }
    }

    #[rocket::async_test]
    async fn test_tally_filters_by_time_and_skips_unknown_values() {
        let store = Arc::new(MemoryVoteStore::with_records(vec![
            record("iate", "ate10", "07:30"),
            record("iate", "ate10", "07:30"),
            record("parangaba", "menos1", "07:30"),
            record("iate", "ate10", "08:10"),
            record("centro", "ate10", "07:30"),
            record("iate", "atrasado", "07:30"),
        ]));
        let client = client_with(store).await;

        let tally = body_json(client.get("/api/votar?horario=07:30").dispatch().await).await;
        assert_eq!(tally, json!({
            "iate": {"pontual": 0, "menos1": 0, "ate5": 0, "ate10": 2, "mais10": 0},
            "parangaba": {"pontual": 0, "menos1": 1, "ate5": 0, "ate10": 0, "mais10": 0},
        }));
    }

    #[rocket::async_test]
    async fn test_store_failures_surface_store_message() {
        let client = client_with(Arc::new(FailingStore)).await;

        let response = post_vote(&client, r#"{"rotaId":"iate","faixa":"ate5","horario_previsto":"08:30"}"#).await;
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(body_json(response).await, json!({"error": "connection refused"}));

        let response = client.get("/api/votar?horario=08:30").dispatch().await;
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(body_json(response).await, json!({"error": "relation \"votes\" does not exist"}));
    }

    #[rocket::async_test]
    async fn test_invalid_vote_never_reaches_failing_store() {
        let client = client_with(Arc::new(FailingStore)).await;

        let response = post_vote(&client, r#"{"rotaId":"nope","faixa":"ate5","horario_previsto":"08:30"}"#).await;
        assert_eq!(response.status(), Status::BadRequest);
    }

    #[rocket::async_test]
    async fn test_missing_query_result_is_server_error() {
        let client = client_with(Arc::new(NoDataStore)).await;

        let response = client.get("/api/votar?horario=08:30").dispatch().await;
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(body_json(response).await, json!({"error": "query failed"}));
    }

    #[rocket::async_test]
    async fn test_cors_headers_for_allowed_origins_only() {
        let client = client_with(Arc::new(MemoryVoteStore::new())).await;

        let response = client.get("/api/votar?horario=08:30")
            .header(Header::new("Origin", "http://localhost:8080"))
            .dispatch()
            .await;
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("http://localhost:8080")
        );

        let response = client.get("/api/votar?horario=08:30")
            .header(Header::new("Origin", "https://elsewhere.example"))
            .dispatch()
            .await;
        assert_eq!(response.headers().get_one("Access-Control-Allow-Origin"), None);

        let response = client.options("/api/votar").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
    }

    #[rocket::async_test]
    async fn test_unknown_route_uses_json_catcher() {
        let client = client_with(Arc::new(MemoryVoteStore::new())).await;

        let response = client.get("/api/nothing-here").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(body_json(response).await, json!({"error": "not found"}));
    }

    #[rocket::async_test]
    async fn test_frontend_fallback_leaves_api_to_catchers() {
        init_tracing();
        let rocket = build_rocket(AppState::new(Arc::new(MemoryVoteStore::new())), ServerConfig::default());
        let client = Client::tracked(mount_spa(rocket, static_dir_with_index()))
            .await
            .expect("valid rocket instance");

        let response = client.get("/api/nothing-here").dispatch().await;
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(body_json(response).await, json!({"error": "not found"}));

        let response = client.get("/api/votar?horario=08:30").dispatch().await;
        assert_eq!(response.status(), Status::Ok);
        assert_eq!(body_json(response).await, json!({"iate": zeros(), "parangaba": zeros()}));

        for uri in ["/", "/horarios/hoje", "/apis"] {
            let response = client.get(uri).dispatch().await;
            assert_eq!(response.status(), Status::Ok, "uri: {}", uri);
            assert_eq!(response.into_string().await.as_deref(), Some("<html>monitor</html>"), "uri: {}", uri);
        }

        let response = client.get("/app.js").dispatch().await;
        assert_eq!(response.into_string().await.as_deref(), Some("start()"));
    }

    #[test]
    fn test_origin_list_parsing() {
        let config = ServerConfig::from_origin_list(" https://vlt.example , http://localhost ,");
        assert_eq!(config.allowed_origins, ["https://vlt.example", "http://localhost"]);
        assert!(config.allows_origin("https://vlt.example"));
        assert!(!config.allows_origin("https://other.example"));

        assert_eq!(ServerConfig::from_origin_list(" , "), ServerConfig::default());
    }
}
