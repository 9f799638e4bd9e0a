//! Admin listing integration tests

use axum::http::StatusCode;

use crate::common::TestApp;

mod test_access {
    use super::*;

    #[tokio::test]
    async fn test_listings_require_session() {
        let app = TestApp::new();
        for path in ["/api/admin/consumer", "/api/admin/worker", "/api/admin/shop"] {
            let response = app.get(path, None).await;
            assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_listings_forbid_other_roles() {
        let app = TestApp::new();
        let tokens = [
            app.signup_consumer("5555000001").await,
            app.signup_worker("5555000002").await,
            app.signup_shop_admin("5555000003", "Corner Cafe").await,
        ];

        for token in &tokens {
            for path in ["/api/admin/consumer", "/api/admin/worker", "/api/admin/shop"] {
                let response = app.get(path, Some(token)).await;
                assert_eq!(response.status, StatusCode::FORBIDDEN, "{}", path);
                assert_eq!(response.json()["error"]["code"], "FORBIDDEN");
            }
        }
    }
}

mod test_listings {
    use super::*;

    #[tokio::test]
    async fn test_consumer_listing_defaults_and_newest_first() {
        let app = TestApp::new();
        let (_, admin) = app.seed_admin().await;
        for i in 0..3 {
            app.signup_consumer(&format!("555600000{}", i)).await;
        }
        app.signup_worker("5556000100").await;

        let response = app.get("/api/admin/consumer", Some(&admin)).await;
        assert_eq!(response.status, StatusCode::OK);

        let body = response.json();
        let data = body["data"].as_array().unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data[0]["phone_number"], "5556000002");
        assert_eq!(data[2]["phone_number"], "5556000000");
        assert_eq!(
            body["meta"],
            serde_json::json!({ "total": 3, "page": 1, "limit": 10, "totalPages": 1 })
        );
    }

    #[tokio::test]
    async fn test_consumer_listing_pages() {
        let app = TestApp::new();
        let (_, admin) = app.seed_admin().await;
        for i in 0..5 {
            app.signup_consumer(&format!("555700000{}", i)).await;
        }

        let response = app
            .get("/api/admin/consumer?page=3&limit=2", Some(&admin))
            .await;
        let body = response.json();

        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["phone_number"], "5557000000");
        assert_eq!(body["meta"]["totalPages"], 3);
        assert_eq!(body["meta"]["page"], 3);
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        let app = TestApp::new();
        let (_, admin) = app.seed_admin().await;

        let body = app
            .get("/api/admin/consumer?limit=1000&page=0", Some(&admin))
            .await
            .json();
        assert_eq!(body["meta"]["limit"], 100);
        assert_eq!(body["meta"]["page"], 1);
        assert_eq!(body["meta"]["totalPages"], 0);
    }

    #[tokio::test]
    async fn test_worker_listing_includes_profile() {
        let app = TestApp::new();
        let (_, admin) = app.seed_admin().await;
        app.signup_worker("5558000001").await;

        let body = app.get("/api/admin/worker", Some(&admin)).await.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["phone_number"], "5558000001");
        assert_eq!(body["data"][0]["worker_profile"]["vehicle_number"], "KA05MN4321");
    }

    #[tokio::test]
    async fn test_shop_listing_includes_admin_contact() {
        let app = TestApp::new();
        let (_, admin) = app.seed_admin().await;
        app.signup_shop_admin("5559000001", "Chai Point").await;
        app.signup_shop_admin("5559000002", "Book Nook").await;

        let body = app.get("/api/admin/shop", Some(&admin)).await.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["name"], "Book Nook");
        assert_eq!(body["data"][0]["admin"]["phone_number"], "5559000002");
        assert_eq!(body["data"][1]["name"], "Chai Point");
    }
}
