//! Signup and login integration tests

use axum::http::StatusCode;
use marketplace_accounts::AccountStore;
use marketplace_auth::Role;
use serde_json::json;

use crate::common::{token_of, TestApp, TEST_PASSWORD};

mod test_signup {
    use super::*;

    #[tokio::test]
    async fn test_consumer_signup_issues_session() {
        let app = TestApp::new();
        let response = app
            .post(
                "/api/user/signup",
                json!({
                    "phone_number": "5552000001",
                    "password": TEST_PASSWORD,
                    "name": "Lakshmi",
                }),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED);
        let token = token_of(&response);
        let claims = app.codec.decode(&token).unwrap();
        assert_eq!(claims.role, Role::Consumer);
        assert_eq!(claims.phone, "5552000001");
        assert_eq!(claims.exp - claims.iat, 86_400);

        let cookie = response.session_cookie().unwrap();
        assert!(cookie.contains(&token));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
    }

    #[tokio::test]
    async fn test_password_is_stored_hashed() {
        let app = TestApp::new();
        app.signup_consumer("5552000002").await;

        let account = app.store.find_by_phone("5552000002").await.unwrap().unwrap();
        assert_ne!(account.hashed_password, TEST_PASSWORD);
        assert!(account.hashed_password.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let app = TestApp::new();
        let response = app
            .post(
                "/api/user/signup",
                json!({
                    "phone_number": "5552000003",
                    "password": "short",
                    "name": "Lakshmi",
                }),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"]["code"], "VALIDATION_ERROR");
        assert!(app.store.find_by_phone("5552000003").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected() {
        let app = TestApp::new();
        for body in [
            json!({ "password": TEST_PASSWORD, "name": "No Phone" }),
            json!({ "phone_number": "5552000004", "name": "No Password" }),
            json!({ "phone_number": "5552000004", "password": TEST_PASSWORD, "name": "" }),
        ] {
            let response = app.post("/api/user/signup", body).await;
            assert_eq!(response.status, StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_duplicate_phone_conflicts_across_roles() {
        let app = TestApp::new();
        app.signup_consumer("5552000005").await;

        let response = app
            .post(
                "/api/partner/signup",
                json!({
                    "phone_number": "5552000005",
                    "password": TEST_PASSWORD,
                    "name": "Second",
                    "driving_license": "DL",
                    "vehicle_number": "VN",
                    "vehicle_rc": "RC",
                }),
            )
            .await;

        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.json()["error"]["code"], "CONFLICT");
        assert_eq!(app.store.count_accounts(Role::Worker).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_partner_signup_requires_vehicle_details() {
        let app = TestApp::new();
        let response = app
            .post(
                "/api/partner/signup",
                json!({
                    "phone_number": "5552000006",
                    "password": TEST_PASSWORD,
                    "name": "Worker",
                    "driving_license": "DL-6",
                }),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_partner_signup_creates_worker_with_profile() {
        let app = TestApp::new();
        let token = app.signup_worker("5552000007").await;

        assert_eq!(app.codec.decode(&token).unwrap().role, Role::Worker);
        let workers = app.store.list_workers(0, 10).await.unwrap();
        assert_eq!(workers.len(), 1);
        assert_eq!(
            workers[0].worker_profile.as_ref().unwrap().driving_license,
            "DL-5552000007"
        );
    }

    #[tokio::test]
    async fn test_shop_admin_signup_creates_shop() {
        let app = TestApp::new();
        let token = app.signup_shop_admin("5552000008", "Biryani Point").await;

        let claims = app.codec.decode(&token).unwrap();
        assert_eq!(claims.role, Role::ShopAdmin);

        let shops = app.store.shops_managed_by(claims.user_id).await.unwrap();
        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].name, "Biryani Point");
        assert_eq!(shops[0].address.as_deref(), Some("7 Station Road"));
    }

    #[tokio::test]
    async fn test_shop_admin_signup_rejects_unknown_shop_type() {
        let app = TestApp::new();
        let response = app
            .post(
                "/api/shopAdmin/signup",
                json!({
                    "phone_number": "5552000009",
                    "password": TEST_PASSWORD,
                    "name": "Pharmacist",
                    "shop_name": "Meds",
                    "shop_type": "pharmacy",
                }),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(app.store.count_shops().await.unwrap(), 0);
        assert!(app.store.find_by_phone("5552000009").await.unwrap().is_none());
    }
}

mod test_login {
    use super::*;

    #[tokio::test]
    async fn test_login_with_correct_password() {
        let app = TestApp::new();
        app.signup_worker("5553000001").await;

        let response = app
            .post(
                "/api/login",
                json!({ "phone_number": "5553000001", "password": TEST_PASSWORD }),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        let claims = app.codec.decode(&token_of(&response)).unwrap();
        assert_eq!(claims.role, Role::Worker);
        assert!(response.session_cookie().is_some());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_phone_look_the_same() {
        let app = TestApp::new();
        app.signup_consumer("5553000002").await;

        let wrong_password = app
            .post(
                "/api/login",
                json!({ "phone_number": "5553000002", "password": "not-the-password" }),
            )
            .await;
        let unknown_phone = app
            .post(
                "/api/login",
                json!({ "phone_number": "5553999999", "password": TEST_PASSWORD }),
            )
            .await;

        assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown_phone.status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password.json(), unknown_phone.json());
        assert_eq!(wrong_password.json()["error"]["code"], "INVALID_CREDENTIALS");
        assert!(wrong_password.session_cookie().is_none());
    }

    #[tokio::test]
    async fn test_seeded_admin_can_log_in() {
        let app = TestApp::new();
        let (admin, _) = app.seed_admin().await;

        let response = app
            .post(
                "/api/login",
                json!({ "phone_number": admin.phone_number, "password": TEST_PASSWORD }),
            )
            .await;

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(
            app.codec.decode(&token_of(&response)).unwrap().role,
            Role::Admin
        );
    }
}
