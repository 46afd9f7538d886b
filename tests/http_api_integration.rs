//! Integration tests for the HTTP API.
//!
//! Builds the real router over in-memory adapters and drives it with
//! tower's oneshot, covering the login, map, admin and webhook flows
//! end to end.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use hmac::{Hmac, Mac};
use secrecy::SecretString;
use serde_json::{json, Value};
use sha2::Sha256;
use tower::ServiceExt;

use karmic_matrix::adapters::auth::JwtSessionService;
use karmic_matrix::adapters::http::{
    build_router, AdminHandlers, AuthHandlers, AuthState, MapHandlers, WebhookHandlers,
};
use karmic_matrix::adapters::memory::{
    InMemoryEmailRepository, InMemoryInterpretationRepository, InMemoryMapRepository,
};
use karmic_matrix::application::handlers::admin::{
    EditInterpretationsHandler, ManageEmailsHandler,
};
use karmic_matrix::application::handlers::auth::LoginHandler;
use karmic_matrix::application::handlers::map::{
    GenerateMapHandler, GetMapHandler, ListMapsHandler,
};
use karmic_matrix::application::handlers::webhook::ProcessOrderEventHandler;
use karmic_matrix::config::ServerConfig;
use karmic_matrix::domain::access::AllowedEmail;
use karmic_matrix::domain::foundation::EmailAddress;
use karmic_matrix::domain::orders::{OrderAccessPolicy, YampiWebhookVerifier};
use karmic_matrix::ports::{
    AllowedEmailRepository, InterpretationRepository, MapRepository, SessionIssuer,
};

const JWT_SECRET: &str = "integration-test-secret-32-bytes!";
const YAMPI_SECRET: &str = "yampi-integration-secret";

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn build_test_app() -> Router {
    let emails: Arc<dyn AllowedEmailRepository> = Arc::new(InMemoryEmailRepository::new());
    let maps: Arc<dyn MapRepository> = Arc::new(InMemoryMapRepository::new());
    let interpretations: Arc<dyn InterpretationRepository> =
        Arc::new(InMemoryInterpretationRepository::new());

    emails
        .upsert(&AllowedEmail::manual(
            EmailAddress::new("maria@example.com").unwrap(),
            false,
        ))
        .await
        .unwrap();
    emails
        .upsert(&AllowedEmail::manual(
            EmailAddress::new("admin@matrizcarmica.com").unwrap(),
            true,
        ))
        .await
        .unwrap();

    let sessions = Arc::new(JwtSessionService::new(
        SecretString::new(JWT_SECRET.to_string()),
        3600,
        emails.clone(),
    ));
    let issuer: Arc<dyn SessionIssuer> = sessions.clone();
    let validator: AuthState = sessions;

    let auth_handlers = AuthHandlers::new(Arc::new(LoginHandler::new(emails.clone(), issuer)));
    let map_handlers = MapHandlers::new(
        Arc::new(GenerateMapHandler::new(maps.clone(), interpretations.clone())),
        Arc::new(GetMapHandler::new(maps.clone(), interpretations.clone())),
        Arc::new(ListMapsHandler::new(maps)),
    );
    let admin_handlers = AdminHandlers::new(
        Arc::new(ManageEmailsHandler::new(emails.clone())),
        Arc::new(EditInterpretationsHandler::new(interpretations)),
    );
    let webhook_handlers = WebhookHandlers::new(Arc::new(ProcessOrderEventHandler::new(
        YampiWebhookVerifier::new(SecretString::new(YAMPI_SECRET.to_string())),
        OrderAccessPolicy::new(["MATRIZ-2025".to_string()]),
        emails,
    )));

    build_router(
        auth_handlers,
        map_handlers,
        admin_handlers,
        webhook_handlers,
        validator,
        &ServerConfig::default(),
    )
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn login(app: &Router, email: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": email }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    body["token"].as_str().unwrap().to_string()
}

fn yampi_signature(payload: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(YAMPI_SECRET.as_bytes()).unwrap();
    mac.update(payload.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoint_responds() {
    let app = build_test_app().await;

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn listed_email_logs_in() {
    let app = build_test_app().await;

    let token = login(&app, "maria@example.com").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn unlisted_email_is_rejected() {
    let app = build_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "intrusa@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_reports_admin_flag() {
    let app = build_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "admin@matrizcarmica.com" }),
        ))
        .await
        .unwrap();

    let body = response_json(response).await;
    assert_eq!(body["isAdmin"], json!(true));
    assert_eq!(body["email"], json!("admin@matrizcarmica.com"));
}

// =============================================================================
// Maps
// =============================================================================

#[tokio::test]
async fn generate_map_returns_numbers_and_readings() {
    let app = build_test_app().await;
    let token = login(&app, "maria@example.com").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/maps",
            &token,
            Some(json!({ "birthDate": "15/07/1985", "variant": "personal" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;

    assert_eq!(body["numbers"]["spiritualMark"], json!(3));
    assert_eq!(body["numbers"]["destinyCall"], json!(9));
    assert_eq!(body["numbers"]["karmaPortal"], json!(4));
    assert_eq!(body["numbers"]["karmicInheritance"], json!(9));

    let readings = body["readings"].as_array().unwrap();
    assert_eq!(readings.len(), 4);
    assert_eq!(readings[0]["category"], json!("spiritualMark"));
    assert!(readings[0]["text"].as_str().unwrap().len() > 10);
}

#[tokio::test]
async fn generate_map_requires_authentication() {
    let app = build_test_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/maps",
            json!({ "birthDate": "15/07/1985" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn generate_map_rejects_invalid_date() {
    let app = build_test_app().await;
    let token = login(&app, "maria@example.com").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/maps",
            &token,
            Some(json!({ "birthDate": "31/02/1985" })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generated_map_is_listed_and_fetchable() {
    let app = build_test_app().await;
    let token = login(&app, "maria@example.com").await;

    let created = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/maps",
            &token,
            Some(json!({ "birthDate": "05/07/1990", "variant": "love" })),
        ))
        .await
        .unwrap();
    let created_body = response_json(created).await;
    let map_id = created_body["id"].as_str().unwrap().to_string();

    let listed = app
        .clone()
        .oneshot(authed_request("GET", "/api/maps", &token, None))
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
    let listed_body = response_json(listed).await;
    assert_eq!(listed_body.as_array().unwrap().len(), 1);

    let fetched = app
        .clone()
        .oneshot(authed_request(
            "GET",
            &format!("/api/maps/{}", map_id),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched_body = response_json(fetched).await;
    assert_eq!(fetched_body["birthDate"], json!("05/07/1990"));
    assert_eq!(fetched_body["variant"], json!("love"));
}

#[tokio::test]
async fn map_of_another_user_is_forbidden() {
    let app = build_test_app().await;
    let maria = login(&app, "maria@example.com").await;

    let created = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/maps",
            &maria,
            Some(json!({ "birthDate": "15/07/1985" })),
        ))
        .await
        .unwrap();
    let map_id = response_json(created).await["id"].as_str().unwrap().to_string();

    // The admin account is a different user but may inspect any map;
    // add a second plain member to exercise the forbidden path.
    let admin = login(&app, "admin@matrizcarmica.com").await;
    app.clone()
        .oneshot(authed_request(
            "POST",
            "/api/admin/emails",
            &admin,
            Some(json!({ "email": "joao@example.com" })),
        ))
        .await
        .unwrap();
    let joao = login(&app, "joao@example.com").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "GET",
            &format!("/api/maps/{}", map_id),
            &joao,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// =============================================================================
// Admin panel
// =============================================================================

#[tokio::test]
async fn plain_member_cannot_use_admin_panel() {
    let app = build_test_app().await;
    let token = login(&app, "maria@example.com").await;

    let response = app
        .clone()
        .oneshot(authed_request("GET", "/api/admin/emails", &token, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_adds_email_and_new_user_logs_in() {
    let app = build_test_app().await;
    let admin = login(&app, "admin@matrizcarmica.com").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/admin/emails",
            &admin,
            Some(json!({ "email": "nova@example.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let token = login(&app, "nova@example.com").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn admin_revokes_email_and_login_stops_working() {
    let app = build_test_app().await;
    let admin = login(&app, "admin@matrizcarmica.com").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "DELETE",
            "/api/admin/emails",
            &admin,
            Some(json!({ "email": "maria@example.com" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let login_attempt = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "maria@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(login_attempt.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn revoked_email_loses_access_with_live_token() {
    let app = build_test_app().await;
    let maria = login(&app, "maria@example.com").await;
    let admin = login(&app, "admin@matrizcarmica.com").await;

    app.clone()
        .oneshot(authed_request(
            "DELETE",
            "/api/admin/emails",
            &admin,
            Some(json!({ "email": "maria@example.com" })),
        ))
        .await
        .unwrap();

    // Maria still holds a token that has not expired, but the allow-list
    // re-check on every request shuts her out immediately.
    let response = app
        .clone()
        .oneshot(authed_request("GET", "/api/maps", &maria, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_override_changes_map_reading() {
    let app = build_test_app().await;
    let admin = login(&app, "admin@matrizcarmica.com").await;

    // 15/07/1985 yields spiritualMark = 3.
    let response = app
        .clone()
        .oneshot(authed_request(
            "PUT",
            "/api/admin/interpretations",
            &admin,
            Some(json!({
                "variant": "personal",
                "category": "spiritualMark",
                "number": 3,
                "text": "Texto revisado pela equipe."
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let maria = login(&app, "maria@example.com").await;
    let map = app
        .clone()
        .oneshot(authed_request(
            "POST",
            "/api/maps",
            &maria,
            Some(json!({ "birthDate": "15/07/1985", "variant": "personal" })),
        ))
        .await
        .unwrap();
    let body = response_json(map).await;

    assert_eq!(body["readings"][0]["text"], json!("Texto revisado pela equipe."));
}

#[tokio::test]
async fn admin_rejects_number_outside_vocabulary() {
    let app = build_test_app().await;
    let admin = login(&app, "admin@matrizcarmica.com").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            "PUT",
            "/api/admin/interpretations",
            &admin,
            Some(json!({
                "variant": "personal",
                "category": "spiritualMark",
                "number": 10,
                "text": "inválido"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Yampi webhook
// =============================================================================

fn order_payload(event: &str, email: &str, sku: &str) -> String {
    json!({
        "event": event,
        "resource": {
            "id": 555,
            "customer": { "email": email },
            "items": [{ "sku": sku, "quantity": 1 }]
        }
    })
    .to_string()
}

fn webhook_request(payload: &str, signature: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/webhooks/yampi")
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(signature) = signature {
        builder = builder.header("X-Yampi-Hmac-SHA256", signature);
    }

    builder.body(Body::from(payload.to_string())).unwrap()
}

#[tokio::test]
async fn paid_order_grants_login_access() {
    let app = build_test_app().await;
    let payload = order_payload("order.paid", "compradora@example.com", "MATRIZ-2025");
    let signature = yampi_signature(&payload);

    let response = app
        .clone()
        .oneshot(webhook_request(&payload, Some(&signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], json!("granted"));

    let token = login(&app, "compradora@example.com").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn refund_revokes_login_access() {
    let app = build_test_app().await;

    let paid = order_payload("order.paid", "compradora@example.com", "MATRIZ-2025");
    let paid_sig = yampi_signature(&paid);
    app.clone()
        .oneshot(webhook_request(&paid, Some(&paid_sig)))
        .await
        .unwrap();

    let refund = order_payload("order.refunded", "compradora@example.com", "MATRIZ-2025");
    let refund_sig = yampi_signature(&refund);
    let response = app
        .clone()
        .oneshot(webhook_request(&refund, Some(&refund_sig)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let login_attempt = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "compradora@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(login_attempt.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn webhook_without_signature_is_rejected() {
    let app = build_test_app().await;
    let payload = order_payload("order.paid", "compradora@example.com", "MATRIZ-2025");

    let response = app
        .oneshot(webhook_request(&payload, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn webhook_with_bad_signature_is_rejected() {
    let app = build_test_app().await;
    let payload = order_payload("order.paid", "compradora@example.com", "MATRIZ-2025");
    let tampered = payload.replace("compradora", "atacante");

    let response = app
        .clone()
        .oneshot(webhook_request(&tampered, Some(&yampi_signature(&payload))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let login_attempt = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({ "email": "atacante@example.com" }),
        ))
        .await
        .unwrap();
    assert_eq!(login_attempt.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unrelated_sku_is_acknowledged_but_ignored() {
    let app = build_test_app().await;
    let payload = order_payload("order.paid", "curiosa@example.com", "EBOOK-TAROT");
    let signature = yampi_signature(&payload);

    let response = app
        .clone()
        .oneshot(webhook_request(&payload, Some(&signature)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], json!("ignored"));
}
