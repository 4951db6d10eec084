//! End-to-end API tests against a live PostgreSQL.
//!
//! Requires `DB_URL`; run with `cargo test -- --ignored`. The signing
//! key is fixed in-process, so no JWT environment is needed.

use actix_http::Request;
use actix_web::App;
use actix_web::body::BoxBody;
use actix_web::dev::Service;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use actix_web::web;

const SECRET: &[u8] = b"0123456789abcdef0123456789abcdef";

async fn app() -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    let client = tsk_pg::db().await;
    tsk_server::migrate(&client).await;
    test::init_service(
        App::new()
            .app_data(web::Data::new(tsk_auth::Crypto::new(
                SECRET,
                "tasklist-tests",
                "tasklist-clients",
            )))
            .app_data(web::Data::new(client))
            .configure(tsk_server::routes),
    )
    .await
}

fn email() -> String {
    format!("user-{}@example.com", uuid::Uuid::now_v7().simple())
}

async fn register<S>(app: &S, email: &str, password: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(serde_json::json!({ "email": email, "password": password }))
        .to_request();
    test::call_service(app, req).await
}

async fn login<S>(app: &S, email: &str, password: &str) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "email": email, "password": password }))
        .to_request();
    test::call_service(app, req).await
}

async fn token_of(resp: ServiceResponse<BoxBody>) -> String {
    let body: serde_json::Value = test::read_body_json(resp).await;
    body["token"].as_str().expect("token in response").to_string()
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn register_returns_a_working_token() {
    let app = app().await;
    let resp = register(&app, &email(), "Password1").await;
    assert_eq!(resp.status(), 200);
    let token = token_of(resp).await;
    let req = test::TestRequest::get()
        .uri("/api/todos")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn register_rejects_weak_passwords_and_duplicates() {
    let app = app().await;
    let email = email();
    assert_eq!(register(&app, &email, "password").await.status(), 400);
    assert_eq!(register(&app, &email, "Password1").await.status(), 200);
    assert_eq!(register(&app, &email, "Password1").await.status(), 400);
    // duplicate detection is case-insensitive
    assert_eq!(register(&app, &email.to_uppercase(), "Password1").await.status(), 400);
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn concurrent_registration_yields_one_winner() {
    let app = app().await;
    let email = email();
    let (a, b) = tokio::join!(
        register(&app, &email, "Password1"),
        register(&app, &email, "Password1")
    );
    let mut statuses = [a.status().as_u16(), b.status().as_u16()];
    statuses.sort();
    assert_eq!(statuses, [200, 400]);
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn login_failure_is_uniform() {
    let app = app().await;
    let email = email();
    register(&app, &email, "Password1").await;
    let unknown = login(&app, "nobody@example.com", "Password1").await;
    let wrong = login(&app, &email, "Password2").await;
    assert_eq!(unknown.status(), 401);
    assert_eq!(wrong.status(), 401);
    let unknown = test::read_body(unknown).await;
    let wrong = test::read_body(wrong).await;
    assert_eq!(unknown, wrong);
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn protected_routes_require_a_valid_token() {
    let app = app().await;
    let bare = test::TestRequest::get().uri("/api/todos").to_request();
    assert_eq!(test::call_service(&app, bare).await.status(), 401);
    let garbage = test::TestRequest::get()
        .uri("/api/todos")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    assert_eq!(test::call_service(&app, garbage).await.status(), 401);
    let malformed = test::TestRequest::get()
        .uri("/api/todos")
        .insert_header(("Authorization", "Basic abc"))
        .to_request();
    assert_eq!(test::call_service(&app, malformed).await.status(), 401);
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn todos_are_invisible_across_owners() {
    let app = app().await;
    let alice = token_of(register(&app, &email(), "Password1").await).await;
    let bob = token_of(register(&app, &email(), "Password1").await).await;

    // alice creates a todo
    let req = test::TestRequest::post()
        .uri("/api/todos")
        .insert_header(("Authorization", format!("Bearer {}", alice)))
        .set_json(serde_json::json!({ "name": "Buy milk" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Buy milk");
    assert_eq!(created["isComplete"], false);
    assert!(created["ownerId"].is_string());

    // bob cannot see it
    let req = test::TestRequest::get()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", bob)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    // bob cannot delete it
    let req = test::TestRequest::delete()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", bob)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);

    // still present for alice
    let req = test::TestRequest::get()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", alice)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let stored: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(stored["name"], "Buy milk");
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn update_and_delete_lifecycle() {
    let app = app().await;
    let token = token_of(register(&app, &email(), "Password1").await).await;
    let req = test::TestRequest::post()
        .uri("/api/todos")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "Buy milk" }))
        .to_request();
    let created: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    // name policy applies to updates too
    let req = test::TestRequest::put()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "", "isComplete": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::put()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "Buy oat milk", "isComplete": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let stored: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(stored["name"], "Buy oat milk");
    assert_eq!(stored["isComplete"], true);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/api/todos/{}", id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn create_rejects_invalid_names() {
    let app = app().await;
    let token = token_of(register(&app, &email(), "Password1").await).await;
    for name in ["", "   ", &"x".repeat(101)] {
        let req = test::TestRequest::post()
            .uri("/api/todos")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({ "name": name }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}

#[actix_web::test]
#[ignore = "requires DB_URL"]
async fn update_of_missing_todo_is_not_found_even_when_invalid() {
    let app = app().await;
    let token = token_of(register(&app, &email(), "Password1").await).await;
    let req = test::TestRequest::put()
        .uri(&format!("/api/todos/{}", i64::MAX))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "name": "", "isComplete": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 404);
}
