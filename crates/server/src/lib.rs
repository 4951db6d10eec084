//! Tasklist API server.
//!
//! Composes the auth and todo crates into a single actix-web
//! application: token issuance under `/api/auth`, owner-scoped todo
//! CRUD under `/api/todos`, and a database health probe.
//!
//! Startup is fail-fast: a missing `DB_URL`, `BIND_ADDR`, or JWT
//! configuration aborts the process before any request is served.

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

async fn health(client: web::Data<Arc<Client>>) -> impl Responder {
    match client
        .execute("SELECT 1", &[])
        .await
        .inspect_err(|e| log::error!("health check failed: {}", e))
    {
        Ok(_) => HttpResponse::Ok().body("ok"),
        Err(_) => HttpResponse::ServiceUnavailable().body("database unavailable"),
    }
}

/// Route table, shared between [`run`] and integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(tsk_auth::register))
                .route("/login", web::post().to(tsk_auth::login)),
        )
        .service(
            web::scope("/api/todos")
                .route("", web::get().to(tsk_todos::index))
                .route("", web::post().to(tsk_todos::create))
                .route("/{id}", web::get().to(tsk_todos::show))
                .route("/{id}", web::put().to(tsk_todos::update))
                .route("/{id}", web::delete().to(tsk_todos::destroy)),
        );
}

/// Runs idempotent DDL for every table the server touches.
pub async fn migrate(client: &Client) {
    tsk_pg::migrate::<tsk_auth::Member>(client)
        .await
        .expect("migrate users table");
    tsk_pg::migrate::<tsk_todos::Todo>(client)
        .await
        .expect("migrate todos table");
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let client = tsk_pg::db().await;
    migrate(&client).await;
    let crypto = web::Data::new(tsk_auth::Crypto::from_env());
    let client = web::Data::new(client);
    log::info!("starting tasklist server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(client.clone())
            .configure(routes)
    })
    .workers(6)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
