use super::*;
use tsk_core::ID;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

/// Database faults are logged server-side and answered with an empty
/// 500 body. Internals never cross the boundary.
fn fault(e: tsk_pg::PgErr) -> HttpResponse {
    log::error!("database fault: {}", e);
    HttpResponse::InternalServerError().finish()
}

fn invalid(field: &str, messages: Vec<&str>) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "errors": { field: messages } }))
}

pub async fn register(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if req.email.is_empty() || req.email.len() > 254 || !req.email.contains('@') {
        return invalid("email", vec!["email address is not valid"]);
    }
    let weaknesses = password::weaknesses(&req.password);
    if !weaknesses.is_empty() {
        return invalid("password", weaknesses);
    }
    let hashword = match password::hash(&req.password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("password hashing failed: {}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };
    // uniqueness is decided by the INSERT alone: the LOWER(email) index
    // is the sole authority, so concurrent registrations cannot race
    // past a separate pre-check
    let member = Member::new(ID::default(), req.email.clone());
    if let Err(e) = db.create(&member, &hashword).await {
        return match e.code() {
            Some(c) if *c == tokio_postgres::error::SqlState::UNIQUE_VIOLATION => {
                invalid("email", vec!["email is already registered"])
            }
            _ => fault(e),
        };
    }
    // registration implies an authenticated session
    match tokens.issue(&member) {
        Ok(token) => HttpResponse::Ok().json(AuthResponse { token }),
        Err(e) => {
            log::error!("token signing failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> impl Responder {
    // unknown email and wrong password are indistinguishable to callers
    let (member, hashword) = match db.lookup(&req.email).await {
        Ok(Some(row)) => row,
        Ok(None) => return HttpResponse::Unauthorized().body("invalid credentials"),
        Err(e) => return fault(e),
    };
    if !password::verify(&req.password, &hashword) {
        return HttpResponse::Unauthorized().body("invalid credentials");
    }
    match tokens.issue(&member) {
        Ok(token) => HttpResponse::Ok().json(AuthResponse { token }),
        Err(e) => {
            log::error!("token signing failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
