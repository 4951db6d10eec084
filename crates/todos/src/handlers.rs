use super::*;
use tsk_auth::Auth;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use std::sync::Arc;
use tokio_postgres::Client;

fn fault(e: tsk_pg::PgErr) -> HttpResponse {
    log::error!("database fault: {}", e);
    HttpResponse::InternalServerError().finish()
}

fn invalid(messages: Vec<&str>) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "errors": { "name": messages } }))
}

pub async fn index(db: web::Data<Arc<Client>>, auth: Auth) -> impl Responder {
    match db.list(auth.owner()).await {
        Ok(todos) => HttpResponse::Ok().json(todos.iter().map(TodoView::from).collect::<Vec<_>>()),
        Err(e) => fault(e),
    }
}

pub async fn show(db: web::Data<Arc<Client>>, auth: Auth, path: web::Path<i64>) -> impl Responder {
    match db.find(auth.owner(), path.into_inner()).await {
        Ok(Some(todo)) => HttpResponse::Ok().json(TodoView::from(&todo)),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => fault(e),
    }
}

pub async fn create(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    req: web::Json<TodoRequest>,
) -> impl Responder {
    let violations = violations(&req.name);
    if !violations.is_empty() {
        return invalid(violations);
    }
    match db.create(auth.owner(), &req.name, req.is_complete).await {
        Ok(todo) => HttpResponse::Created()
            .insert_header(("Location", format!("/api/todos/{}", todo.id())))
            .json(TodoView::from(&todo)),
        Err(e) => fault(e),
    }
}

pub async fn update(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    path: web::Path<i64>,
    req: web::Json<TodoRequest>,
) -> impl Responder {
    let id = path.into_inner();
    // not-found takes precedence over validation; the UPDATE below
    // remains the atomic authority on ownership
    match db.find(auth.owner(), id).await {
        Ok(Some(_)) => {}
        Ok(None) => return HttpResponse::NotFound().finish(),
        Err(e) => return fault(e),
    }
    let violations = violations(&req.name);
    if !violations.is_empty() {
        return invalid(violations);
    }
    match db.update(auth.owner(), id, &req.name, req.is_complete).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().finish(),
        Err(e) => fault(e),
    }
}

pub async fn destroy(
    db: web::Data<Arc<Client>>,
    auth: Auth,
    path: web::Path<i64>,
) -> impl Responder {
    match db.delete(auth.owner(), path.into_inner()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().finish(),
        Err(e) => fault(e),
    }
}
