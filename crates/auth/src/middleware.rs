use super::*;
use tsk_core::ID;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use std::future::Future;
use std::pin::Pin;

/// Extractor for authenticated requests.
///
/// Validates the bearer token — signature, issuer, audience, and
/// expiry must all hold — and exposes the subject claim as the caller's
/// identity for exactly this request. Validation is stateless: no
/// lookup, no caching across requests. Protected handlers take `Auth`
/// as a parameter and are never reached on failure.
pub struct Auth(pub Claims);

impl Auth {
    pub fn claims(&self) -> &Claims {
        &self.0
    }
    pub fn owner(&self) -> ID<Member> {
        self.0.owner()
    }
}

impl FromRequest for Auth {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let tokens = req.app_data::<web::Data<Crypto>>().cloned();
        let header = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_owned());
        Box::pin(async move {
            let header = header.ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("missing authorization header")
            })?;
            let token = header.strip_prefix("Bearer ").ok_or_else(|| {
                actix_web::error::ErrorUnauthorized("invalid authorization format")
            })?;
            let tokens = tokens.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("token service not configured")
            })?;
            let claims = tokens
                .decode(token)
                .map_err(|_| actix_web::error::ErrorUnauthorized("invalid token"))?;
            if claims.expired() {
                return Err(actix_web::error::ErrorUnauthorized("token expired"));
            }
            Ok(Auth(claims))
        })
    }
}
