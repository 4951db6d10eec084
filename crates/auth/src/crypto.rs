use super::*;

/// Fixed lifetime of issued tokens. There is no refresh or revocation:
/// once minted, a token is trusted until it expires.
const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(8 * 60 * 60);

/// Minimum length of the symmetric signing secret, in bytes.
const SECRET_MIN_BYTES: usize = 32;

/// JWT signing and verification.
///
/// Holds the symmetric key pair and a validation policy requiring
/// signature, issuer, audience, and expiry to all hold. Any single
/// failure rejects the token whole.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
    issuer: String,
    audience: String,
}

impl Crypto {
    /// Panics if the secret is under [`SECRET_MIN_BYTES`] or either
    /// claim value is empty. Misconfiguration aborts startup rather
    /// than serving with a guessable key.
    pub fn new(secret: &[u8], issuer: &str, audience: &str) -> Self {
        assert!(
            secret.len() >= SECRET_MIN_BYTES,
            "JWT secret must be at least {} bytes",
            SECRET_MIN_BYTES
        );
        assert!(!issuer.is_empty(), "JWT issuer must not be empty");
        assert!(!audience.is_empty(), "JWT audience must not be empty");
        let mut validation = jsonwebtoken::Validation::default();
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.to_string(),
            audience: audience.to_string(),
        }
    }
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let issuer = std::env::var("JWT_ISSUER").expect("JWT_ISSUER must be set");
        let audience = std::env::var("JWT_AUDIENCE").expect("JWT_AUDIENCE must be set");
        Self::new(secret.as_bytes(), &issuer, &audience)
    }
    /// Mints a signed token asserting the member's identity.
    pub fn issue(&self, member: &Member) -> Result<String, jsonwebtoken::errors::Error> {
        self.encode(&Claims::new(member, &self.issuer, &self.audience))
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
    pub const fn duration() -> std::time::Duration {
        TOKEN_DURATION
    }
}
