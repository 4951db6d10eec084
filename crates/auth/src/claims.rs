use super::*;
use tsk_core::ID;
use tsk_core::Unique;

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub jti: uuid::Uuid,
    pub sub: uuid::Uuid,
    pub email: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(member: &Member, issuer: &str, audience: &str) -> Self {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time")
            .as_secs() as i64;
        Self {
            jti: uuid::Uuid::now_v7(),
            sub: member.id().inner(),
            email: member.email().to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp
            < std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time")
                .as_secs() as i64
    }
    pub fn owner(&self) -> ID<Member> {
        ID::from(self.sub)
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}
