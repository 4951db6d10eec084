use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::SaltString;

fn salt() -> SaltString {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes).expect("salt")
}

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt())
        .map(|h| h.to_string())
}

pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .ok()
        .as_ref()
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), hash)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Strength policy for new passwords: minimum length, mixed case, and a
/// digit are required; special characters are optional. Returns one
/// message per violated rule, empty when the password is acceptable.
pub fn weaknesses(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if password.len() < 8 {
        violations.push("password must be at least 8 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        violations.push("password must contain a lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        violations.push("password must contain an uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push("password must contain a digit");
    }
    violations
}
