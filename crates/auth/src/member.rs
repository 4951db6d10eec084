use tsk_core::ID;
use tsk_core::Unique;

/// Registered account with verified credentials.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    email: String,
}

impl Member {
    pub fn new(id: ID<Self>, email: String) -> Self {
        Self { id, email }
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use tsk_pg::*;

    /// Schema implementation for Member (users table).
    /// Note: hashword is a database-only field, not part of Member domain type.
    /// Email uniqueness is case-insensitive, enforced by the LOWER index.
    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          UUID PRIMARY KEY,
                    email       VARCHAR(255) NOT NULL,
                    hashword    TEXT NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON ",
                USERS,
                " (LOWER(email));"
            )
        }
    }
}
