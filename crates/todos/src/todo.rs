use tsk_auth::Member;
use tsk_core::ID;

/// Task record. The id is assigned by the database (BIGSERIAL, unique
/// and monotonic); the owner is stamped at creation and never
/// reassigned. A NULL owner marks a legacy orphan, unreachable through
/// any authenticated operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: i64,
    name: String,
    complete: bool,
    owner: Option<ID<Member>>,
}

impl Todo {
    pub fn new(id: i64, name: String, complete: bool, owner: Option<ID<Member>>) -> Self {
        Self {
            id,
            name,
            complete,
            owner,
        }
    }
    pub fn id(&self) -> i64 {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn complete(&self) -> bool {
        self.complete
    }
    pub fn owner(&self) -> Option<ID<Member>> {
        self.owner
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use tsk_pg::*;

    /// Schema implementation for Todo (todos table).
    /// BIGSERIAL hands id generation to the database; no in-process
    /// counter exists anywhere.
    impl Schema for Todo {
        fn name() -> &'static str {
            TODOS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                TODOS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    name        VARCHAR(100) NOT NULL,
                    complete    BOOLEAN NOT NULL DEFAULT FALSE,
                    owner_id    UUID REFERENCES ",
                USERS,
                "(id)
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_todos_owner ON ",
                TODOS,
                " (owner_id);"
            )
        }
    }
}
