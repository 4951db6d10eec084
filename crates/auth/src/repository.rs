use super::*;
use tsk_core::ID;
use tsk_core::Unique;
use tsk_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;

/// Repository trait for credential database operations.
/// Abstracts SQL from domain modules. Email matching is
/// case-insensitive throughout, backed by the LOWER(email) index;
/// create surfaces a duplicate as the index's unique-violation error.
#[allow(async_fn_in_trait)]
pub trait CredentialRepository {
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), PgErr>;
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, PgErr>;
}

impl CredentialRepository for Arc<Client> {
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), PgErr> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                USERS,
                " (id, email, hashword) VALUES ($1, $2, $3)"
            ),
            &[&member.id().inner(), &member.email(), &hashword],
        )
        .await
        .map(|_| ())
    }

    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, email, hashword FROM ",
                USERS,
                " WHERE LOWER(email) = LOWER($1)"
            ),
            &[&email],
        )
        .await
        .map(|opt| {
            opt.map(|row| {
                (
                    Member::new(
                        ID::from(row.get::<_, uuid::Uuid>(0)),
                        row.get::<_, String>(1),
                    ),
                    row.get::<_, String>(2),
                )
            })
        })
    }
}
