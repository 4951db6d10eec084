use super::Todo;
use tsk_auth::Member;
use tsk_core::ID;
use tsk_pg::*;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;

/// Repository trait for owner-scoped todo operations.
///
/// Every statement carries `owner_id` in its predicate, so absence and
/// foreign ownership produce the same observable outcome. Update and
/// delete are single statements: the ownership check and the write are
/// one atomic unit at the database, and an affected-row count of zero
/// means not-found with nothing mutated.
#[allow(async_fn_in_trait)]
pub trait TodoRepository {
    async fn list(&self, owner: ID<Member>) -> Result<Vec<Todo>, PgErr>;
    async fn find(&self, owner: ID<Member>, id: i64) -> Result<Option<Todo>, PgErr>;
    async fn create(&self, owner: ID<Member>, name: &str, complete: bool) -> Result<Todo, PgErr>;
    async fn update(
        &self,
        owner: ID<Member>,
        id: i64,
        name: &str,
        complete: bool,
    ) -> Result<bool, PgErr>;
    async fn delete(&self, owner: ID<Member>, id: i64) -> Result<bool, PgErr>;
}

fn hydrate(row: &Row) -> Todo {
    Todo::new(
        row.get::<_, i64>(0),
        row.get::<_, String>(1),
        row.get::<_, bool>(2),
        row.get::<_, Option<uuid::Uuid>>(3).map(ID::from),
    )
}

impl TodoRepository for Arc<Client> {
    async fn list(&self, owner: ID<Member>) -> Result<Vec<Todo>, PgErr> {
        self.query(
            const_format::concatcp!(
                "SELECT id, name, complete, owner_id FROM ",
                TODOS,
                " WHERE owner_id = $1 ORDER BY id"
            ),
            &[&owner.inner()],
        )
        .await
        .map(|rows| rows.iter().map(hydrate).collect())
    }

    async fn find(&self, owner: ID<Member>, id: i64) -> Result<Option<Todo>, PgErr> {
        self.query_opt(
            const_format::concatcp!(
                "SELECT id, name, complete, owner_id FROM ",
                TODOS,
                " WHERE id = $1 AND owner_id = $2"
            ),
            &[&id, &owner.inner()],
        )
        .await
        .map(|opt| opt.as_ref().map(hydrate))
    }

    async fn create(&self, owner: ID<Member>, name: &str, complete: bool) -> Result<Todo, PgErr> {
        self.query_one(
            const_format::concatcp!(
                "INSERT INTO ",
                TODOS,
                " (name, complete, owner_id) VALUES ($1, $2, $3) RETURNING id, name, complete, owner_id"
            ),
            &[&name, &complete, &owner.inner()],
        )
        .await
        .map(|row| hydrate(&row))
    }

    async fn update(
        &self,
        owner: ID<Member>,
        id: i64,
        name: &str,
        complete: bool,
    ) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!(
                "UPDATE ",
                TODOS,
                " SET name = $3, complete = $4 WHERE id = $1 AND owner_id = $2"
            ),
            &[&id, &owner.inner(), &name, &complete],
        )
        .await
        .map(|rows| rows == 1)
    }

    async fn delete(&self, owner: ID<Member>, id: i64) -> Result<bool, PgErr> {
        self.execute(
            const_format::concatcp!("DELETE FROM ", TODOS, " WHERE id = $1 AND owner_id = $2"),
            &[&id, &owner.inner()],
        )
        .await
        .map(|rows| rows == 1)
    }
}
