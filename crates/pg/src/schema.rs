use tokio_postgres::Client;

/// Schema metadata for PostgreSQL tables.
///
/// Provides compile-time SQL generation for table creation and indexing.
/// All methods return `&'static str` to avoid runtime allocations and
/// enable compile-time string construction via `const_format::concatcp!`.
///
/// # Design
///
/// This trait contains no I/O operations—it purely describes table
/// structure. Execution happens once at startup through [`migrate`].
pub trait Schema {
    /// Returns the table name in the database.
    fn name() -> &'static str;
    /// Returns `CREATE TABLE IF NOT EXISTS` DDL statement.
    fn creates() -> &'static str;
    /// Returns `CREATE INDEX IF NOT EXISTS` statements for all indices.
    fn indices() -> &'static str;
}

/// Executes a schema's DDL. Safe to run on every boot: all statements
/// are `IF NOT EXISTS`.
pub async fn migrate<S>(client: &Client) -> Result<(), super::PgErr>
where
    S: Schema,
{
    log::info!("migrating table {}", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await?;
    Ok(())
}
