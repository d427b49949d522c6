use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;

// The EMP data source. Connection details come from the environment, never
// from this code; a missing DATABASE_URL fails the process at startup.
pub async fn create_pool() -> PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await
        .expect("Failed to connect to the database")
}
