//! Common test utilities

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};

use shopcart::{build_router, AppState};

/// Signing secret used by the tests. Must be at least 32 bytes.
pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

// Every test truncates the shared database, so tests in this binary take
// this lock for their whole duration.
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Handle to the freshly reset test database. Dropping it releases the
/// database to the next test.
pub struct TestDb {
    pub pool: PgPool,
    _serial: MutexGuard<'static, ()>,
}

/// Setup test database - apply schema and truncate tables
pub async fn setup_test_db() -> TestDb {
    let serial = DB_LOCK.lock().await;

    dotenvy::dotenv().ok();
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    // Schema is idempotent; applying it here keeps the tests self-contained.
    let schema = include_str!("../../migrations/001_init.sql");
    sqlx::raw_sql(schema)
        .execute(&pool)
        .await
        .expect("Failed to apply schema");

    // Clean up DB for fresh state
    sqlx::query("TRUNCATE TABLE order_lines, orders, cart_items, customers CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to clean up DB");

    TestDb {
        pool,
        _serial: serial,
    }
}

/// Build the full application router against the test database.
pub fn test_app(pool: PgPool) -> Router {
    build_router(AppState::new(pool, TEST_JWT_SECRET))
}
