// Schema bootstrap, idempotent on every start

mod sqlite;
pub use sqlite::run_migrations as run_sqlite_migrations;
