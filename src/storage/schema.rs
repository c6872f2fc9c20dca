/// Tables of a brand new database. Later changes go in `MIGRATIONS`.
pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS kv_store (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
"#;

/// `(from_version, sql)` steps, each raising the schema by one version.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];

pub(crate) const CURRENT_VERSION: i32 = 1 + MIGRATIONS.len() as i32;
