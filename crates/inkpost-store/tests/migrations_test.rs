// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    inkpost_store::db::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = inkpost_store::migrations::apply_migrations(&mut conn);

    // Then: All migrations succeed
    assert!(
        result.is_ok(),
        "Migrations should succeed: {:?}",
        result.err()
    );

    // And: The blog tables exist (sqlite_sequence comes from AUTOINCREMENT)
    let tables = get_table_names(&conn);
    for expected_table in ["schema_version", "post", "comment", "sqlite_sequence"] {
        assert!(
            tables.contains(&expected_table.to_string()),
            "Missing table: {}",
            expected_table
        );
    }
    assert_eq!(tables.len(), 4, "Unexpected tables: {:?}", tables);
}

#[test]
fn test_migration_idempotency() {
    // Given: A database with migrations already applied
    let mut conn = setup_test_db();
    inkpost_store::migrations::apply_migrations(&mut conn).unwrap();

    // When: Migrations are applied again
    let result = inkpost_store::migrations::apply_migrations(&mut conn);

    // Then: Nothing is re-applied
    assert!(result.is_ok());
    let version_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version_count, 1);
}

#[test]
fn test_migrations_record_checksums() {
    let mut conn = setup_test_db();
    inkpost_store::migrations::apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = '001_initial_schema'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(checksum.len(), 64);
}

#[test]
fn test_comment_requires_existing_post() {
    let mut conn = setup_test_db();
    inkpost_store::migrations::apply_migrations(&mut conn).unwrap();

    let result = conn.execute(
        "INSERT INTO comment (post_id, content) VALUES (999, 'orphan')",
        [],
    );
    assert!(result.is_err(), "Foreign key should reject orphan comments");
}

#[test]
fn test_schema_cascade_removes_comments() {
    let mut conn = setup_test_db();
    inkpost_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute_batch(
        "INSERT INTO post (id, title, content) VALUES (1, 'T', 'C');
         INSERT INTO comment (post_id, content) VALUES (1, 'a'), (1, 'b');
         DELETE FROM post WHERE id = 1;",
    )
    .unwrap();

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM comment", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn test_migrations_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blog.db");

    {
        let mut conn = inkpost_store::db::open(&path).unwrap();
        inkpost_store::migrations::apply_migrations(&mut conn).unwrap();
    }

    let mut conn = inkpost_store::db::open(&path).unwrap();
    inkpost_store::migrations::apply_migrations(&mut conn).unwrap();
    assert_eq!(
        inkpost_store::migrations::applied_migrations(&conn).unwrap(),
        vec!["001_initial_schema".to_string()]
    );
}
