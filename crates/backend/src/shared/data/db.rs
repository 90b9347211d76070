use std::path::Path;

use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Один документ = одна строка; тело записи хранится как JSON
const CREATE_DOCUMENTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS documents (
        id TEXT PRIMARY KEY NOT NULL,
        collection TEXT NOT NULL,
        code TEXT NOT NULL DEFAULT '',
        data_json TEXT NOT NULL,
        is_deleted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT,
        updated_at TEXT
    );
"#;

const CREATE_COLLECTION_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_documents_collection
        ON documents (collection, is_deleted);
"#;

/// Номер документа уникален внутри коллекции
const CREATE_CODE_UNIQUE_INDEX: &str = r#"
    CREATE UNIQUE INDEX IF NOT EXISTS idx_documents_collection_code
        ON documents (collection, code)
        WHERE code <> '';
"#;

pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Открывает (или создаёт) файл базы и приводит схему к актуальной
pub async fn open_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for sql in [
        CREATE_DOCUMENTS_TABLE,
        CREATE_COLLECTION_INDEX,
        CREATE_CODE_UNIQUE_INDEX,
    ] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(conn)
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    let conn = open_database(db_file).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/var/lib/billing/app.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/billing/app.db?mode=rwc");
    }

    #[test]
    fn test_sqlite_url_resolves_relative_path() {
        let url = sqlite_url(Path::new("target/db/app.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("target/db/app.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_open_database_creates_folder_and_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let db_file = dir.path().join("nested").join("billing.db");

        open_database(&db_file).await.unwrap();
        assert!(db_file.exists());
        open_database(&db_file).await.unwrap();
    }
}
