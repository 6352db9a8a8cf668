use anyhow::{Context, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use tracing::{debug, error, info, trace};

/// File path of a SQLite URL, `None` for other backends and in-memory databases.
fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.trim_start_matches("//");
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(Path::new(path))
}

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    if let Some(parent) = sqlite_file_path(database_url).and_then(Path::parent) {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating database directory {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    trace!("Attempting to connect to database");
    let db: DatabaseConnection = match Database::connect(database_url).await {
        Ok(connection) => {
            info!("Successfully connected to database");
            connection
        }
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };

    info!("Running database migrations");
    match Migrator::up(&db, None).await {
        Ok(_) => {
            info!("Database migrations completed successfully");
        }
        Err(e) => {
            error!("Failed to run database migrations: {}", e);
            return Err(e.into());
        }
    }

    info!("Database initialization completed successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite:///var/lib/carbonpace/db.sqlite?mode=rwc"),
            Some(Path::new("/var/lib/carbonpace/db.sqlite"))
        );
        assert_eq!(
            sqlite_file_path("sqlite://carbonpace.db"),
            Some(Path::new("carbonpace.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgresql://localhost/carbonpace"), None);
    }

    #[tokio::test]
    async fn test_init_database_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("carbonpace.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());

        init_database(&url).await.unwrap();

        assert!(db_path.exists());
        // running again is a no-op
        init_database(&url).await.unwrap();
    }
}
