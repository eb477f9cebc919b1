//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Cannot reach the database: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Applying pending schema migrations...");
            db.run_migrations().await.map_err(migration_error)?;
            tracing::info!("Sweet shop schema is up to date");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back the last migration...");
            db.rollback_migration().await.map_err(migration_error)?;
            tracing::info!("Rollback complete");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await.map_err(migration_error)? {
                println!("{}", status_line(&name, applied));
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping and recreating the sweet shop schema...");
            db.fresh_migrations().await.map_err(migration_error)?;
            tracing::info!("Fresh schema ready");
        }
    }

    Ok(())
}

fn migration_error(e: sea_orm::DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}

fn status_line(name: &str, applied: bool) -> String {
    let state = if applied { "applied" } else { "pending" };
    format!("{}: {}", name, state)
}
