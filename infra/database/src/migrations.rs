use crate::error::{DatabaseError, DatabaseErrorExt};
use fxhash::FxHashSet;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::types::SurrealValue;

/// Underwriting schema: the three relations of the intake flow plus the
/// seeded coverage catalog. Seeds use UPSERT so re-running is harmless.
const UNDERWRITING_SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS migration SCHEMALESS;

    DEFINE TABLE IF NOT EXISTS request SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS title ON request TYPE string;

    DEFINE TABLE IF NOT EXISTS request_type SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS request ON request_type TYPE string;
    DEFINE FIELD IF NOT EXISTS coverage ON request_type TYPE int;
    DEFINE FIELD IF NOT EXISTS budget ON request_type TYPE float;

    DEFINE TABLE IF NOT EXISTS coverage SCHEMAFULL;
    DEFINE FIELD IF NOT EXISTS title ON coverage TYPE string;
    DEFINE FIELD IF NOT EXISTS profit_coefficient ON coverage TYPE float;

    UPSERT coverage:1 SET title = 'Surgery', profit_coefficient = 0.0052;
    UPSERT coverage:2 SET title = 'Dentistry', profit_coefficient = 0.0042;
    UPSERT coverage:3 SET title = 'Hospitalization', profit_coefficient = 0.0050;
";

#[derive(Debug)]
pub(crate) struct Migration {
    pub slice: &'static str,
    pub version: &'static str,
    pub script: &'static str,
}

impl Migration {
    fn key(&self) -> String {
        format!("{}:{}", self.slice, self.version)
    }
}

/// Migrations shipped with the binary, in application order.
const BUILTIN: &[Migration] =
    &[Migration { slice: "underwriting", version: "0001", script: UNDERWRITING_SCHEMA }];

#[derive(Debug, Default)]
pub(crate) struct MigrationReport {
    pub applied: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, SurrealValue)]
struct AppliedMigration {
    slice: String,
    version: String,
}

#[derive(Debug)]
pub(crate) struct MigrationRunner {
    db: Surreal<Any>,
}

impl MigrationRunner {
    #[must_use]
    pub(crate) const fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub(crate) async fn run(&self) -> Result<MigrationReport, DatabaseError> {
        let mut report = MigrationReport::default();
        let applied = self.applied_set().await?;

        for migration in BUILTIN {
            if applied.contains(&migration.key()) {
                report.skipped.push(migration.key());
                continue;
            }

            self.apply_migration(migration).await?;
            report.applied.push(migration.key());
        }

        Ok(report)
    }

    /// Runs the migration script and records it in the `migration` table,
    /// both inside one transaction.
    async fn apply_migration(&self, migration: &Migration) -> Result<(), DatabaseError> {
        let query = format!(
            "BEGIN TRANSACTION;
            {}
            CREATE migration SET slice = $slice, version = $version, applied_at = time::now();
            COMMIT TRANSACTION;",
            migration.script,
        );

        self.db
            .query(&query)
            .bind(("slice", migration.slice))
            .bind(("version", migration.version))
            .await
            .context(format!("SQL execution failed at {}", migration.key()))?
            .check()
            .map_err(surrealdb::Error::from)?;

        Ok(())
    }

    async fn applied_set(&self) -> Result<FxHashSet<String>, DatabaseError> {
        let entries = self
            .db
            .query("SELECT slice, version FROM migration")
            .await
            .context("Loading applied migrations")?
            .take::<Vec<AppliedMigration>>(0)
            .context("Parsing applied migrations")?;

        Ok(entries.into_iter().map(|entry| format!("{}:{}", entry.slice, entry.version)).collect())
    }
}
