use qhub_database::{Database, DatabaseError, DatabaseErrorExt};
use qhub_domain::constants::{COVERAGE, REQUEST, REQUEST_TYPE};
use qhub_kernel::safe_nanoid;
use surrealdb::types::SurrealValue;

/// One budget line to persist alongside its parent request.
#[derive(Debug, Clone, SurrealValue)]
pub struct NewSelection {
    pub coverage: i64,
    pub budget: f64,
}

/// Stored request row.
#[derive(Debug, Clone, SurrealValue)]
pub struct RequestRecord {
    pub id: String,
    pub title: String,
}

/// Stored budget line.
#[derive(Debug, Clone, SurrealValue)]
pub struct SelectionRecord {
    pub request: String,
    pub coverage: i64,
    pub budget: f64,
}

/// Stored catalog row.
#[derive(Debug, Clone, SurrealValue)]
pub struct CoverageRecord {
    pub id: i64,
    pub title: String,
    pub profit_coefficient: f64,
}

/// Data access for the three intake relations.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    db: Database,
}

impl RequestRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Persists a request and its budget lines in one transaction.
    ///
    /// The parent record key is generated up front so the lines can reference
    /// it; either everything commits or nothing is visible to readers.
    ///
    /// # Errors
    /// Returns [`DatabaseError`] if the transaction fails or is rolled back.
    pub async fn insert_request(
        &self,
        title: &str,
        lines: &[NewSelection],
    ) -> Result<String, DatabaseError> {
        let id = safe_nanoid!();

        let query = format!(
            "BEGIN TRANSACTION;
            CREATE ONLY type::thing('{REQUEST}', $id) SET title = $title;
            FOR $line IN $lines {{
                CREATE {REQUEST_TYPE} SET request = $id, coverage = $line.coverage, budget = $line.budget;
            }};
            COMMIT TRANSACTION;"
        );

        self.db
            .query(query)
            .bind(("id", id.clone()))
            .bind(("title", title.to_owned()))
            .bind(("lines", lines.to_vec()))
            .await
            .context("Saving request")?
            .check()
            .map_err(surrealdb::Error::from)?;

        Ok(id)
    }

    /// Loads all stored requests.
    ///
    /// # Errors
    /// Returns [`DatabaseError`] if the store is unreachable.
    pub async fn list_requests(&self) -> Result<Vec<RequestRecord>, DatabaseError> {
        self.db
            .query(format!("SELECT id.id() as id, title FROM {REQUEST}"))
            .await
            .context("Loading requests")?
            .take::<Vec<RequestRecord>>(0)
            .context("Parsing requests")
    }

    /// Loads all stored budget lines.
    ///
    /// # Errors
    /// Returns [`DatabaseError`] if the store is unreachable.
    pub async fn list_selections(&self) -> Result<Vec<SelectionRecord>, DatabaseError> {
        self.db
            .query(format!("SELECT request, coverage, budget FROM {REQUEST_TYPE}"))
            .await
            .context("Loading coverage selections")?
            .take::<Vec<SelectionRecord>>(0)
            .context("Parsing coverage selections")
    }

    /// Loads the seeded coverage catalog.
    ///
    /// # Errors
    /// Returns [`DatabaseError`] if the store is unreachable.
    pub async fn list_coverages(&self) -> Result<Vec<CoverageRecord>, DatabaseError> {
        self.db
            .query(format!("SELECT id.id() as id, title, profit_coefficient FROM {COVERAGE}"))
            .await
            .context("Loading coverages")?
            .take::<Vec<CoverageRecord>>(0)
            .context("Parsing coverages")
    }
}
