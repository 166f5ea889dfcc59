//! One-shot provisioning: collections with validators, then indexes, then
//! seed documents, in that order. Index creation MUST precede seeding so
//! the unique email index exists before the admin user is inserted.
//!
//! Failures abort the remaining steps and propagate to the operator. There
//! is no partial-state rollback; a dirty target must be inspected and
//! cleaned up manually before re-running.

pub mod seed;

use chrono::{DateTime, Utc};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::Database;
use serde::Serialize;

use crate::db::mongo::DbError;
use crate::models::{
    agency,
    agency::Agency,
    user,
    user::{User, UserRole},
    vehicle,
    vehicle::Vehicle,
};
use crate::schema::{indexes, validators};

// MongoDB server error codes this tool cares about.
const NAMESPACE_EXISTS: i32 = 48;
const DOCUMENT_VALIDATION_FAILURE: i32 = 121;
const DUPLICATE_KEY: i32 = 11000;

#[derive(Debug)]
pub enum BootstrapError {
    Db(DbError),
    /// A write was rejected by a collection's structural validator.
    Validation(String),
    /// A unique-index violation, notably on `users.email`.
    DuplicateKey(String),
    /// Seed data could not be built or the seeded state failed verification.
    Seed(String),
    Database(String),
}

impl std::fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootstrapError::Db(err) => write!(f, "{}", err),
            BootstrapError::Validation(err) => write!(f, "Validation error: {}", err),
            BootstrapError::DuplicateKey(err) => write!(f, "Duplicate key error: {}", err),
            BootstrapError::Seed(err) => write!(f, "Seed error: {}", err),
            BootstrapError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for BootstrapError {
    fn from(err: DbError) -> Self {
        BootstrapError::Db(err)
    }
}

/// Maps a driver error to the bootstrap taxonomy by server error code.
pub(crate) fn classify(err: mongodb::error::Error, context: &str) -> BootstrapError {
    match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY => {
            BootstrapError::DuplicateKey(format!("{}: {}", context, we.message))
        }
        ErrorKind::Write(WriteFailure::WriteError(we))
            if we.code == DOCUMENT_VALIDATION_FAILURE =>
        {
            BootstrapError::Validation(format!("{}: {}", context, we.message))
        }
        ErrorKind::Command(ce) if ce.code == DOCUMENT_VALIDATION_FAILURE => {
            BootstrapError::Validation(format!("{}: {}", context, ce.message))
        }
        _ => BootstrapError::Database(format!("{}: {}", context, err)),
    }
}

fn is_namespace_exists(err: &mongodb::error::Error) -> bool {
    matches!(&*err.kind, ErrorKind::Command(ce) if ce.code == NAMESPACE_EXISTS)
}

/// What a successful run produced, printed by the provisioning binary.
#[derive(Debug, Serialize)]
pub struct ProvisionSummary {
    pub database: String,
    pub collections: Vec<String>,
    pub indexes_created: usize,
    pub admin_user_id: String,
    pub admin_email: String,
    pub agency_id: String,
    pub agency_name: String,
    pub vehicle_ids: Vec<String>,
    pub provisioned_at: DateTime<Utc>,
}

/// Runs the full bootstrap sequence against `db` and verifies the seeded
/// referential chain.
pub async fn provision(db: &Database) -> Result<ProvisionSummary, BootstrapError> {
    log::info!("Starting database initialization for {}", db.name());

    let collections = create_collections(db).await?;
    let indexes_created = create_indexes(db).await?;
    let seeded = seed::run(db).await?;
    verify(db, &seeded).await?;

    log::info!("Database initialization completed successfully");

    Ok(ProvisionSummary {
        database: db.name().to_string(),
        collections,
        indexes_created,
        admin_user_id: seeded.admin_user_id.to_hex(),
        admin_email: seed::ADMIN_EMAIL.to_string(),
        agency_id: seeded.agency_id.to_hex(),
        agency_name: seed::AGENCY_NAME.to_string(),
        vehicle_ids: seeded.vehicle_ids.iter().map(|id| id.to_hex()).collect(),
        provisioned_at: Utc::now(),
    })
}

/// Creates the seven collections with their validators attached. An already
/// existing collection is tolerated and logged; its validator is left as-is.
async fn create_collections(db: &Database) -> Result<Vec<String>, BootstrapError> {
    let mut created = Vec::new();
    for (name, validator) in validators::all() {
        match db.create_collection(name).validator(validator).await {
            Ok(()) => {
                log::info!("Created collection {}", name);
            }
            Err(e) if is_namespace_exists(&e) => {
                log::warn!("Collection {} already exists, skipping", name);
            }
            Err(e) => return Err(classify(e, name)),
        }
        created.push(name.to_string());
    }
    Ok(created)
}

async fn create_indexes(db: &Database) -> Result<usize, BootstrapError> {
    let mut total = 0;
    for (name, models) in indexes::all() {
        let result = db
            .collection::<Document>(name)
            .create_indexes(models)
            .await
            .map_err(|e| classify(e, name))?;
        log::info!("Created {} indexes on {}", result.index_names.len(), name);
        total += result.index_names.len();
    }
    Ok(total)
}

/// Post-seed sanity check of the referential chain: exactly one super_admin,
/// exactly one agency owned by it, exactly two vehicles owned by the agency.
async fn verify(db: &Database, seeded: &seed::SeededIds) -> Result<(), BootstrapError> {
    let admins = db
        .collection::<User>(user::COLLECTION)
        .count_documents(doc! { "role": UserRole::SuperAdmin.as_str() })
        .await
        .map_err(|e| classify(e, user::COLLECTION))?;
    if admins != 1 {
        return Err(BootstrapError::Seed(format!(
            "expected exactly one super_admin user, found {}",
            admins
        )));
    }

    let owned = db
        .collection::<Agency>(agency::COLLECTION)
        .count_documents(doc! { "ownerId": seeded.admin_user_id })
        .await
        .map_err(|e| classify(e, agency::COLLECTION))?;
    if owned != 1 {
        return Err(BootstrapError::Seed(format!(
            "expected exactly one agency owned by the admin user, found {}",
            owned
        )));
    }

    let fleet: Vec<Vehicle> = db
        .collection::<Vehicle>(vehicle::COLLECTION)
        .find(doc! { "agencyId": seeded.agency_id })
        .await
        .map_err(|e| classify(e, vehicle::COLLECTION))?
        .try_collect()
        .await
        .map_err(|e| classify(e, vehicle::COLLECTION))?;
    if fleet.len() != 2 {
        return Err(BootstrapError::Seed(format!(
            "expected exactly two vehicles owned by the seed agency, found {}",
            fleet.len()
        )));
    }

    Ok(())
}
