use mongodb::{
    bson::doc,
    options::{ClientOptions, ServerApi, ServerApiVersion},
    Client, Database,
};
use std::env;
use std::time::Duration;

#[derive(Debug)]
pub enum DbError {
    /// A required environment value is missing.
    Configuration(String),
    /// The remote store is unreachable or rejected the ping.
    Connection(String),
    /// `database()` was called before a successful `connect()`.
    NotConnected,
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbError::Configuration(err) => write!(f, "Configuration error: {}", err),
            DbError::Connection(err) => write!(f, "Connection error: {}", err),
            DbError::NotConnected => {
                write!(f, "Database not connected. Call connect() first.")
            }
        }
    }
}

impl std::error::Error for DbError {}

/// Liveness probe result. Never raised as an error so callers can poll it
/// from health endpoints without a failure path.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "message")]
pub enum HealthStatus {
    Connected,
    Disconnected,
    Error(String),
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Connected => write!(f, "connected"),
            HealthStatus::Disconnected => write!(f, "disconnected"),
            HealthStatus::Error(msg) => write!(f, "error: {}", msg),
        }
    }
}

/// Explicitly constructed storage handle. The entry point owns one of these
/// for the lifetime of the process; there is no ambient global connection.
pub struct DatabaseConnection {
    uri: String,
    db_name: String,
    client: Option<Client>,
}

impl DatabaseConnection {
    pub fn new(uri: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            db_name: db_name.into(),
            client: None,
        }
    }

    /// Reads `MONGODB_URI` and `MONGODB_DB_NAME` from the environment.
    /// Absence of either is a fatal configuration error.
    pub fn from_env() -> Result<Self, DbError> {
        let uri = env::var("MONGODB_URI").map_err(|_| {
            DbError::Configuration("MONGODB_URI environment variable is not set".to_string())
        })?;
        let db_name = env::var("MONGODB_DB_NAME").map_err(|_| {
            DbError::Configuration("MONGODB_DB_NAME environment variable is not set".to_string())
        })?;
        Ok(Self::new(uri, db_name))
    }

    pub fn database_name(&self) -> &str {
        &self.db_name
    }

    /// Establishes the client and verifies it with a ping. Idempotent while
    /// already connected: logs and returns a handle without reconnecting.
    pub async fn connect(&mut self) -> Result<Database, DbError> {
        if let Some(client) = &self.client {
            log::info!("Database already connected");
            return Ok(client.database(&self.db_name));
        }

        log::info!("Connecting to MongoDB...");

        let mut client_options = ClientOptions::parse(&self.uri)
            .await
            .map_err(|e| DbError::Connection(format!("failed to parse MongoDB URI: {}", e)))?;

        client_options.connect_timeout = Some(Duration::from_secs(10));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));
        client_options.max_pool_size = Some(10);
        client_options.min_pool_size = Some(1);

        // Set the server API if using MongoDB 5.0+
        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);

        let client = Client::with_options(client_options)
            .map_err(|e| DbError::Connection(format!("failed to create client: {}", e)))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DbError::Connection(format!("ping failed: {}", e)))?;

        log::info!("Connected to MongoDB database: {}", self.db_name);

        let db = client.database(&self.db_name);
        self.client = Some(client);
        Ok(db)
    }

    /// Releases the client. Safe to call when not connected.
    pub async fn disconnect(&mut self) {
        if let Some(client) = self.client.take() {
            client.shutdown().await;
            log::info!("Disconnected from MongoDB");
        }
    }

    /// Returns a handle to the configured database, or `NotConnected` if
    /// `connect()` has not succeeded yet.
    pub fn database(&self) -> Result<Database, DbError> {
        match &self.client {
            Some(client) => Ok(client.database(&self.db_name)),
            None => Err(DbError::NotConnected),
        }
    }

    /// Tri-state liveness probe: pings the server when a client exists,
    /// reports `Disconnected` otherwise. Never returns an error.
    pub async fn health_check(&self) -> HealthStatus {
        match &self.client {
            None => HealthStatus::Disconnected,
            Some(client) => {
                match client.database("admin").run_command(doc! { "ping": 1 }).await {
                    Ok(_) => HealthStatus::Connected,
                    Err(e) => HealthStatus::Error(e.to_string()),
                }
            }
        }
    }
}
