//! Connectivity self-test: connects to the configured MongoDB instance,
//! runs a write/read/delete probe, reports the health status and exits 0 on
//! success, 1 on any failure. SIGINT/SIGTERM trigger a graceful teardown.

use std::error::Error;

use env_logger::Env;
use mongodb::bson::{doc, Document};

use car_rental_db::db::mongo::DatabaseConnection;

const PROBE_COLLECTION: &str = "connection_test";

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let mut conn = match DatabaseConnection::from_env() {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("Database connection test failed: {}", e);
            eprintln!("Copy .env.example to .env and set MONGODB_URI / MONGODB_DB_NAME");
            std::process::exit(1);
        }
    };

    let exit_code = tokio::select! {
        result = run(&mut conn) => match result {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Database connection test failed: {}", e);
                if e.to_string().contains("Connection error") {
                    eprintln!("Make sure MongoDB is installed, running and reachable");
                }
                1
            }
        },
        _ = shutdown_signal() => 0,
    };

    conn.disconnect().await;
    std::process::exit(exit_code);
}

async fn run(conn: &mut DatabaseConnection) -> Result<(), Box<dyn Error>> {
    println!("Testing MongoDB connection...");
    println!("Database name: {}", conn.database_name());

    let db = conn.connect().await?;

    let collections = db.list_collection_names().await?;
    println!("Found {} existing collections", collections.len());
    for name in &collections {
        println!("   - {}", name);
    }

    // Write/read/delete round trip against a throwaway collection.
    let probe = db.collection::<Document>(PROBE_COLLECTION);
    let inserted = probe
        .insert_one(doc! {
            "timestamp": mongodb::bson::DateTime::now(),
            "test": "MongoDB connection successful",
            "startedAt": chrono::Utc::now().to_rfc3339(),
            "platform": std::env::consts::OS,
        })
        .await?;
    println!("Probe document inserted with id {}", inserted.inserted_id);

    let found = probe
        .find_one(doc! { "_id": inserted.inserted_id.clone() })
        .await?
        .ok_or("probe document not found after insert")?;
    println!(
        "Probe document retrieved: {}",
        found.get_str("test").unwrap_or("<missing>")
    );

    probe
        .delete_one(doc! { "_id": inserted.inserted_id.clone() })
        .await?;
    println!("Probe document cleaned up");

    let health = conn.health_check().await;
    println!("Health status: {}", health);

    println!("All database tests passed successfully!");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigint =
            signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");
        let mut sigterm =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = sigint.recv() => println!("\nReceived SIGINT, shutting down gracefully..."),
            _ = sigterm.recv() => println!("\nReceived SIGTERM, shutting down gracefully..."),
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
        println!("\nReceived Ctrl-C, shutting down gracefully...");
    }
}
