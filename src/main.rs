use std::error::Error;

use env_logger::Env;

use car_rental_db::bootstrap;
use car_rental_db::db::mongo::DatabaseConnection;

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    match run().await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Database initialization failed: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    println!("Starting Car Rental Platform database initialization...");

    let mut conn = DatabaseConnection::from_env()?;
    let db = conn.connect().await?;

    tokio::select! {
        result = bootstrap::provision(&db) => {
            let summary = result?;
            println!("\n=== Car Rental Platform Database Setup Complete ===");
            println!("{}", serde_json::to_string_pretty(&summary)?);
            println!("Ready for application connection!");
        }
        _ = shutdown_signal() => {
            conn.disconnect().await;
            return Ok(());
        }
    }

    conn.disconnect().await;
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
