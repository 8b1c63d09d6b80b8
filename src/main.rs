//! fitlog entry point
//!
//! This is a minimal entrypoint that:
//! 1. Loads `.env` into the process environment
//! 2. Initializes tracing
//! 3. Delegates to `fitlog::run`
//! 4. Prints errors to stderr and exits non-zero on failure

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; any other read failure is not worth
    // aborting startup for either.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fitlog=info,tower_http=info")),
        )
        .init();

    if let Err(e) = fitlog::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
