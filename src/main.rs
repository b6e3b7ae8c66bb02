//! venuepost entry point
//!
//! This is a minimal entrypoint that:
//! 1. Delegates to venuepost::run
//! 2. Prints errors to stderr
//! 3. Exits with non-zero on failure
//!
//! The failures that land here are startup-only: bad configuration or a
//! connection string that cannot be parsed into a store handle. A database
//! that is merely unreachable does not exit the process; those errors
//! surface per query as HTTP 500s.

#[tokio::main]
async fn main() {
    if let Err(e) = venuepost::run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
