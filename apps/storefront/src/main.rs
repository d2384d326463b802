//! # Shopee Storefront Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration
//! 3. Create the stores (Catalog, Cart, Wishlist)
//! 4. Fetch the catalog once and log a summary

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match shopee_storefront::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shopee-storefront: {}", err);
            ExitCode::FAILURE
        }
    }
}
