//! Catalog Console CLI - Submit product edit screen actions from the shell.
//!
//! # Usage
//!
//! ```bash
//! # Save a product form
//! catalog-cli update --product product.json --form form.json
//!
//! # Attach an image to a product
//! catalog-cli upload-image --product-id UHJvZHVjdDo3Mg== front.png
//!
//! # Move the third image to the front
//! catalog-cli reorder-images --product product.json --from 2 --to 0
//! ```
//!
//! # Commands
//!
//! - `update` - Save the product form and sync metadata
//! - `upload-image` - Upload an image with empty alt text
//! - `reorder-images` - Persist a single image move
//!
//! Every command waits for its background mutations before exiting and
//! exits with status 1 if any of them reported errors.
//!
//! # Environment Variables
//!
//! - `CATALOG_API_URL` - GraphQL endpoint of the catalog API
//! - `CATALOG_API_TOKEN` - Staff token with catalog write access
//! - `CATALOG_DECIMAL_SEPARATOR` - `.` (default) or `,`
//! - `SENTRY_DSN`, `SENTRY_ENVIRONMENT`, `SENTRY_SAMPLE_RATE` - Error tracking
//! - `LOG_FORMAT` - `json` for structured logs, text otherwise
//! - `RUST_LOG` - Log filter

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use catalog_console_admin::config::ConsoleConfig;
use catalog_console_admin::dashboard::DashboardClient;
use clap::{Parser, Subcommand};

mod commands;
mod telemetry;

use commands::CliError;

#[derive(Parser)]
#[command(name = "catalog-cli")]
#[command(author, version, about = "Catalog Console product tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the product form
    Update {
        /// Product snapshot as JSON (the product as last fetched)
        #[arg(short, long)]
        product: PathBuf,

        /// Form state as JSON
        #[arg(short, long)]
        form: PathBuf,
    },
    /// Upload an image to a product
    UploadImage {
        /// Product ID
        #[arg(short, long)]
        product_id: String,

        /// Image file
        file: PathBuf,
    },
    /// Move one image within a product's gallery
    ReorderImages {
        /// Product snapshot as JSON
        #[arg(short, long)]
        product: PathBuf,

        /// Current position of the image
        #[arg(long)]
        from: usize,

        /// Position to move the image to
        #[arg(long)]
        to: usize,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConsoleConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_tracing(false);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry must be initialized before the tracing subscriber
    let sentry_guard = telemetry::init_sentry(&config);
    telemetry::init_tracing(config.json_logs);

    if let Err(e) = run(cli, &config).await {
        tracing::error!("Command failed: {e}");
        // Flush Sentry before exiting
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &ConsoleConfig) -> Result<(), CliError> {
    let client = DashboardClient::new(config.api());

    match cli.command {
        Commands::Update { product, form } => {
            commands::product::update(client, config, &product, &form).await
        }
        Commands::UploadImage { product_id, file } => {
            commands::images::upload(client, product_id, &file).await
        }
        Commands::ReorderImages { product, from, to } => {
            commands::images::reorder(client, &product, from, to).await
        }
    }
}
