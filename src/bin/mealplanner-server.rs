// ABOUTME: Server binary for the meal planner HTTP API
// ABOUTME: Loads configuration, opens storage, builds the gateway, and serves
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Meal Planner Server Binary
//!
//! Starts the HTTP API: account management, profile views, and daily meal
//! plans sized to each user's calorie requirement.

use anyhow::{Context, Result};
use clap::Parser;
use mealplanner_server::{
    config::environment::ServerConfig,
    database::SqliteUserStore,
    external::{SpoonacularClient, SpoonacularClientConfig},
    logging,
    resources::ServerResources,
    server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mealplanner-server")]
#[command(about = "Meal planner API - calorie-targeted daily meal plans")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    config.validate()?;

    info!("Starting meal planner server");
    info!("{}", config.summary());

    let store = SqliteUserStore::new(&config.database.url)
        .await
        .context("Failed to initialize database")?;
    info!("Database initialized");

    let client = SpoonacularClient::new(SpoonacularClientConfig::from(&config.spoonacular))
        .context("Failed to build recipe service client")?;
    info!("Recipe service client targeting {}", client.base_url());

    let port = config.http_port;
    let resources = Arc::new(ServerResources::new(
        config,
        Arc::new(store),
        Arc::new(client),
    ));

    display_available_endpoints(port);

    if let Err(e) = server::run(resources, port).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://{host}:{port}/health");
    info!("   User Registration: POST http://{host}:{port}/register");
    info!("   User Login:        POST http://{host}:{port}/login");
    info!("   User Logout:       POST http://{host}:{port}/logout");
    info!("   Profile:           GET  http://{host}:{port}/user");
    info!("   Update Profile:    PUT  http://{host}:{port}/user");
    info!("   Meal Plan:         GET  http://{host}:{port}/mealplan/generate");
    info!("=== End of Endpoint List ===");
}
