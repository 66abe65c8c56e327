use anyhow::Result;
use config::Config;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

pub mod builder;
pub mod cli;
pub mod display;
pub mod manager;
pub mod models;
pub mod queries;
pub mod schema;
pub mod seed;

use crate::manager::SchoolManager;

/// The database file used when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "school.db";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
}

#[derive(Debug, Deserialize)]
struct SettingsFile {
    school: Settings,
}

/// Loads settings from the `config` file (optional, any format the `config` crate reads), with
/// `DATABASE_URL` from the environment or `.env` taking precedence.
pub fn load_settings(config_name: &str) -> Result<Settings> {
    dotenv().ok();

    let mut builder = Config::builder()
        .set_default("school.database_url", DEFAULT_DATABASE_URL)?
        .add_source(config::File::with_name(config_name).required(false));

    if let Ok(database_url) = env::var("DATABASE_URL") {
        builder = builder.set_override("school.database_url", database_url)?;
    }

    let settings: SettingsFile = builder.build()?.try_deserialize()?;

    Ok(settings.school)
}

/// Connects to the configured database, unless `database_url` overrides it.
pub fn create_default_manager(database_url: Option<&str>) -> Result<SchoolManager> {
    let database_url = match database_url {
        Some(url) => url.to_string(),
        None => load_settings("config")?.database_url,
    };

    SchoolManager::connect(&database_url)
}
