//! Apply the embedded board schema migrations and exit.
//!
//! Reads the database URL from the same `AGORA_*` settings as the server so
//! deploy jobs can migrate before the first replica starts.

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use agora::config::AgoraSettings;
use agora::outbound::persistence::run_migrations;

fn main() -> Result<()> {
    color_eyre::install()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let settings = AgoraSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let database_url = settings
        .database_url()
        .ok_or_else(|| eyre!("AGORA_DATABASE_URL must be set to run migrations"))?;

    let applied = run_migrations(database_url).wrap_err("migration run failed")?;
    if applied.is_empty() {
        info!("schema already up to date");
    }
    for version in &applied {
        info!(%version, "applied migration");
    }
    Ok(())
}
