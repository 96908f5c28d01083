use std::path::Path;

use anyhow::Context;
use tone_config::ToneConfig;

/// Load `.env` from the working directory, then the layered config.
pub fn load_config() -> anyhow::Result<ToneConfig> {
    load_dotenv(Path::new(".env"))?;
    ToneConfig::load().context("failed to load tone configuration")
}

fn load_dotenv(env_path: &Path) -> anyhow::Result<()> {
    if !env_path.exists() {
        return Ok(());
    }
    dotenvy::from_path(env_path)
        .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))
}
