use anyhow::{Context, bail};
use tone_config::ToneConfig;
use tone_core::Industry;
use tone_remote::RemoteClient;
use tone_session::{AppState, Event, Notice, Strategy, Transition};

use crate::cli::{EngineOverride, GlobalFlags};

/// Resolved configuration plus the live session state.
pub struct AppContext {
    pub config: ToneConfig,
    pub state: AppState,
}

impl AppContext {
    /// Resolve industry and strategy from config, with CLI flags taking precedence.
    pub fn init(config: ToneConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let industry = flags.industry.unwrap_or(config.general.industry);
        let strategy = resolve_strategy(&config, flags.engine)?;
        tracing::debug!(
            %industry,
            engine = %strategy.describe(industry),
            "initialized session"
        );

        Ok(Self {
            state: AppState::new(industry, strategy),
            config,
        })
    }

    /// Run one event through the orchestrator and keep the resulting state.
    ///
    /// `&mut self` is held across the await, so events are applied one at a
    /// time.
    pub async fn apply(&mut self, event: Event) -> Notice {
        let state = std::mem::take(&mut self.state);
        let Transition { state, notice } = tone_session::handle(state, event).await;
        self.state = state;
        notice
    }

    pub fn set_industry(&mut self, industry: Industry) {
        self.state = std::mem::take(&mut self.state).with_industry(industry);
    }

    pub fn export_dir(&self) -> &str {
        &self.config.general.export_dir
    }
}

fn resolve_strategy(
    config: &ToneConfig,
    engine: Option<EngineOverride>,
) -> anyhow::Result<Strategy> {
    match engine {
        None => Ok(Strategy::from_config(config)),
        Some(EngineOverride::Local) => Ok(Strategy::Local),
        Some(EngineOverride::Remote) => {
            let mut remote = config.remote.clone();
            remote.enabled = true;
            if !remote.is_configured() {
                bail!(
                    "--remote needs an API key: set TONE_REMOTE__API_KEY or [remote] api_key in .tone/config.toml"
                );
            }
            let client =
                RemoteClient::from_config(&remote).context("failed to build remote client")?;
            Ok(Strategy::Remote(client))
        }
    }
}
