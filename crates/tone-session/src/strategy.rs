use tone_config::ToneConfig;
use tone_core::{Classification, Industry, lexicon};
use tone_remote::{RemoteClient, RemoteError, RemoteModel};

/// How manually entered text is classified.
#[derive(Debug, Clone, Default)]
pub enum Strategy {
    /// Lexicon classifier only.
    #[default]
    Local,
    /// Hosted model chosen by industry, with lexicon fallback.
    Remote(RemoteClient),
}

impl Strategy {
    /// Remote when `[remote]` is enabled with a key, local otherwise.
    ///
    /// A client that cannot be built is logged and replaced by the local
    /// strategy.
    #[must_use]
    pub fn from_config(config: &ToneConfig) -> Self {
        if !config.remote.is_configured() {
            return Self::Local;
        }
        match RemoteClient::from_config(&config.remote) {
            Ok(client) => Self::Remote(client),
            Err(error) => {
                tracing::warn!(%error, "failed to build remote client; using local classifier");
                Self::Local
            }
        }
    }

    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Human-readable engine description for status output.
    #[must_use]
    pub fn describe(&self, industry: Industry) -> String {
        match self {
            Self::Local => String::from("local lexicon"),
            Self::Remote(client) => {
                let model = RemoteModel::for_industry(industry);
                format!("{} ({})", model.provider_name(), client.model_id(model))
            }
        }
    }

    /// Classify `text`. Only the remote variant can fail.
    pub(crate) async fn classify(
        &self,
        industry: Industry,
        text: &str,
    ) -> Result<Classification, RemoteError> {
        match self {
            Self::Local => Ok(lexicon::classify(text)),
            Self::Remote(client) => {
                client
                    .classify(RemoteModel::for_industry(industry), text)
                    .await
            }
        }
    }
}
