use std::fmt::{Debug, Display, Formatter};

/// The navbar action a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    Publish,
    SaveDraft,
}

impl Display for DraftAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftAction::Publish => write!(f, "fill the blog title to publish it"),
            DraftAction::SaveDraft => write!(f, "write the blog title to save as a draft"),
        }
    }
}

#[derive(thiserror::Error)]
pub enum BizErrorEnum {
    // VALIDATE BLOG DRAFT
    #[error("Please upload a blog banner to publish it")]
    MissingBanner,

    #[error("Please {0}!")]
    MissingTitle(DraftAction),

    #[error("Please write something in the blog to publish it!")]
    EmptyContent,

    // TEXT EDITOR
    #[error("Text editor is not ready yet. Please try again.")]
    EditorNotReady,

    #[error("Failed to save the editor content.")]
    SaveFailed(#[source] anyhow::Error),

    // BACKEND
    #[error("Failed to save the draft: {0}")]
    NetworkFailed(#[from] reqwest::Error),

    #[error("Backend url is incorrect.")]
    ParseUrlError,

    #[error("Backend url join path error.")]
    JoinUrlError,

    #[error("Failed to build the http client.")]
    BuildHttpClientError(#[source] reqwest::Error),

    // CONFIGURATION
    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl BizErrorEnum {
    /// Validation failures are reported to the user without touching the editor or the backend.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BizErrorEnum::MissingBanner
                | BizErrorEnum::MissingTitle(_)
                | BizErrorEnum::EmptyContent
        )
    }
}

impl Debug for BizErrorEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
