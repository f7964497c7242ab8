//! Construction of the service handles and the pipeline.

use crate::config::Config;
use crate::error::Result;
use clausewise_analyzer::{PdfTextExtractor, Pipeline};
use clausewise_llm::{HuggingFaceSummarizer, OpenAiChatModel};
use tracing::{debug, warn};

/// The pipeline wired to the real services.
pub type AppPipeline = Pipeline<PdfTextExtractor, HuggingFaceSummarizer, OpenAiChatModel>;

/// Build the pipeline once at startup.
///
/// Credentials are read from the environment here. A missing key only
/// disables the stage that needs it and is reported when that stage runs.
pub fn build_pipeline(config: &Config) -> Result<AppPipeline> {
    let summarizer = HuggingFaceSummarizer::from_config(&config.providers.summarizer)?;
    if !summarizer.has_credential() {
        warn!(
            "{} is not set; summarization is unavailable",
            config.providers.summarizer.api_key_env
        );
    }

    let chat = OpenAiChatModel::from_config(&config.providers.chat)?;
    if !chat.has_credential() {
        warn!(
            "{} is not set; rewriting is unavailable",
            config.providers.chat.api_key_env
        );
    }

    debug!(
        "Using summarizer '{}' and chat model '{}'",
        summarizer.model(),
        chat.model()
    );

    Ok(Pipeline::new(
        PdfTextExtractor::new(),
        summarizer,
        chat,
        config.analyzer.clone(),
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_build_with_defaults() {
        let pipeline = build_pipeline(&Config::default()).unwrap();
        assert_eq!(pipeline.config().chunk_size, 1000);
    }

    #[test]
    fn test_invalid_analyzer_config_rejected() {
        let mut config = Config::default();
        config.analyzer.summary_min_length = 500;
        assert!(matches!(build_pipeline(&config), Err(CliError::Analyzer(_))));
    }
}
