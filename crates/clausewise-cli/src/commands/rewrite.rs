//! Rewrite command implementation.

use crate::cli::RewriteArgs;
use crate::error::Result;
use crate::output::Formatter;
use clausewise_analyzer::Pipeline;
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};

/// Execute the rewrite command.
pub async fn execute_rewrite<T, S, C>(
    args: &RewriteArgs,
    pipeline: &Pipeline<T, S, C>,
    formatter: &Formatter,
) -> Result<String>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    let result = pipeline.rewrite(&args.clause).await?;
    formatter.format_rewrite(&result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::mock_pipeline;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use clausewise_analyzer::{AnalyzerConfig, AnalyzerError};

    #[tokio::test]
    async fn test_rewrite_through_mock() {
        let (pipeline, _, chat) = mock_pipeline(AnalyzerConfig::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = RewriteArgs {
            clause: "The lessee shall remit.".to_string(),
        };

        let output = execute_rewrite(&args, &pipeline, &formatter).await.unwrap();
        assert_eq!(output, "Default mock response");
        assert_eq!(chat.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_clause_not_sent() {
        let (pipeline, _, chat) = mock_pipeline(AnalyzerConfig::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = RewriteArgs {
            clause: String::new(),
        };

        let err = execute_rewrite(&args, &pipeline, &formatter).await.unwrap_err();
        assert!(matches!(err, CliError::Analyzer(AnalyzerError::EmptyInput(_))));
        assert_eq!(chat.call_count(), 0);
    }
}
