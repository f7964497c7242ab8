//! Clauses command implementation.

use crate::cli::{ClausesArgs, ModeArg};
use crate::commands::load_document;
use crate::error::Result;
use crate::output::Formatter;
use clausewise_analyzer::{ClauseExtractor, ExtractedClauses, Pipeline};
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};

/// Execute the clauses command.
pub fn execute_clauses<T, S, C>(
    args: &ClausesArgs,
    pipeline: &Pipeline<T, S, C>,
    formatter: &Formatter,
) -> Result<String>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    let document = load_document(&args.document, pipeline)?;
    let clauses = extract_with_mode(document.text(), args.mode, pipeline);
    formatter.format_clauses(&clauses)
}

/// Extract clauses, honoring a strategy override.
pub(crate) fn extract_with_mode<T, S, C>(
    text: &str,
    mode: Option<ModeArg>,
    pipeline: &Pipeline<T, S, C>,
) -> ExtractedClauses
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    match mode {
        Some(mode) => ClauseExtractor::new(mode.into(), pipeline.config().clause_categories()).extract(text),
        None => pipeline.extract_clauses(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DocumentArgs;
    use crate::commands::test_support::{mock_pipeline, text_file};
    use crate::config::OutputFormat;
    use clausewise_analyzer::AnalyzerConfig;

    fn args(document: DocumentArgs, mode: Option<ModeArg>) -> ClausesArgs {
        ClausesArgs { document, mode }
    }

    #[test]
    fn test_configured_mode() {
        let (pipeline, _, _) = mock_pipeline(AnalyzerConfig::default());
        let (_file, document) = text_file("The fee is due monthly. The sky is blue.");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let output = execute_clauses(&args(document, None), &pipeline, &formatter).unwrap();
        assert_eq!(output, "The fee is due monthly.");
    }

    #[test]
    fn test_mode_override() {
        let (pipeline, _, _) = mock_pipeline(AnalyzerConfig::default());
        let (_file, document) = text_file("Clause 1: The sky is blue.\nClause 2: Grass is green.");
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let output =
            execute_clauses(&args(document, Some(ModeArg::Marker)), &pipeline, &formatter).unwrap();
        assert_eq!(output, "Clause 1: The sky is blue.\nClause 2: Grass is green.");
    }
}
