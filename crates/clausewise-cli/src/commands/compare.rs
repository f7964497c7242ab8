//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::Formatter;
use clausewise_analyzer::Pipeline;
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};
use clausewise_domain::{standard_references, ReferenceClause};

/// Execute the compare command.
pub fn execute_compare<T, S, C>(
    args: &CompareArgs,
    pipeline: &Pipeline<T, S, C>,
    formatter: &Formatter,
) -> Result<String>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    let references = if args.references.is_empty() {
        standard_references()
    } else {
        args.references
            .iter()
            .map(|(label, text)| ReferenceClause::new(label.as_str(), text.as_str()))
            .collect()
    };

    let best = pipeline.compare(&args.clause, &references)?;
    let mut output = formatter.format_comparison(&best)?;

    if args.all {
        let scores = pipeline.scores(&args.clause, &references);
        output.push_str("\n\n");
        output.push_str(&formatter.format_scores(&scores)?);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::mock_pipeline;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use clausewise_analyzer::{AnalyzerConfig, AnalyzerError};

    fn args(clause: &str, references: Vec<(String, String)>, all: bool) -> CompareArgs {
        CompareArgs {
            clause: clause.to_string(),
            references,
            all,
        }
    }

    #[test]
    fn test_standard_library_by_default() {
        let (pipeline, _, _) = mock_pipeline(AnalyzerConfig::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let output = execute_compare(
            &args("This agreement may be terminated upon 30 days notice.", Vec::new(), false),
            &pipeline,
            &formatter,
        )
        .unwrap();
        assert!(output.starts_with("termination\t"));
    }

    #[test]
    fn test_custom_references_with_all_scores() {
        let (pipeline, _, _) = mock_pipeline(AnalyzerConfig::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let references = vec![
            ("rent".to_string(), "Rent is due on the first day.".to_string()),
            ("notice".to_string(), "Notices must be in writing.".to_string()),
        ];

        let output = execute_compare(
            &args("All notices must be given in writing.", references, true),
            &pipeline,
            &formatter,
        )
        .unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert!(lines[0].starts_with("notice\t"));
        assert!(lines.iter().any(|l| l.starts_with("rent\t")));
    }

    #[test]
    fn test_unrelated_clause_reports_no_match() {
        let (pipeline, _, _) = mock_pipeline(AnalyzerConfig::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let output =
            execute_compare(&args("Zebras graze.", Vec::new(), false), &pipeline, &formatter).unwrap();
        assert_eq!(output, "-\t0.00");
    }

    #[test]
    fn test_blank_clause() {
        let (pipeline, _, _) = mock_pipeline(AnalyzerConfig::default());
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let err = execute_compare(&args("  ", Vec::new(), false), &pipeline, &formatter).unwrap_err();
        assert!(matches!(err, CliError::Analyzer(AnalyzerError::EmptyInput(_))));
    }
}
