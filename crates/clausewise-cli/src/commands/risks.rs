//! Risks command implementation.

use crate::cli::RisksArgs;
use crate::commands::clauses::extract_with_mode;
use crate::commands::load_document;
use crate::error::Result;
use crate::output::Formatter;
use clausewise_analyzer::{Pipeline, RiskScorer};
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};

/// Execute the risks command.
pub fn execute_risks<T, S, C>(
    args: &RisksArgs,
    pipeline: &Pipeline<T, S, C>,
    formatter: &Formatter,
) -> Result<String>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    let document = load_document(&args.document, pipeline)?;
    let clauses = extract_with_mode(document.text(), args.mode, pipeline).texts();

    let flags = if args.keywords.is_empty() {
        pipeline.flag_risks(&clauses)
    } else {
        RiskScorer::new(args.keywords.iter().cloned()).flag(&clauses)
    };

    formatter.format_risks(&flags)
}
