//! Analyze command implementation.

use crate::cli::DocumentArgs;
use crate::commands::load_document;
use crate::error::Result;
use crate::output::Formatter;
use clausewise_analyzer::Pipeline;
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};

/// Execute the analyze command.
pub fn execute_analyze<T, S, C>(
    args: &DocumentArgs,
    pipeline: &Pipeline<T, S, C>,
    formatter: &Formatter,
) -> Result<String>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    let document = load_document(args, pipeline)?;
    let report = pipeline.analyze_document(document)?;
    formatter.format_report(&report)
}
