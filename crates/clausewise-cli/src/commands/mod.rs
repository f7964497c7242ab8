//! Command implementations.
//!
//! Each command returns its formatted output; the caller prints it.

pub mod analyze;
pub mod clauses;
pub mod compare;
pub mod config;
pub mod extract;
pub mod rewrite;
pub mod risks;
pub mod summarize;

pub use self::analyze::execute_analyze;
pub use self::clauses::execute_clauses;
pub use self::compare::execute_compare;
pub use self::config::execute_config;
pub use self::extract::execute_extract;
pub use self::rewrite::execute_rewrite;
pub use self::risks::execute_risks;
pub use self::summarize::execute_summarize;

use crate::cli::DocumentArgs;
use crate::error::Result;
use clausewise_analyzer::Pipeline;
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};
use clausewise_domain::Document;
use std::fs;
use tracing::debug;

/// Read a document from disk, decoding PDFs through the pipeline.
pub fn load_document<T, S, C>(args: &DocumentArgs, pipeline: &Pipeline<T, S, C>) -> Result<Document>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    debug!("Loading {}", args.path.display());

    if args.plain {
        return Ok(Document::from_text(fs::read_to_string(&args.path)?));
    }

    let bytes = fs::read(&args.path)?;
    Ok(pipeline.extract_text(&bytes)?)
}
