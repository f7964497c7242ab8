//! Clausewise Domain Layer
//!
//! This crate contains the value types and service interfaces shared by every
//! other clausewise crate. It has no external dependencies and performs no I/O.
//!
//! ## Key Concepts
//!
//! - **Document**: Plain text recovered from an uploaded PDF
//! - **Clause**: A span of document text treated as one unit of legal meaning
//! - **Clause Category**: A label bound to a fixed set of trigger keywords
//! - **Risk Flag**: A clause that mentions at least one risk keyword
//! - **Reference Clause**: Standard wording a pasted clause is compared against
//!
//! ## Architecture
//!
//! - Pure data and pure functions only
//! - Every value is immutable once produced; transformations return new values
//! - External collaborators (PDF decoding, summarization, chat completion) are
//!   described by the traits in [`traits`] and implemented in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clause;
pub mod document;
pub mod keywords;
pub mod outcome;
pub mod reference;
pub mod risk;
pub mod traits;

// Re-exports for convenience
pub use clause::{default_categories, CategorizedClauses, CategoryMatch, Clause, ClauseCategory};
pub use document::Document;
pub use outcome::{RewriteResult, SimilarityResult, Summary};
pub use reference::{standard_references, ReferenceClause};
pub use risk::{RiskFlag, DEFAULT_RISK_KEYWORDS};
