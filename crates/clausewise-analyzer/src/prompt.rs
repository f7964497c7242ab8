//! Prompt template for clause rewriting

/// Instruction placed ahead of the quoted clause
pub const REWRITE_INSTRUCTION: &str =
    "Rewrite the following legal clause in a clearer, more standard form:";

/// Builds the rewrite prompt for one clause
pub struct RewritePrompt<'a> {
    clause: &'a str,
}

impl<'a> RewritePrompt<'a> {
    /// Create a new prompt builder
    pub fn new(clause: &'a str) -> Self {
        Self { clause }
    }

    /// Build the complete prompt
    ///
    /// The clause is embedded verbatim between double quotes.
    pub fn build(&self) -> String {
        format!("{}\n\n\"{}\"", REWRITE_INSTRUCTION, self.clause)
    }
}
