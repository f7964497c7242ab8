//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use clausewise_analyzer::{ActionOutput, AnalysisReport, ExtractedClauses};
use clausewise_domain::{Document, RewriteResult, RiskFlag, SimilarityResult, Summary};
use colored::*;
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest clause text shown in a table cell, in characters.
const CELL_WIDTH: usize = 80;

/// Shown in place of a label when no reference matched
const NO_MATCH: &str = "-";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format any action result.
    pub fn format_output(&self, output: &ActionOutput) -> Result<String> {
        match output {
            ActionOutput::Text(document) => self.format_document(document),
            ActionOutput::Summary(summary) => self.format_summary(summary),
            ActionOutput::Clauses(clauses) => self.format_clauses(clauses),
            ActionOutput::Risks(flags) => self.format_risks(flags),
            ActionOutput::Comparison(result) => self.format_comparison(result),
            ActionOutput::Rewrite(result) => self.format_rewrite(result),
        }
    }

    /// Format extracted document text.
    pub fn format_document(&self, document: &Document) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "page_count": document.page_count(),
                "char_count": document.char_count(),
                "text": document.text(),
            }))?),
            OutputFormat::Quiet => Ok(document.text().to_string()),
            OutputFormat::Table => {
                if document.is_empty() {
                    return Ok(self.warning("No extractable text found (scanned or image-only PDF?)"));
                }
                let header = self.info(&format!(
                    "{} page(s), {} characters",
                    document.page_count(),
                    document.char_count()
                ));
                Ok(format!("{}\n\n{}", header, document.text()))
            }
        }
    }

    /// Format a document summary.
    pub fn format_summary(&self, summary: &Summary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "summary": summary.text,
                "chunk_count": summary.chunk_count,
            }))?),
            OutputFormat::Quiet => Ok(summary.text.clone()),
            OutputFormat::Table => {
                if summary.text.is_empty() {
                    return Ok(self.warning("Nothing to summarize."));
                }
                let header = self.info(&format!("Summary of {} chunk(s)", summary.chunk_count));
                Ok(format!("{}\n\n{}", header, summary.text))
            }
        }
    }

    /// Format extracted clauses.
    pub fn format_clauses(&self, clauses: &ExtractedClauses) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&clauses_json(clauses))?),
            OutputFormat::Quiet => Ok(clauses.texts().join("\n")),
            OutputFormat::Table => self.format_clauses_table(clauses),
        }
    }

    fn format_clauses_table(&self, clauses: &ExtractedClauses) -> Result<String> {
        if clauses.is_empty() {
            return Ok(self.colorize("No clauses found.", "yellow"));
        }

        let mut builder = Builder::default();
        match clauses {
            ExtractedClauses::Categorized(set) => {
                builder.push_record(["Category", "Clause"]);
                for entry in set.entries() {
                    for clause in &entry.clauses {
                        builder.push_record([entry.category.clone(), shorten(&clause.text, CELL_WIDTH)]);
                    }
                }
            }
            ExtractedClauses::Segmented(list) => {
                builder.push_record(["#", "Clause"]);
                for (position, clause) in list.iter().enumerate() {
                    let number = clause.index.unwrap_or(position + 1).to_string();
                    builder.push_record([number, shorten(&clause.text, CELL_WIDTH)]);
                }
            }
        }

        Ok(render(builder))
    }

    /// Format risk flags.
    pub fn format_risks(&self, flags: &[RiskFlag]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&risks_json(flags))?),
            OutputFormat::Quiet => Ok(flags
                .iter()
                .map(|f| f.clause.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if flags.is_empty() {
                    return Ok(self.success("No risky clauses detected."));
                }

                let mut builder = Builder::default();
                builder.push_record(["Keywords", "Clause"]);
                for flag in flags {
                    builder.push_record([
                        flag.matched_keywords.join(", "),
                        shorten(&flag.clause, CELL_WIDTH),
                    ]);
                }
                let title = self.warning(&format!("{} risky clause(s)", flags.len()));
                Ok(format!("{}\n{}", title, render(builder)))
            }
        }
    }

    /// Format the best reference match for a clause.
    pub fn format_comparison(&self, result: &SimilarityResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&comparison_json(result))?),
            OutputFormat::Quiet => Ok(format!(
                "{}\t{:.2}",
                result.label().unwrap_or(NO_MATCH),
                result.score
            )),
            OutputFormat::Table => match &result.best {
                Some(best) => Ok(format!(
                    "{}\n  {}",
                    self.success(&format!(
                        "Best match: {} (score {:.2})",
                        best.label, result.score
                    )),
                    best.text
                )),
                None => Ok(self.warning("No standard clause shares wording with this clause.")),
            },
        }
    }

    /// Format the score against every reference.
    pub fn format_scores(&self, scores: &[(String, f64)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<Value> = scores
                    .iter()
                    .map(|(label, score)| json!({ "label": label, "score": score }))
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Quiet => Ok(scores
                .iter()
                .map(|(label, score)| format!("{}\t{:.2}", label, score))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Reference", "Score"]);
                for (label, score) in scores {
                    builder.push_record([label.clone(), format!("{:.2}", score)]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a rewritten clause.
    pub fn format_rewrite(&self, result: &RewriteResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "original": result.original,
                "rewritten": result.rewritten,
            }))?),
            OutputFormat::Quiet => Ok(result.rewritten.clone()),
            OutputFormat::Table => Ok(format!(
                "{}\n  {}\n{}\n  {}",
                self.colorize("Original:", "cyan"),
                result.original,
                self.colorize("Rewritten:", "green"),
                result.rewritten
            )),
        }
    }

    /// Format a full document analysis.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "page_count": report.document.page_count(),
                "char_count": report.document.char_count(),
                "clauses": clauses_json(&report.clauses),
                "risks": risks_json(&report.risks),
                "comparisons": report.comparisons.iter().map(comparison_json).collect::<Vec<_>>(),
            }))?),
            OutputFormat::Quiet => self.format_risks(&report.risks),
            OutputFormat::Table => {
                let mut sections = vec![
                    self.info(&format!(
                        "{} page(s), {} characters",
                        report.document.page_count(),
                        report.document.char_count()
                    )),
                    self.format_clauses_table(&report.clauses)?,
                    self.format_risks(&report.risks)?,
                ];

                if !report.comparisons.is_empty() {
                    let mut builder = Builder::default();
                    builder.push_record(["Clause", "Closest standard", "Score"]);
                    for result in &report.comparisons {
                        builder.push_record([
                            shorten(&result.clause, CELL_WIDTH),
                            result.label().unwrap_or(NO_MATCH).to_string(),
                            format!("{:.2}", result.score),
                        ]);
                    }
                    sections.push(render(builder));
                }

                Ok(sections.join("\n\n"))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Cut text to at most `max` characters, marking the cut with an ellipsis.
fn shorten(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max {
        return flat;
    }
    let kept: String = flat.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

fn clauses_json(clauses: &ExtractedClauses) -> Value {
    match clauses {
        ExtractedClauses::Categorized(set) => Value::Array(
            set.entries()
                .iter()
                .map(|entry| {
                    let texts: Vec<&str> = entry.clauses.iter().map(|c| c.text.as_str()).collect();
                    json!({ "category": entry.category, "clauses": texts })
                })
                .collect(),
        ),
        ExtractedClauses::Segmented(list) => Value::Array(
            list.iter()
                .map(|c| json!({ "index": c.index, "text": c.text }))
                .collect(),
        ),
    }
}

fn risks_json(flags: &[RiskFlag]) -> Value {
    Value::Array(
        flags
            .iter()
            .map(|f| json!({ "clause": f.clause, "keywords": f.matched_keywords }))
            .collect(),
    )
}

fn comparison_json(result: &SimilarityResult) -> Value {
    json!({
        "clause": result.clause,
        "label": result.label(),
        "reference": result.reference(),
        "score": result.score,
    })
}
