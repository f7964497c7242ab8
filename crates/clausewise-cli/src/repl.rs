//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! The session keeps the loaded document and the last extracted clauses, so
//! `risks` can run over clauses without re-reading the file.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use clausewise_analyzer::{Action, ActionOutput, Pipeline};
use clausewise_domain::traits::{ChatModel, SummarizationModel, TextExtractor};
use clausewise_domain::{standard_references, Document};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fs;
use std::path::PathBuf;

/// Run the interactive REPL.
pub async fn run_repl<T, S, C>(
    pipeline: &Pipeline<T, S, C>,
    config: &Config,
    formatter: &Formatter,
) -> Result<()>
where
    T: TextExtractor,
    S: SummarizationModel,
    C: ChatModel,
{
    println!("{}", formatter.info("Clausewise REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    // Initialize readline editor
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)
        .map_err(editor_error)?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(editor_error)?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = Session::default();

    loop {
        let prompt = if session.document.is_some() {
            "clausewise> "
        } else {
            "clausewise (no document)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(command) => match session.execute(command, pipeline, formatter).await {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Load { path: PathBuf, plain: bool },
    Text,
    Summarize,
    Clauses,
    Risks,
    Analyze,
    Compare(String),
    Rewrite(String),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    let rest = &parts[1..];
    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "load" => parse_load_command(rest),
        "text" => Ok(ReplCommand::Text),
        "summarize" => Ok(ReplCommand::Summarize),
        "clauses" => Ok(ReplCommand::Clauses),
        "risks" => Ok(ReplCommand::Risks),
        "analyze" => Ok(ReplCommand::Analyze),
        "compare" => Ok(ReplCommand::Compare(clause_argument("compare", rest)?)),
        "rewrite" => Ok(ReplCommand::Rewrite(clause_argument("rewrite", rest)?)),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

fn parse_load_command(args: &[&str]) -> Result<ReplCommand> {
    let plain = args.last() == Some(&"--plain");
    let path_parts = if plain { &args[..args.len() - 1] } else { args };

    if path_parts.is_empty() {
        return Err(CliError::InvalidInput("Usage: load <file> [--plain]".to_string()));
    }

    Ok(ReplCommand::Load {
        path: PathBuf::from(path_parts.join(" ")),
        plain,
    })
}

fn clause_argument(command: &str, args: &[&str]) -> Result<String> {
    if args.is_empty() {
        return Err(CliError::InvalidInput(format!("Usage: {} <clause text>", command)));
    }
    Ok(args.join(" "))
}

/// Document state carried between REPL commands.
#[derive(Debug, Default)]
struct Session {
    document: Option<Document>,
    clauses: Option<Vec<String>>,
}

impl Session {
    fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(CliError::NoDocument)
    }

    /// Run one command against the session.
    async fn execute<T, S, C>(
        &mut self,
        command: ReplCommand,
        pipeline: &Pipeline<T, S, C>,
        formatter: &Formatter,
    ) -> Result<String>
    where
        T: TextExtractor,
        S: SummarizationModel,
        C: ChatModel,
    {
        let action = match command {
            ReplCommand::Exit | ReplCommand::Help => return Ok(String::new()),
            ReplCommand::Load { path, plain } => {
                let document = if plain {
                    Document::from_text(fs::read_to_string(&path)?)
                } else {
                    let bytes = fs::read(&path)?;
                    match pipeline.dispatch(Action::ExtractText { bytes }).await? {
                        ActionOutput::Text(document) => document,
                        other => return formatter.format_output(&other),
                    }
                };
                let message = formatter.success(&format!(
                    "Loaded {} ({} page(s), {} characters)",
                    path.display(),
                    document.page_count(),
                    document.char_count()
                ));
                self.document = Some(document);
                self.clauses = None;
                return Ok(message);
            }
            ReplCommand::Text => return formatter.format_document(self.document()?),
            ReplCommand::Analyze => {
                let report = pipeline.analyze_document(self.document()?.clone())?;
                self.clauses = Some(report.clauses.texts());
                return formatter.format_report(&report);
            }
            ReplCommand::Summarize => Action::Summarize {
                text: self.document()?.text().to_string(),
            },
            ReplCommand::Clauses => Action::ExtractClauses {
                text: self.document()?.text().to_string(),
            },
            ReplCommand::Risks => {
                let clauses = match &self.clauses {
                    Some(clauses) => clauses.clone(),
                    None => pipeline.extract_clauses(self.document()?.text()).texts(),
                };
                Action::FlagRisks { clauses }
            }
            ReplCommand::Compare(clause) => Action::Compare {
                clause,
                references: standard_references(),
            },
            ReplCommand::Rewrite(clause) => Action::Rewrite { clause },
        };

        let output = pipeline.dispatch(action).await?;
        if let ActionOutput::Clauses(clauses) = &output {
            self.clauses = Some(clauses.texts());
        }
        formatter.format_output(&output)
    }
}

fn editor_error(e: ReadlineError) -> CliError {
    CliError::Io(std::io::Error::other(format!("Failed to initialize editor: {}", e)))
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  load <file> [--plain]     - Load a PDF (or plain text with --plain)");
    println!("  text                      - Show the loaded document text");
    println!("  summarize                 - Summarize the loaded document");
    println!("  clauses                   - Extract clauses from the loaded document");
    println!("  risks                     - Flag risky clauses");
    println!("  analyze                   - Clauses, risks and standard comparisons");
    println!("  compare <clause>          - Compare a clause with the standard library");
    println!("  rewrite <clause>          - Rewrite a clause in clearer language");
    println!("  help, ?                   - Show this help");
    println!("  exit, quit, q             - Exit REPL");
    println!();
}
