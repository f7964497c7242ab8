//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `config` is the effective configuration and `path` the file it was read
/// from (or would be written to).
pub fn execute_config(
    args: &ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    match args.action {
        ConfigAction::Show => config.to_toml(),
        ConfigAction::Path => Ok(path.display().to_string()),
        ConfigAction::Init { force } => init_config(path, force, formatter),
    }
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Ok(formatter.warning(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    Ok(formatter.success(&format!("Wrote default configuration to {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    fn args(action: ConfigAction) -> ConfigArgs {
        ConfigArgs { action }
    }

    #[test]
    fn test_init_then_refuse_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);
        let config = Config::default();

        let first = execute_config(&args(ConfigAction::Init { force: false }), &config, &path, &formatter).unwrap();
        assert!(first.starts_with('✓'));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        let second = execute_config(&args(ConfigAction::Init { force: false }), &config, &path, &formatter).unwrap();
        assert!(second.contains("already exists"));

        let forced = execute_config(&args(ConfigAction::Init { force: true }), &config, &path, &formatter).unwrap();
        assert!(forced.starts_with('✓'));
    }

    #[test]
    fn test_show_is_loadable_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);

        let shown = execute_config(&args(ConfigAction::Show), &Config::default(), &path, &formatter).unwrap();
        assert!(shown.contains("[analyzer]"));
        assert!(shown.contains("[providers.chat]"));
        let parsed: Config = toml::from_str(&shown).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_path() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let path = Path::new("/tmp/clausewise.toml");
        let shown = execute_config(&args(ConfigAction::Path), &Config::default(), path, &formatter).unwrap();
        assert_eq!(shown, "/tmp/clausewise.toml");
    }
}
