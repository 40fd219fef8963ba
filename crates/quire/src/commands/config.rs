//! `quire config` command implementation.

use std::path::PathBuf;

use clap::Args;
use quire_config::{ConfigLoader, FsSource, get_path};

use super::Format;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the config command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Configuration file to load.
    file: PathBuf,

    /// Print only the value at a dotted key path (e.g. `theme.name`).
    #[arg(short, long)]
    key: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

impl ConfigArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        tracing::info!(file = %self.file.display(), "Loading configuration");
        let loader = ConfigLoader::new(FsSource::new(std::env::current_dir()?));
        let config = loader.load(&self.file.to_string_lossy())?;

        match &self.key {
            Some(key) => {
                let value = get_path(&config, key)
                    .ok_or_else(|| CliError::Validation(format!("Key not found: {key}")))?;
                output.value(value, self.format)
            }
            None => {
                output.info(&format!(
                    "Loaded {} ({} top-level keys)",
                    self.file.display(),
                    config.len()
                ));
                output.value(&config, self.format)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: ConfigArgs,
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["quire", "mkdocs.yml"]).unwrap();
        assert_eq!(cli.args.file, PathBuf::from("mkdocs.yml"));
        assert_eq!(cli.args.key, None);
        assert_eq!(cli.args.format, Format::Yaml);
    }

    #[test]
    fn test_parse_key_and_format() {
        let cli =
            Cli::try_parse_from(["quire", "site.yml", "--key", "theme.name", "-f", "json"])
                .unwrap();
        assert_eq!(cli.args.key.as_deref(), Some("theme.name"));
        assert_eq!(cli.args.format, Format::Json);
    }

    #[test]
    fn test_execute_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("site.yml");
        std::fs::write(&file, "site_name: Docs\n").unwrap();

        let args = ConfigArgs {
            file,
            key: Some("theme.name".to_owned()),
            format: Format::Yaml,
        };
        let err = args.execute(&Output::new()).unwrap_err();

        assert_eq!(err.to_string(), "Key not found: theme.name");
    }

    #[test]
    fn test_execute_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConfigArgs {
            file: dir.path().join("missing.yml"),
            key: None,
            format: Format::Json,
        };
        let err = args.execute(&Output::new()).unwrap_err();

        assert!(matches!(
            err,
            CliError::Config(quire_config::ConfigError::NotFound(_))
        ));
    }
}
