pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// 官方 KldB CSV 匯出檔的固定檔名
pub const DEFAULT_INPUT: &str =
    "KldB_2010,_V._2020-DE-2025-02-03-Gliederung_mit_Erläuterung.csv";
pub const DEFAULT_OUTPUT: &str = "kldb-4-neu.ttl";
pub const DEFAULT_TITLE: &str = "Klassifikation der Berufe - KldB 4-stellig (neu)";
pub const DEFAULT_DESCRIPTION: &str =
    "Hierarchische KldB bis Ebene 4 mit Kurzbeschreibungen und Fertigkeiten aus KldB 2010 V. 2020";
pub const DEFAULT_BASE_URI: &str = "http://w3id.org/openeduhub/vocabs/kldb/";
pub const DEFAULT_LANGUAGE: &str = "de";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "kldb-skos")]
#[command(about = "Convert the KldB occupation classification table to a SKOS taxonomy")]
pub struct CliConfig {
    /// Source table (defaults to the official KldB CSV export name)
    #[arg(long)]
    pub input: Option<String>,

    /// Destination for the Turtle document
    #[arg(long)]
    pub output: Option<String>,

    /// Optional TOML file with scheme metadata and paths
    #[arg(long)]
    pub config: Option<String>,

    /// Scheme title for the document header
    #[arg(long)]
    pub title: Option<String>,

    /// Scheme description for the document header
    #[arg(long)]
    pub description: Option<String>,

    /// Base URI the concept references resolve against
    #[arg(long)]
    pub base_uri: Option<String>,

    /// Language tag for all literals
    #[arg(long)]
    pub language: Option<String>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    /// Parse and analyze the input without writing any output
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 把設定檔填進尚未由命令列指定的欄位；命令列優先於檔案，檔案優先於預設值
    pub fn merge_toml(&mut self, file: &TomlConfig) {
        if let Some(scheme) = &file.scheme {
            if self.title.is_none() {
                self.title = scheme.title.clone();
            }
            if self.description.is_none() {
                self.description = scheme.description.clone();
            }
            if self.base_uri.is_none() {
                self.base_uri = scheme.base_uri.clone();
            }
            if self.language.is_none() {
                self.language = scheme.language.clone();
            }
        }

        if self.input.is_none() {
            self.input = file.input_path().map(str::to_string);
        }
        if self.output.is_none() {
            self.output = file.output_path().map(str::to_string);
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT)
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    fn scheme_title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    fn scheme_description(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    fn base_uri(&self) -> &str {
        self.base_uri.as_deref().unwrap_or(DEFAULT_BASE_URI)
    }

    fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", self.input_path())?;
        validation::validate_path("output", self.output_path())?;
        validation::validate_non_empty_string("title", self.scheme_title())?;
        validation::validate_non_empty_string("description", self.scheme_description())?;
        validation::validate_url("base_uri", self.base_uri())?;
        validation::validate_language_tag("language", self.language())?;

        if let Some(report) = &self.report {
            validation::validate_path("report", report)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliConfig {
        let mut full = vec!["kldb-skos"];
        full.extend_from_slice(args);
        CliConfig::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_without_flags_or_file() {
        let config = parse(&[]);

        assert_eq!(config.input_path(), DEFAULT_INPUT);
        assert_eq!(config.output_path(), "kldb-4-neu.ttl");
        assert_eq!(config.base_uri(), "http://w3id.org/openeduhub/vocabs/kldb/");
        assert_eq!(config.language(), "de");
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_flags_take_precedence_over_file() {
        let mut config = parse(&["--title", "Von der Kommandozeile"]);
        let file = TomlConfig::from_toml_str(
            r#"
[scheme]
title = "Aus der Datei"
language = "en"
"#,
        )
        .unwrap();

        config.merge_toml(&file);

        assert_eq!(config.scheme_title(), "Von der Kommandozeile");
        assert_eq!(config.language(), "en");
    }

    #[test]
    fn test_file_fills_missing_paths() {
        let mut config = parse(&[]);
        let file = TomlConfig::from_toml_str(
            r#"
[input]
path = "tables/kldb.csv"

[output]
path = "out/kldb.ttl"
"#,
        )
        .unwrap();

        config.merge_toml(&file);

        assert_eq!(config.input_path(), "tables/kldb.csv");
        assert_eq!(config.output_path(), "out/kldb.ttl");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(parse(&["--base-uri", "not-a-uri"]).validate().is_err());
        assert!(parse(&["--language", "de_AT"]).validate().is_err());
        assert!(parse(&["--title", "   "]).validate().is_err());
    }
}
