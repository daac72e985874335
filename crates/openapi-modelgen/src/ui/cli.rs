use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "openapi-modelgen")]
#[command(author, version, about = "OpenAPI component schemas to model classes")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information from a schema document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate model modules from a schema document
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  /// Path to the OpenAPI JSON or YAML document
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Directory the model modules are written to (required for `--format files`)
  #[arg(short, long, value_name = "DIR")]
  pub output: Option<PathBuf>,

  /// Write one module per model, or print the model list as JSON
  #[arg(short, long, value_enum, default_value = "files")]
  pub format: OutputFormat,

  /// Suffix placed between the module stem and the file extension
  #[arg(long, value_name = "SUFFIX", default_value = ".model")]
  pub module_suffix: String,

  /// Leave anonymous schemas referenced from several places inline instead of naming them
  #[arg(long, default_value_t = false)]
  pub no_shared_names: bool,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
  Files,
  Json,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the models a document would produce
  Models {
    /// Path to the OpenAPI JSON or YAML document
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
