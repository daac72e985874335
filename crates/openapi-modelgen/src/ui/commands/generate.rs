use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{CodegenConfig, codegen::GeneratedFile, metrics::GenerationStats, orchestrator::Orchestrator},
  ui::{Colors, GenerateCommand, OutputFormat, colors::Role},
  utils::spec::SpecLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: Option<PathBuf>,
  pub format: OutputFormat,
  pub codegen: CodegenConfig,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      input,
      output,
      format,
      module_suffix,
      no_shared_names,
      verbose,
      quiet,
    } = command;

    if format == OutputFormat::Files && output.is_none() {
      anyhow::bail!("Output directory (-o) is required when writing model files");
    }

    let codegen = CodegenConfig::builder()
      .module_suffix(module_suffix)
      .name_shared_schemas(!no_shared_names)
      .build();

    Ok(Self {
      input,
      output,
      format,
      codegen,
      verbose,
      quiet,
    })
  }

  async fn load_document(&self) -> anyhow::Result<serde_json::Value> {
    SpecLoader::open(&self.input).await?.parse()
  }
}

/// Writes every file under `output`, creating the directory first.
pub(crate) async fn write_files(output: &Path, files: &[GeneratedFile]) -> anyhow::Result<()> {
  tokio::fs::create_dir_all(output).await?;
  for file in files {
    tokio::fs::write(output.join(&file.file_name), &file.contents).await?;
  }
  Ok(())
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  /// Progress goes to stderr when stdout carries the JSON model list.
  fn emit(&self, line: &str) {
    if self.config.quiet {
      return;
    }
    match self.config.format {
      OutputFormat::Files => println!("{line}"),
      OutputFormat::Json => eprintln!("{line}"),
    }
  }

  fn info(&self, message: &str) {
    self.emit(&format!("{} {message}", format_timestamp().with(self.colors.term(Role::Timestamp))));
  }

  fn stat(&self, label: &str, value: String) {
    self.emit(&format!(
      "            {:<25} {}",
      label.with(self.colors.term(Role::Label)),
      value.with(self.colors.term(Role::Value))
    ));
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading schema document from: {}", self.config.input.display())
        .with(self.colors.term(Role::Progress))
        .to_string(),
    );
  }

  fn log_generating(&self) {
    self.info(&"Generating models...".with(self.colors.term(Role::Progress)).to_string());
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Models generated:", stats.models_generated.to_string());
    self.stat("", format!("{} classes", stats.classes_generated));
    self.stat("", format!("{} type aliases", stats.aliases_generated));
    if stats.synthesized_names > 0 {
      self.stat("Shared schemas named:", stats.synthesized_names.to_string());
    }
    if stats.schemas_skipped > 0 && self.config.verbose {
      self.stat("Schemas skipped:", stats.schemas_skipped.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_cycles(stats);
    self.print_warnings(stats);
  }

  fn print_cycles(&self, stats: &GenerationStats) {
    if stats.cycles_detected == 0 {
      return;
    }

    self.stat("Cycles:", stats.cycles_detected.to_string());

    if self.config.verbose {
      for (i, cycle) in stats.cycle_details.iter().enumerate() {
        eprintln!(
          "              {}: {}",
          format!("Cycle {}", i + 1).with(self.colors.term(Role::Attention)),
          cycle.join(" -> ").with(self.colors.term(Role::Detail))
        );
      }
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || !self.config.verbose || self.config.quiet {
      return;
    }

    eprintln!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.term(Role::Attention)),
        warning.to_string().with(self.colors.term(Role::Progress))
      );
    }
  }

  fn log_writing(&self, output: &Path) {
    self.info(
      &format!("Writing to: {}", output.display())
        .with(self.colors.term(Role::Progress))
        .to_string(),
    );
  }

  fn log_success(&self, files: usize) {
    if self.config.quiet {
      return;
    }
    println!();
    println!(
      "{} {}",
      format_timestamp().with(self.colors.term(Role::Timestamp)),
      format!("Successfully wrote {files} model modules").with(self.colors.term(Role::Success))
    );
  }
}

pub async fn generate_models(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let document = config.load_document().await?;

  logger.log_generating();
  let orchestrator = Orchestrator::new(document, config.codegen.clone());
  let source_path = config.input.display().to_string();

  match (config.format, config.output.as_deref()) {
    (OutputFormat::Json, _) => {
      let output = orchestrator.generate();
      logger.print_statistics(&output.stats);
      println!("{}", serde_json::to_string_pretty(&output.models)?);
    }
    (OutputFormat::Files, Some(output)) => {
      let (files, stats) = orchestrator.generate_modules(&source_path);
      logger.print_statistics(&stats);
      logger.log_writing(output);
      write_files(output, &files).await?;
      logger.log_success(files.len());
    }
    (OutputFormat::Files, None) => anyhow::bail!("Output directory (-o) is required when writing model files"),
  }

  Ok(())
}
