//! Orchestration for the schema document to model module pipeline.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::generator::{CodegenConfig, orchestrator::Orchestrator};
//!
//! let document = serde_json::from_str(&std::fs::read_to_string("openapi.json")?)?;
//! let orchestrator = Orchestrator::new(document, CodegenConfig::default());
//!
//! let output = orchestrator.generate();
//! println!("Generated {} models", output.stats.models_generated);
//! ```

use serde_json::Value;

use crate::generator::{
  CodegenConfig,
  ast::ModelSpec,
  codegen::{GeneratedFile, ModuleRenderer},
  dereference::Dereferencer,
  metrics::GenerationStats,
  models::ModelExtractor,
};

const UNTITLED: &str = "Untitled API";
const UNVERSIONED: &str = "0.0.0";

/// Runs dereferencing, model extraction and rendering for one document.
pub struct Orchestrator {
  document: Value,
  config: CodegenConfig,
}

/// Metadata about the document for generated module headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMetadata {
  /// `info.title`
  pub title: String,
  /// `info.version`
  pub version: String,
  /// `info.description`
  pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeneratedOutput {
  pub models: Vec<ModelSpec>,
  pub stats: GenerationStats,
}

impl Orchestrator {
  pub fn new(document: Value, config: CodegenConfig) -> Self {
    Self { document, config }
  }

  pub fn metadata(&self) -> CodeMetadata {
    let info = self.document.get("info");
    let text = |key: &str| info.and_then(|info| info.get(key)).and_then(Value::as_str).map(String::from);

    CodeMetadata {
      title: text("title").unwrap_or_else(|| UNTITLED.to_string()),
      version: text("version").unwrap_or_else(|| UNVERSIONED.to_string()),
      description: text("description"),
    }
  }

  /// Builds the model list.
  ///
  /// Never fails: references that cannot be followed degrade to untyped schemas
  /// and are reported in [`GenerationStats::warnings`].
  pub fn generate(&self) -> GeneratedOutput {
    let mut stats = GenerationStats::default();

    let dereferenced = Dereferencer::new(&self.document).dereference();
    stats.record_warnings(dereferenced.warnings);

    let models = ModelExtractor::new(&dereferenced.arena, &self.config).extract(&mut stats);

    GeneratedOutput { models, stats }
  }

  /// Renders one module per model plus an index module.
  pub fn generate_modules(&self, source_path: &str) -> (Vec<GeneratedFile>, GenerationStats) {
    let output = self.generate();
    let metadata = self.metadata();
    let naming = self.config.module_naming();

    let files = ModuleRenderer::new(&metadata, source_path, &naming).render_all(&output.models);
    (files, output.stats)
  }
}
