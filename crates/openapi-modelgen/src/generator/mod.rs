pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod converter;
pub(crate) mod dereference;
pub(crate) mod metrics;
pub(crate) mod models;
pub mod orchestrator;
pub(crate) mod schema_arena;
pub(crate) mod schema_registry;

#[cfg(test)]
mod tests;

use crate::naming::modules::{DEFAULT_FILE_EXTENSION, DEFAULT_MODULE_SUFFIX, ModuleNaming};

pub(crate) const DEFAULT_EXTENSION_PREFIX: &str = "x-";

/// Knobs for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
pub struct CodegenConfig {
  /// Appended to every model module stem, e.g. `pet` + `.model`.
  #[builder(into, default = DEFAULT_MODULE_SUFFIX.to_string())]
  pub module_suffix: String,
  #[builder(into, default = DEFAULT_FILE_EXTENSION.to_string())]
  pub file_extension: String,
  /// Top-level keys starting with this are vendor extensions, not models.
  #[builder(into, default = DEFAULT_EXTENSION_PREFIX.to_string())]
  pub extension_prefix: String,
  /// Give positional names to anonymous schemas referenced from several places.
  #[builder(default = true)]
  pub name_shared_schemas: bool,
}

impl Default for CodegenConfig {
  fn default() -> Self {
    Self::builder().build()
  }
}

impl CodegenConfig {
  pub(crate) fn module_naming(&self) -> ModuleNaming {
    ModuleNaming::new(self.module_suffix.as_str(), self.file_extension.as_str())
  }
}
