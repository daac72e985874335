use super::identifiers::to_module_stem;

pub(crate) const DEFAULT_MODULE_SUFFIX: &str = ".model";
pub(crate) const DEFAULT_FILE_EXTENSION: &str = "ts";

/// Derives model module file names and the import statements that point at them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ModuleNaming {
  module_suffix: String,
  file_extension: String,
}

impl Default for ModuleNaming {
  fn default() -> Self {
    Self::new(DEFAULT_MODULE_SUFFIX, DEFAULT_FILE_EXTENSION)
  }
}

impl ModuleNaming {
  pub(crate) fn new(module_suffix: impl Into<String>, file_extension: impl Into<String>) -> Self {
    Self {
      module_suffix: module_suffix.into(),
      file_extension: file_extension.into().trim_start_matches('.').to_string(),
    }
  }

  /// `NewPet` -> `new-pet.model.ts`
  pub(crate) fn file_name(&self, schema_key: &str) -> String {
    let stem = to_module_stem(schema_key);
    if self.file_extension.is_empty() {
      format!("{stem}{}", self.module_suffix)
    } else {
      format!("{stem}{}.{}", self.module_suffix, self.file_extension)
    }
  }

  /// Strips the file extension, leaving the specifier used in import statements.
  pub(crate) fn module_base_name<'a>(&self, file_name: &'a str) -> &'a str {
    if self.file_extension.is_empty() {
      return file_name;
    }
    file_name
      .strip_suffix(self.file_extension.as_str())
      .and_then(|rest| rest.strip_suffix('.'))
      .unwrap_or(file_name)
  }

  pub(crate) fn import_statement(&self, class_name: &str, file_name: &str) -> String {
    format!("import {{{class_name}}} from './{}';", self.module_base_name(file_name))
  }

  /// The statement a barrel module uses to re-export a model module.
  pub(crate) fn export_statement(&self, file_name: &str) -> String {
    format!("export * from './{}';", self.module_base_name(file_name))
  }

  pub(crate) fn index_file_name(&self) -> String {
    if self.file_extension.is_empty() {
      "index".to_string()
    } else {
      format!("index.{}", self.file_extension)
    }
  }
}
