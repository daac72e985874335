use std::fmt::Write as _;

use itertools::Itertools;

use crate::{
  generator::{
    ast::{ModelSpec, TypeKind},
    orchestrator::CodeMetadata,
  },
  naming::modules::ModuleNaming,
};

const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");
const INDENT: &str = "  ";

/// One module ready to be written under the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
  pub file_name: String,
  pub contents: String,
}

/// Renders model specs into module text.
pub(crate) struct ModuleRenderer<'a> {
  metadata: &'a CodeMetadata,
  source_path: &'a str,
  naming: &'a ModuleNaming,
}

impl<'a> ModuleRenderer<'a> {
  pub(crate) fn new(metadata: &'a CodeMetadata, source_path: &'a str, naming: &'a ModuleNaming) -> Self {
    Self {
      metadata,
      source_path,
      naming,
    }
  }

  /// Every model module followed by the index module re-exporting them.
  pub(crate) fn render_all(&self, models: &[ModelSpec]) -> Vec<GeneratedFile> {
    models
      .iter()
      .map(|model| self.render_model(model))
      .chain(std::iter::once(self.render_index(models)))
      .collect()
  }

  pub(crate) fn render_model(&self, model: &ModelSpec) -> GeneratedFile {
    let mut contents = self.header();

    if !model.imports.is_empty() {
      contents.push_str(&model.imports.join("\n"));
      contents.push_str("\n\n");
    }

    match model.kind {
      TypeKind::Class => contents.push_str(&render_class(model)),
      TypeKind::Primitive | TypeKind::None => {
        let _ = writeln!(contents, "export type {} = {};", model.class_name, model.signature);
      }
    }

    GeneratedFile {
      file_name: model.file_name.clone(),
      contents,
    }
  }

  pub(crate) fn render_index(&self, models: &[ModelSpec]) -> GeneratedFile {
    let mut contents = self.header();
    for model in models {
      contents.push_str(&self.naming.export_statement(&model.file_name));
      contents.push('\n');
    }

    GeneratedFile {
      file_name: self.naming.index_file_name(),
      contents,
    }
  }

  fn header(&self) -> String {
    let description = self
      .metadata
      .description
      .as_deref()
      .map_or_else(|| "No description provided".to_string(), |text| text.lines().join("\n// "));

    format!(
      "// AUTO-GENERATED CODE - DO NOT EDIT!\n//\n// {}\n// Source: {}\n// Version: {}\n// Generated by `{GENERATOR_NAME}`\n//\n// {}\n\n",
      self.metadata.title, self.source_path, self.metadata.version, description
    )
  }
}

fn render_class(model: &ModelSpec) -> String {
  let fields = model
    .properties
    .iter()
    .map(|property| format!("{INDENT}{}\n{INDENT}{}", property.decoration, property.signature))
    .join("\n\n");

  if fields.is_empty() {
    format!("export class {} {{}}\n", model.class_name)
  } else {
    format!("export class {} {{\n{fields}\n}}\n", model.class_name)
  }
}
