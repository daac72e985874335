use itertools::Itertools;
use serde_json::Value;
use strum::Display;

use super::{
  cache::Visit,
  type_resolver::{ResolveOptions, TypeResolver},
};
use crate::generator::{
  ast::TypeKind,
  schema_arena::{SchemaId, SchemaNode},
};

/// Target primitive keywords.
///
/// | type | format | result |
/// |---|---|---|
/// | integer, number | | `number` |
/// | boolean | | `boolean` |
/// | string | date, date-time | `Date` |
/// | string | binary | `Buffer` |
/// | string | byte, password, other | `string` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub(crate) enum PrimitiveType {
  #[strum(serialize = "number")]
  Number,
  #[strum(serialize = "boolean")]
  Boolean,
  #[strum(serialize = "Date")]
  Date,
  #[strum(serialize = "Buffer")]
  Buffer,
  #[default]
  #[strum(serialize = "string")]
  String,
}

impl PrimitiveType {
  pub(crate) fn from_schema(schema_type: Option<&str>, format: Option<&str>) -> Self {
    match (schema_type, format) {
      (Some("integer" | "number"), _) => Self::Number,
      (Some("boolean"), _) => Self::Boolean,
      (Some("string"), Some("date" | "date-time")) => Self::Date,
      (Some("string"), Some("binary")) => Self::Buffer,
      _ => Self::String,
    }
  }
}

/// Renders a JSON value as a compact literal usable in a type or initializer.
pub(crate) fn to_literal(value: &Value) -> String {
  value.to_string()
}

/// The schema's own `default` as a literal.
pub(crate) fn schema_default(node: &SchemaNode) -> Option<String> {
  node.default.as_ref().map(to_literal)
}

/// The schema's `default` as a literal, when the caller asked for defaults.
pub(crate) fn default_literal(node: &SchemaNode, options: ResolveOptions) -> Option<String> {
  schema_default(node).filter(|_| options.include_default)
}

/// ` = <literal>`, or nothing.
pub(crate) fn default_suffix(initializer: Option<&str>) -> String {
  initializer.map(|literal| format!(" = {literal}")).unwrap_or_default()
}

/// The primitive keyword, or the literal union of the enum values when there are any.
pub(crate) fn primitive_declaration(node: &SchemaNode) -> String {
  match node.enum_values.as_deref() {
    Some(values) if !values.is_empty() => values.iter().map(to_literal).join(" | "),
    _ => PrimitiveType::from_schema(node.schema_type.as_deref(), node.format.as_deref()).to_string(),
  }
}

impl TypeResolver<'_> {
  pub(super) fn map_primitive(&mut self, id: SchemaId, node: &SchemaNode) -> SchemaId {
    if self.mapping.begin(id) != Visit::Enter {
      return id;
    }

    let declaration = primitive_declaration(node);
    let import = self.import_for(id);

    let spec = self.mapping.entry(id);
    spec.kind = TypeKind::Primitive;
    spec.signature.clone_from(&declaration);
    spec.initializer = schema_default(node);
    spec.name.get_or_insert_with(|| declaration.clone());
    spec.declaration = Some(declaration);
    spec.import = import;

    self.mapping.finish(id);
    id
  }
}
