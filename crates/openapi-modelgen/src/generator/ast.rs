use serde::Serialize;
use strum::Display;

use crate::generator::schema_arena::SchemaId;

/// What a resolved schema turned into. Composites and arrays stay `None`; they are
/// recognized by their members or item type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TypeKind {
  #[default]
  None,
  Primitive,
  Class,
}

/// Progress of one schema through the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionState {
  #[default]
  Unvisited,
  InProgress,
  Resolved,
}

/// The resolved description of exactly one schema node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSpec {
  pub kind: TypeKind,
  /// Raw schema key for named schemas; arrays overwrite it with their element form.
  pub name: Option<String>,
  pub class_name: Option<String>,
  pub file_name: Option<String>,
  /// Body of the type: a field block for classes, a keyword or literal union for primitives.
  pub declaration: Option<String>,
  /// How the type is written wherever it is used, without any default.
  pub signature: String,
  /// The schema's own `default` literal. Use sites that want it append it themselves.
  pub initializer: Option<String>,
  pub properties: Vec<PropertySpec>,
  pub members: Vec<SchemaId>,
  pub item_type: Option<SchemaId>,
  pub import: Option<String>,
  pub state: ResolutionState,
}

impl TypeSpec {
  pub fn is_named(&self) -> bool {
    self.class_name.is_some()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySpec {
  /// Key exactly as it appears on the wire.
  pub name: String,
  #[serde(rename = "type")]
  pub type_signature: String,
  pub signature: String,
  pub decoration: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub import: Option<String>,
}

/// A model reference as seen from a composite or array model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSpec {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub class_name: Option<String>,
  pub signature: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub import: Option<String>,
}

/// One emitted model, detached from the resolution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSpec {
  pub name: String,
  pub class_name: String,
  pub file_name: String,
  pub kind: TypeKind,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub declaration: Option<String>,
  pub signature: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub initializer: Option<String>,
  pub properties: Vec<PropertySpec>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub members: Vec<MemberSpec>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub item_type: Option<MemberSpec>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub import: Option<String>,
  pub imports: Vec<String>,
}
