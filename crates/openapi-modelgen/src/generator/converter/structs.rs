use itertools::Itertools;

use super::{
  cache::Visit,
  primitives::schema_default,
  type_resolver::{ResolveOptions, TypeResolver},
};
use crate::{
  generator::{
    ast::{PropertySpec, TypeKind},
    schema_arena::{SchemaId, SchemaNode},
  },
  naming::identifiers::to_property_name,
};

const EMPTY_DECLARATION: &str = "{}";
const FIELD_INDENT: &str = "\n  ";

impl TypeResolver<'_> {
  /// `type: object` or any node carrying `properties`.
  ///
  /// Property types are written with their defaults so initializers end up on
  /// the fields. Named schemas are referenced by class name; anonymous ones
  /// inline their field block.
  pub(super) fn map_object(&mut self, id: SchemaId, node: &SchemaNode) -> SchemaId {
    self.mapping.entry(id).kind = TypeKind::Class;
    if self.mapping.begin(id) != Visit::Enter {
      return id;
    }

    let mut properties = Vec::new();
    for (key, child) in node.properties.iter().flatten() {
      let child = self.resolve(*child);
      properties.push(self.property_spec(node, key, child));
    }

    let declaration = if properties.is_empty() {
      EMPTY_DECLARATION.to_string()
    } else {
      format!(
        "{{{FIELD_INDENT}{}\n}}",
        properties.iter().map(|property| property.signature.as_str()).join(FIELD_INDENT)
      )
    };
    let import = self.import_for(id);

    let spec = self.mapping.entry(id);
    spec.signature = spec.class_name.clone().unwrap_or_else(|| declaration.clone());
    spec.initializer = schema_default(node);
    spec.declaration = Some(declaration);
    spec.properties = properties;
    spec.import = import;

    self.mapping.finish(id);
    id
  }

  fn property_spec(&self, owner: &SchemaNode, key: &str, child: SchemaId) -> PropertySpec {
    let type_signature = self.reference(child, ResolveOptions::with_default());
    let optional_marker = if owner.is_required(key) { "" } else { "?" };

    PropertySpec {
      name: key.to_string(),
      signature: format!("{}{optional_marker}: {type_signature};", to_property_name(key)),
      type_signature,
      decoration: property_decoration(key),
      import: self.mapping.import_of(child).map(String::from),
    }
  }
}

/// Keeps the wire key next to the rewritten identifier.
pub(crate) fn property_decoration(key: &str) -> String {
  let escaped = key.replace('\\', "\\\\").replace('\'', "\\'");
  format!("@property({{name: '{escaped}'}})")
}
