use serde_json::{Value, json};

use crate::{
  generator::{
    ast::TypeSpec,
    converter::{
      ResolveOptions, TypeMapping, TypeResolver,
      type_resolver::reference_of,
    },
    dereference::Dereferencer,
    schema_arena::{SchemaArena, SchemaId},
  },
  naming::modules::ModuleNaming,
};

pub(super) const ROOT: &str = "Root";

pub(super) fn document(schemas: Value) -> Value {
  json!({
    "openapi": "3.0.0",
    "info": { "title": "Test", "version": "1.0.0" },
    "components": { "schemas": schemas }
  })
}

/// An arena plus the table produced by resolving it.
pub(super) struct Resolved {
  pub(super) arena: SchemaArena,
  pub(super) mapping: TypeMapping,
  /// How [`Resolved::signature`] writes a component.
  pub(super) options: ResolveOptions,
}

impl Resolved {
  pub(super) fn id(&self, component: &str) -> SchemaId {
    self
      .arena
      .component(component)
      .unwrap_or_else(|| panic!("component {component} should be loaded"))
  }

  pub(super) fn spec(&self, component: &str) -> &TypeSpec {
    self.spec_of(self.id(component))
  }

  pub(super) fn spec_of(&self, id: SchemaId) -> &TypeSpec {
    self
      .mapping
      .get(id)
      .unwrap_or_else(|| panic!("schema {id} should have been resolved"))
  }

  /// The component as a use site with this run's options writes it.
  pub(super) fn signature(&self, component: &str) -> String {
    reference_of(&self.arena, &self.mapping, self.id(component), self.options)
  }

  pub(super) fn property_id(&self, component: &str, property: &str) -> SchemaId {
    self
      .arena
      .node(self.id(component))
      .properties
      .as_ref()
      .and_then(|properties| properties.get(property).copied())
      .unwrap_or_else(|| panic!("{component}.{property} should exist"))
  }
}

/// Loads `schemas`, pre-registers every component under its class name when
/// `register` is set, then resolves each component without defaults.
pub(super) fn resolve_schemas(schemas: Value, register: bool) -> Resolved {
  resolve_schemas_with(schemas, register, ResolveOptions::without_default())
}

pub(super) fn resolve_schemas_with(schemas: Value, register: bool, options: ResolveOptions) -> Resolved {
  let document = document(schemas);
  let loaded = Dereferencer::new(&document).dereference();
  let naming = ModuleNaming::default();
  let mut mapping = TypeMapping::new();

  let components: Vec<(String, SchemaId)> = loaded
    .arena
    .components()
    .map(|(name, id)| (name.to_string(), id))
    .collect();

  if register {
    for (name, id) in &components {
      mapping.register(*id, name, &naming);
    }
  }

  let mut resolver = TypeResolver::new(&loaded.arena, &mut mapping, &naming);
  for (_, id) in &components {
    resolver.resolve(*id);
  }

  Resolved {
    arena: loaded.arena,
    mapping,
    options,
  }
}

/// Resolves a single anonymous schema stored under [`ROOT`].
pub(super) fn resolve_inline(schema: Value, options: ResolveOptions) -> Resolved {
  resolve_schemas_with(json!({ ROOT: schema }), false, options)
}
