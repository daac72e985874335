use std::collections::BTreeSet;

use itertools::Itertools;

use crate::{
  generator::{
    CodegenConfig,
    ast::{MemberSpec, ModelSpec, TypeKind, TypeSpec},
    converter::{TypeMapping, TypeResolver},
    metrics::GenerationStats,
    schema_arena::{SchemaArena, SchemaId},
    schema_registry::SchemaRegistry,
  },
  naming::{identifiers::is_extension, modules::ModuleNaming},
};

/// Turns every top-level schema of an arena into model specs.
///
/// Pass 1 registers names so forward and cyclic references resolve to a class
/// name before any body exists. Pass 2 resolves each model through one shared
/// [`TypeMapping`] and collects the named, non-primitive results.
pub(crate) struct ModelExtractor<'a> {
  arena: &'a SchemaArena,
  config: &'a CodegenConfig,
  naming: ModuleNaming,
  mapping: TypeMapping,
}

impl<'a> ModelExtractor<'a> {
  pub(crate) fn new(arena: &'a SchemaArena, config: &'a CodegenConfig) -> Self {
    Self {
      arena,
      config,
      naming: config.module_naming(),
      mapping: TypeMapping::new(),
    }
  }

  pub(crate) fn extract(mut self, stats: &mut GenerationStats) -> Vec<ModelSpec> {
    let roots = self.register_components(stats);
    let order = self.register_shared_schemas(&roots, stats);

    let mut resolver = TypeResolver::new(self.arena, &mut self.mapping, &self.naming);
    for id in &order {
      resolver.resolve(*id);
    }

    let emitted: Vec<SchemaId> = order
      .into_iter()
      .filter(|id| {
        let keep = self.mapping.get(*id).is_some_and(is_model);
        if !keep {
          stats.record_skipped_schema();
        }
        keep
      })
      .collect();

    let emitted_imports: BTreeSet<String> = emitted.iter().filter_map(|id| self.own_import(*id)).collect();

    emitted
      .into_iter()
      .filter_map(|id| {
        let model = self.model_spec(id, &emitted_imports)?;
        stats.record_model(model.kind);
        Some(model)
      })
      .collect()
  }

  /// Extension keys and aliases of an already registered schema are skipped.
  fn register_components(&mut self, stats: &mut GenerationStats) -> Vec<(String, SchemaId)> {
    let mut roots = vec![];
    for (key, id) in self.arena.components() {
      if is_extension(key, &self.config.extension_prefix) || self.mapping.is_registered(id) {
        stats.record_skipped_schema();
        continue;
      }
      self.mapping.register(id, key, &self.naming);
      roots.push((key.to_string(), id));
    }
    roots
  }

  /// Names anonymous schemas reachable from more than one place and returns
  /// the resolution order: each top-level schema followed by the shared
  /// schemas first reached through it.
  fn register_shared_schemas(&mut self, roots: &[(String, SchemaId)], stats: &mut GenerationStats) -> Vec<SchemaId> {
    let registry = SchemaRegistry::new(self.arena, roots.iter().cloned());
    let scan = registry.scan(&self.mapping.class_names(), self.config.name_shared_schemas);

    stats.record_cycles(scan.cycles);
    stats.record_synthesized_names(scan.shared.len());

    for shared in &scan.shared {
      self.mapping.register(shared.id, &shared.name, &self.naming);
    }

    roots
      .iter()
      .flat_map(|(key, id)| {
        std::iter::once(*id).chain(
          scan
            .shared
            .iter()
            .filter(move |shared| shared.owner == *key)
            .map(|shared| shared.id),
        )
      })
      .collect()
  }

  fn own_import(&self, id: SchemaId) -> Option<String> {
    let spec = self.mapping.get(id)?;
    Some(
      self
        .naming
        .import_statement(spec.class_name.as_deref()?, spec.file_name.as_deref()?),
    )
  }

  fn member_spec(&self, id: SchemaId) -> MemberSpec {
    let spec = self.mapping.get(id);
    MemberSpec {
      class_name: spec.and_then(|spec| spec.class_name.clone()),
      signature: self.mapping.signature_of(id).to_string(),
      import: self.mapping.import_of(id).map(String::from),
    }
  }

  fn model_spec(&self, id: SchemaId, emitted_imports: &BTreeSet<String>) -> Option<ModelSpec> {
    let spec = self.mapping.get(id)?;
    let own_import = self.own_import(id);

    let members: Vec<MemberSpec> = spec.members.iter().map(|member| self.member_spec(*member)).collect();
    let item_type = spec.item_type.map(|item| self.member_spec(item));

    let imports = members
      .iter()
      .filter_map(|member| member.import.clone())
      .chain(spec.properties.iter().filter_map(|property| property.import.clone()))
      .chain(item_type.iter().filter_map(|item| item.import.clone()))
      .unique()
      .filter(|import| Some(import) != own_import.as_ref() && emitted_imports.contains(import))
      .collect();

    Some(ModelSpec {
      name: spec.name.clone()?,
      class_name: spec.class_name.clone()?,
      file_name: spec.file_name.clone()?,
      kind: spec.kind,
      declaration: spec.declaration.clone(),
      signature: spec.signature.clone(),
      initializer: spec.initializer.clone(),
      properties: spec.properties.clone(),
      members,
      item_type,
      import: spec.import.clone(),
      imports,
    })
  }
}

fn is_model(spec: &TypeSpec) -> bool {
  spec.is_named() && spec.kind != TypeKind::Primitive
}
