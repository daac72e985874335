use std::collections::{BTreeMap, BTreeSet};

use crate::{
  generator::{
    ast::{ResolutionState, TypeSpec},
    schema_arena::SchemaId,
  },
  naming::{identifiers::to_class_name, modules::ModuleNaming},
};

/// Outcome of asking the table whether a schema should be resolved now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
  /// First visit; the entry is now marked in progress.
  Enter,
  /// Already resolved; the stored spec is final.
  Resolved,
  /// Re-entered while still resolving further up the stack.
  Cycle,
}

/// Memoization table mapping schema identity to its resolved [`TypeSpec`].
///
/// Created once per generation and threaded by `&mut` through the whole walk.
/// Every schema is resolved at most once; later visits get the stored entry,
/// even if it is still being filled in.
#[derive(Debug, Default)]
pub(crate) struct TypeMapping {
  specs: BTreeMap<SchemaId, TypeSpec>,
}

impl TypeMapping {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Pre-registers a named schema so references resolve to its class name
  /// and import before its body has been computed.
  pub(crate) fn register(&mut self, id: SchemaId, key: &str, naming: &ModuleNaming) {
    let class_name = to_class_name(key);
    let file_name = naming.file_name(key);

    let spec = self.entry(id);
    spec.import = Some(naming.import_statement(&class_name, &file_name));
    spec.name = Some(key.to_string());
    spec.class_name = Some(class_name);
    spec.file_name = Some(file_name);
    spec.properties.clear();
  }

  pub(crate) fn is_registered(&self, id: SchemaId) -> bool {
    self.specs.get(&id).is_some_and(TypeSpec::is_named)
  }

  pub(crate) fn class_names(&self) -> BTreeSet<String> {
    self.specs.values().filter_map(|spec| spec.class_name.clone()).collect()
  }

  pub(crate) fn get(&self, id: SchemaId) -> Option<&TypeSpec> {
    self.specs.get(&id)
  }

  pub(crate) fn entry(&mut self, id: SchemaId) -> &mut TypeSpec {
    self.specs.entry(id).or_default()
  }

  pub(crate) fn signature_of(&self, id: SchemaId) -> &str {
    self.specs.get(&id).map_or("", |spec| spec.signature.as_str())
  }

  pub(crate) fn import_of(&self, id: SchemaId) -> Option<&str> {
    self.specs.get(&id).and_then(|spec| spec.import.as_deref())
  }

  /// Marks the entry in progress on first visit.
  ///
  /// Re-entering an in-progress entry is a cycle: its signature becomes the
  /// class name when it has one, otherwise whatever declaration it has so far.
  pub(crate) fn begin(&mut self, id: SchemaId) -> Visit {
    let spec = self.entry(id);
    match spec.state {
      ResolutionState::Resolved => Visit::Resolved,
      ResolutionState::InProgress => {
        spec.signature = spec
          .class_name
          .clone()
          .or_else(|| spec.declaration.clone())
          .unwrap_or_default();
        Visit::Cycle
      }
      ResolutionState::Unvisited => {
        spec.state = ResolutionState::InProgress;
        Visit::Enter
      }
    }
  }

  pub(crate) fn finish(&mut self, id: SchemaId) {
    self.entry(id).state = ResolutionState::Resolved;
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.specs.len()
  }
}
