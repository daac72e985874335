use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use serde_json::Value;

use crate::{
  generator::{
    metrics::GenerationWarning,
    schema_arena::{SchemaArena, SchemaId, SchemaNode},
  },
  utils::refs::{COMPONENT_SCHEMAS_POINTER, RefTarget, component_schema_pointer, escape_pointer_token, parse_ref_path},
};

const NULL_TYPE: &str = "null";

/// The loaded schema graph plus anything that had to be degraded along the way.
#[derive(Debug, Default)]
pub struct DereferencedDocument {
  pub arena: SchemaArena,
  pub warnings: Vec<GenerationWarning>,
}

/// Turns the `components.schemas` section of a document into a [`SchemaArena`].
///
/// Every JSON location becomes at most one node, so all local `$ref`s to the
/// same target share an id. A node's id is reserved before its children are
/// visited, which is what lets self-referencing schemas load.
pub struct Dereferencer<'a> {
  document: &'a Value,
  arena: SchemaArena,
  interned: HashMap<String, SchemaId>,
  following: BTreeSet<String>,
  warnings: Vec<GenerationWarning>,
}

impl<'a> Dereferencer<'a> {
  pub fn new(document: &'a Value) -> Self {
    Self {
      document,
      arena: SchemaArena::new(),
      interned: HashMap::new(),
      following: BTreeSet::new(),
      warnings: vec![],
    }
  }

  pub fn dereference(mut self) -> DereferencedDocument {
    let document = self.document;
    if let Some(Value::Object(schemas)) = document.pointer(COMPONENT_SCHEMAS_POINTER) {
      for (name, schema) in schemas {
        let id = self.intern_value(schema, component_schema_pointer(name));
        self.arena.add_component(name.clone(), id);
      }
    }

    DereferencedDocument {
      arena: self.arena,
      warnings: self.warnings,
    }
  }

  fn intern_value(&mut self, value: &'a Value, pointer: String) -> SchemaId {
    if let Some(ref_path) = value.get("$ref").and_then(Value::as_str) {
      let id = self.intern_ref(ref_path);
      self.interned.entry(pointer).or_insert(id);
      return id;
    }

    if let Some(id) = self.interned.get(&pointer) {
      return *id;
    }

    let id = self.arena.reserve();
    self.interned.insert(pointer.clone(), id);
    let node = self.build_node(value, &pointer);
    self.arena.replace(id, node);
    id
  }

  fn intern_ref(&mut self, ref_path: &str) -> SchemaId {
    let pointer = match parse_ref_path(ref_path) {
      RefTarget::Local(pointer) => pointer,
      RefTarget::External => {
        return self.degrade(GenerationWarning::ExternalReference {
          ref_path: ref_path.to_string(),
        });
      }
    };

    if let Some(id) = self.interned.get(&pointer) {
      return *id;
    }

    let document = self.document;
    let Some(target) = document.pointer(&pointer) else {
      return self.degrade(GenerationWarning::UnresolvedReference {
        ref_path: ref_path.to_string(),
      });
    };

    if !self.following.insert(ref_path.to_string()) {
      return self.degrade(GenerationWarning::CircularReference {
        ref_path: ref_path.to_string(),
      });
    }
    let id = self.intern_value(target, pointer);
    self.following.remove(ref_path);
    id
  }

  fn degrade(&mut self, warning: GenerationWarning) -> SchemaId {
    if !self.warnings.contains(&warning) {
      self.warnings.push(warning);
    }
    self.arena.insert(SchemaNode::default())
  }

  fn build_node(&mut self, value: &'a Value, pointer: &str) -> SchemaNode {
    let Value::Object(object) = value else {
      return SchemaNode::default();
    };

    let properties = match object.get("properties") {
      Some(Value::Object(props)) => {
        let mut properties = IndexMap::with_capacity(props.len());
        for (name, prop) in props {
          let child = format!("{pointer}/properties/{}", escape_pointer_token(name));
          properties.insert(name.clone(), self.intern_value(prop, child));
        }
        Some(properties)
      }
      _ => None,
    };

    let items = match object.get("items") {
      Some(items) if items.is_object() => Some(self.intern_value(items, format!("{pointer}/items"))),
      Some(Value::Array(tuple)) => tuple
        .first()
        .map(|first| self.intern_value(first, format!("{pointer}/items/0"))),
      _ => None,
    };

    SchemaNode {
      schema_type: object.get("type").and_then(schema_type_of),
      format: object.get("format").and_then(Value::as_str).map(String::from),
      properties,
      required: object
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).map(String::from).collect())
        .unwrap_or_default(),
      items,
      one_of: self.intern_candidates(object.get("oneOf"), pointer, "oneOf"),
      any_of: self.intern_candidates(object.get("anyOf"), pointer, "anyOf"),
      all_of: self.intern_candidates(object.get("allOf"), pointer, "allOf"),
      enum_values: object.get("enum").and_then(Value::as_array).cloned(),
      default: object.get("default").cloned(),
    }
  }

  fn intern_candidates(&mut self, value: Option<&'a Value>, pointer: &str, keyword: &str) -> Option<Vec<SchemaId>> {
    let Some(Value::Array(candidates)) = value else {
      return None;
    };

    Some(
      candidates
        .iter()
        .enumerate()
        .map(|(position, candidate)| self.intern_value(candidate, format!("{pointer}/{keyword}/{position}")))
        .collect(),
    )
  }
}

/// `type` may be a single name or, in OpenAPI 3.1, a list such as `["string", "null"]`.
fn schema_type_of(value: &Value) -> Option<String> {
  match value {
    Value::String(name) => Some(name.clone()),
    Value::Array(names) => names
      .iter()
      .filter_map(Value::as_str)
      .find(|name| *name != NULL_TYPE)
      .map(String::from),
    _ => None,
  }
}
