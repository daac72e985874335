use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Identity of a schema node. Two nodes with identical content but different ids
/// are different schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SchemaId(usize);

impl SchemaId {
  pub(crate) const fn index(self) -> usize {
    self.0
  }
}

impl fmt::Display for SchemaId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "#{}", self.0)
  }
}

/// One schema definition with its references already replaced by node ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaNode {
  pub schema_type: Option<String>,
  pub format: Option<String>,
  /// `None` when the keyword is absent; an empty map still marks the node as object-shaped.
  pub properties: Option<IndexMap<String, SchemaId>>,
  pub required: Vec<String>,
  pub items: Option<SchemaId>,
  pub one_of: Option<Vec<SchemaId>>,
  pub any_of: Option<Vec<SchemaId>>,
  pub all_of: Option<Vec<SchemaId>>,
  pub enum_values: Option<Vec<Value>>,
  pub default: Option<Value>,
}

impl SchemaNode {
  pub fn is_type(&self, schema_type: &str) -> bool {
    self.schema_type.as_deref() == Some(schema_type)
  }

  pub fn is_required(&self, property: &str) -> bool {
    self.required.iter().any(|name| name == property)
  }

  /// Every node this one points at, in declaration order.
  pub fn children(&self) -> impl Iterator<Item = (ChildEdge<'_>, SchemaId)> {
    let properties = self
      .properties
      .iter()
      .flatten()
      .map(|(name, id)| (ChildEdge::Property(name.as_str()), *id));
    let items = self.items.map(|id| (ChildEdge::Items, id));
    let composites = [
      (CompositeKeyword::OneOf, &self.one_of),
      (CompositeKeyword::AnyOf, &self.any_of),
      (CompositeKeyword::AllOf, &self.all_of),
    ]
    .into_iter()
    .flat_map(|(keyword, candidates)| {
      candidates
        .iter()
        .flatten()
        .enumerate()
        .map(move |(position, id)| (ChildEdge::Candidate(keyword, position), *id))
    });

    properties.chain(items).chain(composites)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompositeKeyword {
  OneOf,
  AnyOf,
  AllOf,
}

impl CompositeKeyword {
  pub const fn separator(self) -> &'static str {
    match self {
      Self::OneOf | Self::AnyOf => " | ",
      Self::AllOf => " & ",
    }
  }
}

/// How a child is reached from its parent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildEdge<'a> {
  Property(&'a str),
  Items,
  Candidate(CompositeKeyword, usize),
}

/// Owns every schema node of one document plus the named `components.schemas` entries.
#[derive(Debug, Clone, Default)]
pub struct SchemaArena {
  nodes: Vec<SchemaNode>,
  components: IndexMap<String, SchemaId>,
}

impl SchemaArena {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, node: SchemaNode) -> SchemaId {
    let id = SchemaId(self.nodes.len());
    self.nodes.push(node);
    id
  }

  /// Allocates an empty node whose content is filled in later with [`SchemaArena::replace`],
  /// which is how self-referencing graphs are built.
  pub fn reserve(&mut self) -> SchemaId {
    self.insert(SchemaNode::default())
  }

  pub fn replace(&mut self, id: SchemaId, node: SchemaNode) {
    if let Some(slot) = self.nodes.get_mut(id.index()) {
      *slot = node;
    }
  }

  pub fn add_component(&mut self, name: impl Into<String>, id: SchemaId) {
    self.components.insert(name.into(), id);
  }

  /// Panics on ids from another arena.
  #[cfg(test)]
  pub fn node(&self, id: SchemaId) -> &SchemaNode {
    &self.nodes[id.index()]
  }

  pub fn get(&self, id: SchemaId) -> Option<&SchemaNode> {
    self.nodes.get(id.index())
  }

  pub fn components(&self) -> impl Iterator<Item = (&str, SchemaId)> {
    self.components.iter().map(|(name, id)| (name.as_str(), *id))
  }

  #[cfg(test)]
  pub fn component(&self, name: &str) -> Option<SchemaId> {
    self.components.get(name).copied()
  }

  #[cfg(test)]
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  #[cfg(test)]
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }
}
