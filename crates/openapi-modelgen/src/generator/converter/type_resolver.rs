use super::{
  cache::TypeMapping,
  primitives::{default_literal, default_suffix},
};
use crate::{
  generator::schema_arena::{CompositeKeyword, SchemaArena, SchemaId, SchemaNode},
  naming::modules::ModuleNaming,
};

const OBJECT_TYPE: &str = "object";
const ARRAY_TYPE: &str = "array";

static EMPTY_SCHEMA: SchemaNode = SchemaNode {
  schema_type: None,
  format: None,
  properties: None,
  required: Vec::new(),
  items: None,
  one_of: None,
  any_of: None,
  all_of: None,
  enum_values: None,
  default: None,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ResolveOptions {
  /// Append the schema's `default` as a ` = value` suffix to the reference.
  pub(crate) include_default: bool,
}

impl ResolveOptions {
  pub(crate) const fn with_default() -> Self {
    Self { include_default: true }
  }

  pub(crate) const fn without_default() -> Self {
    Self { include_default: false }
  }
}

/// The structural shape a schema is mapped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SchemaShape<'a> {
  Composite {
    keyword: CompositeKeyword,
    candidates: &'a [SchemaId],
  },
  Array {
    items: Option<SchemaId>,
  },
  Object,
  Primitive,
}

type Recognizer = fn(&SchemaNode) -> Option<SchemaShape<'_>>;

/// Checked in order; the first match wins and anything unmatched is a primitive.
const RECOGNIZERS: [Recognizer; 3] = [composite_shape, array_shape, object_shape];

impl<'a> SchemaShape<'a> {
  pub(crate) fn classify(node: &'a SchemaNode) -> Self {
    RECOGNIZERS
      .iter()
      .find_map(|recognize| recognize(node))
      .unwrap_or(Self::Primitive)
  }
}

/// `oneOf`, then `anyOf`, then `allOf`; only the first keyword present is used.
fn composite_shape(node: &SchemaNode) -> Option<SchemaShape<'_>> {
  [
    (CompositeKeyword::OneOf, &node.one_of),
    (CompositeKeyword::AnyOf, &node.any_of),
    (CompositeKeyword::AllOf, &node.all_of),
  ]
  .into_iter()
  .find_map(|(keyword, candidates)| {
    candidates
      .as_deref()
      .map(|candidates| SchemaShape::Composite { keyword, candidates })
  })
}

fn array_shape(node: &SchemaNode) -> Option<SchemaShape<'_>> {
  node
    .is_type(ARRAY_TYPE)
    .then_some(SchemaShape::Array { items: node.items })
}

fn object_shape(node: &SchemaNode) -> Option<SchemaShape<'_>> {
  (node.is_type(OBJECT_TYPE) || node.properties.is_some()).then_some(SchemaShape::Object)
}

/// Single recursive entry point for turning schema nodes into type specs.
///
/// Never fails: shapes it cannot make sense of degrade to the string primitive.
pub(crate) struct TypeResolver<'a> {
  pub(super) arena: &'a SchemaArena,
  pub(super) mapping: &'a mut TypeMapping,
  pub(super) naming: &'a ModuleNaming,
}

impl<'a> TypeResolver<'a> {
  pub(crate) fn new(arena: &'a SchemaArena, mapping: &'a mut TypeMapping, naming: &'a ModuleNaming) -> Self {
    Self { arena, mapping, naming }
  }

  /// Resolves `id` and returns the key of its entry in the mapping.
  ///
  /// The stored signature never carries a default; callers that want one ask
  /// for it through [`TypeResolver::reference`].
  pub(crate) fn resolve(&mut self, id: SchemaId) -> SchemaId {
    let arena = self.arena;
    let node = arena.get(id).unwrap_or(&EMPTY_SCHEMA);

    match SchemaShape::classify(node) {
      SchemaShape::Composite { keyword, candidates } => self.map_composite(id, node, keyword, candidates),
      SchemaShape::Array { items } => self.map_array(id, node, items),
      SchemaShape::Object => self.map_object(id, node),
      SchemaShape::Primitive => self.map_primitive(id, node),
    }
  }

  /// How a use site writes the resolved schema `id`.
  pub(crate) fn reference(&self, id: SchemaId, options: ResolveOptions) -> String {
    reference_of(self.arena, &*self.mapping, id, options)
  }

  /// Import statement for an entry that was registered under a module name.
  pub(super) fn import_for(&self, id: SchemaId) -> Option<String> {
    let spec = self.mapping.get(id)?;
    let class_name = spec.class_name.as_deref()?;
    let file_name = spec.file_name.as_deref()?;
    Some(self.naming.import_statement(class_name, file_name))
  }
}

/// The stored signature of `id`, followed by ` = <default>` when `options`
/// asks for defaults and the schema has one.
pub(crate) fn reference_of(arena: &SchemaArena, mapping: &TypeMapping, id: SchemaId, options: ResolveOptions) -> String {
  let initializer = arena.get(id).and_then(|node| default_literal(node, options));
  format!("{}{}", mapping.signature_of(id), default_suffix(initializer.as_deref()))
}
