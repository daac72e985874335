use super::{
  cache::Visit,
  primitives::{PrimitiveType, schema_default},
  type_resolver::TypeResolver,
};
use crate::generator::schema_arena::{SchemaId, SchemaNode};

const ARRAY_MARKER: &str = "[]";

impl TypeResolver<'_> {
  /// `type: array`. The element is written without its default; an array
  /// without `items` holds the default primitive. The array is written in
  /// element form, so it imports what its item imports, even when it has a
  /// name itself.
  pub(super) fn map_array(&mut self, id: SchemaId, node: &SchemaNode, items: Option<SchemaId>) -> SchemaId {
    if self.mapping.begin(id) != Visit::Enter {
      return id;
    }

    let item_type = items.map(|item| self.resolve(item));
    let (element, import) = match item_type {
      Some(item) => (
        self.mapping.signature_of(item).to_string(),
        self.mapping.import_of(item).map(String::from),
      ),
      None => (PrimitiveType::default().to_string(), None),
    };
    let name = format!("{element}{ARRAY_MARKER}");

    let spec = self.mapping.entry(id);
    spec.signature.clone_from(&name);
    spec.initializer = schema_default(node);
    spec.name = Some(name);
    spec.item_type = item_type;
    spec.import = import;

    self.mapping.finish(id);
    id
  }
}
