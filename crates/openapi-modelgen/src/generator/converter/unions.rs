use itertools::Itertools;

use super::{
  cache::Visit,
  primitives::schema_default,
  type_resolver::TypeResolver,
};
use crate::generator::schema_arena::{CompositeKeyword, SchemaId, SchemaNode};

impl TypeResolver<'_> {
  /// `oneOf`/`anyOf` become a union, `allOf` an intersection.
  ///
  /// Members are written without their defaults and deduplicated by identity:
  /// two distinct schemas with identical output stay separate members.
  pub(super) fn map_composite(
    &mut self,
    id: SchemaId,
    node: &SchemaNode,
    keyword: CompositeKeyword,
    candidates: &[SchemaId],
  ) -> SchemaId {
    if self.mapping.begin(id) != Visit::Enter {
      return id;
    }

    let members: Vec<SchemaId> = candidates
      .iter()
      .map(|candidate| self.resolve(*candidate))
      .unique()
      .collect();

    let signature = members
      .iter()
      .map(|member| self.mapping.signature_of(*member))
      .join(keyword.separator());
    let import = self.import_for(id);

    let spec = self.mapping.entry(id);
    spec.signature = signature;
    spec.initializer = schema_default(node);
    spec.members = members;
    spec.import = import;

    self.mapping.finish(id);
    id
  }
}
