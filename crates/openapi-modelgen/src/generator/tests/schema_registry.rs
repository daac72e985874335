use std::collections::BTreeSet;

use serde_json::{Value, json};

use super::support::{document, load};
use crate::generator::{dereference::DereferencedDocument, schema_arena::SchemaId, schema_registry::SchemaRegistry};

fn roots(loaded: &DereferencedDocument) -> Vec<(String, SchemaId)> {
  loaded
    .arena
    .components()
    .map(|(name, id)| (name.to_string(), id))
    .collect()
}

fn shared_names(schemas: Value, used: &[&str]) -> Vec<String> {
  let loaded = load(&document(schemas));
  let registry = SchemaRegistry::new(&loaded.arena, roots(&loaded));
  let used: BTreeSet<String> = used.iter().map(|name| (*name).to_string()).collect();
  registry
    .shared_schemas(&used)
    .into_iter()
    .map(|shared| shared.name)
    .collect()
}

#[test]
fn test_reference_counts() {
  let loaded = load(&document(json!({
    "Pet": {
      "type": "object",
      "properties": {
        "owner": { "$ref": "#/components/schemas/Person" },
        "vet": { "$ref": "#/components/schemas/Person" },
        "name": { "type": "string" }
      }
    },
    "Person": { "type": "object" }
  })));
  let registry = SchemaRegistry::new(&loaded.arena, roots(&loaded));
  let person = loaded.arena.component("Person").expect("Person");
  let pet = loaded.arena.component("Pet").expect("Pet");

  assert_eq!(registry.reference_count(person), 2);
  assert_eq!(registry.reference_count(pet), 0);
  assert!(registry.is_root(person));
  assert!(
    registry.shared_schemas(&BTreeSet::new()).is_empty(),
    "top-level schemas are already named"
  );
}

#[test]
fn test_positional_segments() {
  let names = shared_names(
    json!({
      "Catalog": {
        "type": "object",
        "properties": {
          "entries": {
            "type": "array",
            "items": { "type": "object", "properties": { "sku": { "type": "string" } } }
          },
          "featured": {
            "oneOf": [
              { "type": "string" },
              { "type": "object", "properties": { "label": { "type": "string" } } }
            ]
          }
        }
      },
      "Page": {
        "type": "object",
        "properties": {
          "entry": { "$ref": "#/components/schemas/Catalog/properties/entries/items" },
          "banner": { "$ref": "#/components/schemas/Catalog/properties/featured/oneOf/1" }
        }
      }
    }),
    &[],
  );

  assert_eq!(names, ["CatalogEntriesItem", "CatalogFeaturedOption2"]);
}

#[test]
fn test_shared_primitives_stay_anonymous() {
  let names = shared_names(
    json!({
      "A": { "type": "object", "properties": { "code": { "type": "string", "enum": ["x", "y"] } } },
      "B": { "type": "object", "properties": { "code": { "$ref": "#/components/schemas/A/properties/code" } } }
    }),
    &[],
  );
  assert!(names.is_empty());
}

#[test]
fn test_synthesized_names_are_unique() {
  let names = shared_names(
    json!({
      "Pet": {
        "type": "object",
        "properties": { "owner": { "type": "object", "properties": { "id": { "type": "integer" } } } }
      },
      "Shop": {
        "type": "object",
        "properties": { "owner": { "$ref": "#/components/schemas/Pet/properties/owner" } }
      }
    }),
    &["Pet", "Shop", "PetOwner"],
  );
  assert_eq!(names, ["PetOwner2"]);
}

#[test]
fn test_scan_respects_switch() {
  let loaded = load(&document(json!({
    "Pet": {
      "type": "object",
      "properties": { "owner": { "type": "object", "properties": {} } }
    },
    "Shop": {
      "type": "object",
      "properties": { "owner": { "$ref": "#/components/schemas/Pet/properties/owner" } }
    }
  })));
  let registry = SchemaRegistry::new(&loaded.arena, roots(&loaded));

  assert_eq!(registry.scan(&BTreeSet::new(), true).shared.len(), 1);
  assert!(registry.scan(&BTreeSet::new(), false).shared.is_empty());
}

#[test]
fn test_cycle_detection() {
  let loaded = load(&document(json!({
    "Node": {
      "type": "object",
      "properties": { "next": { "$ref": "#/components/schemas/Node" } }
    },
    "Author": {
      "type": "object",
      "properties": { "books": { "type": "array", "items": { "$ref": "#/components/schemas/Book" } } }
    },
    "Book": {
      "type": "object",
      "properties": { "author": { "$ref": "#/components/schemas/Author" } }
    },
    "Leaf": { "type": "string" }
  })));
  let registry = SchemaRegistry::new(&loaded.arena, roots(&loaded));

  assert_eq!(
    registry.detect_cycles(),
    [
      vec!["Author".to_string(), "Author.books".to_string(), "Book".to_string()],
      vec!["Node".to_string()],
    ]
  );
}
