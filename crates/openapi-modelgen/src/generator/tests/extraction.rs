use serde_json::json;

use super::support::{class_names, extract, extract_schemas, find, petstore};
use crate::generator::{CodegenConfig, ast::TypeKind};

#[test]
fn test_petstore_models() {
  let (models, stats) = extract(&petstore(), &CodegenConfig::default());

  assert_eq!(class_names(&models), ["Pet", "NewPet", "Error"]);

  let pet = find(&models, "Pet");
  assert_eq!(pet.signature, "NewPet & {\n  id: number;\n}");
  assert_eq!(pet.kind, TypeKind::None);
  assert_eq!(pet.file_name, "pet.model.ts");
  assert_eq!(pet.imports, ["import {NewPet} from './new-pet.model';"]);
  assert_eq!(pet.members.len(), 2);
  assert_eq!(pet.members[0].class_name.as_deref(), Some("NewPet"));
  assert_eq!(pet.members[1].class_name, None);
  assert_eq!(pet.members[1].signature, "{\n  id: number;\n}");

  let new_pet = find(&models, "NewPet");
  assert_eq!(new_pet.kind, TypeKind::Class);
  assert_eq!(new_pet.signature, "NewPet");
  assert_eq!(new_pet.declaration.as_deref(), Some("{\n  name: string;\n  tag?: string;\n}"));
  assert!(new_pet.imports.is_empty());

  let error = find(&models, "Error");
  assert_eq!(error.declaration.as_deref(), Some("{\n  code: number;\n  message: string;\n}"));
  assert_eq!(error.file_name, "error.model.ts");

  assert_eq!(stats.models_generated, 3);
  assert_eq!(stats.classes_generated, 2);
  assert_eq!(stats.aliases_generated, 1);
  assert_eq!(stats.schemas_skipped, 0);
  assert!(stats.warnings.is_empty());
}

#[test]
fn test_inline_array_of_objects() {
  let (models, _) = extract_schemas(json!({
    "dataSetList": {
      "type": "object",
      "properties": {
        "total": { "type": "integer" },
        "apis": {
          "type": "array",
          "items": {
            "type": "object",
            "properties": {
              "apiKey": { "type": "string" },
              "apiVersionNumber": { "type": "string" }
            }
          }
        }
      }
    }
  }));

  let model = find(&models, "DataSetList");
  assert_eq!(model.name, "dataSetList");
  assert_eq!(model.file_name, "data-set-list.model.ts");

  let signatures: Vec<_> = model.properties.iter().map(|property| property.signature.as_str()).collect();
  assert_eq!(
    signatures,
    [
      "total?: number;",
      "apis?: {\n  apiKey?: string;\n  apiVersionNumber?: string;\n}[];"
    ]
  );
}

#[test]
fn test_cycle_through_named_sibling() {
  let (models, stats) = extract_schemas(json!({
    "Shape": { "oneOf": [{ "$ref": "#/components/schemas/Circle" }] },
    "Circle": {
      "type": "object",
      "properties": { "next": { "$ref": "#/components/schemas/Shape" } }
    }
  }));

  assert_eq!(class_names(&models), ["Shape", "Circle"], "each name exactly once");
  assert_eq!(find(&models, "Shape").signature, "Circle");
  assert_eq!(
    find(&models, "Circle").declaration.as_deref(),
    Some("{\n  next?: Shape;\n}")
  );
  assert_eq!(find(&models, "Shape").imports, ["import {Circle} from './circle.model';"]);
  assert_eq!(find(&models, "Circle").imports, ["import {Shape} from './shape.model';"]);
  assert_eq!(stats.cycles_detected, 1);
  assert_eq!(stats.cycle_details, [vec!["Circle".to_string(), "Shape".to_string()]]);
}

#[test]
fn test_primitive_and_extension_schemas_are_skipped() {
  let (models, stats) = extract_schemas(json!({
    "Status": { "type": "string", "enum": ["available", "sold"] },
    "x-internal": { "type": "object", "properties": { "a": { "type": "string" } } },
    "Pet": {
      "type": "object",
      "required": ["status"],
      "properties": {
        "status": { "$ref": "#/components/schemas/Status" }
      }
    }
  }));

  assert_eq!(class_names(&models), ["Pet"]);
  let pet = find(&models, "Pet");
  assert_eq!(pet.properties[0].signature, r#"status: "available" | "sold";"#);
  assert_eq!(
    pet.properties[0].import.as_deref(),
    Some("import {Status} from './status.model';"),
    "the property keeps its import"
  );
  assert!(pet.imports.is_empty(), "no import of a module that is never written");
  assert_eq!(stats.schemas_skipped, 2);
}

#[test]
fn test_aliases_keep_the_first_name() {
  let (models, stats) = extract_schemas(json!({
    "Pet": { "type": "object", "properties": { "name": { "type": "string" } } },
    "Animal": { "$ref": "#/components/schemas/Pet" }
  }));

  assert_eq!(class_names(&models), ["Pet"]);
  assert_eq!(stats.schemas_skipped, 1);
}

#[test]
fn test_imports_deduplicated_and_exclude_self() {
  let (models, _) = extract_schemas(json!({
    "Person": {
      "type": "object",
      "properties": {
        "friend": { "$ref": "#/components/schemas/Person" },
        "home": { "$ref": "#/components/schemas/Address" },
        "work": { "$ref": "#/components/schemas/Address" },
        "previous": { "type": "array", "items": { "$ref": "#/components/schemas/Address" } }
      }
    },
    "Address": { "type": "object", "properties": { "street": { "type": "string" } } }
  }));

  assert_eq!(
    find(&models, "Person").imports,
    ["import {Address} from './address.model';"]
  );
}

#[test]
fn test_named_array_model() {
  let (models, stats) = extract_schemas(json!({
    "Pets": { "type": "array", "items": { "$ref": "#/components/schemas/Pet" } },
    "Pet": { "type": "object", "properties": { "name": { "type": "string" } } }
  }));

  let pets = find(&models, "Pets");
  assert_eq!(pets.signature, "Pet[]");
  assert_eq!(pets.name, "Pet[]");
  assert_eq!(pets.kind, TypeKind::None);
  assert_eq!(pets.item_type.as_ref().map(|item| item.signature.as_str()), Some("Pet"));
  assert_eq!(pets.imports, ["import {Pet} from './pet.model';"]);
  assert_eq!(stats.aliases_generated, 1);
}

#[test]
fn test_shared_anonymous_schema_is_named() {
  let (models, stats) = extract_schemas(json!({
    "Pet": {
      "type": "object",
      "properties": {
        "owner": {
          "type": "object",
          "properties": { "name": { "type": "string" } }
        }
      }
    },
    "Shop": {
      "type": "object",
      "properties": {
        "keeper": { "$ref": "#/components/schemas/Pet/properties/owner" }
      }
    }
  }));

  assert_eq!(class_names(&models), ["Pet", "PetOwner", "Shop"]);
  assert_eq!(find(&models, "PetOwner").file_name, "pet-owner.model.ts");
  assert_eq!(find(&models, "Pet").properties[0].signature, "owner?: PetOwner;");
  assert_eq!(find(&models, "Shop").imports, ["import {PetOwner} from './pet-owner.model';"]);
  assert_eq!(stats.synthesized_names, 1);
}

#[test]
fn test_shared_naming_can_be_disabled() {
  let document = super::support::document(json!({
    "Pet": {
      "type": "object",
      "properties": {
        "owner": { "type": "object", "properties": { "name": { "type": "string" } } }
      }
    },
    "Shop": {
      "type": "object",
      "properties": { "keeper": { "$ref": "#/components/schemas/Pet/properties/owner" } }
    }
  }));
  let config = CodegenConfig::builder().name_shared_schemas(false).build();
  let (models, stats) = extract(&document, &config);

  assert_eq!(class_names(&models), ["Pet", "Shop"]);
  assert_eq!(find(&models, "Shop").properties[0].signature, "keeper?: {\n  name?: string;\n};");
  assert_eq!(stats.synthesized_names, 0);
}

#[test]
fn test_anonymous_self_reference_is_named() {
  let (models, stats) = extract_schemas(json!({
    "Tree": {
      "type": "object",
      "properties": {
        "root": {
          "type": "object",
          "properties": {
            "children": {
              "type": "array",
              "items": { "$ref": "#/components/schemas/Tree/properties/root" }
            }
          }
        }
      }
    }
  }));

  assert_eq!(class_names(&models), ["Tree", "TreeRoot"]);
  assert_eq!(
    find(&models, "TreeRoot").declaration.as_deref(),
    Some("{\n  children?: TreeRoot[];\n}")
  );
  assert_eq!(stats.cycles_detected, 1);
}

#[test]
fn test_custom_module_suffix() {
  let config = CodegenConfig::builder().module_suffix(".entity").build();
  let (models, _) = extract(&petstore(), &config);

  let pet = find(&models, "Pet");
  assert_eq!(pet.file_name, "pet.entity.ts");
  assert_eq!(pet.imports, ["import {NewPet} from './new-pet.entity';"]);
}

#[test]
fn test_model_suffix_is_dropped_from_file_name() {
  let (models, _) = extract_schemas(json!({
    "PetModel": { "type": "object", "properties": { "id": { "type": "integer" } } }
  }));
  let model = find(&models, "PetModel");
  assert_eq!(model.file_name, "pet.model.ts");
}

#[test]
fn test_model_spec_serializes_camel_case() {
  let (models, _) = extract(&petstore(), &CodegenConfig::default());
  let value = serde_json::to_value(find(&models, "Pet")).expect("serializable");

  assert_eq!(value["className"], "Pet");
  assert_eq!(value["fileName"], "pet.model.ts");
  assert_eq!(value["kind"], "none");
  assert_eq!(value["members"][0]["className"], "NewPet");
  assert!(value.get("itemType").is_none());

  let new_pet = serde_json::to_value(find(&models, "NewPet")).expect("serializable");
  assert_eq!(new_pet["properties"][1]["type"], "string");
  assert_eq!(new_pet["properties"][1]["decoration"], "@property({name: 'tag'})");
}
