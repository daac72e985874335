use serde_json::{Value, json};

use crate::generator::{
  CodegenConfig,
  ast::ModelSpec,
  dereference::{DereferencedDocument, Dereferencer},
  metrics::GenerationStats,
  models::ModelExtractor,
};

pub(super) fn document(schemas: Value) -> Value {
  json!({
    "openapi": "3.0.0",
    "info": { "title": "Test API", "version": "1.0.0" },
    "paths": {},
    "components": { "schemas": schemas }
  })
}

pub(super) fn petstore() -> Value {
  json!({
    "openapi": "3.0.0",
    "info": {
      "title": "Swagger Petstore",
      "version": "1.0.0",
      "description": "A sample API that uses a petstore as an example"
    },
    "paths": {},
    "components": {
      "schemas": {
        "Pet": {
          "allOf": [
            { "$ref": "#/components/schemas/NewPet" },
            {
              "required": ["id"],
              "properties": {
                "id": { "type": "integer", "format": "int64" }
              }
            }
          ]
        },
        "NewPet": {
          "required": ["name"],
          "properties": {
            "name": { "type": "string" },
            "tag": { "type": "string" }
          }
        },
        "Error": {
          "required": ["code", "message"],
          "properties": {
            "code": { "type": "integer", "format": "int32" },
            "message": { "type": "string" }
          }
        }
      }
    }
  })
}

pub(super) fn load(document: &Value) -> DereferencedDocument {
  Dereferencer::new(document).dereference()
}

pub(super) fn extract(document: &Value, config: &CodegenConfig) -> (Vec<ModelSpec>, GenerationStats) {
  let loaded = load(document);
  let mut stats = GenerationStats::default();
  stats.record_warnings(loaded.warnings);
  let models = ModelExtractor::new(&loaded.arena, config).extract(&mut stats);
  (models, stats)
}

pub(super) fn extract_schemas(schemas: Value) -> (Vec<ModelSpec>, GenerationStats) {
  extract(&document(schemas), &CodegenConfig::default())
}

pub(super) fn find<'a>(models: &'a [ModelSpec], class_name: &str) -> &'a ModelSpec {
  models
    .iter()
    .find(|model| model.class_name == class_name)
    .unwrap_or_else(|| panic!("model {class_name} should be generated"))
}

pub(super) fn class_names(models: &[ModelSpec]) -> Vec<&str> {
  models.iter().map(|model| model.class_name.as_str()).collect()
}
