mod extraction;
mod schema_registry;
mod support;
