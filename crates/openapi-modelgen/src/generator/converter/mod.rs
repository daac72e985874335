//! The schema graph walker: one memoized [`TypeSpec`](crate::generator::ast::TypeSpec)
//! per schema node, produced by shape-specific mappers that recurse through
//! [`TypeResolver::resolve`].

mod arrays;
pub(crate) mod cache;
mod primitives;
mod structs;
pub(crate) mod type_resolver;
mod unions;

pub(crate) use cache::TypeMapping;
pub(crate) use type_resolver::{ResolveOptions, SchemaShape, TypeResolver};

#[cfg(test)]
mod tests;
