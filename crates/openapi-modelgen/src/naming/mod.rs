pub(crate) mod identifiers;
pub(crate) mod modules;
