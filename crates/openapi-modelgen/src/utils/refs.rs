use percent_encoding::percent_decode_str;

pub(crate) const COMPONENT_SCHEMAS_POINTER: &str = "/components/schemas";

/// Where a `$ref` points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RefTarget {
  /// A JSON pointer into the current document, already percent-decoded.
  Local(String),
  /// Anything that needs another document to resolve.
  External,
}

/// Parses a `$ref` value into a JSON pointer usable with [`serde_json::Value::pointer`].
///
/// Only same-document references (`#` fragments) are local. The fragment is
/// percent-decoded because OpenAPI documents routinely URL-encode component
/// names (`#/components/schemas/Pet%20Owner`); `~0`/`~1` escapes are left for
/// the pointer lookup to handle.
pub(crate) fn parse_ref_path(ref_path: &str) -> RefTarget {
  let Some(fragment) = ref_path.strip_prefix('#') else {
    return RefTarget::External;
  };

  if !fragment.is_empty() && !fragment.starts_with('/') {
    return RefTarget::External;
  }

  RefTarget::Local(percent_decode_str(fragment).decode_utf8_lossy().into_owned())
}

/// Escapes one JSON pointer reference token.
pub(crate) fn escape_pointer_token(token: &str) -> String {
  token.replace('~', "~0").replace('/', "~1")
}

pub(crate) fn component_schema_pointer(name: &str) -> String {
  format!("{COMPONENT_SCHEMAS_POINTER}/{}", escape_pointer_token(name))
}
