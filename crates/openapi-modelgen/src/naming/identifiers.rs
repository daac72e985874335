use std::{collections::BTreeSet, sync::LazyLock};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

const MODEL_SUFFIX: &str = "Model";

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores, and trims any leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Returns true for schema keys that carry vendor extensions rather than models.
pub(crate) fn is_extension(key: &str, prefix: &str) -> bool {
  !prefix.is_empty() && key.starts_with(prefix)
}

/// Converts a raw schema key into a class name (`TitleCase`).
///
/// # Rules:
/// 1. If the string starts with `-`, it's stripped and "Negative" is prepended to the result.
/// 2. Mixed-case input without separators keeps its capitalization; only the first letter is raised.
/// 3. Anything else is split on separators and camelCase boundaries, and each word is capitalized.
/// 4. If the result starts with a digit, it's prefixed with `T`.
/// 5. If the result is empty, it becomes `Unnamed`.
pub(crate) fn to_class_name(name: &str) -> String {
  let (negative, body) = name.strip_prefix('-').map_or((false, name), |rest| (true, rest));

  let keeps_casing = !body.contains(['-', '_', '.', ' '])
    && body.chars().any(|c| c.is_ascii_uppercase())
    && body.chars().any(|c| c.is_ascii_lowercase());

  let ascii = any_ascii(body);
  let ident: String = if keeps_casing {
    let cleaned: String = ascii.chars().filter(char::is_ascii_alphanumeric).collect();
    raise_first(&cleaned)
  } else {
    split_words(&ascii).into_iter().map(capitalize).collect()
  };

  match ident.as_bytes().first() {
    None => "Unnamed".to_string(),
    Some(_) if negative => format!("Negative{ident}"),
    Some(first) if first.is_ascii_digit() => format!("T{ident}"),
    Some(_) => ident,
  }
}

/// Converts a wire-format property key into a property identifier (`camelCase`).
///
/// The original key is kept separately by callers, so the rewrite only has to
/// produce something a declaration can use: `pet-id` becomes `petId`, an empty
/// key becomes `_`, and a leading digit gets an underscore prefix.
pub(crate) fn to_property_name(key: &str) -> String {
  let mut ident = sanitize(key).to_camel_case();

  if ident.is_empty() {
    return "_".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Converts a raw schema key into a module identifier (`kebab-case`), dropping a
/// trailing `Model` so `PetModel` and `Pet` share the `pet` module stem.
pub(crate) fn to_module_stem(key: &str) -> String {
  let base = key.strip_suffix(MODEL_SUFFIX).unwrap_or(key);
  let stem = sanitize(base).to_kebab_case();
  if stem.is_empty() { "unnamed".to_string() } else { stem }
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

/// Splits ASCII text into words at separators and case boundaries.
///
/// A capital starts a new word after a lowercase letter or before one, so
/// `HTTPServer` splits into `HTTP` and `Server`.
fn split_words(ascii: &str) -> Vec<&str> {
  let bytes = ascii.as_bytes();
  let mut words = vec![];
  let mut start: Option<usize> = None;

  for (index, byte) in bytes.iter().enumerate() {
    if !byte.is_ascii_alphanumeric() {
      if let Some(word_start) = start.take() {
        words.push(&ascii[word_start..index]);
      }
      continue;
    }

    match start {
      None => start = Some(index),
      Some(word_start) if word_start < index && byte.is_ascii_uppercase() => {
        let after_lower = bytes[index - 1].is_ascii_lowercase();
        let before_lower = bytes.get(index + 1).is_some_and(u8::is_ascii_lowercase);
        if after_lower || before_lower {
          words.push(&ascii[word_start..index]);
          start = Some(index);
        }
      }
      Some(_) => {}
    }
  }

  if let Some(word_start) = start {
    words.push(&ascii[word_start..]);
  }
  words
}

fn raise_first(word: &str) -> String {
  let mut chars = word.chars();
  chars
    .next()
    .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
    .unwrap_or_default()
}

fn capitalize(word: &str) -> String {
  raise_first(&word.to_ascii_lowercase())
}
