use std::{ffi::OsStr, path::Path};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// Memory-maps a schema document and parses it into a JSON value, keeping key order.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = SpecFormat::from_path(path);
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open {}", path.display()))?;

    Ok(Self { file, format })
  }

  pub fn parse(&self) -> anyhow::Result<Value> {
    parse_document(self.file.as_slice(), self.format)
  }
}

pub fn parse_document(bytes: &[u8], format: SpecFormat) -> anyhow::Result<Value> {
  let document = match format {
    SpecFormat::Json => serde_json::from_slice::<Value>(bytes).context("invalid JSON document")?,
    SpecFormat::Yaml => {
      let content = std::str::from_utf8(bytes)?;
      // Through the YAML value so numeric keys such as response codes become strings.
      let yaml = serde_yaml::from_str::<serde_yaml::Value>(content).context("invalid YAML document")?;
      serde_json::to_value(yaml)?
    }
  };

  if !document.is_object() {
    anyhow::bail!("expected the document root to be an object");
  }
  Ok(document)
}
