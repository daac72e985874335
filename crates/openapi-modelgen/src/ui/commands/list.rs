use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;

use crate::{
  generator::{CodegenConfig, ast::ModelSpec, orchestrator::Orchestrator},
  ui::{Colors, colors::Role, term_width},
  utils::spec::SpecLoader,
};

/// Collapses a multi-line signature onto one table row.
fn single_line(signature: &str) -> String {
  signature.split_whitespace().join(" ")
}

fn models_table(models: &[ModelSpec], colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  row.add_cell(Cell::new("CLASS").fg(colors.table(Role::Label)));
  row.add_cell(Cell::new("KIND").fg(colors.table(Role::Label)));
  row.add_cell(Cell::new("FILE").fg(colors.table(Role::Label)));
  row.add_cell(Cell::new("SIGNATURE").fg(colors.table(Role::Label)));
  table.set_header(row);

  for model in models {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(&model.class_name)
        .fg(colors.table(Role::Value))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(model.kind)
        .fg(colors.table(Role::Attention))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&model.file_name).fg(colors.table(Role::Progress)));
    row.add_cell(Cell::new(single_line(&model.signature)).fg(colors.table(Role::Detail)));
    table.add_row(row);
  }

  table
}

pub async fn list_models(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let document = SpecLoader::open(input).await?.parse()?;
  let output = Orchestrator::new(document, CodegenConfig::default()).generate();

  println!("{}", models_table(&output.models, colors));

  Ok(())
}
