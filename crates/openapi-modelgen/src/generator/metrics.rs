use strum::Display;

use crate::generator::ast::TypeKind;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub models_generated: usize,
  pub classes_generated: usize,
  pub aliases_generated: usize,
  pub synthesized_names: usize,
  pub schemas_skipped: usize,
  pub cycles_detected: usize,
  pub cycle_details: Vec<Vec<String>>,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_model(&mut self, kind: TypeKind) {
    self.models_generated += 1;
    match kind {
      TypeKind::Class => self.classes_generated += 1,
      TypeKind::Primitive | TypeKind::None => self.aliases_generated += 1,
    }
  }

  pub fn record_skipped_schema(&mut self) {
    self.schemas_skipped += 1;
  }

  pub fn record_synthesized_names(&mut self, count: usize) {
    self.synthesized_names += count;
  }

  pub fn record_cycle(&mut self, cycle: Vec<String>) {
    self.cycles_detected += 1;
    self.cycle_details.push(cycle);
  }

  pub fn record_cycles(&mut self, cycles: Vec<Vec<String>>) {
    for cycle in cycles {
      self.record_cycle(cycle);
    }
  }

  /// Repeats of an already recorded warning are dropped.
  pub fn record_warning(&mut self, warning: GenerationWarning) {
    if !self.warnings.contains(&warning) {
      self.warnings.push(warning);
    }
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    for warning in warnings {
      self.record_warning(warning);
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Reference '{ref_path}' does not resolve; treated as an untyped schema")]
  UnresolvedReference { ref_path: String },
  #[strum(to_string = "External reference '{ref_path}' is not followed; treated as an untyped schema")]
  ExternalReference { ref_path: String },
  #[strum(to_string = "Reference '{ref_path}' only points back at itself; treated as an untyped schema")]
  CircularReference { ref_path: String },
}
