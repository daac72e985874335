use std::collections::{BTreeMap, BTreeSet, VecDeque};

use indexmap::IndexMap;
use itertools::Itertools;
use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::{
  generator::{
    converter::SchemaShape,
    schema_arena::{ChildEdge, SchemaArena, SchemaId},
  },
  naming::identifiers::{ensure_unique, to_class_name},
};

const ITEM_SEGMENT: &str = "Item";
const OPTION_SEGMENT: &str = "Option";

/// A positional name assigned to an anonymous schema reachable from more than one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SharedSchema {
  pub id: SchemaId,
  /// Key of the top-level schema the node was first reached from.
  pub owner: String,
  pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ScanResult {
  pub shared: Vec<SharedSchema>,
  pub cycles: Vec<Vec<String>>,
}

/// Where the walk first reached a node.
#[derive(Debug, Clone)]
struct Location {
  owner: String,
  path: Vec<String>,
}

impl Location {
  fn join(&self, separator: &str) -> String {
    std::iter::once(self.owner.as_str())
      .chain(self.path.iter().map(String::as_str))
      .join(separator)
  }
}

/// Reference structure of the schema graph as seen from the top-level schemas.
pub(crate) struct SchemaRegistry<'a> {
  arena: &'a SchemaArena,
  roots: IndexMap<SchemaId, String>,
  graph: DiGraphMap<SchemaId, ()>,
  reference_counts: BTreeMap<SchemaId, usize>,
  locations: IndexMap<SchemaId, Location>,
}

impl<'a> SchemaRegistry<'a> {
  /// The first key given for an id wins.
  pub(crate) fn new(arena: &'a SchemaArena, roots: impl IntoIterator<Item = (String, SchemaId)>) -> Self {
    let mut roots_by_id = IndexMap::new();
    for (key, id) in roots {
      roots_by_id.entry(id).or_insert(key);
    }

    let mut registry = Self {
      arena,
      roots: roots_by_id,
      graph: DiGraphMap::new(),
      reference_counts: BTreeMap::new(),
      locations: IndexMap::new(),
    };
    registry.walk();
    registry
  }

  /// Each top-level schema is walked to completion before the next, so a
  /// shared node is attributed to the first top-level schema that reaches it.
  fn walk(&mut self) {
    let arena = self.arena;
    for (id, key) in &self.roots {
      self.graph.add_node(*id);
      self.locations.insert(
        *id,
        Location {
          owner: key.clone(),
          path: vec![],
        },
      );
    }

    let roots: Vec<SchemaId> = self.roots.keys().copied().collect();
    for root in roots {
      let mut queue = VecDeque::from([root]);

      while let Some(parent) = queue.pop_front() {
        let Some(node) = arena.get(parent) else {
          continue;
        };
        let Some(parent_location) = self.locations.get(&parent).cloned() else {
          continue;
        };

        for (edge, child) in node.children() {
          self.graph.add_edge(parent, child, ());
          *self.reference_counts.entry(child).or_default() += 1;

          if self.locations.contains_key(&child) {
            continue;
          }
          let mut path = parent_location.path.clone();
          path.push(segment(edge));
          self.locations.insert(
            child,
            Location {
              owner: parent_location.owner.clone(),
              path,
            },
          );
          queue.push_back(child);
        }
      }
    }
  }

  pub(crate) fn reference_count(&self, id: SchemaId) -> usize {
    self.reference_counts.get(&id).copied().unwrap_or(0)
  }

  pub(crate) fn is_root(&self, id: SchemaId) -> bool {
    self.roots.contains_key(&id)
  }

  /// Anonymous, non-primitive nodes with two or more incoming references, in discovery order.
  pub(crate) fn shared_schemas(&self, used_names: &BTreeSet<String>) -> Vec<SharedSchema> {
    let mut used_names = used_names.clone();
    let mut shared = vec![];

    for (id, location) in &self.locations {
      if self.is_root(*id) || self.reference_count(*id) < 2 {
        continue;
      }
      let Some(node) = self.arena.get(*id) else {
        continue;
      };
      if SchemaShape::classify(node) == SchemaShape::Primitive {
        continue;
      }

      let name = ensure_unique(&to_class_name(&location.join("_")), &used_names);
      used_names.insert(name.clone());
      shared.push(SharedSchema {
        id: *id,
        owner: location.owner.clone(),
        name,
      });
    }

    shared
  }

  /// Strongly connected components of the reference graph, labelled by
  /// top-level key or by the path they were first reached through.
  pub(crate) fn detect_cycles(&self) -> Vec<Vec<String>> {
    let mut cycles: Vec<Vec<String>> = kosaraju_scc(&self.graph)
      .into_iter()
      .filter(|scc| scc.len() > 1 || self.graph.contains_edge(scc[0], scc[0]))
      .map(|scc| scc.into_iter().map(|id| self.label(id)).sorted().collect())
      .collect();
    cycles.sort();
    cycles
  }

  pub(crate) fn scan(&self, used_names: &BTreeSet<String>, name_shared_schemas: bool) -> ScanResult {
    ScanResult {
      shared: if name_shared_schemas {
        self.shared_schemas(used_names)
      } else {
        vec![]
      },
      cycles: self.detect_cycles(),
    }
  }

  fn label(&self, id: SchemaId) -> String {
    self
      .locations
      .get(&id)
      .map_or_else(|| id.to_string(), |location| location.join("."))
  }
}

fn segment(edge: ChildEdge<'_>) -> String {
  match edge {
    ChildEdge::Property(name) => name.to_string(),
    ChildEdge::Items => ITEM_SEGMENT.to_string(),
    ChildEdge::Candidate(_, position) => format!("{OPTION_SEGMENT}{}", position + 1),
  }
}
