use std::{collections::HashMap, fmt, str::FromStr};

use petgraph::{
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use thiserror::Error;

/// A directed graph with string node ids and non-negative integer weights.
///
/// Every node referenced by an edge is also a node of the graph, so every
/// neighbor can be looked up. Nodes iterate in the order they were first
/// mentioned.
///
/// # Text format
///
/// [`FromStr`] accepts adjacency-list clauses of the form
/// `node:neighbor,weight;neighbor,weight`:
///
/// ```rust
/// use algoviz_algorithms::graph::WeightedGraph;
///
/// let graph: WeightedGraph = "A:B,4;C,2 B:C,1;D,5 C:D,3".parse()?;
///
/// assert_eq!(graph.nodes().collect::<Vec<_>>(), ["A", "B", "C", "D"]);
/// assert_eq!(graph.edge_count(), 5);
/// # Ok::<(), algoviz_algorithms::graph::ParseGraphError>(())
/// ```
///
/// Tokens are separated by `;` or whitespace. A token containing `:` starts a
/// new clause for the node named before the colon; any other token continues
/// the edge list of the current clause. Repeating a node's clause replaces its
/// earlier edge list. A node with no outgoing edges is written `D:`.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    graph: DiGraph<String, u64>,
    node_map: HashMap<String, NodeIndex>,
}

/// An outgoing edge, as seen from its source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<'a> {
    /// Id of the target node.
    pub neighbor: &'a str,

    /// Length of the edge.
    pub weight: u64,
}

impl WeightedGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` as a node if it is not already present.
    pub fn add_node(&mut self, id: &str) {
        self.ensure_node(id);
    }

    /// Adds a directed edge, adding either endpoint as a node if needed.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) {
        let from = self.ensure_node(from);
        let to = self.ensure_node(to);
        self.graph.add_edge(from, to, weight);
    }

    /// Returns `true` if `id` is a node of the graph.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    /// Iterates over node ids in the order they were first mentioned.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph
            .node_indices()
            .map(|index| self.graph[index].as_str())
    }

    /// Returns the outgoing edges of `id` in insertion order.
    ///
    /// Unknown nodes have no edges.
    #[must_use]
    pub fn edges(&self, id: &str) -> Vec<Edge<'_>> {
        let Some(&index) = self.node_map.get(id) else {
            return Vec::new();
        };

        let mut edges: Vec<_> = self.graph.edges(index).collect();
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| Edge {
                neighbor: self.graph[edge.target()].as_str(),
                weight: *edge.weight(),
            })
            .collect()
    }

    /// Returns the number of nodes, including nodes only named as neighbors.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, u64> {
        &self.graph
    }

    pub(crate) fn ensure_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(id) {
            return index;
        }
        let index = self.graph.add_node(id.to_owned());
        self.node_map.insert(id.to_owned(), index);
        index
    }
}

/// Formats in the text format accepted by [`FromStr`], one clause per node.
impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{node}:")?;
            for (j, edge) in self.edges(node).iter().enumerate() {
                if j > 0 {
                    f.write_str(";")?;
                }
                write!(f, "{},{}", edge.neighbor, edge.weight)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`WeightedGraph`] from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseGraphError {
    #[error("graph text is empty")]
    Empty,

    #[error("clause `{clause}` has no node name before `:`")]
    MissingNode { clause: String },

    #[error("`{token}` appears before any `node:` clause")]
    EdgeWithoutNode { token: String },

    #[error("neighbor `{neighbor}` of `{node}` has no weight")]
    MissingWeight { node: String, neighbor: String },

    #[error("weight `{weight}` on edge {node} -> {neighbor} is not a non-negative integer")]
    InvalidWeight {
        node: String,
        neighbor: String,
        weight: String,
    },
}

/// A source node and the raw edge tokens collected for it.
struct Clause<'t> {
    node: &'t str,
    fragments: Vec<&'t str>,
}

impl FromStr for WeightedGraph {
    type Err = ParseGraphError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut clauses: Vec<Clause<'_>> = Vec::new();
        let mut current: Option<usize> = None;

        let tokens = text
            .split(|c: char| c == ';' || c.is_whitespace())
            .filter(|token| !token.is_empty());

        for token in tokens {
            let fragment = match token.split_once(':') {
                Some((node, rest)) => {
                    if node.is_empty() {
                        return Err(ParseGraphError::MissingNode {
                            clause: token.to_owned(),
                        });
                    }
                    let index = match clauses.iter().position(|clause| clause.node == node) {
                        Some(index) => {
                            clauses[index].fragments.clear();
                            index
                        }
                        None => {
                            clauses.push(Clause {
                                node,
                                fragments: Vec::new(),
                            });
                            clauses.len() - 1
                        }
                    };
                    current = Some(index);
                    rest
                }
                None => token,
            };

            let Some(index) = current else {
                return Err(ParseGraphError::EdgeWithoutNode {
                    token: token.to_owned(),
                });
            };
            clauses[index].fragments.push(fragment);
        }

        if clauses.is_empty() {
            return Err(ParseGraphError::Empty);
        }

        let mut graph = WeightedGraph::new();
        for clause in &clauses {
            graph.add_node(clause.node);
            for (neighbor, weight) in parse_edges(clause)? {
                graph.add_edge(clause.node, neighbor, weight);
            }
        }
        Ok(graph)
    }
}

/// Pairs up the comma-separated `neighbor,weight` items of a clause.
fn parse_edges<'t>(clause: &Clause<'t>) -> Result<Vec<(&'t str, u64)>, ParseGraphError> {
    let items: Vec<&str> = clause
        .fragments
        .iter()
        .copied()
        .flat_map(|fragment| fragment.split(','))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();

    let pairs = items.chunks_exact(2);
    if let [neighbor] = pairs.remainder() {
        return Err(ParseGraphError::MissingWeight {
            node: clause.node.to_owned(),
            neighbor: (*neighbor).to_owned(),
        });
    }

    pairs
        .map(|pair| {
            let (neighbor, weight) = (pair[0], pair[1]);
            weight
                .parse::<u64>()
                .map(|weight| (neighbor, weight))
                .map_err(|_| ParseGraphError::InvalidWeight {
                    node: clause.node.to_owned(),
                    neighbor: neighbor.to_owned(),
                    weight: weight.to_owned(),
                })
        })
        .collect()
}
