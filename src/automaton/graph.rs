//! Directed-graph export of the automaton.
//!
//! Nodes are states, edges are transitions labeled
//! `<input>, <stack-top> -> <replacement>`. Rendering to an image is left
//! to external tools; [`Graph::to_dot`] produces Graphviz input.

use super::{AutomatonModel, Move, TransitionKey};
use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: String,
    pub accepting: bool,
    pub rejecting: bool,
}

/// One transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    /// One node per state and one edge per defined move.
    pub fn from_model(model: &AutomatonModel) -> Self {
        let nodes = model
            .states()
            .iter()
            .map(|state| GraphNode {
                name: state.name().to_string(),
                accepting: model.final_states().contains(state),
                rejecting: state.is_error(),
            })
            .collect();

        let edges = model
            .transitions()
            .map(|(key, m)| GraphEdge {
                from: key.state.name().to_string(),
                to: m.next.name().to_string(),
                label: edge_label(key, m),
            })
            .collect();

        Self { nodes, edges }
    }

    /// Graphviz DOT source. Accepting states are drawn blue.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph PDA {\n    rankdir=LR;\n");

        for node in &self.nodes {
            let (shape, color) = if node.accepting {
                ("doublecircle", "blue")
            } else {
                ("circle", "black")
            };
            let _ = writeln!(
                dot,
                "    \"{}\" [shape={shape}, color={color}];",
                escape(&node.name)
            );
        }

        for edge in &self.edges {
            let _ = writeln!(
                dot,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(&edge.from),
                escape(&edge.to),
                escape(&edge.label)
            );
        }

        dot.push_str("}\n");
        dot
    }
}

fn edge_label(key: &TransitionKey, m: &Move) -> String {
    let replacement = if m.replace.is_empty() {
        "λ".to_string()
    } else {
        m.replace
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    };
    format!("{}, {} -> {}", key.input, key.top, replacement)
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
