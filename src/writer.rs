use crate::edge::{EdgeDir, ScaffoldEdge};
use crate::graph::{EdgeArena, ScaffoldGraph};
use crate::vertex::ScaffoldVertex;

use anyhow::Result;
use log::warn;

use std::fmt::{Display, Write};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Controls what `write_dot` includes.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct DotConfig {
    pub graph_name: String,
    pub edges: bool,
    /// Emit each edge/twin pair once, from the edge with the lower
    /// handle, instead of once from each end.
    pub dedup_twins: bool,
}

impl DotConfig {
    pub fn all() -> Self {
        DotConfig {
            graph_name: "G".to_string(),
            edges: true,
            dedup_twins: false,
        }
    }

    pub fn vertices_only() -> Self {
        DotConfig {
            edges: false,
            ..Self::all()
        }
    }
}

impl Default for DotConfig {
    fn default() -> Self {
        Self::all()
    }
}

fn edge_color(dir: EdgeDir) -> &'static str {
    match dir {
        EdgeDir::Sense => "black",
        EdgeDir::Antisense => "red",
    }
}

// Write vertex declaration
pub fn write_vertex_decl<N: Display, T: Write>(
    vertex: &ScaffoldVertex<N>,
    stream: &mut T,
) -> std::fmt::Result {
    writeln!(
        stream,
        "\"{}\" [ label =\"{},{}\" style=\"filled\" fillcolor=\"{}\" ];",
        vertex.id(),
        vertex.id(),
        vertex.seq_len(),
        vertex.color_string()
    )
}

// Write edge declaration
pub fn write_edge<N: Display, T: Write>(
    edge: &ScaffoldEdge<N>,
    stream: &mut T,
) -> std::fmt::Result {
    writeln!(
        stream,
        "\"{}\" -> \"{}\" [label=\"{}\" color=\"{}\" ];",
        edge.start_id(),
        edge.end_id(),
        edge.distance(),
        edge_color(edge.dir())
    )
}

pub fn edge_string<N: Display>(edge: &ScaffoldEdge<N>) -> String {
    let mut result = String::new();
    // writing into a String can't fail
    let _ = write_edge(edge, &mut result);
    result
}

/// Write the vertex declaration followed by one line for each edge
/// it owns, in adjacency order.
pub fn write_vertex<N: Display, T: Write>(
    vertex: &ScaffoldVertex<N>,
    arena: &EdgeArena<N>,
    stream: &mut T,
) -> std::fmt::Result {
    write_vertex_decl(vertex, stream)?;
    for e in vertex.edges_iter() {
        match arena.get(e) {
            Some(edge) => write_edge(edge, stream)?,
            None => warn!("Skipping destroyed edge {} of {}", e, vertex.id()),
        }
    }
    Ok(())
}

pub fn vertex_string<N: Display>(
    vertex: &ScaffoldVertex<N>,
    arena: &EdgeArena<N>,
) -> String {
    let mut result = String::new();
    let _ = write_vertex(vertex, arena, &mut result);
    result
}

pub fn write_dot<N: Display, T: Write>(
    graph: &ScaffoldGraph<N>,
    config: &DotConfig,
    stream: &mut T,
) -> std::fmt::Result {
    let arena = graph.edge_arena();
    writeln!(stream, "digraph {}\n{{", config.graph_name)?;
    for (_, vertex) in graph.vertices() {
        if config.edges && !config.dedup_twins {
            write_vertex(vertex, arena, stream)?;
            continue;
        }

        write_vertex_decl(vertex, stream)?;
        if !config.edges {
            continue;
        }
        for e in vertex.edges_iter() {
            if let Some(edge) = arena.get(e) {
                if e <= edge.twin() || !arena.contains(edge.twin()) {
                    write_edge(edge, stream)?;
                }
            }
        }
    }
    writeln!(stream, "}}")
}

pub fn dot_string<N: Display>(graph: &ScaffoldGraph<N>, config: &DotConfig) -> String {
    let mut result = String::new();
    let _ = write_dot(graph, config, &mut result);
    result
}

/// Write the graph as DOT to the file at `path`, truncating it.
pub fn write_dot_file<N: Display, P: AsRef<std::path::Path>>(
    graph: &ScaffoldGraph<N>,
    config: &DotConfig,
    path: P,
) -> Result<()> {
    use std::{fs::File, io::BufWriter, io::Write as IoWrite};

    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    writer.write_all(dot_string(graph, config).as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::{EdgeComp, ScaffoldLink, ScaffoldLinkType};
    use bstr::BString;

    fn contigs_a_b() -> ScaffoldGraph<BString> {
        let mut graph = ScaffoldGraph::new();
        graph.add_vertex("A".into(), 1000).unwrap();
        graph.add_vertex("B".into(), 500).unwrap();
        let link = ScaffoldLink::new(
            "B".into(),
            EdgeDir::Sense,
            EdgeComp::Same,
            200,
            ScaffoldLinkType::DistanceEstimate,
        );
        graph.add_link(&"A".into(), link).unwrap();
        graph
    }

    #[test]
    fn print_vertex() {
        let mut graph = contigs_a_b();
        let a = graph.vertex_ix(&"A".into()).unwrap();
        let b = graph.vertex_ix(&"B".into()).unwrap();

        let string = vertex_string(graph.vertex(a).unwrap(), graph.edge_arena());
        assert_eq!(
            string,
            "\"A\" [ label =\"A,1000\" style=\"filled\" fillcolor=\"gray\" ];\n\
             \"A\" -> \"B\" [label=\"200\" color=\"black\" ];\n"
        );

        let string = vertex_string(graph.vertex(b).unwrap(), graph.edge_arena());
        assert!(string.ends_with("\"B\" -> \"A\" [label=\"200\" color=\"red\" ];\n"));

        graph.delete_edges_and_twins(a).unwrap();
        assert_eq!(graph.vertex(a).unwrap().num_edges(), 0);
        assert_eq!(graph.vertex(b).unwrap().num_edges(), 0);
    }

    #[test]
    fn print_fill_colors() {
        use crate::vertex::VertexClassification::*;
        let mut v = ScaffoldVertex::new(7usize, 42);
        let arena = EdgeArena::new();

        v.set_classification(Repeat);
        assert_eq!(
            vertex_string(&v, &arena),
            "\"7\" [ label =\"7,42\" style=\"filled\" fillcolor=\"red\" ];\n"
        );
        v.set_classification(Unique);
        assert!(vertex_string(&v, &arena).contains("fillcolor=\"white\""));
    }

    #[test]
    fn print_negative_distance() {
        let mut graph: ScaffoldGraph<usize> = ScaffoldGraph::new();
        graph.add_vertex(1, 10).unwrap();
        graph.add_vertex(2, 10).unwrap();
        let link = ScaffoldLink::new(
            2,
            EdgeDir::Antisense,
            EdgeComp::Reverse,
            -15,
            ScaffoldLinkType::Overlap,
        );
        let (e, _) = graph.add_link(&1, link).unwrap();
        assert_eq!(
            edge_string(graph.edge(e).unwrap()),
            "\"1\" -> \"2\" [label=\"-15\" color=\"red\" ];\n"
        );
    }

    #[test]
    fn print_graph() {
        let graph = contigs_a_b();

        let full = dot_string(&graph, &DotConfig::all());
        assert!(full.starts_with("digraph G\n{\n"));
        assert!(full.ends_with("}\n"));
        assert_eq!(full.matches(" -> ").count(), 2);

        let dedup = DotConfig {
            dedup_twins: true,
            ..DotConfig::all()
        };
        let once = dot_string(&graph, &dedup);
        assert_eq!(once.matches(" -> ").count(), 1);
        assert!(once.contains("\"A\" -> \"B\""));

        let bare = dot_string(&graph, &DotConfig::vertices_only());
        assert_eq!(bare.matches(" -> ").count(), 0);
        assert_eq!(bare.lines().count(), 5);
    }

    #[test]
    fn write_file() {
        let graph = contigs_a_b();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.dot");

        write_dot_file(&graph, &DotConfig::default(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, dot_string(&graph, &DotConfig::default()));
    }

    #[test]
    #[cfg(feature = "serde1")]
    fn config_json() {
        let config = DotConfig {
            graph_name: "scaffolds".to_string(),
            ..DotConfig::vertices_only()
        };
        let json = serde_json::to_string(&config).unwrap();
        let loaded: DotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, loaded);
    }
}
