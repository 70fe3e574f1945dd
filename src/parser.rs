//! Graph input parsing: SNAP-style edge lists and DIMACS.
//!
//! Not part of the solver core — an external collaborator the binary
//! needs to be runnable end to end. Maps the whole input file with
//! `memmap2` rather than reading it into a freshly allocated `Vec<u8>`,
//! the way `main.rs` maps reference/version files for the delta codec.
//! Edge-list parsing is tried first; a DIMACS file doesn't parse as an
//! edge list (its `c`/`p`/`e` line markers aren't two whitespace-separated
//! integers), so failure there falls back to DIMACS automatically.

use std::collections::HashMap;
use std::fs::File;

use memmap2::Mmap;

use crate::graph::Graph;
use crate::types::VcError;

/// A parsed instance: the compacted graph plus `vertex_id[internal] =
/// external_id`, so results can be reported against the caller's ids.
pub struct Instance {
    pub graph: Graph,
    pub vertex_id: Vec<usize>,
}

pub fn load_graph(path: &str) -> Result<Instance, VcError> {
    let file = File::open(path)?;
    // SAFETY: the file isn't modified concurrently by this process; we
    // only read it, matching the read-only contract `Mmap::map` requires.
    let mmap = unsafe { Mmap::map(&file)? };
    let text = std::str::from_utf8(&mmap)
        .map_err(|e| VcError::Parse(format!("input is not valid UTF-8: {}", e)))?;

    match parse_edge_list(text) {
        Ok(instance) => Ok(instance),
        Err(edge_list_err) => parse_dimacs(text).map_err(|dimacs_err| {
            VcError::Parse(format!(
                "not a recognized edge-list or DIMACS file (edge-list: {}; dimacs: {})",
                edge_list_err, dimacs_err
            ))
        }),
    }
}

fn is_comment_or_blank(line: &str) -> bool {
    let t = line.trim();
    t.is_empty() || t.starts_with('#') || t.starts_with('%')
}

fn parse_edge_list(text: &str) -> Result<Instance, String> {
    let mut external_to_internal: HashMap<usize, usize> = HashMap::new();
    let mut vertex_id: Vec<usize> = Vec::new();
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for line in text.lines() {
        if is_comment_or_blank(line) {
            continue;
        }
        let mut tokens = line.split_whitespace();
        let a = tokens.next().ok_or("empty line")?;
        let b = tokens.next().ok_or("missing second column")?;
        if tokens.next().is_some() {
            return Err("more than two columns".to_string());
        }
        let a: usize = a.parse().map_err(|_| "non-integer vertex id".to_string())?;
        let b: usize = b.parse().map_err(|_| "non-integer vertex id".to_string())?;
        edges.push((a, b));
    }
    if edges.is_empty() {
        return Err("no edges found".to_string());
    }

    let mut intern = |id: usize, external_to_internal: &mut HashMap<usize, usize>| -> usize {
        *external_to_internal.entry(id).or_insert_with(|| {
            vertex_id.push(id);
            vertex_id.len() - 1
        })
    };

    let mut graph_edges = Vec::with_capacity(edges.len());
    for (a, b) in edges {
        let ia = intern(a, &mut external_to_internal);
        let ib = intern(b, &mut external_to_internal);
        graph_edges.push((ia, ib));
    }

    let mut graph = Graph::with_n(vertex_id.len());
    for (ia, ib) in graph_edges {
        graph.add_edge(ia, ib);
    }
    Ok(Instance { graph, vertex_id })
}

fn parse_dimacs(text: &str) -> Result<Instance, String> {
    let mut n = None;
    let mut graph = None;

    for line in text.lines() {
        let t = line.trim();
        if t.is_empty() || t.starts_with('c') {
            continue;
        }
        let mut tokens = t.split_whitespace();
        match tokens.next() {
            Some("p") => {
                let kind = tokens.next().ok_or("missing problem line format")?;
                if kind != "edge" && kind != "edges" {
                    return Err(format!("unsupported DIMACS problem type '{}'", kind));
                }
                let count: usize = tokens
                    .next()
                    .ok_or("missing vertex count")?
                    .parse()
                    .map_err(|_| "non-integer vertex count".to_string())?;
                n = Some(count);
                graph = Some(Graph::with_n(count));
            }
            Some("e") => {
                let g = graph.as_mut().ok_or("edge line before problem line")?;
                let u: usize = tokens
                    .next()
                    .ok_or("missing edge endpoint")?
                    .parse()
                    .map_err(|_| "non-integer edge endpoint".to_string())?;
                let v: usize = tokens
                    .next()
                    .ok_or("missing edge endpoint")?
                    .parse()
                    .map_err(|_| "non-integer edge endpoint".to_string())?;
                if u == 0 || v == 0 || u > n.unwrap() || v > n.unwrap() {
                    return Err("edge endpoint out of range".to_string());
                }
                g.add_edge(u - 1, v - 1);
            }
            _ => continue,
        }
    }

    let n = n.ok_or("missing DIMACS problem line ('p edge N M')")?;
    Ok(Instance {
        graph: graph.unwrap(),
        vertex_id: (1..=n).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_list_compacts_sparse_external_ids() {
        let text = "10 20\n20 30\n# a comment\n10 30\n";
        let instance = parse_edge_list(text).unwrap();
        assert_eq!(instance.graph.n(), 3);
        assert_eq!(instance.graph.num_edges(), 3);
        assert_eq!(instance.vertex_id, vec![10, 20, 30]);
    }

    #[test]
    fn dimacs_parses_one_indexed_edges() {
        let text = "c comment\np edge 3 2\ne 1 2\ne 2 3\n";
        let instance = parse_dimacs(text).unwrap();
        assert_eq!(instance.graph.n(), 3);
        assert!(instance.graph.has_edge(0, 1));
        assert!(instance.graph.has_edge(1, 2));
    }

    #[test]
    fn dimacs_text_fails_edge_list_parse() {
        let text = "c comment\np edge 3 2\ne 1 2\ne 2 3\n";
        assert!(parse_edge_list(text).is_err());
    }
}
