//! Parameter parsing for problem instances
//!
//! Turns the text a user types for each algorithm into a [`Problem`]:
//!
//! - arrays: comma-separated integers (`"64,34,25,12"`)
//! - target: a single integer
//! - edges: one `from,to` pair per line, or pairs separated by `;`
//! - start: any non-empty node name
//!
//! Whitespace around tokens is ignored. Empty array tokens (a trailing comma)
//! and blank edge lines are skipped rather than rejected.

use crate::algorithms::graph::Graph;
use crate::algorithms::{Algorithm, Problem};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, InputError>;

/// Reasons a parameter is rejected before any tracer runs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid array of numbers separated by commas")]
    EmptyArray,

    /// `position` counts non-empty tokens from 1
    #[error("Invalid number '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("Invalid target value '{0}'")]
    InvalidTarget(String),

    /// `line` counts input lines (or `;`-separated entries) from 1
    #[error("Invalid edge '{text}' on line {line} (expected format: from,to)")]
    InvalidEdge { line: usize, text: String },

    #[error("Please enter at least one edge")]
    EmptyGraph,

    #[error("Starting node is required")]
    MissingStart,

    #[error("{algorithm} requires {parameter}")]
    MissingParameter {
        algorithm: Algorithm,
        parameter: &'static str,
    },
}

/// Parse a comma-separated list of integers
pub fn parse_array(text: &str) -> Result<Vec<i64>> {
    let values = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| InputError::InvalidNumber {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(InputError::EmptyArray);
    }
    Ok(values)
}

pub fn parse_target(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| InputError::InvalidTarget(trimmed.to_string()))
}

/// Parse an edge list into a graph
pub fn parse_edges(text: &str) -> Result<Graph> {
    let mut graph = Graph::new();

    for (i, entry) in text.split(['\n', ';']).enumerate() {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let parts: Vec<&str> = entry.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [from, to] if !from.is_empty() && !to.is_empty() => graph.add_edge(*from, *to),
            _ => {
                return Err(InputError::InvalidEdge {
                    line: i + 1,
                    text: entry.to_string(),
                })
            }
        }
    }

    if graph.node_count() == 0 {
        return Err(InputError::EmptyGraph);
    }
    Ok(graph)
}

pub fn parse_start(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::MissingStart);
    }
    Ok(trimmed.to_string())
}

/// Raw text parameters as entered by the user
#[derive(Debug, Clone, Default)]
pub struct RawParams<'a> {
    pub array: Option<&'a str>,
    pub target: Option<&'a str>,
    pub edges: Option<&'a str>,
    pub start: Option<&'a str>,
}

impl<'a> RawParams<'a> {
    fn require(
        value: Option<&'a str>,
        algorithm: Algorithm,
        parameter: &'static str,
    ) -> Result<&'a str> {
        value.ok_or(InputError::MissingParameter {
            algorithm,
            parameter,
        })
    }
}

/// Validate the parameters for `algorithm` and build the problem instance.
///
/// Binary search input is sorted ascending here; the tracer itself never sorts.
pub fn build_problem(algorithm: Algorithm, params: &RawParams<'_>) -> Result<Problem> {
    let problem = match algorithm {
        Algorithm::BinarySearch => {
            let mut array = parse_array(RawParams::require(params.array, algorithm, "an array")?)?;
            array.sort_unstable();
            let target = parse_target(RawParams::require(params.target, algorithm, "a target")?)?;
            Problem::BinarySearch { array, target }
        }
        Algorithm::HeapSort => Problem::HeapSort {
            array: parse_array(RawParams::require(params.array, algorithm, "an array")?)?,
        },
        Algorithm::QuickSort => Problem::QuickSort {
            array: parse_array(RawParams::require(params.array, algorithm, "an array")?)?,
        },
        Algorithm::Bfs | Algorithm::Dfs => {
            let graph = parse_edges(RawParams::require(params.edges, algorithm, "edges")?)?;
            let start = parse_start(RawParams::require(params.start, algorithm, "a start node")?)?;
            if !graph.contains(&start) {
                tracing::warn!(%start, "start node has no edges; trace will visit it alone");
            }
            if algorithm == Algorithm::Bfs {
                Problem::Bfs { graph, start }
            } else {
                Problem::Dfs { graph, start }
            }
        }
    };

    tracing::debug!(algorithm = algorithm.id(), "parameters accepted");
    Ok(problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        assert_eq!(parse_array("64, 34,25 ,12").unwrap(), vec![64, 34, 25, 12]);
        assert_eq!(parse_array("1,2,").unwrap(), vec![1, 2]);
        assert_eq!(parse_array("-3,0,7").unwrap(), vec![-3, 0, 7]);
    }

    #[test]
    fn test_parse_array_errors() {
        assert_eq!(parse_array(" , ,"), Err(InputError::EmptyArray));
        assert_eq!(
            parse_array("1,x,3"),
            Err(InputError::InvalidNumber {
                token: "x".to_string(),
                position: 2
            })
        );
        assert!(matches!(
            parse_array("1,2.5"),
            Err(InputError::InvalidNumber { position: 2, .. })
        ));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(" 7 "), Ok(7));
        assert_eq!(
            parse_target("seven"),
            Err(InputError::InvalidTarget("seven".to_string()))
        );
    }

    #[test]
    fn test_parse_edges() {
        let graph = parse_edges("0,1\n0,2\n\n1,3").unwrap();

        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["0", "1", "2", "3"]);
        assert_eq!(graph.neighbors("0"), ["1".to_string(), "2".to_string()]);
        assert_eq!(graph.neighbors("1"), ["3".to_string()]);
    }

    #[test]
    fn test_parse_edges_semicolons() {
        let graph = parse_edges("A,B; A,C ;B,D").unwrap();
        assert_eq!(graph.edges().len(), 3);
    }

    #[test]
    fn test_parse_edges_errors() {
        assert_eq!(
            parse_edges("0,1\n0-2"),
            Err(InputError::InvalidEdge {
                line: 2,
                text: "0-2".to_string()
            })
        );
        assert!(matches!(
            parse_edges("0,1,2"),
            Err(InputError::InvalidEdge { line: 1, .. })
        ));
        assert!(matches!(
            parse_edges(",1"),
            Err(InputError::InvalidEdge { .. })
        ));
        assert_eq!(parse_edges("\n \n"), Err(InputError::EmptyGraph));
    }

    #[test]
    fn test_build_binary_search_sorts() {
        let params = RawParams {
            array: Some("9,1,5"),
            target: Some("5"),
            ..Default::default()
        };
        let problem = build_problem(Algorithm::BinarySearch, &params).unwrap();

        assert_eq!(
            problem,
            Problem::BinarySearch {
                array: vec![1, 5, 9],
                target: 5
            }
        );
    }

    #[test]
    fn test_build_missing_parameter() {
        let params = RawParams {
            edges: Some("A,B"),
            ..Default::default()
        };

        assert_eq!(
            build_problem(Algorithm::Dfs, &params),
            Err(InputError::MissingParameter {
                algorithm: Algorithm::Dfs,
                parameter: "a start node"
            })
        );
    }

    #[test]
    fn test_build_graph_problem() {
        let params = RawParams {
            edges: Some("A,B\nA,C"),
            start: Some(" A "),
            ..Default::default()
        };
        let problem = build_problem(Algorithm::Bfs, &params).unwrap();

        match problem {
            Problem::Bfs { graph, start } => {
                assert_eq!(start, "A");
                assert_eq!(graph.node_count(), 3);
            }
            other => panic!("Expected BFS problem, got {:?}", other),
        }
    }
}
