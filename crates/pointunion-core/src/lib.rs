//! pointunion-core: union-find over 2-D integer points (sans-IO).
//!
//! Builds a disjoint-set forest from point-pair edges and enumerates the
//! resulting connected components:
//! parse edge line -> register both endpoints -> connect their classes ->
//! group every point by representative.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! lines and returns structured data. Reading input and printing output
//! live in the `pointunion` binary and `pointunion-export`.

pub mod diagnostics;
pub mod forest;
pub mod parse;
pub mod registry;
pub mod types;

pub use diagnostics::LoadDiagnostics;
pub use forest::{Components, Union, UnionFind};
pub use parse::{EdgeParseError, parse_edge};
pub use registry::PointRegistry;
pub use types::{Edge, FindStrategy, LoadError, Point, PointId};

/// A fully loaded forest together with the diagnostics of building it.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// The engine holding every point and edge from the input.
    pub engine: UnionFind,
    /// Counts collected while loading.
    pub diagnostics: LoadDiagnostics,
}

/// Build a forest from edge lines.
///
/// Lines are numbered from 1. Blank lines are skipped; every other line
/// must be one `[X,Y][X,Y]` edge, whose endpoints are registered and then
/// connected in input order.
///
/// # Errors
///
/// Returns [`LoadError::MalformedLine`] for the first line that is not a
/// valid edge. Nothing after that line is processed and no partial
/// forest is returned.
pub fn load_lines<I, S>(lines: I, strategy: FindStrategy) -> Result<Loaded, LoadError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    load_decoded(lines.into_iter().map(Ok), strategy)
}

/// Build a forest from a whole input text. See [`load_lines`].
///
/// # Errors
///
/// Returns [`LoadError::MalformedLine`] for the first malformed line.
pub fn load_str(input: &str, strategy: FindStrategy) -> Result<Loaded, LoadError> {
    load_lines(input.lines(), strategy)
}

/// Build a forest from raw input bytes, decoding one line at a time.
///
/// Lines end at `\n`, with an optional `\r` before it, the same way
/// [`str::lines`] splits text.
///
/// # Errors
///
/// Returns [`LoadError::InvalidUtf8`] or [`LoadError::MalformedLine`] for
/// the first line that cannot be decoded or parsed, whichever comes
/// first in the input.
pub fn load_bytes(input: &[u8], strategy: FindStrategy) -> Result<Loaded, LoadError> {
    let body = input.strip_suffix(b"\n").unwrap_or(input);
    let raw_lines = (!input.is_empty())
        .then(|| body.split(|&b| b == b'\n'))
        .into_iter()
        .flatten();
    let lines = raw_lines.enumerate().map(|(index, raw)| {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        std::str::from_utf8(raw).map_err(|source| LoadError::InvalidUtf8 {
            line_number: index + 1,
            source,
        })
    });
    load_decoded(lines, strategy)
}

fn load_decoded<I, S>(lines: I, strategy: FindStrategy) -> Result<Loaded, LoadError>
where
    I: Iterator<Item = Result<S, LoadError>>,
    S: AsRef<str>,
{
    let mut engine = UnionFind::with_strategy(strategy);
    let mut diagnostics = LoadDiagnostics::new(strategy);

    for (index, line) in lines.enumerate() {
        let line = line?;
        let line = line.as_ref();
        let edge = parse_edge(line).map_err(|source| LoadError::MalformedLine {
            line_number: index + 1,
            line: line.to_owned(),
            source,
        })?;
        match edge {
            Some(edge) => diagnostics.record_union(engine.connect_points(edge.a, edge.b)),
            None => diagnostics.record_blank(),
        }
    }

    diagnostics.finish(&engine);
    Ok(Loaded {
        engine,
        diagnostics,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn partition(loaded: &Loaded) -> BTreeSet<BTreeSet<Point>> {
        loaded
            .engine
            .components()
            .point_groups()
            .map(|g| g.into_iter().collect())
            .collect()
    }

    fn group(coords: &[(u64, u64)]) -> BTreeSet<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn chained_edges_form_one_component() {
        let loaded = load_str("[0,0][1,1]\n[1,1][2,2]\n", FindStrategy::ChainWalk).unwrap();
        assert_eq!(
            partition(&loaded),
            BTreeSet::from([group(&[(0, 0), (1, 1), (2, 2)])])
        );
    }

    #[test]
    fn disjoint_edges_form_two_components() {
        let loaded = load_str("[0,0][1,1]\n[2,2][3,3]\n", FindStrategy::ChainWalk).unwrap();
        assert_eq!(
            partition(&loaded),
            BTreeSet::from([group(&[(0, 0), (1, 1)]), group(&[(2, 2), (3, 3)])])
        );
    }

    #[test]
    fn blank_line_is_skipped() {
        let loaded = load_str("[0,0][1,1]\n\n  \n[1,1][2,2]\n", FindStrategy::ChainWalk).unwrap();
        assert_eq!(
            partition(&loaded),
            BTreeSet::from([group(&[(0, 0), (1, 1), (2, 2)])])
        );
        assert_eq!(loaded.diagnostics.blank_lines, 2);
        assert_eq!(loaded.diagnostics.edges, 2);
    }

    #[test]
    fn malformed_line_aborts_load() {
        let err = load_str("[0,0][1,1]\nabc\n[2,2][3,3]\n", FindStrategy::ChainWalk).unwrap_err();
        assert!(
            matches!(
                &err,
                LoadError::MalformedLine { line_number: 2, line, .. } if line == "abc"
            ),
            "{err:?}"
        );
    }

    #[test]
    fn bytes_load_like_text() {
        let input = "[0,0][1,1]\r\n\r\n[1,1][2,2]\n";
        let from_bytes = load_bytes(input.as_bytes(), FindStrategy::ChainWalk).unwrap();
        let from_str = load_str(input, FindStrategy::ChainWalk).unwrap();
        assert_eq!(partition(&from_bytes), partition(&from_str));
        assert_eq!(from_bytes.diagnostics, from_str.diagnostics);
    }

    #[test]
    fn bytes_without_trailing_newline() {
        let loaded = load_bytes(b"[0,0][1,1]\n[2,2][3,3]", FindStrategy::ChainWalk).unwrap();
        assert_eq!(loaded.diagnostics.lines, 2);
        assert_eq!(loaded.diagnostics.components, 2);
        assert_eq!(
            load_bytes(b"", FindStrategy::ChainWalk).unwrap().diagnostics.lines,
            0
        );
        assert_eq!(
            load_bytes(b"\n", FindStrategy::ChainWalk).unwrap().diagnostics.blank_lines,
            1
        );
    }

    #[test]
    fn invalid_utf8_names_the_line() {
        let err = load_bytes(b"[0,0][1,1]\n\n[2,2]\xff[3,3]\n", FindStrategy::ChainWalk)
            .unwrap_err();
        assert!(
            matches!(err, LoadError::InvalidUtf8 { line_number: 3, .. }),
            "{err:?}"
        );
        assert!(err.to_string().starts_with("line 3 is not valid UTF-8"));
    }

    #[test]
    fn first_bad_line_wins() {
        let err = load_bytes(b"abc\n\xff\n", FindStrategy::ChainWalk).unwrap_err();
        assert!(
            matches!(err, LoadError::MalformedLine { line_number: 1, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn repeated_self_edge_is_one_point() {
        let loaded = load_str("[5,5][5,5]\n[5,5][5,5]\n", FindStrategy::ChainWalk).unwrap();
        assert_eq!(partition(&loaded), BTreeSet::from([group(&[(5, 5)])]));
        assert_eq!(loaded.diagnostics.redundant_unions, 2);
    }

    #[test]
    fn later_edge_merges_existing_components() {
        let input = "[0,0][1,1]\n[1,1][2,2]\n[3,3][4,4]\n[4,4][2,2]\n";
        for strategy in [FindStrategy::ChainWalk, FindStrategy::Halving] {
            let loaded = load_str(input, strategy).unwrap();
            assert_eq!(
                partition(&loaded),
                BTreeSet::from([group(&[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)])])
            );
            assert_eq!(loaded.engine.len(), 5);
            assert_eq!(loaded.diagnostics.components, 1);
        }
    }

    #[test]
    fn empty_input_has_no_components() {
        let loaded = load_str("", FindStrategy::ChainWalk).unwrap();
        assert!(loaded.engine.components().is_empty());
        assert_eq!(loaded.diagnostics, LoadDiagnostics::default());
    }

    #[test]
    fn load_lines_accepts_owned_strings() {
        let lines = vec!["[1,2][3,4]".to_owned()];
        let loaded = load_lines(lines, FindStrategy::Halving).unwrap();
        assert_eq!(loaded.engine.len(), 2);
        assert_eq!(loaded.diagnostics.strategy, FindStrategy::Halving);
    }
}
