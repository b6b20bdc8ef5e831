use core::fmt;

/// The iterative algorithm that failed to converge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryStage {
    /// The boolean intersection walk.
    Gjk,
    /// The penetration-depth expansion.
    Epa,
}

impl fmt::Display for QueryStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QueryStage::Gjk => f.write_str("GJK"),
            QueryStage::Epa => f.write_str("EPA"),
        }
    }
}

/// Error indicating that a geometric query could not produce an answer.
///
/// These errors describe the query inputs, not the library: a degenerate
/// prism or a pathological configuration is reported to the caller instead
/// of being silently mapped to "no collision".
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The input geometry collapsed below the dimensionality the query needs.
    #[error("degenerate query input: {0}")]
    DegenerateInput(&'static str),
    /// An iterative query hit its iteration bound without terminating.
    #[error("{stage} failed to converge after {iterations} iterations")]
    NonConvergence {
        /// The algorithm that gave up.
        stage: QueryStage,
        /// How many iterations ran before giving up.
        iterations: usize,
    },
}
