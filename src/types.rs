use serde::Serialize;

/// Weak-evidence conditions. These are reported alongside results and never
/// abort processing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LowConfidence {
    /// The coarse locator found fewer than two lines; metrics are zero.
    TooFewLines { found: usize },
    /// Too few stable paths to trust path-based removal.
    TooFewStablePaths { found: usize, required: usize },
    /// Path-based removal needs a non-zero line thickness estimate.
    MissingThickness,
    /// Coarse line count and stable path count disagree.
    LineCountMismatch { coarse: usize, stable: usize },
}

impl std::fmt::Display for LowConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LowConfidence::TooFewLines { found } => {
                write!(f, "only {found} staff line(s) located; metrics unavailable")
            }
            LowConfidence::TooFewStablePaths { found, required } => {
                write!(f, "{found} stable path(s) found, {required} required")
            }
            LowConfidence::MissingThickness => write!(f, "no staff line thickness estimate"),
            LowConfidence::LineCountMismatch { coarse, stable } => write!(
                f,
                "coarse locator found {coarse} line(s) but {stable} stable path(s) were traced"
            ),
        }
    }
}
