use std::fmt;

use navgrid_core::Vec3;

/// Errors raised while building or querying a navigation grid.
///
/// An unreachable target is not an error: searches report it as `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum NavError {
    /// A [`GridConfig`](crate::GridConfig) field is out of its valid domain.
    InvalidConfig(String),
    /// The walkability oracle could not answer for `point`. Fatal to the
    /// current tick; the rebuild is retried on the next one.
    Oracle { point: Vec3, reason: String },
    /// A node handle or path from a superseded grid generation.
    StaleGeneration { expected: u64, found: u64 },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(s) => write!(f, "navgrid: invalid grid config: {s}"),
            Self::Oracle { point, reason } => {
                write!(f, "navgrid: walkability query at {point} failed: {reason}")
            }
            Self::StaleGeneration { expected, found } => write!(
                f,
                "navgrid: stale grid generation {found} (current is {expected})"
            ),
        }
    }
}

impl std::error::Error for NavError {}
