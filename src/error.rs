//! Error types for string construction and tuning validation.

use core::fmt;

/// Errors that can occur when building strings or validating tuning.
///
/// Nothing on the per-frame path returns one of these; a running board
/// never fails, only constructors and configuration do.
#[derive(Debug, Clone, PartialEq)]
pub enum TwangError {
    /// Stiffness must be in (0, 1].
    InvalidStiffness,
    /// Damping magnitude must be below 1 for the chain to settle.
    InvalidDamping,
    /// A chain needs at least 2 segments.
    InsufficientSegments,
    /// Region count must match the string count.
    RegionCountMismatch { regions: usize, strings: usize },
}

impl fmt::Display for TwangError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwangError::InvalidStiffness => write!(f, "stiffness must be in (0, 1]"),
            TwangError::InvalidDamping => write!(f, "damping magnitude must be below 1"),
            TwangError::InsufficientSegments => write!(f, "chain needs at least 2 segments"),
            TwangError::RegionCountMismatch { regions, strings } => {
                write!(f, "{} regions given for {} strings", regions, strings)
            }
        }
    }
}
