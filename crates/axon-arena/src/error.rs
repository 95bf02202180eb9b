//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The system could not reserve the backing block at construction.
    ///
    /// Fatal to construction; retry with a smaller capacity or after
    /// freeing other resources.
    AllocationFailed {
        /// Number of bytes requested from the system (already page-rounded).
        requested: usize,
    },
    /// An allocation would exceed the arena's remaining capacity.
    ///
    /// Recoverable: `reset()` the arena (if prior allocations are no
    /// longer needed) or use a larger arena. The failing call leaves the
    /// cursor unmodified.
    CapacityExceeded {
        /// Number of bytes requested.
        requested: usize,
        /// Alignment the request asked for.
        align: usize,
        /// Bytes already consumed when the request was made.
        used: usize,
        /// Total arena capacity in bytes.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "system reservation of {requested} bytes failed")
            }
            Self::CapacityExceeded {
                requested,
                align,
                used,
                capacity,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} bytes \
                     (align {align}), used {used} of {capacity} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_display_names_all_quantities() {
        let err = ArenaError::CapacityExceeded {
            requested: 512,
            align: 64,
            used: 4000,
            capacity: 4096,
        };
        let msg = err.to_string();
        assert!(msg.contains("512"));
        assert!(msg.contains("64"));
        assert!(msg.contains("4000"));
        assert!(msg.contains("4096"));
    }
}
