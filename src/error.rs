use std::fmt::{self, Display};

/// Reasons a buffer could not grow to the requested capacity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CapacityError {
    /// The element count times the element size does not fit in `isize`.
    CapacityOverflow { requested: usize },
    /// The allocation would not be smaller than the configured ceiling.
    LimitExceeded { requested_bytes: usize, max_alloc_bytes: usize },
}

impl Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityError::CapacityOverflow { requested } => {
                write!(f, "Capacity of {} elements overflows the address space", requested)
            },
            CapacityError::LimitExceeded { requested_bytes, max_alloc_bytes } => write!(
                f,
                "Allocation should be smaller than {} bytes, but was {}",
                max_alloc_bytes, requested_bytes
            ),
        }
    }
}

impl std::error::Error for CapacityError {}
