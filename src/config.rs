//! Allocation limits for a `Buffer`.

/// Sanity limits checked on every reallocation.
///
/// A buffer keeps the limits it was created with for its whole life;
/// `reinit`, `clear` and `destroy` do not reset them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Every allocation must be strictly smaller than this many bytes.
    ///
    /// Default: 50_000_000.
    pub max_alloc_bytes: usize,
}

impl Limits {
    /// Default ceiling for a single allocation, in bytes.
    pub const DEFAULT_MAX_ALLOC_BYTES: usize = 50_000_000;

    /// Limits with the default allocation ceiling.
    pub const fn new() -> Limits {
        Limits {
            max_alloc_bytes: Self::DEFAULT_MAX_ALLOC_BYTES,
        }
    }

    /// No ceiling beyond what the address space allows.
    pub const fn unbounded() -> Limits {
        Limits {
            max_alloc_bytes: usize::MAX,
        }
    }

    /// Returns these limits with the ceiling set to `max_alloc_bytes`.
    pub fn with_max_alloc_bytes(mut self, max_alloc_bytes: usize) -> Limits {
        self.max_alloc_bytes = max_alloc_bytes;
        self
    }

    /// Returns true if an allocation of `bytes` is allowed.
    #[inline(always)]
    pub fn allows(&self, bytes: usize) -> bool {
        bytes < self.max_alloc_bytes
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Limits;

    #[test]
    fn default_ceiling_is_fifty_million_bytes() {
        assert_eq!(50_000_000, Limits::default().max_alloc_bytes);
    }

    #[test]
    fn ceiling_is_exclusive() {
        let limits = Limits::new().with_max_alloc_bytes(64);
        assert!(limits.allows(63));
        assert!(!limits.allows(64));
    }

    #[test]
    fn unbounded_allows_large_sizes() {
        assert!(Limits::unbounded().allows(usize::MAX / 2));
    }
}
