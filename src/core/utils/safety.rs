//! Bounds-checked in debug, unchecked in release.
//!
//! The toppling loop indexes `counts` and the neighbour table with indices
//! that come straight out of the grid's own neighbour table, so they are
//! always in range. Debug builds still check them.
//!
//! ```rust
//! use sandpile_engine::fast;
//!
//! let mut counts = vec![0u8, 1, 2, 3];
//! let c = *fast!(counts, [3]);
//! assert_eq!(c, 3);
//!
//! fast!(counts, [0] = c);
//! assert_eq!(counts[0], 3);
//! ```

/// Slice access without bounds checks in release builds.
///
/// - `fast!(slice, [i])` reads (returns a reference)
/// - `fast!(slice, [i] = v)` writes
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_reads_count() {
        let counts = vec![0u8, 3, 1];
        assert_eq!(*fast!(counts, [1]), 3);
    }

    #[test]
    fn fast_writes_count() {
        let mut counts = vec![0u8; 4];
        fast!(counts, [2] = 4);
        assert_eq!(counts, vec![0, 0, 4, 0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_checks_bounds_in_debug() {
        let counts = vec![0u8; 3];
        let _ = *fast!(counts, [10]);
    }
}
