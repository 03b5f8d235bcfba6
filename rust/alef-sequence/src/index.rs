//! Signed 1-based position arithmetic.
//!
//! Valid positions run from `1` to the sequence length; a negative position
//! `n` addresses `len + n + 1`, so `-1` is the last element. Position `0`
//! never resolves.

/// Translates a possibly-negative position into its non-negative form,
/// without bounds-checking the result.
///
/// Non-negative positions pass through unchanged, so `0` and positions past
/// the end survive translation and must be rejected or clamped by the
/// caller. A negative position too far below the front stays negative.
#[inline]
pub(crate) fn translate(position: i64, len: usize) -> i64 {
    if position < 0 {
        len as i64 + position + 1
    } else {
        position
    }
}

/// Resolves a possibly-negative position to a 0-based element offset, or
/// `None` if it falls outside the occupied range `1..=len`.
#[inline]
pub(crate) fn resolve(position: i64, len: usize) -> Option<usize> {
    let position = translate(position, len);
    if position >= 1 && position <= len as i64 {
        Some(position as usize - 1)
    } else {
        None
    }
}

/// Clamps an already-translated range bound into the occupied range
/// `1..=len`. The caller handles the empty sequence before clamping.
#[inline]
pub(crate) fn clamp_bound(position: i64, len: usize) -> usize {
    debug_assert!(len > 0);
    position.clamp(1, len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate() {
        assert_eq!(translate(3, 5), 3);
        assert_eq!(translate(0, 5), 0);
        assert_eq!(translate(7, 5), 7);
        assert_eq!(translate(-1, 5), 5);
        assert_eq!(translate(-5, 5), 1);
        assert_eq!(translate(-6, 5), 0);
        assert_eq!(translate(-1, 0), 0);
        assert!(translate(i64::MIN, 5) < 0);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(1, 3), Some(0));
        assert_eq!(resolve(3, 3), Some(2));
        assert_eq!(resolve(-1, 3), Some(2));
        assert_eq!(resolve(-3, 3), Some(0));
        assert_eq!(resolve(0, 3), None);
        assert_eq!(resolve(4, 3), None);
        assert_eq!(resolve(-4, 3), None);
        assert_eq!(resolve(1, 0), None);
        assert_eq!(resolve(-1, 0), None);
        assert_eq!(resolve(i64::MIN, 3), None);
        assert_eq!(resolve(i64::MAX, 3), None);
    }

    #[test]
    fn test_clamp_bound() {
        assert_eq!(clamp_bound(2, 5), 2);
        assert_eq!(clamp_bound(0, 5), 1);
        assert_eq!(clamp_bound(-17, 5), 1);
        assert_eq!(clamp_bound(9, 5), 5);
        assert_eq!(clamp_bound(5, 5), 5);
    }
}
