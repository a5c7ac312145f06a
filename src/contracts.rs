//! Runtime contracts for the trim operations.
//!
//! Debug-mode assertions verifying, at every call site inside the crate, the
//! algebraic properties the trim operations promise. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//!
//! The properties checked:
//!
//! | Contract             | Property                                            |
//! |----------------------|-----------------------------------------------------|
//! | `check_prefix_cut`   | result is the subject, or subject minus the prefix  |
//! | `check_suffix_cut`   | result is the subject, or subject minus the suffix; |
//! |                      | an empty suffix always yields the subject unchanged |

use crate::trim::Sequence;

/// Check the result of a prefix cut.
///
/// Either no trim occurred (result has the subject's length) or the subject
/// starts with the prefix and the result accounts for exactly its length.
/// With an empty prefix the two cases coincide.
///
/// # Panics (debug builds only)
/// Panics if the result length matches neither case, or if elements were
/// removed without the prefix being present.
#[inline]
pub fn check_prefix_cut<S>(subject: &S, prefix: &S, result: &S)
where
    S: Sequence + ?Sized,
{
    debug_assert!(
        result.len() == subject.len() || result.len() + prefix.len() == subject.len(),
        "Contract violation: prefix cut changed length {} -> {} with prefix of length {}",
        subject.len(),
        result.len(),
        prefix.len()
    );

    if result.len() != subject.len() {
        debug_assert!(
            subject.starts_with_seq(prefix),
            "Contract violation: prefix cut removed elements but the subject \
             does not start with the prefix"
        );
    }
}

/// Check the result of a suffix cut.
///
/// An empty suffix must leave the subject untouched; a non-empty suffix
/// either matched the trailing edge (and the result accounts for exactly its
/// length) or the result has the subject's length.
///
/// # Panics (debug builds only)
/// Panics if an empty suffix changed the length, if the result length matches
/// neither case, or if elements were removed without the suffix being
/// present.
#[inline]
pub fn check_suffix_cut<S>(subject: &S, suffix: &S, result: &S)
where
    S: Sequence + ?Sized,
{
    if suffix.is_empty() {
        debug_assert!(
            result.len() == subject.len(),
            "Contract violation: empty suffix must be an identity cut, \
             but length went {} -> {}",
            subject.len(),
            result.len()
        );
        return;
    }

    debug_assert!(
        result.len() == subject.len() || result.len() + suffix.len() == subject.len(),
        "Contract violation: suffix cut changed length {} -> {} with suffix of length {}",
        subject.len(),
        result.len(),
        suffix.len()
    );

    if result.len() != subject.len() {
        debug_assert!(
            subject.ends_with_seq(suffix),
            "Contract violation: suffix cut removed elements but the subject \
             does not end with the suffix"
        );
    }
}
