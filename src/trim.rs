//! Conditional affix removal over borrowed sequences.
//!
//! The trimming logic is written once, generically, over the [`Sequence`]
//! capability trait. Each supported sequence kind (`str` for text, `[u8]` for
//! binary data) implements the small set of primitives the trimmer composes:
//! length, edge comparison, and edge slicing. The trimmer never reimplements
//! sequence storage or comparison itself.
//!
//! Both operations are pure and loop-free: one comparison, one slice. Removal
//! of several affixes is caller-level chaining, never built-in repetition.

use crate::contracts::{check_prefix_cut, check_suffix_cut};

// ============================================================================
// SEQUENCE CAPABILITY
// ============================================================================

/// The primitives a sequence kind must expose to be trimmable.
///
/// Implemented for `str` and `[u8]`. Both arguments of a trim operation unify
/// on one `Sequence` type, so mixing kinds (a byte affix against a text
/// subject, or vice versa) is rejected at compile time rather than coerced.
pub trait Sequence {
    /// Number of elements in the sequence. For `str` this is bytes, which is
    /// the unit all offsets in this trait are measured in.
    fn len(&self) -> usize;

    /// Whether the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element-wise equality of `affix` against the leading edge.
    fn starts_with_seq(&self, affix: &Self) -> bool;

    /// Element-wise equality of `affix` against the trailing edge.
    fn ends_with_seq(&self, affix: &Self) -> bool;

    /// The elements from `offset` to the end.
    ///
    /// Callers only pass offsets produced by a successful edge comparison,
    /// so for `str` the offset is always a character boundary.
    fn tail_from(&self, offset: usize) -> &Self;

    /// The elements before `offset`.
    fn head_to(&self, offset: usize) -> &Self;
}

impl Sequence for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn starts_with_seq(&self, affix: &Self) -> bool {
        self.starts_with(affix)
    }

    #[inline]
    fn ends_with_seq(&self, affix: &Self) -> bool {
        self.ends_with(affix)
    }

    #[inline]
    fn tail_from(&self, offset: usize) -> &Self {
        &self[offset..]
    }

    #[inline]
    fn head_to(&self, offset: usize) -> &Self {
        &self[..offset]
    }
}

impl Sequence for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn starts_with_seq(&self, affix: &Self) -> bool {
        self.starts_with(affix)
    }

    #[inline]
    fn ends_with_seq(&self, affix: &Self) -> bool {
        self.ends_with(affix)
    }

    #[inline]
    fn tail_from(&self, offset: usize) -> &Self {
        &self[offset..]
    }

    #[inline]
    fn head_to(&self, offset: usize) -> &Self {
        &self[..offset]
    }
}

// ============================================================================
// TRIM OPERATIONS
// ============================================================================

/// Remove `prefix` from the front of `subject` if it occurs there.
///
/// Returns the remainder after the prefix, or the whole subject when the
/// prefix is absent. Absence is the normal silent path; it is never an error.
/// An empty prefix is trivially present and removes zero elements, which the
/// general path handles with no special case.
///
/// The result is a borrowed view into `subject`, so "unchanged" means
/// value-equal to the original, and the borrow checker rules out any aliasing
/// surprise.
///
/// # Examples
///
/// ```
/// use afftrim::cut_prefix;
///
/// assert_eq!(cut_prefix("test_case", "test_"), "case");
/// assert_eq!(cut_prefix("testcase", "test_"), "testcase");
/// assert_eq!(cut_prefix("", "x"), "");
/// assert_eq!(cut_prefix(&b"\x89PNG"[..], &b"\x89"[..]), b"PNG");
/// ```
pub fn cut_prefix<'s, S>(subject: &'s S, prefix: &S) -> &'s S
where
    S: Sequence + ?Sized,
{
    let result = if subject.starts_with_seq(prefix) {
        subject.tail_from(prefix.len())
    } else {
        subject
    };
    check_prefix_cut(subject, prefix, result);
    result
}

/// Remove `suffix` from the end of `subject` if it occurs there.
///
/// Returns the subject with the trailing suffix removed, or the whole subject
/// when the suffix is absent or empty. As with [`cut_prefix`], absence is a
/// silent no-op, never an error.
///
/// The empty suffix is rejected before any slice boundary is computed. The
/// boundary for a matched suffix is `len - suffix.len()`, and with an empty
/// suffix a naive formulation of that arithmetic (e.g. via a negative index
/// in languages that have them) collapses the result to the empty sequence
/// instead of the unchanged subject. The guard is part of the contract, not
/// an optimization.
///
/// # Examples
///
/// ```
/// use afftrim::cut_suffix;
///
/// assert_eq!(cut_suffix("hello\n", "\n"), "hello");
/// assert_eq!(cut_suffix("FooTests", "Tests"), "Foo");
/// assert_eq!(cut_suffix("hello", ""), "hello");
/// assert_eq!(cut_suffix(&b"data\0"[..], &b"\0"[..]), b"data");
/// ```
pub fn cut_suffix<'s, S>(subject: &'s S, suffix: &S) -> &'s S
where
    S: Sequence + ?Sized,
{
    if suffix.is_empty() {
        return subject;
    }
    let result = if subject.ends_with_seq(suffix) {
        subject.head_to(subject.len() - suffix.len())
    } else {
        subject
    };
    check_suffix_cut(subject, suffix, result);
    result
}

// ============================================================================
// METHOD SURFACE
// ============================================================================

/// Method-call surface for [`cut_prefix`] and [`cut_suffix`].
///
/// The affix argument is taken as `AsRef<Self>`, so a more specific
/// representation (`String` where `str` is expected, `Vec<u8>` where `[u8]`
/// is expected) is normalized to the underlying sequence before comparison.
/// The subject's own kind still determines the result kind.
///
/// Methods borrow, so calls chain naturally:
///
/// ```
/// use afftrim::CutAffix;
///
/// assert_eq!("\"value\"".cut_suffix("\"").cut_prefix("\""), "value");
/// ```
pub trait CutAffix: Sequence {
    /// See [`cut_prefix`].
    fn cut_prefix<'s, A>(&'s self, prefix: &A) -> &'s Self
    where
        A: AsRef<Self> + ?Sized,
    {
        cut_prefix(self, prefix.as_ref())
    }

    /// See [`cut_suffix`].
    fn cut_suffix<'s, A>(&'s self, suffix: &A) -> &'s Self
    where
        A: AsRef<Self> + ?Sized,
    {
        cut_suffix(self, suffix.as_ref())
    }
}

impl<S: Sequence + ?Sized> CutAffix for S {}
