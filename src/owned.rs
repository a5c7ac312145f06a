//! Trim operations for the owned, mutable sequence kinds.
//!
//! `String` and `Vec<u8>` are the mutable members of their representation
//! families, and a mutable-kind subject yields a mutable-kind result: these
//! operations always return a freshly allocated value, even when nothing was
//! trimmed. The result never aliases the subject, so later mutation of one is
//! never observed through the other.
//!
//! Trimming deliberately never happens in place. Taking `&self` makes that a
//! property of the signature rather than a convention.

use crate::trim;

/// [`cut_prefix`](trim::cut_prefix) / [`cut_suffix`](trim::cut_suffix) for
/// owned sequence kinds, producing an independent owned result.
///
/// ```
/// use afftrim::CutAffixOwned;
///
/// let line = String::from("hello\n");
/// let trimmed = line.cut_suffix("\n");
/// assert_eq!(trimmed, "hello");
/// assert_eq!(line, "hello\n"); // subject untouched
/// ```
pub trait CutAffixOwned {
    /// The borrowed sequence this kind is compared through.
    type Seq: ?Sized;

    /// Remove `prefix` from the front if present; otherwise return a copy of
    /// the subject unchanged.
    fn cut_prefix(&self, prefix: impl AsRef<Self::Seq>) -> Self;

    /// Remove `suffix` from the end if present and non-empty; otherwise
    /// return a copy of the subject unchanged.
    fn cut_suffix(&self, suffix: impl AsRef<Self::Seq>) -> Self;
}

impl CutAffixOwned for String {
    type Seq = str;

    fn cut_prefix(&self, prefix: impl AsRef<str>) -> Self {
        trim::cut_prefix(self.as_str(), prefix.as_ref()).to_owned()
    }

    fn cut_suffix(&self, suffix: impl AsRef<str>) -> Self {
        trim::cut_suffix(self.as_str(), suffix.as_ref()).to_owned()
    }
}

impl CutAffixOwned for Vec<u8> {
    type Seq = [u8];

    fn cut_prefix(&self, prefix: impl AsRef<[u8]>) -> Self {
        trim::cut_prefix(self.as_slice(), prefix.as_ref()).to_owned()
    }

    fn cut_suffix(&self, suffix: impl AsRef<[u8]>) -> Self {
        trim::cut_suffix(self.as_slice(), suffix.as_ref()).to_owned()
    }
}
