//! Conditional prefix/suffix removal for string and byte sequences.
//!
//! This crate provides exactly two operations, `cut_prefix` and `cut_suffix`:
//! if the given affix occurs at the relevant edge of the subject, the result
//! is the subject with the affix removed; otherwise the result equals the
//! subject, silently. This is the one-shot, whole-affix counterpart to the
//! strip family (`trim_start_matches` and friends), which repeatedly removes
//! elements drawn from a set and is deliberately not reimplemented here.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────┐     ┌───────────────────────────┐
//! │          trim.rs          │     │          owned.rs         │
//! │  (Sequence, cut_prefix,   │────▶│  (CutAffixOwned: String,  │
//! │   cut_suffix, CutAffix)   │     │   Vec<u8> → fresh values) │
//! └───────────────────────────┘     └───────────────────────────┘
//!              │
//!              ▼
//! ┌───────────────────────────┐
//! │        contracts.rs       │
//! │  (debug-build assertions  │
//! │   on every cut result)    │
//! └───────────────────────────┘
//! ```
//!
//! # Guarantees
//!
//! | Call                               | Result                          |
//! |------------------------------------|---------------------------------|
//! | `cut_prefix(s, p)`, `s` starts `p` | `s` without its first `p.len()` |
//! | `cut_prefix(s, p)` otherwise       | `s` unchanged                   |
//! | `cut_prefix(s, "")`                | `s` unchanged                   |
//! | `cut_suffix(s, q)`, `s` ends `q`   | `s` without its last `q.len()`  |
//! | `cut_suffix(s, q)` otherwise       | `s` unchanged                   |
//! | `cut_suffix(s, "")`                | `s` unchanged — **never** `""`  |
//!
//! Absence of the affix is never an error, no call ever loops or retries, and
//! no input is ever mutated. Subject and affix must be the same sequence kind
//! (`str` with `str`, `[u8]` with `[u8]`); mixing kinds does not compile.
//!
//! # Usage
//!
//! ```
//! use afftrim::{cut_prefix, cut_suffix, CutAffix};
//!
//! assert_eq!(cut_prefix("test_case", "test_"), "case");
//! assert_eq!(cut_suffix("hello\n", "\n"), "hello");
//!
//! // Method form, chaining through both edges:
//! assert_eq!("\"value\"".cut_suffix("\"").cut_prefix("\""), "value");
//!
//! // Byte sequences work the same way:
//! assert_eq!(cut_prefix(&b"\x89PNG\r\n"[..], &b"\x89"[..]), b"PNG\r\n");
//! ```
//!
//! Owned kinds get their own surface returning fresh, non-aliasing values:
//!
//! ```
//! use afftrim::CutAffixOwned;
//!
//! let name = String::from("FooTests");
//! assert_eq!(name.cut_suffix("Tests"), "Foo");
//! assert_eq!(name, "FooTests");
//! ```

pub mod contracts;
mod owned;
mod trim;

// Re-exports for public API
pub use owned::CutAffixOwned;
pub use trim::{cut_prefix, cut_suffix, CutAffix, Sequence};
