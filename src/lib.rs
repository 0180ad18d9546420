//! Toggle line and block comment wrappers on buffer lines.
//!
//! A line counts as commented when it starts with `<prefix> ` and, for block
//! styles, ends with ` <suffix>`. Toggling flips each line independently and
//! commenting followed by uncommenting restores the original text exactly.

pub mod atoms;
pub mod coordinator;
pub mod molecules;
pub mod types;
