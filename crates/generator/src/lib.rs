//! Lazily generated sequences of numbers where positions divisible by a
//! configured divisor are replaced by that divisor's label.

pub mod error;
pub mod replacements;
pub mod sequence;

pub use error::GeneratorError;
pub use replacements::{ReplacementRule, Replacements};
pub use sequence::{generate, generate_default, label_for, Labels, DEFAULT_UPPER_BOUND};
