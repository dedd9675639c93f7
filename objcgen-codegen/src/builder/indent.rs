//! Indentation for generated statement bodies.

use std::fmt;

use crate::{Error, Result};

/// An immutable indentation level.
///
/// Moving forward or backward returns a new value; the original is left
/// untouched so callers can hand the same indent to several statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentValue {
    depth: usize,
    step: usize,
}

impl IndentValue {
    /// Default number of spaces per level.
    pub const DEFAULT_STEP: usize = 4;

    /// Depth 0 with the given step width.
    pub fn new(step: usize) -> Self {
        Self { depth: 0, step }
    }

    pub fn with_depth(depth: usize, step: usize) -> Self {
        Self { depth, step }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// One level deeper.
    pub fn forward(&self) -> Self {
        Self {
            depth: self.depth + 1,
            step: self.step,
        }
    }

    /// One level shallower.
    pub fn backward(&self) -> Result<Self> {
        let depth = self.depth.checked_sub(1).ok_or(Error::IndentUnderflow)?;
        Ok(Self {
            depth,
            step: self.step,
        })
    }

    /// The leading whitespace for this level.
    pub fn render(&self) -> String {
        " ".repeat(self.depth * self.step)
    }
}

impl Default for IndentValue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}

impl fmt::Display for IndentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renders_nothing() {
        assert_eq!(IndentValue::default().render(), "");
        assert_eq!(IndentValue::default().step(), 4);
    }

    #[test]
    fn test_forward() {
        let indent = IndentValue::new(2).forward().forward();
        assert_eq!(indent.depth(), 2);
        assert_eq!(indent.render(), "    ");
        assert_eq!(indent.to_string(), "    ");
    }

    #[test]
    fn test_forward_backward_round_trip() {
        let original = IndentValue::default();
        let back = original.forward().backward().unwrap();
        assert_eq!(back, original);
        assert_eq!(back.render(), original.render());
    }

    #[test]
    fn test_backward_at_zero_fails() {
        assert_eq!(
            IndentValue::default().backward(),
            Err(Error::IndentUnderflow)
        );
    }

    #[test]
    fn test_forward_does_not_mutate() {
        let base = IndentValue::with_depth(1, 4);
        let _ = base.forward();
        assert_eq!(base.depth(), 1);
    }
}
