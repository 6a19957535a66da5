//! Inclusive character code intervals

use std::fmt;

/// One inclusive run of character codes. A single character has `begin == end`.
///
/// Ordering is by `begin`, then `end`, which the derived impls give us from
/// field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NumRange {
    begin: u32,
    end: u32,
}

impl NumRange {
    /// Build a range from two bounds in either order.
    pub fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { begin: a, end: b }
        } else {
            Self { begin: b, end: a }
        }
    }

    pub fn single(code: u32) -> Self {
        Self { begin: code, end: code }
    }

    pub fn begin(&self) -> u32 {
        self.begin
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn is_single(&self) -> bool {
        self.begin == self.end
    }
}

impl fmt::Display for NumRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.begin)
        } else {
            write!(f, "{}-{}", self.begin, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NumRange;

    #[test]
    fn new_normalizes_reversed_bounds() {
        let a = NumRange::new(5, 2);
        let b = NumRange::new(2, 5);
        assert_eq!(a, b);
        assert_eq!(a.begin(), 2);
        assert_eq!(a.end(), 5);
    }

    #[test]
    fn ordering_breaks_ties_on_end() {
        let mut ranges = vec![NumRange::new(10, 12), NumRange::new(3, 9), NumRange::new(3, 4)];
        ranges.sort();
        assert_eq!(ranges, vec![NumRange::new(3, 4), NumRange::new(3, 9), NumRange::new(10, 12)]);
    }

    #[test]
    fn display_prints_single_codes_bare() {
        assert_eq!(NumRange::single(65).to_string(), "65");
        assert_eq!(NumRange::new(90, 65).to_string(), "65-90");
    }
}
