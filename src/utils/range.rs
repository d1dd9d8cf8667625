//! Integer ranges with Python `range` semantics
//!
//! A [`Range`] is a plain value: iterating it never consumes it, so the same
//! range can be walked any number of times.

use crate::error::{Error, Result};

/// Lazy, finite sequence `start, start + step, ...` stopping before `stop`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    stop: i64,
    step: i64,
}

impl Range {
    /// `0, 1, ..., stop - 1`
    ///
    /// # Example
    /// ```rust
    /// use strops::utils::Range;
    /// let r = Range::new(3);
    /// assert_eq!(r.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    /// assert_eq!(r.iter().count(), 3);
    /// ```
    pub fn new(stop: i64) -> Self {
        Self {
            start: 0,
            stop,
            step: 1,
        }
    }

    /// Explicit bounds and step; a zero step is rejected
    pub fn with_step(start: i64, stop: i64, step: i64) -> Result<Self> {
        if step == 0 {
            return Err(Error::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// Number of values the range yields
    pub fn len(&self) -> usize {
        let (start, stop, step) = (self.start as i128, self.stop as i128, self.step as i128);
        let (lo, hi, step) = if step > 0 {
            (start, stop, step)
        } else {
            (stop, start, -step)
        };
        if lo >= hi {
            return 0;
        }
        ((hi - lo - 1) / step + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at position `i`, if in range
    pub fn get(&self, i: usize) -> Option<i64> {
        if i >= self.len() {
            return None;
        }
        Some(self.start.wrapping_add(self.step.wrapping_mul(i as i64)))
    }

    pub fn iter(&self) -> RangeIter {
        RangeIter {
            next: self.start,
            step: self.step,
            remaining: self.len(),
        }
    }
}

/// Iterator over a [`Range`]
#[derive(Debug, Clone)]
pub struct RangeIter {
    next: i64,
    step: i64,
    remaining: usize,
}

impl Iterator for RangeIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.next;
        self.next = self.next.wrapping_add(self.step);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RangeIter {}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl IntoIterator for &Range {
    type Item = i64;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r = Range::new(10);
        assert_eq!(r.len(), 10);
        assert_eq!(r.iter().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());
        assert!(Range::new(0).is_empty());
        assert!(Range::new(-3).is_empty());
    }

    #[test]
    fn test_restartable() {
        let r = Range::new(3);
        let first: Vec<i64> = r.into_iter().collect();
        let second: Vec<i64> = (&r).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_step() {
        let r = Range::with_step(1, 10, 3).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![1, 4, 7]);
        assert_eq!(r.len(), 3);

        let down = Range::with_step(5, 0, -2).unwrap();
        assert_eq!(down.iter().collect::<Vec<_>>(), vec![5, 3, 1]);

        assert!(Range::with_step(5, 0, 1).unwrap().is_empty());
        assert!(matches!(Range::with_step(0, 5, 0), Err(Error::ZeroStep)));
    }

    #[test]
    fn test_get() {
        let r = Range::with_step(10, 20, 5).unwrap();
        assert_eq!(r.get(0), Some(10));
        assert_eq!(r.get(1), Some(15));
        assert_eq!(r.get(2), None);
    }

    #[test]
    fn test_exact_size() {
        let mut it = Range::new(4).iter();
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn test_extreme_bounds() {
        let r = Range::with_step(i64::MAX - 1, i64::MAX, 1).unwrap();
        assert_eq!(r.iter().collect::<Vec<_>>(), vec![i64::MAX - 1]);
    }
}
