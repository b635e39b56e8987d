//! Contiguous id pages for batch loading

use std::ops::RangeInclusive;

/// Inclusive range of creature ids, e.g. `61-120`
///
/// `start <= end` always holds, so a range is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdRange {
    start: u32,
    end: u32,
}

impl IdRange {
    /// Create a range; `start` and `end` are swapped if given backwards
    pub fn new(start: u32, end: u32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Split `1..=max_id` into pages of `page_size` ids; the last page may be short
    pub fn paginate(max_id: u32, page_size: u32) -> Vec<IdRange> {
        let page_size = page_size.max(1);
        let mut ranges = Vec::new();
        let mut start = 1;
        while start <= max_id {
            let end = start.saturating_add(page_size - 1).min(max_id);
            ranges.push(IdRange { start, end });
            start = match end.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
        ranges
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn ids(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Never true: a range always holds at least one id
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids().contains(&id)
    }

    /// Label used by the range picker, e.g. "61-120"
    pub fn label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl std::fmt::Display for IdRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
