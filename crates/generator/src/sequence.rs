use std::iter::FusedIterator;

use tracing::debug;

use crate::replacements::Replacements;

pub const DEFAULT_UPPER_BOUND: i64 = 100;

/// Lazily labels every position from 1 to `upper_bound`.
///
/// A negative bound produces an empty sequence. The mapping is copied up
/// front, so the caller is free to change or drop it while iterating.
pub fn generate(upper_bound: i64, replacements: Option<&Replacements>) -> Labels {
    let entries = replacements
        .map(Replacements::to_sorted_entries)
        .unwrap_or_default();
    let end = upper_bound.max(0) as u64;

    debug!(
        requested = upper_bound,
        upper_bound = end,
        divisors = entries.len(),
        "creating label sequence"
    );

    Labels {
        entries,
        next: 1,
        end,
    }
}

/// `generate` with the default bound and no replacements.
pub fn generate_default() -> Labels {
    generate(DEFAULT_UPPER_BOUND, None)
}

/// Label for a single position, as it would appear in a generated sequence.
pub fn label_for(position: u64, replacements: &Replacements) -> String {
    render(position, &replacements.to_sorted_entries())
}

fn render(position: u64, entries: &[(u64, String)]) -> String {
    let mut value = String::new();
    for (_, label) in entries.iter().filter(|(divisor, _)| position % divisor == 0) {
        value.push(' ');
        value.push_str(label);
    }

    let trimmed = value.trim();
    if trimmed.is_empty() {
        position.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Pull-based sequence returned by [`generate`].
#[derive(Debug, Clone)]
pub struct Labels {
    entries: Vec<(u64, String)>,
    next: u64,
    end: u64,
}

impl Labels {
    /// Number of labels not yet produced.
    pub fn remaining(&self) -> u64 {
        if self.next > self.end {
            0
        } else {
            self.end - self.next + 1
        }
    }

    /// Position the next call to `next` will label, if any.
    pub fn next_position(&self) -> Option<u64> {
        (self.next <= self.end).then_some(self.next)
    }
}

impl Iterator for Labels {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let position = self.next_position()?;
        self.next += 1;
        Some(render(position, &self.entries))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<String> {
        let skip = n as u64;
        if skip >= self.remaining() {
            self.next = self.end + 1;
            return None;
        }
        self.next += skip;
        self.next()
    }

    fn count(self) -> usize {
        usize::try_from(self.remaining()).unwrap_or(usize::MAX)
    }
}

impl FusedIterator for Labels {}

// The clamped bound never exceeds i64::MAX, which fits in a 64-bit usize.
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Labels {}

#[cfg(test)]
#[path = "tests/sequence_tests.rs"]
mod tests;
