use std::fmt;

type Offset = usize;

/// Offsets rewritten by a single scan, in increasing order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Replacements {
    offsets: Vec<Offset>,
}

impl Replacements {
    pub(crate) fn push(&mut self, offset: Offset) {
        debug_assert!(self.offsets.last().map_or(true, |last| *last < offset));
        self.offsets.push(offset)
    }

    pub fn count(&self) -> usize {
        self.offsets.len()
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl fmt::Display for Replacements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Replaced(count={}, offsets=[{}])",
            self.count(),
            self.offsets
                .iter()
                .map(|v| format!("{:#x}", v))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
