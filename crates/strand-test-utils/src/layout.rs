//! Layout assertions over blocks handed out by an arena.

use strand_arena::Arena;

/// A block's position inside its arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSpan {
    /// Byte offset from the start of the arena's block.
    pub offset: usize,
    /// Length in bytes.
    pub len: usize,
}

impl BlockSpan {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn overlaps(&self, other: &BlockSpan) -> bool {
        self.len != 0 && other.len != 0 && self.offset < other.end() && other.offset < self.end()
    }
}

/// Records the spans of blocks allocated from one arena, in order.
#[derive(Debug, Default)]
pub struct SpanLog {
    spans: Vec<BlockSpan>,
}

impl SpanLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a block of `len` bytes starting at `ptr`.
    ///
    /// # Panics
    ///
    /// Panics if `ptr` does not point into `arena` (empty blocks may sit at
    /// the very end of the block and are accepted there).
    pub fn record(&mut self, arena: &Arena, ptr: *const u8, len: usize) -> BlockSpan {
        let offset = ptr.addr() - arena.base_ptr().addr();
        assert!(
            len == 0 || arena.contains(ptr),
            "block at offset {offset} is outside the arena"
        );
        let span = BlockSpan { offset, len };
        self.spans.push(span);
        span
    }

    pub fn spans(&self) -> &[BlockSpan] {
        &self.spans
    }

    /// Every recorded span lies in `[0, capacity)`.
    pub fn all_within(&self, capacity: usize) -> bool {
        self.spans.iter().all(|s| s.end() <= capacity)
    }

    /// No two recorded non-empty spans share a byte.
    pub fn all_disjoint(&self) -> bool {
        self.spans
            .iter()
            .enumerate()
            .all(|(i, a)| self.spans[i + 1..].iter().all(|b| !a.overlaps(b)))
    }

    /// Each span starts at or after the end of the one before it.
    pub fn is_monotonic(&self) -> bool {
        self.spans.windows(2).all(|w| w[1].offset >= w[0].end())
    }
}
