//! Frame-scoped workloads for benchmarks and examples.
//!
//! Models the typical consumer of a Strand arena: a game or render loop
//! that creates one arena per frame, fills it with vertex data and
//! debug labels, and drops it when the frame is done.
//!
//! - [`FrameProfile`]: entity and vertex counts, plus the arena capacity
//!   they need.
//! - [`FrameProfile::run_frame`]: builds one frame's buffers in an arena.
//! - [`decimal`]: formats an integer straight into an arena string.

#![deny(rustdoc::broken_intra_doc_links)]

use bytemuck::Zeroable;
use strand_arena::{AllocOptions, Arena};
use strand_s8::{s8, S8};

/// A 2D textured, coloured vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: u32,
}

/// Entity kinds cycled through when labelling.
const KINDS: [S8<'static>; 4] = [s8!("player"), s8!("enemy"), s8!("pickup"), s8!("prop")];

/// Worst-case arena bytes one label consumes: the `kind#` prefix, the
/// digits, and the joined result, each with its terminator.
const LABEL_BUDGET: usize = 64;

/// Shape of one frame's workload.
#[derive(Clone, Copy, Debug)]
pub struct FrameProfile {
    pub entities: usize,
    pub vertices_per_entity: usize,
}

/// Buffers produced for one frame, borrowed from that frame's arena.
pub struct FrameOutput<'a> {
    pub vertices: &'a mut [Vertex],
    pub labels: Vec<S8<'a>>,
}

impl FrameProfile {
    /// 64 quads, roughly a HUD.
    pub const SMALL: FrameProfile = FrameProfile {
        entities: 64,
        vertices_per_entity: 4,
    };

    /// 4096 quads, a busy scene.
    pub const LARGE: FrameProfile = FrameProfile {
        entities: 4096,
        vertices_per_entity: 4,
    };

    /// Arena capacity that always fits one frame of this profile.
    pub fn arena_capacity(&self) -> usize {
        let vertices = self.entities * self.vertices_per_entity * size_of::<Vertex>();
        vertices + align_of::<Vertex>() + self.entities * LABEL_BUDGET
    }

    /// Build one frame: a vertex buffer and a label per entity.
    ///
    /// The vertex buffer is written in full, so it skips zero-fill. Aborts
    /// if `arena` is smaller than [`arena_capacity`](Self::arena_capacity).
    pub fn run_frame<'a>(&self, arena: &'a Arena, frame: u64) -> FrameOutput<'a> {
        let count = self.entities * self.vertices_per_entity;
        let vertices = arena
            .try_alloc::<Vertex>(count, AllocOptions::new().skipping_zero_fill())
            .or_abort();
        for (i, v) in vertices.iter_mut().enumerate() {
            let corner = (i % 4) as f32;
            *v = Vertex {
                pos: [corner, frame as f32],
                uv: [corner * 0.5, 1.0 - corner * 0.5],
                color: 0xFF00_00FF ^ i as u32,
            };
        }

        let labels = (0..self.entities)
            .map(|e| {
                let kind = KINDS[e % KINDS.len()];
                let prefix = S8::concat(arena, kind, s8!("#"));
                S8::concat(arena, prefix, decimal(arena, e as u64))
            })
            .collect();

        log::debug!(
            "frame {frame}: {} vertices, {} labels, {} of {} bytes used",
            count,
            self.entities,
            arena.used(),
            arena.capacity()
        );
        FrameOutput { vertices, labels }
    }
}

/// Format `n` in base 10 as an arena string.
pub fn decimal(arena: &Arena, mut n: u64) -> S8<'_> {
    let digits = n.checked_ilog10().map_or(1, |d| d as usize + 1);
    let mut s = S8::new(arena, digits);
    for slot in s.as_bytes_mut().iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    s.freeze()
}
