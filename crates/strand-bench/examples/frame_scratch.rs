//! Frame-scoped scratch memory, end to end.
//!
//! Demonstrates:
//!   1. Sizing an arena for one frame's worth of work
//!   2. Filling vertex buffers and building labels in it
//!   3. Handing a label to a zero-terminated-string consumer
//!   4. Degrading gracefully when an optional buffer does not fit
//!   5. Releasing the whole frame at once
//!
//! Run with:
//!   cargo run -p strand-bench --example frame_scratch

use strand_arena::{AllocOptions, Arena};
use strand_bench::{decimal, FrameProfile};
use strand_s8::{s8, S8};

fn main() {
    let profile = FrameProfile::SMALL;

    for frame in 0..3u64 {
        let arena = Arena::new(profile.arena_capacity());
        let out = profile.run_frame(&arena, frame);

        // A C API would receive `as_c_ptr()`; here we just show the C view.
        let first = out.labels[0];
        println!(
            "frame {frame}: {} vertices, first label {:?} (C view {:?})",
            out.vertices.len(),
            first,
            first.to_c_str()
        );

        // An optional debug overlay: nice to have, never worth aborting for.
        let overlay = arena.alloc::<u32>(1 << 16, AllocOptions::new().allowing_failure());
        match overlay {
            Some(buf) => println!("  overlay: {} texels", buf.len()),
            None => println!(
                "  overlay skipped: {} bytes left in frame arena",
                arena.remaining()
            ),
        }

        println!("  {} of {} bytes used", arena.used(), arena.capacity());
        arena.destroy();
    }

    // Strings outlive a frame only by being copied into a longer-lived arena.
    let session = Arena::new(256);
    let best = {
        let frame_arena = Arena::new(64);
        let score = decimal(&frame_arena, 9001);
        let joined = S8::concat(&frame_arena, s8!("best="), score);
        S8::copy(&session, joined)
    };
    println!("session keeps {best} ({} bytes)", best.len());
}
