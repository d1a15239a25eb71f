//! Select an implementation path from a verification result.
//!
//! Run with: `cargo run --example select_path`

use netcaps::cap_check;
use netcaps::contract::{BufferSequence, ConstBuffer};
use netcaps::dispatch::{StaticMethodImpl, static_select};

/// Scatter/gather path: walks the descriptor sequence directly.
struct Vectored;

/// Fallback path: coalesces into one contiguous region first.
struct Coalescing;

impl StaticMethodImpl<&'static str> for Vectored {
    fn call() -> &'static str {
        "vectored transfer"
    }
}

impl StaticMethodImpl<&'static str> for Coalescing {
    fn call() -> &'static str {
        "coalescing transfer"
    }
}

/// A caller-supplied chunk list.
#[derive(Clone)]
struct ChunkList {
    chunks: [ConstBuffer; 3],
}

impl BufferSequence for ChunkList {
    type Buffer = ConstBuffer;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, ConstBuffer>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.chunks.iter().copied()
    }
}

fn main() {
    // ChunkList is a const buffer sequence: the vectored path is chosen.
    let plan = static_select::<{ cap_check!(ChunkList: ConstBufferSequence) }, Vectored, Coalescing, _>();
    println!("ChunkList -> {plan}");

    // A bare byte count is not; the fallback is chosen.
    let plan = static_select::<{ cap_check!(usize: ConstBufferSequence) }, Vectored, Coalescing, _>();
    println!("usize     -> {plan}");
}
