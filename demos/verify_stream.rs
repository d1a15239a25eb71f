//! Verify a transport type before wiring it into generic stream code.
//!
//! Run with: `cargo run --example verify_stream`

use netcaps::contract::{
    AsyncReadOps, AsyncWriteOps, CompletionCallable, ConstBufferSequence, ErrorCode,
    ExecutionContext, HasExecutionContext, MutableBufferSequence, SyncReadOps, SyncWriteOps,
};
use netcaps::{assert_cap, cap_check};

/// A transport that implements every stream capability (shape-only stubs).
struct Tunnel {
    ctx: ExecutionContext,
}

impl HasExecutionContext for Tunnel {
    fn context(&self) -> &ExecutionContext {
        &self.ctx
    }
}

impl AsyncReadOps for Tunnel {
    type Initiated = ();

    fn async_read_some<B, H>(&mut self, _buffers: B, _handler: H) -> Self::Initiated
    where
        B: MutableBufferSequence,
        H: CompletionCallable<(ErrorCode, usize)>,
    {
    }
}

impl AsyncWriteOps for Tunnel {
    type Initiated = ();

    fn async_write_some<B, H>(&mut self, _buffers: B, _handler: H) -> Self::Initiated
    where
        B: ConstBufferSequence,
        H: CompletionCallable<(ErrorCode, usize)>,
    {
    }
}

impl SyncReadOps for Tunnel {
    fn read_some<B: MutableBufferSequence>(&mut self, _buffers: B) -> usize {
        0
    }

    fn read_some_with<B: MutableBufferSequence>(
        &mut self,
        _buffers: B,
        _err: &mut ErrorCode,
    ) -> usize {
        0
    }
}

impl SyncWriteOps for Tunnel {
    fn write_some<B: ConstBufferSequence>(&mut self, _buffers: B) -> usize {
        0
    }

    fn write_some_with<B: ConstBufferSequence>(
        &mut self,
        _buffers: B,
        _err: &mut ErrorCode,
    ) -> usize {
        0
    }
}

/// A transport that forgot to advertise its owning context.
struct Detached;

impl AsyncReadOps for Detached {
    type Initiated = ();

    fn async_read_some<B, H>(&mut self, _buffers: B, _handler: H) -> Self::Initiated
    where
        B: MutableBufferSequence,
        H: CompletionCallable<(ErrorCode, usize)>,
    {
    }
}

// A qualifying transport is locked in at build time; if `Tunnel` ever loses
// a capability, the build stops here with a message naming it.
assert_cap!(Tunnel: Stream);

fn main() {
    println!("Tunnel");
    println!("  async read stream: {}", cap_check!(Tunnel: AsyncReadStream));
    println!("  async write stream: {}", cap_check!(Tunnel: AsyncWriteStream));
    println!("  sync read stream:  {}", cap_check!(Tunnel: SyncReadStream));
    println!("  sync write stream: {}", cap_check!(Tunnel: SyncWriteStream));
    println!("  stream:            {}", cap_check!(Tunnel: Stream));

    println!("Detached (async op, no context accessor)");
    println!("  async read stream: {}", cap_check!(Detached: AsyncReadStream));
    println!("  stream:            {}", cap_check!(Detached: Stream));

    println!("i32");
    println!("  stream:            {}", cap_check!(i32: Stream));
}
