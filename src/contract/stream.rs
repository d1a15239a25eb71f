//! Stream capability contracts.
//!
//! Four operation shapes (async read/write, sync read/write) plus the
//! derived contracts that conjoin them. The operation traits carry no
//! execution-context obligation of their own; the async *stream* contracts
//! add it, so "has the operation" and "owns a context" stay independently
//! decidable facts.

use super::buffer_sequence::{ConstBufferSequence, MutableBufferSequence};
use super::completion::CompletionCallable;
use super::context::HasExecutionContext;
use super::error::ErrorCode;

// =============================================================================
// Operation shapes
// =============================================================================

/// The asynchronous read operation shape.
///
/// `Initiated` is deliberately unconstrained: initiation returns vary
/// across implementations (nothing, a cancellation token, an operation id).
/// Only the argument shape is load-bearing.
pub trait AsyncReadOps {
    /// Whatever initiating a read hands back.
    type Initiated;

    fn async_read_some<B, H>(&mut self, buffers: B, handler: H) -> Self::Initiated
    where
        B: MutableBufferSequence,
        H: CompletionCallable<(ErrorCode, usize)>;
}

/// The asynchronous write operation shape.
pub trait AsyncWriteOps {
    /// Whatever initiating a write hands back.
    type Initiated;

    fn async_write_some<B, H>(&mut self, buffers: B, handler: H) -> Self::Initiated
    where
        B: ConstBufferSequence,
        H: CompletionCallable<(ErrorCode, usize)>;
}

/// The synchronous read operation shapes.
///
/// Both entry points are required, with no default bodies: generic code
/// must be able to choose the non-panicking path, so a type offering only
/// `read_some` does not qualify.
pub trait SyncReadOps {
    /// Read into `buffers`, returning the byte count. Panics on transfer
    /// failure.
    fn read_some<B: MutableBufferSequence>(&mut self, buffers: B) -> usize;

    /// Read into `buffers`, reporting failure through `err` instead of
    /// panicking. Returns the byte count (zero on failure).
    fn read_some_with<B: MutableBufferSequence>(&mut self, buffers: B, err: &mut ErrorCode)
    -> usize;
}

/// The synchronous write operation shapes.
pub trait SyncWriteOps {
    /// Write from `buffers`, returning the byte count. Panics on transfer
    /// failure.
    fn write_some<B: ConstBufferSequence>(&mut self, buffers: B) -> usize;

    /// Write from `buffers`, reporting failure through `err` instead of
    /// panicking. Returns the byte count (zero on failure).
    fn write_some_with<B: ConstBufferSequence>(&mut self, buffers: B, err: &mut ErrorCode)
    -> usize;
}

// =============================================================================
// Derived stream contracts
// =============================================================================

/// Asynchronous-read capability: the read shape plus an owning context.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an async read stream",
    label = "requires `AsyncReadOps` and `HasExecutionContext`",
    note = "both the `async_read_some` shape and the context accessor must be present"
)]
pub trait AsyncReadStream: AsyncReadOps + HasExecutionContext {}

impl<T> AsyncReadStream for T where T: AsyncReadOps + HasExecutionContext {}

/// Asynchronous-write capability: the write shape plus an owning context.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an async write stream",
    label = "requires `AsyncWriteOps` and `HasExecutionContext`",
    note = "both the `async_write_some` shape and the context accessor must be present"
)]
pub trait AsyncWriteStream: AsyncWriteOps + HasExecutionContext {}

impl<T> AsyncWriteStream for T where T: AsyncWriteOps + HasExecutionContext {}

/// Synchronous-read capability.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sync read stream",
    label = "requires `SyncReadOps`"
)]
pub trait SyncReadStream: SyncReadOps {}

impl<T> SyncReadStream for T where T: SyncReadOps {}

/// Synchronous-write capability.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sync write stream",
    label = "requires `SyncWriteOps`"
)]
pub trait SyncWriteStream: SyncWriteOps {}

impl<T> SyncWriteStream for T where T: SyncWriteOps {}

/// Fully capable bidirectional stream: all four stream capabilities.
///
/// This is the single contract generic stream-wrapping code queries;
/// flipping any one constituent capability flips this one.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a stream",
    label = "requires async read, async write, sync read, and sync write capability",
    note = "check which of `AsyncReadStream`, `AsyncWriteStream`, `SyncReadStream`, `SyncWriteStream` is missing"
)]
pub trait Stream: AsyncReadStream + AsyncWriteStream + SyncReadStream + SyncWriteStream {}

impl<T> Stream for T where
    T: AsyncReadStream + AsyncWriteStream + SyncReadStream + SyncWriteStream
{
}
