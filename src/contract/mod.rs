//! # Layer 2: Capability Contracts
//!
//! The fixed family of networking capability contracts, plus the boundary
//! value types they are stated in terms of (region descriptors, the
//! error-condition slot, the execution context).
//!
//! Each contract is a trait whose signature *is* the requirement: operation
//! names, argument shapes, and the return types that are load-bearing.
//! Where a contract is the conjunction of independent facts (a stream is
//! async-capable AND owns a context; a const sequence is sequence-shaped
//! AND cloneable AND read-only-elemented), the conjunction is a derived
//! trait with a single blanket impl, so the probe layer can decide it in
//! one question.
//!
//! ```text
//! contract/
//! ├── buffer.rs          - ConstBuffer / MutableBuffer descriptors
//! ├── buffer_sequence.rs - BufferSequence + Const/Mutable refinements
//! ├── context.rs         - ExecutionContext + HasExecutionContext
//! ├── stream.rs          - async/sync op shapes + derived stream contracts
//! ├── growable.rs        - GrowableBuffer staging contract
//! ├── completion.rs      - Invocable + CompletionCallable
//! └── error.rs           - TransferError / ErrorCode
//! ```

pub mod buffer;
pub mod buffer_sequence;
pub mod completion;
pub mod context;
pub mod error;
pub mod growable;
pub mod stream;

pub use buffer::{ConstBuffer, MutableBuffer};
pub use buffer_sequence::{BufferSequence, ConstBufferSequence, MutableBufferSequence};
pub use completion::{CompletionCallable, CompletionSignature, Invocable};
pub use context::{ExecutionContext, HasExecutionContext};
pub use error::{ErrorCode, TransferError};
pub use growable::GrowableBuffer;
pub use stream::{
    AsyncReadOps, AsyncReadStream, AsyncWriteOps, AsyncWriteStream, Stream, SyncReadOps,
    SyncReadStream, SyncWriteOps, SyncWriteStream,
};
