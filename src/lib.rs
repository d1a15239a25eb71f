#![cfg_attr(not(feature = "std"), no_std)]

//! # netcaps
//!
//! **Compile-time capability verification for networking I/O types.**
//!
//! Before generic transport code is instantiated for a caller-supplied
//! type, it needs one decidable answer per capability: is this thing a
//! buffer sequence? a stream? a growable staging buffer? a completion
//! callable? `netcaps` answers each of those questions with a single
//! `const bool`, computed entirely at build time, never constructing a
//! value of the candidate type, and never turning a "no" into a build
//! failure.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Verdicts                                                |
//! |  - Present / Absent, type-level And/Or/Not, SelectBool, If        |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Probe Primitive                                         |
//! |  - Probe<T> / ValueProbe<T>, probe! (inherent-const fallback)     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Capability Contracts                                    |
//! |  - BufferSequence (const/mutable), HasExecutionContext,           |
//! |    async/sync stream ops, GrowableBuffer, CompletionCallable      |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Checks & Selection                                      |
//! |  - cap_check!, assert_cap!, named consts, static_select           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use netcaps::{assert_cap, cap_check};
//! use netcaps::contract::{ConstBuffer, ErrorCode};
//!
//! // Scalars qualify for nothing, and asking never breaks the build.
//! assert!(!cap_check!(i32: Stream));
//!
//! // Descriptor containers are buffer sequences out of the box.
//! assert_cap!([ConstBuffer; 4]: ConstBufferSequence);
//!
//! // Function pointers with the completion signature are completion
//! // callables (cloneable + invocable).
//! assert_cap!(fn(ErrorCode, usize): CompletionCallable);
//! ```
//!
//! ## Nominal, not structural
//!
//! Capability here is *declared*, not guessed from shape: a type qualifies
//! by implementing the contract traits in [`contract`], and the probe layer
//! decides `true`/`false` for any concrete type without its cooperation. A
//! pre-existing type that merely happens to have similarly named methods
//! does **not** qualify, which also means an accidental shape match with
//! different semantics cannot slip through. The load-bearing property is
//! preserved: asking any question of any type is always legal, and the
//! negative answer is a value, not an error.
//!
//! ## Probing is per concrete type
//!
//! Check resolution happens where the constant is referenced, so checks
//! decide for concrete types at the call site. Inside generic code, use
//! the contract traits as ordinary bounds; the derived contracts
//! ([`contract::Stream`] and friends) double as those bounds and produce
//! capability-named diagnostics when unmet.

#[cfg(feature = "alloc")]
extern crate alloc;

// =============================================================================
// Layer 0: Verdicts
// =============================================================================
pub mod verdict;

// =============================================================================
// Layer 1: Probe Primitive
// =============================================================================
pub mod probe;

// =============================================================================
// Layer 2: Capability Contracts
// =============================================================================
pub mod contract;

// =============================================================================
// Layer 3: Checks & Selection
// =============================================================================
pub mod check;
pub mod dispatch;

// Re-export the check surface at the crate root.
pub use probe::{Probe, ValueProbe};
pub use verdict::{Absent, Bool, OutcomeOf, Present};

/// Common items for capability verification.
pub mod prelude {
    pub use crate::contract::{
        AsyncReadOps, AsyncReadStream, AsyncWriteOps, AsyncWriteStream, BufferSequence,
        CompletionCallable, CompletionSignature, ConstBuffer, ConstBufferSequence, ErrorCode,
        ExecutionContext, GrowableBuffer, HasExecutionContext, Invocable, MutableBuffer,
        MutableBufferSequence, Stream, SyncReadOps, SyncReadStream, SyncWriteOps, SyncWriteStream,
        TransferError,
    };
    pub use crate::dispatch::{StaticMethodImpl, static_select};
    pub use crate::probe::{Probe, ValueProbe};
    pub use crate::verdict::{Absent, Bool, If, OutcomeOf, Present};
    pub use crate::{assert_cap, cap_check, probe};
}
