//! # Layer 3: Named Verification Checks
//!
//! One documented `const` per capability contract, resolved per concrete
//! candidate type through [`Probe`](crate::probe::Probe), plus the
//! [`cap_check!`](crate::cap_check) and [`assert_cap!`](crate::assert_cap)
//! macros that consuming code actually writes.
//!
//! Every check is total: asked about any well-formed type, it answers
//! `true` or `false`, never a build error. The composite checks hold
//! exactly when their constituents do, because each derived contract is a
//! blanket conjunction of the constituent contracts.

use crate::contract::{
    AsyncReadStream, AsyncWriteStream, CompletionCallable, CompletionSignature,
    ConstBufferSequence, GrowableBuffer, HasExecutionContext, MutableBufferSequence, Stream,
    SyncReadStream, SyncWriteStream,
};
use crate::probe::{Probe, ValueProbe, capability_probe};

capability_probe!(
    /// `true` iff `T` is a cloneable sequence of read-only region
    /// descriptors.
    ConstBufferSequence
);

capability_probe!(
    /// `true` iff `T` is a cloneable sequence of writable region
    /// descriptors.
    MutableBufferSequence
);

capability_probe!(
    /// `true` iff `T` exposes `fn context(&self) -> &ExecutionContext`.
    HasExecutionContext => HAS_EXECUTION_CONTEXT
);

capability_probe!(
    /// `true` iff `T` has the `async_read_some` shape and a context
    /// accessor.
    AsyncReadStream
);

capability_probe!(
    /// `true` iff `T` has the `async_write_some` shape and a context
    /// accessor.
    AsyncWriteStream
);

capability_probe!(
    /// `true` iff `T` has both synchronous read entry points.
    SyncReadStream
);

capability_probe!(
    /// `true` iff `T` has both synchronous write entry points.
    SyncWriteStream
);

capability_probe!(
    /// `true` iff all four stream checks hold for `T`.
    Stream
);

capability_probe!(
    /// `true` iff `T` has the prepare/commit/consume/data/size
    /// staging-buffer shape.
    GrowableBuffer
);

// The completion check is signature-parameterized; the named const covers
// the library's declared signature, and `probe!` covers any other.
#[doc(hidden)]
pub trait CompletionCallableFallback {
    const IS_COMPLETION_CALLABLE: bool = false;
}
impl<T: ?Sized> CompletionCallableFallback for Probe<T> {}
impl<T: CompletionCallable<CompletionSignature>> Probe<T> {
    /// `true` iff `T` is cloneable and callable as
    /// `(ErrorCode, usize)`.
    pub const IS_COMPLETION_CALLABLE: bool = true;
}

// =============================================================================
// Value-level completion probe
// =============================================================================

// Closure types cannot be named, so the completion check also comes in a
// value form: wrap the candidate handler and ask it directly.

#[doc(hidden)]
pub trait ValueCompletionFallback {
    fn is_completion_callable(&self) -> bool {
        false
    }
}
impl<T> ValueCompletionFallback for ValueProbe<T> {}
impl<T: CompletionCallable<CompletionSignature>> ValueProbe<T> {
    /// `true` iff the wrapped value is cloneable and callable as
    /// `(ErrorCode, usize)`.
    ///
    /// ```
    /// use netcaps::probe::ValueProbe;
    /// use netcaps::check::ValueCompletionFallback;
    /// use netcaps::contract::ErrorCode;
    ///
    /// assert!(ValueProbe(|_: ErrorCode, _: usize| {}).is_completion_callable());
    /// assert!(!ValueProbe(42_u8).is_completion_callable());
    /// ```
    pub fn is_completion_callable(&self) -> bool {
        true
    }
}

// =============================================================================
// User-facing macros
// =============================================================================

/// Query a named capability check for a concrete type.
///
/// `cap_check!(T: Contract)` resolves to a `const bool`; a leading `!`
/// negates. Contract names outside the fixed family fall through to
/// [`probe!`](crate::probe) as arbitrary trait paths.
///
/// ```
/// use netcaps::cap_check;
///
/// assert!(!cap_check!(i32: Stream));
/// assert!(!cap_check!(i32: ConstBufferSequence));
/// assert!(cap_check!(fn(netcaps::contract::ErrorCode, usize): CompletionCallable));
/// ```
#[macro_export]
macro_rules! cap_check {
    ($T:ty: !$($rest:tt)+) => {
        !$crate::cap_check!($T: $($rest)+)
    };
    ($T:ty: ConstBufferSequence) => {{
        #[allow(unused_imports)]
        use $crate::check::ConstBufferSequenceFallback as _;
        $crate::probe::Probe::<$T>::IS_CONST_BUFFER_SEQUENCE
    }};
    ($T:ty: MutableBufferSequence) => {{
        #[allow(unused_imports)]
        use $crate::check::MutableBufferSequenceFallback as _;
        $crate::probe::Probe::<$T>::IS_MUTABLE_BUFFER_SEQUENCE
    }};
    ($T:ty: HasExecutionContext) => {{
        #[allow(unused_imports)]
        use $crate::check::HasExecutionContextFallback as _;
        $crate::probe::Probe::<$T>::HAS_EXECUTION_CONTEXT
    }};
    ($T:ty: AsyncReadStream) => {{
        #[allow(unused_imports)]
        use $crate::check::AsyncReadStreamFallback as _;
        $crate::probe::Probe::<$T>::IS_ASYNC_READ_STREAM
    }};
    ($T:ty: AsyncWriteStream) => {{
        #[allow(unused_imports)]
        use $crate::check::AsyncWriteStreamFallback as _;
        $crate::probe::Probe::<$T>::IS_ASYNC_WRITE_STREAM
    }};
    ($T:ty: SyncReadStream) => {{
        #[allow(unused_imports)]
        use $crate::check::SyncReadStreamFallback as _;
        $crate::probe::Probe::<$T>::IS_SYNC_READ_STREAM
    }};
    ($T:ty: SyncWriteStream) => {{
        #[allow(unused_imports)]
        use $crate::check::SyncWriteStreamFallback as _;
        $crate::probe::Probe::<$T>::IS_SYNC_WRITE_STREAM
    }};
    ($T:ty: Stream) => {{
        #[allow(unused_imports)]
        use $crate::check::StreamFallback as _;
        $crate::probe::Probe::<$T>::IS_STREAM
    }};
    ($T:ty: GrowableBuffer) => {{
        #[allow(unused_imports)]
        use $crate::check::GrowableBufferFallback as _;
        $crate::probe::Probe::<$T>::IS_GROWABLE_BUFFER
    }};
    ($T:ty: CompletionCallable) => {{
        #[allow(unused_imports)]
        use $crate::check::CompletionCallableFallback as _;
        $crate::probe::Probe::<$T>::IS_COMPLETION_CALLABLE
    }};
    ($T:ty: $Contract:path) => {
        $crate::probe!($T, $Contract)
    };
}

/// Assert a capability at build time, naming the unmet contract on failure.
///
/// Expands to a `const` assertion: an unqualifying type stops the build
/// with a message naming the type and the capability, instead of failing
/// somewhere deep inside generic code.
///
/// ```
/// use netcaps::assert_cap;
/// use netcaps::contract::{ConstBuffer, ErrorCode};
///
/// assert_cap!([ConstBuffer; 4]: ConstBufferSequence);
/// assert_cap!(fn(ErrorCode, usize): CompletionCallable);
/// ```
#[macro_export]
macro_rules! assert_cap {
    ($T:ty: $($contract:tt)+) => {
        const _: () = assert!(
            $crate::cap_check!($T: $($contract)+),
            concat!(
                "type `",
                stringify!($T),
                "` does not satisfy capability `",
                stringify!($($contract)+),
                "`"
            )
        );
    };
}
