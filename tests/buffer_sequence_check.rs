//! Buffer-sequence verification.
//!
//! Known-good models qualify, anything missing a requirement does not, and
//! asking the question of an arbitrary type is always legal.

use netcaps::contract::{BufferSequence, ConstBuffer, MutableBuffer};
use netcaps::{cap_check, probe};

// =============================================================================
// Models
// =============================================================================

/// Exactly the required shape: element type, repeatable traversal, clone.
#[derive(Clone)]
struct StaticRegions {
    chunks: [ConstBuffer; 2],
}

impl BufferSequence for StaticRegions {
    type Buffer = ConstBuffer;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, ConstBuffer>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.chunks.iter().copied()
    }
}

/// Same shape over writable regions.
#[derive(Clone)]
struct ScratchRegions {
    chunks: [MutableBuffer; 2],
}

impl BufferSequence for ScratchRegions {
    type Buffer = MutableBuffer;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, MutableBuffer>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.chunks.iter().copied()
    }
}

/// Sequence-shaped but not cloneable: fails as a whole, no partial credit.
struct PinnedRegions {
    chunks: [ConstBuffer; 2],
}

impl BufferSequence for PinnedRegions {
    type Buffer = ConstBuffer;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, ConstBuffer>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.chunks.iter().copied()
    }
}

/// Same-named operation with an incompatible shape, no contract impl.
#[derive(Clone)]
struct Lookalike;

impl Lookalike {
    #[allow(dead_code)]
    fn buffers(&self) -> &'static str {
        "not a descriptor iterator"
    }
}

/// Qualifying model carrying unrelated extra operations and impls.
#[derive(Clone, Debug)]
struct DecoratedRegions {
    chunks: [ConstBuffer; 1],
    label: u32,
}

impl DecoratedRegions {
    #[allow(dead_code)]
    fn label(&self) -> u32 {
        self.label
    }
}

impl BufferSequence for DecoratedRegions {
    type Buffer = ConstBuffer;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, ConstBuffer>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.chunks.iter().copied()
    }
}

// =============================================================================
// Exact shape qualifies
// =============================================================================

#[test]
fn exact_shape_qualifies() {
    assert!(cap_check!(StaticRegions: ConstBufferSequence));
    assert!(cap_check!(ScratchRegions: MutableBufferSequence));
}

#[test]
fn element_kind_is_checked() {
    // Read-only elements never satisfy the mutable contract...
    assert!(!cap_check!(StaticRegions: MutableBufferSequence));
    // ...but writable elements read fine.
    assert!(cap_check!(ScratchRegions: ConstBufferSequence));
}

#[test]
fn boundary_types_are_sequences() {
    assert!(cap_check!(ConstBuffer: ConstBufferSequence));
    assert!(cap_check!(MutableBuffer: MutableBufferSequence));
    assert!(cap_check!(MutableBuffer: ConstBufferSequence));
    assert!(!cap_check!(ConstBuffer: MutableBufferSequence));

    assert!(cap_check!([ConstBuffer; 4]: ConstBufferSequence));
    assert!(cap_check!(&'static [MutableBuffer]: MutableBufferSequence));
    assert!(cap_check!(Vec<ConstBuffer>: ConstBufferSequence));
}

// =============================================================================
// No partial credit
// =============================================================================

#[test]
fn missing_clone_fails_whole_check() {
    // The traversal half of the contract alone is not enough.
    assert!(probe!(PinnedRegions, BufferSequence));
    assert!(!cap_check!(PinnedRegions: ConstBufferSequence));
}

#[test]
fn missing_sequence_shape_fails_whole_check() {
    // Clone alone is not enough either.
    assert!(probe!(Lookalike, Clone));
    assert!(!cap_check!(Lookalike: ConstBufferSequence));
    assert!(!cap_check!(Lookalike: MutableBufferSequence));
}

// =============================================================================
// Robustness & monotonicity
// =============================================================================

#[test]
fn scalars_never_qualify() {
    assert!(!cap_check!(i32: ConstBufferSequence));
    assert!(!cap_check!(u8: MutableBufferSequence));
    assert!(!cap_check!((): ConstBufferSequence));
    assert!(!cap_check!(bool: MutableBufferSequence));
}

#[test]
fn unrelated_operations_do_not_disqualify() {
    assert!(cap_check!(DecoratedRegions: ConstBufferSequence));
}

#[test]
fn failed_checks_are_local() {
    // A negative answer next to a positive one; neither disturbs the other.
    assert!(!cap_check!(Lookalike: ConstBufferSequence));
    assert!(cap_check!(StaticRegions: ConstBufferSequence));
    assert!(!cap_check!(i32: ConstBufferSequence));
    assert!(cap_check!(ScratchRegions: MutableBufferSequence));
}
