//! The buffer-sequence contracts.
//!
//! A buffer sequence is the universal currency for scatter/gather I/O: an
//! ordered, cheaply copyable collection of region descriptors. Generic
//! transport code accepts "anything sequence-shaped" rather than one
//! concrete container, because callers supply heterogeneous buffer
//! representations: a single descriptor, a fixed array of chunks, a vector
//! assembled at runtime.

use super::buffer::{ConstBuffer, MutableBuffer};

/// An ordered collection of memory-region descriptors.
///
/// `Iter` must be `Clone`: traversal has to be repeatable, since generic
/// code may walk the sequence once to size an operation and again to
/// perform it. `buffers()` yields descriptors by value; descriptors are
/// small copyable views, not the bytes themselves.
pub trait BufferSequence {
    /// The region-descriptor type the sequence yields.
    type Buffer;

    /// Repeatable traversal over the descriptors.
    type Iter<'a>: Iterator<Item = Self::Buffer> + Clone
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_>;
}

/// A cheaply copyable sequence of read-only regions.
///
/// Holds exactly when `T` is sequence-shaped, cloneable, and its
/// descriptors narrow to [`ConstBuffer`]. A mutable sequence qualifies (a
/// writable region may always be read); the reverse never holds.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a const buffer sequence",
    label = "expected a cloneable sequence of read-only region descriptors",
    note = "implement `BufferSequence` with a `Buffer` type convertible to `ConstBuffer`, and `Clone`"
)]
pub trait ConstBufferSequence: BufferSequence<Buffer: Into<ConstBuffer>> + Clone {}

impl<T> ConstBufferSequence for T
where
    T: BufferSequence<Buffer: Into<ConstBuffer>> + Clone,
{
}

/// A cheaply copyable sequence of writable regions.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a mutable buffer sequence",
    label = "expected a cloneable sequence of writable region descriptors",
    note = "implement `BufferSequence` with a `Buffer` type convertible to `MutableBuffer`, and `Clone`"
)]
pub trait MutableBufferSequence: BufferSequence<Buffer: Into<MutableBuffer>> + Clone {}

impl<T> MutableBufferSequence for T
where
    T: BufferSequence<Buffer: Into<MutableBuffer>> + Clone,
{
}

// =============================================================================
// Sequence impls for the boundary types
// =============================================================================

// A lone descriptor is a one-element sequence of itself.

impl BufferSequence for ConstBuffer {
    type Buffer = ConstBuffer;
    type Iter<'a>
        = core::iter::Once<ConstBuffer>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        core::iter::once(*self)
    }
}

impl BufferSequence for MutableBuffer {
    type Buffer = MutableBuffer;
    type Iter<'a>
        = core::iter::Once<MutableBuffer>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        core::iter::once(*self)
    }
}

// Slices, arrays, and vectors of descriptors are sequences.

impl<B> BufferSequence for &[B]
where
    B: Copy + Into<ConstBuffer>,
{
    type Buffer = B;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, B>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

impl<B, const N: usize> BufferSequence for [B; N]
where
    B: Copy + Into<ConstBuffer>,
{
    type Buffer = B;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, B>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

#[cfg(feature = "alloc")]
impl<B> BufferSequence for alloc::vec::Vec<B>
where
    B: Copy + Into<ConstBuffer>,
{
    type Buffer = B;
    type Iter<'a>
        = core::iter::Copied<core::slice::Iter<'a, B>>
    where
        Self: 'a;

    fn buffers(&self) -> Self::Iter<'_> {
        self.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_len<S: ConstBufferSequence>(seq: &S) -> usize {
        seq.buffers().map(|b| b.into().len()).sum()
    }

    #[test]
    fn descriptor_is_one_element_sequence() {
        let storage = [0u8; 16];
        let region = ConstBuffer::from_slice(&storage);
        assert_eq!(region.buffers().count(), 1);
        assert_eq!(total_len(&region), 16);
    }

    #[test]
    fn array_of_descriptors_is_sequence() {
        let a = [1u8, 2, 3];
        let b = [4u8, 5];
        let chunks = [ConstBuffer::from_slice(&a), ConstBuffer::from_slice(&b)];
        assert_eq!(total_len(&chunks), 5);
    }

    #[test]
    fn traversal_is_repeatable() {
        let storage = [0u8; 4];
        let chunks = [ConstBuffer::from_slice(&storage); 3];
        let first = chunks.buffers();
        let second = first.clone();
        assert_eq!(first.count(), second.count());
    }

    #[test]
    fn mutable_sequence_reads_as_const() {
        fn readable<S: ConstBufferSequence>(_seq: &S) {}
        fn writable<S: MutableBufferSequence>(_seq: &S) {}

        let mut storage = [0u8; 8];
        let region = MutableBuffer::from_slice(&mut storage);
        readable(&region);
        writable(&region);
    }
}
