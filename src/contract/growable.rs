//! The growable-buffer contract.

use super::buffer_sequence::{ConstBufferSequence, MutableBufferSequence};

/// An appendable/consumable byte staging buffer.
///
/// `prepare`/`commit` govern the write side, `data`/`consume` the read
/// side. The sequence requirements on the `prepare` and `data` results are
/// load-bearing and carried by the associated-type bounds; `commit` and
/// `consume` are purely advisory and return nothing; `size` must report the
/// readable byte count as exactly `usize`.
///
/// A lone [`MutableBuffer`](super::MutableBuffer) satisfies the
/// prepare-side sequence requirement and a lone
/// [`ConstBuffer`](super::ConstBuffer) the data-side one, so contiguous
/// models need no dedicated sequence types.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a growable buffer",
    label = "expected prepare/commit/consume/data/size staging-buffer shape",
    note = "`prepare` must yield a mutable buffer sequence and `data` a const buffer sequence"
)]
pub trait GrowableBuffer {
    /// Writable descriptors over the prepared output region.
    type PrepareBuffers: MutableBufferSequence;

    /// Read-only descriptors over the committed input region.
    type DataBuffers: ConstBufferSequence;

    /// Reserve space for up to `additional` more bytes and expose it for
    /// writing.
    fn prepare(&mut self, additional: usize) -> Self::PrepareBuffers;

    /// Move `transferred` bytes from the prepared region into the readable
    /// region.
    fn commit(&mut self, transferred: usize);

    /// The readable region.
    fn data(&self) -> Self::DataBuffers;

    /// Discard `transferred` bytes from the front of the readable region.
    fn consume(&mut self, transferred: usize);

    /// Bytes currently readable.
    fn size(&self) -> usize;
}
