//! # Layer 3: Implementation Selection
//!
//! Generic library code queries a check and then has to *act* on the
//! answer: wrap the fast path when the candidate is a full stream, fall
//! back otherwise. This module turns a verification result into a chosen
//! implementation type, with no runtime branch; the not-chosen path is
//! never instantiated.
//!
//! ## Usage
//!
//! ```
//! use netcaps::cap_check;
//! use netcaps::dispatch::{StaticMethodImpl, static_select};
//!
//! struct Framed;
//! struct Raw;
//!
//! impl StaticMethodImpl<&'static str> for Framed {
//!     fn call() -> &'static str { "framed transport" }
//! }
//! impl StaticMethodImpl<&'static str> for Raw {
//!     fn call() -> &'static str { "raw bytes" }
//! }
//!
//! // i32 is not a stream, so the raw path is selected.
//! let chosen = static_select::<{ cap_check!(i32: Stream) }, Framed, Raw, _>();
//! assert_eq!(chosen, "raw bytes");
//! ```

use crate::verdict::{Bool, OutcomeOf, SelectBool};

/// An implementation path with a single static entry point.
///
/// Implementations are unit types naming a strategy; selection picks one of
/// them by a verification result and calls it.
pub trait StaticMethodImpl<Output> {
    fn call() -> Output;
}

/// Call the implementation selected by a verification result.
///
/// `B` is a probe result (`cap_check!` output); `Then` runs when the
/// capability is present, `Else` when it is not.
#[inline(always)]
pub fn static_select<const B: bool, Then, Else, Output>() -> Output
where
    (): SelectBool<B>,
    Then: StaticMethodImpl<Output>,
    Else: StaticMethodImpl<Output>,
{
    <OutcomeOf<B> as Bool>::static_dispatch::<Then, Else, Output>()
}
