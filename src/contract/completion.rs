//! The completion-callable contract.

use super::error::ErrorCode;

/// Invocability with a declared argument tuple.
///
/// This is the "is this call possible" building block: `T: Invocable<Args>`
/// holds when a value of `T` can be called with `Args`, whatever it
/// returns. Blanket impls cover callables up to three arguments, which is
/// as wide as any signature this library declares.
pub trait Invocable<Args> {
    /// The call's result; callers of completion machinery discard it.
    type Output;

    fn invoke(self, args: Args) -> Self::Output;
}

impl<F, R> Invocable<()> for F
where
    F: FnOnce() -> R,
{
    type Output = R;

    fn invoke(self, _args: ()) -> R {
        self()
    }
}

impl<F, R, A> Invocable<(A,)> for F
where
    F: FnOnce(A) -> R,
{
    type Output = R;

    fn invoke(self, (a,): (A,)) -> R {
        self(a)
    }
}

impl<F, R, A, B> Invocable<(A, B)> for F
where
    F: FnOnce(A, B) -> R,
{
    type Output = R;

    fn invoke(self, (a, b): (A, B)) -> R {
        self(a, b)
    }
}

impl<F, R, A, B, C> Invocable<(A, B, C)> for F
where
    F: FnOnce(A, B, C) -> R,
{
    type Output = R;

    fn invoke(self, (a, b, c): (A, B, C)) -> R {
        self(a, b, c)
    }
}

/// A completion callable: copy-constructible and invocable with the
/// declared signature.
///
/// Asynchronous machinery stores handlers and may need to re-arm with a
/// fresh copy, so clonability is required alongside invocability; a
/// move-only closure with the right signature does not qualify.
///
/// The library's declared completion signature is
/// `(ErrorCode, usize)`: the error condition and the transferred byte
/// count. See [`CompletionSignature`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a completion callable for `{Args}`",
    label = "expected a cloneable value callable with this signature",
    note = "move-only closures do not qualify; the handler must be `Clone`"
)]
pub trait CompletionCallable<Args>: Invocable<Args> + Clone {}

impl<T, Args> CompletionCallable<Args> for T where T: Invocable<Args> + Clone {}

/// The argument tuple asynchronous operations complete with.
pub type CompletionSignature = (ErrorCode, usize);
