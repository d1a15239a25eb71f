//! The execution-context accessor contract.

/// Opaque owner of execution resources (reactor, scheduler, worker pool).
///
/// This subsystem never looks inside it; streams merely advertise which
/// context owns them.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    _opaque: (),
}

impl ExecutionContext {
    pub const fn new() -> Self {
        Self { _opaque: () }
    }
}

/// Access to the owning [`ExecutionContext`].
///
/// The return type is exactly `&ExecutionContext`, not merely something
/// convertible: the accessor selects ownership and threading context, and a
/// silently substituted stand-in must not qualify.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no execution-context accessor",
    label = "expected `fn context(&self) -> &ExecutionContext`",
    note = "async stream contracts require the stream to advertise its owning context"
)]
pub trait HasExecutionContext {
    fn context(&self) -> &ExecutionContext;
}
