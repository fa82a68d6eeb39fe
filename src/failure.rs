/// A failure value that can be captured into a crash report.
///
/// Models an externally-defined error: a message, a runtime type name, stack
/// frames rendered to strings, and an optional link to the direct underlying
/// cause. `stack_frames` and `cause` have defaults so leaf error types adapt
/// with just two methods.
///
/// Cause links are followed by reference, so a chain handed to
/// [`capture`](crate::capture()) may be arbitrarily deep or even alias back to
/// an ancestor; the capture bounds both.
pub trait Failure {
    /// Human-readable message, if the failure carries one.
    fn message(&self) -> Option<String>;

    /// Fully-qualified runtime type name of the failure value.
    fn type_name(&self) -> String;

    /// String representations of the stack frames, outermost first.
    fn stack_frames(&self) -> Vec<String> {
        Vec::new()
    }

    /// Direct underlying cause, if any.
    fn cause(&self) -> Option<&dyn Failure> {
        None
    }
}
