/// A boxed error type for window operations.
///
/// Every failure in this project is a single synchronous OS call with no
/// recovery beyond reporting it, so a boxed error carrying the OS message
/// is all callers need.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;
