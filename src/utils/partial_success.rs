//! Type aliases for operations that support partial success/failure patterns.
//! These represent graceful error handling where some parts of an operation may fail
//! while others succeed, allowing partial completion rather than total failure.

/// Represents a successful operation where some parts failed but didn't prevent overall success.
/// The `Vec<W>` contains the diagnostics from the parts that were handled gracefully.
pub type PartialSuccess<T, W> = ( T, Vec<W> );

/// Represents an operation that may partially succeed or fail.
/// Ok: Core success data plus diagnostics from partial failures that allowed completion.
/// Err: Primary failure cause plus every diagnostic gathered before the failure.
pub type PartialResult<T, E, W> = Result<( T, Vec<W> ), ( E, Vec<W> )>;
