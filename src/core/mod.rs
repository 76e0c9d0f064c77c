mod finite;

/// Untyped JSON objects and typed extraction of their fields.
pub mod object;

/// The `Readable` capability.
pub mod readable;

/// The `Writable` capability.
pub mod writable;

/// Arrays of JSON primitives.
pub mod primitive;

#[cfg(feature = "time")]
/// Epoch-seconds timestamps.
pub mod timestamp;
