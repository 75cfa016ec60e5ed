use thiserror::Error;

/// An operation required a held value that was not there.
///
/// Returned by [`apply`](crate::apply) when any operand is empty, and by the
/// checked accessors when the requested alternative is not the one held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Error)]
#[error("bad variant access")]
pub struct BadAccess;
