//! Error types.

use core::fmt;

/// Result type with the `stake192` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by curve, signature, and key-exchange operations.
///
/// The arithmetic layers are total and never fail; all failure modes live
/// at the protocol surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A peer-supplied point does not satisfy the curve equation.
    NotOnCurve,

    /// A point operation produced the point at infinity where an affine
    /// point was required.
    PointAtInfinity,

    /// ECDSA signature verification rejected the signature.
    BadSignature,

    /// The caller-supplied random number generator failed to produce
    /// output. There is no fallback generator.
    RngUnavailable,

    /// A key-exchange session key was requested before the protocol
    /// reached the step that establishes the shared point.
    NotReady,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::NotOnCurve => "point is not on the curve",
            Error::PointAtInfinity => "point at infinity",
            Error::BadSignature => "signature verification failed",
            Error::RngUnavailable => "random number generator unavailable",
            Error::NotReady => "key exchange has not established a shared point",
        };

        f.write_str(msg)
    }
}

impl core::error::Error for Error {}
