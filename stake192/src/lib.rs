#![no_std]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod aes;
pub mod ecdh;
pub mod ecdsa;
pub mod kex;

mod arithmetic;
mod error;
mod public_key;
mod secret_key;

pub use rand_core;

pub use crate::{
    arithmetic::{AffinePoint, FieldElement, ProjectivePoint, Scalar},
    error::{Error, Result},
    public_key::PublicKey,
    secret_key::SecretKey,
};

/// Number of 32-bit digits in a field element (192 bits).
pub const FP_DIGITS: usize = 6;

/// Number of 32-bit digits in a scalar modulo the group order.
pub const ORDER_DIGITS: usize = 6;

/// Bit length of the group order.
pub const ORDER_BITS: usize = 192;

/// Serialized size of a field element or scalar in bytes.
pub const ELEMENT_BYTES: usize = 24;

/// Serialized size of an uncompressed curve point (`X ‖ Y`) in bytes.
pub const POINT_BYTES: usize = 2 * ELEMENT_BYTES;
