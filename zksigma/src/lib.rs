//! This crate includes zero-knowledge proofs for auditing confidential values, instantiated over
//! the prime-order group G1 of the pairing-friendly curve BLS12-381:
//! - Pedersen commitments to single scalars.
//! - Fiat-Shamir challenges built from public proof elements.
//! - Disjunctive (OR) proofs of knowledge of one of two discrete logarithms.
//! - Multiplicative-relationship proofs showing that committed values `a`, `b` and `c` satisfy
//!   `a * b = c`, used to show a committed value is either zero or invertible.

#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod parameters;
pub mod pedersen;
pub mod proofs;

mod serde;

pub use crate::common::Rng;
pub use crate::serde::SerializeElement;

use crate::common::*;
use ::serde::*;
use ff::Field;
use thiserror::*;

/// Error types that may arise from building or verifying proofs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The random number generator failed to produce a scalar.
    #[error("the random number generator failed to produce a scalar")]
    Randomness,
    /// The prover's inputs cannot produce a valid proof.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// An embedded disjunctive proof failed to generate or to verify.
    #[error("disjunctive sub-proof failed to generate or verify")]
    SubProof,
    /// The challenge stored in a proof does not match the one recomputed from its public elements.
    #[error("proof contains an incorrect challenge")]
    ChallengeMismatch,
    /// One of the verification equations did not hold.
    #[error("verification equation {0} does not hold")]
    EquationMismatch(Equation),
}

impl Error {
    /// Whether the same call might succeed if it were repeated.
    ///
    /// Only a failure of the random number generator is transient. Every other error means the
    /// inputs or the proof are invalid.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Randomness)
    }
}

/// Names a verification equation, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equation {
    /// `c * CM + T1 = j * G + k * CMTok`.
    Linear1,
    /// `c * C + T2 = j * B + l * H`.
    Linear2,
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Equation::Linear1 => f.write_str("linear-1"),
            Equation::Linear2 => f.write_str("linear-2"),
        }
    }
}

/// Blinding factor for a commitment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BlindingFactor(#[serde(with = "SerializeElement")] pub(crate) Scalar);

impl BlindingFactor {
    /// Generate a new blinding factor uniformly at random from the set of possible [`Scalar`]s.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self(Scalar::random(rng))
    }

    /// Construct a blinding factor from the scalar representing it.
    ///
    /// **warning:** the scalar must be chosen uniformly at random for the commitment to hide
    /// anything!
    pub fn from_scalar(scalar: Scalar) -> Self {
        Self(scalar)
    }

    /// Get the inner scalar representing this blinding factor.
    pub fn as_scalar(&self) -> Scalar {
        self.0
    }
}

mod common {
    //! Common types used internally.

    pub use crate::{BlindingFactor, Equation, Error};
    pub use bls12_381::{G1Affine, G1Projective, Scalar};
    pub use group::{Group, GroupEncoding};

    /// A trait synonym for a cryptographically secure random number generator. This trait is
    /// blanket-implemented for all valid types and will never need to be implemented by-hand.
    pub trait Rng: rand::CryptoRng + rand::RngCore {}
    impl<T: rand::CryptoRng + rand::RngCore> Rng for T {}

    /// Select a non-identity element from the group uniformly at random.
    pub fn random_non_identity<G>(rng: &mut impl Rng) -> G
    where
        G: Group<Scalar = Scalar>,
    {
        loop {
            let g = G::random(&mut *rng);
            if !bool::from(g.is_identity()) {
                return g;
            }
        }
    }

    /// Select a scalar uniformly at random, reporting a failure of the generator instead of
    /// panicking.
    ///
    /// Draws 512 bits and reduces them mod the group order, so the bias is negligible.
    pub fn random_scalar(rng: &mut impl Rng) -> Result<Scalar, Error> {
        let mut bytes = [0; 64];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| Error::Randomness)?;
        Ok(Scalar::from_bytes_wide(&bytes))
    }

    /// Multiplicative inverse of a scalar, with the inverse of zero defined to be zero.
    pub fn invert_or_zero(scalar: &Scalar) -> Scalar {
        scalar.invert().unwrap_or(Scalar::zero())
    }
}
