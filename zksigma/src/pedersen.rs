//! Pedersen commitments \[1\] to single scalars over G1 of BLS12-381 \[2\].
//!
//! A commitment to `value` with blinding factor `bf` is `value * G + bf * H`, where `G` and `H`
//! are taken from the [`GroupParameters`]. Commitments may be formed using [`Commitment::new`]
//! (or [`GroupParameters::commit`]) and verified with [`Commitment::verify_opening`].
//! ```
//! # use zksigma::{BlindingFactor, parameters::GroupParameters, pedersen::Commitment};
//! # use bls12_381::Scalar;
//! # let mut rng = rand::thread_rng();
//! let params = GroupParameters::new(&mut rng);
//! let value = Scalar::from(5u64);
//! let bf = BlindingFactor::new(&mut rng);
//! let commitment = Commitment::new(&params, value, bf);
//! assert!(commitment.verify_opening(&params, bf, value));
//! ```
//!
//! ## References
//!
//! 1. Torben Pyrds Pedersen. "Non-interactive and information-theoretic secure verifiable secret
//!    sharing". 1992. URL: <https://www.cs.cornell.edu/courses/cs754/2001fa/129.PDF>
//!
//! 2. D. Boneh, S. Gorbunov, R. Wahby, H. Wee, and Z. Zhang. "BLS Signatures, Version 4".
//!    Internet-draft, IETF. 2021. URL:
//!    <https://datatracker.ietf.org/doc/html/draft-irtf-cfrg-bls-signature-04>

use crate::{
    common::*,
    parameters::GroupParameters,
    proofs::{ChallengeBuilder, ChallengeDigest},
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};

/// A Pedersen commitment to a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment(#[serde(with = "SerializeElement")] pub(crate) G1Projective);

impl Commitment {
    /// Form a commitment to a value and blinding factor using the given parameters.
    pub fn new(params: &GroupParameters, value: Scalar, bf: BlindingFactor) -> Self {
        Commitment(params.g() * value + params.h() * bf.as_scalar())
    }

    /// Verify a provided opening of the commitment.
    pub fn verify_opening(
        &self,
        params: &GroupParameters,
        bf: BlindingFactor,
        value: Scalar,
    ) -> bool {
        Commitment::new(params, value, bf) == *self
    }

    /// Get the inner group element representing the commitment.
    pub fn to_element(self) -> G1Projective {
        self.0
    }
}

impl From<Commitment> for G1Projective {
    fn from(commitment: Commitment) -> Self {
        commitment.0
    }
}

impl GroupParameters {
    /// Commit to `value` with blinding factor `bf`.
    pub fn commit(&self, value: Scalar, bf: BlindingFactor) -> Commitment {
        Commitment::new(self, value, bf)
    }
}

impl ChallengeDigest for Commitment {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(&self.0);
    }
}
