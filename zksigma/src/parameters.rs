//! The group context shared by provers and verifiers.
//!
//! All proofs in this crate are over G1 of BLS12-381 and use two generators: `G`, which carries
//! committed values, and `H`, which carries blinding factors. Nobody may know the discrete
//! logarithm of `H` with respect to `G`; otherwise commitments stop being binding.
//!
//! [`GroupParameters`] are an ordinary value, passed explicitly to every operation, so several
//! independent contexts can coexist in one process.

use crate::{
    common::*,
    proofs::{ChallengeBuilder, ChallengeDigest},
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};

/// The generators `G` and `H` of the commitment group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParameters {
    #[serde(with = "SerializeElement")]
    g: G1Projective,
    #[serde(with = "SerializeElement")]
    h: G1Projective,
}

impl GroupParameters {
    /// Generate a new set of parameters.
    ///
    /// `G` is the standard generator of G1; `H` is chosen uniformly at random, such that no
    /// discrete logarithm relationship between the two is known.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            g: G1Projective::generator(),
            h: random_non_identity(rng),
        }
    }

    /// Produce parameters from a pair of known generators.
    ///
    /// The caller is responsible for ensuring the discrete logarithm of `h` with respect to `g`
    /// is unknown.
    pub fn from_generators(g: G1Projective, h: G1Projective) -> Self {
        Self { g, h }
    }

    /// Get the generator carrying committed values.
    pub fn g(&self) -> G1Projective {
        self.g
    }

    /// Get the generator carrying blinding factors.
    pub fn h(&self) -> G1Projective {
        self.h
    }
}

impl ChallengeDigest for GroupParameters {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(&self.g);
        builder.digest(&self.h);
    }
}
