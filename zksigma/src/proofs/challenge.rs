//! Functionality for building challenge scalars.
//!
//! Challenges are derived with the Fiat-Shamir heuristic: every public element of a proof is fed,
//! in a fixed order, into a hash function, and the digest is mapped to a scalar. Changing any
//! input or the order of the inputs changes the challenge.

use crate::{common::*, serde::SerializeElement};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Sha3_256};

/// A trait implemented by types which can feed their public components into a [`ChallengeBuilder`].
pub trait ChallengeDigest {
    /// Incorporate public components of this type into a [`ChallengeBuilder`].
    fn digest(&self, builder: &mut ChallengeBuilder);
}

impl<'a, T: ChallengeDigest> ChallengeDigest for &'a T {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        (**self).digest(builder);
    }
}

impl ChallengeDigest for Scalar {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_bytes());
    }
}

impl ChallengeDigest for G1Affine {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_bytes());
    }
}

impl ChallengeDigest for G1Projective {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest_bytes(self.to_bytes());
    }
}

/// A challenge scalar for use in a Schnorr-style proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge(#[serde(with = "SerializeElement")] Scalar);

impl Challenge {
    /// Retrieve the internal scalar value.
    pub fn to_scalar(self) -> Scalar {
        self.0
    }
}

/// Holds state used when building a [`Challenge`] using the Fiat-Shamir heuristic, as in a
/// non-interactive Schnorr proof.
#[derive(Debug)]
#[allow(missing_copy_implementations)]
pub struct ChallengeBuilder {
    hasher: Sha3_256,
}

impl Default for ChallengeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeBuilder {
    /// Initialize a new, empty challenge.
    pub fn new() -> Self {
        Self {
            hasher: Sha3_256::new(),
        }
    }

    /// Incorporate public data from some given type into the challenge.
    pub fn digest<T: ChallengeDigest>(&mut self, object: &T) {
        object.digest(self);
    }

    /// A conveniently chainable variant of [`ChallengeBuilder::digest`].
    pub fn with<T: ChallengeDigest>(mut self, object: &T) -> Self {
        object.digest(&mut self);
        self
    }

    /// Incorporate arbitrary bytes into the challenge.
    pub fn digest_bytes(&mut self, bytes: impl AsRef<[u8]>) {
        self.hasher.update(bytes);
    }

    /// A conveniently chainable variant of [`ChallengeBuilder::digest_bytes`].
    pub fn with_bytes(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.digest_bytes(bytes);
        self
    }

    /// Consume the builder and generate a [`Challenge`] from the accumulated data.
    ///
    /// The 256-bit digest is read as four little-endian limbs and reduced mod the group order.
    pub fn finish(self) -> Challenge {
        let digested = self.hasher.finalize();
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(digested.chunks_exact(8)) {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(bytes);
        }
        Challenge(Scalar::from_raw(limbs))
    }
}
