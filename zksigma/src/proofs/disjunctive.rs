//! Disjunctive (OR) proofs of knowledge of a discrete logarithm.
//!
//! A [`DisjunctiveStatement`] asserts that the prover knows a scalar `x` such that either
//! `x * base_a = result_a` (the [`Side::Left`] branch) or `x * base_b = result_b` (the
//! [`Side::Right`] branch), without revealing which.
//!
//! The proof system is pluggable through [`DisjunctiveProofSystem`]; proofs that embed an OR
//! statement, like the [`AbcProof`](crate::proofs::AbcProof), are generic over it. This crate
//! provides [`SchnorrDisjunction`], the composition of two Schnorr proofs due to Cramer, Damgård
//! and Schoenmakers \[1\]:
//!
//! 1. For the true branch the prover picks a random `u` and commits `t = u * base`.
//! 2. For the false branch it picks the branch challenge `c'` and response `z'` at random and
//!    sets `t' = z' * base' - c' * result'`, which is a valid transcript for any statement.
//! 3. The challenge `c` is the hash of the statement and both commitments. The true branch gets
//!    challenge `c - c'` and response `u + (c - c') * x`.
//!
//! The verifier checks that the branch challenges sum to `c` and that both branch transcripts are
//! valid. Because the prover can only choose one branch challenge freely, it must know the
//! witness for the other.
//!
//! ## References
//!
//! 1. Ronald Cramer, Ivan Damgård, and Berry Schoenmakers. Proofs of partial knowledge and
//!    simplified design of witness hiding protocols. In Yvo G. Desmedt, editor, Advances in
//!    Cryptology - CRYPTO '94, pages 174–187. Springer Berlin Heidelberg, 1994.

use crate::{
    common::*,
    proofs::{Challenge, ChallengeBuilder, ChallengeDigest},
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

const LOG_TARGET: &str = "zksigma::proofs::disjunctive";

/// Selects which branch of a disjunction the prover knows a witness for.
///
/// This is a proving strategy, not part of the statement: proofs for either side look the same to
/// a verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// The prover knows `x` with `x * base_a = result_a`.
    Left,
    /// The prover knows `x` with `x * base_b = result_b`.
    Right,
}

/// The public statement "`x * base_a = result_a` OR `x * base_b = result_b`".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisjunctiveStatement {
    /// Base of the left branch.
    pub base_a: G1Projective,
    /// Claimed multiple of `base_a`.
    pub result_a: G1Projective,
    /// Base of the right branch.
    pub base_b: G1Projective,
    /// Claimed multiple of `base_b`.
    pub result_b: G1Projective,
}

impl DisjunctiveStatement {
    /// Check whether `witness` satisfies the branch selected by `side`.
    pub fn is_satisfied_by(&self, witness: Scalar, side: Side) -> bool {
        match side {
            Side::Left => self.base_a * witness == self.result_a,
            Side::Right => self.base_b * witness == self.result_b,
        }
    }
}

impl ChallengeDigest for DisjunctiveStatement {
    fn digest(&self, builder: &mut ChallengeBuilder) {
        builder.digest(&self.base_a);
        builder.digest(&self.result_a);
        builder.digest(&self.base_b);
        builder.digest(&self.result_b);
    }
}

/// A system for proving and verifying [`DisjunctiveStatement`]s.
pub trait DisjunctiveProofSystem {
    /// The proof produced by this system.
    type Proof: Debug + Clone + PartialEq;

    /// Prove `statement` using `witness`, which must satisfy the branch selected by `side`.
    ///
    /// Fails with [`Error::SubProof`] if the witness does not satisfy that branch and with
    /// [`Error::Randomness`] if the random number generator fails.
    fn prove(
        &self,
        rng: &mut impl Rng,
        statement: &DisjunctiveStatement,
        witness: Scalar,
        side: Side,
    ) -> Result<Self::Proof, Error>;

    /// Verify a proof of `statement`.
    fn verify(&self, statement: &DisjunctiveStatement, proof: &Self::Proof) -> bool;
}

/// The Cramer-Damgård-Schoenmakers OR composition of two Schnorr proofs, made non-interactive
/// with the Fiat-Shamir heuristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchnorrDisjunction;

/// A proof produced by [`SchnorrDisjunction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisjunctiveProof {
    /// Commitment for the left branch.
    #[serde(with = "SerializeElement")]
    t_a: G1Projective,
    /// Commitment for the right branch.
    #[serde(with = "SerializeElement")]
    t_b: G1Projective,
    /// Challenge for the left branch.
    #[serde(with = "SerializeElement")]
    challenge_a: Scalar,
    /// Challenge for the right branch.
    #[serde(with = "SerializeElement")]
    challenge_b: Scalar,
    /// Response for the left branch.
    #[serde(with = "SerializeElement")]
    response_a: Scalar,
    /// Response for the right branch.
    #[serde(with = "SerializeElement")]
    response_b: Scalar,
}

impl DisjunctiveProof {
    fn challenge(
        statement: &DisjunctiveStatement,
        t_a: &G1Projective,
        t_b: &G1Projective,
    ) -> Challenge {
        ChallengeBuilder::new()
            .with(statement)
            .with(t_a)
            .with(t_b)
            .finish()
    }
}

impl DisjunctiveProofSystem for SchnorrDisjunction {
    type Proof = DisjunctiveProof;

    fn prove(
        &self,
        rng: &mut impl Rng,
        statement: &DisjunctiveStatement,
        witness: Scalar,
        side: Side,
    ) -> Result<DisjunctiveProof, Error> {
        if !statement.is_satisfied_by(witness, side) {
            tracing::debug!(target: LOG_TARGET, "witness does not satisfy the selected branch");
            return Err(Error::SubProof);
        }

        let commitment_scalar = random_scalar(rng)?;
        let simulated_challenge = random_scalar(rng)?;
        let simulated_response = random_scalar(rng)?;

        // Real transcript on the known side, simulated transcript on the other.
        let (t_a, t_b) = match side {
            Side::Left => (
                statement.base_a * commitment_scalar,
                statement.base_b * simulated_response - statement.result_b * simulated_challenge,
            ),
            Side::Right => (
                statement.base_a * simulated_response - statement.result_a * simulated_challenge,
                statement.base_b * commitment_scalar,
            ),
        };

        let challenge = DisjunctiveProof::challenge(statement, &t_a, &t_b).to_scalar();
        let real_challenge = challenge - simulated_challenge;
        let real_response = commitment_scalar + real_challenge * witness;
        tracing::debug!(target: LOG_TARGET, "generated disjunctive proof");

        Ok(match side {
            Side::Left => DisjunctiveProof {
                t_a,
                t_b,
                challenge_a: real_challenge,
                challenge_b: simulated_challenge,
                response_a: real_response,
                response_b: simulated_response,
            },
            Side::Right => DisjunctiveProof {
                t_a,
                t_b,
                challenge_a: simulated_challenge,
                challenge_b: real_challenge,
                response_a: simulated_response,
                response_b: real_response,
            },
        })
    }

    fn verify(&self, statement: &DisjunctiveStatement, proof: &DisjunctiveProof) -> bool {
        let challenge = DisjunctiveProof::challenge(statement, &proof.t_a, &proof.t_b).to_scalar();
        if proof.challenge_a + proof.challenge_b != challenge {
            tracing::debug!(target: LOG_TARGET, "branch challenges do not sum to the challenge");
            return false;
        }

        let left_holds = statement.base_a * proof.response_a
            == proof.t_a + statement.result_a * proof.challenge_a;
        let right_holds = statement.base_b * proof.response_b
            == proof.t_b + statement.result_b * proof.challenge_b;
        tracing::debug!(target: LOG_TARGET, left_holds, right_holds, "checked branch transcripts");

        left_holds && right_holds
    }
}
