//! Proofs that three committed scalars `a`, `b` and `c` satisfy `a * b = c`.
//!
//! The proof is used to show that a committed value `v` is either zero or invertible, and that a
//! companion commitment `C` opens to `0` or `1` accordingly, without revealing `v` or the secret
//! key associated with it. It is a building block for audits of confidential amounts.
//!
//! ## Statement
//!
//! Public: the [`GroupParameters`] `G`, `H`, and
//! - `CM = v * G + r * H`, a commitment to `v`;
//! - `CMTok = r * sk * H`, a token for `CM` under the secret key `sk`, sharing the blinding `r`.
//!
//! The prover publishes
//! - `B = inv(v) * G + ub * H`, a commitment to the inverse of `v`, where `inv(0) = 0`;
//! - `C = (v * inv(v)) * G + uc * H`, a commitment to `0` when `v = 0` and to `1` otherwise;
//! - a disjunctive proof that either `sk * CM = CMTok` (so `CM` commits to zero) or
//!   `uc * H = C - G` (so `C` commits to one).
//!
//! ## Protocol
//!
//! The prover picks `u1`, `u2`, `u3` at random and computes
//! - `T1 = u1 * G + u2 * CMTok`,
//! - `T2 = u1 * B + u3 * H`,
//! - `c = HASH(G, H, CM, CMTok, B, C, T1, T2)`,
//! - `j = u1 + v * c`, `k = u2 + inv(sk) * c`, `l = u3 + (uc - v * ub) * c`.
//!
//! The verifier checks the disjunctive proof, recomputes `c`, and checks
//! - `c * CM + T1 = j * G + k * CMTok`,
//! - `c * C + T2 = j * B + l * H`.
//!
//! The first equation shows the prover knows `v` as the `G`-component of `CM`; the second that the
//! same `v` times the `G`-component of `B` equals the `G`-component of `C`.
//!
//! ## Choosing a side
//!
//! The [`Side`] tells the prover which branch of the disjunction it can prove: [`Side::Left`] when
//! `v = 0`, [`Side::Right`] otherwise. It is a proving strategy and is not part of the proof.
//! All scalars in the proof, including `l`, are reduced mod the group order.

use crate::{
    common::*,
    parameters::GroupParameters,
    pedersen::Commitment,
    proofs::{
        Challenge, ChallengeBuilder, DisjunctiveProofSystem, DisjunctiveStatement,
        SchnorrDisjunction, Side,
    },
    serde::SerializeElement,
};
use serde::{Deserialize, Serialize};

const LOG_TARGET: &str = "zksigma::proofs::abc";

/// Fully constructed proof that committed scalars satisfy `a * b = c`.
///
/// Generic over the [`DisjunctiveProofSystem`] used for the embedded OR statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "D::Proof: Serialize",
    deserialize = "D::Proof: Deserialize<'de>"
))]
pub struct AbcProof<D: DisjunctiveProofSystem = SchnorrDisjunction> {
    /// Commitment to the inverse of `v` (or to zero, if `v = 0`).
    b: Commitment,
    /// Commitment to `v * inv(v)`, which is always `0` or `1`.
    c: Commitment,
    /// `T1 = u1 * G + u2 * CMTok`.
    #[serde(with = "SerializeElement")]
    t1: G1Projective,
    /// `T2 = u1 * B + u3 * H`.
    #[serde(with = "SerializeElement")]
    t2: G1Projective,
    /// `c = HASH(G, H, CM, CMTok, B, C, T1, T2)`.
    challenge: Challenge,
    /// `j = u1 + v * c`.
    #[serde(with = "SerializeElement")]
    j: Scalar,
    /// `k = u2 + inv(sk) * c`.
    #[serde(with = "SerializeElement")]
    k: Scalar,
    /// `l = u3 + (uc - v * ub) * c`.
    #[serde(with = "SerializeElement")]
    l: Scalar,
    /// `sk * uc * H`.
    #[serde(with = "SerializeElement")]
    c_token: G1Projective,
    /// Proof that `CM` commits to zero or `C` commits to one.
    disjunctive: D::Proof,
}

/// The statement proven by the disjunctive sub-proof: `sk * CM = CMTok` or `uc * H = C - G`.
fn disjunctive_statement(
    params: &GroupParameters,
    cm: Commitment,
    cm_token: G1Projective,
    c: Commitment,
) -> DisjunctiveStatement {
    DisjunctiveStatement {
        base_a: cm.to_element(),
        result_a: cm_token,
        base_b: params.h(),
        result_b: c.to_element() - params.g(),
    }
}

fn challenge(
    params: &GroupParameters,
    cm: Commitment,
    cm_token: G1Projective,
    b: Commitment,
    c: Commitment,
    t1: G1Projective,
    t2: G1Projective,
) -> Challenge {
    ChallengeBuilder::new()
        .with(params)
        .with(&cm)
        .with(&cm_token)
        .with(&b)
        .with(&c)
        .with(&t1)
        .with(&t2)
        .finish()
}

impl<D: DisjunctiveProofSystem + Default> AbcProof<D> {
    /// Prove that `cm` commits to a value `value` that is zero or invertible.
    ///
    /// `cm` must be `value * G + r * H` and `cm_token` must be `r * secret_key * H`. The `side`
    /// must be [`Side::Left`] if `value` is zero and [`Side::Right`] otherwise.
    ///
    /// Fails with [`Error::InvalidInput`] if `secret_key` is zero or `side` does not match
    /// `value`, and with [`Error::Randomness`] if the random number generator fails.
    pub fn new(
        rng: &mut impl Rng,
        params: &GroupParameters,
        cm: Commitment,
        cm_token: G1Projective,
        value: Scalar,
        secret_key: Scalar,
        side: Side,
    ) -> Result<Self, Error> {
        Self::new_with(&D::default(), rng, params, cm, cm_token, value, secret_key, side)
    }

    /// Verify the proof against the commitment `cm` and its token `cm_token`.
    ///
    /// Returns the reason for rejection if any check fails.
    pub fn verify(
        &self,
        params: &GroupParameters,
        cm: Commitment,
        cm_token: G1Projective,
    ) -> Result<(), Error> {
        self.verify_with(&D::default(), params, cm, cm_token)
    }

    /// Whether the proof verifies against the commitment `cm` and its token `cm_token`.
    pub fn is_valid(
        &self,
        params: &GroupParameters,
        cm: Commitment,
        cm_token: G1Projective,
    ) -> bool {
        self.verify(params, cm, cm_token).is_ok()
    }
}

impl<D: DisjunctiveProofSystem> AbcProof<D> {
    /// Like [`AbcProof::new`], proving the disjunctive statement with the given `system`.
    #[allow(clippy::too_many_arguments)]
    pub fn new_with(
        system: &D,
        rng: &mut impl Rng,
        params: &GroupParameters,
        cm: Commitment,
        cm_token: G1Projective,
        value: Scalar,
        secret_key: Scalar,
        side: Side,
    ) -> Result<Self, Error> {
        if secret_key == Scalar::zero() {
            return Err(Error::InvalidInput("secret key must be invertible"));
        }
        let value_is_zero = value == Scalar::zero();
        match side {
            Side::Left if !value_is_zero => {
                return Err(Error::InvalidInput("left side requires a zero value"))
            }
            Side::Right if value_is_zero => {
                return Err(Error::InvalidInput("right side requires a nonzero value"))
            }
            _ => {}
        }

        let u1 = random_scalar(rng)?;
        let u2 = random_scalar(rng)?;
        let u3 = random_scalar(rng)?;
        let ub = random_scalar(rng)?;
        let uc = random_scalar(rng)?;

        let c_token = params.h() * secret_key * uc;

        // inv(0) = 0, so B = ub * H when v = 0.
        let b = params.commit(invert_or_zero(&value), BlindingFactor::from_scalar(ub));
        let (c, witness) = match side {
            Side::Left => (
                params.commit(Scalar::zero(), BlindingFactor::from_scalar(uc)),
                secret_key,
            ),
            Side::Right => (
                params.commit(Scalar::one(), BlindingFactor::from_scalar(uc)),
                uc,
            ),
        };

        let statement = disjunctive_statement(params, cm, cm_token, c);
        let disjunctive = system
            .prove(rng, &statement, witness, side)
            .map_err(|err| match err {
                Error::Randomness => Error::Randomness,
                _ => Error::SubProof,
            })?;

        let t1 = params.g() * u1 + cm_token * u2;
        let t2 = b.to_element() * u1 + params.h() * u3;

        let challenge = challenge(params, cm, cm_token, b, c, t1, t2);
        let c_scalar = challenge.to_scalar();

        let j = u1 + value * c_scalar;
        let k = u2 + invert_or_zero(&secret_key) * c_scalar;
        let l = u3 + (uc - value * ub) * c_scalar;
        tracing::debug!(target: LOG_TARGET, "generated multiplicative relationship proof");

        Ok(Self {
            b,
            c,
            t1,
            t2,
            challenge,
            j,
            k,
            l,
            c_token,
            disjunctive,
        })
    }

    /// Like [`AbcProof::verify`], checking the disjunctive proof with the given `system`.
    pub fn verify_with(
        &self,
        system: &D,
        params: &GroupParameters,
        cm: Commitment,
        cm_token: G1Projective,
    ) -> Result<(), Error> {
        // Subtracting exactly one G is what restricts the right branch to C committing to one.
        let statement = disjunctive_statement(params, cm, cm_token, self.c);
        if !system.verify(&statement, &self.disjunctive) {
            tracing::debug!(target: LOG_TARGET, "rejected: disjunctive proof does not verify");
            return Err(Error::SubProof);
        }

        let challenge = challenge(params, cm, cm_token, self.b, self.c, self.t1, self.t2);
        if challenge != self.challenge {
            tracing::debug!(target: LOG_TARGET, "rejected: challenge mismatch");
            return Err(Error::ChallengeMismatch);
        }
        let c_scalar = challenge.to_scalar();

        // c * CM + T1 = j * G + k * CMTok
        let lhs = cm.to_element() * c_scalar + self.t1;
        let rhs = params.g() * self.j + cm_token * self.k;
        if lhs != rhs {
            tracing::debug!(target: LOG_TARGET, "rejected: linear-1 does not hold");
            return Err(Error::EquationMismatch(Equation::Linear1));
        }

        // c * C + T2 = j * B + l * H
        let lhs = self.c.to_element() * c_scalar + self.t2;
        let rhs = self.b.to_element() * self.j + params.h() * self.l;
        if lhs != rhs {
            tracing::debug!(target: LOG_TARGET, "rejected: linear-2 does not hold");
            return Err(Error::EquationMismatch(Equation::Linear2));
        }

        Ok(())
    }

    /// Get the commitment to the inverse of the value.
    pub fn b(&self) -> Commitment {
        self.b
    }

    /// Get the commitment to `0` or `1`.
    pub fn c(&self) -> Commitment {
        self.c
    }

    /// Get the challenge.
    pub fn challenge(&self) -> Challenge {
        self.challenge
    }

    /// Get the token `sk * uc * H` binding the blinding factor of `C` to the secret key.
    pub fn c_token(&self) -> G1Projective {
        self.c_token
    }

    /// Get the embedded disjunctive proof.
    pub fn disjunctive_proof(&self) -> &D::Proof {
        &self.disjunctive
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::proofs::DisjunctiveProof;
    use ff::Field;

    struct Setup {
        params: GroupParameters,
        cm: Commitment,
        cm_token: G1Projective,
        value: Scalar,
        secret_key: Scalar,
    }

    fn setup(rng: &mut impl Rng, value: Scalar) -> Setup {
        let params = GroupParameters::new(&mut *rng);
        let secret_key = Scalar::from(7u64);
        let r = BlindingFactor::new(&mut *rng);
        Setup {
            params,
            cm: params.commit(value, r),
            cm_token: params.h() * (r.as_scalar() * secret_key),
            value,
            secret_key,
        }
    }

    fn prove(rng: &mut impl Rng, setup: &Setup, side: Side) -> Result<AbcProof, Error> {
        AbcProof::new(
            rng,
            &setup.params,
            setup.cm,
            setup.cm_token,
            setup.value,
            setup.secret_key,
            side,
        )
    }

    fn check(setup: &Setup, proof: &AbcProof) -> Result<(), Error> {
        proof.verify(&setup.params, setup.cm, setup.cm_token)
    }

    #[test]
    fn zero_value_proof_verifies() {
        let mut rng = crate::test::rng();
        let setup = setup(&mut rng, Scalar::zero());
        let proof = prove(&mut rng, &setup, Side::Left).unwrap();
        assert_eq!(check(&setup, &proof), Ok(()));
    }

    #[test]
    fn nonzero_value_proof_verifies() {
        let mut rng = crate::test::rng();
        let setup = setup(&mut rng, Scalar::from(5u64));
        let proof = prove(&mut rng, &setup, Side::Right).unwrap();
        assert_eq!(check(&setup, &proof), Ok(()));
    }

    #[test]
    fn commitments_open_as_expected() {
        let mut rng = crate::test::rng();

        let setup_zero = setup(&mut rng, Scalar::zero());
        let proof = prove(&mut rng, &setup_zero, Side::Left).unwrap();
        // B and C both commit to zero; their G components vanish.
        assert_eq!(
            proof.c().to_element() - proof.c_token() * invert_or_zero(&setup_zero.secret_key),
            G1Projective::identity()
        );

        let setup_five = setup(&mut rng, Scalar::from(5u64));
        let proof = prove(&mut rng, &setup_five, Side::Right).unwrap();
        let uc_h = proof.c_token() * invert_or_zero(&setup_five.secret_key);
        assert_eq!(proof.c().to_element(), setup_five.params.g() + uc_h);
    }

    #[test]
    fn mismatched_side_is_rejected() {
        let mut rng = crate::test::rng();

        let setup_zero = setup(&mut rng, Scalar::zero());
        assert!(matches!(
            prove(&mut rng, &setup_zero, Side::Right),
            Err(Error::InvalidInput(_))
        ));

        let setup_five = setup(&mut rng, Scalar::from(5u64));
        assert!(matches!(
            prove(&mut rng, &setup_five, Side::Left),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_secret_key_is_rejected() {
        let mut rng = crate::test::rng();
        let mut setup = setup(&mut rng, Scalar::from(5u64));
        setup.secret_key = Scalar::zero();
        assert!(matches!(
            prove(&mut rng, &setup, Side::Right),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn inconsistent_token_fails_to_generate() {
        let mut rng = crate::test::rng();
        let mut setup = setup(&mut rng, Scalar::zero());
        // The token no longer matches CM, so the left branch has no witness.
        setup.cm_token = G1Projective::random(&mut rng);
        assert_eq!(
            prove(&mut rng, &setup, Side::Left),
            Err(Error::SubProof)
        );
    }

    #[test]
    fn tampered_responses_are_rejected() {
        let mut rng = crate::test::rng();
        let setup = setup(&mut rng, Scalar::from(5u64));
        let proof = prove(&mut rng, &setup, Side::Right).unwrap();
        let one = Scalar::one();

        let bad = AbcProof { j: proof.j + one, ..proof.clone() };
        assert_eq!(
            check(&setup, &bad),
            Err(Error::EquationMismatch(Equation::Linear1))
        );

        let bad = AbcProof { k: proof.k + one, ..proof.clone() };
        assert_eq!(
            check(&setup, &bad),
            Err(Error::EquationMismatch(Equation::Linear1))
        );

        let bad = AbcProof { l: proof.l + one, ..proof.clone() };
        assert_eq!(
            check(&setup, &bad),
            Err(Error::EquationMismatch(Equation::Linear2))
        );
    }

    #[test]
    fn tampered_commitments_are_rejected() {
        let mut rng = crate::test::rng();
        let setup = setup(&mut rng, Scalar::from(5u64));
        let proof = prove(&mut rng, &setup, Side::Right).unwrap();
        let offset = G1Projective::random(&mut rng);

        let bad = AbcProof {
            b: Commitment(proof.b.to_element() + offset),
            ..proof.clone()
        };
        assert_eq!(check(&setup, &bad), Err(Error::ChallengeMismatch));

        let bad = AbcProof {
            t1: proof.t1 + offset,
            ..proof.clone()
        };
        assert_eq!(check(&setup, &bad), Err(Error::ChallengeMismatch));

        let bad = AbcProof {
            t2: proof.t2 + offset,
            ..proof.clone()
        };
        assert_eq!(check(&setup, &bad), Err(Error::ChallengeMismatch));

        // C is bound by the disjunctive proof before the challenge is checked.
        let bad = AbcProof {
            c: Commitment(proof.c.to_element() + offset),
            ..proof.clone()
        };
        assert!(bad.verify(&setup.params, setup.cm, setup.cm_token).is_err());
    }

    #[test]
    fn tampered_challenge_is_rejected() {
        let mut rng = crate::test::rng();
        let setup = setup(&mut rng, Scalar::zero());
        let proof = prove(&mut rng, &setup, Side::Left).unwrap();

        let bad = AbcProof {
            challenge: ChallengeBuilder::new().with(&Scalar::one()).finish(),
            ..proof
        };
        assert_eq!(check(&setup, &bad), Err(Error::ChallengeMismatch));
    }

    #[test]
    fn tampered_disjunctive_proof_is_rejected() {
        let mut rng = crate::test::rng();
        let setup = setup(&mut rng, Scalar::zero());
        let proof = prove(&mut rng, &setup, Side::Left).unwrap();

        // Swap in a valid proof for an unrelated statement.
        let witness = Scalar::random(&mut rng);
        let base = G1Projective::random(&mut rng);
        let unrelated = DisjunctiveStatement {
            base_a: base,
            result_a: base * witness,
            base_b: base,
            result_b: G1Projective::random(&mut rng),
        };
        let other: DisjunctiveProof = SchnorrDisjunction
            .prove(&mut rng, &unrelated, witness, Side::Left)
            .unwrap();
        let bad = AbcProof {
            disjunctive: other,
            ..proof
        };
        assert_eq!(check(&setup, &bad), Err(Error::SubProof));
    }

    #[test]
    fn c_committing_to_two_is_rejected() {
        let mut rng = crate::test::rng();
        let setup = setup(&mut rng, Scalar::from(5u64));
        let proof = prove(&mut rng, &setup, Side::Right).unwrap();

        // Shifting C by G breaks the OR statement, whatever else is recomputed.
        let bad = AbcProof {
            c: Commitment(proof.c.to_element() + setup.params.g()),
            ..proof
        };
        assert_eq!(check(&setup, &bad), Err(Error::SubProof));
    }
}
