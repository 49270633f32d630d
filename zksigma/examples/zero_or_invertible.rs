use bls12_381::{G1Projective, Scalar};
use zksigma::{
    parameters::GroupParameters,
    pedersen::Commitment,
    proofs::{AbcProof, Side},
    BlindingFactor, Error, Rng,
};

/// A confidential amount as recorded on a ledger: a commitment to the amount and a token tying the
/// commitment's blinding factor to the owner's key.
pub struct AuditedAmount {
    commitment: Commitment,
    token: G1Projective,
    proof: AbcProof,
}

impl AuditedAmount {
    /// Record `amount` for the owner of `secret_key`, proving that it is zero or invertible.
    pub fn new(
        rng: &mut impl Rng,
        params: &GroupParameters,
        amount: u64,
        secret_key: Scalar,
    ) -> Result<Self, Error> {
        let value = Scalar::from(amount);
        let bf = BlindingFactor::new(&mut *rng);
        let commitment = params.commit(value, bf);
        let token = params.h() * (bf.as_scalar() * secret_key);

        // The side is chosen by the prover, who knows the amount.
        let side = if amount == 0 { Side::Left } else { Side::Right };
        let proof = AbcProof::new(rng, params, commitment, token, value, secret_key, side)?;

        Ok(Self {
            commitment,
            token,
            proof,
        })
    }

    /// Audit the recorded amount without learning it.
    pub fn audit(&self, params: &GroupParameters) -> Result<(), Error> {
        self.proof.verify(params, self.commitment, self.token)
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut rng = rand::thread_rng();
    let params = GroupParameters::new(&mut rng);
    let secret_key = Scalar::from(7u64);

    for amount in [0, 5, 1_000_000].iter() {
        let recorded = AuditedAmount::new(&mut rng, &params, *amount, secret_key)?;
        recorded.audit(&params)?;
        println!("audit of amount {} passed", amount);
    }

    // A proof cannot be moved onto another commitment.
    let first = AuditedAmount::new(&mut rng, &params, 5, secret_key)?;
    let second = AuditedAmount::new(&mut rng, &params, 5, secret_key)?;
    let transplanted = AuditedAmount {
        proof: first.proof,
        ..second
    };
    match transplanted.audit(&params) {
        Ok(()) => println!("transplanted proof unexpectedly passed audit"),
        Err(err) => println!("transplanted proof rejected: {}", err),
    }

    Ok(())
}
