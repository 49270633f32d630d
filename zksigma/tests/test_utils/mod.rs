#![allow(dead_code)]

use rand::SeedableRng;

// Seeded rng for replicable tests. Also installs the log subscriber, since every test starts here.
pub fn seeded_rng() -> (impl rand::CryptoRng + rand::RngCore) {
    const TEST_RNG_SEED: [u8; 32] = *b"NEVER USE THIS FOR ANYTHING REAL";
    init_tracing();
    rand::rngs::StdRng::from_seed(TEST_RNG_SEED)
}

// Rng for one of several concurrent tasks; each `stream` gives an independent sequence.
pub fn seeded_rng_for(stream: u64) -> (impl rand::CryptoRng + rand::RngCore) {
    init_tracing();
    rand::rngs::StdRng::seed_from_u64(stream)
}

// Surface library logs in test output; set RUST_LOG=zksigma=debug to see them.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A generator whose entropy source has run dry.
#[derive(Debug)]
pub struct ExhaustedRng;

impl rand::RngCore for ExhaustedRng {
    fn next_u32(&mut self) -> u32 {
        panic!("entropy exhausted")
    }

    fn next_u64(&mut self) -> u64 {
        panic!("entropy exhausted")
    }

    fn fill_bytes(&mut self, _dest: &mut [u8]) {
        panic!("entropy exhausted")
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
        Err(rand::Error::new("entropy exhausted"))
    }
}

impl rand::CryptoRng for ExhaustedRng {}
