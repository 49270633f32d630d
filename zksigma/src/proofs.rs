//! Zero-knowledge proofs over committed values, built from Schnorr-style components.

mod abc;
mod challenge;
mod disjunctive;

pub use self::{abc::*, challenge::*, disjunctive::*};
