#![allow(dead_code)]

use lorder_cert::Certificate;
use lorder_core::{Claim, LoError};
use lorder_sl2::samples::{weeks, weeks_presentation};
use lorder_sl2::Sl2Oracle;

pub const WEEKS_CLAIMS: [(&str, &str); 3] = [
    ("a.b.aB", "a.b.a.b.aB.a.aB"),
    ("a.b.bA", "b.a.b.a.bA.b.bA"),
    ("a.B", "B.a.B.B.a.a.B.a.a.B"),
];

pub fn claims(pairs: &[(&str, &str)]) -> Vec<Claim> {
    pairs
        .iter()
        .map(|(path, trivial)| Claim::parse(path, trivial).expect("valid claim"))
        .collect()
}

pub fn weeks_claims() -> Vec<Claim> {
    claims(&WEEKS_CLAIMS)
}

pub fn weeks_certificate(proof: Vec<Claim>) -> Result<Certificate, LoError> {
    Ok(Certificate::new(
        "weeks",
        &weeks_presentation()?,
        proof,
        vec![1.into(), 1.into(), 1.into()],
    ))
}

pub fn weeks_oracle() -> Result<Sl2Oracle, LoError> {
    Ok(Sl2Oracle::new(weeks()?))
}
