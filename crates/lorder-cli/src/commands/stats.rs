use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lorder_cert::{check_structure, Certificate, ProofStats};
use serde_json::json;

use crate::print_json;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Certificate to measure.
    #[arg(long)]
    pub cert: PathBuf,
}

pub fn run(args: &StatsArgs) -> Result<(), Box<dyn Error>> {
    let certificate = Certificate::load(&args.cert)?;
    let stats = ProofStats::compute(&certificate.proof);
    let defect = check_structure(&certificate.proof).err();
    print_json(&json!({
        "name": certificate.name,
        "claims": certificate.proof.len(),
        "stats": stats,
        "defect": defect,
        "hash": certificate.content_hash()?,
    }))
}
