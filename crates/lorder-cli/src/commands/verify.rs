use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lorder_cert::{Certificate, Verifier};
use lorder_sl2::Sl2Oracle;

use super::{load_representation, load_run_file};
use crate::{print_json, write_json};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Certificate to check.
    #[arg(long)]
    pub cert: PathBuf,
    /// Representation file (JSON or YAML); the Weeks manifold group when omitted.
    #[arg(long)]
    pub rep: Option<PathBuf>,
    /// First precision tried, in bits.
    #[arg(long)]
    pub initial_bits: Option<u32>,
    /// Precision ceiling, in bits.
    #[arg(long)]
    pub max_bits: Option<u32>,
    /// YAML file with a `verifier` section.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Also write the verification report to this file.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_run_file(args.config.as_ref())?.verifier;
    if let Some(bits) = args.initial_bits {
        config.initial_bits = bits;
    }
    if let Some(bits) = args.max_bits {
        config.max_bits = bits;
    }
    let verifier = Verifier::from_config(&config)?;

    let certificate = Certificate::load(&args.cert)?;
    let representation = load_representation(args.rep.as_deref())?.representation;
    let report = verifier.verify(&Sl2Oracle::new(representation), &certificate)?;

    if let Some(path) = &args.report {
        write_json(path, &report)?;
    }
    print_json(&report)?;
    if report.is_verified() {
        Ok(())
    } else {
        Err(format!(
            "certificate '{}' was not verified: {:?}",
            certificate.name, report.verdict
        )
        .into())
    }
}
