use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use lorder_ball::CayleyBall;
use lorder_cert::Certificate;
use lorder_core::{GroupOracle, RunProvenance};
use lorder_search::{OrderOutcome, OrderSearch};
use lorder_sl2::Sl2Oracle;
use serde_json::json;
use tracing::info;

use super::{load_representation, load_run_file};
use crate::print_json;

#[derive(Args, Debug)]
pub struct OrderArgs {
    /// Representation file (JSON or YAML); the Weeks manifold group when omitted.
    #[arg(long)]
    pub rep: Option<PathBuf>,
    /// Ball radius, overriding the configuration file.
    #[arg(long)]
    pub radius: Option<usize>,
    /// YAML file with `ball` and `search` sections.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Group name recorded in the certificate.
    #[arg(long)]
    pub name: Option<String>,
    /// Where to write the certificate when the group is not orderable.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &OrderArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_run_file(args.config.as_ref())?;
    if let Some(radius) = args.radius {
        config.ball.radius = radius;
    }
    config.ball.validate()?;
    config.search.validate()?;

    let loaded = load_representation(args.rep.as_deref())?;
    let representation = loaded.representation;
    let oracle = Sl2Oracle::new(representation.clone());
    let precision_bits = oracle.precision();
    let ball = CayleyBall::from_config(oracle, &config.ball)?;
    let seed = ball.find_word(&config.search.seed_word)?.ok_or_else(|| {
        format!(
            "seed word '{}' is not in the ball of radius {}",
            config.search.seed_word, config.ball.radius
        )
    })?;
    let report = OrderSearch::run(&ball, seed, &config.search)?;

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| representation.name().to_string());
    let mut summary = json!({
        "name": name,
        "ball": ball.summary(),
        "stats": report.stats,
    });
    match &report.outcome {
        OrderOutcome::ConeFound { cone, termination } => {
            summary["result"] = json!("cone-found");
            summary["termination"] = json!(termination);
            summary["cone_size"] = json!(cone.len());
        }
        OrderOutcome::NotOrderable { claims } => {
            summary["result"] = json!("not-orderable");
            summary["claims"] = json!(claims.len());
            if let Some(out) = &args.out {
                let provenance = RunProvenance::new(
                    loaded.input_hash.clone(),
                    config.ball.radius,
                    precision_bits,
                    Utc::now().to_rfc3339(),
                )
                .with_tool("lorder", env!("CARGO_PKG_VERSION"));
                let certificate = Certificate::new(
                    name.clone(),
                    representation.presentation(),
                    claims.clone(),
                    representation.group_args().to_vec(),
                )
                .with_provenance(provenance);
                certificate.write(out)?;
                info!(
                    path = %out.display(),
                    hash = %certificate.content_hash()?,
                    "certificate written"
                );
                summary["certificate"] = json!(out.display().to_string());
            }
        }
    }
    print_json(&summary)
}
