use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use lorder_ball::CayleyBall;
use lorder_sl2::Sl2Oracle;
use lorder_torsion::{ExponentSumMap, HomologyMap, TorsionOutcome, TorsionSearch};
use serde_json::json;

use super::{load_representation, load_run_file};
use crate::print_json;

#[derive(Args, Debug)]
pub struct TorsionArgs {
    /// Representation file (JSON or YAML); the Weeks manifold group when omitted.
    #[arg(long)]
    pub rep: Option<PathBuf>,
    /// Ball radius, overriding the configuration file.
    #[arg(long)]
    pub radius: Option<usize>,
    /// Largest number of conjugates in a product.
    #[arg(long)]
    pub factors: Option<usize>,
    /// Search every candidate instead of only homologically trivial ones.
    #[arg(long)]
    pub no_homology: bool,
    /// YAML file with `ball` and `torsion` sections.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &TorsionArgs) -> Result<(), Box<dyn Error>> {
    let mut config = load_run_file(args.config.as_ref())?;
    if let Some(radius) = args.radius {
        config.ball.radius = radius;
    }
    if let Some(factors) = args.factors {
        config.torsion.max_factors = factors;
    }
    if args.no_homology {
        config.torsion.use_homology = false;
    }
    config.ball.validate()?;
    config.torsion.validate()?;

    let representation = load_representation(args.rep.as_deref())?.representation;
    let homology = ExponentSumMap::from_presentation(representation.presentation());
    let ball = CayleyBall::from_config(Sl2Oracle::new(representation), &config.ball)?;
    let report = TorsionSearch::run(&ball, &config.torsion, Some(&homology as &dyn HomologyMap))?;

    let mut summary = json!({
        "ball": ball.summary(),
        "homology_rank": homology.rank(),
        "outcome": report.outcome,
        "stats": report.stats,
    });
    if let TorsionOutcome::Found(witness) = &report.outcome {
        summary["product"] = json!(witness.product_word());
    }
    print_json(&summary)
}
