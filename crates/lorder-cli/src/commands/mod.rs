pub mod order;
pub mod stats;
pub mod torsion;
pub mod verify;

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use lorder_ball::BallConfig;
use lorder_cert::VerifierConfig;
use lorder_search::SearchConfig;
use lorder_sl2::{samples, Sl2Representation};
use lorder_torsion::TorsionConfig;
use serde::Deserialize;
use sha2::{Digest, Sha256};

/// Settings shared by every subcommand, read from an optional YAML file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RunFile {
    pub ball: BallConfig,
    pub search: SearchConfig,
    pub torsion: TorsionConfig,
    pub verifier: VerifierConfig,
}

pub fn load_run_file(path: Option<&PathBuf>) -> Result<RunFile, Box<dyn Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&text)?)
        }
        None => Ok(RunFile::default()),
    }
}

pub struct LoadedRepresentation {
    pub representation: Sl2Representation,
    pub input_hash: String,
}

/// Reads a JSON or YAML representation, or the built-in Weeks manifold
/// representation when no path is given.
pub fn load_representation(path: Option<&Path>) -> Result<LoadedRepresentation, Box<dyn Error>> {
    let Some(path) = path else {
        let representation = samples::weeks()?;
        let input_hash = hex::encode(Sha256::digest(representation.to_json()?.as_bytes()));
        return Ok(LoadedRepresentation {
            representation,
            input_hash,
        });
    };
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes.clone())?;
    let yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    );
    let representation = if yaml {
        Sl2Representation::from_yaml(&text)?
    } else {
        Sl2Representation::from_json(&text)?
    };
    Ok(LoadedRepresentation {
        representation,
        input_hash: hex::encode(Sha256::digest(&bytes)),
    })
}
