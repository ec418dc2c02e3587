use std::collections::BTreeMap;

use lorder_core::{ErrorInfo, LoError, Presentation};
use nalgebra::{Complex, Matrix2, Normed};
use serde::{Deserialize, Serialize};

/// Complex 2x2 matrix used for group elements.
pub type Sl2Matrix = Matrix2<Complex<f64>>;

/// Largest tolerated `|det - 1|` for generator matrices.
pub const DETERMINANT_TOLERANCE: f64 = 1e-9;

/// Matrices for the generators of a presentation, each with determinant one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RepresentationFile", into = "RepresentationFile")]
pub struct Sl2Representation {
    name: String,
    presentation: Presentation,
    matrices: Vec<Sl2Matrix>,
    group_args: Vec<serde_json::Value>,
}

/// On-disk layout: four `[re, im]` entries per generator, row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RepresentationFile {
    #[serde(default)]
    name: String,
    generators: String,
    #[serde(default)]
    relators: Vec<String>,
    matrices: BTreeMap<char, [[f64; 2]; 4]>,
    #[serde(default)]
    group_args: Vec<serde_json::Value>,
}

pub(crate) fn determinant(m: &Sl2Matrix) -> Complex<f64> {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}

/// Inverse of a determinant-one matrix (its adjugate).
pub fn sl2_inverse(m: &Sl2Matrix) -> Sl2Matrix {
    Sl2Matrix::new(m[(1, 1)], -m[(0, 1)], -m[(1, 0)], m[(0, 0)])
}

impl Sl2Representation {
    /// Builds a representation, checking one matrix per generator and unit determinants.
    pub fn new(
        name: impl Into<String>,
        presentation: Presentation,
        matrices: Vec<Sl2Matrix>,
    ) -> Result<Self, LoError> {
        if matrices.len() != presentation.rank() {
            return Err(LoError::Oracle(
                ErrorInfo::new("sl2-generators", "need exactly one matrix per generator")
                    .with_context("generators", presentation.rank().to_string())
                    .with_context("matrices", matrices.len().to_string()),
            ));
        }
        for (generator, matrix) in presentation.generators().iter().zip(&matrices) {
            let det = determinant(matrix);
            if (det - Complex::new(1.0, 0.0)).norm() > DETERMINANT_TOLERANCE {
                return Err(LoError::Oracle(
                    ErrorInfo::new("sl2-determinant", "generator matrix is not in SL(2,C)")
                        .with_context("generator", generator.to_string())
                        .with_context("determinant", format!("{det}")),
                ));
            }
        }
        Ok(Self {
            name: name.into(),
            presentation,
            matrices,
            group_args: Vec::new(),
        })
    }

    /// Attaches the group construction arguments recorded in certificates.
    pub fn with_group_args(mut self, group_args: Vec<serde_json::Value>) -> Self {
        self.group_args = group_args;
        self
    }

    /// Parses the JSON form.
    pub fn from_json(text: &str) -> Result<Self, LoError> {
        serde_json::from_str(text).map_err(|err| {
            LoError::Serde(
                ErrorInfo::new("sl2-json", err.to_string())
                    .with_hint("expected {generators, relators, matrices}"),
            )
        })
    }

    /// Parses the YAML form.
    pub fn from_yaml(text: &str) -> Result<Self, LoError> {
        serde_yaml::from_str(text)
            .map_err(|err| LoError::Serde(ErrorInfo::new("sl2-yaml", err.to_string())))
    }

    /// Serializes to pretty JSON.
    pub fn to_json(&self) -> Result<String, LoError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| LoError::Serde(ErrorInfo::new("sl2-json", err.to_string())))
    }

    /// Group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Underlying presentation.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Generator matrices in presentation order.
    pub fn matrices(&self) -> &[Sl2Matrix] {
        &self.matrices
    }

    /// Construction arguments of the group.
    pub fn group_args(&self) -> &[serde_json::Value] {
        &self.group_args
    }

    /// Matrix of a generator letter, if it is one.
    pub fn matrix(&self, generator: char) -> Option<&Sl2Matrix> {
        self.presentation
            .generators()
            .iter()
            .position(|&g| g == generator)
            .map(|index| &self.matrices[index])
    }
}

impl TryFrom<RepresentationFile> for Sl2Representation {
    type Error = LoError;

    fn try_from(file: RepresentationFile) -> Result<Self, Self::Error> {
        let presentation = Presentation::parse(&file.generators, &file.relators)?;
        let mut matrices = Vec::with_capacity(presentation.rank());
        for generator in presentation.generators() {
            let entries = file.matrices.get(generator).ok_or_else(|| {
                LoError::Oracle(
                    ErrorInfo::new("sl2-generators", "missing matrix for generator")
                        .with_context("generator", generator.to_string()),
                )
            })?;
            let [m00, m01, m10, m11] = entries.map(|[re, im]| Complex::new(re, im));
            matrices.push(Sl2Matrix::new(m00, m01, m10, m11));
        }
        Ok(Self::new(file.name, presentation, matrices)?.with_group_args(file.group_args))
    }
}

impl From<Sl2Representation> for RepresentationFile {
    fn from(rep: Sl2Representation) -> Self {
        let entries = |m: &Sl2Matrix| {
            [m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]].map(|z| [z.re, z.im])
        };
        let matrices = rep
            .presentation
            .generators()
            .iter()
            .zip(&rep.matrices)
            .map(|(&generator, matrix)| (generator, entries(matrix)))
            .collect();
        let relators = rep
            .presentation
            .relators()
            .iter()
            .map(|word| word.as_str().to_string())
            .collect();
        Self {
            name: rep.name,
            generators: rep.presentation.generators_dotted(),
            relators,
            matrices,
            group_args: rep.group_args,
        }
    }
}
