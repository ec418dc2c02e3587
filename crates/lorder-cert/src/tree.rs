//! Proof trees rebuilt from claim paths and their structural checks.

use std::collections::{BTreeSet, HashMap};

use lorder_core::{join_dotted, Claim, Word};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the root vertex.
pub const ROOT: &str = "1";

/// Why a set of claims does not form a valid proof tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "defect", rename_all = "kebab-case")]
pub enum StructuralDefect {
    /// The certificate has no claims.
    #[error("certificate has no claims")]
    EmptyClaims,
    /// A claim with an empty path.
    #[error("claim {index} has an empty path")]
    EmptyPath {
        /// Position of the claim.
        index: usize,
    },
    /// A path token is the empty word.
    #[error("claim {index} has an empty path token")]
    EmptyLabel {
        /// Position of the claim.
        index: usize,
    },
    /// Two claims end at the same vertex.
    #[error("duplicate claim for path {path}")]
    DuplicateClaim {
        /// Dot-joined path.
        path: String,
    },
    /// A vertex is entered by more than one edge.
    #[error("vertex {vertex} has {parents} parents")]
    NotBranching {
        /// Vertex name.
        vertex: String,
        /// Number of incoming edges.
        parents: usize,
    },
    /// The root does not have exactly one child.
    #[error("root has {children} children, expected exactly one")]
    RootDegree {
        /// Number of children found.
        children: usize,
    },
    /// A non-root vertex has neither zero nor two children.
    #[error("vertex {vertex} has {children} children, expected 0 or 2")]
    InteriorDegree {
        /// Vertex name.
        vertex: String,
        /// Number of children found.
        children: usize,
    },
    /// The two outgoing labels of a vertex are not mutually inverse.
    #[error("vertex {vertex} branches on {left} and {right}, which are not inverse")]
    InverseLabels {
        /// Vertex name.
        vertex: String,
        /// First label.
        left: String,
        /// Second label.
        right: String,
    },
    /// A claim ends at a vertex that has children.
    #[error("claim {path} ends at an interior vertex")]
    ClaimNotLeaf {
        /// Dot-joined path.
        path: String,
    },
    /// Leaf count and claim count differ.
    #[error("tree has {leaves} leaves but {claims} claims")]
    LeafCount {
        /// Leaves in the tree.
        leaves: usize,
        /// Claims in the certificate.
        claims: usize,
    },
    /// The labels from the root to a vertex do not spell its name.
    #[error("labels from the root spell {spelled} at vertex {vertex}")]
    PrefixMismatch {
        /// Vertex name.
        vertex: String,
        /// Concatenated labels along the root path.
        spelled: String,
    },
}

#[derive(Debug, Clone)]
struct Vertex {
    name: String,
    parents: Vec<(usize, Word)>,
    children: Vec<(usize, Word)>,
}

/// Rooted tree with one vertex per claim-path prefix.
///
/// Vertices are named by their dot-joined path; the root is [`ROOT`]. Every
/// prefix of every claim path adds the edge from its parent prefix.
#[derive(Debug, Clone)]
pub struct ProofTree {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
}

impl ProofTree {
    /// Rebuilds the tree from claim paths.
    pub fn build(claims: &[Claim]) -> Self {
        let mut tree = Self {
            vertices: Vec::new(),
            index: HashMap::new(),
        };
        tree.vertex(ROOT.to_string());
        for claim in claims {
            let mut parent = 0;
            for depth in 1..=claim.path.len() {
                let child = tree.vertex(join_dotted(&claim.path[..depth]));
                let label = claim.path[depth - 1].clone();
                if !tree.vertices[parent].children.iter().any(|(id, _)| *id == child) {
                    tree.vertices[parent].children.push((child, label.clone()));
                    tree.vertices[child].parents.push((parent, label));
                }
                parent = child;
            }
        }
        tree
    }

    fn vertex(&mut self, name: String) -> usize {
        if let Some(&id) = self.index.get(&name) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(name.clone(), id);
        self.vertices.push(Vertex {
            name,
            parents: Vec::new(),
            children: Vec::new(),
        });
        id
    }

    /// Number of vertices, root included.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|vertex| vertex.children.len()).sum()
    }

    /// Names of the vertices without children, in insertion order.
    pub fn leaves(&self) -> Vec<&str> {
        self.vertices
            .iter()
            .filter(|vertex| vertex.children.is_empty() && vertex.name != ROOT)
            .map(|vertex| vertex.name.as_str())
            .collect()
    }

    /// Distinct edge labels, sorted.
    pub fn edge_labels(&self) -> BTreeSet<Word> {
        self.vertices
            .iter()
            .flat_map(|vertex| vertex.children.iter().map(|(_, label)| label.clone()))
            .collect()
    }

    /// Children of the named vertex with their edge labels.
    pub fn children(&self, name: &str) -> Vec<(&str, &Word)> {
        self.index
            .get(name)
            .map(|&id| {
                self.vertices[id]
                    .children
                    .iter()
                    .map(|(child, label)| (self.vertices[*child].name.as_str(), label))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn spelled(&self, id: usize) -> Option<String> {
        let mut labels = Vec::new();
        let mut current = id;
        while current != 0 {
            let (parent, label) = self.vertices[current].parents.first()?;
            labels.push(label.clone());
            current = *parent;
        }
        labels.reverse();
        Some(join_dotted(&labels))
    }
}

/// Checks that `claims` describe a valid proof tree.
///
/// The root must have exactly one child, every other vertex zero or two
/// children with mutually inverse labels, every leaf must be the end of
/// exactly one claim and every vertex name must be spelled by the labels on
/// its root path.
pub fn check_structure(claims: &[Claim]) -> Result<ProofTree, StructuralDefect> {
    if claims.is_empty() {
        return Err(StructuralDefect::EmptyClaims);
    }
    let mut endpoints = BTreeSet::new();
    for (index, claim) in claims.iter().enumerate() {
        if claim.path.is_empty() {
            return Err(StructuralDefect::EmptyPath { index });
        }
        if claim.path.iter().any(Word::is_empty) {
            return Err(StructuralDefect::EmptyLabel { index });
        }
        let path = claim.path_dotted();
        if !endpoints.insert(path.clone()) {
            return Err(StructuralDefect::DuplicateClaim { path });
        }
    }

    let tree = ProofTree::build(claims);
    for vertex in &tree.vertices {
        if vertex.parents.len() > 1 {
            return Err(StructuralDefect::NotBranching {
                vertex: vertex.name.clone(),
                parents: vertex.parents.len(),
            });
        }
    }

    let root_children = tree.vertices[0].children.len();
    if root_children != 1 {
        return Err(StructuralDefect::RootDegree {
            children: root_children,
        });
    }

    for vertex in tree.vertices.iter().skip(1) {
        match vertex.children.as_slice() {
            [] => {}
            [(_, left), (_, right)] => {
                if left.invert() != *right {
                    return Err(StructuralDefect::InverseLabels {
                        vertex: vertex.name.clone(),
                        left: left.to_string(),
                        right: right.to_string(),
                    });
                }
            }
            other => {
                return Err(StructuralDefect::InteriorDegree {
                    vertex: vertex.name.clone(),
                    children: other.len(),
                });
            }
        }
    }

    for path in &endpoints {
        let interior = tree
            .index
            .get(path)
            .is_some_and(|&id| !tree.vertices[id].children.is_empty());
        if interior {
            return Err(StructuralDefect::ClaimNotLeaf { path: path.clone() });
        }
    }
    let leaves = tree.leaves().len();
    if leaves != claims.len() {
        return Err(StructuralDefect::LeafCount {
            leaves,
            claims: claims.len(),
        });
    }

    for (id, vertex) in tree.vertices.iter().enumerate().skip(1) {
        let spelled = tree.spelled(id).unwrap_or_default();
        if spelled != vertex.name {
            return Err(StructuralDefect::PrefixMismatch {
                vertex: vertex.name.clone(),
                spelled,
            });
        }
    }

    Ok(tree)
}

/// Size figures of a proof.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStats {
    /// Edges of the proof tree.
    pub edges: usize,
    /// Leaves of the proof tree.
    pub leaves: usize,
    /// Largest letter count of a claim's trivial tokens.
    pub max_trivial_len: usize,
}

impl ProofStats {
    /// Measures the tree spanned by `claims`.
    pub fn compute(claims: &[Claim]) -> Self {
        let tree = ProofTree::build(claims);
        Self {
            edges: tree.edge_count(),
            leaves: tree.leaves().len(),
            max_trivial_len: claims.iter().map(Claim::trivial_len).max().unwrap_or(0),
        }
    }
}
