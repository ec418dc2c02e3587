mod common;

use common::{claims, weeks_claims};
use lorder_cert::tree::ROOT;
use lorder_cert::{check_structure, ProofStats, StructuralDefect};

#[test]
fn weeks_claims_form_a_binary_tree() {
    let tree = check_structure(&weeks_claims()).expect("valid tree");
    assert_eq!(tree.vertex_count(), 6);
    assert_eq!(tree.edge_count(), 5);
    assert_eq!(tree.leaves(), vec!["a.b.aB", "a.b.bA", "a.B"]);
    let root: Vec<&str> = tree.children(ROOT).into_iter().map(|(name, _)| name).collect();
    assert_eq!(root, vec!["a"]);
    let labels: Vec<String> = tree.edge_labels().iter().map(|w| w.to_string()).collect();
    assert_eq!(labels, vec!["B", "a", "aB", "b", "bA"]);
}

#[test]
fn claim_order_does_not_matter() {
    let mut reversed = weeks_claims();
    reversed.reverse();
    assert!(check_structure(&reversed).is_ok());
}

#[test]
fn proof_stats_measure_the_tree() {
    let stats = ProofStats::compute(&weeks_claims());
    assert_eq!(
        stats,
        ProofStats {
            edges: 5,
            leaves: 3,
            max_trivial_len: 10,
        }
    );
}

#[test]
fn empty_certificate_is_rejected() {
    assert_eq!(check_structure(&[]).unwrap_err(), StructuralDefect::EmptyClaims);
}

#[test]
fn missing_sibling_leaves_a_unary_vertex() {
    let mut proof = weeks_claims();
    proof.pop();
    assert_eq!(
        check_structure(&proof).unwrap_err(),
        StructuralDefect::InteriorDegree {
            vertex: "a".to_string(),
            children: 1,
        }
    );
}

#[test]
fn sibling_labels_must_be_inverse() {
    let proof = claims(&[
        ("a.b.aB", "a.b.a.b.aB.a.aB"),
        ("a.b.Ab", "b.a.b.a.bA.b.bA"),
        ("a.B", "B.a.B.B.a.a.B.a.a.B"),
    ]);
    assert_eq!(
        check_structure(&proof).unwrap_err(),
        StructuralDefect::InverseLabels {
            vertex: "a.b".to_string(),
            left: "aB".to_string(),
            right: "Ab".to_string(),
        }
    );
}

#[test]
fn duplicate_claims_are_rejected() {
    let mut proof = weeks_claims();
    proof.push(proof[0].clone());
    assert_eq!(
        check_structure(&proof).unwrap_err(),
        StructuralDefect::DuplicateClaim {
            path: "a.b.aB".to_string(),
        }
    );
}

#[test]
fn root_needs_exactly_one_child() {
    let proof = claims(&[("a", "a"), ("A", "A")]);
    assert_eq!(
        check_structure(&proof).unwrap_err(),
        StructuralDefect::RootDegree { children: 2 }
    );
}

#[test]
fn claims_must_end_at_leaves() {
    let proof = claims(&[("a", "a"), ("a.b", "b"), ("a.B", "B")]);
    assert_eq!(
        check_structure(&proof).unwrap_err(),
        StructuralDefect::ClaimNotLeaf {
            path: "a".to_string(),
        }
    );
}

#[test]
fn single_leaf_proof_is_accepted() {
    let tree = check_structure(&claims(&[("a", "a.a.a.a.a")])).expect("one leaf");
    assert_eq!(tree.leaves(), vec!["a"]);
    assert_eq!(tree.edge_count(), 1);
}

#[test]
fn defects_serialize_with_a_tag() {
    let defect = StructuralDefect::InteriorDegree {
        vertex: "a".to_string(),
        children: 1,
    };
    let json = serde_json::to_value(&defect).expect("json");
    assert_eq!(json["defect"], "interior-degree");
    assert_eq!(json["children"], 1);
}
