use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;
use treeviz_core::JsonText;
use treeviz_dot::{RenderOptions, export_graphviz};

const IRIS_TREE: &str = r#"{
  "nodeType": "internal", "prediction": 0.0, "impurity": 0.6667,
  "featureIndex": 2, "splitType": "continuous", "threshold": 2.45, "gain": 0.3333,
  "leftChild": {
    "nodeType": "internal", "prediction": 0.0, "impurity": 0.05,
    "featureIndex": 4, "splitType": "categorical",
    "leftCategories": [0.0, 1.0, 2.0, 3.0, 4.0, 6.0], "gain": 0.01,
    "leftChild": {"nodeType": "leaf", "prediction": 0.0, "impurity": 0.0},
    "rightChild": {"nodeType": "leaf", "prediction": 1.0, "impurity": 0.0}
  },
  "rightChild": {
    "nodeType": "internal", "prediction": 1.0, "impurity": 0.5,
    "featureIndex": 3, "splitType": "continuous", "threshold": 1.75, "gain": 0.39,
    "leftChild": {"nodeType": "leaf", "prediction": 1.0, "impurity": 0.168},
    "rightChild": {"nodeType": "leaf", "prediction": 2.0, "impurity": 0.0425}
  }
}"#;

fn edges(dot: &str) -> Vec<(u32, u32, String)> {
    let re = Regex::new(r#"(\d+) -> (\d+) \[[^\]]*headlabel="(True|False)"\]"#).unwrap();
    re.captures_iter(dot)
        .map(|c| (c[1].parse().unwrap(), c[2].parse().unwrap(), c[3].to_string()))
        .collect()
}

fn node_ids(dot: &str) -> Vec<u32> {
    let re = Regex::new(r"(?m)^\s*(\d+) \[").unwrap();
    re.captures_iter(dot).map(|c| c[1].parse().unwrap()).collect()
}

#[test]
fn seven_node_tree_has_six_edges_and_seven_nodes() {
    let dot = export_graphviz(&JsonText::new(IRIS_TREE), &RenderOptions::default()).unwrap();

    let edges = edges(&dot);
    assert_eq!(edges.len(), 6, "{dot}");

    let mut branches: BTreeMap<u32, BTreeSet<String>> = BTreeMap::new();
    for (from, _, branch) in &edges {
        branches.entry(*from).or_default().insert(branch.clone());
    }
    assert_eq!(branches.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    for labels in branches.values() {
        assert_eq!(labels.len(), 2, "each split has one True and one False edge");
    }

    let ids = node_ids(&dot);
    assert_eq!(ids.len(), 7);
    assert_eq!(ids.iter().copied().collect::<BTreeSet<_>>(), (0..7).collect());
}

#[test]
fn every_target_is_declared() {
    let dot = export_graphviz(&JsonText::new(IRIS_TREE), &RenderOptions::default()).unwrap();
    let declared: BTreeSet<u32> = node_ids(&dot).into_iter().collect();
    for (from, to, _) in edges(&dot) {
        assert!(declared.contains(&from) && declared.contains(&to));
    }
}

#[test]
fn names_flow_into_labels() {
    let options = RenderOptions::new()
        .with_feature_names(["sepal_length", "sepal_width", "petal_length", "petal_width", "soil"])
        .with_class_names(["setosa", "versicolor", "virginica"])
        .with_category_names("soil", ["clay", "loam", "sand", "silt", "peat", "chalk", "rock"]);
    let dot = export_graphviz(&JsonText::new(IRIS_TREE), &options).unwrap();

    assert!(dot.contains(r"petal_length <= 2.4500"));
    assert!(dot.contains(r"soil in {clay,loam,sand,silt,peat\nrock}"));
    assert!(dot.contains(r"Prediction = virginica"));
    assert!(!dot.contains("Class #"));
    assert!(!dot.contains("Feature #"));
}

#[test]
fn hues_follow_classes() {
    let dot = export_graphviz(&JsonText::new(IRIS_TREE), &RenderOptions::default()).unwrap();

    // three classes -> hues 0, 1/3, 2/3
    assert!(dot.contains(r#"fillcolor="0.0000,1.0000,1.0000""#));
    assert!(dot.contains(r#"fillcolor="0.3333,0.8320,1.0000""#));
    assert!(dot.contains(r#"fillcolor="0.6667,0.9575,1.0000""#));
}

#[test]
fn malformed_tree_is_fatal() {
    let broken = r#"{"nodeType": "internal", "prediction": 0, "impurity": 0.5}"#;
    let err = export_graphviz(&JsonText::new(broken), &RenderOptions::default()).unwrap_err();
    assert_eq!(err.kind(), treeviz_error::ErrorKind::DeserializationFailed);
}
