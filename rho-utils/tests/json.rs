use rho_utils::{jsonify, load_json_arg, sort_keys};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Labeling {
    labels: Vec<usize>,
    cycle_sizes: Vec<usize>,
}

#[test]
fn test_jsonify_sorts_keys() {
    let labeling = Labeling {
        labels: vec![0, 1, 3],
        cycle_sizes: vec![3],
    };
    assert_eq!(
        jsonify(&labeling).unwrap(),
        r#"{"cycle_sizes":[3],"labels":[0,1,3]}"#
    );

    let nested = json!([{"b": 1, "a": {"d": 2, "c": 3}}]);
    assert_eq!(jsonify(&nested).unwrap(), r#"[{"a":{"c":3,"d":2},"b":1}]"#);
    assert_eq!(sort_keys(json!(7)), json!(7));
}

#[test]
fn test_load_json_arg() {
    let inline: Labeling =
        load_json_arg(r#"{"labels":[0],"cycle_sizes":[]}"#, "labeling").unwrap();
    assert_eq!(inline.labels, vec![0]);
    assert!(load_json_arg::<Labeling>(r#"{"labels":[-1],"cycle_sizes":[]}"#, "labeling").is_err());

    let path = std::env::temp_dir().join(format!("rho-utils-{}.json", std::process::id()));
    fs::write(&path, r#"{"labels":[0,1,3],"cycle_sizes":[3]}"#).unwrap();
    let from_file: Labeling = load_json_arg(path.to_str().unwrap(), "labeling").unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(from_file.cycle_sizes, vec![3]);

    let err = load_json_arg::<Labeling>("{", "labeling").unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse labeling"));
    assert!(load_json_arg::<Labeling>("/no/such/file.json", "labeling").is_err());
}
