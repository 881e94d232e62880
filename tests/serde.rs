//! Serialization of `DiscoMap`s through `serde_json`.

#![cfg(feature = "serde")]

use discomap::{Disco, DiscoMap};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Content {
	content: String,
}

#[test]
fn extra_fields_survive_a_round_trip() {
	let input = json!([
		{"x": 0, "y": 0, "d": 1, "content": "a"},
		{"x": 2, "y": 1, "d": 3, "content": "man", "hitchhiker": 42},
	]);

	let map: DiscoMap<Map<String, Value>> =
		serde_json::from_value(input.clone()).unwrap();

	assert_eq!(map.len(), 2);
	assert_eq!(map.discos()[1].payload["hitchhiker"], json!(42));
	assert_eq!(serde_json::to_value(&map).unwrap(), input);
}

#[test]
fn typed_payload() {
	let map: DiscoMap<Content> = serde_json::from_str(
		r#"[{"x": 10, "y": 6, "d": 4, "content": "Plan"}]"#,
	)
	.unwrap();

	assert_eq!(
		map.discos(),
		[Disco::with_payload(
			10,
			6,
			4,
			Content {
				content: "Plan".to_string()
			}
		)]
	);
}

#[test]
fn invalid_sequences_are_rejected() {
	let overlapping = json!([
		{"x": 0, "y": 0, "d": 1, "content": "a"},
		{"x": 1, "y": 1, "d": 2, "content": "b"},
		{"x": 3, "y": 2, "d": 1, "content": "c"},
	]);
	let degenerate = json!([{"x": 4, "y": 4, "d": 0, "content": "a"}]);

	assert!(serde_json::from_value::<DiscoMap<Content>>(overlapping).is_err());
	assert!(serde_json::from_value::<DiscoMap<Content>>(degenerate).is_err());
}
