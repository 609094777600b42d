//! Serde roundtrip and JsonSchema validation tests for core types.

use schemars::schema_for;
use tabi_core::{ChecklistDefaults, ChecklistItem, PlaceResult};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    checklist_item_roundtrip,
    ChecklistItem,
    ChecklistItem {
        id: "passport".into(),
        text: "Passport".into(),
        category: "documents".into(),
        checked: true,
    }
);

roundtrip_and_validate!(
    place_result_with_photo_roundtrip,
    PlaceResult,
    PlaceResult {
        name: "Canton Tower".into(),
        address: "222 Yuejiang W Rd, Haizhu District, Guangzhou".into(),
        rating: Some(4.6),
        photo_url: Some(
            "https://places.googleapis.com/v1/places/abc/photos/xyz/media?maxHeightPx=400&maxWidthPx=600&key=k"
                .into()
        ),
        attributions: vec!["Li Wei".into(), "Sam".into()],
    }
);

roundtrip_and_validate!(
    place_result_without_photo_roundtrip,
    PlaceResult,
    PlaceResult {
        name: "Shamian Island".into(),
        address: "Liwan District, Guangzhou".into(),
        rating: None,
        photo_url: None,
        attributions: Vec::new(),
    }
);

roundtrip_and_validate!(
    bundled_defaults_roundtrip,
    ChecklistDefaults,
    ChecklistDefaults::bundled()
);

#[test]
fn place_result_uses_camel_case_fields() {
    let result = PlaceResult {
        name: "n".into(),
        address: "a".into(),
        rating: None,
        photo_url: None,
        attributions: Vec::new(),
    };
    let value = serde_json::to_value(&result).unwrap();
    assert!(value.get("photoUrl").is_some());
    assert!(value.get("photo_url").is_none());
}
