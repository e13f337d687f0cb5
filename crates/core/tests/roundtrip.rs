//! End-to-end round trips: values rendered by the paired renderer must
//! reconstruct equal under the matching descriptor.

use restring_core::{
    json, reconstruct, render, ObjectShape, PrimitiveKind, TypeDescriptor, Value,
};
use time::macros::datetime;

fn primitive(kind: PrimitiveKind) -> TypeDescriptor {
    TypeDescriptor::Primitive(kind)
}

/// A descriptor exercising every kind: primitives, temporal, array,
/// sequence, mapping and a nested object.
fn account_descriptor() -> TypeDescriptor {
    TypeDescriptor::Object(
        ObjectShape::new("Account")
            .field("id", primitive(PrimitiveKind::Long))
            .field("initial", primitive(PrimitiveKind::Char))
            .field("active", primitive(PrimitiveKind::Bool))
            .field("rank", primitive(PrimitiveKind::Short))
            .field("logins", primitive(PrimitiveKind::Int))
            .field("rating", primitive(PrimitiveKind::Float))
            .field("balance", primitive(PrimitiveKind::Double))
            .field("owner", primitive(PrimitiveKind::Str))
            .field("created", TypeDescriptor::Temporal)
            .field("codes", TypeDescriptor::array(primitive(PrimitiveKind::Int)))
            .field("tags", TypeDescriptor::sequence(primitive(PrimitiveKind::Str)))
            .field(
                "limits",
                TypeDescriptor::mapping(
                    primitive(PrimitiveKind::Str),
                    primitive(PrimitiveKind::Long),
                ),
            )
            .field(
                "address",
                TypeDescriptor::Object(
                    ObjectShape::new("Account::Address")
                        .field("city", primitive(PrimitiveKind::Str))
                        .field("zip", primitive(PrimitiveKind::Str)),
                ),
            ),
    )
}

fn account_value() -> Value {
    Value::Object {
        class: "Account".to_owned(),
        fields: vec![
            ("id".to_owned(), Value::Long(9_000_000_001)),
            ("initial".to_owned(), Value::Char('k')),
            ("active".to_owned(), Value::Bool(true)),
            ("rank".to_owned(), Value::Short(3)),
            ("logins".to_owned(), Value::Int(128)),
            ("rating".to_owned(), Value::Float(4.5)),
            ("balance".to_owned(), Value::Double(1024.75)),
            ("owner".to_owned(), Value::Str("kevin".to_owned())),
            (
                "created".to_owned(),
                Value::Temporal(datetime!(2021-12-15 10:30:00 +00:00)),
            ),
            (
                "codes".to_owned(),
                Value::Array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
            ),
            (
                "tags".to_owned(),
                Value::Sequence(vec![
                    Value::Str("alpha".to_owned()),
                    Value::Str("beta".to_owned()),
                ]),
            ),
            (
                "limits".to_owned(),
                Value::Mapping(vec![
                    (Value::Str("daily".to_owned()), Value::Long(500)),
                    (Value::Str("monthly".to_owned()), Value::Long(9000)),
                ]),
            ),
            (
                "address".to_owned(),
                Value::Object {
                    class: "Account.Address".to_owned(),
                    fields: vec![
                        ("city".to_owned(), Value::Str("London".to_owned())),
                        ("zip".to_owned(), Value::Str("N1".to_owned())),
                    ],
                },
            ),
        ],
    }
}

#[test]
fn full_value_survives_a_round_trip() {
    let descriptor = account_descriptor();
    let original = account_value();
    let rendered = render(&original);
    let rebuilt = reconstruct(&descriptor, &rendered).expect("rendered text must reconstruct");
    assert_eq!(rebuilt, original, "rendered: {rendered}");
}

#[test]
fn null_fields_survive_a_round_trip() {
    let descriptor = TypeDescriptor::Object(
        ObjectShape::new("Sparse")
            .field("n", primitive(PrimitiveKind::Int))
            .field("when", TypeDescriptor::Temporal)
            .field("items", TypeDescriptor::sequence(primitive(PrimitiveKind::Int))),
    );
    let original = Value::Object {
        class: "Sparse".to_owned(),
        fields: vec![
            ("n".to_owned(), Value::Null),
            ("when".to_owned(), Value::Null),
            ("items".to_owned(), Value::Null),
        ],
    };
    let rendered = render(&original);
    assert_eq!(rendered, "Sparse(n=null, when=null, items=null)");
    assert_eq!(reconstruct(&descriptor, &rendered).unwrap(), original);
}

#[test]
fn empty_containers_survive_a_round_trip() {
    let descriptor = TypeDescriptor::Object(
        ObjectShape::new("Empty")
            .field("codes", TypeDescriptor::array(primitive(PrimitiveKind::Int)))
            .field("tags", TypeDescriptor::sequence(primitive(PrimitiveKind::Str)))
            .field(
                "limits",
                TypeDescriptor::mapping(
                    primitive(PrimitiveKind::Str),
                    primitive(PrimitiveKind::Int),
                ),
            ),
    );
    let original = Value::Object {
        class: "Empty".to_owned(),
        fields: vec![
            ("codes".to_owned(), Value::Array(vec![])),
            ("tags".to_owned(), Value::Sequence(vec![])),
            ("limits".to_owned(), Value::Mapping(vec![])),
        ],
    };
    let rendered = render(&original);
    assert_eq!(rendered, "Empty(codes=[], tags=[], limits={})");
    assert_eq!(reconstruct(&descriptor, &rendered).unwrap(), original);
}

#[test]
fn empty_string_field_round_trips_while_other_kinds_go_null() {
    let descriptor = TypeDescriptor::Object(
        ObjectShape::new("Mixed")
            .field("label", primitive(PrimitiveKind::Str))
            .field("count", primitive(PrimitiveKind::Int)),
    );
    let value = reconstruct(&descriptor, "Mixed(label=, count=)").unwrap();
    assert_eq!(value.field("label"), Some(&Value::Str(String::new())));
    assert_eq!(value.field("count"), Some(&Value::Null));
}

#[test]
fn duplicate_mapping_keys_collapse_to_the_last_value() {
    let descriptor = TypeDescriptor::mapping(
        primitive(PrimitiveKind::Str),
        primitive(PrimitiveKind::Int),
    );
    let value = reconstruct(&descriptor, "{k1=1, k1=2}").unwrap();
    assert_eq!(
        value,
        Value::Mapping(vec![(Value::Str("k1".to_owned()), Value::Int(2))])
    );
}

#[test]
fn json_bridge_reflects_the_reconstructed_tree() {
    let value = reconstruct(&account_descriptor(), &render(&account_value())).unwrap();
    let json = json::to_json(&value);
    assert_eq!(json["owner"], serde_json::json!("kevin"));
    assert_eq!(json["codes"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["limits"]["daily"], serde_json::json!(500));
    assert_eq!(json["address"]["city"], serde_json::json!("London"));
    assert_eq!(json["created"], serde_json::json!("Wed Dec 15 10:30:00 +0000 2021"));
}
