//! Tests for the configuration data model and its serde integration.

use super::{ConfigMap, ConfigValue, ValueKind};
use anyhow::{Result, ensure};
use rstest::rstest;

#[rstest]
#[case(ConfigValue::from("x"), ValueKind::String)]
#[case(ConfigValue::from(7_i64), ValueKind::Integer)]
#[case(ConfigValue::from(1.5), ValueKind::Float)]
#[case(ConfigValue::from(false), ValueKind::Boolean)]
#[case(ConfigValue::from(ConfigMap::new()), ValueKind::Mapping)]
#[case(ConfigValue::from(Vec::<ConfigValue>::new()), ValueKind::Sequence)]
#[case(ConfigValue::Absent, ValueKind::Absent)]
fn kind_matches_variant(#[case] value: ConfigValue, #[case] expected: ValueKind) {
    assert_eq!(value.kind(), expected);
}

#[rstest]
#[case(ConfigValue::Integer(-12), "-12")]
#[case(ConfigValue::Float(3.0), "3")]
#[case(ConfigValue::Float(0.25), "0.25")]
#[case(ConfigValue::Boolean(false), "false")]
#[case(ConfigValue::String("as is".into()), "as is")]
fn literal_renders_scalars(#[case] value: ConfigValue, #[case] expected: &str) {
    assert_eq!(value.literal().as_deref(), Some(expected));
}

#[test]
fn json_document_parses_into_tagged_values() -> Result<()> {
    let value: ConfigValue = serde_json::from_str(
        r#"{"app": "test", "age": 1, "price": 20.5, "check": true,
            "tags": ["a", "b"], "gone": null, "sub": {"k": "v"}}"#,
    )?;
    let Some(map) = value.as_mapping() else {
        anyhow::bail!("expected a mapping, got {}", value.kind());
    };
    ensure!(map.get("app") == Some(&ConfigValue::from("test")));
    ensure!(map.get("age") == Some(&ConfigValue::Integer(1)));
    ensure!(map.get("price") == Some(&ConfigValue::Float(20.5)));
    ensure!(map.get("check") == Some(&ConfigValue::Boolean(true)));
    ensure!(map.get("gone") == Some(&ConfigValue::Absent));
    ensure!(
        map.get("tags")
            == Some(&ConfigValue::Sequence(vec!["a".into(), "b".into()]))
    );
    ensure!(map.get("sub").and_then(ConfigValue::as_mapping).is_some());
    Ok(())
}

#[test]
fn oversized_unsigned_integers_become_floats() -> Result<()> {
    let value: ConfigValue = serde_json::from_str("18446744073709551615")?;
    ensure!(value.kind() == ValueKind::Float, "got {}", value.kind());
    Ok(())
}

#[test]
fn absent_serialises_as_null() -> Result<()> {
    let mut map = ConfigMap::new();
    map.insert("gone".into(), ConfigValue::Absent);
    map.insert("port".into(), ConfigValue::Integer(8080));
    let json = serde_json::to_value(&map)?;
    ensure!(json == serde_json::json!({"gone": null, "port": 8080}));
    Ok(())
}
