//! Sample documents shared by integration tests.

/// A JSON document with every scalar kind and one nested section.
pub const SERVICE_JSON: &str = r#"{
    "app": "test",
    "age": 1,
    "check": true,
    "price": 20.5,
    "sub_section": {
        "sub_key": "val"
    }
}"#;

/// A JSON document overriding two keys of [`SERVICE_JSON`].
pub const SERVICE_OVERRIDE_JSON: &str = r#"{
    "age": 5,
    "check": false
}"#;

/// YAML equivalent of [`SERVICE_JSON`].
pub const SERVICE_YAML: &str = "\
app: test
age: 1
check: true
price: 20.5
sub_section:
  sub_key: val
";

/// JSON with a syntax error at line 1.
pub const BROKEN_JSON: &str = r#"{app": "test_2"}"#;
