// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use std::collections::BTreeMap;

use anyhow::Result;
use mapreader::*;
use serde_json::json;

#[test]
fn serialize_number() -> Result<()> {
    assert_eq!(serde_json::to_string_pretty(&Value::from(1i64))?, "1");
    assert_eq!(serde_json::to_string_pretty(&Value::from(-1i8))?, "-1");
    assert_eq!(serde_json::to_string_pretty(&Value::from(1.1))?, "1.1");
    assert_eq!(serde_json::to_string_pretty(&Value::from(-1.1))?, "-1.1");
    Ok(())
}

#[test]
fn serialize_string() -> Result<()> {
    assert_eq!(
        Value::from("Hello, World\n").to_json_str()?,
        "\"Hello, World\\n\""
    );
    Ok(())
}

#[test]
fn constructors() -> Result<()> {
    assert_eq!(Value::new_object(), Value::from_json_str("{}")?);
    assert_eq!(Value::new_array(), Value::from_json_str("[]")?);
    assert_eq!(Value::default(), Value::Null);
    assert_eq!(
        Value::from(BTreeMap::from([("k".to_string(), Value::from(true))])),
        Value::from(json!({"k": true}))
    );
    Ok(())
}

#[test]
fn json_round_trip() -> Result<()> {
    let text = r#"{"a":[1,-2,"three",null,false,{"b":{}}],"c":18446744073709551615}"#;
    let v = Value::from_json_str(text)?;
    assert_eq!(serde_json::to_string(&v)?, text);
    assert_eq!(Value::from_json_str(&v.to_json_str()?)?, v);
    Ok(())
}

#[test]
fn lookup_method() -> Result<()> {
    let v = Value::from_json_str(r#"{"a": [{"b": {"c": [0, 1, 2]}}]}"#)?;
    assert_eq!(v.lookup("a.0.b.c.1")?, &Value::from(1i64));
    assert_eq!(
        v.lookup("a.0.b.c")?.as_array().map(Vec::len),
        Some(3)
    );
    assert_eq!(
        v.lookup("a.1").map_err(|e| e.kind()),
        Err(ErrorKind::IndexOutOfBounds)
    );
    assert_eq!(resolve(&v, "a.0.b")?, v.lookup("a.0.b")?);
    Ok(())
}

#[test]
fn lookups_do_not_modify_the_tree() -> Result<()> {
    let v = Value::from_json_str(r#"{"a": {"b": [1, 2]}}"#)?;
    let before = v.clone();
    let _ = slice::<i64>(&v, "a.b")?;
    let _ = map::<Value>(&v, "a")?;
    let _ = string(&v, "a.b.5");
    assert_eq!(v, before);
    Ok(())
}

#[test]
fn api() -> Result<()> {
    let v = Value::from_json_str(r#"{"s": "x", "n": 2.5, "b": true, "z": null}"#)?;
    assert_eq!(v.lookup("s")?, &Value::from("x"));
    assert_eq!(v.lookup("n")?.as_number().and_then(Number::as_f64), Some(2.5));
    assert_eq!(v.lookup("b")?.as_bool(), Some(true));
    assert!(v.lookup("z")?.is_null());
    assert_eq!(v.as_object().map(|o| o.len()), Some(4));

    // Check invalid api calls.
    assert!(Value::Null.as_object().is_none());
    assert!(Value::from("anc").as_array().is_none());
    assert!(Value::from(1i64).as_string().is_none());
    assert!(Value::from(true).as_bytes().is_none());
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml() -> Result<()> {
    let v = Value::from_yaml_str(
        r#"
        server:
          ports: [80, 443]
          name: edge
        "#,
    )?;
    assert_eq!(numbers::<u16>(&v, "server.ports")?, vec![80, 443]);
    assert_eq!(string(&v, "server.name")?, "edge");
    Ok(())
}
