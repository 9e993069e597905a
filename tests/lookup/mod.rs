// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use mapreader::coerce::{self, FromValue};
use mapreader::*;
use serde::{Deserialize, Serialize};
use test_generator::test_resources;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct TestCase {
    note: String,
    data: Value,
    path: String,
    target: String,
    want_result: Option<Value>,
    want_error: Option<String>,
    fallback: Option<Value>,
    skip: Option<bool>,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct YamlTest {
    cases: Vec<TestCase>,
}

// Result of the error returning accessor, the `_or_default` and the `_or` variant.
struct Outcome {
    result: LookupResult<Value>,
    or_default: Value,
    or_fallback: Value,
}

fn outcome<T, F>(
    data: &Value,
    path: &str,
    fallback: T,
    lookup: impl Fn(&Value, &str) -> LookupResult<T>,
    into_value: F,
) -> Outcome
where
    T: Default + Clone,
    F: Fn(T) -> Value,
{
    let result = lookup(data, path);
    Outcome {
        result: result.clone().map(&into_value),
        or_default: into_value(result.clone().unwrap_or_default()),
        or_fallback: into_value(result.unwrap_or(fallback)),
    }
}

fn bools(items: Vec<bool>) -> Value {
    Value::from(items.into_iter().map(Value::from).collect::<Vec<_>>())
}

fn bool_map(fields: BTreeMap<String, bool>) -> Value {
    Value::from(
        fields
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect::<BTreeMap<String, Value>>(),
    )
}

fn evaluate(case: &TestCase) -> Result<Outcome> {
    let data = &case.data;
    let path = case.path.as_str();
    let fallback = case.fallback.clone().unwrap_or(Value::Null);

    Ok(match case.target.as_str() {
        "value" => outcome(data, path, fallback, get::<Value>, |v| v),
        "string" => outcome(
            data,
            path,
            Option::<String>::from_value(&fallback)?.unwrap_or_default(),
            string,
            Value::from,
        ),
        "bool" => outcome(
            data,
            path,
            Option::<bool>::from_value(&fallback)?.unwrap_or_default(),
            boolean,
            Value::from,
        ),
        "int" => outcome(
            data,
            path,
            coerce::number::<i64>(&fallback).unwrap_or_default(),
            int,
            Value::from,
        ),
        "u8" => outcome(
            data,
            path,
            coerce::number::<u8>(&fallback).unwrap_or_default(),
            number::<u8>,
            // Integers in the yaml files are stored as i64.
            |n: u8| Value::from(i64::from(n)),
        ),
        "float" => outcome(
            data,
            path,
            coerce::number::<f64>(&fallback).unwrap_or_default(),
            float,
            Value::from,
        ),
        "bytes" => outcome(
            data,
            path,
            coerce::bytes(&fallback).unwrap_or_default(),
            bytes,
            Value::from,
        ),
        "bools" => outcome(
            data,
            path,
            coerce::slice::<bool>(&fallback).unwrap_or_default(),
            slice::<bool>,
            bools,
        ),
        "bool_map" => outcome(
            data,
            path,
            coerce::map::<bool>(&fallback).unwrap_or_default(),
            map::<bool>,
            bool_map,
        ),
        target => bail!("unsupported target `{target}`"),
    })
}

// Byte results are written as strings in the yaml files.
fn expected(case: &TestCase, want: &Value) -> Value {
    match (case.target.as_str(), want) {
        ("bytes", Value::String(s)) => Value::from(s.as_bytes()),
        _ => want.clone(),
    }
}

fn yaml_test_impl(file: &str) -> Result<()> {
    let yaml_str = std::fs::read_to_string(file)?;
    let test: YamlTest = serde_yaml::from_str(&yaml_str)?;

    std::eprintln!("running {file}");

    for case in &test.cases {
        std::eprint!("case {} ", case.note);
        if case.skip == Some(true) {
            std::eprintln!("skipped");
            continue;
        }

        let outcome = evaluate(case)?;
        match (&case.want_result, &case.want_error, &outcome.result) {
            (Some(want), None, Ok(actual)) => {
                let want = expected(case, want);
                assert_eq!(actual, &want, "{}", case.note);
                assert_eq!(outcome.or_default, want, "{}: default variant", case.note);
                assert_eq!(outcome.or_fallback, want, "{}: fallback variant", case.note);
            }
            (None, Some(want), Err(actual)) => {
                assert_eq!(&format!("{:?}", actual.kind()), want, "{}", case.note);
                if let Some(fallback) = &case.fallback {
                    assert_eq!(
                        outcome.or_fallback,
                        expected(case, fallback),
                        "{}: fallback variant",
                        case.note
                    );
                }
            }
            (want_result, want_error, actual) => {
                bail!(
                    "{}: want_result = `{want_result:?}` want_error = `{want_error:?}` actual = `{actual:?}`",
                    case.note
                );
            }
        }

        std::eprintln!("passed");
    }

    Ok(())
}

fn yaml_test(file: &str) -> Result<()> {
    match yaml_test_impl(file) {
        Ok(_) => Ok(()),
        Err(e) => {
            // If Err is returned, it doesn't always get printed by cargo test.
            // Therefore, panic with the error.
            panic!("{e}");
        }
    }
}

#[test_resources("tests/lookup/cases/*.yaml")]
fn run(path: &str) {
    yaml_test(path).unwrap()
}

#[test]
fn generic_get() -> Result<()> {
    let source = Value::from_json_str(
        r#"{
            "a": "1",
            "b": 42,
            "c": [1, 2, 3],
            "d": {
                "Greeting": "hello"
            }
        }"#,
    )?;

    let result = get::<String>(&source, "d.Greeting")?;
    assert_eq!(result, "hello");
    assert_eq!(get_or_default::<String>(&source, "d.Greeting"), result);
    assert_eq!(get_or(&source, "d.Farewell", "bye".to_string()), "bye");
    Ok(())
}

#[test]
fn default_variants_return_zero_values() -> Result<()> {
    let source = Value::from_json_str(r#"{"a": {"b": [true, "false"]}}"#)?;

    assert_eq!(string_or_default(&source, "a.b.0"), "");
    assert!(!boolean_or_default(&source, "a.b.1"));
    assert_eq!(int_or_default(&source, "a"), 0);
    assert_eq!(float_or_default(&source, "a.b.7"), 0.0);
    assert!(bytes_or_default(&source, "a.b.0").is_empty());
    assert!(slice_or_default::<bool>(&source, "a.b").is_empty());
    assert!(map_or_default::<Value>(&source, "a.b").is_empty());
    assert_eq!(number_or_default::<i16>(&source, "a.c"), 0);
    assert!(numbers_or_default::<i16>(&source, "a.b").is_empty());
    assert!(number_map_or_default::<i16>(&source, "a").is_empty());
    Ok(())
}

#[test]
fn every_numeric_width() -> Result<()> {
    let source = Value::from_json_str(r#"{"n": 100, "neg": -100, "f": 100.0, "half": 0.5}"#)?;

    assert_eq!(number::<i8>(&source, "n")?, 100);
    assert_eq!(number::<i16>(&source, "neg")?, -100);
    assert_eq!(number::<i32>(&source, "f")?, 100);
    assert_eq!(number::<i64>(&source, "f")?, 100);
    assert_eq!(number::<isize>(&source, "neg")?, -100);
    assert_eq!(number::<u8>(&source, "n")?, 100);
    assert_eq!(number::<u16>(&source, "f")?, 100);
    assert_eq!(number::<u32>(&source, "n")?, 100);
    assert_eq!(number::<u64>(&source, "n")?, 100);
    assert_eq!(number::<usize>(&source, "f")?, 100);
    assert_eq!(number::<f32>(&source, "half")?, 0.5);
    assert_eq!(number::<f64>(&source, "neg")?, -100.0);

    assert_eq!(
        number::<u32>(&source, "neg").map_err(|e| e.kind()),
        Err(ErrorKind::UnableToConvert)
    );
    assert_eq!(
        number::<usize>(&source, "half").map_err(|e| e.kind()),
        Err(ErrorKind::UnableToConvert)
    );
    Ok(())
}

#[test]
fn trees_built_in_code() -> Result<()> {
    let mut fields = BTreeMap::new();
    fields.insert("small".to_string(), Value::from(7u8));
    fields.insert("raw".to_string(), Value::from(vec![0xde_u8, 0xad]));
    fields.insert("list".to_string(), Value::from(vec![Value::from(1.5f32)]));
    let tree = Value::from(fields);

    // Exact assertions see the stored width.
    assert_eq!(get::<u8>(&tree, "small")?, 7);
    assert_eq!(
        get::<i64>(&tree, "small").map_err(|e| e.kind()),
        Err(ErrorKind::UnexpectedType)
    );
    assert_eq!(int(&tree, "small")?, 7);

    assert_eq!(bytes(&tree, "raw")?, vec![0xde, 0xad]);
    assert_eq!(get::<Vec<u8>>(&tree, "raw")?, vec![0xde, 0xad]);
    assert_eq!(slice::<f32>(&tree, "list")?, vec![1.5]);
    assert_eq!(float(&tree, "list.0")?, 1.5);
    Ok(())
}

#[test]
fn error_messages() -> Result<()> {
    let source = Value::from_json_str(r#"{"a": ["x"], "b": "s", "c": 1.5}"#)?;

    let err = |path: &str| int(&source, path).unwrap_err().to_string();
    assert_eq!(err("z"), "key not found: z");
    assert_eq!(
        err("a.1"),
        "given index out of bounds: index '1' but length '1'"
    );
    assert_eq!(
        err("a.x"),
        "integer lookup required but string given: lookup was 'x'"
    );
    assert_eq!(
        err("b.c.d"),
        "reached end of nested structures before lookup complete: last key was 'c'"
    );
    assert_eq!(
        err("b"),
        "result type is unexpected: expected i64 but found string"
    );
    assert_eq!(
        err("c"),
        "unable to convert to required type: f64 value '1.5' cannot be converted to i64"
    );
    Ok(())
}

#[cfg(feature = "arc")]
#[test]
fn concurrent_readers() -> Result<()> {
    let source = Value::from_json_str(r#"{"a": [{"b": {"c": [0, 1, 2]}}]}"#)?;

    std::thread::scope(|scope| {
        for i in 0..4 {
            let source = &source;
            scope.spawn(move || {
                let path = format!("a.0.b.c.{}", i % 3);
                assert_eq!(int(source, &path), Ok((i % 3) as i64));
            });
        }
    });
    Ok(())
}
