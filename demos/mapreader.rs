// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use mapreader::Value;

#[derive(Clone, Copy, ValueEnum)]
enum Target {
    /// The raw node.
    Value,
    String,
    Bool,
    /// Bytes of a string or byte node, printed as hex.
    Bytes,
    Int,
    Float,
    Strings,
    Ints,
}

fn load(file: &str) -> Result<Value> {
    if file.ends_with(".json") {
        Value::from_json_file(file)
    } else if file.ends_with(".yaml") || file.ends_with(".yml") {
        Value::from_yaml_file(file)
    } else {
        bail!("Unsupported data file `{file}`. Must be json or yaml.")
    }
}

fn read(file: &str, path: &str, target: Target) -> Result<()> {
    let tree = load(file)?;

    let output = match target {
        Target::Value => mapreader::get::<Value>(&tree, path)?.to_json_str()?,
        Target::String => mapreader::string(&tree, path)?,
        Target::Bool => mapreader::boolean(&tree, path)?.to_string(),
        Target::Bytes => mapreader::bytes(&tree, path)?
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect(),
        Target::Int => mapreader::int(&tree, path)?.to_string(),
        Target::Float => mapreader::float(&tree, path)?.to_string(),
        Target::Strings => mapreader::slice::<String>(&tree, path)?.join("\n"),
        Target::Ints => mapreader::numbers::<i64>(&tree, path)?
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
    };

    println!("{output}");
    Ok(())
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data file. json or yaml.
    #[arg(long, short, value_name = "data.json|data.yaml")]
    file: String,

    /// Dotted path of the node to read.
    path: String,

    /// Type to read the node as.
    #[arg(long = "as", short, value_enum, default_value = "value")]
    target: Target,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    read(&cli.file, &cli.path, cli.target)
}
