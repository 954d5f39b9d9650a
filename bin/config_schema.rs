//! Prints the JSON Schema of the `graphql-jtd` configuration file

use graphql_jtd_runtime::Config;
use schemars::schema_for;

fn main() -> anyhow::Result<()> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
