// Entrypoint for the CLI application.
// - Logs in once, then runs a demonstration sequence of queries.
// - Returns `anyhow::Result` so any failure terminates with a nonzero
//   exit code and a message on stderr.

use anyhow::{Context, Result};
use mgp_query::{api::MgpClient, ui::prompt_credentials};
use serde_json::Value;

fn main() -> Result<()> {
    let api = MgpClient::new()?;
    let credentials = prompt_credentials()?;
    let token = api.login(&credentials)?;

    // Example for results coming back as JSON: look up one academic
    // record by id and pick out the given name.
    let body = api.query("/api/v2/MGP/acad", &token, &[("id", "1969")])?;
    let acad: Value = serde_json::from_str(&body)?;
    println!("{}", given_name(&acad)?);

    // The search endpoint also takes `other_names`, `school`, `year`,
    // `thesis`, `country` and `msc`; supplying only a family and given
    // name is usually enough.
    let search_csv = api.query(
        "/api/v2/MGP/search",
        &token,
        &[
            ("family_name", "Keller"),
            ("given_name", "M"),
            ("format", "csv"),
        ],
    )?;
    println!("{search_csv}");

    // The same search as JSON (the default format) returns just a list
    // of ids. In practice you would iterate over this list and call
    // /api/v2/MGP/acad to retrieve more information on each individual.
    let body = api.query(
        "/api/v2/MGP/search",
        &token,
        &[
            ("family_name", "Keller"),
            ("given_name", "M"),
            ("format", "json"),
        ],
    )?;
    let acad_list: Value = serde_json::from_str(&body)?;
    println!("{acad_list}");

    // Example for results coming back as CSV: academic siblings of one
    // record, within a window of years.
    let siblings = api.query(
        "/api/v2/MGP/siblings",
        &token,
        &[("id", "1969"), ("format", "CSV"), ("window", "5")],
    )?;
    println!("{siblings}");

    Ok(())
}

/// Pull `MGP_academic.given_name` out of an acad response. A record
/// without that field is an error, not an empty line of output.
fn given_name(acad: &Value) -> Result<&str> {
    acad.pointer("/MGP_academic/given_name")
        .and_then(Value::as_str)
        .context("missing MGP_academic.given_name in acad response")
}
