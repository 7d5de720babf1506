use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::error::ErrorContext;
use crate::formatting::{print_json, print_members, print_repos};

pub async fn handle_repos(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;

    let repos = client.get_repos().await?;

    match matches.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => print_json(&repos)?,
        _ => print_repos(&repos),
    }

    Ok(())
}

pub async fn handle_members(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;

    let members = client.get_members().await?;

    match matches.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => print_json(&members)?,
        _ => print_members(&members),
    }

    Ok(())
}
