use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::ErrorContext;

pub async fn handle_saml(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;

    let login = matches
        .get_one::<String>("login")
        .ok_or("GitHub login is required")?;

    match client.get_saml_id(login).await? {
        Some(name_id) => println!("{} → {}", login.cyan(), name_id.bold()),
        None => println!("{}", format!("No SAML identity linked to '{}'.", login).dimmed()),
    }

    Ok(())
}
