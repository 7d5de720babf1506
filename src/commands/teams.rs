use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::error::ErrorContext;
use crate::formatting::{print_json, print_team};
use crate::models::Lookup;

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Box<dyn std::error::Error>> {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .ok_or_else(|| format!("--{} is required", name).into())
}

pub async fn handle_get_team(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;
    let slug = required(matches, "slug")?;

    match client.get_team(slug).await? {
        Lookup::Found(team) => {
            if matches.get_one::<String>("format").map(|s| s.as_str()) == Some("json") {
                print_json(&team)?;
            } else {
                print_team(&team);
            }
        }
        Lookup::NotFound { status } => {
            println!("{} (HTTP {})", format!("Team '{}' not found.", slug).dimmed(), status);
        }
    }

    Ok(())
}

pub async fn handle_create_team(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;
    let name = required(matches, "name")?;
    let description = matches
        .get_one::<String>("description")
        .map(|s| s.as_str())
        .unwrap_or("");

    let team = client.create_team(name, description).await?;
    println!("✅ Team created successfully!");
    print_team(&team);

    Ok(())
}

pub async fn handle_describe_team(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;
    let slug = required(matches, "slug")?;
    let description = required(matches, "description")?;

    let team = client.set_team_description(slug, description).await?;
    println!("✅ Description updated!");
    print_team(&team);

    Ok(())
}

pub async fn handle_sync_team(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;
    let slug = required(matches, "slug")?;
    let group_id = required(matches, "group-id")?;
    let group_name = required(matches, "group-name")?;
    let group_description = matches
        .get_one::<String>("group-description")
        .map(|s| s.as_str())
        .unwrap_or("");

    client
        .sync_team_and_group(slug, group_id, group_name, group_description)
        .await?;
    println!(
        "✅ Team {} is now linked to group {} ({})",
        slug.cyan(),
        group_name.bold(),
        group_id.dimmed()
    );

    Ok(())
}
