use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::load_config;

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let token = matches.get_one::<String>("token").cloned();
    let organization = matches.get_one::<String>("org").cloned();

    if token.is_some() || organization.is_some() {
        let mut context = CliContext::new();
        let config = context.save(token, organization)?;
        println!("Configuration saved successfully!");

        if let Some(org) = &config.organization {
            println!("Organization: {}", org.cyan());
        }
    } else if matches.get_flag("show") {
        let config = load_config()?;
        match config.token {
            Some(token) if token.chars().count() > 12 => println!("Token: {}", mask_token(&token)),
            Some(_) => println!("Token: {}", "(set)".dimmed()),
            None => println!("No token configured"),
        }
        match config.organization {
            Some(org) => println!("Organization: {}", org.cyan()),
            None => println!("No organization configured"),
        }
    } else {
        println!("Usage: gh-teams auth --token <TOKEN> [--org <ORG>] or gh-teams auth --show");
    }
    Ok(())
}

/// First eight and last four characters of a token, char-safe.
pub(crate) fn mask_token(token: &str) -> String {
    let count = token.chars().count();
    let head: String = token.chars().take(8).collect();
    let tail: String = token.chars().skip(count.saturating_sub(4)).collect();
    format!("{}...{}", head, tail)
}
