use colored::*;
use serde::Serialize;
use serde_json::Value;

use super::utils::*;
use crate::models::Team;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_team(team: &Team) {
    println!("{} {}", "▸".cyan(), team.name().bold());
    println!("  {} {}", "Slug:".dimmed(), team.slug().cyan());
    println!("  {} {}", "ID:".dimmed(), team.id());
}

pub fn print_repos(repos: &[Value]) {
    if repos.is_empty() {
        println!("{}", "No repositories found.".dimmed());
        return;
    }

    println!("{}", format!("Repositories ({})", repos.len()).bold());
    for repo in repos {
        let name = str_field(repo, "name");
        let private = repo.get("private").and_then(|v| v.as_bool()).unwrap_or(false);
        let visibility = if private { "private".yellow() } else { "public".green() };
        let description = clean_description(str_field(repo, "description"));

        if description.is_empty() {
            println!("  {} [{}]", name.cyan(), visibility);
        } else {
            println!("  {} [{}] {}", name.cyan(), visibility, truncate(&description, 80).dimmed());
        }
    }
}

pub fn print_members(members: &[Value]) {
    if members.is_empty() {
        println!("{}", "No members found.".dimmed());
        return;
    }

    println!("{}", format!("Members ({})", members.len()).bold());
    for member in members {
        let login = str_field(member, "login");
        let id = member.get("id").map(|v| v.to_string()).unwrap_or_default();
        println!("  {} ({})", login.cyan(), id.dimmed());
    }
}
