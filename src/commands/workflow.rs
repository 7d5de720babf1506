use clap::ArgMatches;
use colored::*;
use serde_json::{Map, Value};

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, GitHubError, GitHubResult};

/// Parse `key=value` pairs. Values that read as JSON scalars (`true`, `3`)
/// keep that type; anything else is a string.
pub fn parse_inputs<'a, I>(pairs: I) -> GitHubResult<Map<String, Value>>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut inputs = Map::new();

    for pair in pairs {
        let (key, raw) = pair.split_once('=').ok_or_else(|| GitHubError::InvalidInput {
            message: format!("Workflow input '{}' must look like key=value", pair),
            status: None,
        })?;

        let value = match serde_json::from_str::<Value>(raw) {
            Ok(parsed) if !parsed.is_object() && !parsed.is_array() => parsed,
            _ => Value::String(raw.to_string()),
        };
        inputs.insert(key.trim().to_string(), value);
    }

    Ok(inputs)
}

pub async fn handle_dispatch(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.client()?;

    let repo = matches.get_one::<String>("repo").ok_or("Repository is required")?;
    let workflow = matches.get_one::<String>("workflow").ok_or("Workflow is required")?;
    let git_ref = matches
        .get_one::<String>("ref")
        .map(|s| s.as_str())
        .unwrap_or("main");

    let inputs = match matches.get_many::<String>("input") {
        Some(pairs) => Some(parse_inputs(pairs)?),
        None => None,
    };

    client
        .dispatch_workflow(repo, workflow, git_ref, inputs.as_ref())
        .await?;
    println!(
        "✅ Dispatched {} on {}@{}",
        workflow.bold(),
        repo.cyan(),
        git_ref
    );

    Ok(())
}
