use std::process;

use clap::{Arg, ArgAction, Command};
use tracing::error;

use gh_teams::commands::*;
use gh_teams::logging::{get_log_file_path, init_logging, log_panic_info};

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .value_name("FORMAT")
        .help("Output format")
        .value_parser(["simple", "json"])
        .default_value("simple")
}

fn build_cli() -> Command {
    Command::new("gh-teams")
        .about("Manage GitHub organization teams, members and repositories")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Store the access token and organization")
                .arg(
                    Arg::new("token")
                        .long("token")
                        .value_name("TOKEN")
                        .help("Set your GitHub access token")
                        .required(false),
                )
                .arg(
                    Arg::new("org")
                        .long("org")
                        .value_name("ORG")
                        .help("Set the organization to manage")
                        .required(false),
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the stored configuration")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("team")
                .about("Look up, create and update teams")
                .subcommand_required(true)
                .subcommand(
                    Command::new("get")
                        .about("Show a team by slug")
                        .arg(Arg::new("slug").required(true).help("Team slug"))
                        .arg(format_arg()),
                )
                .subcommand(
                    Command::new("create")
                        .about("Create a closed team")
                        .arg(Arg::new("name").required(true).help("Team name"))
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .value_name("TEXT")
                                .help("Team description"),
                        ),
                )
                .subcommand(
                    Command::new("describe")
                        .about("Set a team's description")
                        .arg(Arg::new("slug").required(true).help("Team slug"))
                        .arg(Arg::new("description").required(true).help("New description")),
                )
                .subcommand(
                    Command::new("sync")
                        .about("Link a team to an identity-provider group")
                        .arg(Arg::new("slug").required(true).help("Team slug"))
                        .arg(
                            Arg::new("group-id")
                                .long("group-id")
                                .value_name("ID")
                                .required(true)
                                .help("Identity-provider group ID"),
                        )
                        .arg(
                            Arg::new("group-name")
                                .long("group-name")
                                .value_name("NAME")
                                .required(true)
                                .help("Group display name"),
                        )
                        .arg(
                            Arg::new("group-description")
                                .long("group-description")
                                .value_name("TEXT")
                                .help("Group description"),
                        ),
                ),
        )
        .subcommand(
            Command::new("repos")
                .about("List all repositories of the organization")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("members")
                .about("List all members of the organization")
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("saml")
                .about("Find the SAML name ID linked to a GitHub login")
                .arg(Arg::new("login").required(true).help("GitHub login")),
        )
        .subcommand(
            Command::new("dispatch")
                .about("Trigger a workflow_dispatch run")
                .arg(Arg::new("repo").required(true).help("Repository name"))
                .arg(Arg::new("workflow").required(true).help("Workflow file name or ID"))
                .arg(
                    Arg::new("ref")
                        .long("ref")
                        .value_name("REF")
                        .default_value("main")
                        .help("Branch or tag to run on"),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_name("KEY=VALUE")
                        .action(ArgAction::Append)
                        .help("Workflow input, may be repeated"),
                ),
        )
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        default_hook(info);
    }));

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("team", sub_matches)) => match sub_matches.subcommand() {
            Some(("get", team_matches)) => handle_get_team(team_matches).await,
            Some(("create", team_matches)) => handle_create_team(team_matches).await,
            Some(("describe", team_matches)) => handle_describe_team(team_matches).await,
            Some(("sync", team_matches)) => handle_sync_team(team_matches).await,
            _ => {
                eprintln!("Unknown team subcommand. Use 'gh-teams team --help' for available options.");
                process::exit(1);
            }
        },
        Some(("repos", sub_matches)) => handle_repos(sub_matches).await,
        Some(("members", sub_matches)) => handle_members(sub_matches).await,
        Some(("saml", sub_matches)) => handle_saml(sub_matches).await,
        Some(("dispatch", sub_matches)) => handle_dispatch(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'gh-teams --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        if let Some(path) = get_log_file_path() {
            eprintln!("Log: {}", path.display());
        }
        process::exit(1);
    }
}
