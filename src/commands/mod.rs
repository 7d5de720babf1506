pub mod auth;
pub mod repos;
pub mod saml;
pub mod teams;
pub mod workflow;

pub use auth::handle_auth;
pub use repos::{handle_members, handle_repos};
pub use saml::handle_saml;
pub use teams::{handle_create_team, handle_describe_team, handle_get_team, handle_sync_team};
pub use workflow::handle_dispatch;
