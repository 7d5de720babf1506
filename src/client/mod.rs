pub mod github_client;
pub mod graphql;
pub mod pagination;

pub use github_client::GitHubClient;
pub use pagination::parse_next_link;
