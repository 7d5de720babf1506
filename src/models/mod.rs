pub mod graphql;
pub mod lookup;
pub mod team;
pub mod team_sync;

// Re-export commonly used types
pub use graphql::{GraphQLError, GraphQLResponse, PageInfo};
pub use lookup::Lookup;
pub use team::Team;
pub use team_sync::{GroupMappings, TeamSyncGroup};

// Connection type used by GraphQL pagination
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub page_info: PageInfo,
    pub nodes: Vec<T>,
}
