use serde::{Deserialize, Serialize};

/// Identity-provider group linked to a team.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamSyncGroup {
    pub group_id: String,
    pub group_name: String,
    pub group_description: String,
}

/// Body of the group-mappings PATCH. The mapping is replaced wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupMappings {
    pub groups: Vec<TeamSyncGroup>,
}

impl GroupMappings {
    /// A mapping that links the team to exactly one group.
    pub fn single(group: TeamSyncGroup) -> Self {
        Self { groups: vec![group] }
    }
}
