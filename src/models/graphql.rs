use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub start_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

// SAML identity data structures
#[derive(Debug, Deserialize)]
pub struct SamlIdentitiesData {
    pub organization: Option<OrganizationIdentities>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationIdentities {
    pub saml_identity_provider: Option<SamlIdentityProvider>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlIdentityProvider {
    pub external_identities: super::Connection<ExternalIdentity>,
}

/// One node of the external identity connection. `user` is absent until the
/// identity has been linked to a GitHub account.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalIdentity {
    pub saml_identity: Option<SamlIdentity>,
    pub user: Option<IdentityUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlIdentity {
    pub name_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IdentityUser {
    pub login: String,
}

impl ExternalIdentity {
    pub fn login(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }

    pub fn into_name_id(self) -> Option<String> {
        self.saml_identity.and_then(|s| s.name_id)
    }
}
