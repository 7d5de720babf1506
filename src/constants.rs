pub const GITHUB_API_URL: &str = "https://api.github.com/";
pub const CONFIG_FILE: &str = ".gh-teams-config.json";
pub const USER_AGENT: &str = concat!("gh-teams/", env!("CARGO_PKG_VERSION"));

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const ORG_ENV: &str = "GITHUB_ORG";
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Page size requested from REST collection endpoints and the GraphQL connection.
pub const PAGE_SIZE: u32 = 100;

/// Upper bound on pages followed by a single listing or SAML scan.
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Privacy applied to every team created through the client.
pub const TEAM_PRIVACY: &str = "closed";

pub const SAML_IDENTITIES_QUERY: &str = r#"
    query($login: String!, $first: Int!, $after: String) {
        organization(login: $login) {
            samlIdentityProvider {
                externalIdentities(first: $first, after: $after) {
                    pageInfo {
                        endCursor
                        startCursor
                        hasNextPage
                    }
                    nodes {
                        samlIdentity {
                            nameId
                        }
                        user {
                            login
                        }
                    }
                }
            }
        }
    }
"#;
