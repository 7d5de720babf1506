use serde::Serialize;
use serde_json::Value;

use crate::error::{GitHubError, GitHubResult};

const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "slug"];

/// A GitHub team. Only constructed through validation, so every instance has
/// a non-zero id and non-empty name and slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    id: u64,
    name: String,
    slug: String,
}

impl Team {
    pub fn new(id: u64, name: impl Into<String>, slug: impl Into<String>) -> GitHubResult<Self> {
        let team = Self {
            id,
            name: name.into(),
            slug: slug.into(),
        };

        if team.id == 0 {
            return Err(GitHubError::MissingField("id"));
        }
        if team.name.is_empty() {
            return Err(GitHubError::MissingField("name"));
        }
        if team.slug.is_empty() {
            return Err(GitHubError::MissingField("slug"));
        }

        Ok(team)
    }

    /// Build a team from a decoded JSON object.
    ///
    /// Fields are checked in the order `id`, `name`, `slug`; the first one that
    /// is absent or empty is named in the error.
    pub fn from_value(data: &Value) -> GitHubResult<Self> {
        for field in REQUIRED_FIELDS {
            if data.get(field).map_or(true, is_falsy) {
                return Err(GitHubError::MissingField(field));
            }
        }

        let id = data["id"].as_u64().ok_or_else(|| GitHubError::InvalidField {
            field: "id",
            reason: format!("expected a positive integer, got {}", data["id"]),
        })?;
        let name = string_field(data, "name")?;
        let slug = string_field(data, "slug")?;

        Ok(Self { id, name, slug })
    }

    /// Decode a response body and validate it as a team.
    pub async fn from_response(response: reqwest::Response) -> GitHubResult<Self> {
        let data: Value = response.json().await?;
        Self::from_value(&data)
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl TryFrom<Value> for Team {
    type Error = GitHubError;

    fn try_from(value: Value) -> GitHubResult<Self> {
        Team::from_value(&value)
    }
}

fn string_field(data: &Value, field: &'static str) -> GitHubResult<String> {
    data[field]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| GitHubError::InvalidField {
            field,
            reason: format!("expected a string, got {}", data[field]),
        })
}

/// Whether a JSON value counts as "not provided": null, false, zero, or an
/// empty string, array or object.
pub(crate) fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
