//! Link-header pagination for REST collection endpoints.
//!
//! GitHub advertises further pages in the `Link` response header:
//! `<https://api.github.com/organizations/1/repos?per_page=100&page=2>; rel="next", <...>; rel="last"`.
//! Listings follow the `next` relation until the server stops sending one.

use reqwest::header::{HeaderMap, LINK};
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use super::GitHubClient;
use crate::error::{GitHubError, GitHubResult};

impl GitHubClient {
    /// Fetch every page of a collection endpoint.
    ///
    /// `per_page` is only attached to the first request; `next` URLs already
    /// carry it. Elements are returned in page order, then in-page order.
    pub(crate) async fn get_paginated(&self, path: &str, per_page: u32) -> GitHubResult<Vec<Value>> {
        let mut url = self.url(path)?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string());

        let mut items = Vec::new();
        let mut pages = 0usize;
        let mut next = Some(url);

        while let Some(url) = next.take() {
            if pages == self.max_pages {
                warn!(path, pages, "Pagination cap reached before the last page");
                return Err(GitHubError::PageLimitExceeded(pages));
            }
            pages += 1;

            debug!(%url, page = pages, "Fetching page");
            let response = self.send(self.client.get(url)).await?;

            next = match link_header(response.headers()).as_deref().and_then(parse_next_link) {
                Some(link) => Some(self.next_page_url(&link)?),
                None => None,
            };

            match response.json::<Value>().await? {
                Value::Array(page) => items.extend(page),
                other => {
                    return Err(GitHubError::UnexpectedPayload(format!(
                        "expected a JSON array from {}, got {}",
                        path,
                        kind(&other)
                    )))
                }
            }
        }

        debug!(path, pages, count = items.len(), "Pagination finished");
        Ok(items)
    }

    /// Resolve a `next` link, refusing one that leaves the API origin so the
    /// bearer token is never sent to another host.
    fn next_page_url(&self, link: &str) -> GitHubResult<Url> {
        let url = self.url(link)?;
        if url.origin() != self.base_url.origin() {
            warn!(%url, base = %self.base_url, "Refusing next link outside the API origin");
            return Err(GitHubError::InvalidUrl(format!(
                "next page link {} is outside {}",
                url, self.base_url
            )));
        }
        Ok(url)
    }
}

/// Extract the URL of the `rel="next"` segment from a `Link` header value.
pub fn parse_next_link(link_header: &str) -> Option<String> {
    for part in link_header.split(',') {
        let mut segments = part.split(';');
        let target = segments.next().unwrap_or_default().trim();

        let is_next = segments.any(|param| match param.split_once('=') {
            Some((key, value)) => {
                key.trim().eq_ignore_ascii_case("rel") && value.trim().trim_matches('"') == "next"
            }
            None => false,
        });

        if is_next {
            let url = target.trim_start_matches('<').trim_end_matches('>').trim();
            if !url.is_empty() {
                return Some(url.to_string());
            }
        }
    }

    None
}

/// All `Link` header values joined into one, since servers may split them.
fn link_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_next_link_full() {
        let header = r#"<https://api.github.com/organizations/5430905/repos?per_page=100&page=2>; rel="next", <https://api.github.com/organizations/5430905/repos?per_page=100&page=3>; rel="last""#;

        assert_eq!(
            parse_next_link(header).as_deref(),
            Some("https://api.github.com/organizations/5430905/repos?per_page=100&page=2")
        );
    }

    #[test]
    fn test_parse_next_link_not_first_segment() {
        let header = r#"<orgs/acme/repos?per_page=100&page=1>; rel="prev", <orgs/acme/repos?per_page=100&page=3>; rel="next""#;

        assert_eq!(
            parse_next_link(header).as_deref(),
            Some("orgs/acme/repos?per_page=100&page=3")
        );
    }

    #[test]
    fn test_parse_next_link_only_last() {
        let header = r#"<orgs/acme/repos?per_page=100&page=17>; rel="last""#;
        assert_eq!(parse_next_link(header), None);
    }

    #[test]
    fn test_parse_next_link_requires_exact_relation() {
        let header = r#"<orgs/acme/repos?page=2>; rel="nextpage", <orgs/acme/repos?page=9>; rel="last""#;
        assert_eq!(parse_next_link(header), None);
    }

    #[test]
    fn test_parse_next_link_tolerates_spacing() {
        let header = r#"  <orgs/acme/repos?page=2> ;  rel = "next" "#;
        assert_eq!(parse_next_link(header).as_deref(), Some("orgs/acme/repos?page=2"));
    }

    #[test]
    fn test_parse_next_link_empty() {
        assert_eq!(parse_next_link(""), None);
    }

    #[test]
    fn test_link_header_joins_values() {
        let mut headers = HeaderMap::new();
        assert_eq!(link_header(&headers), None);

        headers.append(LINK, HeaderValue::from_static(r#"<a>; rel="prev""#));
        headers.append(LINK, HeaderValue::from_static(r#"<b>; rel="next""#));

        let joined = link_header(&headers).unwrap();
        assert_eq!(parse_next_link(&joined).as_deref(), Some("b"));
    }
}
