use orgkit_utils::{HttpFetcher, JsonFetcher, Memo, access_nested_map};
use serde_json::Value;

use crate::ClientError;

/// Public GitHub REST API root.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Read-only view of one GitHub organization.
///
/// The organization document and its repository listing are each fetched at
/// most once per client; build a new client to see fresh data.
#[derive(Debug)]
pub struct GithubOrgClient<F = HttpFetcher> {
    org_name: String,
    base_url: String,
    fetcher: F,
    org: Memo<Value>,
    repos_payload: Memo<Vec<Value>>,
}

impl GithubOrgClient<HttpFetcher> {
    /// Client for `org_name` on the public API using the shared HTTP client.
    #[must_use]
    pub fn new(org_name: impl Into<String>) -> Self {
        Self::with_fetcher(org_name, DEFAULT_BASE_URL, HttpFetcher::shared())
    }
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    /// A trailing `/` on `base_url` is ignored.
    #[must_use]
    pub fn with_fetcher(
        org_name: impl Into<String>,
        base_url: impl Into<String>,
        fetcher: F,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            org_name: org_name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            fetcher,
            org: Memo::new(),
            repos_payload: Memo::new(),
        }
    }

    #[must_use]
    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.base_url, self.org_name)
    }

    /// The organization document, fetched on first access.
    pub async fn org(&self) -> Result<&Value, ClientError> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                tracing::debug!(org = %self.org_name, %url, "Fetching organization");
                Ok::<_, ClientError>(self.fetcher.get_json(&url).await?)
            })
            .await
    }

    /// `repos_url` from the organization document.
    pub async fn public_repos_url(&self) -> Result<String, ClientError> {
        let org = self.org().await?;
        access_nested_map(org, &["repos_url"])?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ClientError::unexpected_shape("repos_url", "a string"))
    }

    /// The raw repository listing, fetched on first access.
    pub async fn repos_payload(&self) -> Result<&[Value], ClientError> {
        let repos = self
            .repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                tracing::debug!(org = %self.org_name, %url, "Fetching repositories");
                let payload = self.fetcher.get_json(&url).await?;
                match payload {
                    Value::Array(repos) => Ok(repos),
                    _ => Err(ClientError::unexpected_shape(url, "a list of repositories")),
                }
            })
            .await?;
        Ok(repos.as_slice())
    }

    /// Repository names in listing order, optionally limited to one license key.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>, ClientError> {
        let mut names = Vec::new();
        for repo in self.repos_payload().await? {
            if license.is_some_and(|key| !has_license(repo, key)) {
                continue;
            }
            names.push(repo_name(repo)?);
        }
        Ok(names)
    }
}

/// Whether `repo.license.key` equals `license_key`.
///
/// A repository without a license (absent, `null`, or lacking `key`) has no
/// match.
#[must_use]
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    access_nested_map(repo, &["license", "key"])
        .ok()
        .and_then(Value::as_str)
        == Some(license_key)
}

fn repo_name(repo: &Value) -> Result<String, ClientError> {
    access_nested_map(repo, &["name"])?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ClientError::unexpected_shape("name", "a string"))
}
