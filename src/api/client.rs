use crate::domain::model::{Collection, Link, NewLink, Tag};
use crate::domain::ports::CredentialsProvider;
use crate::utils::error::{LinkdockError, Result};
use crate::utils::validation::Validate;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use url::Url;

/// Client for the bookmark service's JSON API.
///
/// Construction never fails and does not check that credentials are present;
/// the dispatcher verifies the stored configuration before building one.
/// Operations that reach the service with bad credentials surface
/// [`LinkdockError::AuthenticationError`].
pub struct ApiClient {
    host: String,
    user: String,
    access_token: String,
    client: Client,
}

impl ApiClient {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            access_token: access_token.into(),
            client: Client::new(),
        }
    }

    pub fn from_provider<C: CredentialsProvider>(provider: &C) -> Self {
        Self::new(provider.host(), provider.user(), provider.access_token())
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = Url::parse(&self.host)
            .and_then(|host| host.join("api/v1/"))
            .map_err(|e| LinkdockError::ConfigError {
                message: format!("invalid host '{}': {}", self.host, e),
            })?;
        base.join(endpoint).map_err(|e| LinkdockError::ConfigError {
            message: format!("invalid endpoint '{}': {}", endpoint, e),
        })
    }

    async fn read_body(&self, response: Response, endpoint: &str) -> Result<Value> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(LinkdockError::AuthenticationError {
                status: status.as_u16(),
            });
        }
        if status == StatusCode::NOT_FOUND {
            return Err(LinkdockError::NotFound {
                endpoint: endpoint.to_string(),
            });
        }
        if !status.is_success() {
            return Err(LinkdockError::ProtocolError {
                message: format!("API request failed with status {}", status),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Perform a GET request and unwrap the payload from the body's
    /// `response` envelope. Read endpoints wrap their payload this way;
    /// write endpoints do not.
    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let body = self.read_body(response, endpoint).await?;
        match body.get("response") {
            Some(payload) => Ok(payload.clone()),
            None => Err(LinkdockError::ProtocolError {
                message: format!("response envelope missing for GET {}", endpoint),
            }),
        }
    }

    /// Perform a POST request and return the full response body.
    pub async fn post(&self, endpoint: &str, data: &Value) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(data)
            .send()
            .await?;
        self.read_body(response, endpoint).await
    }

    /// Perform a PUT request and return the full response body.
    pub async fn put(&self, endpoint: &str, data: &Value) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("PUT {}", url);
        let response = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .json(data)
            .send()
            .await?;
        self.read_body(response, endpoint).await
    }

    /// Perform a PATCH request and return the full response body.
    pub async fn patch(&self, endpoint: &str, data: &Value) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("PATCH {}", url);
        let response = self
            .client
            .patch(url)
            .bearer_auth(&self.access_token)
            .json(data)
            .send()
            .await?;
        self.read_body(response, endpoint).await
    }

    /// Perform a DELETE request and return the full response body.
    pub async fn delete(&self, endpoint: &str) -> Result<Value> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        self.read_body(response, endpoint).await
    }

    /// Fetch all links, in the order the service returns them.
    pub async fn get_links(&self) -> Result<Vec<Link>> {
        let raw = self.get("links").await?;
        let items = raw.as_array().ok_or_else(|| LinkdockError::ProtocolError {
            message: "expected an array of links".to_string(),
        })?;
        items.iter().map(Link::parse).collect()
    }

    /// Fetch a single link by id. A missing id surfaces
    /// [`LinkdockError::NotFound`].
    pub async fn get_link(&self, link_id: i64) -> Result<Link> {
        let raw = self.get(&format!("links/{}", link_id)).await?;
        Link::parse(&raw)
    }

    pub async fn get_tags(&self) -> Result<Vec<Tag>> {
        let raw = self.get("tags").await?;
        let items = raw.as_array().ok_or_else(|| LinkdockError::ProtocolError {
            message: "expected an array of tags".to_string(),
        })?;
        items.iter().map(Tag::parse).collect()
    }

    pub async fn get_collections(&self) -> Result<Vec<Collection>> {
        let raw = self.get("collections").await?;
        let items = raw.as_array().ok_or_else(|| LinkdockError::ProtocolError {
            message: "expected an array of collections".to_string(),
        })?;
        items.iter().map(Collection::parse).collect()
    }

    /// Create a link. Field bounds are enforced locally before the request
    /// goes out; the response body is the created link, not an envelope.
    pub async fn create_link(&self, link: &NewLink) -> Result<Link> {
        link.validate()?;
        let body = serde_json::to_value(link)?;
        let raw = self.post("links", &body).await?;
        Link::parse(&raw)
    }

    /// Exchange the stored credentials for a session token.
    ///
    /// Standalone capability: every other operation authenticates with the
    /// long-lived access token directly, and nothing requires this handshake
    /// first.
    pub async fn authenticate(&self) -> Result<Value> {
        let url = self.endpoint_url("session")?;
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .form(&[
                ("username", self.user.as_str()),
                ("password", self.access_token.as_str()),
                ("session_name", session_name().as_str()),
            ])
            .send()
            .await?;
        self.read_body(response, "session").await
    }
}

fn session_name() -> String {
    let hostname =
        sysinfo::System::host_name().unwrap_or_else(|| "unknown-host".to_string());
    format!("linkdock @ {}", hostname)
}
