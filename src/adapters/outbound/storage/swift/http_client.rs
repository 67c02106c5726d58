use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use super::error::SwiftClientError;
use super::keystone::{TokenRequest, TokenResponse, SUBJECT_TOKEN_HEADER};
use crate::{
    domain::{
        errors::{SwiftError, SwiftResult},
        models::{AccountMetadata, AdapterSettings, AuthToken, ContainerMetadata, UserCredentials},
        value_objects::{ContainerName, SigningKey},
    },
    ports::backend::SwiftBackend,
};

const AUTH_TOKEN_HEADER: &str = "x-auth-token";
const TEMP_URL_KEY_HEADER: &str = "x-account-meta-temp-url-key";
const TEMP_URL_KEY_2_HEADER: &str = "x-account-meta-temp-url-key-2";

/// Connection settings for the identity and object-store endpoints
#[derive(Debug, Clone)]
pub struct SwiftClientConfig {
    /// Identity v3 base URL, e.g. `https://keystone.example.com/v3`
    pub auth_url: String,
    /// Project the token is scoped to
    pub project_id: Option<String>,
    pub timeout: Duration,
}

impl SwiftClientConfig {
    pub fn new(auth_url: impl Into<String>) -> Self {
        Self {
            auth_url: auth_url.into(),
            project_id: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// SwiftBackend speaking Identity v3 and the Swift account/container API over HTTP
pub struct SwiftHttpClient {
    client: Client,
    config: SwiftClientConfig,
    settings: AdapterSettings,
}

impl SwiftHttpClient {
    pub fn new(config: SwiftClientConfig, settings: AdapterSettings) -> Result<Self, SwiftClientError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            config,
            settings,
        })
    }

    fn token_url(&self) -> String {
        format!("{}/auth/tokens", self.config.auth_url.trim_end_matches('/'))
    }

    async fn request_token(&self, user: &UserCredentials) -> Result<AuthToken, SwiftClientError> {
        let response = self
            .client
            .post(self.token_url())
            .json(&TokenRequest::password(user, self.config.project_id.as_deref()))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let id = response
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or(SwiftClientError::MissingSubjectToken)?;

        let body = response.bytes().await?;
        let token: TokenResponse = serde_json::from_slice(&body)?;
        Ok(token.into_token(id))
    }

    /// Issue a token for the configured user and pick the storage URL from its catalog
    async fn session(&self) -> SwiftResult<(String, String)> {
        let token = self.issue_token(self.settings.user()).await?;
        let service = self.settings.service();

        let storage_url = token
            .catalog
            .service_url(
                &service.name,
                &service.service_type,
                self.settings.region(),
                service.interface,
            )
            .map(|url| url.trim_end_matches('/').to_string())
            .ok_or_else(|| SwiftClientError::NoStorageEndpoint {
                service_type: service.service_type.clone(),
                region: self.settings.region().to_string(),
                interface: service.interface.to_string(),
            })?;

        Ok((token.id, storage_url))
    }
}

#[async_trait]
impl SwiftBackend for SwiftHttpClient {
    async fn fetch_account(&self) -> SwiftResult<AccountMetadata> {
        let (token, storage_url) = self.session().await?;

        let response = self
            .client
            .head(&storage_url)
            .header(AUTH_TOKEN_HEADER, &token)
            .send()
            .await
            .map_err(|e| SwiftError::AccountUnreachable {
                status: None,
                message: e.to_string(),
            })?;

        match response.status() {
            status if status.is_success() => Ok(account_metadata(response.headers())),
            StatusCode::UNAUTHORIZED => Err(SwiftError::Unauthorized {
                message: format!("HEAD {}", storage_url),
            }),
            status => Err(SwiftError::AccountUnreachable {
                status: Some(status.as_u16()),
                message: format!("HEAD {}", storage_url),
            }),
        }
    }

    async fn write_temp_url_key(&self, key: &SigningKey) -> SwiftResult<()> {
        let (token, storage_url) = self.session().await?;

        let response = self
            .client
            .post(&storage_url)
            .header(AUTH_TOKEN_HEADER, &token)
            .header(TEMP_URL_KEY_HEADER, key.expose())
            .send()
            .await
            .map_err(SwiftClientError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SwiftError::WriteRejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        info!(account = %storage_url, "Stored temporary URL key on account");
        Ok(())
    }

    async fn issue_token(&self, user: &UserCredentials) -> SwiftResult<AuthToken> {
        match self.request_token(user).await {
            Ok(token) => {
                debug!(expires_at = ?token.expires_at, "Issued identity token");
                Ok(token)
            }
            Err(SwiftClientError::Http { status, message }) => {
                Err(SwiftError::TokenRejected { status, message })
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn head_container(&self, container: &ContainerName) -> SwiftResult<ContainerMetadata> {
        let (token, storage_url) = self.session().await?;
        let url = format!(
            "{}/{}",
            storage_url,
            urlencoding::encode(container.as_str())
        );

        let response = self
            .client
            .head(&url)
            .header(AUTH_TOKEN_HEADER, &token)
            .send()
            .await
            .map_err(SwiftClientError::from)?;

        match response.status() {
            status if status.is_success() => Ok(ContainerMetadata {
                name: container.clone(),
                object_count: header_u64(response.headers(), "x-container-object-count"),
                bytes_used: header_u64(response.headers(), "x-container-bytes-used"),
            }),
            StatusCode::NOT_FOUND => Err(SwiftError::ContainerNotFound {
                container: container.clone(),
            }),
            StatusCode::UNAUTHORIZED => Err(SwiftError::Unauthorized {
                message: format!("HEAD {}", url),
            }),
            status => Err(SwiftError::UnexpectedStatus {
                status: status.as_u16(),
                message: format!("HEAD {}", url),
            }),
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, SwiftClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(SwiftClientError::Http {
        status: status.as_u16(),
        message: if message.is_empty() {
            status.to_string()
        } else {
            message
        },
    })
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    header_str(headers, name).and_then(|value| value.trim().parse().ok())
}

fn header_key(headers: &HeaderMap, name: &str) -> Option<SigningKey> {
    header_str(headers, name).and_then(|value| SigningKey::new(value.trim()).ok())
}

fn account_metadata(headers: &HeaderMap) -> AccountMetadata {
    AccountMetadata {
        temp_url_key: header_key(headers, TEMP_URL_KEY_HEADER),
        temp_url_key_2: header_key(headers, TEMP_URL_KEY_2_HEADER),
        container_count: header_u64(headers, "x-account-container-count"),
        object_count: header_u64(headers, "x-account-object-count"),
        bytes_used: header_u64(headers, "x-account-bytes-used"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_account_metadata_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Account-Meta-Temp-URL-Key", HeaderValue::from_static("secret"));
        headers.insert("X-Account-Container-Count", HeaderValue::from_static("3"));
        headers.insert("X-Account-Bytes-Used", HeaderValue::from_static("not-a-number"));

        let metadata = account_metadata(&headers);
        assert_eq!(metadata.temp_url_key.unwrap().expose(), "secret");
        assert!(metadata.temp_url_key_2.is_none());
        assert_eq!(metadata.container_count, Some(3));
        assert_eq!(metadata.bytes_used, None);
    }

    #[test]
    fn test_empty_key_header_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Account-Meta-Temp-URL-Key", HeaderValue::from_static(""));

        assert!(account_metadata(&headers).temp_url_key.is_none());
    }

    #[test]
    fn test_token_url_trims_trailing_slash() {
        let settings = AdapterSettings::new(
            "mycontainer",
            "RegionOne",
            UserCredentials::by_id("user", "password").unwrap(),
        )
        .unwrap();
        let client =
            SwiftHttpClient::new(SwiftClientConfig::new("http://keystone:5000/v3/"), settings)
                .unwrap();

        assert_eq!(client.token_url(), "http://keystone:5000/v3/auth/tokens");
    }
}
