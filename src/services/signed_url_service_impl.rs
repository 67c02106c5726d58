use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::{
    domain::{
        errors::{SignedUrlResult, ValidationError},
        models::{
            compute_signature, AdapterSettings, TempUrlMethod, TemporaryUrlRequest,
            TemporaryUrlResult, EXPIRES_PARAM, SIGNATURE_PARAM,
        },
        value_objects::{ContainerName, ObjectPath, SigningKey},
    },
    ports::services::SignedUrlService,
    services::{CatalogResolver, KeyStore},
};

/// Generates temporary URLs signed with the account key
#[derive(Clone)]
pub struct SignedUrlServiceImpl {
    key_store: Arc<KeyStore>,
    catalog: CatalogResolver,
    container: ContainerName,
    default_ttl: u64,
}

impl SignedUrlServiceImpl {
    pub fn new(key_store: Arc<KeyStore>, catalog: CatalogResolver, settings: &AdapterSettings) -> Self {
        Self {
            key_store,
            catalog,
            container: settings.container().clone(),
            default_ttl: settings.default_ttl(),
        }
    }
}

#[async_trait]
impl SignedUrlService for SignedUrlServiceImpl {
    async fn generate(&self, request: TemporaryUrlRequest) -> SignedUrlResult<TemporaryUrlResult> {
        request.validate()?;
        let object = ObjectPath::from_uri(&request.uri)?;

        let key = self.key_store.get_or_create_key().await?;
        let base = self.catalog.resolve().await?;

        let ttl = request.ttl_or(self.default_ttl);
        let now = Utc::now().timestamp();
        let expires = i64::try_from(ttl)
            .ok()
            .and_then(|ttl| now.checked_add(ttl))
            .ok_or_else(|| ValidationError::InvalidField {
                field: "ttl_seconds".to_string(),
                value: ttl.to_string(),
                expected: "an expiry representable as a Unix timestamp".to_string(),
            })?;

        let result = sign_object_url(&base, &self.container, &object, &key, request.method, expires);
        debug!(
            container = %self.container,
            object = %object,
            method = %request.method,
            expires,
            "Generated temporary URL"
        );

        Ok(result)
    }

    async fn external_url(&self, uri: &str) -> SignedUrlResult<String> {
        Ok(self.generate(TemporaryUrlRequest::get(uri)).await?.url)
    }
}

/// Sign `{base path}/{container}/{object}` and assemble the final URL.
///
/// The signature covers the decoded path, which is what Swift recomputes
/// the HMAC over; the URL itself carries the percent-encoded form.
pub fn sign_object_url(
    base: &Url,
    container: &ContainerName,
    object: &ObjectPath,
    key: &SigningKey,
    method: TempUrlMethod,
    expires: i64,
) -> TemporaryUrlResult {
    let mut endpoint = base.clone();
    endpoint.set_query(None);
    endpoint.set_fragment(None);

    let base_path = urlencoding::decode(endpoint.path())
        .map(|path| path.into_owned())
        .unwrap_or_else(|_| endpoint.path().to_string());
    let resource_path = format!(
        "{}/{}/{}",
        base_path.trim_end_matches('/'),
        container,
        object
    );

    let signature = compute_signature(key, method, expires, &resource_path);

    let url = format!(
        "{}/{}/{}?{}={}&{}={}",
        endpoint.as_str().trim_end_matches('/'),
        urlencoding::encode(container.as_str()),
        object.to_url_path(),
        SIGNATURE_PARAM,
        signature,
        EXPIRES_PARAM,
        expires
    );

    TemporaryUrlResult {
        url,
        signature,
        expires,
        resource_path,
        method,
    }
}
