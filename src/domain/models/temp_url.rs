use bon::Builder;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::str::FromStr;

use crate::domain::{errors::ValidationError, value_objects::SigningKey};

type HmacSha1 = Hmac<Sha1>;

/// Lifetime of a temporary URL when the caller does not pick one
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// Query parameter carrying the signature
pub const SIGNATURE_PARAM: &str = "temp_url_sig";

/// Query parameter carrying the expiry timestamp
pub const EXPIRES_PARAM: &str = "temp_url_expires";

/// HTTP verbs the tempurl middleware accepts for signed access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TempUrlMethod {
    #[default]
    Get,
    Head,
    Put,
    Post,
    Delete,
}

impl TempUrlMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TempUrlMethod::Get => "GET",
            TempUrlMethod::Head => "HEAD",
            TempUrlMethod::Put => "PUT",
            TempUrlMethod::Post => "POST",
            TempUrlMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for TempUrlMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TempUrlMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(TempUrlMethod::Get),
            "HEAD" => Ok(TempUrlMethod::Head),
            "PUT" => Ok(TempUrlMethod::Put),
            "POST" => Ok(TempUrlMethod::Post),
            "DELETE" => Ok(TempUrlMethod::Delete),
            _ => Err(ValidationError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Request for a temporary URL to a single object
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct TemporaryUrlRequest {
    /// Host URI of the object, e.g. `swift://dir/file.txt`
    #[builder(into)]
    pub uri: String,

    #[builder(default)]
    pub method: TempUrlMethod,

    /// Validity in seconds; `None` falls back to the configured default.
    /// No upper bound is enforced here.
    pub ttl_seconds: Option<u64>,
}

impl TemporaryUrlRequest {
    /// A GET request with the configured default lifetime
    pub fn get(uri: impl Into<String>) -> Self {
        Self::builder().uri(uri).build()
    }

    /// Lifetime to sign with, given the configured default
    pub fn ttl_or(&self, default_ttl: u64) -> u64 {
        self.ttl_seconds.unwrap_or(default_ttl)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.ttl_seconds {
            Some(0) => Err(ValidationError::ZeroTtl),
            Some(ttl) if i64::try_from(ttl).is_err() => Err(ValidationError::InvalidField {
                field: "ttl_seconds".to_string(),
                value: ttl.to_string(),
                expected: format!("at most {}", i64::MAX),
            }),
            _ => Ok(()),
        }
    }
}

/// A signed, time-boxed URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemporaryUrlResult {
    pub url: String,
    pub signature: String,
    /// Unix timestamp in seconds
    pub expires: i64,
    /// Path the signature covers, e.g. `/v1/AUTH_x/container/object`
    pub resource_path: String,
    pub method: TempUrlMethod,
}

/// Compute the tempurl signature: lowercase hex HMAC-SHA1 of
/// `"{method}\n{expires}\n{path}"` keyed with the account key.
pub fn compute_signature(
    key: &SigningKey,
    method: TempUrlMethod,
    expires: i64,
    resource_path: &str,
) -> String {
    let body = format!("{}\n{}\n{}", method.as_str(), expires, resource_path);

    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(body.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}
