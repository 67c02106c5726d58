//! Identity v3 (Keystone) password-auth wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::models::{
    AuthToken, CatalogEndpoint, CatalogService, Interface, ServiceCatalog, UserCredentials,
    UserIdentity,
};

/// Header carrying the issued token id
pub const SUBJECT_TOKEN_HEADER: &str = "x-subject-token";

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    auth: AuthDto<'a>,
}

#[derive(Debug, Serialize)]
struct AuthDto<'a> {
    identity: IdentityDto<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<ScopeDto<'a>>,
}

#[derive(Debug, Serialize)]
struct IdentityDto<'a> {
    methods: [&'static str; 1],
    password: PasswordDto<'a>,
}

#[derive(Debug, Serialize)]
struct PasswordDto<'a> {
    user: UserDto<'a>,
}

#[derive(Debug, Serialize)]
struct UserDto<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<NamedDto<'a>>,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct NamedDto<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct ScopeDto<'a> {
    project: ProjectDto<'a>,
}

#[derive(Debug, Serialize)]
struct ProjectDto<'a> {
    id: &'a str,
}

impl<'a> TokenRequest<'a> {
    /// Password authentication, optionally scoped to a project
    pub fn password(user: &'a UserCredentials, project_id: Option<&'a str>) -> Self {
        let user_dto = match user.identity() {
            UserIdentity::Id(id) => UserDto {
                id: Some(id.as_str()),
                name: None,
                domain: None,
                password: user.password(),
            },
            UserIdentity::Name { name, domain } => UserDto {
                id: None,
                name: Some(name.as_str()),
                domain: Some(NamedDto {
                    name: domain.as_str(),
                }),
                password: user.password(),
            },
        };

        Self {
            auth: AuthDto {
                identity: IdentityDto {
                    methods: ["password"],
                    password: PasswordDto { user: user_dto },
                },
                scope: project_id.map(|id| ScopeDto {
                    project: ProjectDto { id },
                }),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    token: TokenBody,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    catalog: Vec<CatalogServiceDto>,
}

#[derive(Debug, Deserialize)]
struct CatalogServiceDto {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    service_type: String,
    #[serde(default)]
    endpoints: Vec<EndpointDto>,
}

#[derive(Debug, Deserialize)]
struct EndpointDto {
    #[serde(default)]
    region_id: Option<String>,
    #[serde(default)]
    region: Option<String>,
    interface: String,
    url: String,
}

impl TokenResponse {
    /// Combine the response body with the token id from the response header
    pub fn into_token(self, id: String) -> AuthToken {
        let services = self
            .token
            .catalog
            .into_iter()
            .map(|service| CatalogService {
                name: service.name,
                service_type: service.service_type,
                endpoints: service
                    .endpoints
                    .into_iter()
                    .filter_map(|endpoint| {
                        let interface = match endpoint.interface.parse::<Interface>() {
                            Ok(interface) => interface,
                            Err(_) => {
                                debug!(interface = %endpoint.interface, "Skipping endpoint");
                                return None;
                            }
                        };
                        Some(CatalogEndpoint {
                            region: endpoint.region_id.or(endpoint.region).unwrap_or_default(),
                            interface,
                            url: endpoint.url,
                        })
                    })
                    .collect(),
            })
            .collect();

        AuthToken {
            id,
            expires_at: self.token.expires_at,
            catalog: ServiceCatalog::new(services),
        }
    }
}
