use crate::registry::types::{ErrorBody, NewOrganization, Organization, OrganizationList};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("no detail"))]
    Api { status: u16, message: Option<String> },
}

impl RegistryError {
    /// Human-readable message from the failure payload, when the backend
    /// provided one. Transport failures and bodies without an
    /// `error_message` field yield `None`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RegistryError::Api { message, .. } => message.as_deref(),
            RegistryError::Transport(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Clone, Debug)]
pub struct RegistryClient {
    base_url: String,
    http: reqwest::Client,
}

impl RegistryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        let url = format!("{}/api/v1/organizations", self.base_url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let list: OrganizationList = response.json().await?;
        Ok(list.organizations)
    }

    pub async fn create_organization(&self, organization: &NewOrganization) -> Result<()> {
        let url = format!("{}/api/v1/organizations", self.base_url);

        let response = self.http.post(&url).json(organization).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }

    pub async fn delete_organization(&self, name: &str) -> Result<()> {
        let url = organization_url(&self.base_url, name);

        let response = self.http.delete(&url).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }
}

fn organization_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/api/v1/organizations/{}",
        base_url,
        urlencoding::encode(name)
    )
}

async fn error_from_response(response: reqwest::Response) -> RegistryError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    RegistryError::Api {
        status,
        message: parse_error_message(&body),
    }
}

fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok()?.error_message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = RegistryClient::new("https://registry.example.com/");
        assert_eq!(client.base_url, "https://registry.example.com");
    }

    #[test]
    fn test_organization_url_encodes_name() {
        assert_eq!(
            organization_url("https://registry.example.com", "acme"),
            "https://registry.example.com/api/v1/organizations/acme"
        );
        assert_eq!(
            organization_url("https://registry.example.com", "acme corp/eu"),
            "https://registry.example.com/api/v1/organizations/acme%20corp%2Feu"
        );
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse_error_message(r#"{"error_message": "quota exceeded"}"#).as_deref(),
            Some("quota exceeded")
        );
        assert_eq!(
            parse_error_message(r#"{"status": 400, "error_message": "nope", "title": "x"}"#)
                .as_deref(),
            Some("nope")
        );
        assert_eq!(parse_error_message(r#"{"status": 500}"#), None);
        assert_eq!(parse_error_message(""), None);
        assert_eq!(parse_error_message("<html>502</html>"), None);
    }

    #[test]
    fn test_error_message_accessor() {
        let with_message = RegistryError::Api {
            status: 400,
            message: Some("quota exceeded".to_string()),
        };
        assert_eq!(with_message.error_message(), Some("quota exceeded"));

        let without_message = RegistryError::Api {
            status: 500,
            message: None,
        };
        assert_eq!(without_message.error_message(), None);
    }

    #[test]
    fn test_api_error_display() {
        let err = RegistryError::Api {
            status: 403,
            message: Some("not allowed".to_string()),
        };
        assert_eq!(err.to_string(), "backend returned 403: not allowed");

        let bare = RegistryError::Api {
            status: 502,
            message: None,
        };
        assert_eq!(bare.to_string(), "backend returned 502: no detail");
    }

    #[tokio::test]
    #[ignore]
    async fn test_list_organizations_against_live_backend() {
        let client = RegistryClient::new("http://localhost:8080");
        let result = client.list_organizations().await;
        assert!(result.is_ok());
    }
}
