use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Organization {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewOrganization {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct OrganizationList {
    pub organizations: Vec<Organization>,
}

/// Body shape of a non-2xx backend response. Every field is optional;
/// a body that fails to parse is treated the same as an empty one.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ErrorBody {
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
        }
    }
}
