use serde::{Deserialize, Serialize};

/// Contents of `api.json`. Values are stored exactly as the operator typed them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub words_key: String,
    pub google_project_id: String,
    pub azure_key: String,
    pub yandex_key: String,
}
