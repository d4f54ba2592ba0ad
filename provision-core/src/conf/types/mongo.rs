use serde::{Deserialize, Serialize};

pub const MONGO_DATABASE: &str = "MeetKai";

/// Contents of `mongo.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MongoConfig {
    pub url: String,
}

impl MongoConfig {
    pub fn for_local_port(port: u16) -> Self {
        Self {
            url: format!("mongodb://localhost:{port}/{MONGO_DATABASE}"),
        }
    }
}
