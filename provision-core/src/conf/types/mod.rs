mod api;
mod mongo;
mod server;

pub use api::ApiConfig;
pub use mongo::{MONGO_DATABASE, MongoConfig};
pub use server::{CIPHER_SUITES, SECONDS_PER_DAY, ServerConfig, cipher_key, hsts_seconds};

/// The documents that make up a configuration directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFile {
    Server,
    Api,
    Mongo,
}

impl ConfigFile {
    pub const ALL: [ConfigFile; 3] = [ConfigFile::Server, ConfigFile::Api, ConfigFile::Mongo];

    pub fn file_name(self) -> &'static str {
        match self {
            ConfigFile::Server => "server.json",
            ConfigFile::Api => "api.json",
            ConfigFile::Mongo => "mongo.json",
        }
    }
}
