use crate::conf::types::cipher_key;
use crate::conf::{ApiConfig, ConfigFile, GeneratedConfig, MongoConfig, ServerConfig};
use crate::validation::report::{Origin, ValidationReport};
use std::path::Path;
use uuid::{Uuid, Version};

/// Check a loaded configuration directory for problems that would stop the
/// server from starting, or that look like operator mistakes.
pub fn validate(config: &GeneratedConfig, dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    validate_server(
        &config.server,
        &Origin::in_dir(dir, ConfigFile::Server.file_name()),
        &mut report,
    );
    validate_api(
        &config.api,
        &Origin::in_dir(dir, ConfigFile::Api.file_name()),
        &mut report,
    );
    validate_mongo(
        &config.mongo,
        &Origin::in_dir(dir, ConfigFile::Mongo.file_name()),
        &mut report,
    );

    report
}

pub(crate) fn validate_server(server: &ServerConfig, origin: &Origin, report: &mut ValidationReport) {
    for cert in [&server.priv_key_path, &server.fullchain_path] {
        let path = Path::new(cert);
        if !path.exists() {
            report.missing_cert_file(cert, origin);
        } else if !path.is_file() {
            report.cert_path_not_a_file(cert, origin);
        }
    }

    for (field, value) in [
        ("clientId", &server.client_id),
        ("adminSecret", &server.admin_secret),
    ] {
        if !is_uuid_v4(value) {
            report.invalid_identifier(field, origin);
        }
    }

    if server.cipher_key != cipher_key() {
        report.unexpected_cipher_key(origin);
    }

    for (field, port) in [
        ("httpPort", server.http_port),
        ("httpsPort", server.https_port),
        ("monitorPort", server.monitor_port),
    ] {
        if port == 0 {
            report.zero_port(field, origin);
        }
    }

    if server.http_port != 0 && server.http_port == server.https_port {
        report.http_and_https_share_port(server.http_port, origin);
    }

    if server.hsts_time_limit == 0 {
        report.hsts_disabled(origin);
    }
}

pub(crate) fn validate_api(api: &ApiConfig, origin: &Origin, report: &mut ValidationReport) {
    for (field, value) in [
        ("wordsKey", &api.words_key),
        ("googleProjectId", &api.google_project_id),
        ("azureKey", &api.azure_key),
        ("yandexKey", &api.yandex_key),
    ] {
        if value.is_empty() {
            report.empty_api_key(field, origin);
        }
    }
}

pub(crate) fn validate_mongo(mongo: &MongoConfig, origin: &Origin, report: &mut ValidationReport) {
    if !mongo.url.starts_with("mongodb://") {
        report.invalid_mongo_url(&mongo.url, origin);
    }
}

fn is_uuid_v4(value: &str) -> bool {
    Uuid::parse_str(value).is_ok_and(|id| id.get_version() == Some(Version::Random))
}
