use configid_client::{ClientConfig, ClientError, HttpProvisioningClient, DEFAULT_BASE_URL};

#[test]
fn config_default() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.timeout_secs, 30);
    assert_eq!(cfg.connect_timeout_secs, 10);
    assert!(cfg.user_agent.starts_with("configid/"));
}

#[test]
fn config_with_base_url_keeps_default_timeouts() {
    let cfg = ClientConfig::with_base_url("http://localhost:8080");
    assert_eq!(cfg.base_url, "http://localhost:8080");
    assert_eq!(cfg.timeout_secs, 30);
}

#[test]
fn config_serde_fills_missing_fields() {
    let cfg: ClientConfig =
        serde_json::from_str(r#"{"base_url":"http://127.0.0.1:9000"}"#).unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.timeout_secs, 30);
    assert_eq!(cfg.connect_timeout_secs, 10);
}

#[test]
fn endpoint_appends_configs() {
    let cfg = ClientConfig::with_base_url("https://provisioning.test/v5");
    let endpoint = cfg.configs_endpoint().unwrap();
    assert_eq!(endpoint.as_str(), "https://provisioning.test/v5/configs");
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    let cfg = ClientConfig::with_base_url("https://provisioning.test/v5/");
    let endpoint = cfg.configs_endpoint().unwrap();
    assert_eq!(endpoint.as_str(), "https://provisioning.test/v5/configs");
}

#[test]
fn endpoint_rejects_garbage() {
    let cfg = ClientConfig::with_base_url("not a url");
    assert!(matches!(
        cfg.configs_endpoint(),
        Err(ClientError::InvalidConfig(_))
    ));
}

#[test]
fn endpoint_rejects_non_http_scheme() {
    let cfg = ClientConfig::with_base_url("ftp://provisioning.test");
    let err = cfg.configs_endpoint().unwrap_err();
    assert!(format!("{err}").contains("ftp"));
}

#[test]
fn zero_timeout_is_rejected() {
    let cfg = ClientConfig {
        timeout_secs: 0,
        ..Default::default()
    };
    assert!(HttpProvisioningClient::new(cfg).is_err());
}

#[test]
fn client_exposes_endpoint() {
    let client =
        HttpProvisioningClient::new(ClientConfig::with_base_url("http://localhost:1234")).unwrap();
    assert_eq!(client.endpoint().as_str(), "http://localhost:1234/configs");
}
