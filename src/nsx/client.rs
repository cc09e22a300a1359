//! HTTP client for the NSX Manager REST API.
//!
//! Blocking requests, basic auth on every call, `Content-Type:
//! application/xml`. NSX Managers ship with self-signed certificates, so
//! certificate verification is off.

use crate::config::Config;
use crate::error::Result;
use reqwest::blocking::Client;

use super::ObjectKind;

/// Status code and raw body of one API call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> ApiResponse {
        ApiResponse {
            status,
            body: body.into(),
        }
    }
}

/// The manager operations the orchestrator drives. Split out as a trait so
/// row processing can be exercised against an in-memory manager in tests.
pub trait ManagerApi {
    /// POST `/ipset/<scope>`. 201 is the expected success status.
    fn create_ipset(&self, xml: &str) -> Result<ApiResponse>;

    /// GET `/securitygroup/scope/<scope>` or `/ipset/scope/<scope>`.
    fn list(&self, kind: ObjectKind) -> Result<ApiResponse>;

    /// PUT `/securitygroup/<group_id>/members/<member_id>`. 200 is the
    /// expected success status.
    fn add_member(&self, group_id: &str, member_id: &str) -> Result<ApiResponse>;
}

/// Real HTTP client against `https://<manager>/api/2.0/services/...`.
pub struct ManagerClient {
    http: Client,
    manager: String,
    user: String,
    password: String,
    scope: String,
}

impl ManagerClient {
    pub fn new(cfg: &Config) -> Result<ManagerClient> {
        let http = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(cfg.timeout)
            .build()?;
        Ok(ManagerClient {
            http,
            manager: cfg.manager.clone(),
            user: cfg.user.clone(),
            password: cfg.password.clone(),
            scope: cfg.scope.clone(),
        })
    }

    fn url(&self, tail: &str) -> String {
        format!("https://{}/api/2.0/services/{}", self.manager, tail)
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder) -> Result<ApiResponse> {
        let response = request
            .basic_auth(&self.user, Some(&self.password))
            .header("Content-Type", "application/xml")
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        log::debug!("status={status} body_len={}", body.len());
        Ok(ApiResponse { status, body })
    }
}

impl ManagerApi for ManagerClient {
    fn create_ipset(&self, xml: &str) -> Result<ApiResponse> {
        let url = self.url(&format!("ipset/{}", self.scope));
        log::debug!("POST {url}");
        self.send(self.http.post(&url).body(xml.to_string()))
    }

    fn list(&self, kind: ObjectKind) -> Result<ApiResponse> {
        let url = self.url(&format!("{}/scope/{}", kind.path(), self.scope));
        log::debug!("GET {url}");
        self.send(self.http.get(&url))
    }

    fn add_member(&self, group_id: &str, member_id: &str) -> Result<ApiResponse> {
        let url = self.url(&format!("securitygroup/{group_id}/members/{member_id}"));
        log::debug!("PUT {url}");
        self.send(self.http.put(&url))
    }
}
