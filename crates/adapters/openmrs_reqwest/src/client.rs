//! `BedBackend` implementation over the OpenMRS REST API.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use bedmgmt_app::ports::BedBackend;
use bedmgmt_domain::bed::{Bed, BedPayload};
use bedmgmt_domain::bed_type::BedType;
use bedmgmt_domain::error::BedMgmtError;
use bedmgmt_domain::id::{BedId, LocationId, LocationTagId};
use bedmgmt_domain::location::Location;

use crate::config::OpenmrsConfig;
use crate::error::OpenmrsError;

/// Path of the REST API below the web application root.
const API_PATH: &str = "ws/rest/v1/";

/// `{ "results": [...] }` envelope used by every list endpoint.
#[derive(Deserialize)]
struct Results<T> {
    results: Vec<T>,
}

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: Option<String>,
}

/// HTTP client for one OpenMRS instance.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OpenmrsClient {
    http: reqwest::Client,
    api_root: Url,
    credentials: Option<Credentials>,
}

impl OpenmrsClient {
    /// Build a client from the backend configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OpenmrsError::InvalidUrl`] when `base_url` is not an
    /// absolute URL, or [`OpenmrsError::Transport`] when the HTTP client
    /// cannot be initialised.
    pub fn new(config: &OpenmrsConfig) -> Result<Self, OpenmrsError> {
        let root = format!("{}/{API_PATH}", config.base_url.trim_end_matches('/'));
        let api_root = Url::parse(&root).map_err(|source| OpenmrsError::InvalidUrl {
            url: config.base_url.clone(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let credentials = config.username.clone().map(|username| Credentials {
            username,
            password: config.password.clone(),
        });

        Ok(Self {
            http,
            api_root,
            credentials,
        })
    }

    /// Root of the REST API, always ending with a slash.
    #[must_use]
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, OpenmrsError> {
        let mut url = self
            .api_root
            .join(path)
            .map_err(|source| OpenmrsError::InvalidUrl {
                url: format!("{}{path}", self.api_root),
                source,
            })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.credentials {
            Some(creds) => builder.basic_auth(&creds.username, creds.password.as_deref()),
            None => builder,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, OpenmrsError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(OpenmrsError::Status {
            status,
            message: error_message(&body),
        })
    }

    async fn get_results<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, OpenmrsError> {
        tracing::debug!(%url, "GET");
        let response = Self::send(self.request(Method::GET, url)).await?;
        let envelope: Results<T> = response.json().await?;
        Ok(envelope.results)
    }

    async fn get_one<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, OpenmrsError> {
        tracing::debug!(%url, "GET");
        match Self::send(self.request(Method::GET, url)).await {
            Ok(response) => Ok(Some(response.json().await?)),
            Err(OpenmrsError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn post_bed(&self, url: Url, payload: &BedPayload) -> Result<Bed, OpenmrsError> {
        tracing::debug!(%url, "POST");
        let response = Self::send(self.request(Method::POST, url).json(payload)).await?;
        Ok(response.json().await?)
    }
}

/// Pull `error.message` out of an OpenMRS error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| "no error details".to_string())
}

impl BedBackend for OpenmrsClient {
    async fn list_locations_by_tag(
        &self,
        tag: LocationTagId,
    ) -> Result<Vec<Location>, BedMgmtError> {
        let tag = tag.to_string();
        let url = self.url("location", &[("tag", &tag), ("v", "full")])?;
        Ok(self.get_results(url).await?)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, BedMgmtError> {
        let url = self.url("location", &[])?;
        Ok(self.get_results(url).await?)
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, BedMgmtError> {
        let url = self.url(&format!("location/{id}"), &[])?;
        Ok(self.get_one(url).await?)
    }

    async fn list_beds_for_location(
        &self,
        location: LocationId,
    ) -> Result<Vec<Bed>, BedMgmtError> {
        let uuid = location.to_string();
        let url = self.url("bed", &[("locationUuid", &uuid)])?;
        let mut beds: Vec<Bed> = self.get_results(url).await?;
        for bed in &mut beds {
            bed.location_uuid.get_or_insert(location);
        }
        Ok(beds)
    }

    async fn get_bed(&self, id: BedId) -> Result<Option<Bed>, BedMgmtError> {
        let url = self.url(&format!("bed/{id}"), &[])?;
        Ok(self.get_one(url).await?)
    }

    async fn list_bed_types(&self) -> Result<Vec<BedType>, BedMgmtError> {
        let url = self.url("bedtype", &[])?;
        Ok(self.get_results(url).await?)
    }

    async fn create_bed(&self, payload: BedPayload) -> Result<Bed, BedMgmtError> {
        let url = self.url("bed", &[])?;
        Ok(self.post_bed(url, &payload).await?)
    }

    async fn edit_bed(&self, id: BedId, payload: BedPayload) -> Result<Bed, BedMgmtError> {
        let url = self.url(&format!("bed/{id}"), &[])?;
        Ok(self.post_bed(url, &payload).await?)
    }
}
