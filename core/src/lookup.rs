//! Resolve free-text area names (cities, countries, ...) to MusicBrainz area ids.
//!
//! Pipeline stages use this to turn a user supplied area into something the metadata
//! services can be queried with. The set operations never call it.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use crate::{config::LookupSettings, errors::LookupError};

pub type Result<T> = std::result::Result<T, LookupError>;

#[derive(Deserialize)]
struct AreaRow {
    area_id: AreaId,
}

/// The lookup server sends ids as numbers, but we hand them out as strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum AreaId {
    Number(i64),
    Text(String),
}

impl From<AreaId> for String {
    fn from(id: AreaId) -> Self {
        match id {
            AreaId::Number(id) => id.to_string(),
            AreaId::Text(id) => id,
        }
    }
}

/// Client for the area lookup service.
#[derive(Debug, Clone)]
pub struct AreaLookup {
    net: reqwest::Client,
    server_url: String,
}

impl AreaLookup {
    /// Create a client for the server described by `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Client`] if the underlying HTTP client cannot be built.
    #[inline]
    pub fn new(settings: &LookupSettings) -> Result<Self> {
        let net = reqwest::ClientBuilder::new()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(settings.timeout())
            .build()
            .map_err(LookupError::Client)?;

        Ok(Self {
            net,
            server_url: settings.server_url.clone(),
        })
    }

    #[must_use]
    #[inline]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Look up the id of the area called `area_name`.
    ///
    /// The name must be spelled exactly as it is in MusicBrainz.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent, the server doesn't answer with 200 OK,
    /// the response isn't the expected JSON, or no area has that name.
    #[instrument(skip(self))]
    pub async fn lookup(&self, area_name: &str) -> Result<String> {
        let body = serde_json::json!([{ "[area]": area_name }]);

        let response = self.net.post(&self.server_url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        let area_id = parse_lookup_response(area_name, status, &text)?;
        log::debug!("area `{area_name}` resolved to {area_id}");
        Ok(area_id)
    }
}

/// Interpret the response of the lookup server for `area_name`.
///
/// # Errors
///
/// - [`LookupError::Status`] if `status` isn't 200 OK
/// - [`LookupError::MalformedBody`] if `body` isn't a JSON list of rows with an `area_id`
/// - [`LookupError::NotFound`] if the list is empty
#[inline]
pub fn parse_lookup_response(area_name: &str, status: StatusCode, body: &str) -> Result<String> {
    if status != StatusCode::OK {
        return Err(LookupError::Status {
            status,
            body: body.to_owned(),
        });
    }

    let rows: Vec<AreaRow> = serde_json::from_str(body)?;

    rows.into_iter()
        .next()
        .map(|row| row.area_id.into())
        .ok_or_else(|| LookupError::NotFound {
            area: area_name.to_owned(),
        })
}
