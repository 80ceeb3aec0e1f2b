use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::error::{Result, TeamsError};
use crate::types::Team;

/// Body of `GET /teams`.
#[derive(Deserialize, Debug)]
pub struct ListTeamsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<Team>,
    pub message: Option<String>,
}

/// Body of `GET /teams/search`. There is no success flag on this endpoint.
#[derive(Deserialize, Debug)]
pub struct SearchTeamsResponse {
    #[serde(default)]
    pub data: Vec<Team>,
}

/// Remote source of team records.
#[allow(async_fn_in_trait)]
pub trait TeamsApi {
    async fn list_teams(&self) -> Result<ListTeamsResponse>;

    async fn search_teams(&self, query: &str) -> Result<SearchTeamsResponse>;
}

pub struct TeamsClient {
    http: Client,
    base_url: Url,
    auth_token: Option<String>,
}

impl TeamsClient {
    pub fn new(api_url: &str, auth_token: Option<String>) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            base_url: parse_base_url(api_url)?,
            auth_token,
        })
    }

    pub fn teams_url(&self) -> Url {
        endpoint(&self.base_url, "teams")
    }

    pub fn search_url(&self, query: &str) -> Url {
        let mut url = endpoint(&self.base_url, "teams/search");
        url.query_pairs_mut().append_pair("q", query);
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");

        let mut request = self.http.get(url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response");

        decode_body(status, &body)
    }
}

impl TeamsApi for TeamsClient {
    async fn list_teams(&self) -> Result<ListTeamsResponse> {
        self.get(self.teams_url()).await
    }

    async fn search_teams(&self, query: &str) -> Result<SearchTeamsResponse> {
        self.get(self.search_url(query)).await
    }
}

/// Parse the configured API root, making sure relative joins keep its path.
fn parse_base_url(api_url: &str) -> Result<Url> {
    let mut normalized = api_url.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }

    Url::parse(&normalized).map_err(|source| TeamsError::InvalidUrl {
        url: api_url.to_string(),
        source,
    })
}

fn endpoint(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(path.split('/'));
    }
    url
}

/// Error statuses still carry a JSON body the callers understand, so only a
/// body that fails to decode turns into an error.
fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        if status.is_success() {
            TeamsError::Decode(e)
        } else {
            TeamsError::ApiError {
                status: status.as_u16(),
                message: body.to_string(),
            }
        }
    })
}
