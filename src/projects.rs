use std::sync::LazyLock;

use dashmap::DashMap;
use http::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::state::Categorized;

/// Successful project lists, keyed by endpoint URL, kept for the session so
/// remounting the section doesn't hit the endpoint again.
pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "id_string", alias = "_id")]
    pub id: String,
    #[serde(alias = "name")]
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    pub category: String,
}

impl Project {
    pub fn image_or_placeholder(&self) -> &str {
        self.image
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("/placeholder.svg")
    }
}

impl Categorized for Project {
    fn category(&self) -> &str {
        &self.category
    }
}

// The endpoint has used both numeric and string ids.
fn id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Num(i64),
        Str(String),
    }
    Ok(match Id::deserialize(d)? {
        Id::Num(n) => n.to_string(),
        Id::Str(s) => s,
    })
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectsError {
    #[error("Failed to fetch projects (status {0})")]
    Status(u16),
    #[error("Failed to fetch projects: {0}")]
    Network(String),
    #[error("Failed to read projects: {0}")]
    Decode(String),
}

/// Interprets an endpoint response. Any non-2xx status is a fetch error; a
/// successful body is taken as the complete list.
pub fn decode_projects(status: u16, body: &str) -> Result<Vec<Project>, ProjectsError> {
    let ok = StatusCode::from_u16(status).is_ok_and(|s| s.is_success());
    if !ok {
        return Err(ProjectsError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| ProjectsError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get(url: &str) -> Result<Vec<Project>, ProjectsError> {
    use gloo_net::http::Request;

    let res = Request::get(url)
        .send()
        .await
        .map_err(|e| ProjectsError::Network(e.to_string()))?;
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| ProjectsError::Network(e.to_string()))?;
    decode_projects(status, &body)
}

#[cfg(not(feature = "hydrate"))]
async fn get(_url: &str) -> Result<Vec<Project>, ProjectsError> {
    Err(ProjectsError::Network(
        "projects are fetched in the browser".to_string(),
    ))
}

/// Single attempt; failures are not cached so a reload tries again.
pub async fn fetch_projects(url: String) -> Result<Vec<Project>, ProjectsError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(hit) = cache.get(&url) {
        return Ok(hit.clone());
    }
    log::info!("fetching projects from {url}");
    match get(&url).await {
        Ok(projects) => {
            log::info!("loaded {} projects", projects.len());
            cache.insert(url, projects.clone());
            Ok(projects)
        }
        Err(e) => {
            log::error!("error fetching projects: {e}");
            Err(e)
        }
    }
}

/// What the projects section shows once the fetch settles: a list or an
/// error, never both. While pending the section shows its skeletons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsState {
    Loaded(Vec<Project>),
    Failed(String),
}

impl From<Result<Vec<Project>, ProjectsError>> for ProjectsState {
    fn from(res: Result<Vec<Project>, ProjectsError>) -> Self {
        match res {
            Ok(list) => ProjectsState::Loaded(list),
            Err(e) => ProjectsState::Failed(e.to_string()),
        }
    }
}
