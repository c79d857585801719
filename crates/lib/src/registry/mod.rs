//! Client for the remote component registry.
//!
//! The registry serves three read-only, unauthenticated endpoints:
//! - `GET {base}/themes` lists available themes
//! - `GET {base}/init?theme={name}` returns the init payload for a theme
//! - `GET {base}/components/{name}` returns a single component
//!
//! Each call is a single attempt. There is no retry, cache or timeout.

mod types;

use std::future::Future;

use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info};

use crate::consts::APP_NAME;

pub use types::{ComponentFile, ComponentPayload, InitPayload, Theme};

/// Errors returned by registry calls.
#[derive(Debug, Error)]
pub enum RegistryError {
  /// The HTTP client could not be constructed.
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),

  /// The base URL cannot carry endpoint paths.
  #[error("invalid registry URL '{url}': {message}")]
  InvalidUrl { url: String, message: String },

  /// The request never produced a response.
  #[error("could not reach registry at {url}: {source}")]
  Network {
    url: String,
    #[source]
    source: reqwest::Error,
  },

  /// The registry answered, but not with what we asked for.
  #[error("registry error for {url}: {message}")]
  Service { url: String, message: String },
}

/// Read operations against the component registry.
pub trait Registry {
  /// Lists the themes available for `init`.
  fn list_themes(&self) -> impl Future<Output = Result<Vec<Theme>, RegistryError>> + Send;

  /// Fetches the stylesheet and dependency list for `theme_name`.
  fn fetch_init_data(&self, theme_name: &str) -> impl Future<Output = Result<InitPayload, RegistryError>> + Send;

  /// Fetches a single component by name.
  fn fetch_component(&self, name: &str) -> impl Future<Output = Result<ComponentPayload, RegistryError>> + Send;
}

/// [`Registry`] implementation over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
  client: reqwest::Client,
  base_url: String,
  base: Url,
}

impl HttpRegistry {
  /// Creates a client for the registry at `base_url`.
  pub fn new(base_url: impl Into<String>) -> Result<Self, RegistryError> {
    let client = reqwest::Client::builder()
      .user_agent(format!("{}/{}", APP_NAME, env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(RegistryError::Client)?;

    let base_url = base_url.into().trim_end_matches('/').to_string();
    let base = Url::parse(&base_url).map_err(|e| RegistryError::InvalidUrl {
      url: base_url.clone(),
      message: e.to_string(),
    })?;
    if base.cannot_be_a_base() {
      return Err(RegistryError::InvalidUrl {
        url: base_url,
        message: "not a hierarchical URL".to_string(),
      });
    }

    Ok(Self { client, base_url, base })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Appends `segments` to the base path, percent-encoding each one so a
  /// segment can never introduce a query, fragment or extra path level.
  fn endpoint(&self, segments: &[&str]) -> Url {
    let mut url = self.base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }

  async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, &str)]) -> Result<T, RegistryError> {
    debug!(url = %url, "registry request");

    let response = self
      .client
      .get(url.clone())
      .query(query)
      .send()
      .await
      .map_err(|source| RegistryError::Network {
        url: url.to_string(),
        source,
      })?;

    let status = response.status();
    let body = response.text().await.map_err(|source| RegistryError::Network {
      url: url.to_string(),
      source,
    })?;
    let url = url.to_string();

    if !status.is_success() {
      return Err(RegistryError::Service {
        url,
        message: format!("HTTP {}", status),
      });
    }

    serde_json::from_str(&body).map_err(|e| RegistryError::Service {
      url,
      message: format!("malformed response: {}", e),
    })
  }
}

impl Registry for HttpRegistry {
  async fn list_themes(&self) -> Result<Vec<Theme>, RegistryError> {
    let themes: Vec<Theme> = self.get_json(self.endpoint(&["themes"]), &[]).await?;
    info!(count = themes.len(), "fetched themes");
    Ok(themes)
  }

  async fn fetch_init_data(&self, theme_name: &str) -> Result<InitPayload, RegistryError> {
    let payload: InitPayload = self.get_json(self.endpoint(&["init"]), &[("theme", theme_name)]).await?;
    info!(
      theme = theme_name,
      dependencies = payload.dependencies.len(),
      "fetched init payload"
    );
    Ok(payload)
  }

  async fn fetch_component(&self, name: &str) -> Result<ComponentPayload, RegistryError> {
    let component: ComponentPayload = self.get_json(self.endpoint(&["components", name]), &[]).await?;
    info!(component = name, files = component.files.len(), "fetched component");
    Ok(component)
  }
}
