//! UnbelievaBoat store API client
//!
//! Only the two calls the daily job needs: listing a guild's store items
//! (to resolve an item id by name) and patching an item's price and
//! description. Requests carry the raw token in `Authorization`, with no
//! scheme prefix. Nothing is retried.

use crate::models::{ItemPatch, ItemsPayload, StoreItem};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Longest response body excerpt kept in errors
const BODY_EXCERPT: usize = 400;

#[derive(Debug, Error)]
pub enum UnbError {
    #[error("token is not a valid header value")]
    InvalidToken,

    #[error("{status} from UnbelievaBoat API on {url}: {body}")]
    Unauthorized { status: u16, url: String, body: String },

    #[error("{method} {url} failed {status}: {body}")]
    Api {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("network error on {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("item \"{name}\" not found in guild {guild_id}")]
    ItemNotFound { name: String, guild_id: String },
}

#[derive(Debug, Clone)]
pub struct UnbClient {
    base_url: String,
    guild_id: String,
    client: reqwest::Client,
}

fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT).collect()
}

/// Human-readable item description shown in the store
pub fn format_description(
    item_name: &str,
    price: i64,
    unit: &str,
    date: &str,
    pages_url: &str,
    notes: &[String],
) -> String {
    let mut desc = format!(
        "{} • {} {} • Updated {} • Chart: {}",
        item_name, price, unit, date, pages_url
    );
    if !notes.is_empty() {
        desc.push_str(" • ");
        desc.push_str(&notes.join(" • "));
    }
    desc
}

impl UnbClient {
    pub fn new(
        base_url: &str,
        guild_id: &str,
        token: &str,
        timeout_secs: u64,
    ) -> Result<Self, UnbError> {
        let mut auth = HeaderValue::from_str(token).map_err(|_| UnbError::InvalidToken)?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|source| UnbError::Network {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            guild_id: guild_id.to_string(),
            client,
        })
    }

    pub fn guild_id(&self) -> &str {
        &self.guild_id
    }

    fn items_url(&self) -> String {
        format!("{}/guilds/{}/items", self.base_url, self.guild_id)
    }

    fn item_url(&self, item_id: &str) -> String {
        format!("{}/{}", self.items_url(), item_id)
    }

    /// Turn a response into its body, mapping non-2xx statuses to errors
    async fn read_body(
        method: &'static str,
        url: &str,
        response: reqwest::Response,
    ) -> Result<String, UnbError> {
        let status = response.status();
        let body = response.text().await.map_err(|source| UnbError::Network {
            url: url.to_string(),
            source,
        })?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(UnbError::Unauthorized {
                status: status.as_u16(),
                url: url.to_string(),
                body: excerpt(&body),
            });
        }
        if !status.is_success() {
            return Err(UnbError::Api {
                method,
                url: url.to_string(),
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }
        Ok(body)
    }

    /// All store items of the guild
    pub async fn list_items(&self) -> Result<Vec<StoreItem>, UnbError> {
        let url = self.items_url();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| UnbError::Network {
                url: url.clone(),
                source,
            })?;

        let body = Self::read_body("GET", &url, response).await?;
        let payload: ItemsPayload =
            serde_json::from_str(&body).map_err(|source| UnbError::Decode {
                url: url.clone(),
                source,
            })?;
        Ok(payload.into_items())
    }

    /// Id of the item whose name matches `name`, ignoring case
    pub async fn find_item_id_by_name(&self, name: &str) -> Result<String, UnbError> {
        let wanted = name.to_lowercase();
        self.list_items()
            .await?
            .into_iter()
            .filter(|item| item.name.to_lowercase() == wanted)
            .find_map(|item| item.id_string())
            .ok_or_else(|| UnbError::ItemNotFound {
                name: name.to_string(),
                guild_id: self.guild_id.clone(),
            })
    }

    /// Update price and description of one item
    pub async fn patch_item(&self, item_id: &str, patch: &ItemPatch) -> Result<(), UnbError> {
        let url = self.item_url(item_id);
        let response = self
            .client
            .patch(&url)
            .json(patch)
            .send()
            .await
            .map_err(|source| UnbError::Network {
                url: url.clone(),
                source,
            })?;

        Self::read_body("PATCH", &url, response).await?;
        tracing::info!("Patched item {} to price {}", item_id, patch.price);
        Ok(())
    }
}
