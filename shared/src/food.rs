//! Client for the Indian Food nutrition facts service.

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

use crate::{Config, Error, Result};

/// A nutrient amount exactly as the food service reported it.
///
/// The service does not promise a numeric type, so the raw JSON value is kept
/// and printed as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Value);

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::Null => f.write_str("unknown"),
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<Value> for Quantity {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Nutrition facts for one named food.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionRecord {
    pub name: String,
    pub fat_in_gm: Quantity,
    pub carb_in_gm: Quantity,
    pub protein_in_gm: Quantity,
    pub calories: Quantity,
}

impl NutritionRecord {
    /// Name ready to be spoken, with every `&` read out as "and".
    pub fn spoken_name(&self) -> String {
        self.name
            .replace('&', " and ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Outcome of a lookup that reached the food service.
#[derive(Debug, Clone, PartialEq)]
pub enum FoodLookup {
    Found(NutritionRecord),
    NotFound,
}

/// Raw payload from the food service. A missing name means "not found".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FoodPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fat_in_gm: Quantity,
    #[serde(default)]
    carb_in_gm: Quantity,
    #[serde(default)]
    protein_in_gm: Quantity,
    #[serde(default)]
    calories: Quantity,
}

impl From<FoodPayload> for FoodLookup {
    fn from(payload: FoodPayload) -> Self {
        match payload.name.filter(|name| !name.trim().is_empty()) {
            Some(name) => FoodLookup::Found(NutritionRecord {
                name,
                fat_in_gm: payload.fat_in_gm,
                carb_in_gm: payload.carb_in_gm,
                protein_in_gm: payload.protein_in_gm,
                calories: payload.calories,
            }),
            None => FoodLookup::NotFound,
        }
    }
}

/// Client for the nutrition facts service.
#[derive(Debug, Clone)]
pub struct FoodClient {
    http_client: reqwest::Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl FoodClient {
    /// Create a new food client.
    pub fn new(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    /// Create a client with the configured base URL and request timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.food_api_timeout)
            .build()?;

        Ok(Self::new(http_client, config.food_api_base_url.as_str()))
    }

    /// Look up nutrition facts for a named food.
    pub async fn find_food(&self, food: &str) -> Result<FoodLookup> {
        self.fetch(&self.food_url(food)).await
    }

    /// Look up nutrition facts for any food the service picks.
    pub async fn any_food(&self) -> Result<FoodLookup> {
        self.fetch(&self.any_food_url()).await
    }

    fn food_url(&self, food: &str) -> String {
        format!("{}/food/{}", self.base_url, urlencoding::encode(food))
    }

    fn any_food_url(&self) -> String {
        format!("{}/anyfood", self.base_url)
    }

    /// One GET, no retries. The whole body is buffered before decoding.
    async fn fetch(&self, url: &str) -> Result<FoodLookup> {
        info!("Requesting nutrition facts from {}", url);

        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!("Food service returned 404 for {}", url);
            return Ok(FoodLookup::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Food service failed: {} - {}", status, body);
            return Err(Error::FoodService(format!("unexpected status {}", status)));
        }

        let body = response.bytes().await?;
        let payload: Option<FoodPayload> = serde_json::from_slice(&body)?;

        let lookup = payload.map(FoodLookup::from).unwrap_or(FoodLookup::NotFound);
        match &lookup {
            FoodLookup::Found(record) => {
                debug!(name = %record.name, "Food service returned a record")
            }
            FoodLookup::NotFound => debug!("Food service returned no named record"),
        }

        Ok(lookup)
    }
}
