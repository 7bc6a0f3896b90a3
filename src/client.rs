use anyhow::{anyhow, Result};
use chrono::Local;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::Config;
use crate::metrics::{DerivedMetrics, Diet, ProfileInput};
use crate::models::{MealPlan, ShoppingListEntry};
use crate::shopping::build_shopping_list;
use crate::streak::{bump_streak, StreakStore};

/// Client for the FoodieAI meal-planning service.
#[derive(Debug, Clone)]
pub struct FoodieClient {
    client: Client,
    config: Config,
}

/// Everything one generate action produces.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub metrics: DerivedMetrics,
    pub plan: MealPlan,
    pub shopping_list: Vec<ShoppingListEntry>,
    pub streak: u32,
}

impl FoodieClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Build a client from `FOODIE_API_URL` / `FOODIE_API_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::load())
    }

    /// Request a multi-day plan for a diet, daily calorie target, and
    /// meals-per-day count.
    ///
    /// One request per call: no retry, no in-flight dedup, no cancellation.
    /// Overlapping calls are independent and whichever response resolves
    /// last wins at the caller.
    pub async fn request_plan(
        &self,
        diet: Diet,
        calories: i32,
        meals_per_day: u32,
    ) -> Result<MealPlan> {
        let url = format!("{}/mealplan", self.config.base_url);
        let body = json!({
            "diet": diet.to_string(),
            "calories": calories,
            "meals_per_day": meals_per_day,
        });

        debug!(%diet, calories, meals_per_day, "requesting meal plan");

        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("Plan request failed: {} - {}", status, text));
        }

        let data: Value = resp.json().await?;

        // The service reports its own failures as an `error` field inside an
        // otherwise successful response. Surface the message verbatim.
        if let Some(message) = data.get("error").and_then(|v| v.as_str()) {
            return Err(anyhow!("{}", message));
        }

        // Missing days/meals/ingredients deserialize as empty rather than
        // failing the whole plan.
        let plan: MealPlan = serde_json::from_value(data)?;
        if plan.days.is_empty() {
            warn!("service returned a plan with no days");
        }
        Ok(plan)
    }

    /// One generate action, end to end: derive the metrics, fetch a plan for
    /// them, aggregate the shopping list, and bump today's streak.
    ///
    /// The streak only advances after a plan arrives, so failed requests
    /// never count as a planned day.
    pub async fn generate_plan(
        &self,
        profile: &ProfileInput,
        store: &dyn StreakStore,
    ) -> Result<GeneratedPlan> {
        let metrics = DerivedMetrics::from_profile(profile);
        let plan = self
            .request_plan(
                metrics.suggested_diet,
                metrics.calorie_target,
                profile.meals_per_day,
            )
            .await?;
        let shopping_list = build_shopping_list(&plan);
        let streak = bump_streak(store, Local::now().date_naive())?;

        Ok(GeneratedPlan {
            metrics,
            plan,
            shopping_list,
            streak,
        })
    }
}
