//! Rust client for the FoodieAI meal planning service.
//!
//! Derives energy metrics (BMI, BMR, TDEE, calorie target) and a suggested
//! diet from biometric inputs, requests a multi-day meal plan from the remote
//! service, aggregates the plan into a shopping list, and tracks a
//! once-per-calendar-day planning streak.

pub mod client;
pub mod config;
pub mod metrics;
pub mod models;
pub mod shopping;
pub mod streak;
