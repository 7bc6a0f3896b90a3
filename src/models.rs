use serde::{Deserialize, Serialize};

/// A multi-day meal plan returned by the plan service.
///
/// Every collection field defaults to empty so a sparse or partially
/// malformed response still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub days: Vec<PlanDay>,
}

/// One labelled day of the plan (e.g. "Monday").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanDay {
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

/// A single meal with its ingredient list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meal {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// One aggregated shopping-list line: a lower-cased ingredient name and how
/// many times it occurs across the whole plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub count: u32,
}
