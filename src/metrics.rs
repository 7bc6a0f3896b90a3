use serde::{Deserialize, Serialize};

/// Biological sex, as used by the Mifflin-St Jeor estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Self-reported daily activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl ActivityLevel {
    /// TDEE multiplier applied on top of BMR.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
        }
    }
}

/// What the user wants their weight to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

/// Diet preference as entered by the user. `Auto` means "pick for me".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "Veg")]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    #[serde(rename = "Vegan")]
    Vegan,
}

/// Concrete diet category sent to the plan service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    #[serde(rename = "Veg")]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
    #[serde(rename = "Vegan")]
    Vegan,
}

impl std::fmt::Display for Diet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diet::Veg => write!(f, "Veg"),
            Diet::NonVeg => write!(f, "Non-Veg"),
            Diet::Vegan => write!(f, "Vegan"),
        }
    }
}

/// Biometric inputs from the profile form.
///
/// Callers must supply positive height, weight, and age, and a
/// `meals_per_day` in 2..=6. Values outside those ranges are a precondition
/// violation, not a checked error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: u32,
    pub sex: Sex,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub preference: DietPreference,
    pub meals_per_day: u32,
}

/// Energy metrics derived from a [`ProfileInput`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub bmi: f64,
    pub bmr: i32,
    pub tdee: i32,
    pub calorie_target: i32,
    pub suggested_diet: Diet,
}

impl DerivedMetrics {
    /// Recompute every metric from the full profile. Pure; callers re-run
    /// this on any input change rather than caching intermediates.
    pub fn from_profile(profile: &ProfileInput) -> Self {
        let bmi = compute_bmi(profile.height_cm, profile.weight_kg);
        let bmr = compute_bmr(profile.sex, profile.weight_kg, profile.height_cm, profile.age);
        let tdee = compute_tdee(bmr, profile.activity);
        let calorie_target = calorie_target(tdee, profile.goal);
        let suggested_diet = suggest_diet(profile.preference, profile.goal);
        Self {
            bmi,
            bmr,
            tdee,
            calorie_target,
            suggested_diet,
        }
    }
}

/// Body mass index, rounded to one decimal place.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let meters = height_cm / 100.0;
    (weight_kg / (meters * meters) * 10.0).round() / 10.0
}

/// Basal metabolic rate via Mifflin-St Jeor, rounded to the nearest kcal
/// (half away from zero, so 1627.5 rounds to 1628).
pub fn compute_bmr(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    let adjusted = match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    adjusted.round() as i32
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn compute_tdee(bmr: i32, activity: ActivityLevel) -> i32 {
    (bmr as f64 * activity.multiplier()).round() as i32
}

/// Daily calorie target for a goal. Deficits are capped at 500 kcal below
/// TDEE and never drop under 1200 kcal.
pub fn calorie_target(tdee: i32, goal: Goal) -> i32 {
    match goal {
        Goal::Lose => (tdee - 500).max(1200),
        Goal::Gain => tdee + 300,
        Goal::Maintain => tdee,
    }
}

/// Resolve the diet to request. An explicit preference always wins; `Auto`
/// maps gain to Non-Veg and everything else to Veg.
pub fn suggest_diet(preference: DietPreference, goal: Goal) -> Diet {
    match preference {
        DietPreference::Veg => Diet::Veg,
        DietPreference::NonVeg => Diet::NonVeg,
        DietPreference::Vegan => Diet::Vegan,
        DietPreference::Auto => match goal {
            Goal::Gain => Diet::NonVeg,
            Goal::Lose | Goal::Maintain => Diet::Veg,
        },
    }
}

/// Coarse BMI range shown next to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Healthy
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Healthy => write!(f, "Healthy"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}
