use foodie_ai_api::client::FoodieClient;
use foodie_ai_api::config::Config;
use foodie_ai_api::metrics::{ActivityLevel, Diet, DietPreference, Goal, ProfileInput, Sex};
use foodie_ai_api::streak::MemoryStreakStore;

fn configured_client() -> Option<FoodieClient> {
    dotenvy::dotenv().ok();
    let base_url = std::env::var("FOODIE_API_URL").ok()?;
    FoodieClient::new(Config {
        base_url,
        ..Config::default()
    })
    .ok()
}

fn sample_profile() -> ProfileInput {
    ProfileInput {
        height_cm: 170.0,
        weight_kg: 70.0,
        age: 28,
        sex: Sex::Male,
        activity: ActivityLevel::Moderate,
        goal: Goal::Lose,
        preference: DietPreference::Auto,
        meals_per_day: 3,
    }
}

#[tokio::test]
async fn request_plan_returns_days() {
    let Some(client) = configured_client() else {
        eprintln!("skipping request_plan_returns_days: FOODIE_API_URL not set");
        return;
    };

    let plan = client.request_plan(Diet::Veg, 2000, 3).await.unwrap();

    assert!(!plan.days.is_empty(), "plan should have at least one day");
    let day = &plan.days[0];
    assert!(!day.meals.is_empty(), "each day should have meals");
    assert!(!day.meals[0].title.is_empty());
}

#[tokio::test]
async fn generate_plan_populates_everything() {
    let Some(client) = configured_client() else {
        eprintln!("skipping generate_plan_populates_everything: FOODIE_API_URL not set");
        return;
    };

    let store = MemoryStreakStore::default();
    let generated = client
        .generate_plan(&sample_profile(), &store)
        .await
        .unwrap();

    assert_eq!(generated.metrics.calorie_target, 2023);
    assert_eq!(generated.metrics.suggested_diet, Diet::Veg);
    assert!(!generated.plan.days.is_empty());
    assert!(!generated.shopping_list.is_empty());
    assert_eq!(generated.streak, 1);

    // Regenerating the same day keeps the streak where it is.
    let again = client
        .generate_plan(&sample_profile(), &store)
        .await
        .unwrap();
    assert_eq!(again.streak, 1);
}
