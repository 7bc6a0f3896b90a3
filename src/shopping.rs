use std::collections::HashMap;

use crate::models::{MealPlan, ShoppingListEntry};

/// Aggregate every ingredient across all meals of all days into a counted
/// shopping list, keyed case-insensitively, in first-seen order.
///
/// This is a plain multiset tally: each occurrence increments the count, and
/// distinct phrasings of the same thing ("Tomato" vs "tomatoes") stay
/// separate entries.
pub fn build_shopping_list(plan: &MealPlan) -> Vec<ShoppingListEntry> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<ShoppingListEntry> = Vec::new();

    for day in &plan.days {
        for meal in &day.meals {
            for ingredient in &meal.ingredients {
                let key = ingredient.to_lowercase();
                match index.get(&key) {
                    Some(&i) => entries[i].count += 1,
                    None => {
                        index.insert(key.clone(), entries.len());
                        entries.push(ShoppingListEntry { name: key, count: 1 });
                    }
                }
            }
        }
    }

    entries
}
