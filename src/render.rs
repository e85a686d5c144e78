use catalog::{InMemoryCatalog, Nutrient};
use chrono::{Duration, NaiveDate};
use meal_planning::{AvailablePreferences, MealPlan, MealSlot, RecommendationEntry, SlotKind};

/// Render a plan as the classic day-by-day table: one row per day, one column
/// per meal position, calories at the end. Relaxed slots are starred.
pub fn plan_table(
    plan: &MealPlan,
    catalog: &InMemoryCatalog,
    start_date: Option<NaiveDate>,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<11} {:<16} {:<16} {:<16} {:<16} {:<16} {:>9}\n",
        "Day", "Date", "Breakfast", "Mid-morning", "Lunch", "Evening", "Dinner", "Calories"
    ));

    for day in &plan.daily_nutrition {
        let date = start_date
            .map(|d| {
                (d + Duration::days(day.day as i64))
                    .format("%Y-%m-%d")
                    .to_string()
            })
            .unwrap_or_else(|| "-".to_string());

        let names: Vec<String> = SlotKind::ALL
            .iter()
            .map(|kind| {
                plan.assignment(MealSlot {
                    day: day.day,
                    kind: *kind,
                })
                .map(|a| {
                    let name = catalog
                        .get(&a.food_id)
                        .map(|item| item.name_english.clone())
                        .unwrap_or_else(|| a.food_id.clone());
                    if a.relaxed {
                        format!("{name} *")
                    } else {
                        name
                    }
                })
                .unwrap_or_default()
            })
            .collect();

        out.push_str(&format!(
            "{:<4} {:<11} {:<16} {:<16} {:<16} {:<16} {:<16} {:>9.1}\n",
            day.day + 1,
            date,
            names[0],
            names[1],
            names[2],
            names[3],
            names[4],
            day.totals.amount(Nutrient::Calories)
        ));
    }

    let avg = &plan.nutrition.daily_average;
    out.push_str(&format!(
        "\nDaily averages: calories {:.1}, protein {:.1} g, iron {:.1} mg, calcium {:.1} mg, folic acid {:.1} mcg, fiber {:.1} g\n",
        avg.amount(Nutrient::Calories),
        avg.amount(Nutrient::Protein),
        avg.amount(Nutrient::Iron),
        avg.amount(Nutrient::Calcium),
        avg.amount(Nutrient::FolicAcid),
        avg.amount(Nutrient::Fiber),
    ));

    if !plan.warnings.is_empty() {
        out.push_str("\nWarnings (* = slot filled with a relaxed constraint):\n");
        for warning in &plan.warnings {
            out.push_str(&format!("  - {}\n", warning.reason()));
        }
    }

    out
}

pub fn recommendations_table(
    entries: &[RecommendationEntry],
    catalog: &InMemoryCatalog,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<20} {:>6}  {}\n",
        "#", "Food", "Score", "Why"
    ));
    for (rank, entry) in entries.iter().enumerate() {
        let name = catalog
            .get(&entry.food_id)
            .map(|item| item.name_english.clone())
            .unwrap_or_else(|| entry.food_id.clone());
        out.push_str(&format!(
            "{:<4} {:<20} {:>6.3}  {}\n",
            rank + 1,
            name,
            entry.score,
            entry.reason
        ));
    }
    out
}

pub fn preferences_table(prefs: &AvailablePreferences) -> String {
    let mut out = String::new();
    out.push_str(&format!("Regions: {}\n", prefs.regions.join(", ")));
    out.push_str(&format!("Diet types: {}\n", prefs.diet_types.join(", ")));
    out.push_str(&format!(
        "Plan length: {}-{} days\n",
        prefs.min_days, prefs.max_days
    ));
    out
}
