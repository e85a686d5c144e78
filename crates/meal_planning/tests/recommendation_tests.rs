use catalog::{DietType, FoodCategory, FoodItem, InMemoryCatalog, Nutrient, Trimester};
use meal_planning::{MealPlanner, MealPlanningError, PlanQuery};
use std::collections::BTreeSet;

fn create_test_food(
    id: &str,
    category: FoodCategory,
    diet: DietType,
    trimesters: &[u8],
) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name_english: format!("Food {}", id),
        name_hindi: None,
        category,
        nutrients: Default::default(),
        trimesters: trimesters
            .iter()
            .map(|t| Trimester::try_from(*t).unwrap())
            .collect::<BTreeSet<_>>(),
        diet,
        region: None,
        precaution_tags: Vec::new(),
        benefits: None,
        preparation_tips: None,
    }
}

#[test]
fn test_recommend_returns_only_eligible_never_padding() {
    let planner = MealPlanner::default();
    let catalog = InMemoryCatalog::new(vec![
        create_test_food("tofu", FoodCategory::Proteins, DietType::Vegan, &[1, 2]),
        create_test_food("dal", FoodCategory::Lentils, DietType::Vegan, &[1, 3]),
        create_test_food("paneer", FoodCategory::Dairy, DietType::Vegetarian, &[1, 2, 3]),
        create_test_food("papaya", FoodCategory::Fruits, DietType::Vegan, &[3]),
    ])
    .unwrap();

    // Exactly two vegan items suit trimester 1; asking for three must not pad.
    let query = PlanQuery::new(1, Trimester::First).with_diet(DietType::Vegan);
    let ranked = planner.recommend(&catalog, &query, 3).unwrap();

    assert_eq!(ranked.len(), 2);
    let ids: Vec<&str> = ranked.iter().map(|r| r.food_id.as_str()).collect();
    assert!(ids.contains(&"tofu"));
    assert!(ids.contains(&"dal"));
}

#[test]
fn test_recommend_sorts_descending_with_id_tiebreak() {
    let planner = MealPlanner::default();

    let mut spinach = create_test_food("spinach", FoodCategory::Vegetables, DietType::Vegan, &[1]);
    spinach.nutrients.set(Nutrient::FolicAcid, 194.0);
    spinach.nutrients.set(Nutrient::Iron, 2.7);

    // Two items with identical (empty) profiles tie on score and must come
    // back in id order.
    let catalog = InMemoryCatalog::new(vec![
        create_test_food("banana", FoodCategory::Fruits, DietType::Vegan, &[1]),
        create_test_food("apple", FoodCategory::Fruits, DietType::Vegan, &[1]),
        spinach,
    ])
    .unwrap();

    let query = PlanQuery::new(1, Trimester::First);
    let ranked = planner.recommend(&catalog, &query, 3).unwrap();

    assert_eq!(ranked[0].food_id, "spinach");
    assert_eq!(ranked[1].food_id, "apple");
    assert_eq!(ranked[2].food_id, "banana");
    assert!(ranked[0].score > ranked[1].score);
    assert_eq!(ranked[1].score, ranked[2].score);
}

#[test]
fn test_recommend_skips_health_flagged_items() {
    let planner = MealPlanner::default();
    let mut dates = create_test_food("dates", FoodCategory::DryFruits, DietType::Vegan, &[2, 3]);
    dates.precaution_tags.push("diabetes".to_string());
    dates.nutrients.set(Nutrient::Iron, 0.9);

    let catalog = InMemoryCatalog::new(vec![
        dates,
        create_test_food("apple", FoodCategory::Fruits, DietType::Vegan, &[2, 3]),
    ])
    .unwrap();

    let query = PlanQuery::new(1, Trimester::Third).with_health_condition("diabetes");
    let ranked = planner.recommend(&catalog, &query, 5).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].food_id, "apple");
}

#[test]
fn test_recommend_reason_names_a_term() {
    let planner = MealPlanner::default();
    let mut chickpeas = create_test_food("chickpeas", FoodCategory::Lentils, DietType::Vegan, &[1]);
    chickpeas.nutrients.set(Nutrient::FolicAcid, 557.0);
    chickpeas.nutrients.set(Nutrient::Iron, 6.2);
    chickpeas.nutrients.set(Nutrient::Protein, 19.0);

    let catalog = InMemoryCatalog::new(vec![chickpeas]).unwrap();

    let query = PlanQuery::new(1, Trimester::First);
    let ranked = planner.recommend(&catalog, &query, 1).unwrap();

    assert_eq!(
        ranked[0].reason,
        "rich in priority nutrients for this trimester"
    );
}

#[test]
fn test_recommend_is_deterministic() {
    let planner = MealPlanner::default();
    let catalog = InMemoryCatalog::new(
        (0..12)
            .map(|i| {
                create_test_food(
                    &format!("food_{}", i),
                    FoodCategory::Fruits,
                    DietType::Vegan,
                    &[1, 2, 3],
                )
            })
            .collect(),
    )
    .unwrap();

    let query = PlanQuery::new(1, Trimester::Second);
    let first = planner.recommend(&catalog, &query, 8).unwrap();
    let second = planner.recommend(&catalog, &query, 8).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_recommend_validates_query() {
    let planner = MealPlanner::default();
    let catalog = InMemoryCatalog::new(vec![create_test_food(
        "apple",
        FoodCategory::Fruits,
        DietType::Vegan,
        &[1],
    )])
    .unwrap();

    let query = PlanQuery::new(0, Trimester::First);
    assert!(matches!(
        planner.recommend(&catalog, &query, 3),
        Err(MealPlanningError::InvalidDayCount(0))
    ));
}
