//! End-to-end: load a dataset, take user input, rank.

use std::io::Write;

use larder_core::{
    diet_options, filter_by_diet, load_recipes, rank, read_recipes, AvailableIngredients,
    Category, DirectionDelimiter, IngredientCatalog,
};

const DATASET: &str = "\
recipe_title,subcategory,ingredients,directions,num_ingredients,num_steps,cook_speed,dietary_profile,healthiness_score,health_level
Chicken Fried Rice,Dinner,\"2 cups cooked rice, 1 lb chicken breast, 2 large eggs, soy sauce\",Scramble eggs. Fry rice. Add chicken.,4,3,fast,dairy-free,55,moderate
Lemon Chicken,Dinner,\"4 chicken breast, 1 lemon, 2 tablespoons olive oil, salt\",Marinate. Bake.,4,2,medium,\"gluten-free, dairy-free\",78,healthy
Veggie Omelette,Breakfast,\"3 eggs, 1/2 cup diced bell pepper, 1 cup spinach, salt\",Whisk eggs. Cook.,4,2,fast,\"vegetarian, gluten-free\",81,healthy
Broken Row,Dinner,,Nothing.,0,1,fast,,10,unhealthy
Fruit Salad,Snack,\"1 banana, 1 apple, honey\",Chop. Mix.,3,2,fast,vegan,90,healthy
";

#[test]
fn test_rank_dataset_against_user_input() {
    let loaded = read_recipes(DATASET.as_bytes(), DirectionDelimiter::Auto).unwrap();
    assert_eq!(loaded.recipes.len(), 4);
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(loaded.skipped[0].row, 4);

    let available = AvailableIngredients::from_input("chicken breast, eggs, salt, Olive Oil");
    let ranked = rank(&loaded.recipes, &available, Some(3));

    let summary: Vec<_> = ranked.iter().map(|m| (m.title, m.score)).collect();
    assert_eq!(
        summary,
        [
            ("Lemon Chicken", 3),
            ("Veggie Omelette", 2),
            ("Chicken Fried Rice", 2),
        ]
    );

    assert_eq!(ranked[0].missing, ["lemon"]);
    // Equal scores: the healthier omelette (81) beats fried rice (55).
    assert_eq!(ranked[1].missing, ["bell pepper", "spinach"]);
    assert_eq!(ranked[2].missing, ["cooked rice", "soy sauce"]);
}

#[test]
fn test_no_matches_is_empty() {
    let loaded = read_recipes(DATASET.as_bytes(), DirectionDelimiter::Auto).unwrap();
    let available = AvailableIngredients::from_input("durian, saffron");

    assert!(rank(&loaded.recipes, &available, None).is_empty());
}

#[test]
fn test_diet_filter_before_ranking() {
    let loaded = read_recipes(DATASET.as_bytes(), DirectionDelimiter::Auto).unwrap();

    let options: Vec<_> = diet_options(&loaded.recipes).into_iter().collect();
    assert_eq!(options, ["dairy-free", "gluten-free", "vegan", "vegetarian"]);

    let gluten_free = filter_by_diet(&loaded.recipes, "gluten-free");
    let available = AvailableIngredients::from_input("salt, eggs");
    let ranked = rank(gluten_free, &available, None);

    let titles: Vec<_> = ranked.iter().map(|m| m.title).collect();
    assert_eq!(titles, ["Veggie Omelette", "Lemon Chicken"]);
}

#[test]
fn test_catalog_from_user_input() {
    let mut catalog = IngredientCatalog::new();
    catalog.insert_many("2 cups rice, chicken, 1 cup milk, salt, spinach, Chicken".split(','));

    assert_eq!(catalog.len(), 5);
    let counts = catalog.count_by_category();
    assert_eq!(counts.len(), 5);
    assert_eq!(counts[&Category::Proteins], 1);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DATASET.as_bytes()).unwrap();

    let loaded = load_recipes(file.path(), DirectionDelimiter::Period).unwrap();
    assert_eq!(loaded.recipes.len(), 4);

    let fried_rice = &loaded.recipes[0];
    assert_eq!(
        fried_rice.directions(),
        ["Scramble eggs", "Fry rice", "Add chicken"]
    );
    assert_eq!(fried_rice.health_level(), Some("moderate"));
}
