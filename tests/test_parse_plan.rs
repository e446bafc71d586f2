use mealgen::{normalize_ingredient, parse_meal_plan, split_response};

// Typical chat-model output: preamble, numbered recipe blocks separated
// by horizontal rules, a consolidated summary heading, then the
// grocery list grouped by ingredient type.
const FULL_RESPONSE: &str = "\
Here are 3 flavorful, healthy recipes for your week:\n\
\n\
---\n\
\n\
### **1. Lemon Garlic Shrimp Skillet**\n\
**Description:** Bright, garlicky shrimp cooked in one pan. Serves 2.\n\
**Ingredients:**\n\
- 1 lb shrimp, peeled and deveined\n\
- 3 cloves garlic, minced\n\
- 2 tbsp olive oil\n\
- 1 lemon (juiced)\n\
**Instructions:**\n\
1. Heat oil in a large skillet.\n\
2. Add garlic and cook until fragrant.\n\
3. Add shrimp and cook 3 minutes per side.\n\
4. Finish with lemon juice.\n\
\n\
---\n\
\n\
### **2. One-Pan Chicken and Rice**\n\
**Description:** A weeknight classic.\n\
**Ingredients:**\n\
- 1 lb chicken thighs\n\
- 2 cups rice\n\
- 3 cloves garlic, minced\n\
**Instructions:**\n\
1. Brown the chicken.\n\
2. Add rice and water, then simmer.\n\
Servings: 4\n\
\n\
---\n\
\n\
### **Consolidated Ingredient Summary**\n\
**Ingredients:**\n\
- all items, grouped by type below\n\
\n\
---\n\
\n\
Grocery List:\n\
\n\
**Produce:**\n\
- 1 lemon\n\
- 6 cloves garlic\n\
\n\
**Protein:**\n\
- 1 lb shrimp\n\
- 1 lb chicken thighs\n\
\n\
**Pantry (dry goods):**\n\
- 2 cups rice\n\
- olive oil\n";

#[test]
fn test_split_then_reconstruct() {
    let (recipes, grocery) = split_response(FULL_RESPONSE);
    assert_eq!(format!("{}{}", recipes, grocery), FULL_RESPONSE);
    assert!(grocery.to_lowercase().starts_with("grocery list"));
}

#[test]
fn test_full_response_parses_to_plan() {
    let plan = parse_meal_plan(FULL_RESPONSE);

    assert_eq!(plan.recipes.len(), 2, "summary block must not become a recipe");

    let shrimp = &plan.recipes[0];
    assert_eq!(shrimp.id, 0);
    assert_eq!(shrimp.title, "Lemon Garlic Shrimp Skillet");
    assert_eq!(shrimp.description, "Bright, garlicky shrimp cooked in one pan. Serves 2.");
    assert_eq!(shrimp.ingredients.len(), 4);
    assert_eq!(shrimp.instructions.len(), 4);
    assert_eq!(shrimp.instructions[3], "Finish with lemon juice.");
    assert_eq!(shrimp.servings, 2);

    let chicken = &plan.recipes[1];
    assert_eq!(chicken.id, 1);
    assert_eq!(chicken.title, "One-Pan Chicken and Rice");
    assert_eq!(chicken.servings, 4);
    assert_eq!(chicken.current_servings, 4);
    assert!(chicken.checked);
    assert!(!chicken.expanded);

    assert_eq!(plan.grocery_sections.len(), 3);
    assert_eq!(plan.grocery_sections[0].name, "Produce");
    assert_eq!(plan.grocery_sections[1].name, "Protein");
    assert_eq!(plan.grocery_sections[2].name, "Pantry (dry goods)");
    assert_eq!(
        plan.grocery_sections[2].items,
        vec!["2 cups rice", "olive oil"]
    );
}

#[test]
fn test_normalized_keys_match_across_recipes() {
    let plan = parse_meal_plan(FULL_RESPONSE);

    // "3 cloves garlic, minced" appears in both recipes; the grocery
    // list carries "6 cloves garlic". All three reduce to one key.
    let from_shrimp = normalize_ingredient(&plan.recipes[0].ingredients[1]);
    let from_chicken = normalize_ingredient(&plan.recipes[1].ingredients[2]);
    let from_grocery = normalize_ingredient(&plan.grocery_sections[0].items[1]);

    assert_eq!(from_shrimp, "garlic");
    assert_eq!(from_shrimp, from_chicken);
    assert_eq!(from_shrimp, from_grocery);
}

#[test]
fn test_normalizer_is_idempotent_over_parsed_ingredients() {
    let plan = parse_meal_plan(FULL_RESPONSE);

    for recipe in &plan.recipes {
        for ingredient in &recipe.ingredients {
            let once = normalize_ingredient(ingredient);
            assert_eq!(normalize_ingredient(&once), once, "ingredient: {ingredient}");
        }
    }
}
