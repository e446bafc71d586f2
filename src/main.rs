use std::io::{self, Write};

use log::debug;

use mealgen::{generate_meal_plan, GenerationRequest, MealPlan};

fn ask(question: &str) -> io::Result<String> {
    print!("{}", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

fn ask_count(question: &str, min: u8, max: u8) -> Result<u8, Box<dyn std::error::Error>> {
    let answer = ask(question)?;
    let value: u8 = answer
        .parse()
        .map_err(|_| format!("'{}' is not a number", answer))?;
    if !(min..=max).contains(&value) {
        return Err(format!("Value must be between {} and {}", min, max).into());
    }
    Ok(value)
}

fn print_plan(plan: &MealPlan) {
    println!("\n=== Recipes ===\n");
    for recipe in &plan.recipes {
        println!("{}. {} (serves {})", recipe.id + 1, recipe.title, recipe.servings);
        if !recipe.description.is_empty() {
            println!("   {}", recipe.description);
        }
        println!("   Ingredients:");
        for ingredient in &recipe.ingredients {
            println!("     - {}", ingredient);
        }
        if !recipe.instructions.is_empty() {
            println!("   Instructions:");
            for (i, step) in recipe.instructions.iter().enumerate() {
                println!("     {}. {}", i + 1, step);
            }
        }
        println!();
    }

    if !plan.grocery_sections.is_empty() {
        println!("=== Grocery List ===\n");
        for section in &plan.grocery_sections {
            println!("{}:", section.name);
            for item in &section.items {
                println!("  - {}", item);
            }
            println!();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let preferences = ask("Meal Preferences (comma separated, or leave blank for default): ")?;
    let num_meals = ask_count("Number of Meals (1-7): ", 1, 7)?;
    let servings_per_meal = ask_count("Servings per Meal (1-10): ", 1, 10)?;

    let request = GenerationRequest::new(num_meals, servings_per_meal, preferences);
    debug!("submitting request: {:?}", request);

    println!("Generating recipes...");
    let plan = generate_meal_plan(&request).await?;
    print_plan(&plan);

    Ok(())
}
