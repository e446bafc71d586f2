use serde::Serialize;

/// One generation request as submitted by the input layer.
///
/// Range checks on the counts (1-7 meals, 1-10 servings) belong to the
/// input layer; the library takes the values as given.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub num_meals: u8,
    pub servings_per_meal: u8,
    /// Raw comma-separated preference text, possibly empty.
    pub preferences: String,
}

impl GenerationRequest {
    pub fn new(num_meals: u8, servings_per_meal: u8, preferences: impl Into<String>) -> Self {
        GenerationRequest {
            num_meals,
            servings_per_meal,
            preferences: preferences.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    /// Zero-based index in block order.
    pub id: usize,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// Servings parsed from the block text, defaulting to 2.
    pub servings: u32,
    /// Presentation state, mutated only by the display layer.
    pub current_servings: u32,
    pub expanded: bool,
    pub checked: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GrocerySection {
    pub name: String,
    pub items: Vec<String>,
}

/// Parsed form of a single model response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealPlan {
    pub recipes: Vec<Recipe>,
    pub grocery_sections: Vec<GrocerySection>,
}
