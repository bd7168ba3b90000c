//! Ingredient substitution table and search

use serde::Serialize;

/// One substitution suggestion
#[derive(Debug, Clone, Serialize)]
pub struct Substitution {
    pub ingredient: &'static str,
    pub substitute: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratio: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

/// Common ingredient substitutions
pub const SUBSTITUTIONS: &[Substitution] = &[
    Substitution {
        ingredient: "Buttermilk",
        substitute: "1 cup milk + 1 tbsp lemon juice or vinegar",
        ratio: Some("Let stand 5 min"),
        notes: Some("Or use plain yogurt thinned with milk"),
    },
    Substitution {
        ingredient: "Egg (1)",
        substitute: "1/4 cup mashed banana",
        ratio: Some("1:1"),
        notes: Some("Adds sweetness; good for baking"),
    },
    Substitution {
        ingredient: "Egg (1)",
        substitute: "1 tbsp ground flax + 3 tbsp water",
        ratio: Some("1:1"),
        notes: Some("Let sit 5 min before using"),
    },
    Substitution {
        ingredient: "Egg (1)",
        substitute: "3 tbsp aquafaba (chickpea liquid)",
        ratio: Some("1:1"),
        notes: Some("Whipped aquafaba works for meringues"),
    },
    Substitution {
        ingredient: "Egg (1)",
        substitute: "2 tbsp applesauce",
        ratio: Some("1:1"),
        notes: Some("Best in muffins, quick breads"),
    },
    Substitution {
        ingredient: "Baking powder (1 tsp)",
        substitute: "1/4 tsp baking soda + 1/2 tsp cream of tartar",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Baking powder (1 tsp)",
        substitute: "1/4 tsp baking soda + 1/2 cup buttermilk",
        ratio: Some("1:1"),
        notes: Some("Reduce other liquid by 1/2 cup"),
    },
    Substitution {
        ingredient: "Butter (1 cup)",
        substitute: "1 cup margarine or vegetable shortening",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Butter (1 cup)",
        substitute: "3/4 cup olive or vegetable oil",
        ratio: Some("1 cup butter"),
        notes: Some("In many baked goods"),
    },
    Substitution {
        ingredient: "Heavy cream (1 cup)",
        substitute: "2/3 cup milk + 1/3 cup melted butter",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Heavy cream (1 cup)",
        substitute: "1 cup coconut cream (chilled)",
        ratio: Some("1:1"),
        notes: Some("For whipped cream, use chilled can"),
    },
    Substitution {
        ingredient: "Sour cream (1 cup)",
        substitute: "1 cup plain yogurt",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Sour cream (1 cup)",
        substitute: "1 cup buttermilk + 1 tbsp butter",
        ratio: Some("1:1"),
        notes: Some("In baking"),
    },
    Substitution {
        ingredient: "Lemon juice (1 tbsp)",
        substitute: "1 tbsp white vinegar or lime juice",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Lemon zest (1 tsp)",
        substitute: "1/2 tsp lemon extract",
        ratio: Some("Approx"),
        notes: None,
    },
    Substitution {
        ingredient: "Vanilla extract (1 tsp)",
        substitute: "1/2 tsp vanilla paste or 1 inch vanilla bean",
        ratio: Some("Approx"),
        notes: None,
    },
    Substitution {
        ingredient: "Honey (1 cup)",
        substitute: "1 cup maple syrup or agave",
        ratio: Some("1:1"),
        notes: Some("Reduce oven temp ~25\u{b0}F for maple"),
    },
    Substitution {
        ingredient: "Brown sugar (1 cup)",
        substitute: "1 cup white sugar + 1-2 tbsp molasses",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Brown sugar (1 cup)",
        substitute: "1 cup coconut sugar",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "All-purpose flour (1 cup)",
        substitute: "1 cup + 2 tbsp cake flour",
        ratio: Some("1:1"),
        notes: Some("Lighter texture"),
    },
    Substitution {
        ingredient: "Bread flour (1 cup)",
        substitute: "1 cup all-purpose + 1 tsp vital wheat gluten",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Self-rising flour (1 cup)",
        substitute: "1 cup all-purpose + 1 1/2 tsp baking powder + 1/4 tsp salt",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Cornstarch (1 tbsp, thickener)",
        substitute: "2 tbsp all-purpose flour",
        ratio: Some("1 tbsp"),
        notes: None,
    },
    Substitution {
        ingredient: "Cornstarch (1 tbsp)",
        substitute: "1 tbsp arrowroot or potato starch",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Tomato paste (1 tbsp)",
        substitute: "1 tbsp ketchup",
        ratio: Some("1:1"),
        notes: Some("Adds sweetness"),
    },
    Substitution {
        ingredient: "Worcestershire sauce (1 tbsp)",
        substitute: "1 tbsp soy sauce + dash vinegar + pinch sugar",
        ratio: Some("Approx"),
        notes: None,
    },
    Substitution {
        ingredient: "Wine (in cooking)",
        substitute: "Broth + 1 tsp vinegar",
        ratio: Some("Same volume"),
        notes: None,
    },
    Substitution {
        ingredient: "Fresh herbs (1 tbsp)",
        substitute: "1 tsp dried herbs",
        ratio: Some("1:3"),
        notes: Some("Dried is more concentrated"),
    },
    Substitution {
        ingredient: "Garlic (1 clove)",
        substitute: "1/8 tsp garlic powder",
        ratio: Some("1 clove"),
        notes: None,
    },
    Substitution {
        ingredient: "Onion (1 cup chopped)",
        substitute: "1 tbsp onion powder",
        ratio: Some("Approx"),
        notes: None,
    },
    Substitution {
        ingredient: "Mayonnaise (1 cup)",
        substitute: "1 cup Greek yogurt",
        ratio: Some("1:1"),
        notes: Some("In dressings, dips"),
    },
    Substitution {
        ingredient: "Parmesan (1 cup grated)",
        substitute: "1 cup Pecorino Romano or Asiago",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Ricotta (1 cup)",
        substitute: "1 cup cottage cheese blended smooth",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Cream cheese (1 cup)",
        substitute: "1 cup mascarpone",
        ratio: Some("1:1"),
        notes: None,
    },
    Substitution {
        ingredient: "Oil (for frying)",
        substitute: "Butter",
        ratio: Some("1:1"),
        notes: Some("Lower smoke point; watch heat"),
    },
];

/// Filter the table by a case-insensitive match on either column
///
/// An empty or whitespace-only query returns the full table.
pub fn search(query: &str) -> Vec<&'static Substitution> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return SUBSTITUTIONS.iter().collect();
    }
    SUBSTITUTIONS
        .iter()
        .filter(|s| {
            s.ingredient.to_lowercase().contains(&q) || s.substitute.to_lowercase().contains(&q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(search("").len(), SUBSTITUTIONS.len());
        assert_eq!(search("   ").len(), SUBSTITUTIONS.len());
    }

    #[test]
    fn search_is_case_insensitive() {
        let hits = search("BUTTERMILK");
        assert!(!hits.is_empty());
        assert!(hits
            .iter()
            .all(|s| s.ingredient.to_lowercase().contains("buttermilk")
                || s.substitute.to_lowercase().contains("buttermilk")));
    }

    #[test]
    fn search_matches_the_substitute_column_too() {
        // "aquafaba" appears only as a substitute
        let hits = search("aquafaba");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].ingredient, "Egg (1)");
    }

    #[test]
    fn unknown_ingredient_matches_nothing() {
        assert!(search("unobtainium").is_empty());
    }
}
