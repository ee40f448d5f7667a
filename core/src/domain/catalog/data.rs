use chrono::Weekday;

use crate::domain::catalog::entities::{CatalogEntry, RecipeCatalog, RecipeRecord, ScheduleDay};

fn entry(
    name: &str,
    prep_time: &str,
    cook_time: &str,
    ingredients: &[&str],
    instructions: &[&str],
) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        recipe: RecipeRecord {
            yields: "4 Servings".to_string(),
            prep_time: prep_time.to_string(),
            cook_time: cook_time.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: instructions.iter().map(|s| s.to_string()).collect(),
        },
    }
}

fn day(day: Weekday, first: &str, second: &str) -> ScheduleDay {
    ScheduleDay {
        day,
        recipes: [first.to_string(), second.to_string()],
    }
}

impl RecipeCatalog {
    /// The built-in reference recipes and weekly schedule.
    pub fn builtin() -> Self {
        Self::new(builtin_entries(), builtin_schedule())
    }
}

fn builtin_schedule() -> Vec<ScheduleDay> {
    vec![
        day(
            Weekday::Mon,
            "Spicy Tomato Rice with Crispy Bread Crumbs",
            "Coconut Curry Rice with Toasted Almonds",
        ),
        day(
            Weekday::Tue,
            "Lemon Herb Quinoa with Roasted Vegetables",
            "Garlicky Spinach and Mushroom Risotto",
        ),
        day(
            Weekday::Wed,
            "Creamy Broccoli and Cheddar Rice Bake",
            "Turmeric Rice with Grilled Tofu",
        ),
        day(
            Weekday::Thu,
            "Coconut Rice with Mango Salsa",
            "Peanut Butter Fried Rice",
        ),
        day(
            Weekday::Fri,
            "Spiced Cauliflower Rice with Chickpeas",
            "Saffron Rice with Roasted Chicken",
        ),
        day(
            Weekday::Sat,
            "Mexican Rice with Black Beans",
            "Mediterranean Rice with Feta and Olives",
        ),
        day(Weekday::Sun, "Ginger Garlic Fried Rice", "Pumpkin Risotto"),
    ]
}

fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        entry(
            "Spicy Tomato Rice with Crispy Bread Crumbs",
            "15 minutes",
            "25 minutes",
            &[
                "1 cup Rice (Basmati or long grain)",
                "2 tablespoons Atta",
                "1 medium Onion, finely chopped",
                "2 medium Tomatoes, diced",
                "1 teaspoon Green Chilli Powder",
                "Salt, to taste",
                "1 teaspoon Sugar",
                "2 tablespoons + 1 tablespoon Olive Oil",
                "2 slices Bread, processed into breadcrumbs",
                "A pinch of Pepper (optional)",
            ],
            &[
                "Rinse the rice under cold water until the water runs clear.",
                "In a pot, combine rice with 2 cups of water and a pinch of salt. Bring to a boil, reduce heat to low, cover, and simmer for 15-20 minutes until rice is cooked.",
                "Heat 2 tablespoons of olive oil in a pan, add onions, and cook until soft and translucent.",
                "Stir in green chili powder and cook for 1 minute until fragrant.",
                "Add tomatoes, salt, and sugar. Cook for 5-7 minutes until tomatoes soften and release their juices.",
                "Whisk atta with 2-3 tablespoons of water to form a smooth slurry.",
                "Pour the slurry into the tomato mixture and cook for 2-3 minutes until the sauce thickens slightly.",
                "In a separate pan, heat the remaining olive oil and toast the breadcrumbs until golden and crispy. Season with salt and pepper.",
                "Fluff the rice and pour the tomato sauce over it. Top with crispy breadcrumbs.",
            ],
        ),
        entry(
            "Coconut Curry Rice with Toasted Almonds",
            "10 minutes",
            "30 minutes",
            &[
                "1 cup Rice (Basmati or Jasmine)",
                "1 cup Coconut Milk",
                "1 cup Water",
                "1 tablespoon Ginger, minced",
                "2 cloves Garlic, minced",
                "1 teaspoon Curry Powder",
                "Salt, to taste",
                "2 tablespoons Olive Oil",
                "1/4 cup Almonds, sliced and toasted",
                "Fresh Cilantro, for garnish",
            ],
            &[
                "In a pot, combine rice, coconut milk, water, and a pinch of salt. Bring to a boil, then reduce heat, cover, and simmer for 15-20 minutes until the rice is cooked.",
                "Heat olive oil in a pan over medium heat. Add minced ginger and garlic, sauté for 1-2 minutes until fragrant.",
                "Stir in curry powder and cook for another minute.",
                "Fluff the cooked rice and mix it into the ginger-garlic mixture. Season with salt if needed.",
                "Top with toasted almonds and garnish with cilantro.",
            ],
        ),
        entry(
            "Lemon Herb Quinoa with Roasted Vegetables",
            "15 minutes",
            "30 minutes",
            &[
                "1 cup Quinoa, rinsed",
                "2 cups Water",
                "1 Zucchini, diced",
                "1 Red Bell Pepper, diced",
                "1 cup Cherry Tomatoes, halved",
                "2 tablespoons Lemon Juice",
                "3 tablespoons Olive Oil",
                "1/4 cup Fresh Parsley, chopped",
                "Salt and Pepper, to taste",
            ],
            &[
                "In a pot, bring quinoa and water to a boil. Reduce heat, cover, and simmer for 15 minutes until quinoa is tender.",
                "Preheat oven to 400°F (200°C). Toss zucchini, bell pepper, and cherry tomatoes with 2 tablespoons olive oil. Spread on a baking sheet and roast for 20 minutes until tender.",
                "Fluff quinoa with a fork and toss with roasted vegetables, lemon juice, remaining olive oil, parsley, salt, and pepper.",
            ],
        ),
        entry(
            "Garlicky Spinach and Mushroom Risotto",
            "10 minutes",
            "40 minutes",
            &[
                "1 cup Arborio Rice",
                "4 cups Vegetable Broth",
                "2 tablespoons Olive Oil",
                "1 small Onion, diced",
                "3 cloves Garlic, minced",
                "1 cup Mushrooms, sliced",
                "2 cups Fresh Spinach",
                "1/4 cup Parmesan Cheese, grated",
                "Salt and Pepper, to taste",
            ],
            &[
                "In a pot, warm the vegetable broth over low heat.",
                "In a large pan, heat olive oil over medium heat. Add onions and cook until softened.",
                "Add garlic and mushrooms, cook for another 5-7 minutes until mushrooms are browned.",
                "Stir in the Arborio rice and cook for 1-2 minutes to toast the rice.",
                "Add 1 cup of broth to the rice, stirring constantly until absorbed. Continue adding broth 1/2 cup at a time until the rice is creamy and fully cooked (about 18-20 minutes).",
                "Stir in spinach and Parmesan cheese. Season with salt and pepper.",
            ],
        ),
        entry(
            "Creamy Broccoli and Cheddar Rice Bake",
            "10 minutes",
            "40 minutes",
            &[
                "1 cup Rice (Basmati or long grain)",
                "2 cups Broccoli florets",
                "1 cup Cheddar cheese, grated",
                "1 cup Milk",
                "2 tablespoons Butter",
                "2 tablespoons All-purpose flour",
                "1/2 teaspoon Garlic powder",
                "Salt and Pepper, to taste",
                "1/4 cup Bread crumbs for topping",
            ],
            &[
                "Preheat the oven to 375°F (190°C).",
                "Cook the rice according to package instructions and set aside.",
                "Steam the broccoli florets until tender, about 5-7 minutes.",
                "In a saucepan, melt the butter over medium heat. Stir in the flour and cook for 1-2 minutes until lightly browned.",
                "Slowly whisk in the milk and cook until the sauce thickens, about 3-5 minutes.",
                "Remove from heat and stir in the grated Cheddar cheese, garlic powder, salt, and pepper.",
                "Combine the cooked rice, steamed broccoli, and cheese sauce. Transfer to a greased baking dish.",
                "Sprinkle the top with bread crumbs and bake for 15-20 minutes, until the topping is golden and crispy.",
            ],
        ),
        entry(
            "Turmeric Rice with Grilled Tofu",
            "15 minutes",
            "30 minutes",
            &[
                "1 cup Basmati Rice",
                "2 cups Water",
                "1 teaspoon Turmeric powder",
                "1/2 teaspoon Cumin seeds",
                "2 tablespoons Olive Oil",
                "1 block Tofu, pressed and cubed",
                "1 tablespoon Soy Sauce",
                "1 teaspoon Paprika",
                "1 tablespoon Lemon Juice",
                "Salt and Pepper, to taste",
                "Fresh Cilantro, for garnish",
            ],
            &[
                "Rinse the basmati rice until the water runs clear. In a pot, bring 2 cups of water to a boil.",
                "Add the turmeric powder and a pinch of salt to the water, then stir in the rice. Reduce heat to low, cover, and simmer for 15-20 minutes until the rice is fully cooked.",
                "While the rice is cooking, prepare the tofu by tossing it in soy sauce, paprika, lemon juice, salt, and pepper.",
                "Heat olive oil in a pan over medium heat and add cumin seeds. Once they start to sizzle, add the tofu cubes and cook for 7-10 minutes, turning occasionally, until crispy and golden brown on all sides.",
                "Fluff the cooked rice and mix in the grilled tofu cubes. Garnish with fresh cilantro and serve.",
            ],
        ),
        entry(
            "Coconut Rice with Mango Salsa",
            "10 minutes",
            "20 minutes",
            &[
                "1 cup Rice (Jasmine or Basmati)",
                "1 can (13.5 oz) Coconut Milk",
                "1 cup Water",
                "1 teaspoon Salt",
                "1 ripe Mango, diced",
                "1/4 Red Onion, finely chopped",
                "1/4 cup Fresh Cilantro, chopped",
                "1 tablespoon Lime Juice",
                "Salt and Pepper, to taste",
            ],
            &[
                "In a pot, combine rice, coconut milk, water, and salt. Bring to a boil, then reduce heat to low, cover, and simmer for 15-20 minutes until rice is cooked and liquid is absorbed.",
                "While the rice is cooking, prepare the mango salsa. In a bowl, combine diced mango, red onion, cilantro, lime juice, and season with salt and pepper to taste.",
                "Once the rice is done, fluff it with a fork and serve topped with mango salsa.",
            ],
        ),
        entry(
            "Peanut Butter Fried Rice",
            "10 minutes",
            "15 minutes",
            &[
                "2 cups Cooked Rice (preferably day-old)",
                "2 tablespoons Peanut Butter",
                "2 tablespoons Soy Sauce",
                "1 tablespoon Sesame Oil",
                "1 cup Mixed Vegetables (carrots, peas, bell peppers)",
                "2 cloves Garlic, minced",
                "1/2 teaspoon Ginger, minced",
                "2 Green Onions, sliced",
                "Salt and Pepper, to taste",
            ],
            &[
                "In a small bowl, mix peanut butter, soy sauce, and sesame oil until well combined. Set aside.",
                "In a large pan or wok, heat a little oil over medium-high heat. Add garlic and ginger, and sauté for 1-2 minutes until fragrant.",
                "Add the mixed vegetables and stir-fry for about 3-4 minutes until tender.",
                "Add the cooked rice and pour the peanut butter mixture over it. Stir well to combine and cook for an additional 3-4 minutes until heated through.",
                "Garnish with sliced green onions and serve.",
            ],
        ),
        entry(
            "Spiced Cauliflower Rice with Chickpeas",
            "15 minutes",
            "20 minutes",
            &[
                "1 head Cauliflower, grated or processed into rice-sized pieces",
                "1 can (15 oz) Chickpeas, drained and rinsed",
                "1 tablespoon Olive Oil",
                "1 teaspoon Cumin",
                "1 teaspoon Coriander",
                "1/2 teaspoon Turmeric",
                "Salt and Pepper, to taste",
                "1/4 cup Fresh Parsley, chopped",
                "Juice of 1 Lemon",
            ],
            &[
                "In a large skillet, heat olive oil over medium heat. Add grated cauliflower and cook for 5-7 minutes until tender.",
                "Stir in the chickpeas, cumin, coriander, turmeric, salt, and pepper. Cook for another 5-7 minutes until heated through.",
                "Remove from heat and stir in fresh parsley and lemon juice before serving.",
            ],
        ),
        entry(
            "Saffron Rice with Roasted Chicken",
            "15 minutes",
            "45 minutes",
            &[
                "1 1/2 cups Basmati Rice",
                "3 cups Chicken Broth",
                "1/4 teaspoon Saffron Threads",
                "1 tablespoon Olive Oil",
                "2 cloves Garlic, minced",
                "1 teaspoon Cumin",
                "Salt and Pepper, to taste",
                "4 Chicken Thighs (bone-in, skin-on)",
                "Fresh Cilantro, for garnish",
            ],
            &[
                "Preheat the oven to 425°F (220°C). In a small bowl, soak saffron threads in a few tablespoons of warm water for about 10 minutes.",
                "In an oven-safe pot, heat olive oil over medium heat. Add garlic and cumin, and sauté for 1-2 minutes.",
                "Add rice, chicken broth, saffron (with soaking water), salt, and pepper. Bring to a boil, then reduce heat, cover, and simmer for 15 minutes.",
                "While the rice is cooking, season chicken thighs with salt and pepper. Place them skin-side up on a baking sheet and roast for 25-30 minutes until cooked through.",
                "Serve saffron rice topped with roasted chicken and garnish with fresh cilantro.",
            ],
        ),
        entry(
            "Mexican Rice with Black Beans",
            "10 minutes",
            "20 minutes",
            &[
                "1 cup Rice (long grain or Basmati)",
                "1 can (15 oz) Black Beans, drained and rinsed",
                "1 cup Chicken or Vegetable Broth",
                "1 cup Diced Tomatoes (canned or fresh)",
                "1 teaspoon Cumin",
                "1 teaspoon Chili Powder",
                "Salt and Pepper, to taste",
                "1 tablespoon Olive Oil",
                "1/4 cup Fresh Cilantro, chopped",
                "Lime wedges for serving",
            ],
            &[
                "In a pot, heat olive oil over medium heat. Add rice and toast for 2-3 minutes until lightly golden.",
                "Stir in the broth, diced tomatoes, cumin, chili powder, salt, and pepper. Bring to a boil, then reduce heat, cover, and simmer for 15 minutes until rice is cooked.",
                "Stir in black beans and cook for an additional 2-3 minutes until heated through.",
                "Garnish with fresh cilantro and serve with lime wedges.",
            ],
        ),
        entry(
            "Mediterranean Rice with Feta and Olives",
            "10 minutes",
            "20 minutes",
            &[
                "1 cup Rice (Basmati or Jasmine)",
                "2 cups Vegetable or Chicken Broth",
                "1/2 cup Feta Cheese, crumbled",
                "1/4 cup Kalamata Olives, pitted and sliced",
                "1/4 cup Cherry Tomatoes, halved",
                "1/4 cup Cucumber, diced",
                "1 tablespoon Olive Oil",
                "1 teaspoon Oregano",
                "Salt and Pepper, to taste",
            ],
            &[
                "In a pot, combine rice and broth. Bring to a boil, then reduce heat, cover, and simmer for 15 minutes until rice is cooked.",
                "In a large bowl, combine cooked rice with feta, olives, cherry tomatoes, cucumber, olive oil, oregano, salt, and pepper. Mix well.",
                "Serve warm or at room temperature.",
            ],
        ),
        entry(
            "Ginger Garlic Fried Rice",
            "10 minutes",
            "10 minutes",
            &[
                "2 cups Cooked Rice (preferably day-old)",
                "2 tablespoons Oil (vegetable or sesame)",
                "3 cloves Garlic, minced",
                "1 tablespoon Ginger, minced",
                "1 cup Mixed Vegetables (peas, carrots, bell peppers)",
                "2 tablespoons Soy Sauce",
                "2 Green Onions, sliced",
                "Salt and Pepper, to taste",
            ],
            &[
                "Heat oil in a large skillet over medium-high heat. Add minced garlic and ginger, and sauté for 1-2 minutes until fragrant.",
                "Add mixed vegetables and stir-fry for about 3-4 minutes until tender.",
                "Add the cooked rice and soy sauce. Stir well to combine and cook for an additional 3-4 minutes until heated through.",
                "Garnish with sliced green onions and serve.",
            ],
        ),
        entry(
            "Pumpkin Risotto",
            "10 minutes",
            "30 minutes",
            &[
                "1 cup Arborio Rice",
                "4 cups Vegetable Broth (heated)",
                "1 cup Pumpkin Puree (canned or fresh)",
                "1/2 cup Onion, finely chopped",
                "2 cloves Garlic, minced",
                "1/2 cup Parmesan Cheese, grated",
                "2 tablespoons Olive Oil",
                "Salt and Pepper, to taste",
                "Fresh Sage or Parsley, for garnish",
            ],
            &[
                "In a large skillet, heat olive oil over medium heat. Add onion and garlic, and sauté until soft and translucent.",
                "Add Arborio rice and stir for 1-2 minutes until the rice is lightly toasted.",
                "Gradually add warm vegetable broth, one ladle at a time, stirring constantly until absorbed before adding more.",
                "After about 15 minutes, stir in pumpkin puree. Continue adding broth and stirring until the rice is creamy and al dente, about 20-25 minutes.",
                "Remove from heat, stir in Parmesan cheese, and season with salt and pepper.",
                "Garnish with fresh sage or parsley before serving.",
            ],
        ),
    ]
}
