use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError,
    shelf::value_objects::{ShelfFlag, ShelfThresholds},
};

/// Pantry staples every new shelf starts with.
pub const PANTRY_STAPLES: [&str; 4] = ["Salt", "Pepper", "Olive Oil", "Garlic"];

/// Trimmed, non-empty ingredient name. Comparison is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "String", into = "String")]
#[schema(value_type = String, example = "Olive Oil")]
pub struct IngredientName(String);

impl IngredientName {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Invalid(
                "ingredient name cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IngredientName {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IngredientName> for String {
    fn from(value: IngredientName) -> Self {
        value.0
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShelfItem {
    pub ingredient: IngredientName,
    pub quantity: u32,
    pub expiry: Option<NaiveDate>,
}

impl ShelfItem {
    pub fn flags(&self, today: NaiveDate, thresholds: &ShelfThresholds) -> Vec<ShelfFlag> {
        let mut flags = Vec::new();

        if self.quantity < thresholds.low_quantity {
            flags.push(ShelfFlag::LowQuantity);
        }

        if let Some(expiry) = self.expiry {
            if expiry < today {
                flags.push(ShelfFlag::Expired);
            } else if expiry <= thresholds.expiring_soon_limit(today) {
                flags.push(ShelfFlag::ExpiringSoon);
            }
        }

        flags
    }
}

/// Ordered inventory holding at most one item per ingredient name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shelf {
    items: Vec<ShelfItem>,
}

impl Shelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_staples() -> Self {
        let items = PANTRY_STAPLES
            .iter()
            .map(|name| ShelfItem {
                ingredient: IngredientName((*name).to_string()),
                quantity: 0,
                expiry: None,
            })
            .collect();

        Self { items }
    }

    pub fn items(&self) -> &[ShelfItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ShelfItem> {
        self.items.iter().find(|item| item.ingredient.as_str() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Adds `quantity` to an existing item and replaces its expiry, or appends a new item.
    pub fn add_or_merge(
        &mut self,
        ingredient: IngredientName,
        quantity: u32,
        expiry: NaiveDate,
    ) -> Result<&ShelfItem, CoreError> {
        if quantity == 0 {
            return Err(CoreError::Invalid(
                "quantity must be at least 1".to_string(),
            ));
        }

        let index = match self
            .items
            .iter()
            .position(|item| item.ingredient == ingredient)
        {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
                item.expiry = Some(expiry);
                index
            }
            None => {
                self.items.push(ShelfItem {
                    ingredient,
                    quantity,
                    expiry: Some(expiry),
                });
                self.items.len() - 1
            }
        };

        Ok(&self.items[index])
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.ingredient.as_str() != name);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Removes every item named in `names`, returning how many were removed.
    pub fn consume<'a, I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = &'a IngredientName>,
    {
        let names: HashSet<&str> = names.into_iter().map(IngredientName::as_str).collect();
        let before = self.items.len();
        self.items
            .retain(|item| !names.contains(item.ingredient.as_str()));
        before - self.items.len()
    }

    pub fn assign_default_expiry(&mut self, default: NaiveDate) -> usize {
        let mut assigned = 0;
        for item in self.items.iter_mut().filter(|item| item.expiry.is_none()) {
            item.expiry = Some(default);
            assigned += 1;
        }
        assigned
    }

    /// Fills in missing expiry dates, then computes the advisory flags of every item.
    pub fn flag(
        &mut self,
        today: NaiveDate,
        thresholds: &ShelfThresholds,
    ) -> Vec<(ShelfItem, Vec<ShelfFlag>)> {
        self.assign_default_expiry(thresholds.default_expiry(today));

        self.items
            .iter()
            .map(|item| (item.clone(), item.flags(today, thresholds)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn name(raw: &str) -> IngredientName {
        IngredientName::parse(raw).unwrap()
    }

    fn flags_for(quantity: u32, expiry: NaiveDate) -> Vec<ShelfFlag> {
        ShelfItem {
            ingredient: name("Milk"),
            quantity,
            expiry: Some(expiry),
        }
        .flags(date(2024, 1, 10), &ShelfThresholds::default())
    }

    #[test]
    fn test_ingredient_name_is_trimmed_and_case_sensitive() {
        assert_eq!(name("  Tomato \n").as_str(), "Tomato");
        assert_ne!(name("Tomato"), name("tomato"));
        assert!(IngredientName::parse("   ").is_err());
    }

    #[test]
    fn test_add_or_merge_merges_by_name() {
        let mut shelf = Shelf::new();
        shelf.add_or_merge(name("Salt"), 3, date(2024, 1, 1)).unwrap();
        shelf.add_or_merge(name("Salt"), 2, date(2024, 2, 1)).unwrap();

        assert_eq!(shelf.len(), 1);
        assert_eq!(
            shelf.get("Salt"),
            Some(&ShelfItem {
                ingredient: name("Salt"),
                quantity: 5,
                expiry: Some(date(2024, 2, 1)),
            })
        );
    }

    #[test]
    fn test_add_or_merge_keeps_insertion_order() {
        let mut shelf = Shelf::new();
        shelf.add_or_merge(name("Rice"), 1, date(2024, 1, 1)).unwrap();
        shelf.add_or_merge(name("Beans"), 1, date(2024, 1, 1)).unwrap();
        shelf.add_or_merge(name("Rice"), 1, date(2024, 1, 1)).unwrap();

        let names: Vec<&str> = shelf.items().iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Beans"]);
    }

    #[test]
    fn test_add_or_merge_rejects_zero_quantity() {
        let mut shelf = Shelf::new();
        let result = shelf.add_or_merge(name("Salt"), 0, date(2024, 1, 1));
        assert!(matches!(result, Err(CoreError::Invalid(_))));
        assert!(shelf.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut shelf = Shelf::with_staples();
        assert!(shelf.remove("Pepper"));
        assert!(!shelf.remove("Pepper"));
        assert_eq!(shelf.len(), 3);

        shelf.clear();
        assert!(shelf.is_empty());
    }

    #[test]
    fn test_consume_removes_named_items() {
        let mut shelf = Shelf::new();
        for item in ["Salt", "Pepper", "Garlic"] {
            shelf.add_or_merge(name(item), 1, date(2024, 1, 1)).unwrap();
        }

        let removed = shelf.consume(&[name("Salt"), name("Pepper")]);

        assert_eq!(removed, 2);
        assert_eq!(shelf.len(), 1);
        assert!(shelf.contains("Garlic"));
    }

    #[test]
    fn test_flags() {
        assert_eq!(flags_for(5, date(2024, 1, 9)), vec![ShelfFlag::Expired]);
        assert_eq!(flags_for(5, date(2024, 1, 10)), vec![ShelfFlag::ExpiringSoon]);
        assert_eq!(flags_for(5, date(2024, 1, 11)), vec![ShelfFlag::ExpiringSoon]);
        assert_eq!(flags_for(5, date(2024, 1, 12)), vec![ShelfFlag::ExpiringSoon]);
        assert!(flags_for(5, date(2024, 1, 13)).is_empty());
        assert!(flags_for(5, date(2024, 1, 20)).is_empty());
        assert_eq!(flags_for(1, date(2024, 1, 20)), vec![ShelfFlag::LowQuantity]);
        assert_eq!(
            flags_for(1, date(2024, 1, 9)),
            vec![ShelfFlag::LowQuantity, ShelfFlag::Expired]
        );
    }

    #[test]
    fn test_flag_assigns_default_expiry_once() {
        let today = date(2024, 1, 10);
        let thresholds = ShelfThresholds::default();
        let mut shelf = Shelf::with_staples();

        let flagged = shelf.flag(today, &thresholds);

        assert_eq!(flagged.len(), 4);
        for (item, flags) in &flagged {
            assert_eq!(item.expiry, Some(date(2024, 1, 17)));
            assert_eq!(flags, &vec![ShelfFlag::LowQuantity]);
        }

        // A later observation keeps the first default.
        shelf.flag(date(2024, 1, 12), &thresholds);
        assert_eq!(shelf.get("Salt").unwrap().expiry, Some(date(2024, 1, 17)));
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = ShelfThresholds {
            low_quantity: 5,
            expiring_soon_days: 0,
            default_expiry_days: 1,
        };
        let item = ShelfItem {
            ingredient: name("Eggs"),
            quantity: 4,
            expiry: Some(date(2024, 1, 11)),
        };

        assert_eq!(
            item.flags(date(2024, 1, 10), &thresholds),
            vec![ShelfFlag::LowQuantity]
        );
    }
}
