use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::shelf::entities::IngredientName;

const QUERY_PLACEHOLDER: &str = "{query}";

/// Builds retail search links. Never performs a request itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingLinkBuilder {
    template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ShoppingLink {
    pub ingredient: IngredientName,
    pub url: String,
}

impl ShoppingLinkBuilder {
    /// `template` must contain `{query}`; if it does not, the query is appended.
    pub fn new(template: String) -> Self {
        Self { template }
    }

    pub fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        if self.template.contains(QUERY_PLACEHOLDER) {
            self.template.replace(QUERY_PLACEHOLDER, &encoded)
        } else {
            format!("{}{}", self.template, encoded)
        }
    }

    pub fn link_for(&self, ingredient: &IngredientName) -> ShoppingLink {
        ShoppingLink {
            ingredient: ingredient.clone(),
            url: self.build_search_url(ingredient.as_str()),
        }
    }
}

impl Default for ShoppingLinkBuilder {
    fn default() -> Self {
        Self::new(crate::domain::common::ShoppingConfig::default().search_url_template)
    }
}
