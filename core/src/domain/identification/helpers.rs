use crate::domain::shelf::entities::IngredientName;

/// Splits a comma-separated model reply into ingredient names.
///
/// Nothing else about the reply is trusted: a reply without commas becomes a single
/// name, and blank tokens are skipped.
pub fn parse_item_list(reply: &str) -> Vec<IngredientName> {
    reply
        .split(',')
        .filter_map(|token| IngredientName::parse(token).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(reply: &str) -> Vec<String> {
        parse_item_list(reply)
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_comma_separated() {
        assert_eq!(
            names("Eggs, Milk ,  Cheddar cheese"),
            vec!["Eggs", "Milk", "Cheddar cheese"]
        );
    }

    #[test]
    fn test_parse_without_commas_is_one_item() {
        assert_eq!(
            names("I can see a carton of milk\n"),
            vec!["I can see a carton of milk"]
        );
    }

    #[test]
    fn test_parse_blank_reply() {
        assert!(names("").is_empty());
        assert!(names(" , ,\n,").is_empty());
    }
}
