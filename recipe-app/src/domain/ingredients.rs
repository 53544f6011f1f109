use recipe_errors::AppError;
use serde::{Deserialize, Serialize};

/// Free-text ingredient list as typed by the user.
///
/// The text is never split or normalised; it reaches the prompt exactly as
/// entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientList(String);

impl IngredientList {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Err(AppError::InvalidIngredients(
                "ingredient list is empty".to_string(),
            ));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ingredients() {
        let list = IngredientList::parse("tomato, onion, pasta").unwrap();
        assert_eq!(list.as_str(), "tomato, onion, pasta");
    }

    #[test]
    fn test_keeps_input_verbatim() {
        let list = IngredientList::parse("  eggs,\n flour ").unwrap();
        assert_eq!(list.as_str(), "  eggs,\n flour ");
    }

    #[test]
    fn test_empty_ingredients() {
        assert!(IngredientList::parse("").is_err());
        assert!(IngredientList::parse("   ").is_err());
        assert!(IngredientList::parse("\n\t \r\n").is_err());
    }

    #[test]
    fn test_error_kind() {
        assert!(matches!(
            IngredientList::parse(" "),
            Err(AppError::InvalidIngredients(_))
        ));
    }
}
