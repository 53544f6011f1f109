use super::Recipe;
use serde::{Deserialize, Serialize};

/// Which page the session is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Input,
    Result,
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    RecipeGenerated(Recipe),
    StartOver,
}

/// Everything one browser session remembers between requests.
///
/// History is kept in call order; use [`SessionState::history_newest_first`]
/// for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub view: View,
    pub current: Option<Recipe>,
    pub history: Vec<Recipe>,
}

impl SessionState {
    pub fn apply(mut self, action: SessionAction) -> Self {
        match action {
            SessionAction::RecipeGenerated(recipe) => {
                self.history.push(recipe.clone());
                self.current = Some(recipe);
                self.view = View::Result;
            }
            SessionAction::StartOver => {
                self.current = None;
                self.view = View::Input;
            }
        }
        self
    }

    /// The recipe that can be exported, if the session is showing one.
    pub fn current_recipe(&self) -> Option<&Recipe> {
        self.current.as_ref().filter(|recipe| !recipe.text.is_empty())
    }

    pub fn history_newest_first(&self) -> impl Iterator<Item = &Recipe> {
        self.history.iter().rev()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(ingredients: &str, text: &str) -> Recipe {
        Recipe::new(ingredients.to_string(), text.to_string())
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::default();
        assert_eq!(state.view, View::Input);
        assert!(state.current_recipe().is_none());
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_generated_moves_to_result() {
        let generated = recipe("tomato, onion, pasta", "# Pasta al pomodoro");
        let state = SessionState::default().apply(SessionAction::RecipeGenerated(generated.clone()));

        assert_eq!(state.view, View::Result);
        assert_eq!(state.current_recipe(), Some(&generated));
        assert_eq!(state.history, vec![generated]);
    }

    #[test]
    fn test_start_over_clears_recipe_but_keeps_history() {
        let generated = recipe("rice", "Fried rice");
        let state = SessionState::default()
            .apply(SessionAction::RecipeGenerated(generated.clone()))
            .apply(SessionAction::StartOver);

        assert_eq!(state.view, View::Input);
        assert!(state.current.is_none());
        assert!(state.current_recipe().is_none());
        assert_eq!(state.history, vec![generated]);
    }

    #[test]
    fn test_start_over_from_input_is_noop() {
        let state = SessionState::default().apply(SessionAction::StartOver);
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_history_newest_first_keeps_pairs() {
        let first = recipe("eggs", "Omelette");
        let second = recipe("flour, water", "Flatbread");
        let third = recipe("apples", "Apple crumble");

        let state = SessionState::default()
            .apply(SessionAction::RecipeGenerated(first.clone()))
            .apply(SessionAction::StartOver)
            .apply(SessionAction::RecipeGenerated(second.clone()))
            .apply(SessionAction::StartOver)
            .apply(SessionAction::RecipeGenerated(third.clone()));

        let shown: Vec<(&str, &str)> = state
            .history_newest_first()
            .map(|r| (r.ingredients.as_str(), r.text.as_str()))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("apples", "Apple crumble"),
                ("flour, water", "Flatbread"),
                ("eggs", "Omelette"),
            ]
        );
    }

    #[test]
    fn test_round_trips_through_session_store_format() {
        let state = SessionState::default()
            .apply(SessionAction::RecipeGenerated(recipe("leeks", "Leek soup")));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["view"], "result");
        let restored: SessionState = serde_json::from_value(json).unwrap();
        assert_eq!(restored, state);
    }
}
