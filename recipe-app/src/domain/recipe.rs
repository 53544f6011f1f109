use serde::{Deserialize, Serialize};

/// One generation: the ingredients that went in and the text that came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: uuid::Uuid,
    pub ingredients: String,
    pub text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Recipe {
    pub fn new(ingredients: String, text: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            ingredients,
            text,
            created_at: chrono::Utc::now(),
        }
    }
}
