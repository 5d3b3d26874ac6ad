use serde::{Deserialize, Serialize};

/// A single idea posted to a retro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Idea {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_is_omitted_when_absent() {
        let value = serde_json::to_value(Idea::new("Add more breaks")).unwrap();
        assert_eq!(value, json!({ "text": "Add more breaks" }));
    }

    #[test]
    fn category_is_sent_when_set() {
        let idea = Idea::new("Standups run long").with_category("sad");
        let value = serde_json::to_value(idea).unwrap();
        assert_eq!(value, json!({ "text": "Standups run long", "category": "sad" }));
    }
}
