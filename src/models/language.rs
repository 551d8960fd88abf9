use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl Language {
    pub fn python() -> Self {
        Self {
            id: "python".to_string(),
            name: "Python".to_string(),
            description: "Python 3.x".to_string(),
        }
    }

    /// Lista por defecto cuando el backend no responde
    pub fn fallback_list() -> Vec<Language> {
        vec![Self::python()]
    }

    /// Texto de la opción en el selector
    pub fn option_label(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
