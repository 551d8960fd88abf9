// ============================================================================
// REVIEW - Resultado del análisis de código (respuesta de /review/analyze)
// ============================================================================

use serde::{Deserialize, Deserializer, Serialize};

/// Request de análisis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeRequest {
    pub code: String,
    pub language: String,
}

/// Resultado estructurado del análisis.
/// Todos los campos tienen default: un campo ausente nunca llega a la vista sin valor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewResult {
    /// Score de calidad 0.0 - 1.0
    #[serde(default)]
    pub prediction: f64,
    #[serde(default)]
    pub overall_feedback: String,
    /// El backend lo rellena con los mismos problemas de las tres listas
    #[serde(default)]
    pub detailed_feedback: Vec<Issue>,
    #[serde(default)]
    pub issues_count: u32,
    #[serde(default)]
    pub syntax_errors: Vec<Issue>,
    #[serde(default)]
    pub logic_errors: Vec<Issue>,
    #[serde(default)]
    pub code_quality_issues: Vec<Issue>,
    #[serde(default)]
    pub fix_suggestions: Option<FixSuggestions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixSuggestions {
    #[serde(default)]
    pub syntax_fixes: Vec<Issue>,
    #[serde(default)]
    pub logic_fixes: Vec<Issue>,
    #[serde(default)]
    pub quality_fixes: Vec<Issue>,
}

/// Un problema detectado. El motor de análisis devuelve strings sueltos
/// o bien objetos `{ message, line }` según la versión.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IssueRepr {
    Text(String),
    Detailed {
        #[serde(alias = "msg", alias = "error", alias = "description")]
        message: String,
        #[serde(default, alias = "lineno", alias = "line_number")]
        line: Option<u32>,
    },
}

impl<'de> Deserialize<'de> for Issue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match IssueRepr::deserialize(deserializer)? {
            IssueRepr::Text(message) => Issue { message, line: None },
            IssueRepr::Detailed { message, line } => Issue { message, line },
        })
    }
}

impl Issue {
    pub fn label(&self) -> String {
        match self.line {
            Some(line) => format!("Line {}: {}", line, self.message),
            None => self.message.clone(),
        }
    }
}

/// Nivel de calidad (mismos umbrales que usa el backend para su feedback global)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityLevel {
    Good,
    Fair,
    Poor,
}

impl QualityLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            QualityLevel::Good => "quality-good",
            QualityLevel::Fair => "quality-fair",
            QualityLevel::Poor => "quality-poor",
        }
    }
}

/// Grupo de problemas de una categoría + sus sugerencias
#[derive(Debug, Clone, PartialEq)]
pub struct IssueCategory<'a> {
    pub title: &'static str,
    pub issues: &'a [Issue],
    pub fixes: &'a [Issue],
}

impl ReviewResult {
    /// Score como porcentaje entero (0 - 100)
    pub fn quality_percent(&self) -> u8 {
        if !self.prediction.is_finite() {
            return 0;
        }
        (self.prediction.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn quality_level(&self) -> QualityLevel {
        match self.quality_percent() {
            70..=100 => QualityLevel::Good,
            40..=69 => QualityLevel::Fair,
            _ => QualityLevel::Poor,
        }
    }

    /// Total de problemas: el contador del backend o, si falta, la suma de las listas
    pub fn total_issues(&self) -> usize {
        let listed = self.syntax_errors.len() + self.logic_errors.len() + self.code_quality_issues.len();
        listed.max(self.issues_count as usize)
    }

    /// Feedback detallado que no repite ningún problema ya listado en una categoría
    pub fn extra_feedback(&self) -> Vec<&Issue> {
        let listed = [&self.syntax_errors, &self.logic_errors, &self.code_quality_issues];
        self.detailed_feedback
            .iter()
            .filter(|item| !listed.iter().any(|issues| issues.contains(*item)))
            .collect()
    }

    /// Categorías con al menos un problema o una sugerencia
    pub fn categories(&self) -> Vec<IssueCategory<'_>> {
        let fixes = self.fix_suggestions.as_ref();
        let empty: &[Issue] = &[];
        let groups = [
            ("Syntax errors", &self.syntax_errors, fixes.map(|f| f.syntax_fixes.as_slice())),
            ("Logic errors", &self.logic_errors, fixes.map(|f| f.logic_fixes.as_slice())),
            ("Code quality", &self.code_quality_issues, fixes.map(|f| f.quality_fixes.as_slice())),
        ];
        groups
            .into_iter()
            .map(|(title, issues, fixes)| IssueCategory {
                title,
                issues: issues.as_slice(),
                fixes: fixes.unwrap_or(empty),
            })
            .filter(|category| !category.issues.is_empty() || !category.fixes.is_empty())
            .collect()
    }
}
