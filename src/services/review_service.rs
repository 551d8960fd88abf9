use crate::error::AppError;
use crate::models::{AnalyzeRequest, Language, ReviewResult};
use crate::services::api_client::ApiClient;

/// Análisis de código contra el backend
#[derive(Clone)]
pub struct ReviewService {
    api: ApiClient,
}

impl ReviewService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn from_config() -> Self {
        Self::new(ApiClient::from_config())
    }

    /// Enviar snippet + lenguaje. Error explícito si el status no es 2xx.
    pub async fn analyze(&self, code: &str, language: &str) -> Result<ReviewResult, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::Validation("No code snippet provided".to_string()));
        }
        let language = if language.trim().is_empty() { "python" } else { language.trim() };

        let request = AnalyzeRequest {
            code: code.to_string(),
            language: language.to_string(),
        };
        let result = self.api.analyze(&request).await?;
        log::info!("✅ [REVIEW] Análisis recibido: calidad {}%, {} problemas",
                   result.quality_percent(), result.total_issues());
        Ok(result)
    }

    /// Lenguajes soportados; ante cualquier fallo (o lista vacía) se usa Python
    pub async fn list_languages(&self) -> Vec<Language> {
        match self.api.supported_languages().await {
            Ok(languages) if !languages.is_empty() => {
                log::info!("📋 [REVIEW] {} lenguajes soportados", languages.len());
                languages
            }
            Ok(_) => {
                log::warn!("⚠️ [REVIEW] Lista de lenguajes vacía, usando Python");
                Language::fallback_list()
            }
            Err(e) => {
                log::warn!("⚠️ [REVIEW] Error obteniendo lenguajes ({}), usando Python", e);
                Language::fallback_list()
            }
        }
    }
}
