// ============================================================================
// HTTP TRANSPORT - Envío de requests (gloo-net en el navegador)
// ============================================================================
// El ApiClient no conoce gloo-net: habla con este trait para que los tests
// puedan sustituir la red por respuestas programadas.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: None,
        }
    }

    pub fn post_json<T: serde::Serialize>(url: impl Into<String>, body: &T) -> Result<Self, AppError> {
        let body = serde_json::to_string(body)?;
        Ok(Self {
            method: Method::Post,
            url: url.into(),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: Some(body),
        })
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AppError> {
        serde_json::from_str(&self.body).map_err(|e| AppError::Parse(e.to_string()))
    }

    /// Convertir un status no-2xx en error (usa `detail` de FastAPI si viene)
    pub fn error_for_status(self) -> Result<Self, AppError> {
        if self.ok() {
            return Ok(self);
        }

        #[derive(serde::Deserialize)]
        struct ErrorBody {
            detail: serde_json::Value,
        }

        let message = match serde_json::from_str::<ErrorBody>(&self.body) {
            Ok(ErrorBody { detail: serde_json::Value::String(detail) }) => detail,
            Ok(ErrorBody { detail }) => detail.to_string(),
            Err(_) if !self.status_text.is_empty() => self.status_text.clone(),
            Err(_) => self.body.chars().take(200).collect(),
        };

        Err(AppError::Http { status: self.status, message })
    }
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError>;
}

/// Transport real: fetch() vía gloo-net
#[derive(Clone, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let prepared = match request.body {
            Some(body) => builder.body(body)?,
            None => builder.build()?,
        };

        log::debug!("🌐 [HTTP] {:?} {}", request.method, request.url);
        let response = prepared.send().await?;
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await?;
        log::debug!("🌐 [HTTP] {} ← {}", status, request.url);

        Ok(HttpResponse { status, status_text, body })
    }
}

#[cfg(test)]
pub mod testing {
    //! Transport programable para tests de servicios
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    pub struct FakeTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, AppError>>>,
        pub requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, status: u16, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                status_text: String::new(),
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(self, error: AppError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        pub fn request(&self, index: usize) -> HttpRequest {
            self.requests.borrow()[index].clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for FakeTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no scripted response".to_string())))
        }
    }
}
