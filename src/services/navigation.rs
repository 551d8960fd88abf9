// ============================================================================
// NAVIGATION - Navegación completa del navegador (location.href)
// ============================================================================

use crate::error::AppError;

pub trait Navigator {
    /// Navegación completa (recarga de página, no transición en cliente)
    fn navigate(&self, url: &str) -> Result<(), AppError>;
}

#[derive(Clone, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, url: &str) -> Result<(), AppError> {
        log::info!("➡️ [NAV] Navegando a {}", url);
        let window = web_sys::window().ok_or_else(|| AppError::Navigation("No window".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|e| AppError::Navigation(format!("{:?}", e)))
    }
}

/// Path y query actuales (`/callback`, `?code=...`)
pub fn current_location() -> (String, String) {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return ("/".to_string(), String::new());
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let query = location.search().unwrap_or_default();
    (path, query)
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Navigator que solo registra las URLs
    #[derive(Default)]
    pub struct RecordingNavigator {
        pub visited: RefCell<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn last(&self) -> Option<String> {
            self.visited.borrow().last().cloned()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str) -> Result<(), AppError> {
            self.visited.borrow_mut().push(url.to_string());
            Ok(())
        }
    }
}
