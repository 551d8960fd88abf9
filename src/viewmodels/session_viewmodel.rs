// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Resuelve la sesión al montar, login y logout. Actualiza el AppState y
// deja que las vistas se re-rendericen vía subscribers.
// ============================================================================

use crate::models::User;
use crate::services::AuthService;
use crate::state::AppState;

/// ViewModel de sesión
pub struct SessionViewModel {
    auth_service: AuthService,
}

impl SessionViewModel {
    pub fn new(auth_service: AuthService) -> Self {
        Self { auth_service }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(AuthService::from_config(state.auth.clone()))
    }

    /// Leer la sesión persistida (al montar Landing/Home)
    pub fn resolve_session(&self, state: &AppState) -> bool {
        state.auth.set_resolving(true);
        let found = self.auth_service.restore_session().is_some();
        state.auth.set_resolving(false);
        found
    }

    /// Login con GitHub. Los errores quedan en `AuthPhase::Error`.
    pub async fn login(&self, state: &AppState) {
        if let Err(e) = self.auth_service.login().await {
            log::error!("❌ [SESSION-VM] Error iniciando login: {}", e);
            state.notify_subscribers();
        }
    }

    /// Logout completo
    pub fn logout(&self, state: &AppState) {
        if let Err(e) = self.auth_service.logout() {
            log::error!("❌ [SESSION-VM] Error navegando tras logout: {}", e);
            state.notify_subscribers();
        }
    }
}

/// Saludo del header
pub fn welcome_text(user: &User) -> String {
    match user.display_name() {
        Some(name) => format!("Welcome, {}", name),
        None => "Welcome".to_string(),
    }
}

/// Iniciales para el avatar cuando no hay foto
pub fn user_initials(user: &User) -> String {
    let initials: String = user
        .display_name()
        .unwrap_or("?")
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}
