// ============================================================================
// SESSION STORE - Sesión persistida (user + token + timestamp de login)
// ============================================================================
// La sesión es todo o nada: si falta cualquiera de las tres claves, o el
// timestamp es demasiado antiguo, read() limpia el storage y devuelve None.
// ============================================================================

use std::rc::Rc;
use serde::{Deserialize, Serialize};
use crate::error::AppError;
use crate::models::User;
use crate::utils::{KeyValueStore, USER_STORAGE_KEY, TOKEN_STORAGE_KEY, LOGIN_TIMESTAMP_STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
    /// Epoch en milisegundos
    pub login_timestamp_ms: i64,
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    ttl_ms: i64,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>, ttl_ms: i64) -> Self {
        Self { storage, ttl_ms }
    }

    /// Guardar sesión con el timestamp actual
    pub fn save(&self, user: &User, token: &str) -> Result<Session, AppError> {
        self.save_at(user, token, now_ms())
    }

    pub fn save_at(&self, user: &User, token: &str, now_ms: i64) -> Result<Session, AppError> {
        let user_json = serde_json::to_string(user)?;

        // Sin await entre escrituras: ningún lector ve una sesión a medias.
        // Si una escritura falla se deshace todo.
        let written = self
            .storage
            .set(USER_STORAGE_KEY, &user_json)
            .and_then(|_| self.storage.set(TOKEN_STORAGE_KEY, token))
            .and_then(|_| self.storage.set(LOGIN_TIMESTAMP_STORAGE_KEY, &now_ms.to_string()));

        if let Err(e) = written {
            log::error!("❌ [SESSION] Error guardando sesión, limpiando: {}", e);
            self.clear();
            return Err(e);
        }

        log::info!("💾 [SESSION] Sesión guardada para {}", user.display_name().unwrap_or("<sin nombre>"));
        Ok(Session {
            user: user.clone(),
            token: token.to_string(),
            login_timestamp_ms: now_ms,
        })
    }

    /// Leer sesión válida (o limpiar y devolver None)
    pub fn read(&self) -> Option<Session> {
        self.read_at(now_ms())
    }

    pub fn read_at(&self, now_ms: i64) -> Option<Session> {
        let user_json = self.storage.get(USER_STORAGE_KEY);
        let token = self.storage.get(TOKEN_STORAGE_KEY);
        let timestamp = self.storage.get(LOGIN_TIMESTAMP_STORAGE_KEY);

        let (Some(user_json), Some(token), Some(timestamp)) = (user_json, token, timestamp) else {
            if self.has_any_key() {
                log::warn!("⚠️ [SESSION] Datos de autenticación incompletos, cerrando sesión");
                self.clear();
            }
            return None;
        };

        let user = match serde_json::from_str::<User>(&user_json) {
            Ok(user) => user,
            Err(e) => {
                log::error!("❌ [SESSION] Error parseando usuario desde storage: {}", e);
                self.clear();
                return None;
            }
        };

        let login_timestamp_ms = match timestamp.trim().parse::<i64>() {
            Ok(ts) => ts,
            Err(_) => {
                log::error!("❌ [SESSION] Timestamp de login inválido: {}", timestamp);
                self.clear();
                return None;
            }
        };

        if token.is_empty() {
            log::warn!("⚠️ [SESSION] Token vacío, cerrando sesión");
            self.clear();
            return None;
        }

        let Some(elapsed_ms) = now_ms.checked_sub(login_timestamp_ms) else {
            log::error!("❌ [SESSION] Timestamp de login fuera de rango: {}", login_timestamp_ms);
            self.clear();
            return None;
        };

        if elapsed_ms > self.ttl_ms {
            log::warn!("⚠️ [SESSION] Autenticación expirada, cerrando sesión");
            self.clear();
            return None;
        }

        Some(Session { user, token, login_timestamp_ms })
    }

    /// Eliminar las tres claves (idempotente)
    pub fn clear(&self) {
        self.storage.remove(USER_STORAGE_KEY);
        self.storage.remove(TOKEN_STORAGE_KEY);
        self.storage.remove(LOGIN_TIMESTAMP_STORAGE_KEY);
    }

    fn has_any_key(&self) -> bool {
        [USER_STORAGE_KEY, TOKEN_STORAGE_KEY, LOGIN_TIMESTAMP_STORAGE_KEY]
            .iter()
            .any(|key| self.storage.get(key).is_some())
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
