// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::is_direct_login_query;
use crate::state::{AuthState, ReviewState};
use crate::utils::{CALLBACK_PATH, HOME_PATH};

/// Pantalla actual (derivada de la URL al cargar la página)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Callback,
    Home,
}

impl Route {
    /// `auth=success` en cualquier ruta = entrega directa del backend → Callback
    pub fn from_location(path: &str, query: &str) -> Self {
        if is_direct_login_query(query) {
            return Route::Callback;
        }
        match path.trim_end_matches('/') {
            CALLBACK_PATH => Route::Callback,
            HOME_PATH => Route::Home,
            _ => Route::Landing,
        }
    }
}

/// Estado de la pantalla de callback
#[derive(Clone, Debug, PartialEq)]
pub enum CallbackStatus {
    Pending,
    Failed(String),
    Succeeded,
}

/// Tipo de actualización del DOM
#[derive(Clone, Debug)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IncrementalUpdate {
    /// Botón de enviar (disabled/enabled) al escribir
    SubmitButton,
    /// Panel de resultado / error del análisis
    ReviewPanel,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub route: Rc<RefCell<Route>>,
    pub auth: AuthState,
    pub review: ReviewState,
    pub callback_status: Rc<RefCell<CallbackStatus>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(route: Route) -> Self {
        Self {
            route: Rc::new(RefCell::new(route)),
            auth: AuthState::new(),
            review: ReviewState::new(),
            callback_status: Rc::new(RefCell::new(CallbackStatus::Pending)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn route(&self) -> Route {
        self.route.borrow().clone()
    }

    pub fn get_callback_status(&self) -> CallbackStatus {
        self.callback_status.borrow().clone()
    }

    pub fn set_callback_status(&self, status: CallbackStatus) {
        *self.callback_status.borrow_mut() = status;
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar re-render completo
    pub fn notify_subscribers(&self) {
        self.notify_subscribers_with_type(UpdateType::FullRender);
    }

    /// Notificar a todos los subscribers con tipo específico
    pub fn notify_subscribers_with_type(&self, update_type: UpdateType) {
        // Copiar la lista: un subscriber podría suscribir otro durante la notificación
        let subscribers: Vec<_> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subscribers {
            callback(update_type.clone());
        }
    }
}
