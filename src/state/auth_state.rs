// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================
// Anonymous → PendingRedirect → Authenticated, Error desde cualquier transición
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::User;
use crate::stores::Session;

#[derive(Debug, Clone, PartialEq)]
pub enum AuthPhase {
    Anonymous,
    PendingRedirect,
    Authenticated,
    Error(String),
}

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    pub phase: Rc<RefCell<AuthPhase>>,
    pub session: Rc<RefCell<Option<Session>>>,
    /// true mientras se resuelve la sesión guardada al montar la pantalla
    pub resolving: Rc<RefCell<bool>>,
}

impl AuthState {
    /// Crear nuevo estado de autenticación
    pub fn new() -> Self {
        Self {
            phase: Rc::new(RefCell::new(AuthPhase::Anonymous)),
            session: Rc::new(RefCell::new(None)),
            resolving: Rc::new(RefCell::new(true)),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        self.phase.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.phase.borrow(), AuthPhase::Authenticated) && self.session.borrow().is_some()
    }

    pub fn is_resolving(&self) -> bool {
        *self.resolving.borrow()
    }

    pub fn set_resolving(&self, resolving: bool) {
        *self.resolving.borrow_mut() = resolving;
    }

    pub fn user(&self) -> Option<User> {
        self.session.borrow().as_ref().map(|s| s.user.clone())
    }

    /// Anonymous | Error → PendingRedirect
    pub fn begin_redirect(&self) {
        *self.session.borrow_mut() = None;
        *self.phase.borrow_mut() = AuthPhase::PendingRedirect;
    }

    /// Cualquier fase → Authenticated
    pub fn authenticate(&self, session: Session) {
        *self.session.borrow_mut() = Some(session);
        *self.phase.borrow_mut() = AuthPhase::Authenticated;
        self.set_resolving(false);
    }

    /// Cualquier fase → Error (la sesión en memoria se descarta)
    pub fn fail(&self, message: impl Into<String>) {
        *self.session.borrow_mut() = None;
        *self.phase.borrow_mut() = AuthPhase::Error(message.into());
        self.set_resolving(false);
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        *self.session.borrow_mut() = None;
        *self.phase.borrow_mut() = AuthPhase::Anonymous;
        self.set_resolving(false);
    }

    pub fn error_message(&self) -> Option<String> {
        match &*self.phase.borrow() {
            AuthPhase::Error(message) => Some(message.clone()),
            _ => None,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
