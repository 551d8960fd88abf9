// ============================================================================
// REVIEW STATE - Formulario de código + resultado del análisis
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Language, ReviewResult};

#[derive(Clone)]
pub struct ReviewState {
    pub code: Rc<RefCell<String>>,
    pub language: Rc<RefCell<String>>,
    pub languages: Rc<RefCell<Vec<Language>>>,
    pub loading: Rc<RefCell<bool>>,
    pub result: Rc<RefCell<Option<ReviewResult>>>,
    pub error: Rc<RefCell<Option<String>>>,
}

impl ReviewState {
    pub fn new() -> Self {
        Self {
            code: Rc::new(RefCell::new(String::new())),
            language: Rc::new(RefCell::new("python".to_string())),
            languages: Rc::new(RefCell::new(Language::fallback_list())),
            loading: Rc::new(RefCell::new(false)),
            result: Rc::new(RefCell::new(None)),
            error: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_code(&self) -> String {
        self.code.borrow().clone()
    }

    pub fn set_code(&self, code: String) {
        *self.code.borrow_mut() = code;
    }

    pub fn get_language(&self) -> String {
        self.language.borrow().clone()
    }

    pub fn set_language(&self, language: String) {
        *self.language.borrow_mut() = language;
    }

    pub fn get_languages(&self) -> Vec<Language> {
        self.languages.borrow().clone()
    }

    /// Reemplaza la lista; si el lenguaje elegido ya no existe, se toma el primero
    pub fn set_languages(&self, languages: Vec<Language>) {
        let current = self.get_language();
        if !languages.iter().any(|l| l.id == current) {
            if let Some(first) = languages.first() {
                self.set_language(first.id.clone());
            }
        }
        *self.languages.borrow_mut() = languages;
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_result(&self) -> Option<ReviewResult> {
        self.result.borrow().clone()
    }

    pub fn set_result(&self, result: Option<ReviewResult>) {
        *self.result.borrow_mut() = result;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::new()
    }
}
