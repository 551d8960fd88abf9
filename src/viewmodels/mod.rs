pub mod session_viewmodel;
pub mod callback_viewmodel;
pub mod review_viewmodel;

pub use session_viewmodel::{SessionViewModel, welcome_text, user_initials};
pub use callback_viewmodel::CallbackViewModel;
pub use review_viewmodel::{ReviewViewModel, can_submit, quality_label};
