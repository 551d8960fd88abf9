pub mod app;
pub mod landing;
pub mod callback;
pub mod home;
pub mod review_panel;
pub mod shared;

pub use app::render_app;
pub use landing::{render_landing, render_login_button};
pub use callback::render_callback;
pub use home::render_home;
pub use review_panel::render_review_panel;
pub use shared::render_header;
