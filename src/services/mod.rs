pub mod http;
pub mod navigation;
pub mod api_client;
pub mod auth_service;
pub mod review_service;

pub use http::{GlooTransport, HttpRequest, HttpResponse, HttpTransport, Method};
pub use navigation::{current_location, BrowserNavigator, Navigator};
pub use api_client::{ApiClient, CodeExchangeResponse};
pub use auth_service::AuthService;
pub use review_service::ReviewService;
