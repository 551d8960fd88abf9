pub mod user;
pub mod review;
pub mod language;
pub mod callback;

pub use user::User;
pub use review::{AnalyzeRequest, FixSuggestions, Issue, IssueCategory, QualityLevel, ReviewResult};
pub use language::{Language, LanguagesResponse};
pub use callback::{CallbackPayload, is_direct_login_query};
