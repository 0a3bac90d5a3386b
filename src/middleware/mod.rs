pub mod auth;
pub mod method_override;
pub mod response;

pub use auth::{require_auth, AuthUser};
pub use method_override::override_method;
pub use response::{ApiResponse, ApiResult};
