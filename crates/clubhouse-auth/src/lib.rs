mod auth_service;
mod extract;
mod middleware;
mod permission_guard;
mod plugin;
mod user_service;

pub mod context;
pub mod handlers;
pub mod permissions;
pub mod state;
pub mod types;

pub use context::*;
pub use extract::RequireAuth;
pub use middleware::auth_middleware;
pub use permissions::*;
pub use state::*;

// Export plugin
pub use plugin::AuthPlugin;

// Export services
pub use auth_service::{AuthError, AuthService};
pub use user_service::{UserService, UserServiceError};
