mod create_admin;
mod reset_password;
mod serve;

pub use create_admin::CreateAdminCommand;
pub use reset_password::ResetPasswordCommand;
pub use serve::ServeCommand;
