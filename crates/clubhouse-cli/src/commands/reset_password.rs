use clap::Args;
use clubhouse_auth::UserService;
use colored::Colorize;
use rand::Rng;

#[derive(Args)]
pub struct ResetPasswordCommand {
    /// Database connection URL
    #[arg(long, env = "CLUBHOUSE_DATABASE_URL")]
    pub database_url: String,

    /// Email of the user whose password is reset
    #[arg(long)]
    pub email: String,
}

pub(crate) fn generate_secure_password() -> String {
    const CHARSET: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";
    let mut rng = rand::thread_rng();
    (0..16)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

impl ResetPasswordCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(async move {
            let db = clubhouse_database::establish_connection(&self.database_url).await?;
            let user_service = UserService::new(db);

            let new_password = generate_secure_password();
            user_service.set_password(&self.email, &new_password).await?;

            println!();
            println!(
                "{}",
                "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_green()
            );
            println!("{}", "   Password reset successfully!".bright_white().bold());
            println!();
            println!("   Email:        {}", self.email.bright_cyan());
            println!("   New password: {}", new_password.bright_cyan());
            println!();
            println!(
                "{}",
                "   Store this password now; it is not shown again.".yellow()
            );
            println!(
                "{}",
                "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━".bright_green()
            );
            println!();

            Ok(())
        })
    }
}
