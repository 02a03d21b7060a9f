use clap::Args;
use clubhouse_auth::UserService;
use clubhouse_entities::types::RoleType;
use colored::Colorize;

#[derive(Args)]
pub struct CreateAdminCommand {
    /// Database connection URL
    #[arg(long, env = "CLUBHOUSE_DATABASE_URL")]
    pub database_url: String,

    /// Display name of the admin
    #[arg(long)]
    pub name: String,

    /// Email the admin logs in with
    #[arg(long)]
    pub email: String,

    /// Initial password; generated when omitted
    #[arg(long)]
    pub password: Option<String>,
}

impl CreateAdminCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(async move {
            let db = clubhouse_database::establish_connection(&self.database_url).await?;
            let user_service = UserService::new(db);

            let password = match self.password {
                Some(password) => password,
                None => super::reset_password::generate_secure_password(),
            };

            let user = user_service
                .create_user(&self.name, &self.email, &password, RoleType::Admin)
                .await?;

            println!();
            println!("{}", "   Admin user created".bright_white().bold());
            println!("   Email:    {}", user.email.bright_cyan());
            println!("   Password: {}", password.bright_cyan());
            println!();
            println!(
                "{}",
                "   Store this password now; it is not shown again.".yellow()
            );
            println!();

            Ok(())
        })
    }
}
