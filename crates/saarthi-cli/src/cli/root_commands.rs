use clap::{Args, Subcommand};
use saarthi_core::Role;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the portal roles and their dashboards.
    Roles,
    /// List the demo accounts available for login.
    Accounts,
    /// Log in under a role and print the dashboard it routes to.
    Login(LoginArgs),
    /// Create an account and print the dashboard it routes to.
    Signup(SignupArgs),
    /// Interactive session that keeps you logged in between commands.
    Shell,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Role to log in as (patient, doctor, pharmacy, admin).
    #[arg(long)]
    pub role: Role,
    #[arg(long)]
    pub email: String,
    /// Accepted but not verified.
    #[arg(long, default_value = "")]
    pub password: String,
}

#[derive(Clone, Debug, Args)]
pub struct SignupArgs {
    /// Role to sign up as (patient, doctor, pharmacy, admin).
    #[arg(long)]
    pub role: Role,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub password: String,
    /// Doctor: clinical specialization.
    #[arg(long)]
    pub specialization: Option<String>,
    /// Doctor or pharmacy: license number.
    #[arg(long)]
    pub license_number: Option<String>,
    /// Doctor: hospital or clinic name.
    #[arg(long)]
    pub hospital_name: Option<String>,
    /// Pharmacy: store name.
    #[arg(long)]
    pub pharmacy_name: Option<String>,
    /// Pharmacy: full address.
    #[arg(long)]
    pub address: Option<String>,
}
