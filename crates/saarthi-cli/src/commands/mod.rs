mod accounts;
mod login;
mod roles;
mod shell;
mod signup;

use saarthi_auth::SessionState;
use saarthi_config::SaarthiConfig;
use saarthi_core::Identity;
use saarthi_core::responses::{AuthResponse, SessionStatusResponse};

use crate::cli::{Commands, GlobalFlags};
use crate::bootstrap;

/// Message shown for any rejected login.
pub const LOGIN_FAILED: &str = "invalid credentials or role mismatch";

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &SaarthiConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Roles => roles::handle(flags),
        Commands::Accounts => accounts::handle(&bootstrap::build_store(config), flags),
        Commands::Login(args) => login::handle(&args, bootstrap::build_store(config), flags).await,
        Commands::Signup(args) => signup::handle(args, bootstrap::build_store(config), flags).await,
        Commands::Shell => shell::handle(bootstrap::build_store(config), flags).await,
    }
}

fn auth_response(identity: &Identity) -> AuthResponse {
    AuthResponse {
        authenticated: true,
        identity: identity.clone(),
        destination: saarthi_core::Destination::dashboard(identity.role)
            .path()
            .to_string(),
    }
}

fn status_response(state: &SessionState) -> SessionStatusResponse {
    SessionStatusResponse {
        authenticated: state.is_authenticated(),
        phase: state.phase(),
        pending_role: state.pending_role(),
        identity: state.identity().cloned(),
        destination: state.destination().path().to_string(),
    }
}
