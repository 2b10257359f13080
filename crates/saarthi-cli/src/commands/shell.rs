//! Line-oriented session shell.
//!
//! One-shot commands drop their session on exit; the shell keeps a single
//! `SessionStore` alive across lines so the role → login → dashboard →
//! logout cycle can be walked by hand.

use std::io::IsTerminal;
use std::str::FromStr;

use anyhow::Context;
use saarthi_auth::{Clock, SessionStore, SignupRequest};
use saarthi_core::Role;
use saarthi_core::responses::RoleSummary;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::output::render;

use super::{LOGIN_FAILED, accounts::demo_accounts, auth_response, status_response};

const HELP: &str = "\
commands:
  roles                          list roles
  accounts                       list demo accounts
  role <role>                    choose the role to sign in as
  back                           forget the chosen role
  login <email> [password]       log in under the chosen role
  signup <email> <phone> <name>  create a patient or admin account under the chosen role
  whoami                         show the session
  route                          show the screen the session routes to
  logout                         end the session
  help                           show this text
  exit                           leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Roles,
    Accounts,
    Role(Role),
    Back,
    Login { email: String, password: String },
    Signup { email: String, phone: String, name: String },
    Whoami,
    Route,
    Logout,
    Help,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            anyhow::bail!("empty command");
        };

        let command = match verb {
            "roles" => Self::Roles,
            "accounts" => Self::Accounts,
            "role" => {
                let name = words.next().context("usage: role <patient|doctor|pharmacy|admin>")?;
                Self::Role(name.parse()?)
            }
            "back" => Self::Back,
            "login" => {
                let email = words.next().context("usage: login <email> [password]")?;
                Self::Login {
                    email: email.to_string(),
                    password: words.next().unwrap_or_default().to_string(),
                }
            }
            "signup" => {
                let usage = "usage: signup <email> <phone> <name>";
                let email = words.next().context(usage)?.to_string();
                let phone = words.next().context(usage)?.to_string();
                let name = words.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    anyhow::bail!(usage);
                }
                Self::Signup { email, phone, name }
            }
            "whoami" => Self::Whoami,
            "route" => Self::Route,
            "logout" => Self::Logout,
            "help" | "?" => Self::Help,
            "exit" | "quit" => Self::Exit,
            other => anyhow::bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(command)
    }
}

#[derive(Debug)]
enum Outcome {
    Print(Value),
    Text(&'static str),
    Exit,
}

pub async fn handle<C: Clock>(mut store: SessionStore<C>, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if interactive {
            eprint!("saarthi> ");
        }
        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match line.parse::<ShellCommand>() {
            Ok(command) => execute(&mut store, command).await,
            Err(error) => Err(error),
        };

        match outcome {
            Ok(Outcome::Print(value)) => println!("{}", render(&value, flags.format)?),
            Ok(Outcome::Text(text)) => println!("{text}"),
            Ok(Outcome::Exit) => break,
            Err(error) => eprintln!("error: {error:#}"),
        }
    }

    store.logout();
    Ok(())
}

async fn execute<C: Clock>(
    store: &mut SessionStore<C>,
    command: ShellCommand,
) -> anyhow::Result<Outcome> {
    let value = match command {
        ShellCommand::Roles => {
            let roles: Vec<RoleSummary> = Role::ALL.into_iter().map(RoleSummary::from).collect();
            serde_json::to_value(roles)?
        }
        ShellCommand::Accounts => serde_json::to_value(demo_accounts(store))?,
        ShellCommand::Role(role) => {
            store.select_role(role);
            serde_json::to_value(status_response(store.state()))?
        }
        ShellCommand::Back => {
            store.clear_role();
            serde_json::to_value(status_response(store.state()))?
        }
        ShellCommand::Login { email, password } => {
            let role = chosen_role(store)?;
            let identity = store.login(&email, &password, role).await.map_err(|error| {
                tracing::debug!(%error, "login failed");
                anyhow::anyhow!(LOGIN_FAILED)
            })?;
            serde_json::to_value(auth_response(identity))?
        }
        ShellCommand::Signup { email, phone, name } => {
            let role = chosen_role(store)?;
            if matches!(role, Role::Doctor | Role::Pharmacy) {
                anyhow::bail!(
                    "signup as {role} needs license details; use `saarthi signup --role {role}`"
                );
            }
            let identity = store
                .signup(SignupRequest::new(email, "", name, phone, role))
                .await;
            serde_json::to_value(auth_response(identity))?
        }
        ShellCommand::Whoami => serde_json::to_value(status_response(store.state()))?,
        ShellCommand::Route => {
            let destination = store.destination();
            serde_json::json!({ "screen": destination, "path": destination.path() })
        }
        ShellCommand::Logout => {
            store.logout();
            serde_json::to_value(status_response(store.state()))?
        }
        ShellCommand::Help => return Ok(Outcome::Text(HELP)),
        ShellCommand::Exit => return Ok(Outcome::Exit),
    };
    Ok(Outcome::Print(value))
}

/// Credentials are only taken once a role has been picked.
fn chosen_role<C: Clock>(store: &SessionStore<C>) -> anyhow::Result<Role> {
    store
        .pending_role()
        .context("choose a role first: role <patient|doctor|pharmacy|admin>")
}
