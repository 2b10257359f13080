use saarthi_auth::{Clock, SessionStore};

use crate::cli::{GlobalFlags, LoginArgs};
use crate::output::output;

use super::{LOGIN_FAILED, auth_response};

pub async fn handle<C: Clock>(
    args: &LoginArgs,
    mut store: SessionStore<C>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    store.select_role(args.role);

    let identity = store
        .login(&args.email, &args.password, args.role)
        .await
        .map_err(|error| {
            tracing::debug!(%error, "login failed");
            anyhow::anyhow!(LOGIN_FAILED)
        })?;

    output(&auth_response(identity), flags.format)
}
