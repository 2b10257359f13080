use saarthi_auth::{Clock, SessionStore};
use saarthi_core::responses::DemoAccount;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn handle<C: Clock>(store: &SessionStore<C>, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&demo_accounts(store), flags.format)
}

pub(super) fn demo_accounts<C: Clock>(store: &SessionStore<C>) -> Vec<DemoAccount> {
    store
        .directory()
        .accounts()
        .into_iter()
        .map(|identity| DemoAccount {
            email: identity.email.clone(),
            name: identity.name.clone(),
            role: identity.role,
        })
        .collect()
}
