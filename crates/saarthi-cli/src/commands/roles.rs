use saarthi_core::Role;
use saarthi_core::responses::RoleSummary;

use crate::cli::GlobalFlags;
use crate::output::output;

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let roles: Vec<RoleSummary> = Role::ALL.into_iter().map(RoleSummary::from).collect();
    output(&roles, flags.format)
}
