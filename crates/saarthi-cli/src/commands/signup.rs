use saarthi_auth::{Clock, SessionStore, SignupRequest};
use saarthi_core::{Role, RoleProfile};

use crate::cli::{GlobalFlags, SignupArgs};
use crate::output::output;

use super::auth_response;

pub async fn handle<C: Clock>(
    args: SignupArgs,
    mut store: SessionStore<C>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let profile = profile_from_args(&args)?;
    store.select_role(args.role);

    let mut request = SignupRequest::new(args.email, args.password, args.name, args.phone, args.role);
    if let Some(profile) = profile {
        request = request.with_profile(profile);
    }

    let identity = store.signup(request).await;
    output(&auth_response(identity), flags.format)
}

/// Collect the role-specific signup fields.
///
/// Doctors need a specialization and license number; pharmacies need a
/// name, license number, and address. Other roles take no extras.
fn profile_from_args(args: &SignupArgs) -> anyhow::Result<Option<RoleProfile>> {
    match args.role {
        Role::Doctor => Ok(Some(RoleProfile::Doctor {
            specialization: required(args.specialization.as_deref(), "--specialization", args.role)?,
            license_number: required(args.license_number.as_deref(), "--license-number", args.role)?,
            hospital_name: args
                .hospital_name
                .clone()
                .filter(|name| !name.trim().is_empty()),
        })),
        Role::Pharmacy => Ok(Some(RoleProfile::Pharmacy {
            pharmacy_name: required(args.pharmacy_name.as_deref(), "--pharmacy-name", args.role)?,
            license_number: required(args.license_number.as_deref(), "--license-number", args.role)?,
            address: required(args.address.as_deref(), "--address", args.role)?,
        })),
        Role::Patient | Role::Admin => Ok(None),
    }
}

fn required(value: Option<&str>, flag: &str, role: Role) -> anyhow::Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("signup as {role} requires {flag}"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::{Cli, Commands};

    fn parse(extra: &[&str]) -> SignupArgs {
        let mut argv = vec![
            "saarthi", "signup", "--email", "x@y.in", "--name", "X", "--phone", "+91",
        ];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).expect("cli should parse").command {
            Commands::Signup(args) => args,
            other => panic!("expected signup, got {other:?}"),
        }
    }

    #[test]
    fn phone_is_required() {
        let parsed = Cli::try_parse_from([
            "saarthi", "signup", "--role", "patient", "--email", "x@y.in", "--name", "X",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn patient_needs_no_profile() {
        let args = parse(&["--role", "patient"]);
        assert_eq!(profile_from_args(&args).unwrap(), None);
    }

    #[test]
    fn doctor_profile_collects_fields() {
        let args = parse(&[
            "--role",
            "doctor",
            "--specialization",
            "Dermatology",
            "--license-number",
            "MCI-9",
        ]);
        assert_eq!(
            profile_from_args(&args).unwrap(),
            Some(RoleProfile::Doctor {
                specialization: "Dermatology".into(),
                license_number: "MCI-9".into(),
                hospital_name: None,
            })
        );
    }

    #[test]
    fn doctor_without_license_is_rejected() {
        let args = parse(&["--role", "doctor", "--specialization", "ENT"]);
        let err = profile_from_args(&args).unwrap_err();
        assert!(err.to_string().contains("--license-number"));
    }

    #[test]
    fn pharmacy_requires_address() {
        let args = parse(&[
            "--role",
            "pharmacy",
            "--pharmacy-name",
            "City Meds",
            "--license-number",
            "PH-1",
            "--address",
            "  ",
        ]);
        let err = profile_from_args(&args).unwrap_err();
        assert!(err.to_string().contains("--address"));
    }
}
