//! The session store: sole owner of "who is logged in".

use std::time::Duration;

use saarthi_core::{Destination, Identity, Role, RoleProfile, SessionPhase};

use crate::clock::{Clock, SystemClock};
use crate::directory::Directory;
use crate::error::AuthError;
use crate::signup::SignupRequest;

/// Fixed latency applied before login and signup resolve.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Current authentication state.
///
/// `identity` present means authenticated. `pending_role` is the role picked
/// before credentials were entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    identity: Option<Identity>,
    pending_role: Option<Role>,
}

impl SessionState {
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub const fn pending_role(&self) -> Option<Role> {
        self.pending_role
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (&self.identity, self.pending_role) {
            (Some(identity), _) => SessionPhase::Authenticated(identity.role),
            (None, Some(role)) => SessionPhase::RoleChosen(role),
            (None, None) => SessionPhase::Anonymous,
        }
    }

    /// Screen the UI should mount for this state.
    #[must_use]
    pub fn destination(&self) -> Destination {
        Destination::for_phase(self.phase())
    }
}

/// Holds the session and exposes the login/signup/logout operations.
///
/// Every mutation takes `&mut self`, so at most one operation is in flight
/// and each one either fully applies or leaves the state untouched.
#[derive(Debug)]
pub struct SessionStore<C: Clock = SystemClock> {
    state: SessionState,
    directory: Directory,
    clock: C,
    delay: Duration,
}

impl<C: Clock> SessionStore<C> {
    #[must_use]
    pub fn new(directory: Directory, clock: C) -> Self {
        Self {
            state: SessionState::default(),
            directory,
            clock,
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.state.identity()
    }

    #[must_use]
    pub const fn pending_role(&self) -> Option<Role> {
        self.state.pending_role()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn destination(&self) -> Destination {
        self.state.destination()
    }

    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Record the role being onboarded. Any role is accepted and may be
    /// re-selected freely.
    pub fn select_role(&mut self, role: Role) {
        tracing::debug!(%role, "role selected");
        self.state.pending_role = Some(role);
    }

    /// Forget the pending role (back to the role picker).
    pub fn clear_role(&mut self) {
        self.state.pending_role = None;
    }

    /// Log in as `email` under `role`.
    ///
    /// A known email must be used with the role it is registered under. An
    /// unknown email synthesizes a fresh identity for `role`. The password is
    /// never checked.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::RoleMismatch`] when `email` is in the directory
    /// under another role. The session is left unchanged.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<&Identity, AuthError> {
        self.clock.sleep(self.delay).await;
        tracing::debug!(
            password_supplied = !password.is_empty(),
            "password is not verified against the directory"
        );

        let identity = match self.directory.lookup(email) {
            Some(existing) if existing.role != role => {
                tracing::warn!(
                    email,
                    requested = %role,
                    registered = %existing.role,
                    "login rejected: role mismatch"
                );
                return Err(AuthError::RoleMismatch {
                    email: email.to_string(),
                    requested: role,
                    registered: existing.role,
                });
            }
            Some(existing) => existing.clone(),
            None => {
                tracing::debug!(email, %role, "unknown email; synthesizing identity");
                self.synthesize(
                    email,
                    Identity::display_name_from_email(email),
                    None,
                    role,
                    None,
                )
            }
        };

        tracing::info!(id = %identity.id, role = %identity.role, "logged in");
        Ok(&*self.state.identity.insert(identity))
    }

    /// Create a new identity from signup fields and log it in.
    ///
    /// Always succeeds. No uniqueness check is made against existing emails.
    pub async fn signup(&mut self, request: SignupRequest) -> &Identity {
        self.clock.sleep(self.delay).await;

        let SignupRequest {
            email,
            password: _,
            name,
            phone,
            role,
            profile,
        } = request;

        let profile = match profile {
            Some(profile) if profile.role() == role => Some(profile),
            Some(profile) => {
                tracing::warn!(
                    %role,
                    profile_role = %profile.role(),
                    "discarding signup details that belong to another role"
                );
                None
            }
            None => None,
        };
        let phone = Some(phone).filter(|p| !p.is_empty());

        let identity = self.synthesize(&email, &name, phone, role, profile);
        tracing::info!(id = %identity.id, role = %identity.role, "signed up");
        self.state.identity.insert(identity)
    }

    /// Clear the identity and the pending role. Calling it again is a no-op.
    pub fn logout(&mut self) {
        if let Some(identity) = self.state.identity.take() {
            tracing::info!(id = %identity.id, "logged out");
        }
        self.state.pending_role = None;
    }

    fn synthesize(
        &self,
        email: &str,
        name: &str,
        phone: Option<String>,
        role: Role,
        profile: Option<RoleProfile>,
    ) -> Identity {
        let created_at = self.clock.now();
        let stamp = created_at.timestamp_millis();
        Identity {
            id: format!("user-{stamp}"),
            email: email.to_string(),
            name: name.to_string(),
            role,
            phone,
            health_id: role.carries_health_id().then(|| format!("HID-{stamp}")),
            created_at,
            profile,
        }
    }
}
