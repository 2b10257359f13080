use saarthi_core::{Role, RoleProfile};

/// Fields collected by the signup form.
///
/// `profile` holds the role-specific extras (doctor license, pharmacy
/// address); it is kept only when it belongs to `role`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub profile: Option<RoleProfile>,
}

impl SignupRequest {
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            phone: phone.into(),
            role,
            profile: None,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: RoleProfile) -> Self {
        self.profile = Some(profile);
        self
    }
}
