use std::collections::HashMap;

use async_graphql::{Enum, SimpleObject};

/// Roles that gate which operations a logged-in user may call
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Student,
    ClubPresident,
}

impl Role {
    /// The spelling used in the credential file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "administrator" => Some(Role::Administrator),
            "student" => Some(Role::Student),
            "club-president" => Some(Role::ClubPresident),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Student => "student",
            Role::ClubPresident => "club-president",
        }
    }
}

/// The identity attached to the GraphQL context for a logged-in request.
#[derive(SimpleObject, Clone, Debug)]
pub struct User {
    /// The user's login ID
    pub id: String,
    /// The role their credentials grant
    pub role: Role,
}

/// Why a login attempt was rejected.
///
/// Unknown IDs and wrong passwords are deliberately indistinguishable;
/// a wrong role gets its own message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFailure {
    InvalidCredentials,
    WrongRole,
}

/// Credentials loaded once at startup, immutable thereafter.
///
/// Passwords are stored and compared as plaintext. Do not point this at
/// credentials you care about.
#[derive(Default)]
pub struct CredentialStore {
    passwords: HashMap<String, String>,
    roles: HashMap<String, Role>,
}

impl CredentialStore {
    pub fn insert(&mut self, id: impl Into<String>, password: impl Into<String>, role: Role) {
        let id = id.into();
        self.passwords.insert(id.clone(), password.into());
        self.roles.insert(id, role);
    }

    /// Checks an exact, case-sensitive match of ID, password, and role.
    pub fn authenticate(
        &self,
        id: &str,
        password: &str,
        required_role: Role,
    ) -> Result<(), AuthFailure> {
        match self.passwords.get(id) {
            Some(stored) if stored == password => {}
            _ => return Err(AuthFailure::InvalidCredentials),
        }

        match self.roles.get(id) {
            Some(role) if *role == required_role => Ok(()),
            _ => Err(AuthFailure::WrongRole),
        }
    }

    pub fn role_of(&self, id: &str) -> Option<Role> {
        self.roles.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CredentialStore {
        let mut store = CredentialStore::default();
        store.insert("admin", "admin123", Role::Administrator);
        store.insert("jihye", "flowers", Role::Student);
        store
    }

    #[test]
    fn exact_match_authenticates() {
        assert_eq!(
            store().authenticate("admin", "admin123", Role::Administrator),
            Ok(())
        );
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        assert_eq!(
            store().authenticate("admin", "wrong", Role::Administrator),
            Err(AuthFailure::InvalidCredentials)
        );
    }

    #[test]
    fn password_comparison_is_case_sensitive() {
        assert_eq!(
            store().authenticate("admin", "Admin123", Role::Administrator),
            Err(AuthFailure::InvalidCredentials)
        );
    }

    #[test]
    fn unknown_id_is_invalid_credentials() {
        assert_eq!(
            store().authenticate("nobody", "admin123", Role::Administrator),
            Err(AuthFailure::InvalidCredentials)
        );
    }

    #[test]
    fn right_password_wrong_role_is_wrong_role() {
        assert_eq!(
            store().authenticate("jihye", "flowers", Role::ClubPresident),
            Err(AuthFailure::WrongRole)
        );
    }

    #[test]
    fn role_names_round_trip() {
        for role in [Role::Administrator, Role::Student, Role::ClubPresident] {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("janitor"), None);
    }
}
