//! Credential checking against the fixed user list.
//!
//! There is no user registration and no password hashing: the application
//! ships with a hard-coded list of known users and checks submitted
//! credentials with exact string equality. See [crate::fixtures::mock_users]
//! for the list itself.

use crate::auth::User;

/// A known (username, password) pair and the user it authenticates.
///
/// The password lives here and only here. The [User] record that gets
/// persisted and passed around never contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    /// The plain-text password for this user.
    pub password: String,
    /// The user authenticated by this credential.
    pub user: User,
}

impl Credential {
    /// Create a credential for `user` with the given plain-text `password`.
    pub fn new(user: User, password: &str) -> Self {
        Self {
            password: password.to_string(),
            user,
        }
    }
}

/// Find the user matching `username` and `password`, if any.
///
/// Both fields are compared with exact, case-sensitive string equality; there
/// is no trimming or normalization. Returns [None] when no credential
/// matches, which callers report as an expected outcome rather than an error.
pub fn verify_credentials<'a>(
    credentials: &'a [Credential],
    username: &str,
    password: &str,
) -> Option<&'a User> {
    credentials
        .iter()
        .find(|credential| credential.user.username == username && credential.password == password)
        .map(|credential| &credential.user)
}

#[cfg(test)]
mod credential_tests {
    use crate::{
        auth::{Role, User, verify_credentials},
        fixtures,
    };

    fn test_user(username: &str) -> User {
        User {
            id: "1".to_string(),
            username: username.to_string(),
            email: format!("{username}@school.edu"),
            role: Role::Staff,
            name: username.to_string(),
        }
    }

    #[test]
    fn verify_succeeds_on_exact_match() {
        let credentials = fixtures::mock_users();

        let user = verify_credentials(&credentials, "admin", "admin123");

        assert_eq!(user.map(|u| u.username.as_str()), Some("admin"));
        assert_eq!(user.map(|u| u.role), Some(Role::Admin));
    }

    #[test]
    fn verify_fails_on_wrong_password() {
        let credentials = fixtures::mock_users();

        assert_eq!(verify_credentials(&credentials, "admin", "admin124"), None);
    }

    #[test]
    fn verify_fails_on_unknown_username() {
        let credentials = fixtures::mock_users();

        assert_eq!(
            verify_credentials(&credentials, "principal", "admin123"),
            None
        );
    }

    #[test]
    fn verify_is_case_sensitive() {
        let credentials = vec![super::Credential::new(test_user("staff"), "staff123")];

        assert_eq!(verify_credentials(&credentials, "Staff", "staff123"), None);
        assert_eq!(verify_credentials(&credentials, "staff", "Staff123"), None);
        assert!(verify_credentials(&credentials, "staff", "staff123").is_some());
    }

    #[test]
    fn verify_fails_on_empty_list() {
        assert_eq!(verify_credentials(&[], "admin", "admin123"), None);
    }
}
