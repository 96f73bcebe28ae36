//! User entity.

use crate::UserId;
use serde::{Deserialize, Serialize};

/// User record as persisted in the `users` table.
///
/// The id is fixed when the user is created; every other field may be
/// rewritten by an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable once stored.
    #[serde(rename = "uuid")]
    pub id: UserId,

    /// First name.
    pub firstname: String,

    /// Last name.
    pub lastname: String,

    /// Login name.
    pub username: String,

    /// Password, stored as given (never exposed via serialization).
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Email address.
    pub email: String,

    /// IP address.
    pub ip: String,

    /// MAC address.
    pub mac_address: String,

    /// Personal website.
    pub website: String,

    /// Image reference.
    pub image: String,
}

impl User {
    /// Creates a new user with a fresh id and empty profile fields.
    #[must_use]
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: UserId::new(),
            firstname: String::new(),
            lastname: String::new(),
            username,
            password,
            email,
            ip: String::new(),
            mac_address: String::new(),
            website: String::new(),
            image: String::new(),
        }
    }

    /// Sets first and last name.
    #[must_use]
    pub fn with_name(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self.lastname = lastname.into();
        self
    }

    /// Sets IP and MAC address.
    #[must_use]
    pub fn with_network(mut self, ip: impl Into<String>, mac_address: impl Into<String>) -> Self {
        self.ip = ip.into();
        self.mac_address = mac_address.into();
        self
    }

    /// Sets the website.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    /// Sets the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new(
            "jdoe".to_string(),
            "jdoe@example.com".to_string(),
            "secret".to_string(),
        )
    }

    #[test]
    fn test_new_user_has_empty_profile() {
        let user = create_test_user();
        assert_eq!(user.username, "jdoe");
        assert!(user.firstname.is_empty());
        assert!(user.mac_address.is_empty());
        assert!(user.image.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let user = create_test_user()
            .with_name("John", "Doe")
            .with_network("10.0.0.1", "00:1A:2B:3C:4D:5E")
            .with_website("https://jdoe.dev")
            .with_image("avatars/jdoe.png");

        assert_eq!(user.firstname, "John");
        assert_eq!(user.lastname, "Doe");
        assert_eq!(user.ip, "10.0.0.1");
        assert_eq!(user.mac_address, "00:1A:2B:3C:4D:5E");
        assert_eq!(user.website, "https://jdoe.dev");
        assert_eq!(user.image, "avatars/jdoe.png");
    }

    #[test]
    fn test_serialization_hides_password() {
        let user = create_test_user();
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["uuid"], user.id.to_string());
        assert_eq!(json["username"], "jdoe");
        assert!(json.get("password").is_none());
    }
}
