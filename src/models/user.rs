use chrono::{DateTime, Utc};

const DEFAULT_BIO: &str = "Professional on PeerPals";

/// Fields submitted through the sign-in form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
}

impl Credentials {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = non_blank(bio.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = non_blank(location.into());
        self
    }

    /// The form only submits when a name has been entered.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Turns an empty form field into `None`.
pub fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl User {
    pub fn from_credentials(credentials: Credentials, joined_at: DateTime<Utc>) -> Self {
        Self {
            name: credentials.name.trim().to_string(),
            email: credentials.email.trim().to_string(),
            bio: credentials.bio,
            avatar: credentials.avatar,
            location: credentials.location,
            joined_at,
        }
    }

    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("")
    }

    /// Avatar fallback letter.
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }

    pub fn bio_or_default(&self) -> &str {
        self.bio.as_deref().unwrap_or(DEFAULT_BIO)
    }

    pub fn joined_label(&self) -> String {
        self.joined_at.format("%B %Y").to_string()
    }
}

pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sarah() -> User {
        let joined = Utc.with_ymd_and_hms(2024, 3, 14, 9, 0, 0).unwrap();
        User::from_credentials(
            Credentials::new("  Sarah Chen ", "sarah@example.com"),
            joined,
        )
    }

    #[test]
    fn name_is_trimmed_on_creation() {
        assert_eq!(sarah().name, "Sarah Chen");
    }

    #[test]
    fn display_helpers() {
        let user = sarah();
        assert_eq!(user.first_name(), "Sarah");
        assert_eq!(user.initial(), "S");
        assert_eq!(user.bio_or_default(), DEFAULT_BIO);
        assert_eq!(user.joined_label(), "March 2024");
    }

    #[test]
    fn initial_falls_back_for_empty_name() {
        assert_eq!(initial_of(""), "U");
        assert_eq!(initial_of("émile"), "É");
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        let creds = Credentials::new("Sam", "")
            .with_bio("   ")
            .with_location(" Lisbon ");
        assert_eq!(creds.bio, None);
        assert_eq!(creds.location.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn submittable_requires_a_name() {
        assert!(!Credentials::new("  ", "a@b.c").is_submittable());
        assert!(Credentials::new("Sam", "").is_submittable());
    }
}
