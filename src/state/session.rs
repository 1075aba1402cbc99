use chrono::{DateTime, Utc};

use crate::models::{Credentials, User};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(User),
}

/// Holds who is signed in. Authentication is mocked: every submission
/// succeeds and manufactures a fresh [`User`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionStore {
    session: Session,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authenticate(&mut self, credentials: Credentials) -> User {
        self.authenticate_at(credentials, Utc::now())
    }

    pub fn authenticate_at(&mut self, credentials: Credentials, now: DateTime<Utc>) -> User {
        let user = User::from_credentials(credentials, now);
        log::info!("signed in as {}", user.name);
        self.session = Session::Authenticated(user.clone());
        user
    }

    pub fn sign_out(&mut self) {
        if let Session::Authenticated(user) = &self.session {
            log::info!("{} signed out", user.name);
        }
        self.session = Session::Unauthenticated;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn current_user(&self) -> Option<&User> {
        match &self.session {
            Session::Authenticated(user) => Some(user),
            Session::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn starts_unauthenticated() {
        let store = SessionStore::new();
        assert_eq!(store.session(), &Session::Unauthenticated);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn authenticate_stamps_join_time() {
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let mut store = SessionStore::new();
        let user = store.authenticate_at(Credentials::new("Sarah", "s@example.com"), now);
        assert_eq!(user.name, "Sarah");
        assert_eq!(user.joined_at, now);
        assert!(store.is_authenticated());
    }

    #[test]
    fn reauthenticate_replaces_user() {
        let mut store = SessionStore::new();
        store.authenticate(Credentials::new("Sarah", ""));
        store.authenticate(Credentials::new("Omar", ""));
        assert_eq!(store.current_user().map(|u| u.name.as_str()), Some("Omar"));
    }

    #[test]
    fn sign_out_from_any_state() {
        let mut store = SessionStore::new();
        store.sign_out();
        assert_eq!(store.session(), &Session::Unauthenticated);

        store.authenticate(Credentials::new("Sarah", ""));
        store.sign_out();
        assert_eq!(store.session(), &Session::Unauthenticated);
    }
}
