use std::collections::HashMap;

use uuid::Uuid;

pub struct Session {
    pub user: String,
    pub key: String,
}

/// Live API tokens, keyed by token. Never persisted; restarting the server
/// logs everyone out.
#[derive(Default)]
pub struct SessionStore {
    sessions: HashMap<String, Session>,
}

impl SessionStore {
    /// Returns the user's existing token if they are already logged in,
    /// otherwise issues a fresh one.
    pub fn get_or_generate_token(&mut self, user: &str) -> String {
        if let Some(session) = self.sessions.values().find(|session| session.user == user) {
            return session.key.clone();
        }

        let token = Uuid::new_v4().to_string();
        self.sessions.insert(
            token.clone(),
            Session {
                user: user.to_owned(),
                key: token.clone(),
            },
        );

        token
    }

    pub fn user_for_token(&self, token: &str) -> Option<&str> {
        self.sessions
            .get(token)
            .map(|session| session.user.as_str())
    }

    /// Drops the user's session, invalidating their token.
    pub fn remove(&mut self, user: &str) {
        self.sessions.retain(|_, session| session.user != user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_resolve_to_their_user() {
        let mut sessions = SessionStore::default();
        let token = sessions.get_or_generate_token("jihye");

        assert_eq!(sessions.user_for_token(&token), Some("jihye"));
        assert_eq!(sessions.user_for_token("not-a-token"), None);
    }

    #[test]
    fn logging_in_twice_reuses_the_token() {
        let mut sessions = SessionStore::default();
        let first = sessions.get_or_generate_token("jihye");
        let second = sessions.get_or_generate_token("jihye");

        assert_eq!(first, second);
    }

    #[test]
    fn different_users_get_different_tokens() {
        let mut sessions = SessionStore::default();
        let a = sessions.get_or_generate_token("jihye");
        let b = sessions.get_or_generate_token("minsu");

        assert_ne!(a, b);
    }

    #[test]
    fn removal_invalidates_the_token() {
        let mut sessions = SessionStore::default();
        let token = sessions.get_or_generate_token("jihye");
        sessions.remove("jihye");

        assert_eq!(sessions.user_for_token(&token), None);
    }
}
