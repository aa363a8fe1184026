//! Shared application state, handed to every resolver through the GraphQL
//! context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::club::ClubRegistry;
use crate::models::credential::{CredentialStore, User};
use crate::models::session::SessionStore;
use crate::storage;

pub type Store = Arc<AppState>;

pub struct AppState {
    pub clubs: Mutex<ClubRegistry>,
    pub credentials: CredentialStore,
    pub sessions: Mutex<SessionStore>,
    club_file: PathBuf,
}

impl AppState {
    /// Loads state from the files named by `CLUB_FILE` and `CREDENTIAL_FILE`,
    /// defaulting to `clubs_data.txt` and `credentials.txt`.
    pub fn load_from_env() -> Store {
        let club_file =
            PathBuf::from(std::env::var("CLUB_FILE").unwrap_or_else(|_| "clubs_data.txt".into()));
        let credential_file =
            std::env::var("CREDENTIAL_FILE").unwrap_or_else(|_| "credentials.txt".into());

        Self::load(club_file, credential_file)
    }

    /// Loads state from the given files. A missing or unreadable file is
    /// logged and treated as empty, never fatal.
    pub fn load(club_file: PathBuf, credential_file: impl AsRef<Path>) -> Store {
        let clubs = match storage::load_clubs(&club_file) {
            Ok(clubs) => {
                log::info!("loaded {} clubs from {}", clubs.len(), club_file.display());
                clubs
            }
            Err(err) => {
                log::info!(
                    "no initial club data loaded from {}: {}",
                    club_file.display(),
                    err
                );
                Vec::new()
            }
        };

        let credential_file = credential_file.as_ref();
        let credentials = match storage::load_credentials(credential_file) {
            Ok(credentials) => {
                log::info!(
                    "loaded {} credentials from {}",
                    credentials.len(),
                    credential_file.display()
                );
                credentials
            }
            Err(err) => {
                log::warn!(
                    "no credentials loaded from {}, nobody will be able to log in: {}",
                    credential_file.display(),
                    err
                );
                CredentialStore::default()
            }
        };

        let mut registry = ClubRegistry::default();
        for club in clubs {
            registry.add(club);
        }

        Arc::new(AppState {
            clubs: Mutex::new(registry),
            credentials,
            sessions: Mutex::new(SessionStore::default()),
            club_file,
        })
    }

    /// The user attached to a live session token, if any.
    pub async fn user_for_token(&self, token: &str) -> Option<User> {
        let sessions = self.sessions.lock().await;
        let id = sessions.user_for_token(token)?;
        let role = self.credentials.role_of(id)?;

        Some(User {
            id: id.to_owned(),
            role,
        })
    }

    /// Rewrites the club file from the registry. A write failure is logged;
    /// the in-memory state stays authoritative and there is no retry.
    pub fn flush_clubs(&self, registry: &ClubRegistry) {
        if let Err(err) = storage::save_clubs(&self.club_file, &registry.all()) {
            log::error!(
                "failed to save club data to {}: {}",
                self.club_file.display(),
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::models::credential::Role;

    #[tokio::test]
    async fn missing_files_load_as_empty_state() {
        let dir = TempDir::new().unwrap();
        let store = AppState::load(
            dir.path().join("clubs_data.txt"),
            dir.path().join("credentials.txt"),
        );

        assert!(store.clubs.lock().await.is_empty());
        assert!(store.credentials.is_empty());
    }

    #[tokio::test]
    async fn loaded_state_round_trips_through_flush() {
        let dir = TempDir::new().unwrap();
        let club_file = dir.path().join("clubs_data.txt");
        std::fs::write(&club_file, "Chess,Kim,desc1\nArt,Lee,desc2\n").unwrap();
        std::fs::write(
            dir.path().join("credentials.txt"),
            "admin,admin123,administrator\n",
        )
        .unwrap();

        let store = AppState::load(club_file.clone(), dir.path().join("credentials.txt"));
        assert_eq!(store.credentials.role_of("admin"), Some(Role::Administrator));

        {
            let mut registry = store.clubs.lock().await;
            assert_eq!(registry.len(), 2);
            registry.remove("Art");
            store.flush_clubs(&registry);
        }

        let contents = std::fs::read_to_string(&club_file).unwrap();
        assert_eq!(contents, "Chess,Kim,desc1\n");
    }

    #[tokio::test]
    async fn tokens_resolve_through_sessions_and_roles() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("credentials.txt"),
            "jihye,flowers,student\n",
        )
        .unwrap();
        let store = AppState::load(
            dir.path().join("clubs_data.txt"),
            dir.path().join("credentials.txt"),
        );

        let token = store.sessions.lock().await.get_or_generate_token("jihye");
        let user = store.user_for_token(&token).await.unwrap();
        assert_eq!(user.id, "jihye");
        assert_eq!(user.role, Role::Student);

        assert!(store.user_for_token("bogus").await.is_none());
    }
}
