use async_graphql::{Context, GuardExt, Object, Result};

use crate::graphql::guards::{LoggedIn, RoleGuard};
use crate::graphql::SUCCESS_MESSAGE;
use crate::models::club::{Application, Club, NewClub};
use crate::models::credential::{AuthFailure, Role, User};
use crate::store::Store;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Gets a login token on successful login
    pub async fn login(
        &self,
        ctx: &Context<'_>,
        id: String,
        password: String,
        role: Role,
    ) -> Result<String> {
        let store: &Store = ctx.data_unchecked();
        store
            .credentials
            .authenticate(&id, &password, role)
            .map_err(|failure| -> async_graphql::Error {
                match failure {
                    AuthFailure::InvalidCredentials => "Invalid ID or password".into(),
                    AuthFailure::WrongRole => {
                        format!("That account cannot log in as {}", role.name()).into()
                    }
                }
            })?;

        let mut sessions = store.sessions.lock().await;
        Ok(sessions.get_or_generate_token(&id))
    }

    /// Logs the user out, invalidating their token
    pub async fn logout(&self, ctx: &Context<'_>) -> Result<&'static str> {
        let user = ctx.data_opt::<User>().ok_or("Not currently logged in")?;
        let store: &Store = ctx.data_unchecked();
        store.sessions.lock().await.remove(&user.id);

        Ok(SUCCESS_MESSAGE)
    }

    /// Creates a new club. A club with the same name is silently replaced.
    #[graphql(guard = "LoggedIn.and(RoleGuard::ADMINISTRATOR)")]
    pub async fn create_club(&self, ctx: &Context<'_>, new_club: NewClub) -> Result<Club> {
        if new_club.name.trim().is_empty() {
            return Err("Every club needs a name".into());
        }

        let store: &Store = ctx.data_unchecked();
        let club = Club::from(new_club);

        let mut registry = store.clubs.lock().await;
        registry.add(club.clone());
        store.flush_clubs(&registry);

        Ok(club)
    }

    /// Deletes the given club, returning whether it existed
    #[graphql(guard = "LoggedIn.and(RoleGuard::ADMINISTRATOR)")]
    pub async fn delete_club(&self, ctx: &Context<'_>, name: String) -> Result<bool> {
        let store: &Store = ctx.data_unchecked();

        let mut registry = store.clubs.lock().await;
        let removed = registry.remove(&name);
        if removed {
            store.flush_clubs(&registry);
        }

        Ok(removed)
    }

    /// Submits a membership application to the given club
    #[graphql(guard = "LoggedIn.and(RoleGuard::STUDENT)")]
    pub async fn submit_application(
        &self,
        ctx: &Context<'_>,
        club_name: String,
        applicant: String,
        text: String,
    ) -> Result<Application> {
        if applicant.trim().is_empty() || text.trim().is_empty() {
            return Err("An application needs both a name and a message".into());
        }

        let store: &Store = ctx.data_unchecked();
        let mut registry = store.clubs.lock().await;
        let club = registry
            .get_mut(&club_name)
            .ok_or_else(|| -> async_graphql::Error {
                format!("No club named {}", club_name).into()
            })?;

        Ok(club.submit(applicant, text))
    }

    /// Approves the oldest pending application from the named applicant,
    /// removing it from the queue and returning it
    #[graphql(guard = "LoggedIn.and(RoleGuard::CLUB_PRESIDENT)")]
    pub async fn approve_application(
        &self,
        ctx: &Context<'_>,
        club_name: String,
        applicant: String,
    ) -> Result<Application> {
        let store: &Store = ctx.data_unchecked();
        let mut registry = store.clubs.lock().await;
        let club = registry
            .get_mut(&club_name)
            .ok_or_else(|| -> async_graphql::Error {
                format!("No club named {}", club_name).into()
            })?;

        club.approve(&applicant)
            .ok_or_else(|| format!("No pending application from {}", applicant).into())
    }
}
