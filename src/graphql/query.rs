use async_graphql::{Context, GuardExt, Object, Result};

use crate::graphql::guards::{LoggedIn, RoleGuard};
use crate::models::club::{Application, Club};
use crate::models::credential::User;
use crate::store::Store;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The currently logged-in user, if any
    pub async fn user(&self, ctx: &Context<'_>) -> Option<User> {
        ctx.data_opt::<User>().cloned()
    }

    /// All clubs, sorted by name
    #[graphql(guard = "LoggedIn")]
    pub async fn clubs(&self, ctx: &Context<'_>) -> Vec<Club> {
        let store: &Store = ctx.data_unchecked();
        store.clubs.lock().await.all()
    }

    /// The club with the given name
    #[graphql(guard = "LoggedIn")]
    pub async fn club(&self, ctx: &Context<'_>, name: String) -> Result<Club> {
        let store: &Store = ctx.data_unchecked();
        store
            .clubs
            .lock()
            .await
            .get(&name)
            .cloned()
            .ok_or_else(|| format!("No club named {}", name).into())
    }

    /// The pending membership applications for the given club,
    /// oldest first
    #[graphql(guard = "LoggedIn.and(RoleGuard::CLUB_PRESIDENT)")]
    pub async fn pending_applications(
        &self,
        ctx: &Context<'_>,
        club_name: String,
    ) -> Result<Vec<Application>> {
        let store: &Store = ctx.data_unchecked();
        store
            .clubs
            .lock()
            .await
            .get(&club_name)
            .map(|club| club.pending_applications.clone())
            .ok_or_else(|| format!("No club named {}", club_name).into())
    }
}
