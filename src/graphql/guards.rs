use async_graphql::{Context, Guard, Result};

use crate::models::credential::{Role, User};

pub struct LoggedIn;

#[async_trait::async_trait]
impl Guard for LoggedIn {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        if ctx.data_opt::<User>().is_some() {
            Ok(())
        } else {
            Err("User must be logged in".into())
        }
    }
}

/// Restricts an operation to accounts holding one specific role.
pub struct RoleGuard {
    required: Role,
}

impl RoleGuard {
    const fn new(required: Role) -> Self {
        Self { required }
    }

    pub const ADMINISTRATOR: Self = Self::new(Role::Administrator);
    pub const STUDENT: Self = Self::new(Role::Student);
    pub const CLUB_PRESIDENT: Self = Self::new(Role::ClubPresident);
}

#[async_trait::async_trait]
impl Guard for RoleGuard {
    async fn check(&self, ctx: &Context<'_>) -> Result<()> {
        if let Some(user) = ctx.data_opt::<User>() {
            if user.role == self.required {
                return Ok(());
            }
        }

        Err(format!("The {} role is required", self.required.name()).into())
    }
}
