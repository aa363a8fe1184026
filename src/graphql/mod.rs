use async_graphql::{EmptySubscription, Schema};

use crate::graphql::mutation::MutationRoot;
use crate::graphql::query::QueryRoot;

pub mod guards;
pub mod mutation;
pub mod query;

pub const SUCCESS_MESSAGE: &'static str = "success";

pub type ClubSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema() -> ClubSchema {
    Schema::new(QueryRoot, MutationRoot, EmptySubscription)
}
