//! The backend for a university club management portal.

use std::net::SocketAddr;

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql::{Request, Response};
use axum::headers::HeaderMap;
use axum::routing::get;
use axum::{Extension, Json, Router};
use tower_http::cors::CorsLayer;

use clubhouse::error::{ClubError, ClubResult};
use clubhouse::graphql::build_schema;
use clubhouse::store::{AppState, Store};

const CLUB_TOKEN: &'static str = "CLUB_TOKEN";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let store = AppState::load_from_env();
    let app = Router::new()
        .route("/", get(playground).post(query))
        .layer(Extension(store))
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port()));
    log::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

fn port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3000)
}

async fn query(
    Extension(store): Extension<Store>,
    headers: HeaderMap,
    Json(request): Json<Request>,
) -> ClubResult<Json<Response>> {
    let user = if let Some(token) = get_token(&headers)? {
        Some(
            store
                .user_for_token(token)
                .await
                .ok_or(ClubError::InvalidToken)?,
        )
    } else {
        None
    };

    let request = request.data(store.clone());
    let request = if let Some(user) = user {
        request.data(user)
    } else {
        request
    };

    Ok(Json(build_schema().execute(request).await))
}

async fn playground(headers: HeaderMap) -> ClubResult<String> {
    let mut config = GraphQLPlaygroundConfig::new("/");
    if let Some(token) = get_token(&headers)? {
        config = config.with_header(CLUB_TOKEN, token);
    }

    Ok(playground_source(config))
}

fn get_token(headers: &HeaderMap) -> ClubResult<Option<&str>> {
    headers
        .iter()
        .find_map(|(name, value)| {
            if name == CLUB_TOKEN {
                Some(value.to_str().map_err(ClubError::InvalidTokenHeader))
            } else {
                None
            }
        })
        .transpose()
}
