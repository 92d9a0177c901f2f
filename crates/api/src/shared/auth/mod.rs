use crate::error::CarebridgeError;
use actix_web::HttpRequest;
use carebridge_domain::{User, ID};
use carebridge_infra::AppContext;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Claims of the bearer tokens issued by the identity provider. The
/// provider is a black box to this service; the only thing consumed
/// here is the stable user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration time (as UTC timestamp secs)
    pub exp: usize,
    /// Issued at (as UTC timestamp secs)
    pub iat: usize,
    /// The stable user id
    pub user_id: String,
}

fn parse_authorization_header(http_req: &HttpRequest) -> Option<String> {
    let value = http_req.headers().get("Authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Resolves the authenticated `User` for a request, or rejects it.
/// Every usecase receives the resolved user explicitly and never reads
/// ambient auth state.
pub async fn protect_route(
    http_req: &HttpRequest,
    ctx: &AppContext,
) -> Result<User, CarebridgeError> {
    let token = parse_authorization_header(http_req).ok_or_else(|| {
        CarebridgeError::Unauthorized("Missing or malformed Authorization header".into())
    })?;

    let claims = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(ctx.config.auth_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| CarebridgeError::Unauthorized(format!("Invalid auth token: {}", e)))?
    .claims;

    let user_id = ID::from_str(&claims.user_id).map_err(|_| {
        CarebridgeError::Unauthorized(format!(
            "Auth token contains a malformed user id: {}",
            claims.user_id
        ))
    })?;

    ctx.repos.users.find(&user_id).await.ok_or_else(|| {
        CarebridgeError::Unauthorized(format!(
            "No user found for the id in the auth token: {}",
            user_id
        ))
    })
}
