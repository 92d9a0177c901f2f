mod router;
pub mod send;
mod store_push_token;

use actix_web::web;
use router::route_notification_controller;
use store_push_token::store_push_token_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/push-tokens",
        web::post().to(store_push_token_controller),
    );
    cfg.route(
        "/notifications/route",
        web::post().to(route_notification_controller),
    );
}
