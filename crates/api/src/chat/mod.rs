pub mod send_message;
mod subscribers;

use actix_web::web;
use send_message::send_message_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat/messages", web::post().to(send_message_controller));
}
