pub mod dispatch_agent;
mod end_agent_session;
mod get_agent_session;

use actix_web::web;
use dispatch_agent::dispatch_agent_controller;
use end_agent_session::end_agent_session_controller;
use get_agent_session::get_agent_session_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/agent/dispatch", web::post().to(dispatch_agent_controller));
    cfg.route("/agent/session", web::get().to(get_agent_session_controller));
    cfg.route(
        "/agent/session",
        web::delete().to(end_agent_session_controller),
    );
}
