mod get_help_checkin;
pub mod run_checkin_pass;
mod set_help_checkin;

use actix_web::web;
use get_help_checkin::get_help_checkin_controller;
use set_help_checkin::set_help_checkin_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/help-checkins",
        web::post().to(set_help_checkin_controller),
    );
    cfg.route(
        "/help-checkins/{patient_id}",
        web::get().to(get_help_checkin_controller),
    );
}
