mod end_call;
mod get_ongoing_call;
mod mark_joined;
mod place_call;
mod subscribers;

use actix_web::web;
use end_call::end_call_controller;
use get_ongoing_call::get_ongoing_call_controller;
use mark_joined::mark_joined_controller;
use place_call::place_call_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/calls", web::post().to(place_call_controller));
    cfg.route("/calls/ongoing", web::get().to(get_ongoing_call_controller));
    cfg.route("/calls/{call_id}/join", web::post().to(mark_joined_controller));
    cfg.route("/calls/{call_id}/end", web::post().to(end_call_controller));
}
