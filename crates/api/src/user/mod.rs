mod get_me;
mod pick_role;

use actix_web::web;
use get_me::get_me_controller;
use pick_role::pick_role_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(get_me_controller));
    cfg.route("/me/role", web::post().to(pick_role_controller));
}
