mod accept_care_request;
mod list_care_requests;
mod list_caregivers;
mod list_patients;
mod reject_care_request;
mod send_care_request;

use accept_care_request::accept_care_request_controller;
use actix_web::web;
use list_care_requests::list_care_requests_controller;
use list_caregivers::list_caregivers_controller;
use list_patients::list_patients_controller;
use reject_care_request::reject_care_request_controller;
use send_care_request::send_care_request_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/care/requests",
        web::post().to(send_care_request_controller),
    );
    cfg.route(
        "/care/requests",
        web::get().to(list_care_requests_controller),
    );
    cfg.route(
        "/care/requests/{request_id}/accept",
        web::post().to(accept_care_request_controller),
    );
    cfg.route(
        "/care/requests/{request_id}/reject",
        web::post().to(reject_care_request_controller),
    );
    cfg.route("/care/patients", web::get().to(list_patients_controller));
    cfg.route(
        "/care/caregivers",
        web::get().to(list_caregivers_controller),
    );
}
