mod create_event;
mod delete_event;
pub mod fire_due_reminders;
mod get_events_by_timespan;
mod list_events;
mod subscribers;

use actix_web::web;
use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_events_by_timespan::get_events_by_timespan_controller;
use list_events::list_events_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::post().to(create_event_controller));
    cfg.route("/events", web::get().to(list_events_controller));
    cfg.route(
        "/events/timespan",
        web::get().to(get_events_by_timespan_controller),
    );
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_controller),
    );
}
