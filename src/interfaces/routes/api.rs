use actix_web::web;

use crate::handlers::{contact, projects, skills};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/projects")
            .route(web::get().to(projects::list_projects))
    );
    cfg.service(
        web::resource("/projects/{slug}")
            .route(web::get().to(projects::get_project))
    );
    cfg.service(
        web::resource("/skills")
            .route(web::get().to(skills::list_skills))
    );
    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::submit_message))
    );
}
