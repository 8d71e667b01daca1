use std::sync::Arc;

use sqlx::PgPool;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, email};

use email::mailer::ContactMailer;
use repositories::storage::Storage;
use use_cases::{contact::ContactHandler, projects::ProjectHandler, skills::SkillHandler};

pub struct AppState {
    pub project_handler: ProjectHandler,
    pub skill_handler: SkillHandler,
    pub contact_handler: ContactHandler,
    pub storage_kind: &'static str,
    pub db_pool: Option<PgPool>,
}

impl AppState {
    pub fn new(
        storage: Arc<dyn Storage>,
        mailer: Option<ContactMailer>,
        db_pool: Option<PgPool>,
    ) -> Self {
        let storage_kind = if db_pool.is_some() { "postgres" } else { "in-memory" };

        AppState {
            project_handler: ProjectHandler::new(storage.clone()),
            skill_handler: SkillHandler::new(storage.clone()),
            contact_handler: ContactHandler::new(storage, mailer),
            storage_kind,
            db_pool,
        }
    }
}
