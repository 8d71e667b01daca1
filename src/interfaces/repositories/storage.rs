use async_trait::async_trait;

use crate::{
    entities::{
        message::NewMessage,
        project::{NewProject, Project},
        skill::{NewSkill, Skill},
    },
    errors::AppError,
};

/// Capability set shared by the Postgres-backed and in-memory stores. The
/// backend is chosen once at startup and is not switchable at runtime.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Lists every project, ascending by priority. Priority ties keep
    /// insertion order.
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Looks up a project by exact, case-sensitive slug.
    async fn get_project(&self, slug: &str) -> Result<Option<Project>, AppError>;

    /// Inserts a project, assigning its id and applying insert defaults.
    async fn create_project(&self, project: NewProject) -> Result<Project, AppError>;

    /// Lists skills in backend-stable iteration order.
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;

    async fn create_skill(&self, skill: NewSkill) -> Result<Skill, AppError>;

    /// Appends a contact message, assigning id and server timestamp.
    async fn create_message(&self, message: NewMessage) -> Result<(), AppError>;
}
