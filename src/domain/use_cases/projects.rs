use std::sync::Arc;

use crate::{
    entities::project::Project,
    errors::AppError,
    repositories::storage::Storage,
};

pub struct ProjectHandler {
    pub project_repo: Arc<dyn Storage>,
}

impl ProjectHandler {
    pub fn new(project_repo: Arc<dyn Storage>) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project, ordered by display priority
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Retrieves a single project by its slug
    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Project, AppError> {
        self.project_repo
            .get_project(slug)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }
}
