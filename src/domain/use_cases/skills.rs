use std::sync::Arc;

use crate::{
    entities::skill::Skill,
    errors::AppError,
    repositories::storage::Storage,
};

pub struct SkillHandler {
    pub skill_repo: Arc<dyn Storage>,
}

impl SkillHandler {
    pub fn new(skill_repo: Arc<dyn Storage>) -> Self {
        SkillHandler { skill_repo }
    }

    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }
}
