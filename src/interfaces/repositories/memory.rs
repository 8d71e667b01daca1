use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use crate::{
    entities::{
        message::{Message, NewMessage},
        project::{NewProject, Project},
        skill::{NewSkill, Skill},
    },
    errors::AppError,
    repositories::storage::Storage,
};

#[derive(Debug)]
struct MemState {
    projects: Vec<Project>,
    skills: Vec<Skill>,
    messages: Vec<Message>,
    next_project_id: i32,
    next_skill_id: i32,
    next_message_id: i32,
}

/// Process-local store used when no database is configured. Collections keep
/// insertion order; state does not survive a restart.
#[derive(Debug)]
pub struct MemStorage {
    state: Mutex<MemState>,
}

impl MemStorage {
    pub fn new() -> Self {
        MemStorage {
            state: Mutex::new(MemState {
                projects: Vec::new(),
                skills: Vec::new(),
                messages: Vec::new(),
                next_project_id: 1,
                next_skill_id: 1,
                next_message_id: 1,
            }),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let state = self.state.lock();
        let mut projects = state.projects.clone();
        // Stable sort, so equal priorities keep insertion order
        projects.sort_by_key(|p| p.priority);
        Ok(projects)
    }

    async fn get_project(&self, slug: &str) -> Result<Option<Project>, AppError> {
        let state = self.state.lock();
        Ok(state.projects.iter().find(|p| p.slug == slug).cloned())
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let mut state = self.state.lock();
        let stored = Project {
            id: state.next_project_id,
            title: project.title,
            slug: project.slug,
            summary: project.summary,
            description: project.description,
            tech_stack: project.tech_stack,
            category: project.category,
            image_url: project.image_url,
            repo_url: project.repo_url,
            demo_url: project.demo_url,
            featured: project.featured.unwrap_or(false),
            priority: project.priority.unwrap_or(0),
        };
        state.next_project_id += 1;
        state.projects.push(stored.clone());
        Ok(stored)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let state = self.state.lock();
        Ok(state.skills.clone())
    }

    async fn create_skill(&self, skill: NewSkill) -> Result<Skill, AppError> {
        let mut state = self.state.lock();
        let stored = Skill {
            id: state.next_skill_id,
            category: skill.category,
            items: skill.items,
            icon: skill.icon,
        };
        state.next_skill_id += 1;
        state.skills.push(stored.clone());
        Ok(stored)
    }

    async fn create_message(&self, message: NewMessage) -> Result<(), AppError> {
        let mut state = self.state.lock();
        let stored = Message {
            id: state.next_message_id,
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: Utc::now(),
        };
        state.next_message_id += 1;
        state.messages.push(stored);
        Ok(())
    }
}
