use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    entities::{
        message::NewMessage,
        project::{NewProject, Project},
        skill::{NewSkill, Skill},
    },
    errors::AppError,
    repositories::storage::Storage,
};

/// Postgres-backed store. Every operation is a single statement; ordering and
/// slug uniqueness are delegated to the database.
#[derive(Clone)]
pub struct PgStorage {
    pub pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        PgStorage { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, slug, summary, description, tech_stack, category,
                   image_url, repo_url, demo_url, featured, priority
            FROM projects
            ORDER BY priority ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project(&self, slug: &str) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, slug, summary, description, tech_stack, category,
                   image_url, repo_url, demo_url, featured, priority
            FROM projects
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn create_project(&self, project: NewProject) -> Result<Project, AppError> {
        let stored = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, slug, summary, description, tech_stack, category,
                image_url, repo_url, demo_url, featured, priority
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, title, slug, summary, description, tech_stack, category,
                      image_url, repo_url, demo_url, featured, priority
            "#,
        )
        .bind(&project.title)
        .bind(&project.slug)
        .bind(&project.summary)
        .bind(&project.description)
        .bind(&project.tech_stack)
        .bind(project.category)
        .bind(&project.image_url)
        .bind(&project.repo_url)
        .bind(&project.demo_url)
        .bind(project.featured.unwrap_or(false))
        .bind(project.priority.unwrap_or(0))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("projects_slug_key") {
                    return AppError::Conflict("Slug already exists".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(stored)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"SELECT id, category, items, icon FROM skills ORDER BY id ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn create_skill(&self, skill: NewSkill) -> Result<Skill, AppError> {
        let stored = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (category, items, icon)
            VALUES ($1, $2, $3)
            RETURNING id, category, items, icon
            "#,
        )
        .bind(&skill.category)
        .bind(&skill.items)
        .bind(&skill.icon)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn create_message(&self, message: NewMessage) -> Result<(), AppError> {
        sqlx::query(
            r#"INSERT INTO messages (name, email, message) VALUES ($1, $2, $3)"#,
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
