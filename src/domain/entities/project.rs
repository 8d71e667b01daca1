use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Featured,
    Additional,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub category: ProjectCategory,
    pub image_url: String,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub featured: bool,
    pub priority: i32,
}

/// Insert form for a project. Optional fields fall back to store defaults:
/// no repo/demo link, not featured, priority 0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub category: ProjectCategory,
    pub image_url: String,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub priority: Option<i32>,
}
