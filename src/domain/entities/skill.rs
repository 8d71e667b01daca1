use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub items: Vec<String>,
    /// Icon name resolved against an icon set by the presentation layer.
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub category: String,
    pub items: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
}
