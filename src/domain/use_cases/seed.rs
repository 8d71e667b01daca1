use crate::{
    entities::{
        project::{NewProject, ProjectCategory},
        skill::NewSkill,
    },
    errors::AppError,
    repositories::storage::Storage,
};

/// Populates empty project/skill collections with the built-in catalog.
/// Guarded by an emptiness check only; two instances starting against an
/// empty shared database can both pass the check and seed twice.
pub async fn seed_catalog(storage: &dyn Storage) -> Result<(), AppError> {
    if storage.list_projects().await?.is_empty() {
        for project in project_catalog() {
            storage.create_project(project).await?;
        }
        tracing::info!("Seeded project catalog");
    }

    if storage.list_skills().await?.is_empty() {
        for skill in skill_catalog() {
            storage.create_skill(skill).await?;
        }
        tracing::info!("Seeded skill catalog");
    }

    Ok(())
}

fn project_catalog() -> Vec<NewProject> {
    vec![
        NewProject {
            title: "AI-Powered Business Incubator".to_string(),
            slug: "ai-business-incubator".to_string(),
            summary: "9-agent LangGraph orchestration platform for startup generation".to_string(),
            description: "A comprehensive platform that orchestrates 9 specialized AI agents to generate startup assets. Features state preservation across stages, finance simulations, brand generation, and code generation. Achieved 99% time reduction in asset creation, generating over 15k assets.".to_string(),
            tech_stack: vec![
                "LangGraph".to_string(),
                "Python".to_string(),
                "React".to_string(),
                "OpenAI".to_string(),
            ],
            category: ProjectCategory::Featured,
            image_url: "https://images.unsplash.com/photo-1531403009284-440f080d1e12?auto=format&fit=crop&q=80&w=1000".to_string(),
            repo_url: None,
            demo_url: None,
            featured: Some(true),
            priority: Some(1),
        },
        NewProject {
            title: "Privacy-First AI Chat Platform".to_string(),
            slug: "privacy-ai-chat".to_string(),
            summary: "Secure SaaS with PII scrubbing and multi-provider routing".to_string(),
            description: "An enterprise-grade chat platform focused on privacy. Implements PII scrubbing (Vision OCR + Text), two-phase review process, end-to-end encryption, and multi-provider LLM routing. Monitored via Stripe integration.".to_string(),
            tech_stack: vec![
                "React".to_string(),
                "FastAPI".to_string(),
                "Stripe".to_string(),
                "Encryption".to_string(),
                "OCR".to_string(),
            ],
            category: ProjectCategory::Featured,
            image_url: "https://images.unsplash.com/photo-1558494949-ef526b0042a0?auto=format&fit=crop&q=80&w=1000".to_string(),
            repo_url: None,
            demo_url: None,
            featured: Some(true),
            priority: Some(2),
        },
        NewProject {
            title: "AI Content Automation Platform".to_string(),
            slug: "content-automation".to_string(),
            summary: "Multi-agent system for SEO and WordPress publishing".to_string(),
            description: "Automated content pipeline using LangGraph agents for SEO optimization, translation, and direct WordPress publishing. Includes human-in-the-loop workflows for quality assurance.".to_string(),
            tech_stack: vec![
                "LangGraph".to_string(),
                "WordPress API".to_string(),
                "SEO".to_string(),
                "Translation".to_string(),
            ],
            category: ProjectCategory::Featured,
            image_url: "https://images.unsplash.com/photo-1432888498266-38ffec3eaf0a?auto=format&fit=crop&q=80&w=1000".to_string(),
            repo_url: None,
            demo_url: None,
            featured: Some(true),
            priority: Some(3),
        },
        NewProject {
            title: "Super Jugga Labs (SJL Bot)".to_string(),
            slug: "sjl-bot".to_string(),
            summary: "AI Credit Assistant via Telegram".to_string(),
            description: "Telegram-based automation for credit analysis using n8n workflows and OpenAI reasoning. Integrates with SmartCredit and PDF parsing tools.".to_string(),
            tech_stack: vec![
                "n8n".to_string(),
                "OpenAI".to_string(),
                "Telegram API".to_string(),
            ],
            category: ProjectCategory::Additional,
            image_url: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?auto=format&fit=crop&q=80&w=1000".to_string(),
            repo_url: None,
            demo_url: None,
            featured: Some(false),
            priority: Some(4),
        },
        NewProject {
            title: "Fake Job Posting Detection".to_string(),
            slug: "job-detection".to_string(),
            summary: "BiLSTM model with 98.22% accuracy".to_string(),
            description: "Deep learning model trained on 18k job listings to detect fraudulent posts. Uses NLP preprocessing and BiLSTM architecture. Improved accuracy from 1.1% baseline to 98.22%.".to_string(),
            tech_stack: vec![
                "Python".to_string(),
                "TensorFlow".to_string(),
                "NLP".to_string(),
                "BiLSTM".to_string(),
            ],
            category: ProjectCategory::Additional,
            image_url: "https://images.unsplash.com/photo-1586281380349-632531db7ed4?auto=format&fit=crop&q=80&w=1000".to_string(),
            repo_url: None,
            demo_url: None,
            featured: Some(false),
            priority: Some(5),
        },
        NewProject {
            title: "RAG Agent".to_string(),
            slug: "rag-agent".to_string(),
            summary: "High-precision retrieval system".to_string(),
            description: "Retrieval-Augmented Generation agent using FAISS vector indexing and LangChain orchestration. Deployed via FastAPI. Significantly reduced hallucinations in technical queries.".to_string(),
            tech_stack: vec![
                "FAISS".to_string(),
                "LangChain".to_string(),
                "FastAPI".to_string(),
            ],
            category: ProjectCategory::Additional,
            image_url: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?auto=format&fit=crop&q=80&w=1000".to_string(),
            repo_url: None,
            demo_url: None,
            featured: Some(false),
            priority: Some(6),
        },
    ]
}

fn skill_catalog() -> Vec<NewSkill> {
    vec![
        NewSkill {
            category: "AI & ML".to_string(),
            items: vec![
                "LLMs".to_string(),
                "RAG".to_string(),
                "Agentic AI".to_string(),
                "Deep Learning".to_string(),
                "NLP".to_string(),
                "Computer Vision".to_string(),
            ],
            icon: Some("Brain".to_string()),
        },
        NewSkill {
            category: "Backend & APIs".to_string(),
            items: vec![
                "FastAPI".to_string(),
                "REST".to_string(),
                "Async Systems".to_string(),
                "Background Workers".to_string(),
            ],
            icon: Some("Server".to_string()),
        },
        NewSkill {
            category: "Data & MLOps".to_string(),
            items: vec![
                "Vector Databases".to_string(),
                "Embeddings".to_string(),
                "Model Evaluation".to_string(),
            ],
            icon: Some("Database".to_string()),
        },
        NewSkill {
            category: "Automation".to_string(),
            items: vec![
                "n8n".to_string(),
                "Scheduled Pipelines".to_string(),
                "Workflow Orchestration".to_string(),
            ],
            icon: Some("Workflow".to_string()),
        },
        NewSkill {
            category: "Security & SaaS".to_string(),
            items: vec![
                "Auth".to_string(),
                "JWT".to_string(),
                "OTP".to_string(),
                "Encryption".to_string(),
                "Stripe".to_string(),
                "RBAC".to_string(),
            ],
            icon: Some("Shield".to_string()),
        },
        NewSkill {
            category: "Tools".to_string(),
            items: vec![
                "OpenAI".to_string(),
                "LangChain".to_string(),
                "LangGraph".to_string(),
                "FAISS".to_string(),
                "Qdrant".to_string(),
                "MongoDB".to_string(),
            ],
            icon: Some("Wrench".to_string()),
        },
    ]
}
