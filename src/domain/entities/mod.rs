pub mod message;
pub mod project;
pub mod skill;
