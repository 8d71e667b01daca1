pub mod contact;
pub mod projects;
pub mod seed;
pub mod skills;
