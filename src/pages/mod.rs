//! Route views. Every page except `login` and `not_found` renders inside
//! the protected shell.

pub mod analytics;
pub mod deployments;
pub mod login;
pub mod not_found;
pub mod overview;
pub mod projects;
pub mod settings;
