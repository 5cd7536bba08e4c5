pub mod generated;
pub mod prompt;
pub mod user;
