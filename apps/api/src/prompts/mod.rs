// Prompt templates: listing, CRUD without delete, parameter extraction and filling.

pub mod handlers;
pub mod stats;
pub mod validation;
