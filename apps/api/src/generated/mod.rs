// Saved, parameter-filled variants of prompts. Insert and read only.

pub mod handlers;
