use serde::Serialize;

use crate::models::prompt::{Category, PromptRow};

/// Tallies shown in the library overview.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct PromptStats {
    pub total: usize,
    pub creative: usize,
    pub technical: usize,
    pub marketing: usize,
    pub other: usize,
}

pub fn tally(prompts: &[PromptRow]) -> PromptStats {
    let mut stats = PromptStats {
        total: prompts.len(),
        ..Default::default()
    };
    for prompt in prompts {
        match prompt.category.parse::<Category>() {
            Ok(Category::Creative) => stats.creative += 1,
            Ok(Category::Technical) => stats.technical += 1,
            Ok(Category::Marketing) => stats.marketing += 1,
            Ok(Category::Other) | Err(_) => stats.other += 1,
        }
    }
    stats
}
