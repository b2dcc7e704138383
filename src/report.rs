use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct MatchReport {
    pub generated_at: String,
    pub token_file: PathBuf,
    pub items_checked: usize,
    pub tokens_loaded: usize,
    pub matches: Vec<String>,
}

pub fn summarize(matches: &[String]) -> String {
    if matches.is_empty() {
        return "No matching items".to_string();
    }

    let mut lines = Vec::with_capacity(matches.len() + 1);
    lines.push(if matches.len() == 1 {
        "There is 1 matching item:".to_string()
    } else {
        format!("There are {} matching items:", matches.len())
    });
    lines.extend(matches.iter().map(|item| format!("  - {item}")));

    lines.join("\n")
}
