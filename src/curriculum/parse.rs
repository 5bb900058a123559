use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub(super) struct CurriculumDoc {
    pub(super) title: String,
    #[serde(default = "default_pass_threshold")]
    pub(super) pass_threshold: u32,
    pub(super) nodes: Vec<NodeDoc>,
    #[serde(default)]
    pub(super) edges: Vec<(String, String)>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct NodeDoc {
    pub(super) id: String,
    pub(super) title: String,
    pub(super) category: String,
    #[serde(default = "default_tier")]
    pub(super) tier: u8,
    #[serde(default)]
    pub(super) description: String,
    pub(super) position: (f32, f32),
    #[serde(default)]
    pub(super) entry: bool,
    #[serde(default)]
    pub(super) course: bool,
    #[serde(default)]
    pub(super) updated: String,
    #[serde(default)]
    pub(super) quiz: Vec<QuestionDoc>,
    #[serde(default)]
    pub(super) review: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct QuestionDoc {
    pub(super) prompt: String,
    pub(super) answer: String,
}

fn default_pass_threshold() -> u32 {
    80
}

fn default_tier() -> u8 {
    1
}

pub(super) fn parse_curriculum(raw: &str) -> Result<CurriculumDoc> {
    serde_json::from_str(raw).context("invalid curriculum JSON")
}
