mod graph;
mod load;
mod parse;

pub use graph::{Category, MapPoint, QuizQuestion, SkillGraph, SkillNode};
pub use load::{curriculum_from_json, load_curriculum};
