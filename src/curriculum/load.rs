use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::graph::{Category, MapPoint, QuizQuestion, SkillGraph, SkillNode};
use super::parse::{CurriculumDoc, parse_curriculum};

const DEFAULT_CURRICULUM: &str = include_str!("default.json");

/// Load a curriculum from `path`, or the built-in course when no path is
/// given. All structural validation happens here; a graph that loads is
/// safe to render and gate against.
pub fn load_curriculum(path: Option<&Path>) -> Result<SkillGraph> {
    let graph = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read curriculum file {}", path.display()))?;
            curriculum_from_json(&raw)
                .with_context(|| format!("invalid curriculum in {}", path.display()))?
        }
        None => curriculum_from_json(DEFAULT_CURRICULUM)
            .context("built-in default curriculum is invalid")?,
    };

    log::info!(
        "loaded curriculum {:?}: {} nodes, {} edges",
        graph.title,
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

pub fn curriculum_from_json(raw: &str) -> Result<SkillGraph> {
    build_graph(parse_curriculum(raw)?)
}

fn parse_category(raw: &str) -> Result<Category> {
    Category::ALL
        .into_iter()
        .find(|category| category.label() == raw)
        .ok_or_else(|| anyhow!("unknown node category {raw:?}"))
}

fn build_graph(doc: CurriculumDoc) -> Result<SkillGraph> {
    if doc.pass_threshold > 100 {
        return Err(anyhow!(
            "pass_threshold {} is not a percentage",
            doc.pass_threshold
        ));
    }

    let mut nodes = Vec::with_capacity(doc.nodes.len());
    let mut index_by_id = HashMap::with_capacity(doc.nodes.len());

    for node_doc in doc.nodes {
        if node_doc.id.trim().is_empty() {
            return Err(anyhow!("node {:?} has an empty id", node_doc.title));
        }

        let category = parse_category(&node_doc.category)
            .with_context(|| format!("node {:?}", node_doc.id))?;

        let index = nodes.len();
        if index_by_id.insert(node_doc.id.clone(), index).is_some() {
            return Err(anyhow!("duplicate node id {:?}", node_doc.id));
        }

        nodes.push(SkillNode {
            id: node_doc.id,
            title: node_doc.title,
            category,
            tier: node_doc.tier,
            description: node_doc.description,
            position: MapPoint {
                x: node_doc.position.0,
                y: node_doc.position.1,
            },
            entry: node_doc.entry,
            course: node_doc.course,
            updated: node_doc.updated,
            quiz: node_doc
                .quiz
                .into_iter()
                .map(|question| QuizQuestion {
                    prompt: question.prompt,
                    answer: question.answer,
                })
                .collect(),
            review: node_doc.review,
        });
    }

    let mut edges = Vec::with_capacity(doc.edges.len());
    for (from_id, to_id) in &doc.edges {
        let from = *index_by_id
            .get(from_id)
            .ok_or_else(|| anyhow!("edge references unknown node id {from_id:?}"))?;
        let to = *index_by_id
            .get(to_id)
            .ok_or_else(|| anyhow!("edge references unknown node id {to_id:?}"))?;
        if from != to {
            edges.push((from, to));
        }
    }
    edges.sort_unstable();
    edges.dedup();

    let graph = SkillGraph::from_parts(doc.title, doc.pass_threshold, nodes, edges, index_by_id);

    if graph.entry_nodes().count() == 0 {
        log::warn!(
            "curriculum {:?} has no entry node; every skill starts locked",
            graph.title
        );
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(nodes: &str, edges: &str) -> String {
        format!(r#"{{"title": "Test", "nodes": [{nodes}], "edges": [{edges}]}}"#)
    }

    const NODE_A: &str =
        r#"{"id": "a", "title": "A", "category": "core", "position": [0, 0], "entry": true}"#;
    const NODE_B: &str = r#"{"id": "b", "title": "B", "category": "branch", "position": [50, 0]}"#;

    #[test]
    fn default_curriculum_loads_and_validates() {
        let graph = load_curriculum(None).expect("built-in curriculum must load");

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.pass_threshold, 80);

        let entries: Vec<&str> = graph.entry_nodes().map(|node| node.id.as_str()).collect();
        assert_eq!(entries, ["fractions"], "fractions is the only entry node");

        let fractions = graph.node("fractions").expect("fractions node");
        assert!(fractions.course, "fractions is the course-launching node");
        assert_eq!(fractions.quiz.len(), 5);
    }

    #[test]
    fn edge_with_unknown_endpoint_fails() {
        let raw = minimal(NODE_A, r#"["a", "ghost"]"#);
        let error = curriculum_from_json(&raw).unwrap_err();
        assert!(
            format!("{error:#}").contains("unknown node id"),
            "unexpected error: {error:#}"
        );
    }

    #[test]
    fn duplicate_node_id_fails() {
        let raw = minimal(&format!("{NODE_A}, {NODE_A}"), "");
        let error = curriculum_from_json(&raw).unwrap_err();
        assert!(format!("{error:#}").contains("duplicate node id"));
    }

    #[test]
    fn empty_node_id_fails() {
        let raw = minimal(
            r#"{"id": "  ", "title": "X", "category": "core", "position": [0, 0]}"#,
            "",
        );
        assert!(curriculum_from_json(&raw).is_err());
    }

    #[test]
    fn unknown_category_fails() {
        let raw = minimal(
            r#"{"id": "a", "title": "A", "category": "legendary", "position": [0, 0]}"#,
            "",
        );
        let error = curriculum_from_json(&raw).unwrap_err();
        assert!(format!("{error:#}").contains("unknown node category"));
    }

    #[test]
    fn pass_threshold_over_100_fails() {
        let raw = r#"{"title": "T", "pass_threshold": 101, "nodes": [], "edges": []}"#;
        assert!(curriculum_from_json(raw).is_err());
    }

    #[test]
    fn self_edges_and_duplicates_are_dropped() {
        let raw = minimal(
            &format!("{NODE_A}, {NODE_B}"),
            r#"["a", "a"], ["a", "b"], ["a", "b"]"#,
        );
        let graph = curriculum_from_json(&raw).expect("curriculum loads");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn curriculum_without_entry_nodes_still_loads() {
        let raw = minimal(NODE_B, "");
        let graph = curriculum_from_json(&raw).expect("curriculum loads");
        assert_eq!(graph.entry_nodes().count(), 0);
    }

    #[test]
    fn successors_follow_edge_direction() {
        let raw = minimal(&format!("{NODE_A}, {NODE_B}"), r#"["a", "b"]"#);
        let graph = curriculum_from_json(&raw).expect("curriculum loads");

        let from_a: Vec<&str> = graph.successors("a").map(|node| node.id.as_str()).collect();
        assert_eq!(from_a, ["b"]);
        assert_eq!(graph.successors("b").count(), 0);
    }
}
