use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::curriculum::{Category, SkillGraph, SkillNode};

/// Category filter for the map canvas. Independent of text search: the
/// query only drives the side result list, never canvas visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::app) enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub(in crate::app) fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.label(),
        }
    }

    pub(in crate::app) fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(active) => active == category,
        }
    }
}

/// Canvas visibility. The selected node is always shown, even when the
/// category filter would hide it, so that picking a search result never
/// lands the viewport on an invisible node.
pub(in crate::app) fn node_visible(
    filter: CategoryFilter,
    selected: Option<&str>,
    node: &SkillNode,
) -> bool {
    filter.admits(node.category) || selected == Some(node.id.as_str())
}

pub(in crate::app) fn visible_nodes<'a>(
    graph: &'a SkillGraph,
    filter: CategoryFilter,
    selected: Option<&'a str>,
) -> impl Iterator<Item = &'a SkillNode> {
    graph
        .nodes()
        .iter()
        .filter(move |node| node_visible(filter, selected, node))
}

/// Title search for the result list: membership is case-insensitive
/// substring match; ordering is by fuzzy score so the closest titles rise
/// to the top.
pub(in crate::app) fn search_titles<'a>(graph: &'a SkillGraph, query: &str) -> Vec<&'a SkillNode> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let matcher = SkimMatcherV2::default();
    let mut hits: Vec<(i64, &SkillNode)> = graph
        .nodes()
        .iter()
        .filter(|node| node.title.to_lowercase().contains(&needle))
        .map(|node| {
            let rank = matcher.fuzzy_match(&node.title, query).unwrap_or(0);
            (rank, node)
        })
        .collect();

    hits.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.title.cmp(&b.1.title)));
    hits.into_iter().map(|(_, node)| node).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::curriculum_from_json;

    fn sample_graph() -> SkillGraph {
        curriculum_from_json(
            r#"{
                "title": "Sample",
                "nodes": [
                    {"id": "fractions", "title": "Fractions", "category": "core", "position": [0, 0], "entry": true},
                    {"id": "coordinates", "title": "Coordinates", "category": "special", "position": [100, 0]},
                    {"id": "decimals", "title": "Decimals", "category": "branch", "position": [0, 100]},
                    {"id": "graphing", "title": "Graphing", "category": "branch", "position": [100, 100]}
                ],
                "edges": []
            }"#,
        )
        .expect("test curriculum is valid")
    }

    fn visible_ids(graph: &SkillGraph, filter: CategoryFilter, selected: Option<&str>) -> Vec<String> {
        visible_nodes(graph, filter, selected)
            .map(|node| node.id.clone())
            .collect()
    }

    #[test]
    fn category_filter_yields_exactly_that_category() {
        let graph = sample_graph();
        let ids = visible_ids(&graph, CategoryFilter::Only(Category::Branch), None);
        assert_eq!(ids, ["decimals", "graphing"]);
    }

    #[test]
    fn all_filter_yields_the_full_node_set() {
        let graph = sample_graph();
        let ids = visible_ids(&graph, CategoryFilter::All, None);
        assert_eq!(ids.len(), graph.node_count());
    }

    #[test]
    fn selected_node_stays_visible_under_any_filter() {
        let graph = sample_graph();
        let ids = visible_ids(
            &graph,
            CategoryFilter::Only(Category::Branch),
            Some("fractions"),
        );
        assert!(ids.contains(&"fractions".to_string()));
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let graph = sample_graph();

        let hits: Vec<&str> = search_titles(&graph, "fra")
            .iter()
            .map(|node| node.title.as_str())
            .collect();
        assert_eq!(hits, ["Fractions"], "only substring matches qualify");

        let upper: Vec<&str> = search_titles(&graph, "FRA")
            .iter()
            .map(|node| node.title.as_str())
            .collect();
        assert_eq!(upper, ["Fractions"]);
    }

    #[test]
    fn empty_or_whitespace_query_returns_no_results() {
        let graph = sample_graph();
        assert!(search_titles(&graph, "").is_empty());
        assert!(search_titles(&graph, "   ").is_empty());
    }

    #[test]
    fn search_never_invents_matches() {
        let graph = sample_graph();
        assert!(search_titles(&graph, "calculus").is_empty());
    }

    #[test]
    fn shared_substring_returns_every_match() {
        let graph = sample_graph();
        let mut hits: Vec<&str> = search_titles(&graph, "ra")
            .iter()
            .map(|node| node.title.as_str())
            .collect();
        hits.sort();
        assert_eq!(hits, ["Fractions", "Graphing"]);
    }
}
