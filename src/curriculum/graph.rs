use std::collections::HashMap;

/// World-space coordinate a node is authored at. Positions are static for
/// the lifetime of the graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Core,
    Movement,
    Branch,
    Special,
    Master,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Core,
        Category::Movement,
        Category::Branch,
        Category::Special,
        Category::Master,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Movement => "movement",
            Self::Branch => "branch",
            Self::Special => "special",
            Self::Master => "master",
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuizQuestion {
    pub prompt: String,
    pub answer: String,
}

#[derive(Clone, Debug)]
pub struct SkillNode {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub tier: u8,
    pub description: String,
    pub position: MapPoint,
    /// Entry nodes have no prerequisites and start unlocked.
    pub entry: bool,
    /// Activating this node (once unlocked) navigates to the course page.
    pub course: bool,
    /// Authored date label shown on course cards and in the details panel.
    pub updated: String,
    pub quiz: Vec<QuizQuestion>,
    pub review: Vec<String>,
}

impl SkillNode {
    pub fn has_quiz(&self) -> bool {
        !self.quiz.is_empty()
    }
}

/// Immutable prerequisite graph. Built once by `load`; edges are validated
/// against the node set at construction, so index pairs are always in range.
#[derive(Clone, Debug)]
pub struct SkillGraph {
    pub title: String,
    pub pass_threshold: u32,
    nodes: Vec<SkillNode>,
    edges: Vec<(usize, usize)>,
    index_by_id: HashMap<String, usize>,
}

impl SkillGraph {
    pub(super) fn from_parts(
        title: String,
        pass_threshold: u32,
        nodes: Vec<SkillNode>,
        edges: Vec<(usize, usize)>,
        index_by_id: HashMap<String, usize>,
    ) -> Self {
        Self {
            title,
            pass_threshold,
            nodes,
            edges,
            index_by_id,
        }
    }

    pub fn node(&self, id: &str) -> Option<&SkillNode> {
        self.index_by_id.get(id).map(|&index| &self.nodes[index])
    }

    /// Nodes in authored order. Hit testing relies on this order for its
    /// first-match rule.
    pub fn nodes(&self) -> &[SkillNode] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&SkillNode, &SkillNode)> {
        self.edges
            .iter()
            .map(|&(from, to)| (&self.nodes[from], &self.nodes[to]))
    }

    /// Direct successors of `id` along prerequisite edges.
    pub fn successors(&self, id: &str) -> impl Iterator<Item = &SkillNode> {
        let source = self.index_by_id.get(id).copied();
        self.edges
            .iter()
            .filter(move |&&(from, _)| Some(from) == source)
            .map(|&(_, to)| &self.nodes[to])
    }

    pub fn entry_nodes(&self) -> impl Iterator<Item = &SkillNode> {
        self.nodes.iter().filter(|node| node.entry)
    }
}
