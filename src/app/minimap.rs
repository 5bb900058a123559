use eframe::egui::{Pos2, Rect, Vec2, pos2};

use crate::curriculum::SkillGraph;

use super::viewport::Viewport;

pub(in crate::app) const MINI_SCALE: f32 = 0.12;
pub(in crate::app) const MAP_SIZE: Vec2 = Vec2 { x: 220.0, y: 120.0 };

/// Geometry for the overview map, in minimap-local coordinates (origin at
/// the minimap's top-left).
pub(in crate::app) struct MinimapGeometry {
    pub(in crate::app) node_points: Vec<Pos2>,
    pub(in crate::app) view_rect: Rect,
}

/// Project the whole world into the minimap. Every node is drawn regardless
/// of the active filter; the rectangle is the exact inverse image of the
/// main viewport, so it shrinks as the canvas zooms in.
pub(in crate::app) fn project(
    graph: &SkillGraph,
    viewport: &Viewport,
    canvas_size: Vec2,
) -> MinimapGeometry {
    let node_points = graph
        .nodes()
        .iter()
        .map(|node| pos2(node.position.x * MINI_SCALE, node.position.y * MINI_SCALE))
        .collect();

    let ratio = MINI_SCALE / viewport.scale;
    let view_rect = Rect::from_min_size(
        pos2(-viewport.offset.x * ratio, -viewport.offset.y * ratio),
        canvas_size * ratio,
    );

    MinimapGeometry {
        node_points,
        view_rect,
    }
}
