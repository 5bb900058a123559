use eframe::egui::{self, Pos2, Ui, pos2};

use crate::curriculum::SkillNode;

use super::super::ViewModel;
use super::NODE_RADIUS;

impl ViewModel {
    pub(in crate::app) fn handle_map_zoom(&mut self, ui: &Ui, response: &egui::Response) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        self.viewport.zoom(scroll);
    }

    pub(in crate::app) fn handle_map_pan(&mut self, response: &egui::Response) {
        if response.dragged() {
            self.viewport.pan(response.drag_delta());
        }
    }
}

/// First node (in authored list order) whose circular hit area contains the
/// world-space point. Nodes do not overlap by construction, so first-match
/// is unambiguous.
pub(in crate::app) fn node_at<'a>(
    nodes: impl Iterator<Item = &'a SkillNode>,
    world: Pos2,
) -> Option<&'a SkillNode> {
    let mut nodes = nodes;
    nodes.find(|node| {
        let center = pos2(node.position.x, node.position.y);
        center.distance(world) <= NODE_RADIUS
    })
}
