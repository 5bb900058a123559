use std::collections::HashSet;

use eframe::egui::epaint::CubicBezierShape;
use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, Ui, pos2, vec2};

use super::super::ViewModel;
use super::super::filter::{search_titles, visible_nodes};
use super::super::minimap::{self, MAP_SIZE};
use super::super::render_utils::{
    blend_color, category_color, circle_visible, dim_color, draw_background, edge_control_points,
    locked_fill, locked_stroke,
};
use super::NODE_RADIUS;
use super::interaction::node_at;

const SELECTED_COLOR: Color32 = Color32::from_rgb(245, 206, 93);
const SEARCH_MATCH_COLOR: Color32 = Color32::from_rgb(103, 196, 255);

impl ViewModel {
    pub(in crate::app) fn draw_map(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect, self.viewport.offset, self.viewport.scale);

        self.handle_map_zoom(ui, &response);
        self.handle_map_pan(&response);

        let viewport = self.viewport;
        let scale = viewport.scale;
        let to_screen =
            move |world: Pos2| rect.left_top() + viewport.world_to_screen(world).to_vec2();

        // Soft-highlight title matches on the canvas while nothing is
        // selected; the result list itself lives in the controls panel.
        let search_matches: HashSet<String> = if self.selected.is_none() {
            search_titles(&self.graph, &self.search)
                .iter()
                .map(|node| node.id.clone())
                .collect()
        } else {
            HashSet::new()
        };
        let search_active = !search_matches.is_empty();

        for (from, to) in self.graph.edges() {
            let lit = self.unlocks.is_reachable(&from.id) && self.unlocks.is_reachable(&to.id);
            let width = (3.0 * scale).clamp(1.2, 6.0);
            let color = if lit {
                Color32::from_rgba_unmultiplied(125, 211, 252, 190)
            } else {
                Color32::from_rgba_unmultiplied(72, 72, 72, 200)
            };

            let [start, control_a, control_b, end] = edge_control_points(
                pos2(from.position.x, from.position.y),
                pos2(to.position.x, to.position.y),
            );
            painter.add(CubicBezierShape::from_points_stroke(
                [
                    to_screen(start),
                    to_screen(control_a),
                    to_screen(control_b),
                    to_screen(end),
                ],
                false,
                Color32::TRANSPARENT,
                Stroke::new(width, color),
            ));
        }

        let pointer_world = ui
            .input(|input| input.pointer.hover_pos())
            .filter(|pointer| rect.contains(*pointer))
            .map(|pointer| viewport.screen_to_world((pointer - rect.left_top()).to_pos2()));

        let hovered_id = pointer_world
            .and_then(|world| {
                node_at(
                    visible_nodes(&self.graph, self.filter, self.selected.as_deref()),
                    world,
                )
            })
            .map(|node| node.id.clone());

        if hovered_id.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        // egui suppresses `clicked` once pointer travel crosses its drag
        // threshold, so a pan can never change the selection.
        let pending_selection = if response.clicked_by(egui::PointerButton::Primary) {
            response.interact_pointer_pos().and_then(|pointer| {
                let world = viewport.screen_to_world((pointer - rect.left_top()).to_pos2());
                node_at(
                    visible_nodes(&self.graph, self.filter, self.selected.as_deref()),
                    world,
                )
                .map(|node| node.id.clone())
            })
        } else {
            None
        };

        let selected = self.selected.clone();
        let mut selection_animating = false;

        for node in visible_nodes(&self.graph, self.filter, selected.as_deref()) {
            let center = to_screen(pos2(node.position.x, node.position.y));
            let radius = NODE_RADIUS * scale;
            if !circle_visible(rect, center, radius) {
                continue;
            }

            let reachable = self.unlocks.is_reachable(&node.id);
            let is_selected = selected.as_deref() == Some(node.id.as_str());
            let is_hovered = hovered_id.as_deref() == Some(node.id.as_str());
            let is_match = search_matches.contains(&node.id);

            let base_color = if reachable {
                category_color(node.category)
            } else {
                locked_fill()
            };
            let unselected_color = if is_hovered {
                blend_color(base_color, Color32::WHITE, 0.30)
            } else if is_match {
                blend_color(base_color, SEARCH_MATCH_COLOR, 0.68)
            } else if search_active {
                dim_color(base_color, 0.38)
            } else {
                base_color
            };

            let selection_mix = ui.ctx().animate_bool(
                ui.make_persistent_id(("node-selection", node.id.as_str())),
                is_selected,
            );
            if selection_mix > 0.0 && selection_mix < 1.0 {
                selection_animating = true;
            }

            let color = blend_color(unselected_color, SELECTED_COLOR, selection_mix);
            painter.circle_filled(center, radius, color);

            if selection_mix > 0.0 {
                let halo_strength = (selection_mix * (1.0 - selection_mix) * 4.0).clamp(0.0, 1.0);
                let halo_alpha = (30.0 + (halo_strength * 145.0)) as u8;
                painter.circle_stroke(
                    center,
                    radius + 4.0 + ((1.0 - selection_mix) * 6.0),
                    Stroke::new(
                        1.0 + (halo_strength * 1.6),
                        Color32::from_rgba_unmultiplied(245, 206, 93, halo_alpha),
                    ),
                );
            }

            let ring = if reachable {
                Color32::WHITE
            } else {
                locked_stroke()
            };
            painter.circle_stroke(center, radius, Stroke::new((2.0 * scale).clamp(1.0, 4.0), ring));

            // Tier badge, top-right of the circle.
            let badge_center = center + vec2(radius * 0.93, -radius * 0.93);
            painter.circle_filled(
                badge_center,
                (10.0 * scale).clamp(5.0, 18.0),
                Color32::from_rgba_unmultiplied(11, 18, 32, 190),
            );
            painter.text(
                badge_center,
                Align2::CENTER_CENTER,
                node.tier.to_string(),
                FontId::proportional((9.0 * scale).clamp(7.0, 16.0)),
                Color32::WHITE,
            );

            let label_color = if reachable {
                Color32::from_gray(238)
            } else {
                Color32::from_gray(168)
            };
            painter.text(
                center + vec2(0.0, radius + 12.0 * scale),
                Align2::CENTER_TOP,
                &node.title,
                FontId::proportional((12.0 * scale).clamp(9.0, 22.0)),
                label_color,
            );
        }

        if selection_animating {
            ui.ctx().request_repaint();
        }

        painter.text(
            rect.left_top() + vec2(10.0, 10.0),
            Align2::LEFT_TOP,
            format!(
                "scale {:.2}  |  offset {:.0}, {:.0}",
                scale, viewport.offset.x, viewport.offset.y
            ),
            FontId::proportional(13.0),
            Color32::from_gray(240),
        );

        self.draw_minimap(&painter, rect);

        if let Some(id) = pending_selection {
            self.set_selected(Some(id));
        }
    }

    fn draw_minimap(&self, painter: &Painter, rect: Rect) {
        let geometry = minimap::project(&self.graph, &self.viewport, rect.size());

        let margin = 16.0;
        let map_rect = Rect::from_min_size(
            rect.right_bottom() - MAP_SIZE - vec2(margin, margin),
            MAP_SIZE,
        );
        painter.rect_filled(map_rect, 4.0, Color32::from_rgba_unmultiplied(15, 23, 42, 235));
        stroke_rect(
            painter,
            map_rect,
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(148, 163, 184, 120)),
        );

        for point in &geometry.node_points {
            let dot = map_rect.left_top() + point.to_vec2();
            if map_rect.contains(dot) {
                painter.circle_filled(dot, 2.5, Color32::from_gray(205));
            }
        }

        let view_rect = geometry
            .view_rect
            .translate(map_rect.left_top().to_vec2())
            .intersect(map_rect);
        if view_rect.is_positive() {
            stroke_rect(
                painter,
                view_rect,
                Stroke::new(1.0, Color32::from_gray(235)),
            );
        }
    }
}

fn stroke_rect(painter: &Painter, rect: Rect, stroke: Stroke) {
    painter.line_segment([rect.left_top(), rect.right_top()], stroke);
    painter.line_segment([rect.right_top(), rect.right_bottom()], stroke);
    painter.line_segment([rect.right_bottom(), rect.left_bottom()], stroke);
    painter.line_segment([rect.left_bottom(), rect.left_top()], stroke);
}
