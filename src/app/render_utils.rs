use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::curriculum::Category;

pub(super) fn category_color(category: Category) -> Color32 {
    match category {
        Category::Core => Color32::from_rgb(99, 102, 241),
        Category::Movement => Color32::from_rgb(52, 211, 153),
        Category::Branch => Color32::from_rgb(250, 204, 21),
        Category::Special => Color32::from_rgb(236, 72, 153),
        Category::Master => Color32::from_rgb(220, 38, 38),
    }
}

pub(super) fn locked_fill() -> Color32 {
    Color32::from_rgb(85, 85, 85)
}

pub(super) fn locked_stroke() -> Color32 {
    Color32::from_rgb(119, 119, 119)
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, offset: Vec2, scale: f32) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = (56.0 * scale.clamp(0.6, 1.8)).max(20.0);
    let origin = rect.left_top() + offset;

    let mut x = rect.left() + (origin.x - rect.left()).rem_euclid(step);
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70)),
        );
        x += step;
    }

    let mut y = rect.top() + (origin.y - rect.top()).rem_euclid(step);
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70)),
        );
        y += step;
    }
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

/// Control points for the curved prerequisite edge between two nodes, in
/// world space. The asymmetric sag gives branches an organic look instead
/// of straight spokes.
pub(super) fn edge_control_points(a: Pos2, b: Pos2) -> [Pos2; 4] {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    [
        a,
        Pos2::new(a.x + dx * 0.3, a.y + dy * 0.1 - 20.0),
        Pos2::new(a.x + dx * 0.7, a.y + dy * 0.9 + 20.0),
        b,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn edge_control_points_are_anchored_at_the_endpoints() {
        let [start, c1, c2, end] = edge_control_points(pos2(100.0, 100.0), pos2(260.0, 70.0));
        assert_eq!(start, pos2(100.0, 100.0));
        assert_eq!(end, pos2(260.0, 70.0));

        // Control points sit between the endpoints horizontally.
        assert!(c1.x > start.x && c1.x < end.x);
        assert!(c2.x > c1.x && c2.x < end.x);
    }

    #[test]
    fn circle_visibility_includes_partial_overlap() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(100.0, 100.0));
        assert!(circle_visible(rect, pos2(50.0, 50.0), 10.0));
        assert!(circle_visible(rect, pos2(-5.0, 50.0), 10.0));
        assert!(!circle_visible(rect, pos2(-20.0, 50.0), 10.0));
    }
}
