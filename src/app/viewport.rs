use eframe::egui::{Pos2, Vec2, pos2, vec2};

pub(in crate::app) const MIN_SCALE: f32 = 0.4;
pub(in crate::app) const MAX_SCALE: f32 = 2.5;

/// Wheel distance is divided by this before being added to the scale.
const WHEEL_ZOOM_DIVISOR: f32 = 1000.0;

/// Screen offset applied when recentering on a search result, and the scale
/// the viewport snaps to.
const FOCUS_CENTER: Vec2 = Vec2 { x: 200.0, y: 150.0 };
const FOCUS_SCALE: f32 = 1.2;

/// Pan/zoom state for the map canvas. `offset` is in screen units and
/// unbounded; `scale` is clamped to `[MIN_SCALE, MAX_SCALE]` by every
/// mutation, so no transform or hit test ever sees an out-of-range value.
///
/// Zoom scales around the world origin, not the pointer. Pointer-anchored
/// zoom would be the more conventional feel but is a deliberate behavior
/// change left on the table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(in crate::app) struct Viewport {
    pub(in crate::app) offset: Vec2,
    pub(in crate::app) scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Viewport {
    pub(in crate::app) fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub(in crate::app) fn zoom(&mut self, wheel_delta: f32) {
        self.scale = (self.scale + wheel_delta / WHEEL_ZOOM_DIVISOR).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub(in crate::app) fn set_view(&mut self, offset: Vec2, scale: f32) {
        self.offset = offset;
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Recenter on a world position, as picking a search result does.
    pub(in crate::app) fn focus_on(&mut self, world: Pos2) {
        self.set_view(vec2(-world.x, -world.y) + FOCUS_CENTER, FOCUS_SCALE);
    }

    pub(in crate::app) fn world_to_screen(&self, world: Pos2) -> Pos2 {
        pos2(
            world.x * self.scale + self.offset.x,
            world.y * self.scale + self.offset.y,
        )
    }

    pub(in crate::app) fn screen_to_world(&self, screen: Pos2) -> Pos2 {
        pos2(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_screen_round_trip_is_identity() {
        let points = [
            pos2(0.0, 0.0),
            pos2(100.0, 100.0),
            pos2(-312.5, 48.75),
            pos2(600.0, -90.0),
        ];
        let offsets = [Vec2::ZERO, vec2(240.0, -130.0), vec2(-55.5, 17.25)];
        let scales = [MIN_SCALE, 0.75, 1.0, 1.8, MAX_SCALE];

        for &offset in &offsets {
            for &scale in &scales {
                let mut viewport = Viewport::default();
                viewport.set_view(offset, scale);
                for &point in &points {
                    let round_trip = viewport.screen_to_world(viewport.world_to_screen(point));
                    assert!(
                        (round_trip - point).length() < 1e-3,
                        "round trip drifted at scale {scale}, offset {offset:?}: \
                         {point:?} -> {round_trip:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn zoom_always_stays_clamped() {
        let mut viewport = Viewport::default();

        for _ in 0..50 {
            viewport.zoom(400.0);
            assert!(viewport.scale <= MAX_SCALE);
        }
        assert_eq!(viewport.scale, MAX_SCALE);

        for _ in 0..80 {
            viewport.zoom(-650.0);
            assert!(viewport.scale >= MIN_SCALE);
        }
        assert_eq!(viewport.scale, MIN_SCALE);

        // A mixed sequence never escapes the bounds either.
        for (index, delta) in [120.0, -3000.0, 900.0, 45.0, -10.0].into_iter().enumerate() {
            viewport.zoom(delta);
            assert!(
                (MIN_SCALE..=MAX_SCALE).contains(&viewport.scale),
                "scale escaped bounds at step {index}: {}",
                viewport.scale
            );
        }
    }

    #[test]
    fn set_view_clamps_scale() {
        let mut viewport = Viewport::default();

        viewport.set_view(vec2(10.0, 20.0), 99.0);
        assert_eq!(viewport.scale, MAX_SCALE);

        viewport.set_view(vec2(10.0, 20.0), 0.0001);
        assert_eq!(viewport.scale, MIN_SCALE);
        assert_eq!(viewport.offset, vec2(10.0, 20.0));
    }

    #[test]
    fn panning_is_unbounded() {
        let mut viewport = Viewport::default();
        for _ in 0..1000 {
            viewport.pan(vec2(1e4, -1e4));
        }
        assert_eq!(viewport.offset, vec2(1e7, -1e7));
    }

    #[test]
    fn focus_on_recenters_with_fixed_scale() {
        let mut viewport = Viewport::default();
        viewport.pan(vec2(500.0, 500.0));

        viewport.focus_on(pos2(420.0, 160.0));
        assert_eq!(viewport.offset, vec2(-420.0 + 200.0, -160.0 + 150.0));
        assert_eq!(viewport.scale, FOCUS_SCALE);
    }
}
