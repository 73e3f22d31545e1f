use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy_egui::egui;

/// Time constant of the follow; roughly a 700 ms ease-out.
const FOLLOW_TAU: f32 = 0.7 / 3.0;
pub const GLOW_RADIUS: f32 = 600.0;
const GLOW_RINGS: usize = 24;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerGlow {
    target: Vec2,
    center: Vec2,
}

impl PointerGlow {
    pub fn track(&mut self, position: Vec2) {
        self.target = position;
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Ease the glow centre toward the pointer. Never overshoots.
    pub fn follow(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let blend = 1.0 - (-dt / FOLLOW_TAU).exp();
        self.center = self.center.lerp(self.target, blend);
    }
}

pub fn track_pointer_system(
    mut moved: MessageReader<CursorMoved>,
    mut glow: ResMut<PointerGlow>,
    time: Res<Time>,
) {
    if let Some(last) = moved.read().last() {
        glow.track(last.position);
    }
    glow.follow(time.delta_secs());
}

/// Colour and alpha of the radial gradient at `t` (0 = centre, 1 = `GLOW_RADIUS`).
fn glow_rgba(t: f32) -> ([f32; 3], f32) {
    const VIOLET: [f32; 3] = [139.0, 92.0, 246.0];
    const BLUE: [f32; 3] = [59.0, 130.0, 246.0];

    if t < 0.3 {
        let k = t / 0.3;
        let mix = |a: f32, b: f32| a + (b - a) * k;
        (
            [mix(VIOLET[0], BLUE[0]), mix(VIOLET[1], BLUE[1]), BLUE[2]],
            mix(0.2, 0.15),
        )
    } else if t < 0.6 {
        (BLUE, 0.15 * (1.0 - (t - 0.3) / 0.3))
    } else {
        (BLUE, 0.0)
    }
}

pub fn paint_glow(ctx: &egui::Context, glow: &PointerGlow) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let center = egui::pos2(glow.center.x, glow.center.y);

    // Stacked discs, outermost first; each ring only adds the alpha the
    // gradient gains over the ring outside it.
    for ring in 0..GLOW_RINGS {
        let t = 0.6 * (1.0 - ring as f32 / GLOW_RINGS as f32);
        let (_, outer_alpha) = glow_rgba(t);
        let (rgb, inner_alpha) = glow_rgba(0.6 * (1.0 - (ring + 1) as f32 / GLOW_RINGS as f32));
        let step_alpha = inner_alpha - outer_alpha;
        if step_alpha <= 0.0 {
            continue;
        }
        let color = egui::Color32::from_rgba_unmultiplied(
            rgb[0] as u8,
            rgb[1] as u8,
            rgb[2] as u8,
            (step_alpha * 255.0).round() as u8,
        );
        painter.circle_filled(center, t * GLOW_RADIUS, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        let glow = PointerGlow::default();
        assert_eq!(glow.center(), Vec2::ZERO);
        assert_eq!(glow.target, Vec2::ZERO);
    }

    #[test]
    fn follows_without_overshooting() {
        let mut glow = PointerGlow::default();
        glow.track(Vec2::new(400.0, 300.0));

        let mut last_distance = f32::INFINITY;
        for _ in 0..120 {
            glow.follow(1.0 / 60.0);
            let center = glow.center();
            assert!(center.x <= 400.0 && center.y <= 300.0);
            let distance = center.distance(glow.target);
            assert!(distance < last_distance);
            last_distance = distance;
        }
        // two seconds is several time constants
        assert!(last_distance < 1.0);
    }

    #[test]
    fn zero_frame_leaves_centre_alone() {
        let mut glow = PointerGlow::default();
        glow.track(Vec2::new(10.0, 10.0));
        glow.follow(0.0);
        assert_eq!(glow.center(), Vec2::ZERO);
    }

    #[test]
    fn gradient_fades_out_by_sixty_percent() {
        assert!(glow_rgba(0.0).1 > glow_rgba(0.45).1);
        assert_eq!(glow_rgba(0.6).1, 0.0);
        assert_eq!(glow_rgba(0.9).1, 0.0);
    }
}
