//! Decorative layers around the particle canvas.
//!
//! The diagonal wash is a vertex-coloured mesh behind the canvas. Everything
//! else (circuit grid, light rays, orbs, corner accents, data-flow dots) is
//! painted on egui's background layer above it, after the pointer glow.

use crate::state::PageTheme;
use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use bevy_egui::egui;
use rand::Rng;
use std::f32::consts::TAU;

const BACKDROP_Z: f32 = -10.0;

const VIOLET: [u8; 3] = [139, 92, 246];
const BLUE: [u8; 3] = [59, 130, 246];
const CYAN_400: [u8; 3] = [34, 211, 238];

const CIRCUIT_TILE: f32 = 60.0;
const CIRCUIT_PERIOD: f32 = 30.0;
const CIRCUIT_OPACITY: f32 = 0.15;
const CIRCUIT_LINE_WIDTH: f32 = 1.2;
const CIRCUIT_SPOT_RADIUS: f32 = 64.0;

const RAY_COUNT: usize = 5;
const RAY_WIDTH: f32 = 2.0;
const RAY_OPACITY: f32 = 0.3;

const ORB_BLUR: f32 = 64.0;
const PULSE_PERIOD: f32 = 2.0;

const CORNER_SIZE: f32 = 128.0;
const CORNER_WIDTH: f32 = 2.0;
const CORNER_OPACITY: f32 = 0.4;

const DATA_DOT_COUNT: usize = 20;
const DATA_DOT_RADIUS: f32 = 2.0;
const DATA_DOT_PEAK: f32 = 0.7;
const DATA_PATHS: [Vec2; 3] = [
    Vec2::new(100.0, -50.0),
    Vec2::new(-100.0, 50.0),
    Vec2::new(50.0, 100.0),
];

// --- Backdrop mesh ---

#[derive(Component)]
pub struct Backdrop;

fn over(base: Srgba, top: Srgba, alpha: f32) -> Srgba {
    Srgba::rgb(
        base.red + (top.red - base.red) * alpha,
        base.green + (top.green - base.green) * alpha,
        base.blue + (top.blue - base.blue) * alpha,
    )
}

/// Wash colours at the top-left, top-right, bottom-right and bottom-left corners.
///
/// Gray-900 runs into purple-900 at 40% along the diagonal and ends in
/// blue-900 at 40%; both tints are pre-composited over gray-900.
pub fn backdrop_corners() -> [Color; 4] {
    let base = Srgba::rgb_u8(17, 24, 39);
    let purple = over(base, Srgba::rgb_u8(88, 28, 135), 0.4);
    let blue = over(base, Srgba::rgb_u8(30, 58, 138), 0.4);
    [base.into(), purple.into(), blue.into(), purple.into()]
}

fn backdrop_mesh() -> Mesh {
    let colors: Vec<[f32; 4]> = backdrop_corners()
        .iter()
        .map(|color| {
            let linear = color.to_linear();
            [linear.red, linear.green, linear.blue, linear.alpha]
        })
        .collect();

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(
        Mesh::ATTRIBUTE_POSITION,
        vec![
            [-0.5, 0.5, 0.0],
            [0.5, 0.5, 0.0],
            [0.5, -0.5, 0.0],
            [-0.5, -0.5, 0.0],
        ],
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; 4])
    .with_inserted_attribute(
        Mesh::ATTRIBUTE_UV_0,
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
    .with_inserted_indices(Indices::U32(vec![0, 3, 2, 0, 2, 1]))
}

pub fn spawn_backdrop_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let size = windows
        .single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::ONE);

    commands.spawn((
        Backdrop,
        Mesh2d(meshes.add(backdrop_mesh())),
        MeshMaterial2d(materials.add(ColorMaterial::default())),
        Transform::from_xyz(0.0, 0.0, BACKDROP_Z).with_scale(size.extend(1.0)),
    ));
}

pub fn fit_backdrop_system(
    mut resized: MessageReader<WindowResized>,
    windows: Query<(), With<PrimaryWindow>>,
    mut query: Query<&mut Transform, With<Backdrop>>,
) {
    for event in resized.read() {
        if windows.get(event.window).is_err() {
            continue;
        }
        for mut transform in query.iter_mut() {
            transform.scale = Vec3::new(event.width, event.height, 1.0);
        }
    }
}

/// The wash belongs to the dark page; light mode shows the plain clear colour.
pub fn backdrop_visibility_system(
    theme: Res<PageTheme>,
    mut query: Query<&mut Visibility, With<Backdrop>>,
) {
    if !theme.is_changed() {
        return;
    }
    for mut visibility in query.iter_mut() {
        *visibility = if theme.dark {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
}

// --- Animated overlay ---

/// A small dot drifting along one of three short paths, fading in and out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataDot {
    /// Start position as a fraction of the viewport.
    pub anchor: Vec2,
    pub path: Vec2,
    pub period: f32,
    pub delay: f32,
    /// Opacity shown while waiting for the first run.
    pub rest_opacity: f32,
}

impl DataDot {
    fn random(rng: &mut impl Rng, index: usize) -> Self {
        Self {
            anchor: Vec2::new(rng.r#gen(), rng.r#gen()),
            path: DATA_PATHS[index % DATA_PATHS.len()],
            period: rng.gen_range(5.0..10.0),
            delay: rng.gen_range(0.0..2.0),
            rest_opacity: rng.gen_range(0.3..0.7),
        }
    }

    /// Offset from the anchor and opacity `t` seconds after start.
    pub fn sample(&self, t: f32) -> (Vec2, f32) {
        if t < self.delay || self.period <= 0.0 {
            return (Vec2::ZERO, self.rest_opacity);
        }
        let progress = ((t - self.delay) / self.period).fract();
        let opacity = if progress < 0.1 {
            DATA_DOT_PEAK * progress / 0.1
        } else if progress > 0.9 {
            DATA_DOT_PEAK * (1.0 - progress) / 0.1
        } else {
            DATA_DOT_PEAK
        };
        (self.path * progress, opacity)
    }
}

#[derive(Resource, Debug, Clone)]
pub struct Decor {
    dots: Vec<DataDot>,
}

impl Decor {
    pub fn seed(rng: &mut impl Rng) -> Self {
        Self {
            dots: (0..DATA_DOT_COUNT).map(|i| DataDot::random(rng, i)).collect(),
        }
    }

    pub fn dots(&self) -> &[DataDot] {
        &self.dots
    }
}

impl Default for Decor {
    fn default() -> Self {
        Self::seed(&mut rand::thread_rng())
    }
}

/// Shift of the circuit pattern; one tile every 30 s, then it repeats.
pub fn circuit_offset(t: f32) -> f32 {
    CIRCUIT_TILE * (t / CIRCUIT_PERIOD).rem_euclid(1.0)
}

fn ray_period(index: usize) -> f32 {
    15.0 + 3.0 * index as f32
}

/// Horizontal centre of a ray that is `progress` through its sweep.
///
/// A ray is twice the viewport wide and travels from two widths left of
/// the page to two widths right of it, so it crosses the page mid-sweep.
pub fn ray_center_x(progress: f32, width: f32) -> f32 {
    width * (4.0 * progress - 2.0)
}

/// Tailwind-style pulse: full strength, down to half and back every two seconds.
pub fn pulse(t: f32, delay: f32) -> f32 {
    if t < delay {
        return 1.0;
    }
    0.75 + 0.25 * (TAU * (t - delay) / PULSE_PERIOD).cos()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub center: Vec2,
    pub radius: f32,
    pub rgb: [u8; 3],
    pub alpha: f32,
    pub delay: f32,
}

pub fn orbs(size: Vec2) -> [Orb; 3] {
    [
        Orb {
            center: Vec2::new(80.0 + 144.0, 80.0 + 144.0),
            radius: 144.0,
            rgb: [168, 85, 247],
            alpha: 0.15,
            delay: 0.0,
        },
        Orb {
            center: Vec2::new(size.x - 80.0 - 160.0, size.y - 80.0 - 160.0),
            radius: 160.0,
            rgb: [59, 130, 246],
            alpha: 0.15,
            delay: 1.0,
        },
        Orb {
            center: Vec2::new(size.x / 4.0 + 192.0, size.y / 2.0 + 192.0),
            radius: 192.0,
            rgb: [6, 182, 212],
            alpha: 0.10,
            delay: 2.0,
        },
    ]
}

/// L-shaped accents: top-left, top-right, bottom-left, bottom-right.
pub fn corner_accents(size: Vec2) -> [([Vec2; 3], [u8; 3]); 4] {
    let s = CORNER_SIZE;
    let e = CORNER_WIDTH / 2.0;
    let (w, h) = (size.x, size.y);
    [
        (
            [Vec2::new(e, s), Vec2::new(e, e), Vec2::new(s, e)],
            CYAN_400,
        ),
        (
            [Vec2::new(w - s, e), Vec2::new(w - e, e), Vec2::new(w - e, s)],
            [192, 132, 252],
        ),
        (
            [Vec2::new(s, h - e), Vec2::new(e, h - e), Vec2::new(e, h - s)],
            [96, 165, 250],
        ),
        (
            [Vec2::new(w - e, h - s), Vec2::new(w - e, h - e), Vec2::new(w - s, h - e)],
            [244, 114, 182],
        ),
    ]
}

fn rgba(rgb: [u8; 3], alpha: f32) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        rgb[0],
        rgb[1],
        rgb[2],
        (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

fn pos(point: Vec2) -> egui::Pos2 {
    egui::pos2(point.x, point.y)
}

/// A disc that fades out towards `outer`, built from stacked translucent rings.
fn soft_disc(
    painter: &egui::Painter,
    center: Vec2,
    inner: f32,
    outer: f32,
    rgb: [u8; 3],
    alpha: f32,
    rings: usize,
) {
    let step_alpha = alpha / rings as f32;
    for ring in 0..rings {
        let t = ring as f32 / rings as f32;
        let radius = outer + (inner - outer) * t;
        painter.circle_filled(pos(center), radius.max(0.0), rgba(rgb, step_alpha));
    }
}

fn gradient_segment(
    painter: &egui::Painter,
    from: Vec2,
    to: Vec2,
    width: f32,
    from_color: egui::Color32,
    to_color: egui::Color32,
) {
    let normal = (to - from).perp().normalize_or_zero() * width / 2.0;
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(pos(from + normal), from_color);
    mesh.colored_vertex(pos(from - normal), from_color);
    mesh.colored_vertex(pos(to - normal), to_color);
    mesh.colored_vertex(pos(to + normal), to_color);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

fn paint_circuit(painter: &egui::Painter, size: Vec2, t: f32) {
    let shift = circuit_offset(t);
    let across = egui::Stroke::new(CIRCUIT_LINE_WIDTH, rgba(VIOLET, 0.3 * CIRCUIT_OPACITY));
    let down = egui::Stroke::new(CIRCUIT_LINE_WIDTH, rgba(BLUE, 0.3 * CIRCUIT_OPACITY));

    let mut y = shift - CIRCUIT_TILE / 2.0;
    while y < size.y {
        painter.hline(0.0..=size.x, y, across);
        y += CIRCUIT_TILE;
    }
    let mut x = shift - CIRCUIT_TILE / 2.0;
    while x < size.x {
        painter.vline(x, 0.0..=size.y, down);
        x += CIRCUIT_TILE;
    }

    let spot = CIRCUIT_TILE * 2.0;
    let mut y = shift - spot;
    while y < size.y + spot {
        let mut x = shift - spot;
        while x < size.x + spot {
            let alpha = 0.2 * CIRCUIT_OPACITY;
            soft_disc(painter, Vec2::new(x + spot * 0.25, y + spot * 0.25), 0.0, CIRCUIT_SPOT_RADIUS, VIOLET, alpha, 3);
            soft_disc(painter, Vec2::new(x + spot * 0.75, y + spot * 0.75), 0.0, CIRCUIT_SPOT_RADIUS, BLUE, alpha, 3);
            x += spot;
        }
        y += spot;
    }
}

fn paint_rays(painter: &egui::Painter, size: Vec2, t: f32) {
    let clear = rgba(CYAN_400, 0.0);
    let lit = rgba(CYAN_400, RAY_OPACITY);
    for i in 0..RAY_COUNT {
        let progress = (t / ray_period(i)).rem_euclid(1.0);
        let center = Vec2::new(
            ray_center_x(progress, size.x),
            size.y * (0.15 + 0.15 * i as f32),
        );
        let half = Vec2::from_angle((i as f32 * 5.0 - 10.0).to_radians()) * size.x;
        gradient_segment(painter, center - half, center, RAY_WIDTH, clear, lit);
        gradient_segment(painter, center, center + half, RAY_WIDTH, lit, clear);
    }
}

pub fn paint_decor(ctx: &egui::Context, decor: &Decor, t: f32) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let screen = ctx.screen_rect();
    let size = Vec2::new(screen.width(), screen.height());
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }

    paint_circuit(&painter, size, t);
    paint_rays(&painter, size, t);

    for orb in orbs(size) {
        soft_disc(
            &painter,
            orb.center,
            orb.radius - ORB_BLUR,
            orb.radius + ORB_BLUR,
            orb.rgb,
            orb.alpha * pulse(t, orb.delay),
            12,
        );
    }

    for (path, rgb) in corner_accents(size) {
        painter.line(
            path.iter().copied().map(pos).collect(),
            egui::Stroke::new(CORNER_WIDTH, rgba(rgb, CORNER_OPACITY)),
        );
    }

    for dot in decor.dots() {
        let (offset, opacity) = dot.sample(t);
        painter.circle_filled(
            pos(dot.anchor * size + offset),
            DATA_DOT_RADIUS,
            rgba(CYAN_400, opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dot() -> DataDot {
        DataDot {
            anchor: Vec2::new(0.5, 0.5),
            path: DATA_PATHS[0],
            period: 10.0,
            delay: 1.0,
            rest_opacity: 0.4,
        }
    }

    #[test]
    fn wash_runs_from_gray_through_purple_to_blue() {
        let [top_left, top_right, bottom_right, bottom_left] = backdrop_corners();
        assert_eq!(top_left, Color::srgb_u8(17, 24, 39));
        assert_eq!(top_right, bottom_left);
        assert_ne!(bottom_right, top_right);

        let purple = top_right.to_srgba();
        // purple-900 at 40% lifts red and blue over gray-900
        assert!(purple.red > 17.0 / 255.0 && purple.blue > 39.0 / 255.0);
    }

    #[test]
    fn circuit_moves_one_tile_per_period() {
        assert_eq!(circuit_offset(0.0), 0.0);
        assert!((circuit_offset(15.0) - 30.0).abs() < 1e-4);
        assert!(circuit_offset(30.0).abs() < 1e-4);
        assert!((circuit_offset(45.0) - 30.0).abs() < 1e-3);
    }

    #[test]
    fn rays_cross_the_page_mid_sweep() {
        assert_eq!(ray_center_x(0.0, 1000.0), -2000.0);
        assert_eq!(ray_center_x(0.5, 1000.0), 0.0);
        assert_eq!(ray_center_x(0.75, 1000.0), 1000.0);
        assert_eq!(ray_center_x(1.0, 1000.0), 2000.0);
        assert_eq!(ray_period(0), 15.0);
        assert_eq!(ray_period(4), 27.0);
    }

    #[test]
    fn orbs_pulse_between_half_and_full() {
        assert_eq!(pulse(0.5, 1.0), 1.0);
        assert!((pulse(1.0, 1.0) - 1.0).abs() < 1e-6);
        assert!((pulse(2.0, 1.0) - 0.5).abs() < 1e-6);
        for i in 0..100 {
            let p = pulse(i as f32 * 0.07, 0.0);
            assert!((0.5..=1.0).contains(&p));
        }
    }

    #[test]
    fn orbs_are_anchored_to_their_corners() {
        let [first, second, third] = orbs(Vec2::new(1920.0, 1080.0));
        assert_eq!(first.center, Vec2::new(224.0, 224.0));
        assert_eq!(second.center, Vec2::new(1680.0, 840.0));
        assert_eq!(third.center, Vec2::new(672.0, 732.0));
        assert_eq!(third.delay, 2.0);
    }

    #[test]
    fn corner_accents_hug_the_edges() {
        let size = Vec2::new(800.0, 600.0);
        let corners = corner_accents(size);
        assert_eq!(corners[0].0[1], Vec2::new(1.0, 1.0));
        assert_eq!(corners[3].0[1], Vec2::new(799.0, 599.0));
        for (path, _) in corners {
            for point in path {
                assert!((0.0..=800.0).contains(&point.x) && (0.0..=600.0).contains(&point.y));
            }
        }
    }

    #[test]
    fn data_dot_rests_until_its_delay() {
        let dot = dot();
        assert_eq!(dot.sample(0.5), (Vec2::ZERO, 0.4));
    }

    #[test]
    fn data_dot_fades_in_travels_and_fades_out() {
        let dot = dot();
        let (_, start) = dot.sample(1.0);
        assert_eq!(start, 0.0);

        let (_, rising) = dot.sample(1.5);
        assert!((rising - 0.35).abs() < 1e-4);

        let (offset, middle) = dot.sample(6.0);
        assert_eq!(middle, DATA_DOT_PEAK);
        assert!((offset - DATA_PATHS[0] * 0.5).length() < 1e-4);

        let (_, fading) = dot.sample(10.5);
        assert!((fading - 0.35).abs() < 1e-3);
    }

    #[test]
    fn decor_seeds_twenty_dots_across_the_paths() {
        let decor = Decor::seed(&mut StdRng::seed_from_u64(4));
        assert_eq!(decor.dots().len(), DATA_DOT_COUNT);
        for (i, dot) in decor.dots().iter().enumerate() {
            assert_eq!(dot.path, DATA_PATHS[i % 3]);
            assert!((0.0..1.0).contains(&dot.anchor.x) && (0.0..1.0).contains(&dot.anchor.y));
            assert!((5.0..10.0).contains(&dot.period));
            assert!((0.0..2.0).contains(&dot.delay));
            assert!((0.3..0.7).contains(&dot.rest_opacity));
        }
    }

    #[test]
    fn backdrop_follows_window_and_theme() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<PageTheme>()
            .add_message::<WindowResized>()
            .add_systems(Update, (fit_backdrop_system, backdrop_visibility_system));

        let window = app
            .world_mut()
            .spawn((Window::default(), PrimaryWindow))
            .id();
        let backdrop = app
            .world_mut()
            .spawn((Backdrop, Transform::default(), Visibility::default()))
            .id();

        app.world_mut().write_message(WindowResized {
            window,
            width: 1024.0,
            height: 768.0,
        });
        app.update();

        let world = app.world();
        assert_eq!(
            world.get::<Transform>(backdrop).unwrap().scale,
            Vec3::new(1024.0, 768.0, 1.0)
        );
        assert_eq!(*world.get::<Visibility>(backdrop).unwrap(), Visibility::Inherited);

        app.world_mut().resource_mut::<PageTheme>().dark = false;
        app.update();
        assert_eq!(
            *app.world().get::<Visibility>(backdrop).unwrap(),
            Visibility::Hidden
        );
    }
}
