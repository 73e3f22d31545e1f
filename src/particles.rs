use crate::state::BackgroundSettings;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use rand::Rng;
use std::f32::consts::TAU;

/// Motion constants are expressed per frame at this rate.
pub const REFERENCE_FPS: f32 = 60.0;

const MAX_SPEED: f32 = 0.3;
const PHASE_STEP: f32 = 0.05;
const PULSE_AMPLITUDE: f32 = 0.1;
const MAX_LINK_OPACITY: f32 = 0.15;
const HEAD_OPACITY: f32 = 0.8;
const HEAD_RADIUS: f32 = 2.0;
/// The whole canvas is composited at half strength over the backdrop.
pub const CANVAS_OPACITY: f32 = 0.5;
const LINK_WIDTH: f32 = 0.5;
const TRAIL_WIDTH: f32 = 1.0;
const DOT_Z: f32 = 1.0;

// --- Components ---

#[derive(Component)]
pub struct BackgroundCanvas;

/// Filled disc for one particle or one neural-line head, a child of the canvas.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasDot {
    Particle(usize),
    LineHead(usize),
}

/// Hairlines joining nearby particles.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct LinkGizmos;

/// Neural-line trails.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct TrailGizmos;

/// Where and how to draw a dot, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub base_opacity: f32,
    pub phase: f32,
}

impl Particle {
    fn random(rng: &mut impl Rng, size: Vec2) -> Self {
        Self {
            position: random_point(rng, size),
            velocity: Vec2::new(
                (rng.r#gen::<f32>() - 0.5) * MAX_SPEED,
                (rng.r#gen::<f32>() - 0.5) * MAX_SPEED,
            ),
            radius: rng.gen_range(1.0..3.0),
            base_opacity: rng.gen_range(0.1..0.5),
            phase: rng.gen_range(0.0..TAU),
        }
    }

    pub fn opacity(&self) -> f32 {
        (self.base_opacity + self.phase.sin() * PULSE_AMPLITUDE).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTint {
    Violet,
    Blue,
}

impl LineTint {
    pub fn rgb(self) -> [u8; 3] {
        match self {
            LineTint::Violet => [139, 92, 246],
            LineTint::Blue => [59, 130, 246],
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Color {
        let [r, g, b] = self.rgb();
        Color::srgba(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            alpha,
        )
    }
}

/// A data pulse travelling from `start` to `end`, respawned on arrival.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeuralLine {
    pub start: Vec2,
    pub end: Vec2,
    pub progress: f32,
    pub speed: f32,
    pub opacity: f32,
    pub tint: LineTint,
}

impl NeuralLine {
    fn random(rng: &mut impl Rng, size: Vec2) -> Self {
        Self {
            start: random_point(rng, size),
            end: random_point(rng, size),
            progress: rng.r#gen(),
            speed: rng.gen_range(0.002..0.007),
            opacity: rng.gen_range(0.1..0.4),
            tint: if rng.gen_bool(0.5) {
                LineTint::Violet
            } else {
                LineTint::Blue
            },
        }
    }

    pub fn head(&self) -> Vec2 {
        self.start.lerp(self.end, self.progress)
    }
}

/// A transient pair of nearby particles, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub opacity: f32,
}

#[derive(Component, Debug, Clone)]
pub struct ParticleField {
    size: Vec2,
    link_distance: f32,
    particles: Vec<Particle>,
    lines: Vec<NeuralLine>,
}

impl ParticleField {
    pub fn seed(
        rng: &mut impl Rng,
        size: Vec2,
        particle_count: usize,
        line_count: usize,
        link_distance: f32,
    ) -> Self {
        let particles = (0..particle_count)
            .map(|_| Particle::random(rng, size))
            .collect();
        let lines = (0..line_count)
            .map(|_| NeuralLine::random(rng, size))
            .collect();

        Self {
            size,
            link_distance,
            particles,
            lines,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn lines(&self) -> &[NeuralLine] {
        &self.lines
    }

    pub fn set_link_distance(&mut self, distance: f32) {
        self.link_distance = distance.max(0.0);
    }

    fn has_area(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Advance the field by `dt` seconds. A zero-area canvas is left untouched.
    pub fn step(&mut self, dt: f32, rng: &mut impl Rng) {
        if !self.has_area() {
            return;
        }
        let frames = dt * REFERENCE_FPS;
        let size = self.size;

        for particle in &mut self.particles {
            particle.position += particle.velocity * frames;
            particle.position = wrap(particle.position, size);
            particle.phase = (particle.phase + PHASE_STEP * frames) % TAU;
        }

        for line in &mut self.lines {
            line.progress += line.speed * frames;
            if line.progress >= 1.0 {
                line.progress = 0.0;
                line.start = random_point(rng, size);
                line.end = random_point(rng, size);
            }
        }
    }

    /// New canvas dimensions; particles are re-wrapped, never reseeded.
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
        if !self.has_area() {
            return;
        }
        for particle in &mut self.particles {
            particle.position = wrap(particle.position, size);
        }
    }

    pub fn dot(&self, dot: CanvasDot) -> Option<Disc> {
        match dot {
            CanvasDot::Particle(i) => self.particles.get(i).map(|particle| Disc {
                center: particle.position,
                radius: particle.radius,
                color: LineTint::Blue.with_alpha(particle.opacity() * CANVAS_OPACITY),
            }),
            CanvasDot::LineHead(i) => self.lines.get(i).map(|line| Disc {
                center: line.head(),
                radius: HEAD_RADIUS,
                color: line.tint.with_alpha(HEAD_OPACITY * CANVAS_OPACITY),
            }),
        }
    }

    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let threshold = self.link_distance;
        self.particles
            .iter()
            .enumerate()
            .flat_map(move |(i, first)| {
                self.particles[i + 1..].iter().filter_map(move |second| {
                    let distance = first.position.distance(second.position);
                    link_opacity(distance, threshold).map(|opacity| Link {
                        a: first.position,
                        b: second.position,
                        opacity,
                    })
                })
            })
    }
}

/// Opacity of the line joining two particles `distance` apart, if they are linked.
pub fn link_opacity(distance: f32, threshold: f32) -> Option<f32> {
    if distance < threshold {
        Some(MAX_LINK_OPACITY * (1.0 - distance / threshold))
    } else {
        None
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}

fn wrap(position: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(wrap_axis(position.x, size.x), wrap_axis(position.y, size.y))
}

fn random_point(rng: &mut impl Rng, size: Vec2) -> Vec2 {
    let point = Vec2::new(rng.r#gen::<f32>() * size.x, rng.r#gen::<f32>() * size.y);
    if size.x > 0.0 && size.y > 0.0 {
        wrap(point, size)
    } else {
        point
    }
}

/// Canvas coordinates (origin top-left, y down) to 2D world space.
fn to_world(point: Vec2, size: Vec2) -> Vec2 {
    Vec2::new(point.x - size.x / 2.0, size.y / 2.0 - point.y)
}

// --- Systems ---

pub fn configure_gizmos_system(mut store: ResMut<GizmoConfigStore>) {
    store.config_mut::<LinkGizmos>().0.line.width = LINK_WIDTH;
    store.config_mut::<TrailGizmos>().0.line.width = TRAIL_WIDTH;
}

pub fn spawn_canvas_system(
    mut commands: Commands,
    mut settings: ResMut<BackgroundSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    query: Query<Entity, With<BackgroundCanvas>>,
) {
    if !settings.rebuild_requested {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.x <= 0.0 || size.y <= 0.0 {
        // Surface not laid out yet, try again next frame
        return;
    }

    for entity in query.iter() {
        commands.entity(entity).despawn();
    }

    let line_count = if settings.neural_lines_enabled {
        settings.line_count
    } else {
        0
    };

    info!(
        "Seeding background with {} particles and {} neural lines on a {}x{} canvas",
        settings.particle_count, line_count, size.x, size.y
    );

    let field = ParticleField::seed(
        &mut rand::thread_rng(),
        size,
        settings.particle_count,
        line_count,
        settings.link_distance,
    );
    commands.spawn((
        BackgroundCanvas,
        field,
        Transform::default(),
        Visibility::default(),
    ));

    settings.rebuild_requested = false;
}

/// Give a freshly seeded canvas one disc entity per particle and line head.
pub fn spawn_dots_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    query: Query<(Entity, &ParticleField), Added<ParticleField>>,
) {
    for (canvas, field) in query.iter() {
        let disc = meshes.add(Circle::new(1.0));
        let dots = (0..field.particles().len())
            .map(CanvasDot::Particle)
            .chain((0..field.lines().len()).map(CanvasDot::LineHead));

        commands.entity(canvas).with_children(|parent| {
            for dot in dots {
                parent.spawn((
                    dot,
                    Mesh2d(disc.clone()),
                    MeshMaterial2d(materials.add(ColorMaterial::from_color(Color::NONE))),
                    Transform::default(),
                ));
            }
        });
    }
}

pub fn resize_canvas_system(
    mut resized: MessageReader<WindowResized>,
    windows: Query<(), With<PrimaryWindow>>,
    mut query: Query<&mut ParticleField, With<BackgroundCanvas>>,
) {
    for event in resized.read() {
        if windows.get(event.window).is_err() {
            continue;
        }
        for mut field in query.iter_mut() {
            debug!("Canvas resized to {}x{}", event.width, event.height);
            field.resize(Vec2::new(event.width, event.height));
        }
    }
}

pub fn step_field_system(
    time: Res<Time>,
    settings: Res<BackgroundSettings>,
    mut query: Query<&mut ParticleField, With<BackgroundCanvas>>,
) {
    let dt = time.delta_secs();
    let mut rng = rand::thread_rng();

    for mut field in query.iter_mut() {
        if field.link_distance != settings.link_distance {
            field.set_link_distance(settings.link_distance);
        }
        field.step(dt, &mut rng);
    }
}

pub fn sync_dots_system(
    mut materials: ResMut<Assets<ColorMaterial>>,
    canvases: Query<&ParticleField, With<BackgroundCanvas>>,
    mut dots: Query<(
        &CanvasDot,
        &ChildOf,
        &mut Transform,
        &MeshMaterial2d<ColorMaterial>,
    )>,
) {
    for (dot, child_of, mut transform, material) in dots.iter_mut() {
        let Ok(field) = canvases.get(child_of.parent()) else {
            continue;
        };
        let Some(disc) = field.dot(*dot) else {
            continue;
        };
        transform.translation = to_world(disc.center, field.size()).extend(DOT_Z);
        transform.scale = Vec3::splat(disc.radius);
        if let Some(mat) = materials.get_mut(&material.0) {
            mat.color = disc.color;
        }
    }
}

pub fn draw_field_system(
    mut trails: Gizmos<TrailGizmos>,
    mut hairlines: Gizmos<LinkGizmos>,
    query: Query<&ParticleField, With<BackgroundCanvas>>,
) {
    for field in query.iter() {
        let size = field.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            continue;
        }

        for line in field.lines() {
            let start = to_world(line.start, size);
            let head = to_world(line.head(), size);
            let mid = start.lerp(head, 0.5);
            let clear = line.tint.with_alpha(0.0);
            let lit = line.tint.with_alpha(line.opacity * CANVAS_OPACITY);
            trails.line_gradient_2d(start, mid, clear, lit);
            trails.line_gradient_2d(mid, head, lit, clear);
        }

        for link in field.links() {
            hairlines.line_2d(
                to_world(link.a, size),
                to_world(link.b, size),
                LineTint::Violet.with_alpha(link.opacity * CANVAS_OPACITY),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::color::Alpha;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const FRAME: f32 = 1.0 / REFERENCE_FPS;

    fn field(seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::seed(&mut rng, Vec2::new(800.0, 600.0), 40, 15, 120.0)
    }

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius: 1.0,
            base_opacity: 0.3,
            phase: 0.0,
        }
    }

    #[test]
    fn positions_stay_inside_canvas() {
        let mut field = field(7);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..5_000 {
            field.step(FRAME, &mut rng);
            for p in field.particles() {
                assert!((0.0..800.0).contains(&p.position.x), "x = {}", p.position.x);
                assert!((0.0..600.0).contains(&p.position.y), "y = {}", p.position.y);
            }
        }
    }

    #[test]
    fn particles_wrap_to_opposite_edge() {
        let mut field = ParticleField {
            size: Vec2::new(100.0, 100.0),
            link_distance: 120.0,
            particles: vec![Particle {
                velocity: Vec2::new(-0.3, 0.3),
                ..particle_at(0.1, 99.9)
            }],
            lines: Vec::new(),
        };
        field.step(FRAME, &mut StdRng::seed_from_u64(1));

        let p = field.particles()[0].position;
        assert!(p.x > 99.0, "x wrapped to {}", p.x);
        assert!(p.y < 1.0, "y wrapped to {}", p.y);
    }

    #[test]
    fn counts_are_constant_over_many_ticks() {
        let mut field = field(42);
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..10_000 {
            field.step(FRAME, &mut rng);
        }
        assert_eq!(field.particles().len(), 40);
        assert_eq!(field.lines().len(), 15);
    }

    #[test]
    fn lines_respawn_when_they_arrive() {
        let mut field = ParticleField {
            size: Vec2::new(200.0, 200.0),
            link_distance: 120.0,
            particles: Vec::new(),
            lines: vec![NeuralLine {
                start: Vec2::ZERO,
                end: Vec2::new(10.0, 10.0),
                progress: 0.999,
                speed: 0.005,
                opacity: 0.2,
                tint: LineTint::Blue,
            }],
        };
        field.step(FRAME, &mut StdRng::seed_from_u64(3));

        let line = field.lines()[0];
        assert_eq!(line.progress, 0.0);
        assert_eq!(line.speed, 0.005);
        assert_eq!(line.tint, LineTint::Blue);
    }

    #[test]
    fn zero_sized_canvas_skips_the_tick() {
        let mut field = field(5);
        field.resize(Vec2::new(0.0, 600.0));
        let before = field.particles().to_vec();
        field.step(FRAME, &mut StdRng::seed_from_u64(6));
        assert_eq!(field.particles(), before.as_slice());
    }

    #[test]
    fn shrinking_rewraps_without_reseeding() {
        let mut field = field(9);
        let velocities: Vec<Vec2> = field.particles().iter().map(|p| p.velocity).collect();
        field.resize(Vec2::new(300.0, 200.0));

        for (p, v) in field.particles().iter().zip(&velocities) {
            assert!(p.position.x < 300.0 && p.position.y < 200.0);
            assert_eq!(p.velocity, *v);
        }
        assert_eq!(field.particles().len(), 40);
    }

    #[test]
    fn link_drawn_only_below_threshold() {
        assert!(link_opacity(0.0, 120.0).is_some());
        assert!(link_opacity(119.9, 120.0).is_some());
        assert!(link_opacity(120.0, 120.0).is_none());
        assert!(link_opacity(500.0, 120.0).is_none());
    }

    #[test]
    fn link_opacity_falls_with_distance() {
        let mut last = f32::INFINITY;
        for d in (0..120).step_by(5) {
            let opacity = link_opacity(d as f32, 120.0).unwrap();
            assert!(opacity < last);
            last = opacity;
        }
        assert!((link_opacity(0.0, 120.0).unwrap() - MAX_LINK_OPACITY).abs() < 1e-6);
    }

    #[test]
    fn links_cover_each_close_pair_once() {
        let field = ParticleField {
            size: Vec2::new(1000.0, 1000.0),
            link_distance: 120.0,
            particles: vec![
                particle_at(0.0, 0.0),
                particle_at(60.0, 0.0),
                particle_at(0.0, 100.0),
                particle_at(900.0, 900.0),
            ],
            lines: Vec::new(),
        };
        let links: Vec<Link> = field.links().collect();

        // (0,1) at 60, (0,2) at 100, (1,2) at ~116.6; the far particle links to nothing
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.a != Vec2::new(900.0, 900.0)));
        assert!(links.iter().all(|l| l.b != Vec2::new(900.0, 900.0)));
    }

    #[test]
    fn pulsing_opacity_stays_in_range() {
        let mut p = particle_at(0.0, 0.0);
        p.base_opacity = 0.05;
        for i in 0..100 {
            p.phase = i as f32 * 0.1;
            let opacity = p.opacity();
            assert!((0.0..=1.0).contains(&opacity));
        }
    }

    #[test]
    fn canvas_coordinates_map_to_centred_world() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(to_world(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
        assert_eq!(to_world(Vec2::ZERO, size), Vec2::new(-400.0, 300.0));
    }

    #[test]
    fn dots_follow_particles_at_half_strength() {
        let field = field(21);
        let particle = field.particles()[3];
        let disc = field.dot(CanvasDot::Particle(3)).unwrap();
        assert_eq!(disc.center, particle.position);
        assert_eq!(disc.radius, particle.radius);
        assert!((disc.color.alpha() - particle.opacity() * CANVAS_OPACITY).abs() < 1e-6);

        let head = field.dot(CanvasDot::LineHead(0)).unwrap();
        assert_eq!(head.center, field.lines()[0].head());
        assert!((head.color.alpha() - 0.4).abs() < 1e-6);

        assert!(field.dot(CanvasDot::Particle(40)).is_none());
        assert!(field.dot(CanvasDot::LineHead(15)).is_none());
    }

    fn canvas_app(width: f32, height: f32) -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<BackgroundSettings>()
            .add_message::<WindowResized>()
            .add_systems(Update, (spawn_canvas_system, resize_canvas_system).chain());

        let mut window = Window::default();
        window.resolution.set(width, height);
        let window = app.world_mut().spawn((window, PrimaryWindow)).id();
        (app, window)
    }

    fn canvases(app: &mut App) -> Vec<(Entity, ParticleField)> {
        let mut query = app
            .world_mut()
            .query_filtered::<(Entity, &ParticleField), With<BackgroundCanvas>>();
        query
            .iter(app.world())
            .map(|(entity, field)| (entity, field.clone()))
            .collect()
    }

    fn set_window_size(app: &mut App, window: Entity, width: f32, height: f32) {
        let world = app.world_mut();
        let mut window = world.get_mut::<Window>(window).unwrap();
        window.resolution.set(width, height);
    }

    #[test]
    fn seeding_waits_for_a_sized_window() {
        let (mut app, window) = canvas_app(0.0, 0.0);
        app.update();
        assert!(canvases(&mut app).is_empty());
        assert!(app.world().resource::<BackgroundSettings>().rebuild_requested);

        set_window_size(&mut app, window, 800.0, 600.0);
        app.update();
        let seeded = canvases(&mut app);
        assert_eq!(seeded.len(), 1);
        assert_eq!(seeded[0].1.size(), Vec2::new(800.0, 600.0));
        assert!(!app.world().resource::<BackgroundSettings>().rebuild_requested);
    }

    #[test]
    fn rebuild_replaces_the_canvas() {
        let (mut app, _) = canvas_app(800.0, 600.0);
        app.update();
        let first = canvases(&mut app)[0].0;

        app.world_mut()
            .resource_mut::<BackgroundSettings>()
            .rebuild_requested = true;
        app.update();

        let after = canvases(&mut app);
        assert_eq!(after.len(), 1);
        assert_ne!(after[0].0, first);
        assert!(app.world().get_entity(first).is_err());
    }

    #[test]
    fn disabled_neural_lines_seed_none() {
        let (mut app, _) = canvas_app(800.0, 600.0);
        app.world_mut()
            .resource_mut::<BackgroundSettings>()
            .neural_lines_enabled = false;
        app.update();

        let seeded = canvases(&mut app);
        assert_eq!(seeded[0].1.lines().len(), 0);
        assert_eq!(seeded[0].1.particles().len(), 40);
    }

    #[test]
    fn window_resize_rewraps_without_reseeding() {
        let (mut app, window) = canvas_app(800.0, 600.0);
        app.update();
        let (canvas, before) = canvases(&mut app).remove(0);

        app.world_mut().write_message(WindowResized {
            window,
            width: 400.0,
            height: 300.0,
        });
        app.update();

        let (after_canvas, after) = canvases(&mut app).remove(0);
        assert_eq!(after_canvas, canvas);
        assert_eq!(after.size(), Vec2::new(400.0, 300.0));
        assert_eq!(after.particles().len(), before.particles().len());
        for (old, new) in before.particles().iter().zip(after.particles()) {
            assert_eq!(old.velocity, new.velocity);
            assert_eq!(old.radius, new.radius);
            assert!(new.position.x < 400.0 && new.position.y < 300.0);
        }
    }

    #[test]
    fn resize_of_another_window_is_ignored() {
        let (mut app, _) = canvas_app(800.0, 600.0);
        app.update();
        let other = app.world_mut().spawn(Window::default()).id();

        app.world_mut().write_message(WindowResized {
            window: other,
            width: 100.0,
            height: 100.0,
        });
        app.update();

        assert_eq!(canvases(&mut app)[0].1.size(), Vec2::new(800.0, 600.0));
    }

    #[test]
    fn field_survives_headless_updates() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<BackgroundSettings>()
            .add_systems(Update, step_field_system);
        app.world_mut().spawn((BackgroundCanvas, field(11)));

        for _ in 0..100 {
            app.update();
        }

        let mut query = app.world_mut().query::<&ParticleField>();
        let field = query.single(app.world()).unwrap();
        assert_eq!(field.particles().len(), 40);
        assert_eq!(field.lines().len(), 15);
    }
}
