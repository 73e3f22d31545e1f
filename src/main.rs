use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

mod backdrop;
mod cards;
mod contact;
mod content;
mod particles;
mod pointer;
mod scroll_spy;
mod sections;
mod state;
mod typewriter;
mod ui;

fn main() {
    let theme = state::PageTheme::default();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Gaurav Dhakad | Portfolio".into(),
                    fit_canvas_to_parent: true,
                    prevent_default_event_handling: false,
                    ..default()
                }),
                ..default()
            }),
            EguiPlugin::default(),
        ))
        .init_gizmo_group::<particles::LinkGizmos>()
        .init_gizmo_group::<particles::TrailGizmos>()
        .insert_resource(ClearColor(theme.clear_color()))
        .insert_resource(theme)
        .init_resource::<state::BackgroundSettings>()
        .init_resource::<pointer::PointerGlow>()
        .init_resource::<backdrop::Decor>()
        .init_resource::<typewriter::HeroState>()
        .init_resource::<ui::PageState>()
        .add_systems(
            Startup,
            (
                ui::setup_scene,
                backdrop::spawn_backdrop_system,
                particles::configure_gizmos_system,
            ),
        )
        .add_systems(EguiPrimaryContextPass, ui::ui_system)
        .add_systems(
            Update,
            (
                particles::spawn_canvas_system,
                particles::spawn_dots_system,
                particles::resize_canvas_system,
                backdrop::fit_backdrop_system,
                particles::step_field_system,
                particles::sync_dots_system,
                particles::draw_field_system,
                pointer::track_pointer_system,
                typewriter::hero_tick_system,
                ui::sync_clear_color_system,
                backdrop::backdrop_visibility_system,
            )
                .chain(),
        )
        .run();
}
