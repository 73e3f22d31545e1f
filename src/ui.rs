use crate::backdrop::{Decor, paint_decor};
use crate::cards::{FlipState, accent_color};
use crate::contact::ContactForm;
use crate::content::Accent;
use crate::pointer::{PointerGlow, paint_glow};
use crate::scroll_spy::{ScrollSpy, Section, SectionSpan, SectionSpans};
use crate::sections;
use crate::state::{BackgroundSettings, Delay, PageTheme};
use crate::typewriter::HeroState;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use std::time::Duration;

const STATS_LOADING: Duration = Duration::from_secs(2);
const MAX_CONTENT_WIDTH: f32 = 1200.0;
const SIDE_PADDING: f32 = 24.0;
const SECTION_PADDING: f32 = 80.0;

pub fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Per-visitor page state that outlives a single frame.
#[derive(Resource)]
pub struct PageState {
    pub spy: ScrollSpy,
    pub spans: SectionSpans,
    pub scroll_request: Option<Section>,
    pub last_offset: Option<f32>,
    pub flip: FlipState,
    pub contact: ContactForm,
    pub stats: Delay,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            spy: ScrollSpy::default(),
            spans: SectionSpans::default(),
            scroll_request: None,
            last_offset: None,
            flip: FlipState::default(),
            contact: ContactForm::default(),
            stats: Delay::new(STATS_LOADING),
        }
    }
}

pub fn sync_clear_color_system(theme: Res<PageTheme>, mut clear: ResMut<ClearColor>) {
    if theme.is_changed() {
        clear.0 = theme.clear_color();
    }
}

/// Centred column with vertical breathing room, like a section container.
fn page_column<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let available = ui.available_width();
    let width = (available.min(MAX_CONTENT_WIDTH) - 2.0 * SIDE_PADDING).max(0.0);
    let side = ((available - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(side);
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.add_space(SECTION_PADDING);
            let inner = add_contents(ui);
            ui.add_space(SECTION_PADDING);
            inner
        })
        .inner
    })
}

#[derive(Debug, Default)]
struct NavAction {
    jump_to: Option<Section>,
    toggle_theme: bool,
}

fn nav_bar(ctx: &egui::Context, active: Section, dark: bool) -> NavAction {
    let fill = if dark {
        egui::Color32::from_rgba_unmultiplied(17, 24, 39, 220)
    } else {
        egui::Color32::from_rgba_unmultiplied(249, 250, 251, 220)
    };
    let frame = egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(24, 12));

    let mut action = NavAction::default();
    egui::TopBottomPanel::top("nav").frame(frame).show(ctx, |ui| {
        ui.horizontal(|ui| {
            let name = egui::RichText::new(crate::content::NAME)
                .size(22.0)
                .strong()
                .color(accent_color(Accent::Cyan));
            if ui.add(egui::Button::new(name).frame(false)).clicked() {
                action.jump_to = Some(Section::Hero);
            }
            ui.add_space(32.0);

            for section in Section::NAV {
                let color = if section == active {
                    accent_color(Accent::Cyan)
                } else {
                    ui.visuals().text_color()
                };
                let label = egui::RichText::new(section.label()).size(16.0).color(color);
                let response = ui.add(egui::Button::new(label).frame(false));
                if section == active {
                    let rect = response.rect;
                    ui.painter().line_segment(
                        [rect.left_bottom(), rect.right_bottom()],
                        egui::Stroke::new(2.0, color),
                    );
                }
                if response.clicked() {
                    action.jump_to = Some(section);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if dark { "Light" } else { "Dark" };
                action.toggle_theme = ui.button(label).clicked();
            });
        });
    });
    action
}

fn controls_window(ctx: &egui::Context, settings: &mut BackgroundSettings) {
    let mut open = settings.show_controls;
    egui::Window::new("Background Controls")
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label("Particles");

            let mut count = settings.particle_count;
            if ui
                .add(egui::Slider::new(&mut count, 10..=120).text("Particle Count"))
                .changed()
            {
                settings.particle_count = count;
                settings.rebuild_requested = true;
            }

            ui.add(egui::Slider::new(&mut settings.link_distance, 40.0..=240.0).text("Link Distance"));

            if ui
                .checkbox(&mut settings.neural_lines_enabled, "Neural Lines")
                .changed()
            {
                settings.rebuild_requested = true;
            }

            if ui.button("Regenerate").clicked() {
                settings.rebuild_requested = true;
            }

            ui.separator();
            ui.label(egui::RichText::new("F2 toggles this window").small());
        });
    if open != settings.show_controls {
        settings.show_controls = open;
    }
}

fn render_section(
    ui: &mut egui::Ui,
    section: Section,
    page: &mut PageState,
    hero: &HeroState,
    viewport_height: f32,
) {
    match section {
        Section::Hero => {
            let scroll_y = page.last_offset.unwrap_or(0.0);
            sections::hero(ui, hero, scroll_y, viewport_height);
        }
        Section::About => sections::about(ui),
        Section::Projects => sections::projects(ui, &mut page.flip),
        Section::DsaAchievements => sections::dsa(ui, &page.stats),
        Section::HackathonsEvents => {
            if sections::hackathons(ui) {
                page.scroll_request = Some(Section::Contact);
            }
        }
        Section::OpenSource => sections::open_source(ui),
        Section::Leadership => sections::leadership(ui),
        Section::Certifications => sections::certifications(ui),
        Section::Skills => sections::skills(ui),
        Section::Achievements => sections::achievements(ui),
        Section::Contact => sections::contact(ui, &mut page.contact),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn ui_system(
    mut contexts: EguiContexts,
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<BackgroundSettings>,
    mut theme: ResMut<PageTheme>,
    glow: Res<PointerGlow>,
    decor: Res<Decor>,
    hero: Res<HeroState>,
    mut page: ResMut<PageState>,
) {
    page.stats.tick(time.delta());
    if keys.just_pressed(KeyCode::F2) {
        settings.show_controls = !settings.show_controls;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if ctx.style().visuals.dark_mode != theme.dark {
        ctx.set_visuals(if theme.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
    }

    paint_glow(ctx, &glow);
    paint_decor(ctx, &decor, time.elapsed_secs());

    let nav = nav_bar(ctx, page.spy.active(), theme.dark);
    if nav.toggle_theme {
        theme.dark = !theme.dark;
        info!("Switched to {} theme", if theme.dark { "dark" } else { "light" });
    }
    if nav.jump_to.is_some() {
        page.scroll_request = nav.jump_to;
    }

    let page = &mut *page;
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let viewport_height = ui.available_height();
            let output = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let origin = ui.min_rect().top();
                    for section in Section::ALL {
                        let rect = page_column(ui, |ui| {
                            render_section(ui, section, page, &hero, viewport_height)
                        })
                        .response
                        .rect;

                        page.spans.record(
                            section,
                            SectionSpan {
                                top: rect.top() - origin,
                                height: rect.height(),
                            },
                        );

                        if page.scroll_request == Some(section) {
                            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
                            page.scroll_request = None;
                        }
                    }
                    page_column(ui, sections::footer);
                });

            let offset = output.state.offset.y;
            if page.last_offset != Some(offset) {
                page.spy.on_scroll(offset, &page.spans);
                page.last_offset = Some(offset);
            }
        });

    controls_window(ctx, &mut settings);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_starts_on_hero_with_stats_loading() {
        let page = PageState::default();
        assert_eq!(page.spy.active(), Section::Hero);
        assert!(!page.stats.is_done());
        assert!(page.scroll_request.is_none());
    }

    #[test]
    fn theme_toggle_updates_clear_color() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<PageTheme>()
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Update, sync_clear_color_system);

        app.update();
        assert_eq!(app.world().resource::<ClearColor>().0, Color::srgb_u8(17, 24, 39));

        app.world_mut().resource_mut::<PageTheme>().dark = false;
        app.update();
        assert_eq!(app.world().resource::<ClearColor>().0, Color::srgb_u8(249, 250, 251));
    }
}
