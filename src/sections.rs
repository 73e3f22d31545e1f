//! Page sections, top to bottom.

use crate::cards::{FlipState, accent_color, badge, card, card_width};
use crate::contact::{ContactForm, follow_link};
use crate::content::{self, Accent};
use crate::scroll_spy::hero_parallax;
use crate::state::Delay;
use crate::typewriter::{HEADING_FADE, HeroState};
use bevy_egui::egui;

const GAP: f32 = 16.0;
const FRONT_TECH_BADGES: usize = 4;

fn muted(ui: &egui::Ui) -> egui::Color32 {
    if ui.visuals().dark_mode {
        egui::Color32::from_rgb(156, 163, 175)
    } else {
        egui::Color32::from_rgb(75, 85, 99)
    }
}

fn strong(ui: &egui::Ui) -> egui::Color32 {
    ui.visuals().strong_text_color()
}

pub fn section_heading(ui: &mut egui::Ui, title: &str, accent: Accent, blurb: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .size(44.0)
                .strong()
                .color(accent_color(accent)),
        );
        let (bar, _) = ui.allocate_exact_size(egui::vec2(96.0, 4.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(bar, 2.0, accent_color(accent).gamma_multiply(0.8));
        if let Some(blurb) = blurb {
            ui.add_space(12.0);
            ui.label(egui::RichText::new(blurb).size(17.0).color(muted(ui)));
        }
    });
    ui.add_space(40.0);
}

fn wrapped_cards(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(GAP, GAP);
        add_contents(ui);
    });
}

fn link_button(ui: &mut egui::Ui, label: &str, url: &str, accent: Accent) {
    let text = egui::RichText::new(label).size(17.0).color(accent_color(accent));
    let button = egui::Button::new(text)
        .stroke(egui::Stroke::new(1.0, accent_color(accent)))
        .corner_radius(20.0)
        .min_size(egui::vec2(120.0, 40.0));
    if ui.add(button).clicked() {
        follow_link(ui.ctx(), url);
    }
}

pub fn hero(ui: &mut egui::Ui, hero: &HeroState, scroll_y: f32, viewport_height: f32) {
    let (lift, opacity) = hero_parallax(scroll_y);
    ui.set_min_height(viewport_height);
    ui.multiply_opacity(opacity);
    ui.add_space((viewport_height * 0.2 + lift).max(0.0));

    ui.vertical_centered(|ui| {
        let reveal = hero.heading.progress_after(HEADING_FADE);
        ui.label(
            egui::RichText::new(content::NAME.to_uppercase())
                .size(84.0)
                .strong()
                .color(accent_color(Accent::Cyan).gamma_multiply(reveal)),
        );
        ui.add_space(16.0);

        let writer = &hero.typewriter;
        let color = writer
            .role()
            .map_or(accent_color(Accent::Cyan), |role| accent_color(role.color));
        let cursor_on = (ui.input(|i| i.time) * 2.0) as i64 % 2 == 0;
        let mut line = egui::text::LayoutJob::default();
        line.append(
            writer.text(),
            0.0,
            egui::TextFormat::simple(egui::FontId::proportional(34.0), color),
        );
        line.append(
            if cursor_on { "|" } else { " " },
            0.0,
            egui::TextFormat::simple(egui::FontId::proportional(34.0), strong(ui)),
        );
        ui.label(line);
        ui.add_space(24.0);

        ui.set_max_width(900.0);
        ui.label(egui::RichText::new(content::SUMMARY).size(20.0).color(muted(ui)));
        ui.add_space(36.0);
    });

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(GAP, GAP);
        for link in content::PRIMARY_LINKS.iter().chain(content::SECONDARY_LINKS) {
            link_button(ui, link.label, link.url, link.accent);
        }
    });
    ui.add_space(28.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 48.0;
        ui.label(egui::RichText::new(format!("Email  {}", content::EMAIL)).size(18.0).color(muted(ui)));
        ui.label(egui::RichText::new(format!("Phone  {}", content::PHONE)).size(18.0).color(muted(ui)));
    });

    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("SCROLL")
                .small()
                .color(accent_color(Accent::Cyan)),
        );
    });
}

pub fn about(ui: &mut egui::Ui) {
    section_heading(ui, "About Me", Accent::Cyan, None);

    for paragraph in content::ABOUT_PARAGRAPHS {
        ui.label(egui::RichText::new(*paragraph).size(18.0).color(muted(ui)));
        ui.add_space(12.0);
    }

    ui.add_space(8.0);
    let full = ui.available_width();
    card(ui, Accent::Cyan, full, |ui| {
        ui.label(egui::RichText::new("Education").strong().color(accent_color(Accent::Cyan)));
        ui.label(egui::RichText::new(content::EDUCATION_DEGREE).size(18.0).strong().color(strong(ui)));
        ui.label(egui::RichText::new(content::EDUCATION_SCHOOL).color(muted(ui)));
        badge(ui, content::EDUCATION_YEARS, Accent::Green);
    });
    ui.add_space(GAP * 2.0);

    let width = card_width(ui.available_width(), 2, GAP);
    wrapped_cards(ui, |ui| {
        for item in content::ABOUT_HIGHLIGHTS {
            card(ui, Accent::Purple, width, |ui| {
                ui.label(egui::RichText::new(item.title).size(18.0).strong().color(accent_color(item.accent)));
                ui.label(egui::RichText::new(item.description).color(muted(ui)));
                badge(ui, item.highlight, Accent::Purple);
            });
        }
    });

    ui.add_space(GAP * 2.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Focus Areas").size(24.0).strong().color(strong(ui)));
    });
    ui.add_space(GAP);
    ui.horizontal_wrapped(|ui| {
        for area in content::FOCUS_AREAS {
            badge(ui, area, Accent::Cyan);
        }
    });
}

fn project_front(ui: &mut egui::Ui, project: &content::Project) {
    ui.label(egui::RichText::new(project.title).size(20.0).strong().color(strong(ui)));
    ui.label(egui::RichText::new(project.description).color(muted(ui)));
    ui.add_space(12.0);
    ui.horizontal_wrapped(|ui| {
        for tech in project.tech.iter().take(FRONT_TECH_BADGES) {
            badge(ui, tech, Accent::Blue);
        }
        if project.tech.len() > FRONT_TECH_BADGES {
            badge(
                ui,
                &format!("+{} more", project.tech.len() - FRONT_TECH_BADGES),
                Accent::Purple,
            );
        }
    });
    ui.add_space(12.0);
    ui.label(egui::RichText::new("Click to see details").small().color(muted(ui)));
}

/// Returns true when the back face asked to be turned over again.
fn project_back(ui: &mut egui::Ui, project: &content::Project) -> bool {
    ui.label(egui::RichText::new(project.title).size(20.0).strong().color(accent_color(Accent::Blue)));
    ui.add_space(8.0);
    ui.label(egui::RichText::new("Tech Stack").strong().color(strong(ui)));
    ui.horizontal_wrapped(|ui| {
        for tech in project.tech {
            badge(ui, tech, Accent::Blue);
        }
    });
    ui.add_space(8.0);
    ui.label(egui::RichText::new("Key Features").strong().color(strong(ui)));
    for highlight in project.highlights {
        ui.label(egui::RichText::new(format!("•  {}", highlight)).color(muted(ui)));
    }
    ui.add_space(12.0);

    let mut back = false;
    ui.horizontal(|ui| {
        if ui.button("GitHub").clicked() {
            follow_link(ui.ctx(), project.github);
        }
        back = ui.button("Back").clicked();
    });
    back
}

pub fn projects(ui: &mut egui::Ui, flip: &mut FlipState) {
    section_heading(
        ui,
        "Projects",
        Accent::Blue,
        Some("Explore my latest projects showcasing expertise in AI/ML, full-stack development, and innovative solutions."),
    );

    let width = card_width(ui.available_width(), 3, GAP);
    wrapped_cards(ui, |ui| {
        for project in content::PROJECTS {
            if flip.is_flipped(project.title) {
                if card(ui, Accent::Blue, width, |ui| project_back(ui, project)).inner {
                    flip.toggle(project.title);
                }
            } else {
                let response = card(ui, Accent::Blue, width, |ui| project_front(ui, project)).response;
                if response.interact(egui::Sense::click()).clicked() {
                    flip.toggle(project.title);
                }
            }
        }
    });
}

fn skeleton(ui: &mut egui::Ui) {
    let color = ui.visuals().widgets.inactive.bg_fill;
    for fraction in [0.75, 0.5] {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width() * fraction, 14.0),
            egui::Sense::hover(),
        );
        ui.painter().rect_filled(rect, 4.0, color);
    }
    ui.add_space(8.0);
}

fn stat_row(ui: &mut egui::Ui, label: &str, value: String, accent: Accent) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(muted(ui)));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).strong().color(accent_color(accent)));
        });
    });
}

pub fn dsa(ui: &mut egui::Ui, loading: &Delay) {
    section_heading(
        ui,
        "DSA Achievements",
        Accent::Green,
        Some("Live statistics showcasing my journey in Data Structures and Algorithms across competitive programming platforms."),
    );

    let width = card_width(ui.available_width(), 4, GAP);
    wrapped_cards(ui, |ui| {
        for milestone in content::DSA_MILESTONES {
            card(ui, milestone.accent, width, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(milestone.value).size(32.0).strong().color(accent_color(milestone.accent)));
                    ui.label(egui::RichText::new(milestone.title).strong().color(strong(ui)));
                    ui.label(egui::RichText::new(milestone.description).small().color(muted(ui)));
                });
            });
        }
    });
    ui.add_space(GAP * 2.0);

    let width = card_width(ui.available_width(), 2, GAP);
    wrapped_cards(ui, |ui| {
        card(ui, Accent::Orange, width, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("LeetCode Statistics").size(20.0).strong().color(strong(ui)));
                badge(ui, "Live", Accent::Green);
            });
            ui.label(egui::RichText::new("Competitive programming performance on LeetCode").color(muted(ui)));
            ui.add_space(8.0);
            if !loading.is_done() {
                for _ in 0..3 {
                    skeleton(ui);
                }
                return;
            }
            let stats = &content::LEETCODE;
            stat_row(ui, "Total Solved", stats.total.to_string(), Accent::Orange);
            stat_row(ui, "Easy", stats.easy.to_string(), Accent::Green);
            stat_row(ui, "Medium", stats.medium.to_string(), Accent::Yellow);
            stat_row(ui, "Hard", stats.hard.to_string(), Accent::Pink);
            stat_row(ui, "Acceptance Rate", format!("{}%", stats.acceptance_rate), Accent::Blue);
            badge(ui, stats.ranking, Accent::Orange);
            ui.add_space(8.0);
            if ui.button("View LeetCode Profile").clicked() {
                follow_link(ui.ctx(), content::LEETCODE_PROFILE);
            }
        });

        card(ui, Accent::Green, width, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("GeeksforGeeks Statistics").size(20.0).strong().color(strong(ui)));
                badge(ui, "Live", Accent::Green);
            });
            ui.label(egui::RichText::new("Institute topper and consistent performer on GFG").color(muted(ui)));
            ui.add_space(8.0);
            if !loading.is_done() {
                for _ in 0..3 {
                    skeleton(ui);
                }
                return;
            }
            let stats = &content::GFG;
            stat_row(ui, "Total Solved", stats.total.to_string(), Accent::Green);
            stat_row(ui, "School / Basic", format!("{} / {}", stats.school, stats.basic), Accent::Cyan);
            stat_row(ui, "Easy", stats.easy.to_string(), Accent::Green);
            stat_row(ui, "Medium", stats.medium.to_string(), Accent::Yellow);
            stat_row(ui, "Hard", stats.hard.to_string(), Accent::Pink);
            ui.horizontal(|ui| {
                badge(ui, &format!("Institute Rank #{}", stats.institute_rank), Accent::Yellow);
                badge(ui, "Top Performer", Accent::Green);
                badge(ui, stats.overall_rank, Accent::Blue);
            });
            ui.add_space(8.0);
            if ui.button("View GFG Profile").clicked() {
                follow_link(ui.ctx(), content::GFG_PROFILE);
            }
        });
    });
    ui.add_space(GAP * 2.0);

    let full = ui.available_width();
    card(ui, Accent::Purple, full, |ui| {
        ui.label(egui::RichText::new("Recent Activity").size(20.0).strong().color(strong(ui)));
        ui.add_space(8.0);
        for activity in content::RECENT_ACTIVITY {
            ui.horizontal(|ui| {
                let (dot, _) = ui.allocate_exact_size(egui::vec2(8.0, 8.0), egui::Sense::hover());
                ui.painter().circle_filled(dot.center(), 4.0, accent_color(activity.accent));
                ui.label(egui::RichText::new(activity.text).color(strong(ui)));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(activity.when).small().color(muted(ui)));
                });
            });
        }
    });
}

/// Returns true when the visitor asked to jump to the contact section.
pub fn hackathons(ui: &mut egui::Ui) -> bool {
    section_heading(
        ui,
        "Hackathons & Events",
        Accent::Orange,
        Some("Showcasing participation in national-level hackathons, tech conferences, and community events that highlight my journey in technology and innovation."),
    );

    let width = card_width(ui.available_width(), 4, GAP);
    wrapped_cards(ui, |ui| {
        for stat in content::EVENT_STATS {
            card(ui, Accent::Orange, width, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(stat.value).size(28.0).strong().color(strong(ui)));
                    ui.label(egui::RichText::new(stat.label).color(muted(ui)));
                });
            });
        }
    });
    ui.add_space(GAP * 2.0);

    for event in content::EVENTS {
        let full = ui.available_width();
        card(ui, event.category.accent(), full, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(event.title).size(20.0).strong().color(strong(ui)));
                    ui.label(egui::RichText::new(event.organizer).color(accent_color(event.category.accent())));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    badge(ui, event.achievement, content::achievement_accent(event.achievement));
                });
            });
            ui.label(egui::RichText::new(event.description).color(muted(ui)));
            ui.horizontal_wrapped(|ui| {
                for tech in event.tech {
                    badge(ui, tech, Accent::Orange);
                }
            });
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(event.date).small().color(muted(ui)));
                ui.label(egui::RichText::new(event.location).small().color(muted(ui)));
                badge(ui, event.category.label(), event.category.accent());
            });
        });
        ui.add_space(GAP);
    }

    ui.add_space(GAP * 2.0);
    let mut get_in_touch = false;
    let full = ui.available_width();
    card(ui, Accent::Orange, full, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Ready to Collaborate?").size(24.0).strong().color(strong(ui)));
            ui.label(
                egui::RichText::new("I'm always excited to participate in hackathons, attend tech events, and collaborate on innovative projects.")
                    .color(accent_color(Accent::Orange)),
            );
            ui.add_space(12.0);
            get_in_touch = ui.button("Get In Touch").clicked();
        });
    });
    get_in_touch
}

pub fn open_source(ui: &mut egui::Ui) {
    section_heading(ui, "Open Source Contributions", Accent::Green, None);
    let width = card_width(ui.available_width(), 2, GAP);
    wrapped_cards(ui, |ui| {
        for contribution in content::CONTRIBUTIONS {
            card(ui, Accent::Green, width, |ui| {
                ui.label(egui::RichText::new(contribution.name).size(20.0).strong().color(strong(ui)));
                ui.label(egui::RichText::new(contribution.description).color(muted(ui)));
                ui.add_space(8.0);
                if ui.button("View Project").clicked() {
                    follow_link(ui.ctx(), contribution.link);
                }
            });
        }
    });
}

pub fn leadership(ui: &mut egui::Ui) {
    section_heading(ui, "Leadership & Experience", Accent::Purple, None);
    for entry in content::LEADERSHIP {
        let full = ui.available_width();
        card(ui, Accent::Purple, full, |ui| {
            ui.label(egui::RichText::new(entry.role).size(20.0).strong().color(strong(ui)));
            ui.label(egui::RichText::new(entry.organization).size(17.0).color(accent_color(Accent::Purple)));
            badge(ui, entry.period, Accent::Purple);
            ui.add_space(6.0);
            ui.label(egui::RichText::new(entry.description).color(muted(ui)));
        });
        ui.add_space(GAP);
    }
}

pub fn certifications(ui: &mut egui::Ui) {
    section_heading(ui, "Certifications", Accent::Blue, None);
    let width = card_width(ui.available_width(), 4, GAP);
    wrapped_cards(ui, |ui| {
        for cert in content::CERTIFICATIONS {
            card(ui, Accent::Blue, width, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(cert.name).size(18.0).strong().color(strong(ui)));
                    ui.label(egui::RichText::new(cert.issuer).color(accent_color(Accent::Blue)));
                    badge(ui, cert.year, Accent::Blue);
                });
            });
        }
    });
}

pub fn skills(ui: &mut egui::Ui) {
    section_heading(ui, "Skills", Accent::Orange, None);
    let width = card_width(ui.available_width(), 3, GAP);
    wrapped_cards(ui, |ui| {
        for group in content::SKILLS {
            card(ui, Accent::Orange, width, |ui| {
                ui.label(egui::RichText::new(group.category).size(18.0).strong().color(strong(ui)));
                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    for skill in group.skills {
                        badge(ui, skill, Accent::Orange);
                    }
                });
            });
        }
    });
}

pub fn achievements(ui: &mut egui::Ui) {
    section_heading(ui, "Achievements", Accent::Yellow, None);
    let width = card_width(ui.available_width(), 2, GAP);
    wrapped_cards(ui, |ui| {
        for achievement in content::ACHIEVEMENTS {
            card(ui, Accent::Yellow, width, |ui| {
                ui.label(egui::RichText::new(achievement.title).size(18.0).strong().color(strong(ui)));
                ui.label(egui::RichText::new(achievement.description).color(muted(ui)));
            });
        }
    });
}

pub fn contact(ui: &mut egui::Ui, form: &mut ContactForm) {
    section_heading(ui, "Get In Touch", Accent::Cyan, None);
    let width = card_width(ui.available_width(), 2, GAP * 3.0);

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(GAP * 3.0, GAP);

        ui.vertical(|ui| {
            ui.set_width(width);
            ui.label(egui::RichText::new("Let's Connect").size(24.0).strong().color(strong(ui)));
            ui.add_space(12.0);
            ui.label(egui::RichText::new(content::EMAIL).color(accent_color(Accent::Cyan)));
            ui.label(egui::RichText::new(content::PHONE).color(accent_color(Accent::Purple)));
            for link in content::CONTACT_LINKS {
                let text = egui::RichText::new(link.label).color(accent_color(link.accent));
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    follow_link(ui.ctx(), link.url);
                }
            }
        });

        card(ui, Accent::Cyan, width, |ui| {
            ui.label(egui::RichText::new("Send a Message").size(20.0).strong().color(strong(ui)));
            ui.label(egui::RichText::new("I'd love to hear from you!").color(muted(ui)));
            ui.add_space(8.0);

            ui.label("Name");
            ui.add(egui::TextEdit::singleline(&mut form.name).hint_text("Your Name").desired_width(f32::INFINITY));
            ui.label("Email");
            ui.add(egui::TextEdit::singleline(&mut form.email).hint_text("your@email.com").desired_width(f32::INFINITY));
            ui.label("Message");
            ui.add(
                egui::TextEdit::multiline(&mut form.message)
                    .hint_text("Your message...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);
            if ui.add_sized([ui.available_width(), 32.0], egui::Button::new("Send Message")).clicked() {
                form.submit();
            }
        });
    });
}

pub fn footer(ui: &mut egui::Ui) {
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(format!("© 2024 {}. All rights reserved.", content::NAME));
        ui.label(
            egui::RichText::new("Built with Rust, Bevy and egui")
                .small()
                .color(muted(ui)),
        );
        ui.add_space(16.0);
    });
}
