use crate::content::Accent;
use bevy_egui::egui;

/// Which card, if any, is showing its back face.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlipState {
    flipped: Option<&'static str>,
}

impl FlipState {
    pub fn is_flipped(&self, id: &str) -> bool {
        self.flipped == Some(id)
    }

    /// Flip `id`, turning any other card back. Toggling the flipped card un-flips it.
    pub fn toggle(&mut self, id: &'static str) {
        self.flipped = if self.is_flipped(id) { None } else { Some(id) };
    }
}

pub fn accent_color(accent: Accent) -> egui::Color32 {
    match accent {
        Accent::Cyan => egui::Color32::from_rgb(34, 211, 238),
        Accent::Purple => egui::Color32::from_rgb(192, 132, 252),
        Accent::Pink => egui::Color32::from_rgb(244, 114, 182),
        Accent::Green => egui::Color32::from_rgb(74, 222, 128),
        Accent::Orange => egui::Color32::from_rgb(251, 146, 60),
        Accent::Yellow => egui::Color32::from_rgb(250, 204, 21),
        Accent::Blue => egui::Color32::from_rgb(96, 165, 250),
    }
}

/// Translucent card with an accent border that lights up on hover.
pub fn card<R>(
    ui: &mut egui::Ui,
    accent: Accent,
    width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let fill = if ui.visuals().dark_mode {
        egui::Color32::from_rgba_unmultiplied(31, 41, 55, 128)
    } else {
        egui::Color32::from_rgba_unmultiplied(255, 255, 255, 200)
    };
    let mut prepared = egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(55, 65, 81)))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16))
        .begin(ui);

    // margins and stroke on both sides
    let content_width = (width - 34.0).max(0.0);
    let inner = prepared
        .content_ui
        .vertical(|ui| {
            ui.set_width(content_width);
            add_contents(ui)
        })
        .inner;

    if ui.rect_contains_pointer(prepared.content_ui.min_rect()) {
        prepared.frame.stroke = egui::Stroke::new(1.0, accent_color(accent));
    }
    let response = prepared.end(ui);
    egui::InnerResponse::new(inner, response)
}

/// Card width that fits `columns` cards per row, fewer on narrow screens.
pub fn card_width(available: f32, columns: usize, spacing: f32) -> f32 {
    let fit = ((available + spacing) / (280.0 + spacing)).floor().max(1.0) as usize;
    let columns = columns.clamp(1, fit.max(1));
    (available - spacing * (columns - 1) as f32) / columns as f32
}

pub fn badge(ui: &mut egui::Ui, text: &str, accent: Accent) {
    let color = accent_color(accent);
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.6)))
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color));
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn clicking_another_card_replaces_the_flip() {
        let mut flip = FlipState::default();
        flip.toggle("A");
        flip.toggle("B");
        assert_eq!(flip.flipped, Some("B"));
        assert!(!flip.is_flipped("A"));
        assert!(!flip.is_flipped("C"));
    }

    #[test]
    fn clicking_the_flipped_card_unflips_it() {
        let mut flip = FlipState::default();
        flip.toggle("A");
        flip.toggle("B");
        flip.toggle("B");
        assert_eq!(flip.flipped, None);
    }

    #[test]
    fn cards_wrap_on_narrow_screens() {
        assert_eq!(card_width(900.0, 3, 0.0), 300.0);
        assert_eq!(card_width(600.0, 3, 0.0), 300.0);
        assert_eq!(card_width(200.0, 3, 16.0), 200.0);
        assert_eq!(card_width(1000.0, 2, 20.0), 490.0);
    }

    #[test]
    fn at_most_one_project_is_flipped() {
        let mut flip = FlipState::default();
        for project in PROJECTS.iter().chain(PROJECTS.iter().rev()) {
            flip.toggle(project.title);
            let flipped = PROJECTS.iter().filter(|p| flip.is_flipped(p.title)).count();
            assert!(flipped <= 1);
        }
    }
}
