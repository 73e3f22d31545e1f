use bevy::prelude::*;

/// Distance below the top of the viewport where the active section is read.
pub const SPY_OFFSET: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Projects,
    DsaAchievements,
    HackathonsEvents,
    OpenSource,
    Leadership,
    Certifications,
    Skills,
    Achievements,
    Contact,
}

impl Section {
    /// Page order; the spy scans in this order.
    pub const ALL: [Section; 11] = [
        Section::Hero,
        Section::About,
        Section::Projects,
        Section::DsaAchievements,
        Section::HackathonsEvents,
        Section::OpenSource,
        Section::Leadership,
        Section::Certifications,
        Section::Skills,
        Section::Achievements,
        Section::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const NAV: [Section; 6] = [
        Section::About,
        Section::Projects,
        Section::DsaAchievements,
        Section::HackathonsEvents,
        Section::Skills,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Projects => "projects",
            Section::DsaAchievements => "dsa-achievements",
            Section::HackathonsEvents => "hackathons-events",
            Section::OpenSource => "opensource",
            Section::Leadership => "leadership",
            Section::Certifications => "certifications",
            Section::Skills => "skills",
            Section::Achievements => "achievements",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::DsaAchievements => "DSA",
            Section::HackathonsEvents => "Hackathons",
            Section::OpenSource => "Open Source",
            Section::Leadership => "Leadership",
            Section::Certifications => "Certifications",
            Section::Skills => "Skills",
            Section::Achievements => "Achievements",
            Section::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Vertical extent of a section in page coordinates, half-open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

pub trait SectionLayout {
    fn span(&self, section: Section) -> Option<SectionSpan>;
}

/// Spans measured from the last rendered frame.
#[derive(Debug, Clone, Default)]
pub struct SectionSpans {
    spans: [Option<SectionSpan>; Section::ALL.len()],
}

impl SectionSpans {
    pub fn record(&mut self, section: Section, span: SectionSpan) {
        self.spans[section.index()] = Some(span);
    }
}

impl SectionLayout for SectionSpans {
    fn span(&self, section: Section) -> Option<SectionSpan> {
        self.spans[section.index()]
    }
}

impl SectionLayout for [(Section, SectionSpan)] {
    fn span(&self, section: Section) -> Option<SectionSpan> {
        self.iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, span)| *span)
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    active: Section,
    spy_offset: f32,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self {
            active: Section::Hero,
            spy_offset: SPY_OFFSET,
        }
    }
}

impl ScrollSpy {
    pub fn active(&self) -> Section {
        self.active
    }

    /// First section containing the spy line wins. With no match the
    /// previous section stays active.
    pub fn on_scroll(&mut self, scroll_y: f32, layout: &(impl SectionLayout + ?Sized)) -> Section {
        let line = scroll_y + self.spy_offset;
        for section in Section::ALL {
            let Some(span) = layout.span(section) else {
                continue;
            };
            if span.contains(line) {
                if section != self.active {
                    debug!("Active section: {}", section.anchor());
                }
                self.active = section;
                break;
            }
        }
        self.active
    }
}

/// Hero lift and fade for a given scroll offset.
pub fn hero_parallax(scroll_y: f32) -> (f32, f32) {
    let lift = (scroll_y / 500.0).clamp(0.0, 1.0) * -100.0;
    let opacity = 1.0 - (scroll_y / 300.0).clamp(0.0, 1.0);
    (lift, opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(top: f32, height: f32) -> SectionSpan {
        SectionSpan { top, height }
    }

    #[test]
    fn spy_line_selects_following_section() {
        let layout = [
            (Section::Hero, span(0.0, 600.0)),
            (Section::About, span(600.0, 600.0)),
        ];
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.on_scroll(550.0, &layout[..]), Section::About);
        assert_eq!(spy.on_scroll(10.0, &layout[..]), Section::Hero);
    }

    #[test]
    fn spans_are_half_open() {
        let layout = [
            (Section::Hero, span(0.0, 100.0)),
            (Section::About, span(100.0, 100.0)),
        ];
        let mut spy = ScrollSpy::default();
        // 0 + 100 sits on About's top edge and outside Hero's bottom edge
        assert_eq!(spy.on_scroll(0.0, &layout[..]), Section::About);
    }

    #[test]
    fn first_match_wins_when_sections_overlap() {
        let layout = [
            (Section::Projects, span(0.0, 500.0)),
            (Section::About, span(200.0, 500.0)),
        ];
        let mut spy = ScrollSpy::default();
        // About precedes Projects in page order
        assert_eq!(spy.on_scroll(250.0, &layout[..]), Section::About);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let layout = [
            (Section::Hero, span(0.0, 600.0)),
            (Section::About, span(600.0, 600.0)),
        ];
        let mut spy = ScrollSpy::default();
        spy.on_scroll(700.0, &layout[..]);
        assert_eq!(spy.active(), Section::About);
        assert_eq!(spy.on_scroll(5_000.0, &layout[..]), Section::About);
        assert_eq!(spy.on_scroll(-500.0, &layout[..]), Section::About);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut spans = SectionSpans::default();
        spans.record(Section::Contact, span(2_000.0, 400.0));
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.on_scroll(0.0, &spans), Section::Hero);
        assert_eq!(spy.on_scroll(2_000.0, &spans), Section::Contact);
    }

    #[test]
    fn nav_sections_have_distinct_anchors() {
        for (i, a) in Section::NAV.iter().enumerate() {
            for b in &Section::NAV[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }

    #[test]
    fn parallax_is_clamped() {
        assert_eq!(hero_parallax(0.0), (0.0, 1.0));
        assert_eq!(hero_parallax(250.0).0, -50.0);
        assert_eq!(hero_parallax(300.0).1, 0.0);
        assert_eq!(hero_parallax(10_000.0), (-100.0, 0.0));
        assert_eq!(hero_parallax(-50.0), (0.0, 1.0));
    }
}
