//! Hero role cycler.
//!
//! The cycler types a role one character at a time, holds it, deletes it and
//! moves on to the next role. It is driven purely by elapsed frame time so it
//! can be stepped deterministically.

use crate::content::Role;
use crate::state::Delay;
use bevy::prelude::*;
use std::time::Duration;

const HEADING_DELAY: Duration = Duration::from_millis(500);
pub const HEADING_FADE: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Paused,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_interval: Duration,
    pub pause: Duration,
    pub delete_interval: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_interval: Duration::from_millis(80),
            pause: Duration::from_millis(2500),
            delete_interval: Duration::from_millis(40),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: &'static [Role],
    timing: TypewriterTiming,
    role_index: usize,
    shown_chars: usize,
    phase: Phase,
    elapsed: Duration,
}

impl Typewriter {
    pub fn new(roles: &'static [Role], timing: TypewriterTiming) -> Self {
        Self {
            roles,
            timing,
            role_index: 0,
            shown_chars: 0,
            phase: Phase::Typing,
            elapsed: Duration::ZERO,
        }
    }

    pub fn role(&self) -> Option<&'static Role> {
        self.roles.get(self.role_index)
    }

    /// The currently displayed prefix of the active role.
    pub fn text(&self) -> &'static str {
        let Some(role) = self.role() else {
            return "";
        };
        match role.text.char_indices().nth(self.shown_chars) {
            Some((end, _)) => &role.text[..end],
            None => role.text,
        }
    }

    fn interval(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.timing.type_interval,
            Phase::Paused => self.timing.pause,
            Phase::Deleting => self.timing.delete_interval,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        if self.roles.is_empty() {
            return;
        }
        self.elapsed += dt;
        loop {
            let interval = self.interval();
            if interval.is_zero() || self.elapsed < interval {
                break;
            }
            self.elapsed -= interval;
            self.advance();
        }
    }

    fn advance(&mut self) {
        let role_len = self.role().map_or(0, |role| role.text.chars().count());
        match self.phase {
            Phase::Typing => {
                if self.shown_chars < role_len {
                    self.shown_chars += 1;
                }
                if self.shown_chars >= role_len {
                    self.phase = Phase::Paused;
                }
            }
            Phase::Paused => self.phase = Phase::Deleting,
            Phase::Deleting => {
                self.shown_chars = self.shown_chars.saturating_sub(1);
                if self.shown_chars == 0 {
                    self.role_index = (self.role_index + 1) % self.roles.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}

#[derive(Resource)]
pub struct HeroState {
    pub typewriter: Typewriter,
    pub heading: Delay,
}

impl Default for HeroState {
    fn default() -> Self {
        Self {
            typewriter: Typewriter::new(crate::content::ROLES, TypewriterTiming::default()),
            heading: Delay::new(HEADING_DELAY),
        }
    }
}

pub fn hero_tick_system(time: Res<Time>, mut hero: ResMut<HeroState>) {
    let dt = time.delta();
    hero.typewriter.tick(dt);
    hero.heading.tick(dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Accent, ROLES};

    static ACCENTED: [Role; 2] = [
        Role {
            text: "Café",
            color: Accent::Cyan,
        },
        Role {
            text: "SDE",
            color: Accent::Pink,
        },
    ];

    fn step(writer: &mut Typewriter, times: usize) {
        for _ in 0..times {
            let interval = writer.interval();
            writer.tick(interval);
        }
    }

    #[test]
    fn types_one_character_per_interval() {
        let mut writer = Typewriter::new(ROLES, TypewriterTiming::default());
        assert_eq!(writer.text(), "");
        writer.tick(Duration::from_millis(80));
        assert_eq!(writer.text(), "A");
        writer.tick(Duration::from_millis(79));
        assert_eq!(writer.text(), "A");
        writer.tick(Duration::from_millis(1));
        assert_eq!(writer.text(), "AI");
    }

    #[test]
    fn every_role_is_typed_paused_and_deleted_in_order() {
        let mut writer = Typewriter::new(ROLES, TypewriterTiming::default());
        for i in 0..ROLES.len() * 2 {
            let index = i % ROLES.len();
            let len = ROLES[index].text.chars().count();
            assert_eq!(writer.role_index, index);
            assert_eq!(writer.phase, Phase::Typing);

            step(&mut writer, len);
            assert_eq!(writer.text(), ROLES[index].text);
            assert_eq!(writer.phase, Phase::Paused);

            step(&mut writer, 1);
            assert_eq!(writer.phase, Phase::Deleting);

            step(&mut writer, len);
            assert_eq!(writer.text(), "");
            assert_eq!(writer.role_index, (index + 1) % ROLES.len());
        }
    }

    #[test]
    fn pause_holds_the_full_role() {
        let mut writer = Typewriter::new(ROLES, TypewriterTiming::default());
        step(&mut writer, ROLES[0].text.len());
        writer.tick(Duration::from_millis(2499));
        assert_eq!(writer.phase, Phase::Paused);
        assert_eq!(writer.text(), ROLES[0].text);
        writer.tick(Duration::from_millis(1));
        assert_eq!(writer.phase, Phase::Deleting);
    }

    #[test]
    fn large_frame_catches_up() {
        let mut writer = Typewriter::new(ROLES, TypewriterTiming::default());
        writer.tick(Duration::from_millis(80 * 5));
        assert_eq!(writer.text(), "AI/ML");
    }

    #[test]
    fn multibyte_roles_are_sliced_on_char_boundaries() {
        let mut writer = Typewriter::new(&ACCENTED, TypewriterTiming::default());
        step(&mut writer, 3);
        assert_eq!(writer.text(), "Caf");
        step(&mut writer, 1);
        assert_eq!(writer.text(), "Café");
        step(&mut writer, 1 + 4);
        assert_eq!(writer.role_index, 1);
    }

    #[test]
    fn empty_role_list_stays_blank() {
        let mut writer = Typewriter::new(&[], TypewriterTiming::default());
        writer.tick(Duration::from_secs(10));
        assert_eq!(writer.text(), "");
        assert!(writer.role().is_none());
    }

    #[test]
    fn heading_reveals_after_delay() {
        let mut hero = HeroState::default();
        hero.heading.tick(Duration::from_millis(499));
        assert!(!hero.heading.is_done());
        hero.heading.tick(Duration::from_millis(1));
        assert!(hero.heading.is_done());
        assert_eq!(hero.heading.progress_after(HEADING_FADE), 0.0);
        hero.heading.tick(HEADING_FADE);
        assert_eq!(hero.heading.progress_after(HEADING_FADE), 1.0);
    }
}
