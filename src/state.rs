use bevy::prelude::*;
use std::time::Duration;

#[derive(Resource)]
pub struct BackgroundSettings {
    pub particle_count: usize,
    pub line_count: usize,
    pub link_distance: f32,
    pub neural_lines_enabled: bool,
    pub rebuild_requested: bool,
    pub show_controls: bool,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            // Connections are checked pairwise every frame, keep this small
            particle_count: 40,
            line_count: 15,
            link_distance: 120.0,
            neural_lines_enabled: true,
            rebuild_requested: true,
            show_controls: false,
        }
    }
}

#[derive(Resource)]
pub struct PageTheme {
    pub dark: bool,
}

impl Default for PageTheme {
    fn default() -> Self {
        Self { dark: true }
    }
}

impl PageTheme {
    pub fn clear_color(&self) -> Color {
        if self.dark {
            // gray-900
            Color::srgb_u8(17, 24, 39)
        } else {
            // gray-50
            Color::srgb_u8(249, 250, 251)
        }
    }
}

/// One-shot delay measured in frame time.
#[derive(Debug, Clone, Copy)]
pub struct Delay {
    elapsed: Duration,
    duration: Duration,
}

impl Delay {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// How far into `span` we are once the delay has run out, in `[0, 1]`.
    pub fn progress_after(&self, span: Duration) -> f32 {
        let Some(over) = self.elapsed.checked_sub(self.duration) else {
            return 0.0;
        };
        if span.is_zero() {
            return 1.0;
        }
        (over.as_secs_f32() / span.as_secs_f32()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_finishes_once_duration_elapsed() {
        let mut delay = Delay::new(Duration::from_millis(300));
        delay.tick(Duration::from_millis(200));
        assert!(!delay.is_done());
        delay.tick(Duration::from_millis(100));
        assert!(delay.is_done());
    }

    #[test]
    fn fade_progress_starts_when_delay_ends() {
        let mut delay = Delay::new(Duration::from_millis(300));
        delay.tick(Duration::from_millis(100));
        assert_eq!(delay.progress_after(Duration::from_secs(1)), 0.0);
        delay.tick(Duration::from_millis(700));
        let progress = delay.progress_after(Duration::from_secs(1));
        assert!((progress - 0.5).abs() < 1e-4);
        delay.tick(Duration::from_secs(5));
        assert_eq!(delay.progress_after(Duration::from_secs(1)), 1.0);
    }

    #[test]
    fn default_background_is_small() {
        let settings = BackgroundSettings::default();
        assert_eq!(settings.particle_count, 40);
        assert_eq!(settings.line_count, 15);
        assert!(settings.rebuild_requested);
    }
}
