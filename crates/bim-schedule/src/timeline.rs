//! 4D timeline scrubber: slider position plus play/pause.

use crate::config::TimelineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineState {
    position: u8,
    playing: bool,
    step: u8,
}

impl TimelineState {
    pub const MAX: u8 = 100;

    pub fn new(config: &TimelineConfig) -> Self {
        Self {
            position: config.initial_position.min(Self::MAX),
            playing: false,
            step: config.step_percent,
        }
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Position as a fraction of the timeline
    pub fn fraction(&self) -> f64 {
        f64::from(self.position) / f64::from(Self::MAX)
    }

    pub fn set_position(&mut self, position: u8) {
        self.position = position.min(Self::MAX);
    }

    pub fn step_back(&mut self) {
        self.position = self.position.saturating_sub(self.step);
    }

    pub fn step_forward(&mut self) {
        self.position = self.position.saturating_add(self.step).min(Self::MAX);
    }

    /// Starting playback at the end rewinds to the beginning
    pub fn toggle_play(&mut self) -> bool {
        if !self.playing && self.position == Self::MAX {
            self.position = 0;
        }
        self.playing = !self.playing;
        self.playing
    }

    /// Advances one step while playing; returns whether playback continues
    pub fn tick(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.position = self.position.saturating_add(1).min(Self::MAX);
        if self.position == Self::MAX {
            self.playing = false;
        }
        self.playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_at(position: u8) -> TimelineState {
        TimelineState::new(&TimelineConfig {
            initial_position: position,
            ..TimelineConfig::default()
        })
    }

    #[test]
    fn test_steps_clamp() {
        let mut state = state_at(95);
        state.step_forward();
        assert_eq!(state.position(), 100);

        let mut state = state_at(5);
        state.step_back();
        assert_eq!(state.position(), 0);

        state.set_position(250);
        assert_eq!(state.position(), 100);
        assert_eq!(state.fraction(), 1.0);
    }

    #[test]
    fn test_play_runs_to_end_and_stops() {
        let mut state = state_at(98);
        assert!(!state.tick());
        assert!(state.toggle_play());
        assert!(state.tick());
        assert!(!state.tick());
        assert_eq!(state.position(), 100);
        assert!(!state.is_playing());

        assert!(state.toggle_play());
        assert_eq!(state.position(), 0);
        assert!(!state.toggle_play());
    }
}
