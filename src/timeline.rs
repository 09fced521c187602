//! Animation timing: maps a frame index and the clip's total frame count to
//! the set of active overlay phases, and to a fade parameter within a phase.
//!
//! Windows are fixed fractions of the clip duration, so the same timing works
//! for any frame rate or clip length. Frame indices are 1-based: the driver
//! increments its counter before processing, matching the source system.

use crate::layout::TemplateKind;

/// A named overlay phase. Draw order is fixed: scoreboard first, then intro,
/// then action, so later phases layer on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Persistent score strip, active for the whole clip.
    Scoreboard,
    /// Team-vs-team reveal near the start of the clip.
    Intro,
    /// Event icon and message callout mid-clip.
    Action,
}

/// Intro window as fractions of the clip duration.
pub const INTRO_WINDOW: PhaseWindow = PhaseWindow { start: 0.025, end: 0.125, fade: 0.10 };
/// Action popup window as fractions of the clip duration.
pub const ACTION_WINDOW: PhaseWindow = PhaseWindow { start: 0.30, end: 0.60, fade: 0.10 };

/// A time window expressed as fractions of total clip duration, with a fade
/// span (fraction of the window length) ramping in at the start and out at
/// the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWindow {
    pub start: f64,
    pub end: f64,
    pub fade: f64,
}

impl PhaseWindow {
    /// Whether `frame` (1-based) falls inside the window for a clip of
    /// `duration` frames. Strict on both boundaries; membership is a step
    /// function of the frame index with one rising and one falling edge.
    pub fn contains(&self, frame: u64, duration: u64) -> bool {
        let i = frame as f64;
        let d = duration as f64;
        i > self.start * d && i < self.end * d
    }

    /// Position of `frame` inside the window, 0 at the opening edge and 1 at
    /// the closing edge. `None` outside the window.
    pub fn progress(&self, frame: u64, duration: u64) -> Option<f64> {
        if !self.contains(frame, duration) {
            return None;
        }
        let d = duration as f64;
        let start = self.start * d;
        let end = self.end * d;
        Some(((frame as f64 - start) / (end - start)).clamp(0.0, 1.0))
    }

    /// Reveal alpha for `frame`: a linear ramp over the first and last `fade`
    /// fraction of the window, 1.0 through the hold span, 0.0 outside.
    ///
    /// The hold behavior (overlay fully revealed for the whole window) is the
    /// contract; the ramp only drives optional reveal effects, and tuning
    /// `fade` never touches geometry.
    pub fn fade_alpha(&self, frame: u64, duration: u64) -> f64 {
        match self.progress(frame, duration) {
            None => 0.0,
            Some(_) if self.fade <= 0.0 => 1.0,
            Some(p) => {
                if p < self.fade {
                    p / self.fade
                } else if p > 1.0 - self.fade {
                    (1.0 - p) / self.fade
                } else {
                    1.0
                }
            }
        }
    }
}

/// The set of phases active on one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActivePhases {
    pub scoreboard: bool,
    pub intro: bool,
    pub action: bool,
}

impl ActivePhases {
    pub fn contains(&self, phase: Phase) -> bool {
        match phase {
            Phase::Scoreboard => self.scoreboard,
            Phase::Intro => self.intro,
            Phase::Action => self.action,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.scoreboard || self.intro || self.action)
    }
}

/// Classify a frame into its active phases.
///
/// The scoreboard persists across the whole clip in both template families;
/// the intro reveal is a rectangle-template feature (the diamond family draws
/// its intro inside the same windows but with its own geometry, so the window
/// set is shared).
pub fn classify_frame(frame: u64, duration: u64, _kind: TemplateKind) -> ActivePhases {
    let in_clip = frame >= 1 && frame <= duration;
    ActivePhases {
        scoreboard: in_clip,
        intro: in_clip && INTRO_WINDOW.contains(frame, duration),
        action: in_clip && ACTION_WINDOW.contains(frame, duration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TemplateKind;

    const D: u64 = 100;

    fn phases(i: u64) -> ActivePhases {
        classify_frame(i, D, TemplateKind::Rectangle)
    }

    #[test]
    fn test_scoreboard_spans_whole_clip() {
        assert!(phases(0).is_empty());
        assert!(phases(1).scoreboard);
        assert!(phases(100).scoreboard);
        assert!(phases(101).is_empty());
    }

    #[test]
    fn test_intro_window_frames_3_to_12() {
        assert!(!phases(2).intro);
        assert!(phases(3).intro);
        assert!(phases(12).intro);
        assert!(!phases(13).intro);
    }

    #[test]
    fn test_action_window_frames_31_to_59() {
        assert!(!phases(30).action);
        assert!(phases(31).action);
        assert!(phases(59).action);
        assert!(!phases(60).action);
    }

    #[test]
    fn test_phases_can_overlap() {
        let p = phases(35);
        assert!(p.scoreboard && p.action && !p.intro);
        let p = phases(5);
        assert!(p.scoreboard && p.intro && !p.action);
    }

    #[test]
    fn test_window_membership_is_step_function() {
        for window in [INTRO_WINDOW, ACTION_WINDOW] {
            let mut edges = 0;
            let mut prev = window.contains(0, D);
            for i in 1..=D + 1 {
                let cur = window.contains(i, D);
                if cur != prev {
                    edges += 1;
                }
                prev = cur;
            }
            assert_eq!(edges, 2, "one rising and one falling edge per window");
        }
    }

    #[test]
    fn test_fade_alpha_ramps_and_holds() {
        let w = PhaseWindow { start: 0.0, end: 1.0, fade: 0.10 };
        // Frame 50 of 100 sits mid-window: fully revealed.
        assert_eq!(w.fade_alpha(50, 100), 1.0);
        // Inside the leading ramp the alpha is strictly between 0 and 1.
        let leading = w.fade_alpha(5, 100);
        assert!(leading > 0.0 && leading < 1.0);
        // Outside the window there is nothing to reveal.
        assert_eq!(INTRO_WINDOW.fade_alpha(50, 100), 0.0);
    }

    #[test]
    fn test_fade_alpha_symmetric() {
        let w = PhaseWindow { start: 0.0, end: 1.0, fade: 0.10 };
        let a = w.fade_alpha(5, 100);
        let b = w.fade_alpha(95, 100);
        assert!((a - b).abs() < 1e-9);
    }
}
