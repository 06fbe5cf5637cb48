//! One-shot decorative loading sequence.
//!
//! The sequence runs once when the plugin starts:
//!
//! ```text
//! Idle ─start─▶ Fetching ─sample ok─▶ Displaying ─dwell─▶ FadingOut ─fade─▶ Done
//!                  │                       │                                 ▲
//!                  └──── fetch failed ─────┼──────────── abort ──────────────┘
//!                                          └─ manual load: skip to FadingOut
//! ```
//!
//! Host timers cannot be cancelled once armed. When the user skips ahead, the
//! pending dwell timer is remembered as cancelled and its event is discarded
//! when it eventually fires, so only the timer armed last can advance the
//! sequence.

use crate::app::Action;
use crate::domain::EmojiRecord;
use crate::source::FetchPurpose;

/// Maximum number of records arranged around the spinner.
pub const SPINNER_SLOTS: usize = 6;

/// Tolerance when matching a fired timer to the one that was armed.
const TIMER_EPSILON: f64 = 1e-3;

/// Fixed delays of the sequence, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerTiming {
    /// How long the sample stays on screen before fading.
    pub dwell_secs: f64,
    /// How long the fade lasts before the catalog takes over.
    pub fade_secs: f64,
}

impl Default for SpinnerTiming {
    fn default() -> Self {
        Self {
            dwell_secs: 3.0,
            fade_secs: 1.0,
        }
    }
}

/// Phase of the loading sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingPhase {
    /// Not started yet.
    Idle,
    /// Waiting for the sample fetch.
    Fetching,
    /// Showing the sample around the spinner.
    Displaying,
    /// Sample is fading out.
    FadingOut,
    /// Finished or aborted; the normal surface is visible.
    Done,
}

/// Outcome of a manual "Load Catalog" request while the sequence may be running.
#[derive(Debug, Clone, PartialEq)]
pub enum Skip {
    /// The sequence is not running; load normally.
    Inactive,
    /// The sample fetch was still pending; the sequence was abandoned and the
    /// caller should load normally.
    Aborted,
    /// The dwell was cut short; run these actions and let the fade finish.
    Fading(Vec<Action>),
    /// Already fading; the handoff load is already scheduled.
    Pending,
}

/// State of the decorative loading sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadingSequence {
    phase: LoadingPhase,
    sample: Vec<EmojiRecord>,
    timing: SpinnerTiming,
    armed: Option<f64>,
    cancelled: Vec<f64>,
}

impl LoadingSequence {
    #[must_use]
    pub const fn new(timing: SpinnerTiming) -> Self {
        Self {
            phase: LoadingPhase::Idle,
            sample: Vec::new(),
            timing,
            armed: None,
            cancelled: Vec::new(),
        }
    }

    /// A sequence that has already finished, for when the spinner is disabled.
    #[must_use]
    pub fn finished(timing: SpinnerTiming) -> Self {
        Self {
            phase: LoadingPhase::Done,
            ..Self::new(timing)
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &LoadingPhase {
        &self.phase
    }

    /// Records arranged around the spinner (empty outside the display phases).
    #[must_use]
    pub fn sample(&self) -> &[EmojiRecord] {
        &self.sample
    }

    /// Returns `true` while the sequence hides the normal surface.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(
            self.phase,
            LoadingPhase::Fetching | LoadingPhase::Displaying | LoadingPhase::FadingOut
        )
    }

    /// `Idle → Fetching`: requests the sample.
    pub fn start(&mut self) -> Vec<Action> {
        if self.phase != LoadingPhase::Idle {
            return vec![];
        }
        self.enter(LoadingPhase::Fetching);
        vec![Action::Fetch {
            purpose: FetchPurpose::Spinner,
        }]
    }

    /// `Fetching → Displaying`: arranges up to six records and arms the dwell.
    ///
    /// An empty sample has nothing to show and finishes the sequence at once.
    /// Samples arriving after the sequence was abandoned are ignored.
    pub fn show_sample(&mut self, records: &[EmojiRecord]) -> Vec<Action> {
        if self.phase != LoadingPhase::Fetching {
            tracing::debug!(phase = ?self.phase, "ignoring late spinner sample");
            return vec![];
        }

        if records.is_empty() {
            return self.finish();
        }

        self.sample = records.iter().take(SPINNER_SLOTS).cloned().collect();
        self.enter(LoadingPhase::Displaying);
        vec![self.arm(self.timing.dwell_secs)]
    }

    /// Ends the sequence without a decorative display (sample fetch failed).
    pub fn abort(&mut self) {
        if self.phase == LoadingPhase::Fetching {
            self.enter(LoadingPhase::Done);
        }
    }

    /// Handles a fired host timer.
    pub fn on_timer(&mut self, secs: f64) -> Vec<Action> {
        if let Some(index) = self
            .cancelled
            .iter()
            .position(|&c| (c - secs).abs() < TIMER_EPSILON)
        {
            self.cancelled.swap_remove(index);
            tracing::debug!(secs, "discarding cancelled timer");
            return vec![];
        }

        match self.armed {
            Some(armed) if (armed - secs).abs() < TIMER_EPSILON => self.armed = None,
            _ => {
                tracing::debug!(secs, armed = ?self.armed, "ignoring unexpected timer");
                return vec![];
            }
        }

        match self.phase {
            LoadingPhase::Displaying => self.begin_fade(),
            LoadingPhase::FadingOut => self.finish(),
            _ => vec![],
        }
    }

    /// Cancel-and-skip for a manual load request.
    pub fn skip(&mut self) -> Skip {
        match self.phase {
            LoadingPhase::Idle | LoadingPhase::Done => Skip::Inactive,
            LoadingPhase::Fetching => {
                self.enter(LoadingPhase::Done);
                Skip::Aborted
            }
            LoadingPhase::Displaying => {
                if let Some(pending) = self.armed.take() {
                    self.cancelled.push(pending);
                }
                Skip::Fading(self.begin_fade())
            }
            LoadingPhase::FadingOut => Skip::Pending,
        }
    }

    fn begin_fade(&mut self) -> Vec<Action> {
        self.enter(LoadingPhase::FadingOut);
        vec![self.arm(self.timing.fade_secs)]
    }

    /// `FadingOut → Done`: removes the sample and hands off to the catalog load.
    fn finish(&mut self) -> Vec<Action> {
        self.sample.clear();
        self.enter(LoadingPhase::Done);
        vec![Action::Fetch {
            purpose: FetchPurpose::Catalog,
        }]
    }

    fn arm(&mut self, secs: f64) -> Action {
        self.armed = Some(secs);
        Action::SetTimeout { secs }
    }

    fn enter(&mut self, phase: LoadingPhase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "loading sequence transition");
        if phase == LoadingPhase::Done {
            self.sample.clear();
            self.armed = None;
        }
        self.phase = phase;
    }
}

/// Angles, in degrees, of `count` slots spaced evenly around a circle.
///
/// Slot `i` sits at `360 / count * i`, starting at the top and running
/// clockwise.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn slot_angles(count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![];
    }
    let step = 360.0 / count as f64;
    (0..count).map(|i| step * i as f64).collect()
}
