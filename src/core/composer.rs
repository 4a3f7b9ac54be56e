use crate::core::config::SiteConfig;
use crate::core::constants::*;
use crate::core::effect::MotionPolicy;
use crate::core::preference::PreferenceStore;
use crate::core::scheduler::{Scheduler, TimerHandle};
use crate::core::theme::SiteTheme;

/// One-shot or repeating UI transitions driven by the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    ProgressTick,
    LoadingDone,
    RevealText,
    RevealSubtitle,
    FadeHint,
    GlowOff,
}

/// Observable UI flags. Every flag only ever moves one way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub progress: u32,
    pub text_visible: bool,
    pub subtitle_visible: bool,
    pub hint_opacity: f32,
    pub has_interacted: bool,
    pub show_glow: bool,
    pub is_touch: bool,
    pub reduce_motion: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            loading: true,
            progress: 0,
            text_visible: false,
            subtitle_visible: false,
            hint_opacity: HINT_OPACITY_FULL,
            has_interacted: false,
            show_glow: true,
            is_touch: false,
            reduce_motion: false,
        }
    }
}

/// Page-level state machine: loading screen, text reveals, rotate hint and
/// the reduced-motion preference.
pub struct SceneComposer<S: PreferenceStore> {
    config: SiteConfig,
    theme: SiteTheme,
    store: S,
    timeline: Scheduler<UiEvent>,
    progress_timer: Option<TimerHandle>,
    started: bool,
    torn_down: bool,
    state: UiState,
}

impl<S: PreferenceStore> SceneComposer<S> {
    pub fn new(config: SiteConfig, store: S) -> Self {
        let reduce_motion = store.load();
        Self {
            theme: config.variant.theme(),
            config,
            store,
            timeline: Scheduler::new(),
            progress_timer: None,
            started: false,
            torn_down: false,
            state: UiState {
                reduce_motion,
                ..UiState::default()
            },
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn theme(&self) -> &SiteTheme {
        &self.theme
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Arm the startup timeline. Later calls do nothing.
    pub fn start(&mut self, now_ms: u64, is_touch: bool) {
        if self.started || self.torn_down {
            return;
        }
        self.started = true;
        self.state.is_touch = is_touch;
        self.timeline.set_origin(now_ms);
        self.progress_timer = Some(self.timeline.every(PROGRESS_TICK_MS, UiEvent::ProgressTick));
        self.timeline.once(TEXT_REVEAL_MS, UiEvent::RevealText);
        self.timeline.once(SUBTITLE_REVEAL_MS, UiEvent::RevealSubtitle);
        self.timeline.once(HINT_FADE_MS, UiEvent::FadeHint);
        self.timeline.once(GLOW_OFF_MS, UiEvent::GlowOff);
        log::info!(
            "[composer] started variant={} touch={} reduce_motion={}",
            self.config.variant.name(),
            is_touch,
            self.state.reduce_motion
        );
    }

    /// Fire every transition due by `now_ms`. Returns whether anything changed.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        while let Some((_, ev)) = self.timeline.pop_due(now_ms) {
            self.apply(ev);
            changed = true;
        }
        changed
    }

    fn apply(&mut self, ev: UiEvent) {
        match ev {
            UiEvent::ProgressTick => {
                self.state.progress =
                    (self.state.progress + PROGRESS_STEP_PERCENT).min(PROGRESS_MAX_PERCENT);
                if self.state.progress >= PROGRESS_MAX_PERCENT {
                    if let Some(h) = self.progress_timer.take() {
                        self.timeline.cancel(h);
                    }
                    self.timeline.once(LOADING_SETTLE_MS, UiEvent::LoadingDone);
                }
            }
            UiEvent::LoadingDone => self.state.loading = false,
            UiEvent::RevealText => self.state.text_visible = true,
            UiEvent::RevealSubtitle => self.state.subtitle_visible = true,
            UiEvent::FadeHint => self.state.hint_opacity = HINT_OPACITY_FADED,
            UiEvent::GlowOff => self.state.show_glow = false,
        }
    }

    /// Earliest pending transition, for arming a wall-clock timer.
    pub fn next_deadline(&self) -> Option<u64> {
        self.timeline.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timeline.pending()
    }

    pub fn on_pointer_down(&mut self) {
        if !self.state.has_interacted {
            log::debug!("[composer] first interaction");
        }
        self.state.has_interacted = true;
    }

    pub fn rotate_hint_visible(&self) -> bool {
        !self.state.has_interacted
    }

    pub fn hint_opacity(&self) -> f32 {
        self.state.hint_opacity
    }

    pub fn glow_active(&self) -> bool {
        self.state.show_glow && !self.state.reduce_motion
    }

    pub fn motion_policy(&self) -> MotionPolicy {
        MotionPolicy::from_reduce_flag(self.state.reduce_motion)
    }

    /// Flip and persist the reduced-motion preference.
    pub fn toggle_reduce_motion(&mut self) -> bool {
        self.state.reduce_motion = !self.state.reduce_motion;
        self.store.save(self.state.reduce_motion);
        log::info!("[composer] reduce_motion={}", self.state.reduce_motion);
        self.state.reduce_motion
    }

    /// Drop every outstanding timer. Nothing fires afterwards.
    pub fn teardown(&mut self) {
        self.timeline.cancel_all();
        self.progress_timer = None;
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

/// Whether a `pagehide` should tear the page down. A page kept in the
/// back/forward cache is suspended by the browser and resumes later, so only
/// a real unload cancels the timeline.
#[inline]
pub fn pagehide_tears_down(persisted: bool) -> bool {
    !persisted
}

/// Circumference and dash offset of the loading ring at `progress` percent.
pub fn progress_ring_dash(progress: u32) -> (f32, f32) {
    let circumference = 2.0 * std::f32::consts::PI * LOADING_RING_RADIUS;
    let p = progress.min(PROGRESS_MAX_PERCENT) as f32 / 100.0;
    (circumference, circumference * (1.0 - p))
}

pub fn progress_label(progress: u32) -> String {
    format!("{}%", progress.min(PROGRESS_MAX_PERCENT))
}
