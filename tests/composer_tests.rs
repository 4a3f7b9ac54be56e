// Host-side tests for the page state machine, theme and config parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod composer {
        include!("../src/core/composer.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod effect {
        include!("../src/core/effect.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod preference {
        include!("../src/core/preference.rs");
    }
    pub mod scheduler {
        include!("../src/core/scheduler.rs");
    }
    pub mod theme {
        include!("../src/core/theme.rs");
    }
}

use crate::core::composer::*;
use crate::core::config::SiteConfig;
use crate::core::constants::*;
use crate::core::effect::{MotionPolicy, WaveEffect, WaveShape};
use crate::core::preference::*;
use crate::core::theme::*;

fn started(store: MemoryPreferenceStore) -> SceneComposer<MemoryPreferenceStore> {
    let mut c = SceneComposer::new(SiteConfig::default(), store);
    c.start(0, false);
    c
}

#[test]
fn startup_timeline_matches_page_scenario() {
    let mut c = started(MemoryPreferenceStore::default());
    assert!(c.state().loading);
    assert_eq!(c.state().progress, 0);
    assert!(!c.state().text_visible);

    c.advance(300);
    assert!(c.state().text_visible);
    assert!(!c.state().subtitle_visible);

    c.advance(1000);
    assert_eq!(c.state().progress, 50);
    assert!(c.state().subtitle_visible);

    c.advance(2000);
    assert_eq!(c.state().progress, 100);
    assert!(c.state().loading);

    c.advance(2499);
    assert!(c.state().loading);
    c.advance(2500);
    assert!(!c.state().loading);
}

#[test]
fn progress_is_monotonic_and_capped() {
    let mut c = started(MemoryPreferenceStore::default());
    let mut last = 0;
    for t in (0..=6000).step_by(37) {
        c.advance(t);
        let p = c.state().progress;
        assert!(p >= last && p <= 100, "progress {p} at {t}");
        assert_eq!(p % PROGRESS_STEP_PERCENT, 0);
        last = p;
    }
    assert_eq!(last, 100);
}

#[test]
fn single_late_advance_catches_up() {
    let mut c = started(MemoryPreferenceStore::default());
    assert!(c.advance(10_000));
    let s = c.state();
    assert!(!s.loading && s.text_visible && s.subtitle_visible && !s.show_glow);
    assert_eq!(s.progress, 100);
    assert_eq!(s.hint_opacity, HINT_OPACITY_FADED);
    assert_eq!(c.pending_timers(), 0);
    assert!(!c.advance(20_000));
}

#[test]
fn hint_fades_then_hides_on_interaction() {
    let mut c = started(MemoryPreferenceStore::default());
    c.advance(2999);
    assert_eq!(c.hint_opacity(), 1.0);
    assert!(c.rotate_hint_visible());
    c.advance(3000);
    assert_eq!(c.hint_opacity(), 0.2);
    c.on_pointer_down();
    assert!(!c.rotate_hint_visible());
    c.advance(9000);
    assert!(!c.rotate_hint_visible());
}

#[test]
fn glow_switches_off_and_respects_reduced_motion() {
    let mut c = started(MemoryPreferenceStore::default());
    assert!(c.glow_active());
    c.toggle_reduce_motion();
    assert!(!c.glow_active());
    c.toggle_reduce_motion();
    assert!(c.glow_active());
    c.advance(GLOW_OFF_MS);
    assert!(!c.glow_active());
}

#[test]
fn toggle_persists_and_freezes_effect_on_next_load() {
    let mut c = started(MemoryPreferenceStore::default());
    assert_eq!(c.motion_policy(), MotionPolicy::Animate);
    assert!(c.toggle_reduce_motion());
    assert_eq!(c.store().raw.as_deref(), Some("true"));
    assert_eq!(c.store().writes, 1);

    // a fresh page load reads the stored flag
    let reloaded = started(c.store().clone());
    assert!(reloaded.state().reduce_motion);
    let motion = reloaded.motion_policy();
    assert_eq!(motion, MotionPolicy::Reduced);

    let mut fx = WaveEffect::new(reloaded.theme().wave_style);
    for frame in 0..90 {
        fx.update(frame as f32 / 30.0, motion);
    }
    assert_eq!(fx.uniforms.time, 0.0);
    assert!(fx.layers.iter().all(|l| l.rotation == 0.0));
}

#[test]
fn stored_flag_parsing_is_strict() {
    for raw in ["false", "TRUE", "1", "", "yes"] {
        let c = SceneComposer::new(SiteConfig::default(), MemoryPreferenceStore::with_raw(raw));
        assert!(!c.state().reduce_motion, "{raw:?} should not enable");
    }
    let c = SceneComposer::new(SiteConfig::default(), MemoryPreferenceStore::with_raw("true"));
    assert!(c.state().reduce_motion);
    assert!(!parse_flag(None));
}

#[test]
fn teardown_cancels_every_timer() {
    let mut c = started(MemoryPreferenceStore::default());
    c.advance(500);
    assert!(c.pending_timers() > 0);
    c.teardown();
    assert!(c.is_torn_down());
    assert_eq!(c.pending_timers(), 0);
    assert_eq!(c.next_deadline(), None);
    let before = *c.state();
    assert!(!c.advance(60_000));
    assert_eq!(*c.state(), before);
    // restarting after teardown is refused
    c.start(60_000, false);
    assert_eq!(c.pending_timers(), 0);
}

#[test]
fn cached_page_resumes_where_it_left_off() {
    let mut c = started(MemoryPreferenceStore::default());
    c.advance(1000);
    assert_eq!(c.state().progress, 50);

    // hidden into the back/forward cache: no teardown
    assert!(!pagehide_tears_down(true));
    // the browser resumes timers much later; one catch-up finishes the timeline
    assert!(c.advance(45_000));
    assert!(!c.state().loading);
    assert_eq!(c.state().progress, 100);
    assert!(!c.is_torn_down());
}

#[test]
fn real_unload_tears_down() {
    let mut c = started(MemoryPreferenceStore::default());
    c.advance(1000);
    if pagehide_tears_down(false) {
        c.teardown();
    }
    assert!(!c.advance(45_000));
    assert!(c.state().loading);
}

#[test]
fn start_is_idempotent() {
    let mut c = started(MemoryPreferenceStore::default());
    let armed = c.pending_timers();
    c.start(100, true);
    assert_eq!(c.pending_timers(), armed);
    assert!(!c.state().is_touch);
}

#[test]
fn nothing_fires_before_start() {
    let mut c = SceneComposer::new(SiteConfig::default(), MemoryPreferenceStore::default());
    assert!(!c.advance(10_000));
    assert!(c.state().loading);
}

#[test]
fn ring_dash_tracks_progress() {
    let (circ, off0) = progress_ring_dash(0);
    assert!((circ - 314.159_27).abs() < 1e-3);
    assert_eq!(off0, circ);
    let (_, off50) = progress_ring_dash(50);
    assert!((off50 - circ * 0.5).abs() < 1e-3);
    assert_eq!(progress_ring_dash(100).1, 0.0);
    assert_eq!(progress_ring_dash(250).1, 0.0);
    assert_eq!(progress_label(40), "40%");
    assert_eq!(progress_label(140), "100%");
}

#[test]
fn variants_parse_by_name() {
    assert_eq!(Variant::from_name("Tide"), Some(Variant::Tide));
    assert_eq!(Variant::from_name(" aurora "), Some(Variant::Aurora));
    assert_eq!(Variant::from_name("neon"), None);
    for v in Variant::ALL {
        assert_eq!(Variant::from_name(v.name()), Some(v));
    }
    assert_eq!(Variant::Aurora.theme().wave_style.shape, WaveShape::Disc);
    assert_eq!(Variant::Ember.theme().wave_style.shape, WaveShape::Ring);
}

#[test]
fn config_reads_query_string() {
    let c = SiteConfig::from_query("?variant=aurora&model=/assets/alt.obj&x=1");
    assert_eq!(c.variant, Variant::Aurora);
    assert_eq!(c.model_path, "/assets/alt.obj");
    assert_eq!(c.canvas_id, "app-canvas");

    let c = SiteConfig::from_query("variant=bogus&model=https://evil.example/m.obj");
    assert_eq!(c, SiteConfig::default());
    let c = SiteConfig::from_query("model=/monk.png");
    assert_eq!(c.model_path, MODEL_PATH);
    assert_eq!(SiteConfig::from_query(""), SiteConfig::default());
}

#[test]
fn reduced_motion_stills_the_title_and_hover() {
    let theme = Variant::Ember.theme();
    assert!(theme.title_background(true).starts_with("linear-gradient(135deg"));
    assert!(theme.title_background(false).starts_with("linear-gradient(45deg"));
    assert!(theme.tagline_hover.hover_style(true).is_empty());
    assert!(theme.tagline_hover.hover_style(false).contains("shimmer"));
    let glow = TaglineHover::Glow("#fff").hover_style(false);
    assert!(glow.contains("text-shadow"));
}

#[test]
fn loading_ring_uses_accent_gradient() {
    let stops = Variant::Ember.theme().loading_ring_stops();
    assert_eq!(
        stops,
        [("0%", "#ff6b35"), ("50%", "#f7931e"), ("100%", "#ffd700")]
    );
    for v in Variant::ALL {
        let theme = v.theme();
        let colors: Vec<_> = theme.loading_ring_stops().iter().map(|s| s.1).collect();
        assert_eq!(colors, theme.accent_gradient.to_vec());
    }
}

#[test]
fn taglines_split_per_word_on_pointer_devices() {
    let words = tagline_segments(TAGLINES[0], false);
    assert_eq!(words.first(), Some(&"We're"));
    assert_eq!(words.len(), TAGLINES[0].split_whitespace().count());
    assert_eq!(tagline_segments(TAGLINES[1], true), vec![TAGLINES[1]]);
}
