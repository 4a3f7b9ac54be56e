use crate::core::effect::WaveStyle;

pub const TITLE_TEXT: &str = "Entering Monk Mode…";
pub const SUBTITLE_TEXT: &str = "Revealing Soon…";
pub const LOADING_CAPTION: &str = "Preparing your experience…";
pub const ROTATE_HINT_TEXT: &str = "Drag to rotate";
pub const TAGLINES: [&str; 2] = [
    "We're tuning the silence before the scale.",
    "Stay close, growth is about to get sorted.",
];

/// Named page look. Each used to be a separate near-identical page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Ember,
    Aurora,
    Tide,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Ember, Variant::Aurora, Variant::Tide];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ember" => Some(Variant::Ember),
            "aurora" => Some(Variant::Aurora),
            "tide" => Some(Variant::Tide),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Ember => "ember",
            Variant::Aurora => "aurora",
            Variant::Tide => "tide",
        }
    }

    pub fn theme(self) -> SiteTheme {
        match self {
            Variant::Ember => SiteTheme {
                background: "#000",
                accent_gradient: ["#ff6b35", "#f7931e", "#ffd700"],
                tagline_hover: TaglineHover::Shimmer([
                    "#0099ff", "#00ffff", "#9933ff",
                ]),
                hint_color: "#888888",
                wave_style: WaveStyle::ring_wave(),
            },
            Variant::Aurora => SiteTheme {
                background: "radial-gradient(circle at 50% 40%, #1a0f05 0%, #000 70%)",
                accent_gradient: ["#ffb347", "#ff7e5f", "#feb47b"],
                tagline_hover: TaglineHover::Glow("#ffb347"),
                hint_color: "#a08060",
                wave_style: WaveStyle::radial_aura(),
            },
            Variant::Tide => SiteTheme {
                background: "linear-gradient(180deg, #05010f 0%, #120624 100%)",
                accent_gradient: ["#9d50bb", "#6e48aa", "#c471ed"],
                tagline_hover: TaglineHover::Shimmer([
                    "#c471ed", "#f64f59", "#12c2e9",
                ]),
                hint_color: "#9a8fb0",
                wave_style: WaveStyle::violet_ring_wave(),
            },
        }
    }
}

/// How tagline words react to hover on pointer devices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TaglineHover {
    /// Animated gradient clipped to the text.
    Shimmer([&'static str; 3]),
    /// Soft text-shadow in one color.
    Glow(&'static str),
}

impl TaglineHover {
    /// Inline style applied on hover. Empty when motion is reduced.
    pub fn hover_style(&self, reduce_motion: bool) -> String {
        if reduce_motion {
            return String::new();
        }
        match self {
            TaglineHover::Shimmer([a, b, c]) => format!(
                "background:linear-gradient(90deg,{a},{b},{c},{a});background-size:200% auto;\
                 -webkit-background-clip:text;background-clip:text;\
                 -webkit-text-fill-color:transparent;animation:shimmer 2s linear infinite"
            ),
            TaglineHover::Glow(color) => {
                format!("text-shadow:0 0 18px {color};color:{color}")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteTheme {
    pub background: &'static str,
    pub accent_gradient: [&'static str; 3],
    pub tagline_hover: TaglineHover,
    pub hint_color: &'static str,
    pub wave_style: WaveStyle,
}

impl SiteTheme {
    /// `(offset, color)` stops for the loading ring's stroke gradient.
    pub fn loading_ring_stops(&self) -> [(&'static str, &'static str); 3] {
        let [a, b, c] = self.accent_gradient;
        [("0%", a), ("50%", b), ("100%", c)]
    }

    /// CSS background for the title; static under reduced motion.
    pub fn title_background(&self, reduce_motion: bool) -> String {
        let [a, b, c] = self.accent_gradient;
        if reduce_motion {
            format!("linear-gradient(135deg, {a}, {b}, {c})")
        } else {
            format!("linear-gradient(45deg, {a}, {b}, {c}, {a})")
        }
    }
}

/// How a tagline is laid out: whole lines on touch devices, one span per
/// word (each hoverable) on pointer devices.
pub fn tagline_segments(line: &str, is_touch: bool) -> Vec<&str> {
    if is_touch {
        vec![line]
    } else {
        line.split(' ').filter(|w| !w.is_empty()).collect()
    }
}
