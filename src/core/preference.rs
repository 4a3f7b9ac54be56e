// The one persisted user preference: whether to reduce motion.

/// Read/write capability for the reduced-motion flag.
///
/// Implementations must never fail loudly: a missing or unreadable value
/// loads as `false`, and a failed write is dropped.
pub trait PreferenceStore {
    fn load(&self) -> bool;
    fn save(&mut self, reduce_motion: bool);
}

/// Parse the stored string form. Only the exact string `"true"` enables it.
#[inline]
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

#[inline]
pub fn format_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// In-memory store holding the raw string, as browser storage would.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    pub raw: Option<String>,
    pub writes: usize,
}

impl MemoryPreferenceStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
            writes: 0,
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> bool {
        parse_flag(self.raw.as_deref())
    }

    fn save(&mut self, reduce_motion: bool) {
        self.raw = Some(format_flag(reduce_motion).to_string());
        self.writes += 1;
    }
}
