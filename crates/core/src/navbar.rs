/// Scroll offset beyond which the navbar gets the pronounced shadow.
pub const ELEVATION_THRESHOLD_PX: f64 = 50.0;

const RESTING_SHADOW: &str = "0 2px 8px rgba(0, 0, 0, 0.2)";
const ELEVATED_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.5)";

/// Navbar shadow intensity as a pure function of the current scroll offset.
/// No hysteresis: the same offset always maps to the same shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavShadow {
    Resting,
    Elevated,
}

impl NavShadow {
    /// The threshold is exclusive: an offset of exactly 50 still rests.
    pub fn for_offset(offset: f64) -> Self {
        if offset > ELEVATION_THRESHOLD_PX {
            Self::Elevated
        } else {
            Self::Resting
        }
    }

    /// Inline `box-shadow` value for this intensity.
    pub fn css(&self) -> &'static str {
        match self {
            Self::Resting => RESTING_SHADOW,
            Self::Elevated => ELEVATED_SHADOW,
        }
    }
}

/// Scroll state held by the scroll handler.
///
/// `last_offset` records the offset seen by the most recent `observe` call.
/// No decision reads it back; it is carried as inert state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the offset and return the shadow it calls for.
    pub fn observe(&mut self, offset: f64) -> NavShadow {
        let shadow = NavShadow::for_offset(offset);
        self.last_offset = offset;
        shadow
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_of_exactly_fifty_rests() {
        assert_eq!(NavShadow::for_offset(50.0), NavShadow::Resting);
    }

    #[test]
    fn offset_of_fifty_one_elevates() {
        assert_eq!(NavShadow::for_offset(51.0), NavShadow::Elevated);
    }

    #[test]
    fn top_of_page_rests() {
        assert_eq!(NavShadow::for_offset(0.0), NavShadow::Resting);
    }

    #[test]
    fn css_values_differ_per_intensity() {
        assert_ne!(NavShadow::Resting.css(), NavShadow::Elevated.css());
        assert!(NavShadow::Elevated.css().contains("20px"));
    }

    #[test]
    fn tracker_records_the_latest_offset() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.observe(120.0), NavShadow::Elevated);
        assert_eq!(tracker.last_offset(), 120.0);
        assert_eq!(tracker.observe(10.0), NavShadow::Resting);
        assert_eq!(tracker.last_offset(), 10.0);
    }
}
