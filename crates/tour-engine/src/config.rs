//! Engine configuration.

/// Tunable knobs for [`TourController`][crate::TourController].
///
/// Plain data with sensible defaults; passed into
/// [`TourBuilder`][crate::TourBuilder] rather than read from ambient state.
#[derive(Debug, Clone, Copy)]
pub struct TourConfig {
    /// How long a proximity notification stays on screen before it
    /// auto-dismisses, in milliseconds.
    pub notify_timeout_ms: u64,

    /// Mirror the landscape x axis of the map asset (east on the left).
    /// An asset property, fixed per deployment.
    pub mirror_x: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            notify_timeout_ms: 10_000,
            mirror_x:          false,
        }
    }
}
