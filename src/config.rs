use std::env;
use std::str::FromStr;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Fast/slow EMA periods for trend classification.
#[derive(Debug, Clone)]
pub struct EmaConfig {
    pub fast_period: usize,
    pub slow_period: usize,
}

/// Parameters for swing-point detection and support/resistance selection.
#[derive(Debug, Clone)]
pub struct LevelConfig {
    /// Minimum series length before any level is reported.
    pub min_points: usize,
    /// Cap on the trailing lookback window.
    pub max_lookback: usize,
    /// Immediate-neighbor distinctness tolerance for swing points.
    pub swing_tolerance: f64,
    /// Minimum value separation between two reported levels on the same side.
    pub dedup_tolerance: f64,
    /// Distance at which the latest value counts as touching a level.
    pub highlight_tolerance: f64,
}

/// Parameters for the manual trading-signal heuristic.
#[derive(Debug, Clone)]
pub struct SignalConfig {
    /// Whether this chart runs the signal machine at all.
    pub enabled: bool,
    /// Minimum series length before an entry can fire.
    pub min_points: usize,
    /// Entries only fire while the cumulative value sits below this ceiling.
    pub entry_ceiling: f64,
    /// A submitted raw value at or above this resolves a pending entry as a hit.
    pub hit_threshold: f64,
    /// Cap on back-to-back entry signals without a manual break.
    pub max_consecutive_entries: u32,
}

/// View-window sizing for the zoom controls.
#[derive(Debug, Clone)]
pub struct ViewConfig {
    /// Window size at zoom level zero.
    pub base_points: usize,
    /// Points removed per positive zoom step.
    pub zoom_in_step: usize,
    /// Points added per negative zoom step.
    pub zoom_out_step: usize,
    /// Smallest window the view will shrink to.
    pub min_points: usize,
}

/// Complete configuration for one chart pipeline.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub ema: EmaConfig,
    /// Half-width of the lateral band around the slow EMA.
    pub trend_tolerance: f64,
    pub levels: LevelConfig,
    pub signal: SignalConfig,
    pub view: ViewConfig,
    /// Synthetic wick margin as a fraction of the sample magnitude.
    pub wick_ratio: f64,
    pub momentum_lookback: usize,
    pub range_lookback: usize,
}

impl ChartConfig {
    /// Preset for the primary candlestick chart.
    pub fn primary() -> Self {
        Self {
            ema: EmaConfig {
                fast_period: 5,
                slow_period: 10,
            },
            trend_tolerance: 0.005,
            levels: LevelConfig {
                min_points: 5,
                max_lookback: 20,
                swing_tolerance: 0.01,
                dedup_tolerance: 0.03,
                highlight_tolerance: 0.02,
            },
            signal: SignalConfig {
                enabled: true,
                min_points: 5,
                entry_ceiling: 2.0,
                hit_threshold: 1.0,
                max_consecutive_entries: 3,
            },
            view: ViewConfig {
                base_points: 24,
                zoom_in_step: 2,
                zoom_out_step: 10,
                min_points: 5,
            },
            wick_ratio: 0.1,
            momentum_lookback: 3,
            range_lookback: 10,
        }
    }

    /// Preset for the miniature companion chart. Shorter EMAs, a wider base
    /// window, looser level dedup, and no signal machine.
    pub fn companion() -> Self {
        Self {
            ema: EmaConfig {
                fast_period: 3,
                slow_period: 5,
            },
            trend_tolerance: 0.005,
            levels: LevelConfig {
                min_points: 3,
                max_lookback: 10,
                swing_tolerance: 0.01,
                dedup_tolerance: 0.02,
                highlight_tolerance: 0.05,
            },
            signal: SignalConfig {
                enabled: false,
                min_points: 5,
                entry_ceiling: 2.0,
                hit_threshold: 1.0,
                max_consecutive_entries: 3,
            },
            view: ViewConfig {
                base_points: 30,
                zoom_in_step: 2,
                zoom_out_step: 5,
                min_points: 5,
            },
            wick_ratio: 0.1,
            momentum_lookback: 3,
            range_lookback: 10,
        }
    }

    /// Primary preset with environment-variable overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::primary();
        config.ema.fast_period = env_or("GLIMMER_EMA_FAST", config.ema.fast_period);
        config.ema.slow_period = env_or("GLIMMER_EMA_SLOW", config.ema.slow_period);
        config.signal.entry_ceiling = env_or("GLIMMER_ENTRY_CEILING", config.signal.entry_ceiling);
        config.signal.hit_threshold = env_or("GLIMMER_HIT_THRESHOLD", config.signal.hit_threshold);
        config.view.base_points = env_or("GLIMMER_BASE_POINTS", config.view.base_points);
        config
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::primary()
    }
}
