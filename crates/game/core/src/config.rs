/// Scoring policy constants and tunable thresholds for the collector bot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BotConfig {
    /// A rival must carry at least this many diamonds to be worth tackling.
    pub min_diamonds_to_tackle: u32,

    /// Furthest path distance at which a tackle is considered (1 = adjacent).
    pub max_tackle_distance: u32,

    /// Subtracted from every tackle score so tackles rank below diamonds.
    pub tackle_score_penalty: f64,

    /// Seconds of slack kept when racing the clock back to base.
    pub safe_return_buffer_seconds: u32,

    /// Capacity assumed when a bot does not report `inventory_size`.
    pub default_inventory_size: u32,

    /// Below this many diamonds on the board the bot heads for the button.
    pub low_diamond_threshold: usize,

    /// Weight of diamond points against distance in the diamond score.
    pub diamond_points_weight: f64,

    /// Point value of a top-up diamond not worth the risk at capacity - 1.
    pub topup_skip_points: u32,
}

impl BotConfig {
    pub const DEFAULT_MIN_DIAMONDS_TO_TACKLE: u32 = 5;
    pub const DEFAULT_MAX_TACKLE_DISTANCE: u32 = 1;
    pub const DEFAULT_TACKLE_SCORE_PENALTY: f64 = 10_000.0;
    pub const DEFAULT_SAFE_RETURN_BUFFER_SECONDS: u32 = 3;
    pub const DEFAULT_INVENTORY_SIZE: u32 = 5;
    pub const DEFAULT_LOW_DIAMOND_THRESHOLD: usize = 4;
    pub const DEFAULT_DIAMOND_POINTS_WEIGHT: f64 = 0.01;
    pub const DEFAULT_TOPUP_SKIP_POINTS: u32 = 2;

    pub fn new() -> Self {
        Self {
            min_diamonds_to_tackle: Self::DEFAULT_MIN_DIAMONDS_TO_TACKLE,
            max_tackle_distance: Self::DEFAULT_MAX_TACKLE_DISTANCE,
            tackle_score_penalty: Self::DEFAULT_TACKLE_SCORE_PENALTY,
            safe_return_buffer_seconds: Self::DEFAULT_SAFE_RETURN_BUFFER_SECONDS,
            default_inventory_size: Self::DEFAULT_INVENTORY_SIZE,
            low_diamond_threshold: Self::DEFAULT_LOW_DIAMOND_THRESHOLD,
            diamond_points_weight: Self::DEFAULT_DIAMOND_POINTS_WEIGHT,
            topup_skip_points: Self::DEFAULT_TOPUP_SKIP_POINTS,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self::new()
    }
}
