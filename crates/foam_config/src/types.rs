//! Configuration types deserialized from `foamfix.toml`.

use serde::Deserialize;

/// The top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FoamConfig {
    /// Baked model deduplication.
    #[serde(default)]
    pub dedup: DedupConfig,
    /// Class lookup caching on entity multimaps.
    #[serde(default)]
    pub lookup: LookupConfig,
    /// The one-shot deduplication report.
    #[serde(default)]
    pub report: ReportConfig,
    /// Behaviour overrides.
    #[serde(default)]
    pub tweaks: TweaksConfig,
}

/// `[dedup]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DedupConfig {
    /// Deduplicate baked models.
    #[serde(default = "enabled")]
    pub enabled: bool,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// `[lookup]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupConfig {
    /// Memoize class lookups until the next mutation.
    #[serde(default = "enabled")]
    pub enabled: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// `[report]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Log the deduplication count once the game is loaded.
    #[serde(default = "enabled")]
    pub enabled: bool,
    /// Host tick event the report listens on.
    #[serde(default = "default_report_event")]
    pub event: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            event: default_report_event(),
        }
    }
}

/// `[tweaks]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TweaksConfig {
    /// Lit torches, repeaters and comparators emit no light.
    #[serde(default = "enabled")]
    pub redstone_light: bool,
    /// Ticks between hopper transfers; 0 leaves hoppers alone.
    #[serde(default = "default_hopper_cooldown")]
    pub hopper_cooldown: u32,
    /// Keep texture animations running. `false` freezes them.
    #[serde(default)]
    pub animations: bool,
}

impl Default for TweaksConfig {
    fn default() -> Self {
        Self {
            redstone_light: true,
            hopper_cooldown: default_hopper_cooldown(),
            animations: false,
        }
    }
}

fn enabled() -> bool {
    true
}

fn default_report_event() -> String {
    "update".to_string()
}

fn default_hopper_cooldown() -> u32 {
    8
}
