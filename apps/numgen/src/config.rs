use anyhow::Context;
use generator::{ReplacementRule, Replacements};

pub const UPPER_BOUND_VAR: &str = "NUMGEN_UPPER_BOUND";
pub const REPLACEMENTS_VAR: &str = "NUMGEN_REPLACEMENTS";
pub const LOG_VAR: &str = "NUMGEN_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub upper_bound: i64,
    pub replacements: Replacements,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upper_bound: i64::MAX,
            replacements: Replacements::new(),
            log_filter: "warn".into(),
        }
    }
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub upper_bound: Option<i64>,
    pub replacements_json: Option<String>,
    pub rules: Vec<ReplacementRule>,
    pub verbose: bool,
}

pub fn load_settings(overrides: Overrides) -> anyhow::Result<Settings> {
    load_settings_from(|key| std::env::var(key).ok(), overrides)
}

pub fn load_settings_from(
    lookup: impl Fn(&str) -> Option<String>,
    overrides: Overrides,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if let Some(v) = lookup(UPPER_BOUND_VAR) {
        if let Ok(parsed) = v.trim().parse::<i64>() {
            settings.upper_bound = parsed;
        }
    }
    if let Some(v) = lookup(REPLACEMENTS_VAR) {
        settings.replacements = parse_replacements_json(&v)
            .with_context(|| format!("invalid {REPLACEMENTS_VAR}"))?;
    }

    if let Some(v) = lookup(LOG_VAR) {
        settings.log_filter = v;
    }
    if overrides.verbose {
        settings.log_filter = "debug".into();
    }

    if let Some(upper_bound) = overrides.upper_bound {
        settings.upper_bound = upper_bound;
    }
    if let Some(raw) = overrides.replacements_json.as_deref() {
        settings.replacements =
            parse_replacements_json(raw).context("invalid --replacements-json")?;
    }
    settings.replacements.apply_rules(&overrides.rules);

    Ok(settings)
}

fn parse_replacements_json(raw: &str) -> anyhow::Result<Replacements> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Replacements::new());
    }
    Ok(serde_json::from_str(raw)?)
}
