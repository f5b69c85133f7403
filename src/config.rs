use anyhow::{ensure, Context as _, Result};

#[cfg(test)]
mod tests;

pub const DEFAULT_INITIAL: &str = "1,6,4,7,2,8";

/// Runtime settings, read from the environment (and a `.env` file when present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Array the first tree is built from, in `1,2,3` form.
    pub initial: String,
    pub value_min: i64,
    pub value_max: i64,
    pub window_width: u32,
    pub window_height: u32,
    /// TTF font for node labels in the window front end.
    pub font: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial: DEFAULT_INITIAL.to_string(),
            value_min: -1000,
            value_max: 1000,
            window_width: 950,
            window_height: 750,
            font: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(initial) = lookup("SEGTREE_INITIAL") {
            config.initial = initial;
        }
        if let Some(v) = lookup("SEGTREE_VALUE_MIN") {
            config.value_min = parse_var("SEGTREE_VALUE_MIN", &v)?;
        }
        if let Some(v) = lookup("SEGTREE_VALUE_MAX") {
            config.value_max = parse_var("SEGTREE_VALUE_MAX", &v)?;
        }
        if let Some(v) = lookup("SEGTREE_WINDOW_WIDTH") {
            config.window_width = parse_var("SEGTREE_WINDOW_WIDTH", &v)?;
        }
        if let Some(v) = lookup("SEGTREE_WINDOW_HEIGHT") {
            config.window_height = parse_var("SEGTREE_WINDOW_HEIGHT", &v)?;
        }
        config.font = lookup("SEGTREE_FONT").filter(|f| !f.trim().is_empty());

        ensure!(
            config.value_min <= config.value_max,
            "SEGTREE_VALUE_MIN ({}) must not exceed SEGTREE_VALUE_MAX ({})",
            config.value_min,
            config.value_max
        );

        Ok(config)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("failed to parse {}: '{}'", key, raw))
}
