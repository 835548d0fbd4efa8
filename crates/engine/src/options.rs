use std::env;

use serde::Deserialize;
use tracing::warn;

pub const POND_FILL_ENV_VAR: &str = "BOXISLE_POND_FILL";
pub const PILLARS_ENV_VAR: &str = "BOXISLE_PILLARS";

/// Rendering features that change how a level is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifyOptions {
    /// Flood the outside as void and enclosed pockets as water. When off,
    /// everything that is not floor becomes void.
    pub pond_fill: bool,
    /// Reserve room below the level for stacked pillar art.
    pub pillars: bool,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            pond_fill: true,
            pillars: false,
        }
    }
}

impl ClassifyOptions {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        Self {
            pond_fill: resolve_flag(POND_FILL_ENV_VAR, self.pond_fill),
            pillars: resolve_flag(PILLARS_ENV_VAR, self.pillars),
        }
    }
}

pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn resolve_flag(env_var: &'static str, fallback: bool) -> bool {
    match env::var(env_var) {
        Ok(value) => match parse_flag(&value) {
            Some(flag) => flag,
            None => {
                warn!(
                    env_var,
                    value = value.as_str(),
                    fallback,
                    "options_env_invalid"
                );
                fallback
            }
        },
        Err(env::VarError::NotPresent) => fallback,
        Err(err) => {
            warn!(
                env_var,
                error = %err,
                fallback,
                "options_env_unreadable"
            );
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_spellings() {
        for raw in ["1", "true", "ON", " yes "] {
            assert_eq!(parse_flag(raw), Some(true), "raw={raw}");
        }
        for raw in ["0", "False", "off", "no"] {
            assert_eq!(parse_flag(raw), Some(false), "raw={raw}");
        }
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options: ClassifyOptions =
            serde_json::from_str(r#"{"pillars": true}"#).expect("options");
        assert!(options.pond_fill);
        assert!(options.pillars);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<ClassifyOptions>(r#"{"ponds": true}"#);
        assert!(result.is_err());
    }
}
