//! Effect configuration and the page-option merge.
//!
//! The page may define a partial configuration object using the same keys as
//! the defaults (`HEART_COUNT.MOBILE`, `HEART_SIZE.MAX`, `EASING`, ...). It is
//! deep-merged over the built-in defaults leaf by leaf and then read into an
//! immutable [`HeartConfig`] that the effect receives at construction. A leaf
//! that cannot be read keeps its default; every other override still applies.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::ConfigError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

const KNOWN_KEYS: [&str; 7] = [
    "HEART_COUNT",
    "HEART_COLORS",
    "HEART_SIZE",
    "ANIMATION_DURATION",
    "MAX_HEARTS",
    "MOVE_RANGE",
    "EASING",
];

/// Hearts spawned per activation, by device class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HeartCount {
    pub mobile: u32,
    pub desktop: u32,
}

/// Heart edge length bounds in CSS pixels.
///
/// Sizes are drawn as `min + r * (max - min)`, so swapped bounds still yield
/// sizes between the two values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

/// Movement range in CSS pixels.
///
/// `x` is the full horizontal span (targets land within `±x/2`), `y` the
/// maximum upward travel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct MoveRange {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct HeartConfig {
    pub heart_count: HeartCount,
    pub heart_colors: Vec<String>,
    pub heart_size: SizeRange,
    /// Milliseconds from spawn to removal.
    pub animation_duration: f64,
    pub max_hearts: usize,
    pub move_range: MoveRange,
    pub easing: Easing,
    /// Keys the effect does not recognize, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for HeartConfig {
    fn default() -> Self {
        Self {
            heart_count: HeartCount {
                mobile: DEFAULT_MOBILE_COUNT,
                desktop: DEFAULT_DESKTOP_COUNT,
            },
            heart_colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            heart_size: SizeRange {
                min: DEFAULT_SIZE_MIN,
                max: DEFAULT_SIZE_MAX,
            },
            animation_duration: DEFAULT_DURATION_MS,
            max_hearts: DEFAULT_MAX_HEARTS,
            move_range: MoveRange {
                x: DEFAULT_MOVE_X,
                y: DEFAULT_MOVE_Y,
            },
            easing: Easing::default(),
            extra: Map::new(),
        }
    }
}

impl HeartConfig {
    /// The defaults as a JSON tree, in page-option form.
    pub fn defaults_value() -> Value {
        serde_json::to_value(HeartConfig::default()).unwrap_or(Value::Null)
    }
}

/// A resolved configuration plus the leaves that fell back to defaults.
#[derive(Debug)]
pub struct Resolution {
    pub config: HeartConfig,
    pub rejected: Vec<ConfigError>,
}

/// Deep-merge `external` over a copy of `defaults`.
///
/// Objects are merged key by key. Any other source value, arrays included,
/// replaces the target outright. When the source holds an object where the
/// target does not, the target branch is reset to an empty object first.
/// `defaults` is never modified.
pub fn merge(defaults: &Value, external: Option<&Value>) -> Value {
    let mut merged = defaults.clone();
    if let Some(Value::Object(source)) = external {
        merge_objects(&mut merged, source);
    }
    merged
}

fn merge_objects(target: &mut Value, source: &Map<String, Value>) {
    if !target.is_object() {
        *target = Value::Object(Map::new());
    }
    let Value::Object(target) = target else {
        return;
    };
    for (key, value) in source {
        match value {
            Value::Object(inner) => {
                let slot = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                merge_objects(slot, inner);
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}

/// Merge the page options over the defaults and read every leaf.
///
/// Leaves of the wrong type, and an unknown easing name, keep their default
/// and are reported in [`Resolution::rejected`].
pub fn resolve_lenient(external: Option<&Value>) -> Resolution {
    let merged = merge(&HeartConfig::defaults_value(), external);
    let mut config = HeartConfig::default();
    let mut rejected = Vec::new();
    let Value::Object(root) = merged else {
        return Resolution { config, rejected };
    };

    if let Some(count) = record(&root, "HEART_COUNT", &mut rejected) {
        let c = &mut config.heart_count;
        leaf(count, "HEART_COUNT.MOBILE", "MOBILE", &mut c.mobile, &mut rejected);
        leaf(count, "HEART_COUNT.DESKTOP", "DESKTOP", &mut c.desktop, &mut rejected);
    }
    leaf(&root, "HEART_COLORS", "HEART_COLORS", &mut config.heart_colors, &mut rejected);
    if let Some(size) = record(&root, "HEART_SIZE", &mut rejected) {
        let s = &mut config.heart_size;
        leaf(size, "HEART_SIZE.MIN", "MIN", &mut s.min, &mut rejected);
        leaf(size, "HEART_SIZE.MAX", "MAX", &mut s.max, &mut rejected);
    }
    leaf(
        &root,
        "ANIMATION_DURATION",
        "ANIMATION_DURATION",
        &mut config.animation_duration,
        &mut rejected,
    );
    leaf(&root, "MAX_HEARTS", "MAX_HEARTS", &mut config.max_hearts, &mut rejected);
    if let Some(range) = record(&root, "MOVE_RANGE", &mut rejected) {
        let r = &mut config.move_range;
        leaf(range, "MOVE_RANGE.X", "X", &mut r.x, &mut rejected);
        leaf(range, "MOVE_RANGE.Y", "Y", &mut r.y, &mut rejected);
    }
    match root.get("EASING") {
        Some(Value::String(name)) => match name.parse::<Easing>() {
            Ok(easing) => config.easing = easing,
            Err(e) => rejected.push(e),
        },
        Some(other) => rejected.push(ConfigError::UnknownEasing(other.to_string())),
        None => {}
    }

    config.extra = root
        .into_iter()
        .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
        .collect();
    Resolution { config, rejected }
}

fn record<'a>(
    root: &'a Map<String, Value>,
    key: &str,
    rejected: &mut Vec<ConfigError>,
) -> Option<&'a Map<String, Value>> {
    match root.get(key) {
        Some(Value::Object(inner)) => Some(inner),
        Some(_) => {
            rejected.push(ConfigError::NotARecord(key.to_string()));
            None
        }
        None => None,
    }
}

fn leaf<T: DeserializeOwned>(
    record: &Map<String, Value>,
    path: &str,
    key: &str,
    slot: &mut T,
    rejected: &mut Vec<ConfigError>,
) {
    let Some(value) = record.get(key) else {
        return;
    };
    match serde_json::from_value::<T>(value.clone()) {
        Ok(v) => *slot = v,
        Err(source) => rejected.push(ConfigError::Invalid {
            key: path.to_string(),
            source,
        }),
    }
}

/// Strict resolution: the first unreadable leaf is an error.
pub fn resolve(external: Option<&Value>) -> Result<HeartConfig, ConfigError> {
    let Resolution { config, rejected } = resolve_lenient(external);
    match rejected.into_iter().next() {
        Some(e) => Err(e),
        None => Ok(config),
    }
}

/// Like [`resolve_lenient`], logging each leaf that kept its default. This is
/// what the page uses, so a bad option never disables the effect or discards
/// the other overrides.
pub fn resolve_or_default(external: Option<&Value>) -> HeartConfig {
    let Resolution { config, rejected } = resolve_lenient(external);
    for e in &rejected {
        log::warn!("[config] {e}; keeping the default");
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_value_uses_page_option_keys() {
        let v = HeartConfig::defaults_value();
        assert_eq!(v["HEART_COUNT"]["MOBILE"], json!(3));
        assert_eq!(v["HEART_COUNT"]["DESKTOP"], json!(6));
        assert_eq!(v["HEART_SIZE"]["MIN"], json!(10.0));
        assert_eq!(v["MAX_HEARTS"], json!(30));
        assert_eq!(v["EASING"], json!("easeOutQuad"));
        assert_eq!(v["HEART_COLORS"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn merge_overrides_leaves_only() {
        let defaults = json!({"A": {"X": 1, "Y": 2}, "B": 3});
        let merged = merge(&defaults, Some(&json!({"A": {"Y": 9}})));
        assert_eq!(merged, json!({"A": {"X": 1, "Y": 9}, "B": 3}));
    }

    #[test]
    fn merge_replaces_arrays_wholesale() {
        let defaults = json!({"C": ["a", "b", "c"]});
        let merged = merge(&defaults, Some(&json!({"C": ["z"]})));
        assert_eq!(merged, json!({"C": ["z"]}));
    }

    #[test]
    fn merge_overwrites_non_object_branch() {
        let defaults = json!({"A": 5});
        let merged = merge(&defaults, Some(&json!({"A": {"X": 1}})));
        assert_eq!(merged, json!({"A": {"X": 1}}));

        let merged = merge(&json!({"A": {"X": 1}}), Some(&json!({"A": 7})));
        assert_eq!(merged, json!({"A": 7}));
    }

    #[test]
    fn merge_ignores_non_object_root() {
        let defaults = json!({"A": 1});
        assert_eq!(merge(&defaults, Some(&json!([1, 2]))), defaults);
        assert_eq!(merge(&defaults, None), defaults);
    }

    #[test]
    fn merge_does_not_touch_defaults() {
        let defaults = json!({"A": {"X": 1}});
        let snapshot = defaults.clone();
        let _ = merge(&defaults, Some(&json!({"A": {"X": 2, "Z": 3}})));
        assert_eq!(defaults, snapshot);
    }

    #[test]
    fn resolve_without_overrides_is_default() {
        assert_eq!(resolve(None).ok(), Some(HeartConfig::default()));
    }

    #[test]
    fn resolve_rejects_unknown_easing_by_name() {
        let err = resolve(Some(&json!({"EASING": "bounce"}))).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownEasing(ref n) if n == "bounce"));
    }

    #[test]
    fn resolve_reports_mistyped_branch() {
        let err = resolve(Some(&json!({"HEART_SIZE": 5}))).unwrap_err();
        assert!(matches!(err, ConfigError::NotARecord(ref k) if k == "HEART_SIZE"));
        let err = resolve(Some(&json!({"MAX_HEARTS": "lots"}))).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "MAX_HEARTS"));
    }

    #[test]
    fn unusual_but_well_typed_values_are_kept() {
        let cfg = resolve(Some(&json!({
            "HEART_SIZE": {"MIN": 25},
            "ANIMATION_DURATION": 0,
            "MOVE_RANGE": {"Y": -10},
            "HEART_COLORS": []
        })))
        .unwrap();
        assert_eq!(cfg.heart_size, SizeRange { min: 25.0, max: 20.0 });
        assert_eq!(cfg.animation_duration, 0.0);
        assert_eq!(cfg.move_range.y, -10.0);
        assert!(cfg.heart_colors.is_empty());
    }

    #[test]
    fn a_bad_leaf_keeps_its_default_and_the_rest_still_apply() {
        let cfg = resolve_or_default(Some(&json!({
            "HEART_COLORS": ["red"],
            "MAX_HEARTS": 50,
            "HEART_SIZE": {"MIN": 25, "MAX": "big"},
            "EASING": "nope"
        })));
        assert_eq!(cfg.heart_colors, vec!["red".to_string()]);
        assert_eq!(cfg.max_hearts, 50);
        assert_eq!(cfg.heart_size.min, 25.0);
        assert_eq!(cfg.heart_size.max, DEFAULT_SIZE_MAX);
        assert_eq!(cfg.easing, Easing::EaseOutQuad);
    }
}
