//! Document validation rules for the CMS document types.
//!
//! A [`Schema`] is a list of field names, each with a list of [`Rule`]s. A
//! rule sees the field value (if any) and the whole document, so conditional
//! rules such as "outfit type is required for men" are ordinary closures.
//! Rules other than [`required`] pass when the field is absent.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::catalog::DataType;
use crate::reference;

/// `Err` carries a human-readable message for the field.
pub type Rule = Box<dyn Fn(Option<&Value>, &Value) -> Result<(), String> + Send + Sync>;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub struct Schema {
    type_name: &'static str,
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Schema {
    #[must_use]
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Adds rules for `name`. Dotted names (`slug.current`) address nested objects.
    #[must_use]
    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push((name, rules));
        self
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Runs every rule and returns all violations in field order.
    #[must_use]
    pub fn validate(&self, doc: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();
        for (field, rules) in &self.fields {
            let value = lookup(doc, field);
            for rule in rules {
                if let Err(message) = rule(value, doc) {
                    violations.push(Violation {
                        field: *field,
                        message,
                    });
                }
            }
        }
        violations
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|(name, _)| *name).collect();
        f.debug_struct("Schema")
            .field("type_name", &self.type_name)
            .field("fields", &names)
            .finish()
    }
}

fn lookup<'a>(doc: &'a Value, field: &str) -> Option<&'a Value> {
    let pointer = format!("/{}", field.replace('.', "/"));
    doc.pointer(&pointer).filter(|v| !v.is_null())
}

/// Character count for strings, item count for arrays.
fn measure(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Rule builders
// ---------------------------------------------------------------------------

#[must_use]
pub fn required() -> Rule {
    Box::new(|value, _| match value {
        None => Err("required".to_string()),
        Some(Value::String(s)) if s.trim().is_empty() => Err("required".to_string()),
        Some(Value::Array(items)) if items.is_empty() => Err("required".to_string()),
        Some(_) => Ok(()),
    })
}

#[must_use]
pub fn min_len(min: usize) -> Rule {
    Box::new(move |value, _| match value.and_then(measure) {
        Some(len) if len < min => Err(format!("must have at least {min} (got {len})")),
        _ => Ok(()),
    })
}

#[must_use]
pub fn max_len(max: usize) -> Rule {
    Box::new(move |value, _| match value.and_then(measure) {
        Some(len) if len > max => Err(format!("must have at most {max} (got {len})")),
        _ => Ok(()),
    })
}

/// `label` names the expected format in the message, e.g. `"hex color"`.
#[must_use]
pub fn matches(pattern: &'static LazyLock<Regex>, label: &'static str) -> Rule {
    Box::new(move |value, _| match value {
        Some(Value::String(s)) if !pattern.is_match(s) => {
            Err(format!("'{s}' is not a valid {label}"))
        }
        Some(Value::String(_)) | None => Ok(()),
        Some(other) => Err(format!("expected a {label} string, got {other}")),
    })
}

#[must_use]
pub fn one_of(options: &'static [&'static str]) -> Rule {
    Box::new(move |value, _| match value {
        Some(Value::String(s)) if !options.contains(&s.as_str()) => {
            Err(format!("'{s}' is not one of [{}]", options.join(", ")))
        }
        _ => Ok(()),
    })
}

#[must_use]
pub fn positive() -> Rule {
    Box::new(|value, _| match value.and_then(Value::as_f64) {
        Some(n) if n <= 0.0 => Err(format!("must be positive (got {n})")),
        _ => Ok(()),
    })
}

#[must_use]
pub fn range(min: f64, max: f64) -> Rule {
    Box::new(move |value, _| match value.and_then(Value::as_f64) {
        Some(n) if n < min || n > max => Err(format!("must be between {min} and {max}")),
        _ => Ok(()),
    })
}

/// At most `digits` decimal places.
#[must_use]
pub fn precision(digits: i32) -> Rule {
    Box::new(move |value, _| match value.and_then(Value::as_f64) {
        Some(n) => {
            let scale = 10f64.powi(digits);
            let scaled = n * scale;
            if (scaled - scaled.round()).abs() > 1e-6 {
                Err(format!("must have at most {digits} decimal places"))
            } else {
                Ok(())
            }
        }
        None => Ok(()),
    })
}

pub fn custom<F>(check: F) -> Rule
where
    F: Fn(Option<&Value>, &Value) -> Result<(), String> + Send + Sync + 'static,
{
    Box::new(check)
}

// ---------------------------------------------------------------------------
// Document schemas
// ---------------------------------------------------------------------------

#[must_use]
pub fn color_schema() -> Schema {
    Schema::new("color")
        .field("name", vec![required()])
        .field("code", vec![required(), matches(&HEX_COLOR, "hex color")])
}

#[must_use]
pub fn fabric_schema() -> Schema {
    Schema::new("fabric").field("name", vec![required(), min_len(2), max_len(30)])
}

#[must_use]
pub fn product_schema() -> Schema {
    Schema::new("product")
        .field("title", vec![required(), min_len(3), max_len(100)])
        .field("slug.current", vec![required()])
        .field("subTitle", vec![required(), min_len(3), max_len(60)])
        .field("audience", vec![required(), one_of(&["men", "women"])])
        .field("category", vec![one_of(reference::CATEGORIES)])
        .field(
            "subCategory",
            vec![required(), one_of(reference::SUB_CATEGORIES)],
        )
        .field("menOutfitType", vec![required_for_audience("men")])
        .field("womenOutfitType", vec![required_for_audience("women")])
        .field("season", vec![required()])
        .field("designs", vec![required(), min_len(1)])
        .field("occasions", vec![required(), min_len(1)])
        .field("fabric", vec![required()])
        .field("price", vec![required(), positive(), precision(2)])
        .field(
            "variants",
            vec![required(), min_len(1), variant_entries(), distinct_variant_colors()],
        )
        .field("discount", vec![range(0.0, 100.0)])
        .field("description", vec![required()])
}

#[must_use]
pub fn schema_for(data_type: DataType) -> Schema {
    match data_type {
        DataType::Fabric => fabric_schema(),
        DataType::Color => color_schema(),
        DataType::Product => product_schema(),
    }
}

fn required_for_audience(audience: &'static str) -> Rule {
    custom(move |value, doc| {
        let applies = doc.get("audience").and_then(Value::as_str) == Some(audience);
        let missing = value.and_then(Value::as_str).is_none_or(str::is_empty);
        if applies && missing {
            Err(format!("outfit type is required for {audience}"))
        } else {
            Ok(())
        }
    })
}

fn variant_entries() -> Rule {
    custom(|value, _| {
        let Some(items) = value.and_then(Value::as_array) else {
            return Ok(());
        };
        for (i, item) in items.iter().enumerate() {
            for key in ["color", "featuredImage"] {
                if item.get(key).is_none_or(Value::is_null) {
                    return Err(format!("variants[{i}].{key} is required"));
                }
            }
            match item.get("stock").and_then(Value::as_f64) {
                Some(stock) if stock >= 0.0 => {}
                _ => return Err(format!("variants[{i}].stock must be 0 or a positive number")),
            }
        }
        Ok(())
    })
}

fn distinct_variant_colors() -> Rule {
    custom(|value, _| {
        let Some(items) = value.and_then(Value::as_array) else {
            return Ok(());
        };
        let mut seen = std::collections::HashSet::new();
        for color_ref in items
            .iter()
            .filter_map(|item| item.pointer("/color/_ref").and_then(Value::as_str))
        {
            if !seen.insert(color_ref) {
                return Err("the same color cannot be used for multiple variants".to_string());
            }
        }
        Ok(())
    })
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
