//! Parsing loosely typed color input into [`ColorSpec`].
//!
//! Text input (command-line flags) goes through [`FromStr`]; structured input
//! (TOML and JSON batch files) goes through [`Deserialize`]. Both infer the
//! variant from the shape of the value:
//!
//! | input                          | result                  |
//! |--------------------------------|-------------------------|
//! | `"red"`                        | `Named("red")`          |
//! | `208`                          | `Palette256(208)`       |
//! | `"255,0,0"`, `(255, 0, 0)`, `[255, 0, 0]` | `Rgb(255, 0, 0)` |
//! | two, four, or non-integer components | `InvalidFormat`   |

use alloc::borrow::Cow;
use core::fmt;
use core::str::FromStr;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use strum::IntoEnumIterator;

use crate::color::{ColorSpec, NamedColor};
use crate::error::ColorError;

impl FromStr for ColorSpec {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorError::InvalidFormat {
            input: s.to_owned(),
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let bracketed = strip_brackets(trimmed);
        let inner = bracketed.unwrap_or(trimmed);
        if bracketed.is_some() || inner.contains(',') {
            let components = inner
                .split(',')
                .map(|c| c.trim().parse::<i64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| invalid())?;
            return match components.as_slice() {
                [r, g, b] => Ok(Self::Rgb(*r, *g, *b)),
                _ => Err(invalid()),
            };
        }

        if let Ok(index) = inner.parse::<i64>() {
            return Ok(Self::Palette256(index));
        }
        Ok(Self::Named(inner.to_owned()))
    }
}

/// Strip one pair of matching `()` or `[]`.
fn strip_brackets(s: &str) -> Option<&str> {
    s.strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .or_else(|| s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')))
}

impl<'de> Deserialize<'de> for ColorSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColorSpecVisitor)
    }
}

struct ColorSpecVisitor;

impl<'de> Visitor<'de> for ColorSpecVisitor {
    type Value = ColorSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a color name, a palette index, or an array of three RGB components")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        if v.trim().is_empty() {
            return Err(E::custom(ColorError::InvalidFormat {
                input: v.to_owned(),
            }));
        }
        Ok(ColorSpec::Named(v.to_owned()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(ColorSpec::Palette256(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(ColorSpec::Palette256)
            .map_err(|_| {
                E::custom(ColorError::InvalidFormat {
                    input: v.to_string(),
                })
            })
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<serde_json::Value>()? {
            items.push(item);
        }
        let components: Option<Vec<i64>> = items.iter().map(serde_json::Value::as_i64).collect();
        match components.as_deref() {
            Some([r, g, b]) => Ok(ColorSpec::Rgb(*r, *g, *b)),
            _ => Err(de::Error::custom(ColorError::InvalidFormat {
                input: serde_json::Value::Array(items).to_string(),
            })),
        }
    }
}

impl JsonSchema for ColorSpec {
    fn schema_name() -> Cow<'static, str> {
        "ColorSpec".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        let names: Vec<&'static str> = NamedColor::iter().map(Into::into).collect();
        json_schema!({
            "title": "Color",
            "description": "A color name, a 256-color palette index, or an [r, g, b] truecolor triple.",
            "oneOf": [
                {
                    "type": "string",
                    "enum": names
                },
                {
                    "type": "integer",
                    "description": "256-color palette index (0-255)"
                },
                {
                    "type": "array",
                    "description": "Red, green, and blue components (0-255 each)",
                    "items": { "type": "integer" },
                    "minItems": 3,
                    "maxItems": 3
                }
            ]
        })
    }
}
