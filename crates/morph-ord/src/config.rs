//! Comparison configuration
//!
//! Two behaviours of the dispatcher are configurable: how the positive-infinity
//! sentinel participates in comparisons, and how unordered floats (NaN) fall
//! through the primitive ordering. Both default to the reflexive, host-like
//! behaviour.
//!
//! Configuration can be built in code, parsed from TOML or JSON, and then
//! overridden from `MORPH_ORD_*` environment variables.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{OrdError, Result};

/// Environment variable overriding [`CompareConfig::sentinel`].
pub const SENTINEL_ENV: &str = "MORPH_ORD_SENTINEL";
/// Environment variable overriding [`CompareConfig::nan`].
pub const NAN_ENV: &str = "MORPH_ORD_NAN";

/// How the positive-infinity sentinel is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentinelPolicy {
    /// The sentinel is above every value and equal to itself.
    #[default]
    Reflexive,
    /// The sentinel on the left is always greater, even against itself.
    LeftBiased,
    /// No special case; the sentinel is an ordinary float.
    Disabled,
}

/// How float pairs without a host ordering (NaN) are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NanPolicy {
    /// Equality, then `<`, as for other primitives. NaN is neither, so it is
    /// `GT` from both sides and even against itself; reflexivity and
    /// antisymmetry do not hold for NaN under this policy.
    #[default]
    Host,
    /// IEEE 754 total order, applied directly to numbers: NaN beyond the
    /// infinity of its sign, `-0.0 < 0.0`, every value equal to itself.
    Total,
}

macro_rules! impl_from_str_via_serde {
    ($($t:ty),*) => {
        $(
            impl FromStr for $t {
                type Err = OrdError;

                fn from_str(s: &str) -> Result<Self> {
                    let normalized = s.trim().to_lowercase().replace('-', "_");
                    serde_json::from_value(serde_json::Value::String(normalized))
                        .map_err(|_| OrdError::config(format!(
                            "unknown {} `{}`",
                            stringify!($t),
                            s
                        )))
                }
            }
        )*
    };
}

impl_from_str_via_serde!(SentinelPolicy, NanPolicy);

/// Configuration for a [`Comparer`](crate::dispatch::Comparer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareConfig {
    pub sentinel: SentinelPolicy,
    pub nan: NanPolicy,
}

impl CompareConfig {
    /// A left sentinel always wins, even against another sentinel.
    pub fn left_biased() -> Self {
        Self {
            sentinel: SentinelPolicy::LeftBiased,
            ..Self::default()
        }
    }

    pub fn with_sentinel(mut self, sentinel: SentinelPolicy) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn with_nan(mut self, nan: NanPolicy) -> Self {
        self.nan = nan;
        self
    }

    /// Parse from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        tracing::debug!(?config, "loaded comparison config from TOML");
        Ok(config)
    }

    /// Parse from a JSON document.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        tracing::debug!(?config, "loaded comparison config from JSON");
        Ok(config)
    }

    /// Apply `MORPH_ORD_SENTINEL` / `MORPH_ORD_NAN` overrides.
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply overrides from an explicit set of variables.
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            match key.as_ref() {
                SENTINEL_ENV => self.sentinel = value.as_ref().parse()?,
                NAN_ENV => self.nan = value.as_ref().parse()?,
                _ => continue,
            }
            tracing::debug!(key = key.as_ref(), value = value.as_ref(), "config override");
        }
        Ok(())
    }

    /// Whether comparing the sentinel with itself yields `EQ`.
    pub fn is_reflexive(&self) -> bool {
        self.sentinel != SentinelPolicy::LeftBiased
    }
}
