//! Gate Profiles: the constants every stage is built from
//!
//! The `reagent` profile is the reference gate. Other profiles can be
//! loaded from YAML; they go through [`GateProfile::validate`] first so a
//! stage never receives offsets that make no sense together.

use flaggate_core::GateError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateProfile {
    /// Profile name (ex: "reagent@1.0")
    pub name: String,

    // === Length ===

    /// Exact byte length a candidate must have
    pub target_len: usize,

    // === Format ===

    /// Literal every candidate must start with, opening delimiter included
    pub prefix: String,

    /// Literal every candidate must end with
    pub suffix: String,

    // === Inner content ===

    /// Candidates shorter than this fail the digest and checksum stages
    /// before any inner content is sliced
    pub min_len: usize,

    /// FNV-1a digest the inner content must hash to
    #[serde(with = "hex_u32")]
    pub expected_digest: u32,

    /// Byte sum of the inner content, modulo 256
    pub expected_checksum: u8,
}

impl GateProfile {
    /// Create the reference `reagent{...}` profile
    pub fn reagent() -> Self {
        Self {
            name: "reagent@1.0".to_string(),
            target_len: 23,
            prefix: "reagent{".to_string(),
            suffix: "}".to_string(),
            min_len: 10,
            expected_digest: 0x2d95cbe1,
            expected_checksum: 0x76,
        }
    }

    /// Load and validate a profile from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, GateError> {
        let profile: Self =
            serde_yaml::from_str(yaml).map_err(|e| GateError::ProfileError(e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GateError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            GateError::ProfileError(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Serialize the profile back to YAML
    pub fn to_yaml(&self) -> Result<String, GateError> {
        serde_yaml::to_string(self).map_err(|e| GateError::SerializeError(e.to_string()))
    }

    /// Look up a built-in profile by name. Only "reagent" ships today.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "reagent" | "reagent@1.0" => Some(Self::reagent()),
            _ => None,
        }
    }

    /// Check that the offsets and lengths are consistent
    pub fn validate(&self) -> Result<(), GateError> {
        if self.prefix.is_empty() {
            return Err(GateError::ProfileError("prefix must not be empty".to_string()));
        }
        if self.suffix.is_empty() {
            return Err(GateError::ProfileError("suffix must not be empty".to_string()));
        }
        let delimiters = self.prefix.len() + self.suffix.len();
        if self.min_len < delimiters {
            return Err(GateError::ProfileError(format!(
                "min_len {} is shorter than prefix+suffix ({})",
                self.min_len, delimiters
            )));
        }
        if self.target_len < self.min_len {
            return Err(GateError::ProfileError(format!(
                "target_len {} is below min_len {}",
                self.target_len, self.min_len
            )));
        }
        Ok(())
    }

    /// Length of the inner content for a candidate of `target_len` bytes
    pub fn inner_len(&self) -> usize {
        self.target_len.saturating_sub(self.prefix.len() + self.suffix.len())
    }
}

impl Default for GateProfile {
    fn default() -> Self {
        Self::reagent()
    }
}

/// Digests read better as hex in YAML; plain integers are accepted too.
mod hex_u32 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{:08x}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(u32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(v) => Ok(v),
            Raw::Text(s) => {
                let digits = s
                    .strip_prefix("0x")
                    .or_else(|| s.strip_prefix("0X"))
                    .unwrap_or(&s);
                u32::from_str_radix(digits, 16).map_err(de::Error::custom)
            }
        }
    }
}
