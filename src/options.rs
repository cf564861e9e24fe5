//! Run-wide generation policy. One `Options` value is fixed for a whole run,
//! so optionality and emptiness never mix within one output.

pub const DEFAULT_TAG_PREFIX: &str = "json";

/// How scalar fields are typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Optionality {
    /// `Name string`
    #[default]
    Value,
    /// `Name *string`; scalars used as slice elements stay bare (`[]string`).
    Pointer,
}

/// Which source values count as empty (and thus carry `omitempty`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emptiness {
    /// Empty string, empty sequence, empty mapping.
    #[default]
    Canonical,
    /// Canonical plus the numeric zero literals `0` and `0.0`.
    ZeroValues,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Tag key such as `json` or `yaml`. Empty disables tags entirely.
    pub tag_prefix: String,
    pub optionality: Optionality,
    pub emptiness: Emptiness,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tag_prefix: DEFAULT_TAG_PREFIX.to_string(),
            optionality: Optionality::default(),
            emptiness: Emptiness::default(),
        }
    }
}

impl Options {
    pub fn with_tag_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.tag_prefix = prefix.into();
        self
    }

    pub fn pointers(mut self) -> Self {
        self.optionality = Optionality::Pointer;
        self
    }

    pub fn omit_zero_values(mut self) -> Self {
        self.emptiness = Emptiness::ZeroValues;
        self
    }
}
