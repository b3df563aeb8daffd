//! Generator configuration
//!
//! One [`GeneratorConfig`] is built per run (usually from CLI flags) and never changes afterwards.
//! Per-type state lives in the generation context instead.

/// Which method families to emit for every requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MethodFamilies {
    /// `Scan`/`Value` and `UnmarshalJSON`/`MarshalJSON`
    #[default]
    Both,
    /// `Scan`/`Value` only
    StorageOnly,
    /// `UnmarshalJSON`/`MarshalJSON` only
    MarshalOnly,
}

impl MethodFamilies {
    /// Return `true` if `sql.Scanner`/`driver.Valuer` methods are emitted.
    pub fn storage(self) -> bool {
        matches!(self, MethodFamilies::Both | MethodFamilies::StorageOnly)
    }

    /// Return `true` if `json.Unmarshaler`/`json.Marshaler` methods are emitted.
    pub fn marshal(self) -> bool {
        matches!(self, MethodFamilies::Both | MethodFamilies::MarshalOnly)
    }
}

/// Generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Method families to emit
    pub methods: MethodFamilies,
    /// Reject unknown values instead of falling back to the zero-value member
    pub error_on_unknown: bool,
    /// Use the type's `String()` method for the stored/serialized representation
    pub prefer_textual: bool,
    /// Log the unformatted buffer and per-type decisions
    pub debug: bool,
}

impl GeneratorConfig {
    /// Create a new config with default settings (both families, lenient unknown handling)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the method families
    pub fn with_methods(mut self, methods: MethodFamilies) -> Self {
        self.methods = methods;
        self
    }

    /// Set error-on-unknown
    pub fn with_error_on_unknown(mut self, enabled: bool) -> Self {
        self.error_on_unknown = enabled;
        self
    }

    /// Set the textual preference
    pub fn with_prefer_textual(mut self, enabled: bool) -> Self {
        self.prefer_textual = enabled;
        self
    }

    /// Set debug logging
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }
}
