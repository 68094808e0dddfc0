//! Document schema versions.
//!
//! Every version from [`MIN_SUPPORTED_VERSION`] to [`CURRENT_VERSION`]
//! decodes; encoding always writes [`CURRENT_VERSION`].

/// Oldest document version that still decodes.
pub const MIN_SUPPORTED_VERSION: u32 = 1;

/// Version written by the encoder.
pub const CURRENT_VERSION: u32 = 17;

/// `RotationEffectModifier` stores `angleUnit` + `angleSize` from this
/// version on; earlier documents carry a unit-less `angle` in degrees.
pub const ROTATION_UNITS_SINCE: u32 = 14;

/// `LineLimitModifier` stores a `min`/`max` range from this version on;
/// earlier documents carry a single `numberOfLines`.
pub const LINE_LIMIT_RANGE_SINCE: u32 = 16;

/// Variable-typed fields use the tagged binding shape from this version on.
pub const VARIABLE_BINDINGS_SINCE: u32 = 17;
