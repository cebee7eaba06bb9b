// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Geometric epsilon used for degenerate-direction checks.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-5;
/// Geometric epsilon used for degenerate-direction checks.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-9;

/// Minimum span (in model units) a pillar or brace must exceed to be emitted.
/// Anything shorter would be a zero-length or sliver primitive.
pub const SPAN_TOLERANCE: Real = 1e-3;

// Sqrt 2
/// √2, the length of a 45° beam per unit of vertical drop
#[cfg(feature = "f32")]
pub const SQRT_2: Real = core::f32::consts::SQRT_2;
/// √2, the length of a 45° beam per unit of vertical drop
#[cfg(feature = "f64")]
pub const SQRT_2: Real = core::f64::consts::SQRT_2;

// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
// Unit conversion
// ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~
pub const INCH: Real = 25.4;
pub const MM: Real = 1.0;
