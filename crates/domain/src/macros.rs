//! Macro for implementing Display and FromStr for wire-tag enums
//!
//! Closed enums that travel as lowercase string tags (value kinds, host field
//! types, token schemes) share one Display/FromStr implementation so the tag
//! table is written once per enum.
//!
//! # Example
//!
//! ```rust
//! use qbgeo_domain::impl_tag_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Shape {
//!     Point,
//!     Polygon,
//! }
//!
//! impl_tag_conversions!(Shape {
//!     Point => "point",
//!     Polygon => "polygon",
//! });
//!
//! assert_eq!(Shape::Point.to_string(), "point");
//! ```

/// Implements Display and FromStr traits for tag enums
///
/// This macro generates:
/// - Display trait: writes the variant's wire tag
/// - FromStr trait: parses case-insensitive tags to enum variants
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their lowercase wire
///   tags
///
/// # Features
///
/// - Case-insensitive parsing (e.g., "DATE-ONLY", "date-only", "Date-Only" all work)
/// - Consistent lowercase string output
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_tag_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
