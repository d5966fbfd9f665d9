/// The serde-facing widget style.
pub mod style;
