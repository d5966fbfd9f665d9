/// Color literal parsing (`#RRGGBB`, `#AARRGGBB`, named colors).
pub mod color;
/// Composite modes and their `vello_cpu` blend mapping.
pub mod mode;
