/// Border outline geometry and corner smoothing.
pub mod border;
/// The per-frame transformation.
pub mod engine;
/// Frame-sampling shader and its lazy cache slot.
pub mod shader;
