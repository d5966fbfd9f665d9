/// The `Canvas` drawing seam and its paint types.
pub mod canvas;
/// `vello_cpu` raster canvas.
pub mod cpu;
/// Shared premultiplied frame storage.
pub mod frame;
/// Readback of rasterized canvases.
pub mod output;
/// Process-wide pixmap pool.
pub mod pool;
/// Recording canvas.
pub mod record;
