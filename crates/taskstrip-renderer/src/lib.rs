//! GPU painting of the taskbar strip: one filled quad per item with its
//! label on top.

pub mod gpu;
pub mod panel;
pub mod quad;
pub mod scene;
pub mod text;

pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use panel::PanelRenderer;
pub use quad::{QuadInstance, QuadRenderer};
pub use scene::{LabelPaint, PanelScene, SlotPaint, Theme};
pub use text::LabelRenderer;
