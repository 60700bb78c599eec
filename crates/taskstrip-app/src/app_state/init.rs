//! Panel window and renderer creation.

use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::window::{Window, WindowAttributes, WindowLevel};

use taskstrip_common::WindowHandle;
use taskstrip_renderer::PanelRenderer;

use super::core::TaskstripApp;
use super::title::window_title;
use super::types::FALLBACK_WIDTH;

impl TaskstripApp {
    /// Create the undecorated panel window across the top of the primary
    /// monitor and its renderer. Returns `false` if either could not be
    /// created and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let (origin_x, width) = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next())
            .map(|monitor| (monitor.position().x, monitor.size().width))
            .unwrap_or((0, FALLBACK_WIDTH));

        let attrs = WindowAttributes::default()
            .with_title(window_title(0))
            .with_decorations(false)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_inner_size(PhysicalSize::new(width, self.config.panel.height))
            .with_position(PhysicalPosition::new(origin_x, 0));

        #[cfg(target_os = "linux")]
        let attrs = {
            use winit::platform::x11::{WindowAttributesExtX11, WindowType};
            attrs.with_x11_window_type(vec![WindowType::Dock])
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create panel window: {e}");
                return false;
            }
        };

        match pollster::block_on(PanelRenderer::new(window.clone())) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        let own = own_window_handle(&window);
        if own.is_none() {
            tracing::warn!("panel window is not an X11 window; it may list itself");
        }
        self.strip.set_own_handle(own);
        self.strip.set_width(f64::from(window.inner_size().width));
        window.request_redraw();
        self.window = Some(window);

        tracing::info!(
            width,
            height = self.config.panel.height,
            own = ?own.map(|h| h.to_string()),
            "panel window created"
        );
        true
    }
}

/// The X11 id of `window`, as the window manager reports it.
fn own_window_handle(window: &Window) -> Option<WindowHandle> {
    let handle = window.window_handle().ok()?;
    match handle.as_raw() {
        RawWindowHandle::Xlib(h) => Some(WindowHandle(u64::from(h.window))),
        RawWindowHandle::Xcb(h) => Some(WindowHandle::from(h.window.get())),
        _ => None,
    }
}
