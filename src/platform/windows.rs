//! General Windows platform utilities
//!
//! Conversions between Win32 types and the domain types the rest of the
//! crate works with.

use crate::domain::core::WindowEdges;
use crate::domain::window::WindowHandle;
use windows::Win32::Foundation::{HWND, RECT};

/// Converts a window handle, mapping the null handle to None
pub fn handle_from_hwnd(hwnd: HWND) -> Option<WindowHandle> {
    if hwnd.0 == 0 {
        None
    } else {
        Some(WindowHandle(hwnd.0))
    }
}

/// Converts a domain handle back to a Win32 handle
pub fn hwnd_from_handle(handle: WindowHandle) -> HWND {
    HWND(handle.0)
}

/// Converts a Windows RECT to raw window edges
///
/// # Arguments
/// * `rect` - Windows RECT structure
///
/// # Returns
/// Edges exactly as reported, no size arithmetic applied
pub fn win32_rect_to_edges(rect: &RECT) -> WindowEdges {
    WindowEdges {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}
