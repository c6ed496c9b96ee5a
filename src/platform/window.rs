//! Keyboard window lookup and queries
//!
//! This module handles:
//! - Finding the keyboard window by class name
//! - Reading its style bits and bounding rectangle
//! - Posting the system close command to it

use crate::domain::core::WindowEdges;
use crate::domain::window::{SYSCOMMAND_CLOSE, SYSCOMMAND_MESSAGE, WINDOW_STYLE_INDEX, WindowHandle};
use crate::error::TabTipError;
use crate::platform::windows::{handle_from_hwnd, hwnd_from_handle, win32_rect_to_edges};
use windows::Win32::Foundation::*;
use windows::Win32::UI::WindowsAndMessaging::*;
use windows::core::{HSTRING, PCWSTR};

/// Finds a top-level window by class name
pub fn find_window(class: &str) -> Option<WindowHandle> {
    let class = HSTRING::from(class);
    let hwnd = unsafe { FindWindowW(&class, PCWSTR::null()) };
    handle_from_hwnd(hwnd)
}

/// Reads the window style bits
///
/// `GetWindowLongW` reports failure as 0, which never matches a real style.
pub fn window_style(handle: WindowHandle) -> u32 {
    unsafe {
        GetWindowLongW(
            hwnd_from_handle(handle),
            WINDOW_LONG_PTR_INDEX(WINDOW_STYLE_INDEX),
        ) as u32
    }
}

/// Gets the window's bounding rectangle in screen coordinates
pub fn window_rect(handle: WindowHandle) -> Result<WindowEdges, TabTipError> {
    let mut rect = RECT::default();
    unsafe { GetWindowRect(hwnd_from_handle(handle), &mut rect) }
        .map_err(|e| TabTipError::RectQueryFailed(e.message().to_string()))?;

    Ok(win32_rect_to_edges(&rect))
}

/// Posts `WM_SYSCOMMAND`/`SC_CLOSE`, same as picking Close from the system menu
pub fn post_system_close(handle: WindowHandle) -> Result<(), TabTipError> {
    unsafe {
        PostMessageW(
            hwnd_from_handle(handle),
            SYSCOMMAND_MESSAGE,
            WPARAM(SYSCOMMAND_CLOSE),
            LPARAM(0),
        )
    }
    .map_err(|e| TabTipError::PostMessageFailed(e.message().to_string()))
}
