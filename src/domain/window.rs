//! Keyboard window identity and closed-state classification
//!
//! Pure helpers, testable without Win32. The platform layer supplies the
//! handle lookup and style query; this module decides what they mean.

/// Opaque OS window identifier
///
/// Always looked up fresh by class name; the keyboard recreates its window,
/// so a handle is never kept longer than one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Window style the keyboard window carries once it has collapsed
///
/// Observed on the Windows 10 touch keyboard. Other keyboard builds may never
/// report it, in which case the closed-state poll never completes.
pub const CLOSED_WINDOW_STYLE: u32 = 2617245696;

/// Index passed to `GetWindowLong` for the style query (`GWL_STYLE`)
pub const WINDOW_STYLE_INDEX: i32 = -16;

/// `WM_SYSCOMMAND`
pub const SYSCOMMAND_MESSAGE: u32 = 274;

/// `SC_CLOSE`, the system-menu close command
pub const SYSCOMMAND_CLOSE: usize = 61536;

/// Decides whether the keyboard is closed
///
/// # Arguments
/// * `handle` - Result of the class-name lookup
/// * `closed_style` - Style bits that mark the collapsed window
/// * `style_of` - Style query, only invoked when a window exists
///
/// # Returns
/// true when there is no window, or its style equals `closed_style` exactly
pub fn is_closed<F>(handle: Option<WindowHandle>, closed_style: u32, style_of: F) -> bool
where
    F: FnOnce(WindowHandle) -> u32,
{
    match handle {
        None => true,
        Some(hwnd) => style_of(hwnd) == closed_style,
    }
}
