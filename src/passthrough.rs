use anyhow::anyhow;

/// OS-level click-through styling for the overlay window.
///
/// Letting pointer events fall through to the windows beneath requires
/// elevated window-style flags that not every platform exposes.
/// Implementations that cannot provide the capability return an error; the
/// session logs it once and the overlay keeps running without transparency.
pub trait ClickThrough: Send {
    /// Apply click-through styling to the window with the given title.
    fn apply(&mut self, window_title: &str) -> anyhow::Result<()>;
}

/// Provider for the current platform.
pub fn detect() -> Box<dyn ClickThrough> {
    #[cfg(windows)]
    {
        Box::new(Win32ClickThrough)
    }
    #[cfg(not(windows))]
    {
        Box::new(UnsupportedClickThrough)
    }
}

#[cfg(windows)]
pub struct Win32ClickThrough;

#[cfg(windows)]
impl ClickThrough for Win32ClickThrough {
    fn apply(&mut self, window_title: &str) -> anyhow::Result<()> {
        use windows::core::PCWSTR;
        use windows::Win32::Foundation::COLORREF;
        use windows::Win32::UI::WindowsAndMessaging::{
            FindWindowW, GetWindowLongPtrW, SetLayeredWindowAttributes, SetWindowLongPtrW,
            GWL_EXSTYLE, LWA_ALPHA, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TRANSPARENT,
        };

        let title = to_wide(window_title);
        let hwnd = unsafe { FindWindowW(PCWSTR::null(), PCWSTR(title.as_ptr())) }
            .map_err(|err| anyhow!("overlay window '{window_title}' not found: {err}"))?;
        if hwnd.0.is_null() {
            return Err(anyhow!("overlay window '{window_title}' not found"));
        }

        unsafe {
            let styles = GetWindowLongPtrW(hwnd, GWL_EXSTYLE)
                | (WS_EX_LAYERED.0 | WS_EX_TRANSPARENT.0 | WS_EX_NOACTIVATE.0) as isize;
            SetWindowLongPtrW(hwnd, GWL_EXSTYLE, styles);
            // A layered window stays invisible until its attributes are set.
            SetLayeredWindowAttributes(hwnd, COLORREF(0), 0xff, LWA_ALPHA)?;
        }
        Ok(())
    }
}

#[cfg(windows)]
fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(not(windows))]
pub struct UnsupportedClickThrough;

#[cfg(not(windows))]
impl ClickThrough for UnsupportedClickThrough {
    fn apply(&mut self, _window_title: &str) -> anyhow::Result<()> {
        Err(anyhow!(
            "window click-through styling is not supported on this platform"
        ))
    }
}
