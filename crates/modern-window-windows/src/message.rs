use modern_window_core::input::{self, ButtonAction};
use modern_window_core::{HitZone, Point};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    HTBOTTOM, HTBOTTOMLEFT, HTBOTTOMRIGHT, HTCAPTION, HTCLIENT, HTLEFT, HTMAXBUTTON, HTNOWHERE,
    HTRIGHT, HTTOP, HTTOPLEFT, HTTOPRIGHT, MINMAXINFO, NCCALCSIZE_PARAMS, WM_ACTIVATE,
    WM_DESTROY, WM_GETMINMAXINFO, WM_NCCALCSIZE, WM_NCDESTROY, WM_NCHITTEST, WM_NCLBUTTONDOWN,
    WM_NCLBUTTONUP, WM_PAINT, WM_WINDOWPOSCHANGED,
};

/// A window message decoded into the cases the chrome handles.
///
/// Anything else is [`Message::Other`] and goes to default processing.
pub(crate) enum Message<'a> {
    /// Position, size or z-order changed.
    PositionChanged,
    /// The window manager asks for the maximized geometry.
    GetMinMaxInfo(&'a mut MINMAXINFO),
    /// Client-rectangle calculation with valid-rects requested. Kept as a
    /// raw pointer because default processing writes through it too.
    CalcSize(*mut NCCALCSIZE_PARAMS),
    /// Activated or deactivated.
    Activate,
    /// Left button pressed or released over the non-client area.
    NcButton {
        action: ButtonAction,
        hit: HitZone,
        screen: Point,
    },
    /// Hit-test query at a screen point.
    HitTest { screen: Point },
    Paint,
    Destroy,
    /// Last message the window receives.
    NcDestroy,
    Other,
}

/// What the window procedure returns for a message.
pub(crate) enum Outcome {
    /// The handler produced the result.
    Handled(LRESULT),
    /// Fall through to `DefWindowProcW`.
    Default,
}

impl Message<'_> {
    /// Decodes a raw message.
    ///
    /// # Safety
    ///
    /// `wparam` and `lparam` must be the parameters delivered with `msg`
    /// to the window procedure that is still running.
    pub(crate) unsafe fn decode(msg: u32, wparam: WPARAM, lparam: LPARAM) -> Self {
        match msg {
            WM_WINDOWPOSCHANGED => Self::PositionChanged,
            // SAFETY: WM_GETMINMAXINFO carries a MINMAXINFO pointer valid
            // until the window procedure returns.
            WM_GETMINMAXINFO => match unsafe { (lparam.0 as *mut MINMAXINFO).as_mut() } {
                Some(info) => Self::GetMinMaxInfo(info),
                None => Self::Other,
            },
            WM_NCCALCSIZE if wparam.0 != 0 && lparam.0 != 0 => {
                Self::CalcSize(lparam.0 as *mut NCCALCSIZE_PARAMS)
            }
            WM_ACTIVATE => Self::Activate,
            WM_NCLBUTTONDOWN | WM_NCLBUTTONUP => Self::NcButton {
                action: if msg == WM_NCLBUTTONDOWN {
                    ButtonAction::Press
                } else {
                    ButtonAction::Release
                },
                hit: zone_from_code(wparam.0 as isize),
                screen: input::unpack_point(lparam.0),
            },
            WM_NCHITTEST => Self::HitTest {
                screen: input::unpack_point(lparam.0),
            },
            WM_PAINT => Self::Paint,
            WM_DESTROY => Self::Destroy,
            WM_NCDESTROY => Self::NcDestroy,
            _ => Self::Other,
        }
    }
}

/// Translates a Win32 `HT*` code into a [`HitZone`].
pub(crate) fn zone_from_code(code: isize) -> HitZone {
    let Ok(value) = u32::try_from(code) else {
        return HitZone::Other(code);
    };
    match value {
        HTNOWHERE => HitZone::Nowhere,
        HTCLIENT => HitZone::Client,
        HTCAPTION => HitZone::Caption,
        HTMAXBUTTON => HitZone::MaxButton,
        HTLEFT => HitZone::Left,
        HTRIGHT => HitZone::Right,
        HTTOP => HitZone::Top,
        HTTOPLEFT => HitZone::TopLeft,
        HTTOPRIGHT => HitZone::TopRight,
        HTBOTTOM => HitZone::Bottom,
        HTBOTTOMLEFT => HitZone::BottomLeft,
        HTBOTTOMRIGHT => HitZone::BottomRight,
        _ => HitZone::Other(code),
    }
}

/// Translates a [`HitZone`] into the `WM_NCHITTEST` result.
pub(crate) fn zone_result(zone: HitZone) -> LRESULT {
    let code = match zone {
        HitZone::Nowhere => HTNOWHERE,
        HitZone::Client => HTCLIENT,
        HitZone::Caption => HTCAPTION,
        HitZone::MaxButton => HTMAXBUTTON,
        HitZone::Left => HTLEFT,
        HitZone::Right => HTRIGHT,
        HitZone::Top => HTTOP,
        HitZone::TopLeft => HTTOPLEFT,
        HitZone::TopRight => HTTOPRIGHT,
        HitZone::Bottom => HTBOTTOM,
        HitZone::BottomLeft => HTBOTTOMLEFT,
        HitZone::BottomRight => HTBOTTOMRIGHT,
        HitZone::Other(code) => return LRESULT(code),
    };
    LRESULT(code as isize)
}
