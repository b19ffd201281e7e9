//! The frameless window: creation, message routing and per-message
//! handlers.
//!
//! Native windows only hand their procedure an `HWND`, so each live window
//! is bound in a thread-local [`HandleRegistry`] from the moment
//! `CreateWindowExW` returns until `WM_NCDESTROY`. Messages arriving
//! outside that span (creation-time messages, or after the owner was
//! dropped) get default processing.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use modern_window_core::config::{PaintConfig, ResizeBorderConfig, TitleBarConfig};
use modern_window_core::input::{self, ButtonAction};
use modern_window_core::{
    ChromeMetrics, ChromeState, ChromeStyle, Config, HandleRegistry, HitZone, Point, Rect,
    ResizePolicy, WindowResult, log_debug, log_info, sizing,
};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    COLOR_WINDOW, GetSysColorBrush, InvalidateRect, ScreenToClient, UpdateWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DestroyWindow,
    GetClientRect, IDC_ARROW, IsZoomed, LoadCursorW, MINMAXINFO, NCCALCSIZE_PARAMS,
    PostQuitMessage, RegisterClassW, SW_SHOWNORMAL, SendMessageW, ShowWindow, WINDOW_EX_STYLE,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WNDCLASSW, WS_OVERLAPPEDWINDOW,
};
use windows::core::{PCWSTR, w};

use crate::message::{self, Message, Outcome};
use crate::{build_number, dpi, frame, monitor, paint, rect_from_win, rect_to_win, wide};

/// `MK_LBUTTON` key-state flag for synthesized mouse messages.
const MK_LBUTTON: usize = 0x0001;

const CLASS_NAME: PCWSTR = w!("ModernWindowClass");

static REGISTER_CLASS: Once = Once::new();

thread_local! {
    static WINDOWS: RefCell<HandleRegistry<WindowState>> = RefCell::new(HandleRegistry::new());
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        // SAFETY: the class name is a static wide string and the window
        // procedure lives for the whole process.
        unsafe {
            let wc = WNDCLASSW {
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(wnd_proc),
                hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
                hbrBackground: GetSysColorBrush(COLOR_WINDOW),
                lpszClassName: CLASS_NAME,
                ..Default::default()
            };
            RegisterClassW(&wc);
        }
    });
}

/// A top-level window with the native caption replaced by a custom
/// title bar.
///
/// Owns the window's state; dropping it destroys the window.
pub struct ModernWindow {
    state: Rc<WindowState>,
}

impl ModernWindow {
    /// Creates the window, strips its native frame and binds it for
    /// message routing. The window starts hidden; call [`show`].
    ///
    /// [`show`]: Self::show
    pub fn create(owner: Option<HWND>, title: &str, config: &Config) -> WindowResult<Self> {
        ensure_class_registered();

        let title_wide = wide(title);
        // SAFETY: class is registered and title_wide outlives the call.
        let hwnd = unsafe {
            CreateWindowExW(
                WINDOW_EX_STYLE::default(),
                CLASS_NAME,
                PCWSTR(title_wide.as_ptr()),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                owner,
                None,
                None,
                None,
            )?
        };

        let version = build_number::windows_version();
        let policy = config.resize_border.policy.resolve(version);
        let state = Rc::new(WindowState {
            hwnd,
            chrome: ChromeState::new(policy),
            title_bar: config.title_bar.clone(),
            resize_border: config.resize_border.clone(),
            paint: config.paint.clone(),
        });
        WINDOWS.with_borrow_mut(|windows| windows.insert(handle_key(hwnd), &state));

        let window = Self { state };
        // On failure `window` drops here and destroys the native window.
        frame::strip_native_frame(hwnd)?;

        log_info!(
            "Created window 0x{:X} on {version} with {policy:?} hit testing",
            handle_key(hwnd)
        );
        Ok(window)
    }

    /// Makes the window visible and paints it.
    pub fn show(&self) {
        unsafe {
            let _ = ShowWindow(self.state.hwnd, SW_SHOWNORMAL);
        }
        self.state.update();
    }

    /// The resize hit-test policy this window resolved at creation.
    pub fn policy(&self) -> ResizePolicy {
        self.state.chrome.policy()
    }
}

impl Drop for ModernWindow {
    fn drop(&mut self) {
        // Fails harmlessly if the user already closed the window.
        unsafe {
            let _ = DestroyWindow(self.state.hwnd);
        }
    }
}

/// Per-window state reachable from the window procedure.
///
/// Handlers take `&self` and keep mutable data in cells, so a handler
/// that triggers a nested message (painting, synthesized clicks) can be
/// re-entered safely.
struct WindowState {
    hwnd: HWND,
    chrome: ChromeState,
    title_bar: TitleBarConfig,
    resize_border: ResizeBorderConfig,
    paint: PaintConfig,
}

impl WindowState {
    fn handle(&self, message: Message<'_>, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Outcome {
        match message {
            Message::PositionChanged => {
                self.relayout();
                Outcome::Default
            }
            Message::GetMinMaxInfo(info) => {
                self.fill_max_info(info);
                Outcome::Handled(LRESULT(0))
            }
            Message::CalcSize(params) => self.calc_client_rect(params, msg, wparam, lparam),
            Message::Activate => {
                self.update();
                Outcome::Default
            }
            Message::NcButton {
                action,
                hit,
                screen,
            } => self.nc_button(action, hit, screen),
            Message::HitTest { screen } => self.hit_test(screen, msg, wparam, lparam),
            Message::Paint => {
                let dpi = dpi::window_dpi(self.hwnd);
                let style = ChromeStyle::from_config(&self.paint, dpi);
                paint::paint_window(self.hwnd, &self.chrome.zones(), &style);
                Outcome::Handled(LRESULT(0))
            }
            Message::Destroy => {
                unsafe { PostQuitMessage(0) };
                Outcome::Default
            }
            Message::NcDestroy => {
                WINDOWS.with_borrow_mut(|windows| windows.remove(handle_key(self.hwnd)));
                log_debug!("Window 0x{:X} destroyed", handle_key(self.hwnd));
                Outcome::Default
            }
            Message::Other => Outcome::Default,
        }
    }

    fn update(&self) {
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), None, false);
            let _ = UpdateWindow(self.hwnd);
        }
    }

    fn is_maximized(&self) -> bool {
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    fn client_rect(&self) -> Option<Rect> {
        let mut rc = RECT::default();
        unsafe { GetClientRect(self.hwnd, &mut rc) }.ok()?;
        Some(rect_from_win(rc))
    }

    fn screen_to_client(&self, screen: Point) -> Point {
        let mut pt = POINT {
            x: screen.x,
            y: screen.y,
        };
        unsafe {
            let _ = ScreenToClient(self.hwnd, &mut pt);
        }
        Point::new(pt.x, pt.y)
    }

    /// Recomputes the hot zones and resize border for the current size.
    fn relayout(&self) {
        let Some(client) = self.client_rect() else {
            return;
        };
        let dpi = dpi::window_dpi(self.hwnd);
        let metrics = ChromeMetrics::scaled(&self.title_bar, dpi);
        let border = dpi::resize_border(&self.resize_border, dpi);
        self.chrome.relayout(client.width, &metrics, border);
        log_debug!(
            "Relayout 0x{:X}: width {} dpi {dpi} zones {:?}",
            handle_key(self.hwnd),
            client.width,
            self.chrome.zones()
        );
    }

    /// Maximizes onto the work area instead of over the taskbar.
    fn fill_max_info(&self, info: &mut MINMAXINFO) {
        let proposed = Rect::new(
            info.ptMaxPosition.x,
            info.ptMaxPosition.y,
            info.ptMaxSize.x,
            info.ptMaxSize.y,
        );
        let rect = sizing::maximized_rect(proposed, monitor::work_area_for_window(self.hwnd));
        info.ptMaxPosition = POINT {
            x: rect.x,
            y: rect.y,
        };
        info.ptMaxSize = POINT {
            x: rect.width,
            y: rect.height,
        };
    }

    fn calc_client_rect(
        &self,
        params: *mut NCCALCSIZE_PARAMS,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> Outcome {
        // SAFETY: `params` is the NCCALCSIZE_PARAMS delivered with this
        // WM_NCCALCSIZE; no reference to it is held across DefWindowProcW.
        unsafe {
            let proposed = rect_from_win((*params).rgrc[0]);

            if self.is_maximized() {
                let work_area = monitor::work_area_for_window(self.hwnd);
                (*params).rgrc[0] = rect_to_win(sizing::maximized_client_rect(proposed, work_area));
                return Outcome::Handled(LRESULT(0));
            }

            let result = DefWindowProcW(self.hwnd, msg, wparam, lparam);
            let computed = rect_from_win((*params).rgrc[0]);
            (*params).rgrc[0] = rect_to_win(sizing::restored_client_rect(proposed, computed));
            Outcome::Handled(result)
        }
    }

    /// Turns non-client clicks on the snap area into client clicks so the
    /// application sees them; everything else gets default handling.
    fn nc_button(&self, action: ButtonAction, hit: HitZone, screen: Point) -> Outcome {
        if action == ButtonAction::Press {
            self.update();
        }

        let client = self.screen_to_client(screen);
        let Some(click) = input::translate_nc_click(action, hit, client) else {
            return Outcome::Default;
        };

        let msg = match click.action {
            ButtonAction::Press => WM_LBUTTONDOWN,
            ButtonAction::Release => WM_LBUTTONUP,
        };
        unsafe {
            SendMessageW(
                self.hwnd,
                msg,
                Some(WPARAM(MK_LBUTTON)),
                Some(LPARAM(input::pack_point(click.at))),
            );
        }
        Outcome::Handled(LRESULT(0))
    }

    fn hit_test(&self, screen: Point, msg: u32, wparam: WPARAM, lparam: LPARAM) -> Outcome {
        let point = self.screen_to_client(screen);
        classify_hit(
            &self.chrome,
            self.client_rect(),
            point,
            self.is_maximized(),
            || {
                let code = unsafe { DefWindowProcW(self.hwnd, msg, wparam, lparam) };
                message::zone_from_code(code.0)
            },
        )
    }
}

/// Answers `WM_NCHITTEST` from the chrome state.
///
/// Without a client rectangle there is nothing to measure the border
/// against, so the message goes to default processing.
fn classify_hit(
    chrome: &ChromeState,
    client: Option<Rect>,
    point: Point,
    maximized: bool,
    os_default: impl FnOnce() -> HitZone,
) -> Outcome {
    let Some(client) = client else {
        return Outcome::Default;
    };
    let zone = chrome.hit_test(point, client, maximized, os_default);
    Outcome::Handled(message::zone_result(zone))
}

fn handle_key(hwnd: HWND) -> usize {
    hwnd.0 as usize
}

/// Window procedure for every window of this class.
///
/// The registry borrow ends before the handler runs, so nested messages
/// can look the window up again.
unsafe extern "system" fn wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let Some(state) = WINDOWS.with_borrow_mut(|windows| windows.get(handle_key(hwnd))) else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    // SAFETY: the parameters are the ones delivered with `msg`.
    let message = unsafe { Message::decode(msg, wparam, lparam) };
    match state.handle(message, msg, wparam, lparam) {
        Outcome::Handled(result) => result,
        Outcome::Default => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
