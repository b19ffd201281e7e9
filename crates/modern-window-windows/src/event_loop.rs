use windows::Win32::UI::WindowsAndMessaging::{DispatchMessageW, GetMessageW, MSG, TranslateMessage};

/// The Win32 message pump. Blocks until `WM_QUIT` and returns its exit
/// code.
///
/// `GetMessageW` reports -1 on failure; that also ends the loop, with
/// exit code 1.
pub fn run() -> i32 {
    let mut msg = MSG::default();

    loop {
        let status = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match status.0 {
            0 => return msg.wParam.0 as i32,
            -1 => return 1,
            _ => unsafe {
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            },
        }
    }
}
