/// Capability seam for the elevation gate, so the startup flow is testable
/// without a real OS underneath.
pub trait PrivilegeProvider {
    /// Whether the current process holds administrator rights. Fails closed.
    fn is_elevated(&self) -> bool;

    /// Relaunches the current executable with the original arguments under
    /// an elevated context. Returns whether the launch request itself
    /// succeeded, not whether elevation was granted.
    fn request_elevation(&self) -> bool;
}

pub struct ShellPrivilege;

#[cfg(target_os = "windows")]
impl PrivilegeProvider for ShellPrivilege {
    fn is_elevated(&self) -> bool {
        unsafe { windows_sys::Win32::UI::Shell::IsUserAnAdmin() != 0 }
    }

    fn request_elevation(&self) -> bool {
        use windows_sys::Win32::UI::Shell::ShellExecuteW;
        use windows_sys::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

        let Ok(exe) = std::env::current_exe() else {
            return false;
        };
        let params = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

        let verb = to_wide("runas");
        let file = to_wide(&exe.to_string_lossy());
        let params = to_wide(&params);

        // ShellExecuteW reports success with a value greater than 32.
        let result = unsafe {
            ShellExecuteW(
                std::ptr::null_mut(),
                verb.as_ptr(),
                file.as_ptr(),
                params.as_ptr(),
                std::ptr::null(),
                SW_SHOWNORMAL,
            )
        };
        result as usize > 32
    }
}

#[cfg(target_os = "windows")]
fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

// Elevation is a Windows concern. Off-Windows builds exist for development
// and tests, so the gate lets the process through and never relaunches.
#[cfg(not(target_os = "windows"))]
impl PrivilegeProvider for ShellPrivilege {
    fn is_elevated(&self) -> bool {
        true
    }

    fn request_elevation(&self) -> bool {
        false
    }
}
