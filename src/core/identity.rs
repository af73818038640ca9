use std::ffi::CStr;

/// Name shown in the prompt when the effective user has no passwd entry.
pub const UNKNOWN_USER: &str = "<unknown>";

const MAX_PASSWD_BUF: usize = 1 << 16;

/// Login name of the effective user, or [`UNKNOWN_USER`].
pub fn effective_user() -> String {
    lookup_user(unsafe { libc::geteuid() }).unwrap_or_else(|| UNKNOWN_USER.to_string())
}

fn lookup_user(uid: libc::uid_t) -> Option<String> {
    let mut buf: Vec<libc::c_char> = vec![0; 1024];

    loop {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();

        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };

        if rc == libc::ERANGE && buf.len() < MAX_PASSWD_BUF {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 || result.is_null() || pwd.pw_name.is_null() {
            return None;
        }

        // pw_name points into `buf`, which is still alive here.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Some(name.to_string_lossy().into_owned());
    }
}
