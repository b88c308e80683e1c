//! Home Directory Lookup
//!
//! Tilde expansion asks an explicit lookup for home directories instead of
//! reading process-wide state, so the expansion core stays pure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Resolves `~` (user `None`) and `~name` (user `Some(name)`).
pub trait HomeLookup: Send + Sync {
    fn lookup_home(&self, user: Option<&str>) -> Option<String>;
}

impl<F> HomeLookup for F
where
    F: Fn(Option<&str>) -> Option<String> + Send + Sync,
{
    fn lookup_home(&self, user: Option<&str>) -> Option<String> {
        self(user)
    }
}

/// A fixed table of home directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeDirectories {
    /// Home of the invoking user
    pub current: Option<String>,
    pub users: HashMap<String, String>,
}

impl HomeDirectories {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: Some(current.into()),
            users: HashMap::new(),
        }
    }

    pub fn with_user(mut self, name: impl Into<String>, home: impl Into<String>) -> Self {
        self.users.insert(name.into(), home.into());
        self
    }
}

impl HomeLookup for HomeDirectories {
    fn lookup_home(&self, user: Option<&str>) -> Option<String> {
        match user {
            None => self.current.clone(),
            Some(name) => self.users.get(name).cloned(),
        }
    }
}

/// Looks up the real system: `$HOME` for the current user, then the
/// password database.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHomeLookup;

impl HomeLookup for SystemHomeLookup {
    fn lookup_home(&self, user: Option<&str>) -> Option<String> {
        match user {
            None => std::env::var("HOME").ok().or_else(passwd::current_user_home),
            Some(name) => passwd::user_home(name),
        }
    }
}

#[cfg(unix)]
mod passwd {
    use std::ffi::{CStr, CString};

    const INITIAL_BUFFER: usize = 1024;
    const MAX_BUFFER: usize = 1 << 20;

    /// Run a reentrant passwd query, growing the scratch buffer on ERANGE.
    fn query<F>(mut call: F) -> Option<String>
    where
        F: FnMut(
            *mut libc::passwd,
            *mut libc::c_char,
            libc::size_t,
            *mut *mut libc::passwd,
        ) -> libc::c_int,
    {
        let mut buf: Vec<libc::c_char> = vec![0; INITIAL_BUFFER];
        loop {
            // SAFETY: passwd is a plain C struct for which all-zero is valid.
            let mut entry: libc::passwd = unsafe { std::mem::zeroed() };
            let mut result: *mut libc::passwd = std::ptr::null_mut();
            let rc = call(
                &mut entry as *mut libc::passwd,
                buf.as_mut_ptr(),
                buf.len(),
                &mut result as *mut *mut libc::passwd,
            );

            if rc == libc::ERANGE && buf.len() < MAX_BUFFER {
                buf.resize(buf.len() * 2, 0);
                continue;
            }
            if rc != 0 || result.is_null() || entry.pw_dir.is_null() {
                return None;
            }
            // SAFETY: on success pw_dir points into `buf`, which is still alive.
            let dir = unsafe { CStr::from_ptr(entry.pw_dir) };
            return Some(dir.to_string_lossy().into_owned());
        }
    }

    pub fn user_home(name: &str) -> Option<String> {
        let c_name = CString::new(name).ok()?;
        query(|entry, buf, len, result| {
            // SAFETY: all pointers are valid for the duration of the call.
            unsafe { libc::getpwnam_r(c_name.as_ptr(), entry, buf, len, result) }
        })
    }

    pub fn current_user_home() -> Option<String> {
        // SAFETY: getuid has no preconditions.
        let uid = unsafe { libc::getuid() };
        query(|entry, buf, len, result| {
            // SAFETY: all pointers are valid for the duration of the call.
            unsafe { libc::getpwuid_r(uid, entry, buf, len, result) }
        })
    }
}

#[cfg(not(unix))]
mod passwd {
    pub fn user_home(_name: &str) -> Option<String> {
        None
    }

    pub fn current_user_home() -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_directories_lookup() {
        let homes = HomeDirectories::new("/home/bob").with_user("alice", "/home/alice");
        assert_eq!(homes.lookup_home(None), Some("/home/bob".to_string()));
        assert_eq!(homes.lookup_home(Some("alice")), Some("/home/alice".to_string()));
        assert_eq!(homes.lookup_home(Some("nobody-here")), None);
    }

    #[test]
    fn test_empty_table() {
        let homes = HomeDirectories::default();
        assert_eq!(homes.lookup_home(None), None);
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |user: Option<&str>| user.map(|u| format!("/users/{}", u));
        assert_eq!(lookup.lookup_home(Some("x")), Some("/users/x".to_string()));
        assert_eq!(lookup.lookup_home(None), None);
    }

    #[test]
    fn test_system_lookup_rejects_nul() {
        assert_eq!(SystemHomeLookup.lookup_home(Some("bad\0name")), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_lookup_unknown_user() {
        assert_eq!(
            SystemHomeLookup.lookup_home(Some("no-such-user-for-tilde-tests")),
            None
        );
    }
}
