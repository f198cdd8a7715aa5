/// Platform capability queries
///
/// File creation ("birth") time is not available everywhere. Callers go through
/// [`creation_time`], which returns `None` wherever the platform or the
/// filesystem cannot provide it. Absence is never an error.

use std::fs::Metadata;
use std::time::SystemTime;

use log::debug;

/// Whether this target can report creation times at all
#[cfg(any(windows, target_os = "macos", target_os = "ios", target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "linux", target_os = "android"))]
pub const fn supports_creation_time() -> bool {
    true
}

#[cfg(not(any(windows, target_os = "macos", target_os = "ios", target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "linux", target_os = "android")))]
pub const fn supports_creation_time() -> bool {
    false
}

/// Best-effort creation time for a file.
///
/// On Linux this depends on `statx` support in the kernel and the filesystem,
/// so a supported target may still yield `None` for a given file.
pub fn creation_time(metadata: &Metadata) -> Option<SystemTime> {
    if !supports_creation_time() {
        return None;
    }

    match metadata.created() {
        Ok(created) => Some(created),
        Err(e) => {
            debug!("Creation time unavailable: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_time_never_fails() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "x").expect("Failed to write file");
        let metadata = std::fs::metadata(&path).expect("Failed to stat file");

        // Either outcome is acceptable, but a present value must be sane.
        if let Some(created) = creation_time(&metadata) {
            assert!(created <= SystemTime::now());
        }
    }
}
