//! Repository Acquirer - scoped `git clone` into transient local storage.
//!
//! The working copy lives in a uniquely-named temporary directory owned by
//! [`AcquiredRepo`]; dropping it deletes the clone on every exit path,
//! including extraction failures, so repeated requests cannot leak disk.

use crate::error::AcquireError;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use tracing::{debug, info};

/// A materialized working copy. The backing directory is removed on drop.
pub struct AcquiredRepo {
    temp_dir: TempDir,
}

impl AcquiredRepo {
    /// Root path of the working copy.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Clone `url` into a fresh temporary directory.
///
/// Shallow clone: history is irrelevant to symbol extraction. Fails when the
/// location is unreachable, requires authentication, or the clone is
/// interrupted; the error carries git's stderr for the caller to surface.
pub fn clone_repository(url: &str) -> Result<AcquiredRepo, AcquireError> {
    if url.trim().is_empty() {
        return Err(AcquireError::EmptyUrl);
    }

    let temp_dir = TempDir::new()?;
    info!("cloning {} into {}", url, temp_dir.path().display());

    let output = Command::new("git")
        .arg("clone")
        .arg("--depth")
        .arg("1")
        .arg(url)
        .arg(temp_dir.path())
        .output()
        .map_err(AcquireError::GitUnavailable)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!("git clone failed: {}", stderr);
        return Err(AcquireError::CloneFailed {
            url: url.to_string(),
            stderr,
        });
    }

    Ok(AcquiredRepo { temp_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_url_is_rejected() {
        assert!(matches!(clone_repository(""), Err(AcquireError::EmptyUrl)));
        assert!(matches!(
            clone_repository("   "),
            Err(AcquireError::EmptyUrl)
        ));
    }

    #[test]
    fn test_unreachable_location_fails_and_cleans_up() {
        let result = clone_repository("file:///nonexistent/repo/path");
        let Err(AcquireError::CloneFailed { url, .. }) = result else {
            panic!("expected clone failure");
        };
        assert_eq!(url, "file:///nonexistent/repo/path");
    }

    #[test]
    fn test_local_repository_clone_round_trip() {
        // Build a tiny git repository on disk, then acquire it via file://.
        let source = tempfile::TempDir::new().unwrap();
        let run = |args: &[&str]| {
            let status = Command::new("git")
                .args(args)
                .current_dir(source.path())
                .env("GIT_AUTHOR_NAME", "test")
                .env("GIT_AUTHOR_EMAIL", "test@example.com")
                .env("GIT_COMMITTER_NAME", "test")
                .env("GIT_COMMITTER_EMAIL", "test@example.com")
                .output()
                .unwrap();
            assert!(status.status.success(), "git {:?} failed", args);
        };
        run(&["init"]);
        std::fs::write(source.path().join("hello.py"), "def hi():\n    pass\n").unwrap();
        run(&["add", "."]);
        run(&["commit", "-m", "init"]);

        let url = format!("file://{}", source.path().display());
        let cloned_path: PathBuf;
        {
            let repo = clone_repository(&url).unwrap();
            cloned_path = repo.path().to_path_buf();
            assert!(cloned_path.join("hello.py").exists());
        }
        // Scoped acquisition: the working copy is gone once the handle drops.
        assert!(!cloned_path.exists());
    }
}
