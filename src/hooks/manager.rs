// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing the commit-msg hook.

use crate::error::{GuardianError, HookError, Result};
use crate::git;
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{commit_msg_script, COMMIT_MSG_HOOK, HOOK_MARKER};

/// Manager for the commit-msg hook.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::with_hooks_dir(repo.git_dir().join("hooks"))
    }

    /// Create a hook manager for an explicit hooks directory.
    pub fn with_hooks_dir(hooks_dir: PathBuf) -> Result<Self> {
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                install_failed(format!("Failed to create hooks directory: {}", e))
            })?;
        }

        Ok(Self { hooks_dir })
    }

    fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(COMMIT_MSG_HOOK)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{}.backup", COMMIT_MSG_HOOK))
    }

    /// Install the commit-msg hook.
    ///
    /// A hook guardian did not write is only replaced with `force`, and is
    /// kept as `commit-msg.backup`.
    pub fn install(&self, args: &[String], force: bool) -> Result<()> {
        let hook_path = self.hook_path();

        if hook_path.exists() && !is_guardian_hook(&hook_path)? {
            if !force {
                return Err(GuardianError::Hook(HookError::AlreadyExists {
                    hook: COMMIT_MSG_HOOK.to_string(),
                }));
            }

            fs::rename(&hook_path, self.backup_path())
                .map_err(|e| install_failed(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::write(&hook_path, commit_msg_script(args))
            .map_err(|e| install_failed(format!("Failed to write hook: {}", e)))?;

        make_executable(&hook_path)?;

        tracing::debug!("Installed hook at {:?}", hook_path);
        Ok(())
    }

    /// Uninstall the commit-msg hook, restoring any backup.
    pub fn uninstall(&self) -> Result<()> {
        let hook_path = self.hook_path();

        if !hook_path.exists() {
            return Ok(()); // Nothing to uninstall
        }

        if !is_guardian_hook(&hook_path)? {
            return Err(GuardianError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: "Hook was not installed by guardian".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            GuardianError::Hook(HookError::RemoveFailed {
                hook: COMMIT_MSG_HOOK.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        let backup_path = self.backup_path();
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                GuardianError::Hook(HookError::RemoveFailed {
                    hook: COMMIT_MSG_HOOK.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Whether the guardian hook is currently installed.
    pub fn is_installed(&self) -> bool {
        let hook_path = self.hook_path();
        hook_path.exists() && is_guardian_hook(&hook_path).unwrap_or(false)
    }
}

fn install_failed(message: String) -> GuardianError {
    GuardianError::Hook(HookError::InstallFailed {
        hook: COMMIT_MSG_HOOK.to_string(),
        message,
    })
}

/// Check if a hook was installed by guardian.
///
/// Hooks may be compiled binaries, so the marker is searched as bytes.
fn is_guardian_hook(path: &Path) -> Result<bool> {
    let content = fs::read(path)?;
    let marker = HOOK_MARKER.as_bytes();
    Ok(content.windows(marker.len()).any(|window| window == marker))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)
        .map_err(|e| install_failed(format!("Failed to get permissions: {}", e)))?
        .permissions();

    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
        .map_err(|e| install_failed(format!("Failed to set permissions: {}", e)))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        let manager = HookManager::with_hooks_dir(dir.path().join("hooks")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_install_and_uninstall() {
        let (_dir, manager) = manager();
        assert!(!manager.is_installed());

        manager.install(&[], false).unwrap();
        assert!(manager.is_installed());
        // Reinstalling over our own hook needs no force
        manager.install(&["--require-blank-line".to_string()], false).unwrap();
        let script = fs::read_to_string(manager.hook_path()).unwrap();
        assert!(script.contains("'--require-blank-line'"));

        manager.uninstall().unwrap();
        assert!(!manager.is_installed());
        assert!(!manager.hook_path().exists());
    }

    #[test]
    fn test_foreign_hook_needs_force_and_is_restored() {
        let (_dir, manager) = manager();
        fs::write(manager.hook_path(), "#!/bin/sh\nexit 0\n").unwrap();

        assert!(matches!(
            manager.install(&[], false),
            Err(GuardianError::Hook(HookError::AlreadyExists { .. }))
        ));

        manager.install(&[], true).unwrap();
        assert!(manager.is_installed());
        assert!(manager.backup_path().exists());

        manager.uninstall().unwrap();
        assert_eq!(
            fs::read_to_string(manager.hook_path()).unwrap(),
            "#!/bin/sh\nexit 0\n"
        );
    }

    #[test]
    fn test_force_install_over_binary_hook() {
        let (_dir, manager) = manager();
        let binary: &[u8] = b"\x7fELF\xff\xfe\0";
        fs::write(manager.hook_path(), binary).unwrap();
        assert!(!manager.is_installed());

        manager.install(&[], true).unwrap();
        assert!(manager.is_installed());
        assert_eq!(fs::read(manager.backup_path()).unwrap(), binary);

        manager.uninstall().unwrap();
        assert_eq!(fs::read(manager.hook_path()).unwrap(), binary);
    }

    #[test]
    fn test_refuses_to_remove_foreign_hook() {
        let (_dir, manager) = manager();
        fs::write(manager.hook_path(), "#!/bin/sh\nexit 0\n").unwrap();
        assert!(matches!(
            manager.uninstall(),
            Err(GuardianError::Hook(HookError::RemoveFailed { .. }))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let (_dir, manager) = manager();
        manager.install(&[], false).unwrap();
        let mode = fs::metadata(manager.hook_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
