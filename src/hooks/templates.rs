// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The commit-msg hook script.

/// Hook file name inside `.git/hooks`.
pub const COMMIT_MSG_HOOK: &str = "commit-msg";

/// Marker line identifying a hook written by guardian.
pub const HOOK_MARKER: &str = "# guardian commit-msg hook";

/// Render the hook script. `args` are appended to `guardian check`.
pub fn commit_msg_script(args: &[String]) -> String {
    let mut command = String::from("guardian check \"$1\"");
    for arg in args {
        command.push(' ');
        command.push_str(&shell_quote(arg));
    }

    format!(
        "#!/bin/sh\n{}\n# Generated by guardian v{}. Remove with `guardian hooks uninstall`.\n\nexec {}\n",
        HOOK_MARKER,
        crate::version::VERSION,
        command
    )
}

/// Single-quote an argument for POSIX sh.
fn shell_quote(arg: &str) -> String {
    format!("'{}'", arg.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_without_args() {
        let script = commit_msg_script(&[]);
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(HOOK_MARKER));
        assert!(script.ends_with("exec guardian check \"$1\"\n"));
    }

    #[test]
    fn test_script_quotes_args() {
        let script = commit_msg_script(&[
            "--scope-rules".to_string(),
            "allowScope".to_string(),
            "it's".to_string(),
        ]);
        assert!(script.contains("exec guardian check \"$1\" '--scope-rules' 'allowScope' 'it'\\''s'"));
    }
}
