//! SITL build-and-install command handler.
//!
//! Wraps a single `west build` invocation for the `native_posix` board with
//! the `install` target, pointing `CMAKE_INSTALL_PREFIX` at the invoking
//! user's home directory.
//!
//! ## Command
//!
//! - `westext sitl_build <APP>` - Build and install the app for SITL

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// The external build tool this command drives.
pub const WEST: &str = "west";

/// Board passed to `west build -b`.
pub const BOARD: &str = "native_posix";

/// Build the argument vector for the SITL install invocation.
///
/// Element 0 is the executable name; the rest are handed to it verbatim, one
/// argument each, so an `app` containing spaces or shell metacharacters
/// survives untouched.
pub fn install_argv(app: &str, home: &Path) -> Vec<String> {
    vec![
        WEST.to_string(),
        "build".to_string(),
        "-b".to_string(),
        BOARD.to_string(),
        app.to_string(),
        "-t".to_string(),
        "install".to_string(),
        "-D".to_string(),
        format!("CMAKE_INSTALL_PREFIX={}", home.display()),
    ]
}

/// Run `west build` for `app` and block until it finishes.
///
/// The child inherits stdout/stderr; nothing is captured or filtered. The
/// returned status is the child's own, unchanged. A failed launch (west not
/// installed, not executable) propagates as an error to the caller.
pub fn run(app: &str) -> Result<ExitStatus> {
    // The upstream west extension handed the literal token `$HOME` to CMake.
    // Resolve the real path here; west never sees an unexpanded variable.
    let home = dirs::home_dir().context("Could not determine the home directory")?;

    println!("{} {}", "🚀".cyan(), "sitl build and install".bold());

    let argv = install_argv(app, &home);
    Command::new(&argv[0])
        .args(&argv[1..])
        .status()
        .with_context(|| format!("Failed to run {}. Is it installed and on PATH?", WEST))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_install_argv_exact_order() {
        let argv = install_argv("my_app", Path::new("/home/u"));
        assert_eq!(
            argv,
            vec![
                "west",
                "build",
                "-b",
                "native_posix",
                "my_app",
                "-t",
                "install",
                "-D",
                "CMAKE_INSTALL_PREFIX=/home/u",
            ]
        );
    }

    #[test]
    fn test_install_argv_app_passed_verbatim() {
        // No quoting or splitting: the app lands as one element, as typed.
        let argv = install_argv("apps/rover; rm -rf $X", Path::new("/root"));
        assert_eq!(argv[4], "apps/rover; rm -rf $X");
        assert_eq!(argv.len(), 9);
    }

    #[test]
    fn test_install_argv_home_with_spaces() {
        let home = PathBuf::from("/Users/dev user");
        let argv = install_argv("demo", &home);
        assert_eq!(argv[8], "CMAKE_INSTALL_PREFIX=/Users/dev user");
    }
}
