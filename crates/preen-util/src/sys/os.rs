//! Best-effort OS/distribution identification.
//!
//! Used to fill in the host line of bug reports and `/version` replies
//! (XEP-0092). Nothing here is allowed to fail: every probe degrades to
//! the next one, and the final fallback is the literal string `N/A`.

use std::path::Path;
use std::process::Command;

#[cfg(unix)]
use tracing::debug;

#[cfg(unix)]
use super::path::find_in_path;
#[cfg(unix)]
use super::retry::retry_on_interrupt;

/// Distro marker files, probed in order. The order is part of the
/// contract: many distros ship `/etc/redhat-release` for compatibility,
/// so Red Hat must come last.
pub const DISTRO_MARKERS: &[(&str, &str)] = &[
    ("Arch Linux", "/etc/arch-release"),
    ("Aurox Linux", "/etc/aurox-release"),
    ("Conectiva Linux", "/etc/conectiva-release"),
    ("CRUX", "/usr/bin/crux"),
    ("Debian GNU/Linux", "/etc/debian_version"),
    ("Fedora Linux", "/etc/fedora-release"),
    ("Gentoo Linux", "/etc/gentoo-release"),
    ("Linux from Scratch", "/etc/lfs-release"),
    ("Mandrake Linux", "/etc/mandrake-release"),
    ("Slackware Linux", "/etc/slackware-version"),
    ("Solaris/Sparc", "/etc/release"),
    ("Source Mage", "/etc/sourcemage_version"),
    ("SUSE Linux", "/etc/SuSE-release"),
    ("Sun JDS", "/etc/sun-release"),
    ("PLD Linux", "/etc/pld-release"),
    ("Yellow Dog Linux", "/etc/yellowdog-release"),
    ("Redhat Linux", "/etc/redhat-release"),
];

/// A human-readable description of the host operating system.
///
/// Probes, in order: `lsb_release`, the [`DISTRO_MARKERS`] table, and
/// `uname -sr`. Returns `"N/A"` when everything fails (including on
/// non-Unix hosts).
pub fn os_info() -> String {
    #[cfg(unix)]
    {
        if let Some(info) = lsb_release_info() {
            return info;
        }
        if let Some(info) = distro_marker_info() {
            return info;
        }
        if let Some(info) = command_first_line("uname", &["-sr"]) {
            debug!(info = %info, "OS detection fell back to uname");
            return info;
        }
    }
    "N/A".to_string()
}

/// Run a command and return the first trimmed line of its stdout, or
/// `None` if the command could not be run, exited nonzero, or printed
/// nothing.
pub fn command_first_line(cmd: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(cmd).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = stdout.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

#[cfg(unix)]
fn lsb_release_info() -> Option<String> {
    find_in_path("lsb_release")?;
    let line = command_first_line(
        "lsb_release",
        &["--description", "--codename", "--release", "--short"],
    )?;
    // Some distros fill unused fields with "n/a"; drop those.
    let cleaned = line.replace("n/a", "").replace("N/A", "").trim().to_string();
    if cleaned.is_empty() {
        return None;
    }
    debug!(info = %cleaned, "OS detection via lsb_release");
    Some(cleaned)
}

#[cfg(unix)]
fn distro_marker_info() -> Option<String> {
    for &(name, marker) in DISTRO_MARKERS {
        let path = Path::new(marker);
        if !path.exists() {
            continue;
        }
        let text = if is_executable(path) {
            // Some markers (CRUX) are executables that print their own
            // identification.
            match command_first_line(marker, &[]) {
                Some(line) => line,
                None => continue,
            }
        } else {
            let Some(first_line) = read_first_line(path) else {
                continue;
            };
            format_marker_text(name, marker, &first_line)
        };
        debug!(marker, info = %text, "OS detection via distro marker file");
        return Some(text);
    }
    None
}

/// Render a marker file's first line as a full "name version" string.
///
/// `*version` markers hold only a version number, so the distro name is
/// prefixed — except the Source Mage and Slackware files, whose content
/// already includes the name. `aurox-release` and `arch-release` carry no
/// version at all, and `lfs-release` only a version.
fn format_marker_text(name: &str, marker: &str, first_line: &str) -> String {
    let file = Path::new(marker)
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or(marker);
    if marker.ends_with("version") {
        if file.starts_with("sourcemage") || file.starts_with("slackware") {
            first_line.to_string()
        } else {
            format!("{name} {first_line}")
        }
    } else if marker.ends_with("aurox-release") || marker.ends_with("arch-release") {
        name.to_string()
    } else if marker.ends_with("lfs-release") {
        format!("{name} {first_line}")
    } else {
        first_line.to_string()
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(unix)]
fn read_first_line(path: &Path) -> Option<String> {
    use std::io::{BufRead, BufReader};

    let file = retry_on_interrupt(|| std::fs::File::open(path)).ok()?;
    let mut line = String::new();
    BufReader::new(file).read_line(&mut line).ok()?;
    Some(line.trim().to_string())
}
