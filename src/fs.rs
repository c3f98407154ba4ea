//! File system utilities.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// The settings file is rewritten on every `--setapi`/`--setlang`, and the
/// invoking launcher may kill the process at any point; the temp file is
/// created in the same directory as the target so the rename stays on one
/// filesystem and is atomic.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("settings.toml");

        atomic_write(&file_path, "provider = \"GOOGL\"").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "provider = \"GOOGL\"");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("settings.toml");

        fs::write(&file_path, "provider = \"GOOGL\"").unwrap();
        atomic_write(&file_path, "provider = \"MSFT\"").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "provider = \"MSFT\"");
    }

    #[test]
    fn test_atomic_write_no_temp_file_remains() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("settings.toml");

        atomic_write(&file_path, "content").unwrap();

        let temp_path = temp_dir.path().join(".settings.toml.tmp");
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_atomic_write_unicode_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("settings.toml");

        let content = "target_lang = \"zh-TW\" # 中文（繁體）";
        atomic_write(&file_path, content).unwrap();

        let read_content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(read_content, content);
    }
}
