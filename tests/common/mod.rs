/*!
 * Common test utilities for the scriptforge test suite
 */

use std::fs;
use std::path::PathBuf;
use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample tagged script file for testing
pub fn create_test_script(dir: &PathBuf, filename: &str) -> Result<PathBuf> {
    let content = r#"[VISUAL]
Wide shot of a cluttered workbench.
[AUDIO]
You have five minutes to fix this.
[VISUAL]
Close-up of a soldering iron heating up.
[AUDIO]
And here is exactly how you do it.
"#;
    create_test_file(dir, filename, content)
}
