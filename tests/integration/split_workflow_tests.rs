/*!
 * Offline split workflow tests: raw script file in, two stream files out
 */

use std::fs;
use anyhow::Result;
use scriptforge::app_controller::Controller;
use crate::common;

#[test]
fn test_splitFile_withTaggedScript_shouldWriteBothStreams() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_script(&dir, "episode.txt")?;

    let outcome = Controller::split_file(&input, temp_dir.path(), false)?;

    let narration_path = temp_dir.path().join("episode.narration.txt");
    let shots_path = temp_dir.path().join("episode.shots.txt");

    assert!(narration_path.exists());
    assert!(shots_path.exists());

    let narration = fs::read_to_string(&narration_path)?;
    assert_eq!(narration, outcome.narration);
    assert!(narration.contains("You have five minutes to fix this."));

    let shots = fs::read_to_string(&shots_path)?;
    assert!(shots.contains("Wide shot of a cluttered workbench."));
    assert_eq!(outcome.stats.word_count, 15);

    Ok(())
}

#[test]
fn test_splitFile_withExistingOutputs_shouldNotOverwriteWithoutForce() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path().to_path_buf();
    let input = common::create_test_script(&dir, "episode.txt")?;

    Controller::split_file(&input, temp_dir.path(), false)?;

    let narration_path = temp_dir.path().join("episode.narration.txt");
    fs::write(&narration_path, "hand-edited narration")?;

    // Without force the edited file must survive
    Controller::split_file(&input, temp_dir.path(), false)?;
    assert_eq!(fs::read_to_string(&narration_path)?, "hand-edited narration");

    // With force it gets regenerated
    let outcome = Controller::split_file(&input, temp_dir.path(), true)?;
    assert_eq!(fs::read_to_string(&narration_path)?, outcome.narration);

    Ok(())
}

#[test]
fn test_splitFile_withMissingInput_shouldFail() {
    let temp_dir = common::create_temp_dir().expect("temp dir");

    let result = Controller::split_file(
        &temp_dir.path().join("missing.txt"),
        temp_dir.path(),
        false,
    );

    assert!(result.is_err());
}
