//! Tests for command-line parsing and batch solving

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tilewall::TilingError;
    use tilewall::io::cli::{Cli, ProblemRunner};
    use tilewall::io::configuration::DEFAULT_CELL_SIZE;
    use tracing::Level;

    const SWAP: &str = r#"{
        "wall": { "left": "a", "right": "a", "down": "d", "input": "1111" },
        "tiles": [["a", "1", "b", "d"], ["b", "1", "a", "d"]],
        "max_height": 1
    }"#;

    fn run(args: &[&str]) -> tilewall::Result<Vec<tilewall::io::cli::Outcome>> {
        let cli = Cli::parse_from(args);
        ProblemRunner::new(cli).process()
    }

    fn path_arg(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    // Tests CLI parsing with only the target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "wall.json"]);

        assert_eq!(cli.target, Some(PathBuf::from("wall.json")));
        assert_eq!(cli.preset, None);
        assert_eq!(cli.max_height, None);
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert!(!cli.png);
        assert!(!cli.quiet);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the short flags of two options
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "-p",
            "divby3",
            "-m",
            "3",
            "--png",
            "-c",
            "16",
            "--no-skip",
            "--quiet",
        ]);

        assert_eq!(cli.target, None);
        assert_eq!(cli.preset.as_deref(), Some("divby3"));
        assert_eq!(cli.max_height, Some(3));
        assert_eq!(cli.cell_size, 16);
        assert!(cli.png);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests verbosity maps to log levels
    // Verified by letting quiet win over verbose
    #[test]
    fn test_log_level() {
        assert_eq!(Cli::parse_from(["program"]).log_level(), Level::WARN);
        assert_eq!(Cli::parse_from(["program", "-q"]).log_level(), Level::ERROR);
        assert_eq!(Cli::parse_from(["program", "-v"]).log_level(), Level::DEBUG);
        assert_eq!(Cli::parse_from(["program", "-q", "-v"]).log_level(), Level::DEBUG);
    }

    // Tests invalid numeric arguments are parse errors
    // Verified by parsing heights as strings
    #[test]
    fn test_cli_rejects_bad_numbers() {
        assert!(Cli::try_parse_from(["program", "-m", "tall"]).is_err());
        assert!(Cli::try_parse_from(["program", "-c", "-3"]).is_err());
    }

    // Tests a missing target without a preset is an error
    // Verified by returning an empty outcome list instead
    #[test]
    fn test_missing_target() {
        let result = run(&["program", "--quiet"]);
        assert!(matches!(
            result,
            Err(TilingError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));
    }

    // Tests a nonexistent target is an error
    // Verified by treating unknown paths as empty directories
    #[test]
    fn test_nonexistent_target() {
        assert!(run(&["program", "--quiet", "no/such/wall.json"]).is_err());
    }

    // Tests solving a single preset and every preset
    // Verified by ignoring the preset flag
    #[test]
    fn test_presets() -> tilewall::Result<()> {
        let outcomes = run(&["program", "--quiet", "--preset", "divby3"])?;
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes.first().map(|o| (o.name.as_str(), o.height)), Some(("divby3", Some(1))));

        let all = run(&["program", "--quiet", "--preset", "all"])?;
        let heights: Vec<Option<usize>> = all.iter().map(|outcome| outcome.height).collect();
        assert_eq!(heights, vec![Some(1), Some(1), Some(2), Some(2), Some(4)]);

        assert!(run(&["program", "--quiet", "--preset", "nope"]).is_err());
        Ok(())
    }

    // Tests the height override applies to every problem
    // Verified by ignoring the override
    #[test]
    fn test_max_height_override() -> tilewall::Result<()> {
        let outcomes = run(&["program", "--quiet", "--preset", "palindrome", "-m", "3"])?;
        assert_eq!(outcomes.first().map(|outcome| outcome.height), Some(None));
        Ok(())
    }

    // Tests directories are solved in sorted order, skipping other files
    // Verified by reading entries in directory order without sorting
    #[test]
    fn test_process_directory() -> tilewall::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join("b_even.json"), SWAP)?;
        fs::write(temp_dir.path().join("a_odd.json"), SWAP.replace("1111", "111"))?;
        fs::write(temp_dir.path().join("notes.txt"), "not a problem")?;

        let outcomes = run(&["program", "--quiet", &path_arg(temp_dir.path())])?;
        let summary: Vec<(&str, Option<usize>)> = outcomes
            .iter()
            .map(|outcome| (outcome.name.as_str(), outcome.height))
            .collect();
        assert_eq!(summary, vec![("a_odd", None), ("b_even", Some(1))]);
        Ok(())
    }

    // Tests processing empty directories
    // Verified by adding error for empty directories
    #[test]
    fn test_process_empty_directory() -> tilewall::Result<()> {
        let temp_dir = TempDir::new()?;
        let outcomes = run(&["program", "--quiet", &path_arg(temp_dir.path())])?;
        assert!(outcomes.is_empty());
        Ok(())
    }

    // Tests images are written beside the problem file with the suffix
    // Verified by changing the output suffix
    #[test]
    fn test_png_export() -> tilewall::Result<()> {
        let temp_dir = TempDir::new()?;
        let problem = temp_dir.path().join("swap.json");
        fs::write(&problem, SWAP)?;

        let outcomes = run(&["program", "--quiet", "--png", "-c", "8", &path_arg(&problem)])?;
        let expected = temp_dir.path().join("swap_tiling.png");
        assert_eq!(outcomes.first().and_then(|o| o.image.clone()), Some(expected.clone()));
        assert!(expected.exists());
        Ok(())
    }

    // Tests existing images are skipped unless --no-skip is given
    // Verified by removing the skip check
    #[test]
    fn test_skip_existing_image() -> tilewall::Result<()> {
        let temp_dir = TempDir::new()?;
        let problem = temp_dir.path().join("swap.json");
        fs::write(&problem, SWAP)?;
        fs::write(temp_dir.path().join("swap_tiling.png"), "placeholder")?;

        let skipped = run(&["program", "--quiet", "--png", &path_arg(&problem)])?;
        assert!(skipped.is_empty());

        let solved = run(&["program", "--quiet", "--png", "--no-skip", &path_arg(&problem)])?;
        assert_eq!(solved.len(), 1);

        let without_png = run(&["program", "--quiet", &path_arg(&problem)])?;
        assert_eq!(without_png.len(), 1);
        Ok(())
    }

    // Tests rejected problems produce no image
    // Verified by exporting the last searched grid
    #[test]
    fn test_rejected_has_no_image() -> tilewall::Result<()> {
        let temp_dir = TempDir::new()?;
        let problem = temp_dir.path().join("odd.json");
        fs::write(&problem, SWAP.replace("1111", "111"))?;

        let outcomes = run(&["program", "--quiet", "--png", &path_arg(&problem)])?;
        assert_eq!(outcomes.first().map(|o| (o.height, o.image.is_none())), Some((None, true)));
        assert!(!temp_dir.path().join("odd_tiling.png").exists());
        Ok(())
    }
}
