//! Command-line interface for solving problem files and built-in presets

use crate::io::configuration::{DEFAULT_CELL_SIZE, OUTPUT_SUFFIX, PROBLEM_EXTENSION};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::io::image::export_wall_as_png;
use crate::io::presets::{PRESET_NAMES, preset};
use crate::io::problem::Problem;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{Level, info, warn};

#[derive(Parser)]
#[command(name = "tilewall")]
#[command(
    author,
    version,
    about = "Decide whether Wang tiles can tile a wall with a given top row"
)]
/// Command-line arguments for the wall solver
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Problem file (JSON) or directory of problem files
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Solve a built-in example instead of TARGET ("all" for every preset)
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override the maximum wall height of every problem
    #[arg(short, long)]
    pub max_height: Option<usize>,

    /// Export each accepted wall as `<name>_tiling.png`
    #[arg(long)]
    pub png: bool,

    /// Side of one rendered cell in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Solve problems even if their image already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log search details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output images should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Most detailed log level to emit
    pub const fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::ERROR
        } else {
            Level::WARN
        }
    }
}

/// Where a problem comes from and where its image goes
#[derive(Clone, Debug, PartialEq, Eq)]
enum Source {
    File(PathBuf),
    Preset(String),
}

impl Source {
    fn load(&self) -> Result<Problem> {
        match self {
            Self::File(path) => Problem::load(path),
            Self::Preset(name) => preset(name),
        }
    }

    fn output_path(&self) -> PathBuf {
        match self {
            Self::File(path) => {
                let stem = path.file_stem().unwrap_or_default();
                let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());
                path.parent()
                    .map_or_else(|| PathBuf::from(&output_name), |parent| parent.join(&output_name))
            }
            Self::Preset(name) => PathBuf::from(format!("{name}{OUTPUT_SUFFIX}.png")),
        }
    }
}

/// Result of solving one problem
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Problem name
    pub name: String,
    /// Height of the accepted wall, `None` when rejected
    pub height: Option<usize>,
    /// Image written for the accepted wall
    pub image: Option<PathBuf>,
}

/// Orchestrates solving a batch of problems with progress tracking
pub struct ProblemRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ProblemRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every selected problem, printing each outcome
    ///
    /// # Errors
    ///
    /// Returns an error if no problem source is given, a problem cannot be
    /// loaded, or an image cannot be written
    pub fn process(&mut self) -> Result<Vec<Outcome>> {
        let sources = self.collect_sources()?;
        let mut outcomes = Vec::with_capacity(sources.len());

        if sources.is_empty() {
            return Ok(outcomes);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(sources.len());
        }

        for (index, source) in sources.iter().enumerate() {
            outcomes.push(self.process_source(source, index)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outcomes)
    }

    fn collect_sources(&self) -> Result<Vec<Source>> {
        if let Some(name) = &self.cli.preset {
            let names: Vec<String> = if name == "all" {
                PRESET_NAMES.iter().map(|&name| name.to_owned()).collect()
            } else {
                vec![name.clone()]
            };
            return Ok(names
                .into_iter()
                .map(Source::Preset)
                .filter(|source| self.should_process(source))
                .collect());
        }

        let Some(target) = &self.cli.target else {
            return Err(invalid_parameter(
                "target",
                &"",
                &"give a problem file, a directory or --preset",
            ));
        };

        if target.is_file() {
            let source = Source::File(target.clone());
            Ok(if self.should_process(&source) {
                vec![source]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|source| TilingError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source,
            })?;
            let mut paths = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if is_problem_file(&path) {
                    paths.push(path);
                }
            }
            paths.sort();

            let sources = paths
                .into_iter()
                .map(Source::File)
                .filter(|source| self.should_process(source))
                .collect();
            Ok(sources)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a problem file or a directory",
            ))
        }
    }

    fn should_process(&self, source: &Source) -> bool {
        if !self.cli.png || !self.cli.skip_existing() {
            return true;
        }

        let output_path = source.output_path();
        if output_path.exists() {
            info!(path = %output_path.display(), "skipping, image exists");
            false
        } else {
            true
        }
    }

    // Allow print for the solved walls, which are the program's output
    #[allow(clippy::print_stdout)]
    fn process_source(&mut self, source: &Source, index: usize) -> Result<Outcome> {
        let mut problem = source.load()?;
        if let Some(max_height) = self.cli.max_height {
            problem.max_height = max_height;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_problem(index, &problem.name, problem.max_height);
        }

        let progress = &mut self.progress_manager;
        let wall = problem.solve_observed(|attempt| {
            if let Some(pm) = progress.as_mut() {
                pm.searched_height(index, attempt.height);
            }
        })?;

        let height = wall.as_ref().map(crate::spatial::grid::Wall::height);
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_problem(index, height);
        }

        let mut image = None;
        match &wall {
            Some(wall) => {
                println!("{}: accepted at height {}\n{wall}", problem.name, wall.height());
                if self.cli.png {
                    let output_path = source.output_path();
                    export_wall_as_png(wall, self.cli.cell_size, &output_path)?;
                    image = Some(output_path);
                }
            }
            None => {
                warn!(problem = %problem.name, max_height = problem.max_height, "no tiling found");
                println!(
                    "{}: rejected up to height {}",
                    problem.name, problem.max_height
                );
            }
        }

        Ok(Outcome {
            name: problem.name,
            height,
            image,
        })
    }
}

fn is_problem_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(PROBLEM_EXTENSION)
}

