//! Checker configuration and command-line flag handling.

use std::fmt;
use std::path::PathBuf;

use crate::CheckError;

/// One input to check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Input {
    /// Standard input (`-` on the command line).
    Stdin,
    /// A file on disk.
    Path(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Checker configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckConfig {
    /// Only report failures.
    pub quiet: bool,
    /// Also print the parsed tag and payload of each success.
    pub verbose: bool,
    /// Check inputs in parallel.
    pub parallel: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            quiet: false,
            verbose: false,
            parallel: true,
        }
    }
}

impl CheckConfig {
    /// Parse command-line arguments (excluding the program name).
    ///
    /// Flags may appear anywhere; every other argument is an input path.
    pub fn from_args<I, S>(args: I) -> Result<(CheckConfig, Vec<Input>), CheckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = CheckConfig::default();
        let mut inputs = Vec::new();

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--quiet" | "-q" => config.quiet = true,
                "--verbose" | "-v" => config.verbose = true,
                "--no-parallel" => config.parallel = false,
                "-" => inputs.push(Input::Stdin),
                flag if flag.starts_with('-') => {
                    return Err(CheckError::Usage(format!("unknown option `{flag}`")));
                }
                path => inputs.push(Input::Path(PathBuf::from(path))),
            }
        }

        if config.quiet && config.verbose {
            return Err(CheckError::Usage(
                "`--quiet` and `--verbose` cannot be combined".to_string(),
            ));
        }
        if inputs.is_empty() {
            return Err(CheckError::Usage("no inputs given".to_string()));
        }
        Ok((config, inputs))
    }
}
