//! Draw requests
//!
//! A request is read from an optional JSON file and then overridden by
//! command line flags. Missing fields fall back to [`DrawRequest::default`].

use crate::error::CliError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const USAGE: &str = "\
Usage: randomkit [OPTIONS]

Draw values from a numpy-compatible randomkit engine and print them as JSON.

Options:
  -s, --seed N        Seed (low 32 bits are used)            [default: 0]
  -k, --kind KIND     words | uint64 | int63 | doubles | gaussians |
                      bounded | index | permutation          [default: doubles]
  -n, --count N       Number of values (length for permutation) [default: 5]
      --low L         Lower end for `bounded`                [default: 0]
      --span S        Inclusive width for `bounded`          [default: 100]
      --bound B       Exclusive bound for `index`            [default: 10]
  -r, --request FILE  JSON request file; flags override its fields
  -h, --help          Print this help
";

/// What to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawKind {
    Words,
    Uint64,
    Int63,
    Doubles,
    Gaussians,
    Bounded,
    Index,
    Permutation,
}

impl FromStr for DrawKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(DrawKind::Words),
            "uint64" => Ok(DrawKind::Uint64),
            "int63" => Ok(DrawKind::Int63),
            "doubles" => Ok(DrawKind::Doubles),
            "gaussians" => Ok(DrawKind::Gaussians),
            "bounded" => Ok(DrawKind::Bounded),
            "index" => Ok(DrawKind::Index),
            "permutation" => Ok(DrawKind::Permutation),
            other => Err(format!("unknown draw kind '{}'", other)),
        }
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DrawKind::Words => "words",
            DrawKind::Uint64 => "uint64",
            DrawKind::Int63 => "int63",
            DrawKind::Doubles => "doubles",
            DrawKind::Gaussians => "gaussians",
            DrawKind::Bounded => "bounded",
            DrawKind::Index => "index",
            DrawKind::Permutation => "permutation",
        };
        f.write_str(name)
    }
}

/// Fully resolved request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DrawRequest {
    pub seed: u64,
    pub kind: DrawKind,
    pub count: usize,
    pub low: u64,
    pub span: u64,
    pub bound: u64,
}

impl Default for DrawRequest {
    fn default() -> Self {
        Self {
            seed: 0,
            kind: DrawKind::Doubles,
            count: 5,
            low: 0,
            span: 100,
            bound: 10,
        }
    }
}

impl DrawRequest {
    /// Load a request from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Values given on the command line
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub kind: Option<DrawKind>,
    pub count: Option<usize>,
    pub low: Option<u64>,
    pub span: Option<u64>,
    pub bound: Option<u64>,
    pub request: Option<PathBuf>,
    pub help: bool,
}

impl Overrides {
    /// Parse flags; the first item is the binary name
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        use lexopt::prelude::*;

        let mut overrides = Overrides::default();
        let mut parser = lexopt::Parser::from_iter(args);

        while let Some(arg) = parser.next()? {
            match arg {
                Short('s') | Long("seed") => overrides.seed = Some(parser.value()?.parse()?),
                Short('k') | Long("kind") => overrides.kind = Some(parser.value()?.parse()?),
                Short('n') | Long("count") => overrides.count = Some(parser.value()?.parse()?),
                Long("low") => overrides.low = Some(parser.value()?.parse()?),
                Long("span") => overrides.span = Some(parser.value()?.parse()?),
                Long("bound") => overrides.bound = Some(parser.value()?.parse()?),
                Short('r') | Long("request") => {
                    overrides.request = Some(PathBuf::from(parser.value()?))
                }
                Short('h') | Long("help") => overrides.help = true,
                _ => return Err(arg.unexpected().into()),
            }
        }

        Ok(overrides)
    }

    /// Load the request file (if any) and apply flags on top
    pub fn resolve(&self) -> Result<DrawRequest, CliError> {
        let base = match &self.request {
            Some(path) => {
                debug!("loading request from {}", path.display());
                DrawRequest::from_file(path)?
            }
            None => DrawRequest::default(),
        };
        Ok(self.apply(base))
    }

    fn apply(&self, base: DrawRequest) -> DrawRequest {
        DrawRequest {
            seed: self.seed.unwrap_or(base.seed),
            kind: self.kind.unwrap_or(base.kind),
            count: self.count.unwrap_or(base.count),
            low: self.low.unwrap_or(base.low),
            span: self.span.unwrap_or(base.span),
            bound: self.bound.unwrap_or(base.bound),
        }
    }
}
