// SPDX-License-Identifier: CC0-1.0

//! Path utility functions for splitting proto path names and deriving output names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extension appended to every generated source file.
pub const GENERATED_EXTENSION: &str = "swift";

/// A proto path name split into its directory, base name and suffix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathParts {
    /// Directory part including the trailing `/` (empty for a bare file name)
    pub dir: String,
    /// File name without directory and suffix
    pub base: String,
    /// Suffix including the leading `.` (e.g. `.proto`), or empty
    pub suffix: String,
}

/// Split a `/`-separated path name into directory, base name and suffix.
///
/// The suffix is the text from the last `.` of the last path segment. A trailing
/// segment without any `.` is all base name.
///
/// # Examples
/// ```
/// use zap_path::split_path;
/// let parts = split_path("lnrpc/lightning.proto");
/// assert_eq!(parts.dir, "lnrpc/");
/// assert_eq!(parts.base, "lightning");
/// assert_eq!(parts.suffix, ".proto");
/// ```
pub fn split_path(pathname: &str) -> PathParts {
    let mut dir = String::new();
    let mut base = String::new();
    let mut suffix = String::new();

    for c in pathname.chars() {
        match c {
            '/' => {
                dir.push_str(&base);
                dir.push_str(&suffix);
                dir.push(c);
                base.clear();
                suffix.clear();
            }
            '.' => {
                base.push_str(&suffix);
                suffix.clear();
                suffix.push(c);
            }
            _ => suffix.push(c),
        }
    }

    if !suffix.is_empty() && !suffix.starts_with('.') {
        base.push_str(&suffix);
        suffix.clear();
    }

    PathParts { dir, base, suffix }
}

/// Policy for deriving an output file name from the input proto path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FileNaming {
    /// Keep the full relative directory (`lnrpc/lightning.zap.swift`)
    #[default]
    FullPath,
    /// Flatten directory separators to underscores (`lnrpc_lightning.zap.swift`)
    PathToUnderscores,
    /// Drop the directory entirely (`lightning.zap.swift`)
    DropPath,
}

impl FileNaming {
    /// Name of the policy as accepted on the plugin parameter line
    pub fn as_str(&self) -> &'static str {
        match self {
            FileNaming::FullPath => "FullPath",
            FileNaming::PathToUnderscores => "PathToUnderscores",
            FileNaming::DropPath => "DropPath",
        }
    }
}

impl fmt::Display for FileNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Error returned when a file naming policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown file naming policy '{0}'. Supported: FullPath, PathToUnderscores, DropPath")]
pub struct UnknownFileNaming(pub String);

impl FromStr for FileNaming {
    type Err = UnknownFileNaming;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FullPath" => Ok(FileNaming::FullPath),
            "PathToUnderscores" => Ok(FileNaming::PathToUnderscores),
            "DropPath" => Ok(FileNaming::DropPath),
            other => Err(UnknownFileNaming(other.to_string())),
        }
    }
}

/// Derive the output file name for `proto_name` under `naming`.
///
/// The result is `<dir per policy><base>.<component>.swift`.
///
/// # Examples
/// ```
/// use zap_path::{output_file_name, FileNaming};
/// assert_eq!(
///     output_file_name("zap", "lnrpc/lightning.proto", FileNaming::PathToUnderscores),
///     "lnrpc_lightning.zap.swift"
/// );
/// ```
pub fn output_file_name(component: &str, proto_name: &str, naming: FileNaming) -> String {
    let ext = format!(".{component}.{GENERATED_EXTENSION}");
    let parts = split_path(proto_name);
    match naming {
        FileNaming::FullPath => format!("{}{}{}", parts.dir, parts.base, ext),
        FileNaming::PathToUnderscores => {
            format!("{}{}{}", parts.dir.replace('/', "_"), parts.base, ext)
        }
        FileNaming::DropPath => format!("{}{}", parts.base, ext),
    }
}
