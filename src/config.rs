use std::path::PathBuf;

use crate::error::ExtractError;

/// The three file paths a run needs, built once from the command line and
/// passed down explicitly. Nothing else reads the process arguments.
#[derive(Debug)]
pub struct Config {
    /// Source document the parameters are extracted from.
    pub txt: PathBuf,
    /// Ordered parameter list (line-oriented text, despite the name).
    pub csv: PathBuf,
    /// Destination document for the extracted lines.
    pub output: PathBuf,
}

const REQUIRED: [(&str, &str); 3] = [
    ("txt", "source document"),
    ("csv", "parameter list"),
    ("output", "destination document"),
];

impl Config {
    /// Builds a `Config` from `key=value` command-line tokens.
    ///
    /// Expected tokens are `txt=<path>`, `csv=<path>` and `output=<path>`,
    /// in any order. Tokens with an unrecognized key, or without a `=`, are
    /// ignored. Every missing required key produces its own
    /// [`ExtractError::MissingArgument`] so the user sees one diagnostic per
    /// missing value, not just the first.
    pub fn from_args<I>(args: I) -> Result<Config, Vec<ExtractError>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut txt = None;
        let mut csv = None;
        let mut output = None;

        for token in args {
            if let Some((key, value)) = token.split_once('=') {
                match key {
                    "txt" => txt = Some(PathBuf::from(value)),
                    "csv" => csv = Some(PathBuf::from(value)),
                    "output" => output = Some(PathBuf::from(value)),
                    _ => {}
                }
            }
        }

        let slots = [&txt, &csv, &output];
        let missing: Vec<ExtractError> = REQUIRED
            .iter()
            .zip(slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(&(key, what), _)| ExtractError::MissingArgument { key, what })
            .collect();

        if missing.is_empty() {
            Ok(Config {
                txt: txt.unwrap(),
                csv: csv.unwrap(),
                output: output.unwrap(),
            })
        } else {
            Err(missing)
        }
    }
}
