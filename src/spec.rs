//! Parsing of the parameter list into tagged spec entries.
//!
//! The parameter list is a line-oriented text file (handed over as `csv=`,
//! though it is not delimited data). One pass over its lines produces a
//! sequence of [`Entry`] values so that extraction never has to peek ahead
//! into the raw list; a family that is missing its closing bound entry is
//! caught here, as a parse error, instead of surfacing as an out-of-range
//! index during extraction.

use regex::Regex;

use crate::error::ExtractError;

/// Literal marker ending a multi-line block, both in the parameter list and
/// in the source document.
pub const TERMINATOR: &str = "END";
/// Suffix that, appended to a family stem, declares an open-ended family.
pub const CONTINUATION_SUFFIX: &str = "X";

/// How a consecutive family stops consuming source lines.
#[derive(Debug, PartialEq)]
pub enum Termination {
    /// Stop after copying the first line containing this literal value.
    Bounded(String),
    /// Keep copying past `END` lines while the family stem still occurs
    /// further down the source document.
    Open,
}

/// One logical unit of the parameter list.
#[derive(Debug, PartialEq)]
pub enum Entry {
    /// A `#` line, emitted to the output verbatim without any matching.
    Comment(String),
    /// A parameter matched as a single source line.
    Single(String),
    /// A parameter whose following lines are copied up to (not including)
    /// the next line containing [`TERMINATOR`].
    Multiline(String),
    /// A run of numbered members (`NAME0`, `NAME1`, ...) sharing one
    /// termination rule. `members` is never empty.
    Family {
        stem: String,
        members: Vec<String>,
        termination: Termination,
    },
}

/// Splits a family member name into its stem, stripping exactly one
/// trailing digit. Returns `None` for names that are not family members.
///
/// `NAME2` belongs to family `NAME`; `NAME10` belongs to family `NAME1`.
fn family_stem(name: &str) -> Option<String> {
    let trailing_digit = Regex::new(r"\d$").unwrap();
    if trailing_digit.is_match(name) {
        Some(trailing_digit.replace(name, "").into_owned())
    } else {
        None
    }
}

/// A name is multi-line iff the line after it reads exactly [`TERMINATOR`].
/// An absent line means not multi-line, never an error.
fn followed_by_terminator(lines: &[&String], index: usize) -> bool {
    lines
        .get(index)
        .map(|line| line.trim() == TERMINATOR)
        .unwrap_or(false)
}

/// Parses the raw parameter-list lines into tagged entries.
///
/// # Process Flow:
/// 1. **Comments**: lines whose first non-blank character is `#` become
///    [`Entry::Comment`] and are kept verbatim.
/// 2. **Classification**: a name line followed by a [`TERMINATOR`] line is
///    multi-line; a multi-line name ending in a digit starts a consecutive
///    family, any other name is a standalone entry.
/// 3. **Family collection**: subsequent `name`/`END` pairs with the same
///    stem are folded into the family, then exactly one bound entry closes
///    it: the stem plus [`CONTINUATION_SUFFIX`] selects open mode, any
///    other value is a bounded-mode stop value.
/// 4. **Blank lines** carry no meaning anywhere in the list and are dropped
///    before classification, so a blank never splits a name from its
///    terminator or a family from its bound entry.
///
/// # Errors:
/// - [`ExtractError::UnterminatedFamily`] if a family's members reach the
///   end of the list without a bound entry. The message names the last
///   member so the offending declaration can be found.
pub fn parse(raw_lines: &[String]) -> Result<Vec<Entry>, ExtractError> {
    let lines: Vec<&String> = raw_lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let mut entries = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let raw = lines[index];
        let name = raw.trim();

        if name.starts_with('#') {
            entries.push(Entry::Comment(raw.clone()));
            index += 1;
            continue;
        }
        if !followed_by_terminator(&lines, index + 1) {
            entries.push(Entry::Single(name.to_string()));
            index += 1;
            continue;
        }

        match family_stem(name) {
            None => {
                entries.push(Entry::Multiline(name.to_string()));
                index += 2;
            }
            Some(stem) => {
                let (family, next) = parse_family(&lines, index, stem)?;
                entries.push(family);
                index = next;
            }
        }
    }
    Ok(entries)
}

/// Collects one consecutive family starting at `index` (a member name known
/// to end in a digit and to be followed by a terminator line, in the
/// blank-free line sequence). Returns the family entry and the index of the
/// first line after its bound entry.
fn parse_family(
    lines: &[&String],
    index: usize,
    stem: String,
) -> Result<(Entry, usize), ExtractError> {
    let mut members = vec![lines[index].trim().to_string()];
    let mut index = index + 2;

    while index < lines.len() {
        let candidate = lines[index].trim();
        match family_stem(candidate) {
            Some(s) if s == stem && followed_by_terminator(lines, index + 1) => {
                members.push(candidate.to_string());
                index += 2;
            }
            _ => break,
        }
    }

    if index >= lines.len() {
        return Err(ExtractError::UnterminatedFamily {
            parameter: members.last().cloned().unwrap_or_default(),
        });
    }

    let bound = lines[index].trim();
    let termination = if bound == format!("{stem}{CONTINUATION_SUFFIX}") {
        Termination::Open
    } else {
        Termination::Bounded(bound.to_string())
    };

    Ok((
        Entry::Family {
            stem,
            members,
            termination,
        },
        index + 1,
    ))
}
