use crate::spec::{Entry, Termination, TERMINATOR};

/// Walks the source document once per spec entry and assembles the output
/// sequence.
///
/// The source lines are immutable for the whole run; the output is owned
/// here and appended in place by the block and family extractors.
pub struct Extractor<'a> {
    source: &'a [String],
    output: Vec<String>,
}

impl<'a> Extractor<'a> {
    pub fn new(source: &'a [String]) -> Self {
        Extractor {
            source,
            output: Vec::new(),
        }
    }

    /// The assembled output, in spec-entry order.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Runs the extraction over the parsed spec entries, in order.
    ///
    /// # Process Flow:
    /// 1. **Comments** are appended verbatim, no matching.
    /// 2. **Matching**: every other entry scans the source document from
    ///    index 0 for the first line containing the parameter name as a
    ///    substring (for a family, the first member's name). A parameter
    ///    occurring several times in the document therefore always matches
    ///    its first occurrence, independent of spec order; this is the
    ///    documented behavior, not an accident of implementation.
    /// 3. **Dispatch**: the matched line is appended, then multi-line
    ///    entries hand over to `copy_block` or `copy_family` to consume the
    ///    following lines.
    ///
    /// # Not-found policy:
    /// A parameter with no matching line anywhere in the document is
    /// skipped silently; processing continues with the next entry.
    pub fn run(&mut self, entries: &[Entry]) {
        for entry in entries {
            match entry {
                Entry::Comment(text) => self.output.push(text.clone()),
                Entry::Single(name) => {
                    if let Some(index) = self.find_first(name) {
                        self.output.push(self.source[index].clone());
                    }
                }
                Entry::Multiline(name) => {
                    if let Some(index) = self.find_first(name) {
                        self.output.push(self.source[index].clone());
                        self.copy_block(index + 1);
                    }
                }
                Entry::Family {
                    stem,
                    members,
                    termination,
                } => {
                    if let Some(index) = self.find_first(&members[0]) {
                        self.output.push(self.source[index].clone());
                        self.copy_family(index + 1, stem, termination);
                    }
                }
            }
        }
    }

    /// First (lowest-index) source line containing `name` as a substring.
    fn find_first(&self, name: &str) -> Option<usize> {
        self.source.iter().position(|line| line.contains(name))
    }

    /// Block Extractor: copies lines from `start` up to, and not including,
    /// the next line containing [`TERMINATOR`]. A missing terminator is not
    /// an error; the block simply runs to the end of the document.
    fn copy_block(&mut self, start: usize) {
        for line in &self.source[start.min(self.source.len())..] {
            if line.contains(TERMINATOR) {
                break;
            }
            self.output.push(line.clone());
        }
    }

    /// Consecutive-Family Extractor: one contiguous copy covering every
    /// numbered occurrence of the family.
    ///
    /// # Termination modes:
    /// - **Bounded**: every visited line is appended; the first line
    ///   containing the bound value is appended too, then copying stops.
    ///   Unlike `copy_block`, the triggering line is included; the
    ///   asymmetry is part of the output format.
    /// - **Open**: every visited line is appended; a line containing
    ///   [`TERMINATOR`] ends the family only when no later source line
    ///   contains the family stem, otherwise the next occurrence is still
    ///   ahead and copying continues.
    ///
    /// Both modes stop quietly when the document is exhausted first.
    fn copy_family(&mut self, start: usize, stem: &str, termination: &Termination) {
        match termination {
            Termination::Bounded(value) => {
                for line in &self.source[start.min(self.source.len())..] {
                    self.output.push(line.clone());
                    if line.contains(value.as_str()) {
                        break;
                    }
                }
            }
            Termination::Open => {
                for index in start..self.source.len() {
                    let line = &self.source[index];
                    self.output.push(line.clone());
                    if line.contains(TERMINATOR) && !self.mentioned_after(index + 1, stem) {
                        break;
                    }
                }
            }
        }
    }

    /// Whether any line at or after `from` contains `stem`.
    fn mentioned_after(&self, from: usize, stem: &str) -> bool {
        self.source[from.min(self.source.len())..]
            .iter()
            .any(|line| line.contains(stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    fn extract(source: &[&str], params: &[&str]) -> Vec<String> {
        let source = doc(source);
        let entries = spec::parse(&doc(params)).unwrap();
        let mut extractor = Extractor::new(&source);
        extractor.run(&entries);
        extractor.output().to_vec()
    }

    #[test]
    fn missing_parameter_is_skipped_and_processing_continues() {
        let output = extract(&["ALPHA=1", "GAMMA=3"], &["ALPHA", "BETA", "GAMMA"]);
        assert_eq!(output, doc(&["ALPHA=1", "GAMMA=3"]));
    }

    #[test]
    fn comments_pass_through_verbatim_in_spec_order() {
        let output = extract(
            &["ALPHA=1"],
            &["# first", "ALPHA", "# second", "MISSING", "# third"],
        );
        assert_eq!(output, doc(&["# first", "ALPHA=1", "# second", "# third"]));
    }

    #[test]
    fn single_line_spec_reproduces_matches_in_spec_order() {
        // Spec order wins over document order.
        let output = extract(&["ALPHA=1", "BETA=2", "GAMMA=3"], &["GAMMA", "ALPHA", "BETA"]);
        assert_eq!(output, doc(&["GAMMA=3", "ALPHA=1", "BETA=2"]));
    }

    #[test]
    fn matching_always_restarts_at_the_top_of_the_document() {
        let output = extract(&["VALUE first", "VALUE second"], &["VALUE", "VALUE"]);
        assert_eq!(output, doc(&["VALUE first", "VALUE first"]));
    }

    #[test]
    fn multiline_block_excludes_its_terminator_line() {
        let output = extract(
            &["FOO", "line-a", "line-b", "FOO END", "trailer"],
            &["FOO", "END"],
        );
        assert_eq!(output, doc(&["FOO", "line-a", "line-b"]));
    }

    #[test]
    fn multiline_block_without_terminator_runs_to_end_of_document() {
        let output = extract(&["tail", "FOO", "line-a", "line-b"], &["FOO", "END"]);
        assert_eq!(output, doc(&["FOO", "line-a", "line-b"]));
    }

    #[test]
    fn bounded_family_copy_includes_the_stop_line() {
        let output = extract(
            &[
                "NAME0 v0", "a", "END", "NAME1 v1", "b", "END", "NAME2 v2", "c", "END",
                "NAME3 stop", "rest",
            ],
            &["NAME0", "END", "NAME1", "END", "NAME2", "END", "NAME3"],
        );
        assert_eq!(
            output,
            doc(&[
                "NAME0 v0", "a", "END", "NAME1 v1", "b", "END", "NAME2 v2", "c", "END",
                "NAME3 stop",
            ])
        );
    }

    #[test]
    fn open_family_stops_after_the_last_occurrence() {
        let output = extract(
            &[
                "NAME0 v0", "a", "END", "NAME1 v1", "b", "END", "NAME2 v2", "c", "END", "tail",
            ],
            &["NAME0", "END", "NAME1", "END", "NAME2", "END", "NAMEX"],
        );
        assert_eq!(
            output,
            doc(&[
                "NAME0 v0", "a", "END", "NAME1 v1", "b", "END", "NAME2 v2", "c", "END",
            ])
        );
    }

    #[test]
    fn open_family_continues_past_end_while_stem_reoccurs() {
        // The END after NAME0's block does not stop the family because
        // NAME1 is still ahead.
        let output = extract(
            &["NAME0", "a", "END", "filler", "NAME1", "b", "END"],
            &["NAME0", "END", "NAMEX"],
        );
        assert_eq!(
            output,
            doc(&["NAME0", "a", "END", "filler", "NAME1", "b", "END"])
        );
    }

    #[test]
    fn blank_spec_lines_inside_a_family_do_not_change_the_extraction() {
        let output = extract(
            &["NAME0 v0", "a", "END", "NAME1 v1", "b", "END", "tail"],
            &["NAME0", "END", "", "NAME1", "END", "NAMEX"],
        );
        assert_eq!(
            output,
            doc(&["NAME0 v0", "a", "END", "NAME1 v1", "b", "END"])
        );
    }

    #[test]
    fn family_with_no_match_is_skipped() {
        let output = extract(&["unrelated"], &["NAME0", "END", "NAMEX", "ALPHA"]);
        assert!(output.is_empty());
    }

    #[test]
    fn bounded_family_exhausts_the_document_if_the_bound_never_occurs() {
        let output = extract(&["NAME0", "a", "END", "b"], &["NAME0", "END", "STOP"]);
        assert_eq!(output, doc(&["NAME0", "a", "END", "b"]));
    }

    #[test]
    fn lines_are_copied_verbatim() {
        let output = extract(&["  ALPHA = 1\t"], &["ALPHA"]);
        assert_eq!(output, doc(&["  ALPHA = 1\t"]));
    }
}
