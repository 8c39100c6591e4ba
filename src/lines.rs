use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

/// Reads a whole document into an indexable line sequence.
///
/// Both inputs are buffered completely before any matching starts; nothing
/// in this tool consumes a document incrementally.
pub fn read_lines(path: &Path) -> Result<Vec<String>, io::Error> {
    let file = File::open(path)?;
    let buf_reader = io::BufReader::new(file);
    buf_reader.lines().collect()
}

/// Writes the output sequence in one pass, one newline-terminated line per
/// entry.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), io::Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}
