use crate::error::ScrapeError;
use crate::results::Quote;
use crate::utils::tags_literal;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Column names of the output file
pub const HEADER: [&str; 3] = ["text", "author", "tags"];

const SEPARATOR: char = ',';
const LINE_END: &str = "\r\n";

/// Write all quotes to a CSV file, creating or truncating it
pub fn write_quotes(quotes: &[Quote], path: &Path) -> Result<(), ScrapeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_quotes_to(quotes, &mut out)?;
    out.flush()?;

    ::log::info!("Wrote {} quotes to {}", quotes.len(), path.display());
    Ok(())
}

/// Write the header and one row per quote to any writer
pub fn write_quotes_to<W: Write>(quotes: &[Quote], mut w: W) -> io::Result<()> {
    write_row(&mut w, &HEADER)?;
    for quote in quotes {
        let tags = tags_literal(&quote.tags);
        write_row(&mut w, &[quote.text.as_str(), quote.author.as_str(), tags.as_str()])?;
    }
    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(SEPARATOR) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row, quoting only the fields that need it
fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", SEPARATOR)?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    write!(w, "{}", LINE_END)
}
