//! Parse the semicolon-separated bookstore inventory.
//!
//! One book per line:
//!   title;author;genre;price;year;isbn[;attr1;attr2]
//!
//! Fiction genres (Science Fiction, Romance) carry the two extra attributes,
//! non-fiction genres (Biography, Encyclopedia) must not.

use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use shelfwise_core::{Book, BookKind, Family, Genre};

use crate::error::IngestError;

const FICTION_FIELDS: usize = 8;
const NON_FICTION_FIELDS: usize = 6;

/// Load and parse an inventory file.
pub fn parse_inventory(path: impl AsRef<Path>) -> Result<Vec<Book>, IngestError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let books = parse_inventory_str(&text)?;
    tracing::info!(count = books.len(), path = %path.display(), "loaded inventory");
    Ok(books)
}

/// Parse inventory text. Blank lines are skipped.
pub fn parse_inventory_str(text: &str) -> Result<Vec<Book>, IngestError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut books = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        if record.iter().all(str::is_empty) {
            continue;
        }
        books.push(parse_record(&record, line)?);
    }
    Ok(books)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Book, IngestError> {
    let field = |i: usize| record.get(i).unwrap_or("");

    let genre_label = field(2);
    let genre = Genre::from_label(genre_label).ok_or_else(|| IngestError::UnknownGenre {
        line,
        genre: genre_label.to_string(),
    })?;

    let expected = match genre.family() {
        Family::Fiction => FICTION_FIELDS,
        Family::NonFiction => NON_FICTION_FIELDS,
    };
    if record.len() != expected {
        return Err(IngestError::FieldCount {
            line,
            expected,
            got: record.len(),
        });
    }

    let price: f64 = number(field(3), "price", line)?;
    let year: i32 = number(field(4), "year", line)?;
    let attrs = match genre.family() {
        Family::Fiction => (
            number(field(6), "first genre attribute", line)?,
            number(field(7), "second genre attribute", line)?,
        ),
        Family::NonFiction => (0, 0),
    };

    Book::new(
        field(0),
        field(1),
        price,
        year,
        field(5),
        BookKind::for_genre(genre, attrs),
    )
    .map_err(|source| IngestError::Book { line, source })
}

fn number<T: FromStr>(raw: &str, field: &'static str, line: u64) -> Result<T, IngestError> {
    raw.parse().map_err(|_| IngestError::InvalidNumber {
        line,
        field,
        value: raw.to_string(),
    })
}
