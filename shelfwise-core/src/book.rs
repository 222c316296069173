//! Catalog items: the shared book record and its genre-specific variants.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::error::BookError;

/// Substituted for a non-positive price.
pub const DEFAULT_PRICE: f64 = 10.0;
/// Substituted for a non-positive publication year.
pub const DEFAULT_YEAR: i32 = 2000;

/// Four letters, a hyphen, four digits.
static ISBN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{4}-\d{4}$").expect("static ISBN pattern"));

/// Closed set of catalog genres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    #[serde(rename = "Science Fiction")]
    ScienceFiction,
    #[serde(rename = "Romance")]
    Romance,
    #[serde(rename = "Biography")]
    Biography,
    #[serde(rename = "Encyclopedia")]
    Encyclopedia,
}

/// Super-group of a genre. Fiction genres carry two extra attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Fiction,
    NonFiction,
}

impl Genre {
    pub const ALL: [Genre; 4] = [
        Genre::ScienceFiction,
        Genre::Romance,
        Genre::Biography,
        Genre::Encyclopedia,
    ];

    /// Human-readable label, also used in the inventory file.
    pub fn label(&self) -> &'static str {
        match self {
            Genre::ScienceFiction => "Science Fiction",
            Genre::Romance => "Romance",
            Genre::Biography => "Biography",
            Genre::Encyclopedia => "Encyclopedia",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Genre::ScienceFiction | Genre::Romance => Family::Fiction,
            Genre::Biography | Genre::Encyclopedia => Family::NonFiction,
        }
    }

    /// Exact-label lookup.
    pub fn from_label(label: &str) -> Option<Genre> {
        Genre::ALL.into_iter().find(|g| g.label() == label)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated catalog identifier (`AAAA-1234`, letters in any case).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(raw: &str) -> Result<Self, BookError> {
        if ISBN_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(BookError::InvalidIsbn(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Isbn {
    type Error = BookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Isbn::parse(&value)
    }
}

impl From<Isbn> for String {
    fn from(value: Isbn) -> Self {
        value.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Genre-specific data. Fiction variants carry two 0-100 attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookKind {
    ScienceFiction { scientific_accuracy: u8, action_level: u8 },
    Romance { emotional_depth: u8, realism: u8 },
    Biography,
    Encyclopedia,
}

impl BookKind {
    /// Science fiction with clamped attributes.
    pub fn science_fiction(scientific_accuracy: i64, action_level: i64) -> Self {
        BookKind::ScienceFiction {
            scientific_accuracy: clamp_attribute(scientific_accuracy),
            action_level: clamp_attribute(action_level),
        }
    }

    /// Romance with clamped attributes.
    pub fn romance(emotional_depth: i64, realism: i64) -> Self {
        BookKind::Romance {
            emotional_depth: clamp_attribute(emotional_depth),
            realism: clamp_attribute(realism),
        }
    }

    /// Build the variant for `genre`. `attrs` is ignored for non-fiction.
    pub fn for_genre(genre: Genre, attrs: (i64, i64)) -> Self {
        match genre {
            Genre::ScienceFiction => BookKind::science_fiction(attrs.0, attrs.1),
            Genre::Romance => BookKind::romance(attrs.0, attrs.1),
            Genre::Biography => BookKind::Biography,
            Genre::Encyclopedia => BookKind::Encyclopedia,
        }
    }

    pub fn genre(&self) -> Genre {
        match self {
            BookKind::ScienceFiction { .. } => Genre::ScienceFiction,
            BookKind::Romance { .. } => Genre::Romance,
            BookKind::Biography => Genre::Biography,
            BookKind::Encyclopedia => Genre::Encyclopedia,
        }
    }
}

/// A catalog entry. `grade` is written once per run by the grader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    price: f64,
    year: i32,
    isbn: Isbn,
    grade: u8,
    pub kind: BookKind,
}

impl Book {
    /// Construct a book, normalising price/year and validating the ISBN.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        year: i32,
        isbn: &str,
        kind: BookKind,
    ) -> Result<Self, BookError> {
        Ok(Self {
            title: title.into(),
            author: author.into(),
            price: normalize_price(price),
            year: normalize_year(year),
            isbn: Isbn::parse(isbn)?,
            grade: 0,
            kind,
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = normalize_price(price);
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = normalize_year(year);
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn set_isbn(&mut self, raw: &str) -> Result<(), BookError> {
        self.isbn = Isbn::parse(raw)?;
        Ok(())
    }

    pub fn grade(&self) -> u8 {
        self.grade
    }

    /// Round to the nearest integer and clamp into [0, 100].
    pub fn set_grade(&mut self, grade: f64) {
        self.grade = grade.round().clamp(0.0, 100.0) as u8;
    }

    pub fn genre(&self) -> Genre {
        self.kind.genre()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {}, published {}. Genre: {}. Price: {}. ISBN: {}. Grade: {}",
            self.title,
            self.author,
            self.year,
            self.genre(),
            self.price,
            self.isbn,
            self.grade
        )
    }
}

fn normalize_price(price: f64) -> f64 {
    if price > 0.0 { price } else { DEFAULT_PRICE }
}

fn normalize_year(year: i32) -> i32 {
    if year > 0 { year } else { DEFAULT_YEAR }
}

fn clamp_attribute(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book::new("Blah blah", "Peter Jackson", 12.34, 2000, "AAAA-1234", BookKind::Biography).unwrap()
    }

    #[test]
    fn test_initialization() {
        let b = sample();
        assert_eq!(b.title, "Blah blah");
        assert_eq!(b.author, "Peter Jackson");
        assert_eq!(b.price(), 12.34);
        assert_eq!(b.year(), 2000);
        assert_eq!(b.isbn().as_str(), "AAAA-1234");
        assert_eq!(b.grade(), 0);
    }

    #[test]
    fn test_isbn_accepts_both_cases() {
        for raw in ["ABCD-1234", "abcd-1234", "WXYZ-5678", "wxyz-3456"] {
            assert!(Isbn::parse(raw).is_ok(), "rejected {raw}");
        }
    }

    #[test]
    fn test_isbn_rejects_bad_formats() {
        for raw in ["AB12-3456", "ABCD1234", "ABCD-12", "1234-ABCD", "AB-123456", "abcd-123", ""] {
            let err = Isbn::parse(raw).unwrap_err();
            assert!(err.to_string().contains("invalid ISBN format"), "accepted {raw}");
        }
    }

    #[test]
    fn test_constructor_fails_on_bad_isbn() {
        let err = Book::new("X", "Y", 5.0, 1999, "ABCD1234", BookKind::Encyclopedia).unwrap_err();
        assert_eq!(err, BookError::InvalidIsbn("ABCD1234".to_string()));
    }

    #[test]
    fn test_set_isbn_keeps_old_value_on_error() {
        let mut b = sample();
        let before = b.isbn().clone();
        let err = b.set_isbn("12-ABCD").unwrap_err();
        assert_eq!(err, BookError::InvalidIsbn("12-ABCD".to_string()));
        assert_eq!(b.isbn(), &before);

        b.set_isbn("wxyz-0042").unwrap();
        assert_eq!(b.isbn().as_str(), "wxyz-0042");
    }

    #[test]
    fn test_price_and_year_defaults() {
        let mut b = sample();
        b.set_price(-100.0);
        assert_eq!(b.price(), DEFAULT_PRICE);
        b.set_price(0.0);
        assert_eq!(b.price(), DEFAULT_PRICE);
        b.set_year(-100);
        assert_eq!(b.year(), DEFAULT_YEAR);
        b.set_year(0);
        assert_eq!(b.year(), DEFAULT_YEAR);

        let fresh = Book::new("Z", "Q", 0.0, 0, "ZZZZ-0000", BookKind::Biography).unwrap();
        assert_eq!(fresh.price(), DEFAULT_PRICE);
        assert_eq!(fresh.year(), DEFAULT_YEAR);
    }

    #[test]
    fn test_attribute_clamping() {
        assert_eq!(
            BookKind::romance(105, -10),
            BookKind::Romance { emotional_depth: 100, realism: 0 }
        );
        assert_eq!(
            BookKind::science_fiction(-5, 89),
            BookKind::ScienceFiction { scientific_accuracy: 0, action_level: 89 }
        );
    }

    #[test]
    fn test_grade_clamped_and_rounded() {
        let mut b = sample();
        b.set_grade(140.0);
        assert_eq!(b.grade(), 100);
        b.set_grade(-3.0);
        assert_eq!(b.grade(), 0);
        b.set_grade(44.6);
        assert_eq!(b.grade(), 45);
    }

    #[test]
    fn test_display() {
        let mut b = sample();
        b.set_grade(10.0);
        assert_eq!(
            b.to_string(),
            "Blah blah by Peter Jackson, published 2000. Genre: Biography. \
             Price: 12.34. ISBN: AAAA-1234. Grade: 10"
        );
    }

    #[test]
    fn test_genre_labels_and_families() {
        assert_eq!(Genre::from_label("Science Fiction"), Some(Genre::ScienceFiction));
        assert_eq!(Genre::from_label("science fiction"), None);
        assert_eq!(Genre::Romance.family(), Family::Fiction);
        assert_eq!(Genre::Encyclopedia.family(), Family::NonFiction);
    }

    #[test]
    fn test_isbn_serde_validates() {
        let ok: Isbn = serde_json::from_str("\"abcd-1234\"").unwrap();
        assert_eq!(ok.as_str(), "abcd-1234");
        assert!(serde_json::from_str::<Isbn>("\"abcd1234\"").is_err());
    }
}
