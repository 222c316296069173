//! Ordering graded books and picking the top matches.

use serde::Serialize;

use crate::book::{Book, Genre};

/// How many books are shown by default.
pub const DEFAULT_TOP_N: usize = 5;

/// One row of the result list handed to the display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    /// 1-based position.
    pub index: usize,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: Genre,
    pub price: f64,
    pub isbn: String,
    pub grade: u8,
}

/// Books ordered by grade, highest first.
///
/// The sort is stable: equal grades keep catalog order.
pub fn rank(books: &[Book]) -> Vec<&Book> {
    let mut ordered: Vec<&Book> = books.iter().collect();
    ordered.sort_by(|a, b| b.grade().cmp(&a.grade()));
    ordered
}

/// The best `n` books (fewer if the catalog is smaller).
pub fn top_n(books: &[Book], n: usize) -> Vec<RankedEntry> {
    rank(books)
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(i, b)| RankedEntry {
            index: i + 1,
            title: b.title.clone(),
            author: b.author.clone(),
            year: b.year(),
            genre: b.genre(),
            price: b.price(),
            isbn: b.isbn().to_string(),
            grade: b.grade(),
        })
        .collect()
}
