//! Result presentation: grid table or JSON report.

use anyhow::{Context, Result};
use serde::Serialize;
use shelfwise_core::{Book, Criteria, RankedEntry, Recommendation, Session};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "No.")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
    #[tabled(rename = "Grade")]
    grade: String,
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "No.")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Genre")]
    genre: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "ISBN")]
    isbn: String,
}

/// Everything a `--json` run prints.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at_utc: String,
    pub criteria: &'a Criteria,
    pub session: &'a Session,
    pub recommendations: &'a [Recommendation],
    pub results: &'a [RankedEntry],
}

pub fn render_results(entries: &[RankedEntry]) -> String {
    let rows = entries.iter().map(|e| ResultRow {
        index: e.index,
        title: e.title.clone(),
        author: e.author.clone(),
        year: e.year,
        genre: e.genre.to_string(),
        price: format!("${:.2}", e.price),
        isbn: e.isbn.clone(),
        grade: format!("{}/100", e.grade),
    });
    Table::new(rows).with(Style::ascii()).to_string()
}

pub fn render_catalog(books: &[Book]) -> String {
    let rows = books.iter().enumerate().map(|(i, b)| CatalogRow {
        index: i + 1,
        title: b.title.clone(),
        author: b.author.clone(),
        year: b.year(),
        genre: b.genre().to_string(),
        price: format!("${:.2}", b.price()),
        isbn: b.isbn().to_string(),
    });
    Table::new(rows).with(Style::ascii()).to_string()
}

pub fn render_json(report: &Report<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}
