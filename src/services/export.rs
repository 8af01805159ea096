//! CSV export of the catalog collections

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, Category, Publisher},
    services::crud::{AuthorService, BookService, CategoryService, PublisherService},
};

/// Which collection an export request targets. Parsed from the URL slug;
/// anything else is rejected rather than silently returning an empty file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Books,
    Authors,
    Categories,
    Publishers,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Books => "all-book",
            ExportKind::Authors => "all-author",
            ExportKind::Categories => "all-category",
            ExportKind::Publishers => "all-publisher",
        }
    }
}

impl FromStr for ExportKind {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all-book" => Ok(ExportKind::Books),
            "all-author" => Ok(ExportKind::Authors),
            "all-category" => Ok(ExportKind::Categories),
            "all-publisher" => Ok(ExportKind::Publishers),
            other => Err(AppError::BadRequest(format!(
                "Unknown export kind: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flat CSV projection of an entity: a fixed header and one field list per
/// row, in matching order.
pub trait CsvRecord {
    const HEADER: &'static [&'static str];

    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for Book {
    const HEADER: &'static [&'static str] = &["id", "isbn", "name", "serial_name", "description"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.isbn.clone(),
            self.name.clone(),
            self.serial_name.clone().unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for Author {
    const HEADER: &'static [&'static str] = &["id", "name", "description"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone(),
            self.description.clone().unwrap_or_default(),
        ]
    }
}

impl CsvRecord for Category {
    const HEADER: &'static [&'static str] = &["id", "name"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone(),
        ]
    }
}

impl CsvRecord for Publisher {
    const HEADER: &'static [&'static str] = &["id", "name"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.map(|id| id.to_string()).unwrap_or_default(),
            self.name.clone(),
        ]
    }
}

/// Quote a field when it contains a separator, quote or line break; embedded
/// quotes are doubled. Everything else passes through untouched.
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write the header plus one line per record, then flush. The destination
/// stays open; closing it is the caller's responsibility.
fn write_records<T: CsvRecord, W: Write>(records: &[T], out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", T::HEADER.join(","))?;
    for record in records {
        let fields: Vec<String> = record.fields().iter().map(|f| escape_field(f)).collect();
        writeln!(out, "{}", fields.join(","))?;
    }
    out.flush()
}

/// Streams whole collections as CSV. Rows come out in the services'
/// `find_all` order.
#[derive(Clone)]
pub struct ExportService {
    books: BookService,
    authors: AuthorService,
    categories: CategoryService,
    publishers: PublisherService,
}

impl ExportService {
    pub fn new(
        books: BookService,
        authors: AuthorService,
        categories: CategoryService,
        publishers: PublisherService,
    ) -> Self {
        Self {
            books,
            authors,
            categories,
            publishers,
        }
    }

    pub async fn export_csv<W: Write + Send>(&self, kind: ExportKind, out: &mut W) -> AppResult<()> {
        match kind {
            ExportKind::Books => write_records(&self.books.find_all().await?, out)?,
            ExportKind::Authors => write_records(&self.authors.find_all().await?, out)?,
            ExportKind::Categories => write_records(&self.categories.find_all().await?, out)?,
            ExportKind::Publishers => write_records(&self.publishers.find_all().await?, out)?,
        }
        Ok(())
    }
}
