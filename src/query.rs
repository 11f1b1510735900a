//! Search, filtering and sorting over a slice of books.
//!
//! Everything here is pure: the stored collection is never touched.

use crate::error::StoreError;
use crate::models::{Book, BookStatus, Genre};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Exact-match narrowing applied after the text query. `None` means
/// "do not filter on this field".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub status: Option<BookStatus>,
    pub genre: Option<Genre>,
    pub rating: Option<u8>,
    pub publication_year: Option<i32>,
    pub favorites: Option<bool>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
            && self.publication_year.is_none()
            && self.favorites.is_none()
    }

    fn matches(&self, book: &Book) -> bool {
        self.status.map_or(true, |status| book.status == status)
            && self.genre.map_or(true, |genre| book.genre == Some(genre))
            && self.rating.map_or(true, |rating| book.rating == Some(rating))
            && self
                .publication_year
                .map_or(true, |year| book.publication_year == year)
            && self
                .favorites
                .map_or(true, |favorite| book.is_favorite == favorite)
    }
}

fn matches_query(book: &Book, needle: &str) -> bool {
    let genre = book.genre.map(|genre| genre.as_str()).unwrap_or("");
    [
        book.title.as_str(),
        book.author.as_str(),
        genre,
        book.isbn.as_str(),
        book.description.as_str(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(needle))
}

/// Case-insensitive text search plus filters, all ANDed, in stored order.
pub fn search(books: &[Book], query: &str, filters: &SearchFilters) -> Vec<Book> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() && filters.is_empty() {
        return books.to_vec();
    }
    books
        .iter()
        .filter(|book| needle.is_empty() || matches_query(book, &needle))
        .filter(|book| filters.matches(book))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Title,
    Author,
    Genre,
    Status,
    PublicationYear,
    Rating,
    Pages,
    Price,
    CreatedAt,
    UpdatedAt,
}

impl SortKey {
    pub const ALL: [SortKey; 10] = [
        SortKey::Title,
        SortKey::Author,
        SortKey::Genre,
        SortKey::Status,
        SortKey::PublicationYear,
        SortKey::Rating,
        SortKey::Pages,
        SortKey::Price,
        SortKey::CreatedAt,
        SortKey::UpdatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Genre => "genre",
            SortKey::Status => "status",
            SortKey::PublicationYear => "publicationYear",
            SortKey::Rating => "rating",
            SortKey::Pages => "pages",
            SortKey::Price => "price",
            SortKey::CreatedAt => "createdAt",
            SortKey::UpdatedAt => "updatedAt",
        }
    }

    fn value(&self, book: &Book) -> SortValue {
        match self {
            SortKey::Title => SortValue::text(&book.title),
            SortKey::Author => SortValue::text(&book.author),
            SortKey::Genre => book
                .genre
                .map(|genre| SortValue::text(genre.as_str()))
                .unwrap_or(SortValue::Missing),
            SortKey::Status => SortValue::text(book.status.as_str()),
            SortKey::PublicationYear => SortValue::Number(f64::from(book.publication_year)),
            SortKey::Rating => book
                .rating
                .map(|rating| SortValue::Number(f64::from(rating)))
                .unwrap_or(SortValue::Missing),
            SortKey::Pages => book
                .pages
                .map(|pages| SortValue::Number(f64::from(pages)))
                .unwrap_or(SortValue::Missing),
            SortKey::Price => book.price.map(SortValue::Number).unwrap_or(SortValue::Missing),
            SortKey::CreatedAt => SortValue::Instant(book.created_at),
            SortKey::UpdatedAt => SortValue::Instant(book.updated_at),
        }
    }
}

impl FromStr for SortKey {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == value.trim())
            .ok_or_else(|| StoreError::UnknownSortKey(value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = StoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(StoreError::UnknownSortOrder(value.to_string())),
        }
    }
}

/// Comparable projection of one field. `Missing` orders like the empty
/// string: before every present value, equal to an empty text.
enum SortValue {
    Missing,
    Text(String),
    Number(f64),
    Instant(DateTime<Utc>),
}

impl SortValue {
    fn text(value: &str) -> Self {
        SortValue::Text(value.to_lowercase())
    }

    fn is_blank(&self) -> bool {
        match self {
            SortValue::Missing => true,
            SortValue::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Instant(a), SortValue::Instant(b)) => a.cmp(b),
            _ => other.is_blank().cmp(&self.is_blank()),
        }
    }
}

/// Stable sort by one field; `Desc` is the negated `Asc` comparator.
pub fn sort_books(mut books: Vec<Book>, key: SortKey, order: SortOrder) -> Vec<Book> {
    books.sort_by(|a, b| {
        let ordering = key.value(a).compare(&key.value(b));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
    books
}

/// Values a filter picker can offer for the current collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub statuses: Vec<BookStatus>,
    pub genres: Vec<Genre>,
    pub ratings: Vec<u8>,
}

pub fn filter_options(books: &[Book]) -> FilterOptions {
    let mut statuses = Vec::new();
    let mut genres = Vec::new();
    for book in books {
        if !statuses.contains(&book.status) {
            statuses.push(book.status);
        }
        if let Some(genre) = book.genre {
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }
    }
    FilterOptions {
        statuses,
        genres,
        ratings: (1..=5).collect(),
    }
}
