use crate::models::{Book, BookStatus, Genre};
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

const TOP_GENRE_LIMIT: usize = 5;
const RECENT_BOOK_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: BookStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCount {
    pub genre: Genre,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStats {
    pub total: usize,
    pub read: usize,
    pub reading: usize,
    pub want_to_read: usize,
    /// Every status, zero counts included, in declaration order
    pub by_status: Vec<StatusCount>,
    pub favorites: usize,
    pub total_pages: u64,
    /// Mean over rated books only; 0 when nothing is rated
    pub average_rating: f64,
    pub genre_count: usize,
    pub books_this_year: usize,
    /// Most frequent genre slug, `""` for an empty library
    pub favorite_genre: String,
    /// Share of books marked read, as a percentage
    pub reading_progress: f64,
    pub top_genres: Vec<GenreCount>,
    pub recent_books: Vec<Book>,
}

pub fn compute(books: &[Book], now: DateTime<Utc>) -> LibraryStats {
    let count_status = |status: BookStatus| books.iter().filter(|book| book.status == status).count();
    let by_status: Vec<StatusCount> = BookStatus::ALL
        .iter()
        .map(|status| StatusCount {
            status: *status,
            count: count_status(*status),
        })
        .collect();

    let ratings: Vec<f64> = books
        .iter()
        .filter_map(|book| book.rating)
        .map(f64::from)
        .collect();
    let average_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().sum::<f64>() / ratings.len() as f64
    };

    let genre_counts = tally_genres(books);
    // ties keep the first-seen genre
    let favorite_genre = genre_counts
        .iter()
        .fold(None::<&GenreCount>, |best, current| match best {
            Some(best) if best.count >= current.count => Some(best),
            _ => Some(current),
        })
        .map(|entry| entry.genre.as_str().to_string())
        .unwrap_or_default();

    let mut top_genres = genre_counts.clone();
    top_genres.sort_by(|a, b| b.count.cmp(&a.count));
    top_genres.truncate(TOP_GENRE_LIMIT);

    let mut recent_books = books.to_vec();
    recent_books.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    recent_books.truncate(RECENT_BOOK_LIMIT);

    let total = books.len();
    let read = count_status(BookStatus::Read);
    let reading_progress = if total == 0 {
        0.0
    } else {
        read as f64 / total as f64 * 100.0
    };

    LibraryStats {
        total,
        read,
        reading: count_status(BookStatus::Reading),
        want_to_read: count_status(BookStatus::WantToRead),
        by_status,
        favorites: books.iter().filter(|book| book.is_favorite).count(),
        total_pages: books
            .iter()
            .map(|book| u64::from(book.pages.unwrap_or(0)))
            .sum(),
        average_rating,
        genre_count: genre_counts.len(),
        books_this_year: books
            .iter()
            .filter(|book| book.created_at.year() == now.year())
            .count(),
        favorite_genre,
        reading_progress,
        top_genres,
        recent_books,
    }
}

/// Genre counts in first-encountered order. Books without a genre are skipped.
fn tally_genres(books: &[Book]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    for genre in books.iter().filter_map(|book| book.genre) {
        match counts.iter_mut().find(|entry| entry.genre == genre) {
            Some(entry) => entry.count += 1,
            None => counts.push(GenreCount { genre, count: 1 }),
        }
    }
    counts
}
