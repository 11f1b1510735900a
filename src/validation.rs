//! Form validation for book records.
//!
//! Rules are pure functions of a field value and a [`ValidationContext`];
//! [`FieldValidator`] keeps the last computed error mapping so a form can
//! validate on submit, on blur, and clear entries as the user types.

use crate::models::{Book, BookDraft, Genre, DEFAULT_LANGUAGE};
use chrono::{Datelike, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

pub const TITLE_MAX_LEN: usize = 200;
pub const AUTHOR_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const NOTES_MAX_LEN: usize = 500;
pub const MIN_YEAR: i64 = 1000;
pub const MAX_YEAR: i64 = 9999;
pub const MAX_PAGES: f64 = 10000.0;

static ISBN_RE: OnceLock<Regex> = OnceLock::new();

fn isbn_regex() -> &'static Regex {
    ISBN_RE.get_or_init(|| {
        Regex::new(r"^(?:[0-9]{9}[0-9X]|[0-9]{13})$").expect("valid isbn regex")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookField {
    Title,
    Author,
    Genre,
    PublicationYear,
    Isbn,
    Pages,
    Rating,
    Price,
    CoverImage,
    Description,
    Notes,
}

impl BookField {
    pub const ALL: [BookField; 11] = [
        BookField::Title,
        BookField::Author,
        BookField::Genre,
        BookField::PublicationYear,
        BookField::Isbn,
        BookField::Pages,
        BookField::Rating,
        BookField::Price,
        BookField::CoverImage,
        BookField::Description,
        BookField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Genre => "genre",
            BookField::PublicationYear => "publicationYear",
            BookField::Isbn => "isbn",
            BookField::Pages => "pages",
            BookField::Rating => "rating",
            BookField::Price => "price",
            BookField::CoverImage => "coverImage",
            BookField::Description => "description",
            BookField::Notes => "notes",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BookField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| format!("Field has no validation rule: {}", value))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be at most 200 characters")]
    TitleTooLong,
    #[error("Author is required")]
    AuthorRequired,
    #[error("Author must be at most 100 characters")]
    AuthorTooLong,
    #[error("Genre is required")]
    GenreRequired,
    #[error("Unknown genre")]
    GenreInvalid,
    #[error("Publication year must be a whole number between 1000 and 9999")]
    YearInvalid,
    #[error("Publication year cannot be in the future")]
    YearFuture,
    #[error("ISBN must have 10 or 13 digits")]
    IsbnInvalid,
    #[error("Page count must be a positive whole number")]
    PagesInvalid,
    #[error("Page count cannot exceed 10000")]
    PagesTooHigh,
    #[error("Rating must be between 1 and 5")]
    RatingInvalid,
    #[error("Price must be a non-negative number")]
    PriceInvalid,
    #[error("Cover image must be a valid URL")]
    UrlInvalid,
    #[error("Description must be at most 1000 characters")]
    DescriptionTooLong,
    #[error("Notes must be at most 500 characters")]
    NotesTooLong,
}

impl FieldError {
    /// Stable lookup key for translated messages.
    pub fn key(&self) -> &'static str {
        match self {
            FieldError::TitleRequired => "errors.title_required",
            FieldError::TitleTooLong => "errors.title_too_long",
            FieldError::AuthorRequired => "errors.author_required",
            FieldError::AuthorTooLong => "errors.author_too_long",
            FieldError::GenreRequired => "errors.genre_required",
            FieldError::GenreInvalid => "errors.genre_invalid",
            FieldError::YearInvalid => "errors.year_invalid",
            FieldError::YearFuture => "errors.year_future",
            FieldError::IsbnInvalid => "errors.isbn_invalid",
            FieldError::PagesInvalid => "errors.pages_invalid",
            FieldError::PagesTooHigh => "errors.pages_too_high",
            FieldError::RatingInvalid => "errors.rating_invalid",
            FieldError::PriceInvalid => "errors.price_invalid",
            FieldError::UrlInvalid => "errors.url_invalid",
            FieldError::DescriptionTooLong => "errors.description_too_long",
            FieldError::NotesTooLong => "errors.notes_too_long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// Years after this one are rejected as future-dated
    pub current_year: i32,
}

impl ValidationContext {
    pub fn for_year(current_year: i32) -> Self {
        ValidationContext { current_year }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        ValidationContext {
            current_year: Utc::now().year(),
        }
    }
}

/// String-valued book fields as a form edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: String,
    pub isbn: String,
    pub description: String,
    pub pages: String,
    pub language: String,
    pub status: String,
    pub rating: String,
    pub purchase_date: String,
    pub price: String,
    pub publisher: String,
    pub cover_image: String,
    pub notes: String,
    pub is_favorite: bool,
}

impl Default for BookForm {
    fn default() -> Self {
        BookForm {
            title: String::new(),
            author: String::new(),
            genre: String::new(),
            publication_year: String::new(),
            isbn: String::new(),
            description: String::new(),
            pages: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            status: crate::models::BookStatus::default().as_str().to_string(),
            rating: String::new(),
            purchase_date: String::new(),
            price: String::new(),
            publisher: String::new(),
            cover_image: String::new(),
            notes: String::new(),
            is_favorite: false,
        }
    }
}

impl BookForm {
    /// Prefill a form for editing an existing record.
    pub fn from_book(book: &Book) -> Self {
        fn or_blank<T: ToString>(value: Option<T>) -> String {
            value.map(|inner| inner.to_string()).unwrap_or_default()
        }

        BookForm {
            title: book.title.clone(),
            author: book.author.clone(),
            genre: or_blank(book.genre.map(|genre| genre.as_str())),
            publication_year: book.publication_year.to_string(),
            isbn: book.isbn.clone(),
            description: book.description.clone(),
            pages: or_blank(book.pages),
            language: book.language.clone(),
            status: book.status.as_str().to_string(),
            rating: or_blank(book.rating),
            purchase_date: or_blank(book.purchase_date.map(|date| date.format("%Y-%m-%d"))),
            price: or_blank(book.price),
            publisher: book.publisher.clone(),
            cover_image: book.cover_image.clone(),
            notes: book.notes.clone(),
            is_favorite: book.is_favorite,
        }
    }

    pub fn value(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Genre => &self.genre,
            BookField::PublicationYear => &self.publication_year,
            BookField::Isbn => &self.isbn,
            BookField::Pages => &self.pages,
            BookField::Rating => &self.rating,
            BookField::Price => &self.price,
            BookField::CoverImage => &self.cover_image,
            BookField::Description => &self.description,
            BookField::Notes => &self.notes,
        }
    }

    /// Convert into a draft with the store's numeric coercions applied.
    pub fn to_draft(&self) -> serde_json::Result<BookDraft> {
        serde_json::from_value(serde_json::to_value(self)?)
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn parse_integer(value: &str) -> Option<i64> {
    parse_number(value)
        .filter(|number| number.fract() == 0.0)
        .map(|number| number as i64)
}

fn too_long(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

/// Check one field. `None` means the value passes.
pub fn check_field(field: BookField, value: &str, context: &ValidationContext) -> Option<FieldError> {
    let blank = value.trim().is_empty();
    match field {
        BookField::Title if blank => Some(FieldError::TitleRequired),
        BookField::Title if too_long(value, TITLE_MAX_LEN) => Some(FieldError::TitleTooLong),
        BookField::Author if blank => Some(FieldError::AuthorRequired),
        BookField::Author if too_long(value, AUTHOR_MAX_LEN) => Some(FieldError::AuthorTooLong),
        BookField::Genre if blank => Some(FieldError::GenreRequired),
        BookField::Genre => value.parse::<Genre>().err().map(|_| FieldError::GenreInvalid),
        BookField::PublicationYear if !blank => match parse_integer(value) {
            // a future year wins over the generic range message
            Some(year) if year > i64::from(context.current_year) => Some(FieldError::YearFuture),
            Some(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => None,
            _ => Some(FieldError::YearInvalid),
        },
        BookField::Isbn if blank => None,
        BookField::Isbn => {
            let cleaned: String = value.chars().filter(|ch| !matches!(ch, '-' | ' ')).collect();
            if cleaned.is_empty() || isbn_regex().is_match(&cleaned) {
                None
            } else {
                Some(FieldError::IsbnInvalid)
            }
        }
        BookField::Pages if !blank => match parse_number(value) {
            Some(pages) if pages.fract() != 0.0 || pages <= 0.0 => Some(FieldError::PagesInvalid),
            Some(pages) if pages > MAX_PAGES => Some(FieldError::PagesTooHigh),
            Some(_) => None,
            None => Some(FieldError::PagesInvalid),
        },
        BookField::Rating if !blank => match parse_integer(value) {
            Some(rating) if (1..=5).contains(&rating) => None,
            _ => Some(FieldError::RatingInvalid),
        },
        BookField::Price if !blank => match parse_number(value) {
            Some(price) if price >= 0.0 => None,
            _ => Some(FieldError::PriceInvalid),
        },
        BookField::CoverImage if !blank => Url::parse(value.trim())
            .err()
            .map(|_| FieldError::UrlInvalid),
        BookField::Description if too_long(value, DESCRIPTION_MAX_LEN) => {
            Some(FieldError::DescriptionTooLong)
        }
        BookField::Notes if too_long(value, NOTES_MAX_LEN) => Some(FieldError::NotesTooLong),
        _ => None,
    }
}

/// Every rule over a whole form. An empty map means the form is valid.
pub fn validate_book(form: &BookForm, context: &ValidationContext) -> BTreeMap<BookField, FieldError> {
    BookField::ALL
        .iter()
        .filter_map(|field| {
            check_field(*field, form.value(*field), context).map(|error| (*field, error))
        })
        .collect()
}

/// Holds the last computed error mapping for one form.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    errors: BTreeMap<BookField, FieldError>,
}

impl FieldValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mapping with the result of every rule.
    pub fn validate_all(&mut self, form: &BookForm, context: &ValidationContext) -> bool {
        self.errors = validate_book(form, context);
        self.errors.is_empty()
    }

    /// Re-check one named field, replacing or clearing only its entry.
    /// Names without a rule always pass.
    pub fn validate_field(&mut self, name: &str, value: &str, context: &ValidationContext) -> bool {
        let Ok(field) = name.parse::<BookField>() else {
            return true;
        };
        match check_field(field, value, context) {
            Some(error) => {
                self.errors.insert(field, error);
                false
            }
            None => {
                self.errors.remove(&field);
                true
            }
        }
    }

    pub fn clear_field_error(&mut self, name: &str) {
        if let Ok(field) = name.parse::<BookField>() {
            self.errors.remove(&field);
        }
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn errors(&self) -> &BTreeMap<BookField, FieldError> {
        &self.errors
    }

    pub fn error(&self, field: BookField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Field name to display message.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }
}
