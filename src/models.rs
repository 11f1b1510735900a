//! Book records and the rule that builds them from partial input.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    #[default]
    Available,
    Reading,
    Read,
    WantToRead,
    Borrowed,
    Lent,
}

impl BookStatus {
    pub const ALL: [BookStatus; 6] = [
        BookStatus::Available,
        BookStatus::Reading,
        BookStatus::Read,
        BookStatus::WantToRead,
        BookStatus::Borrowed,
        BookStatus::Lent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Reading => "reading",
            BookStatus::Read => "read",
            BookStatus::WantToRead => "want_to_read",
            BookStatus::Borrowed => "borrowed",
            BookStatus::Lent => "lent",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BookStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == value.trim())
            .ok_or_else(|| format!("Unknown book status: {}", value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Fiction,
    NonFiction,
    Mystery,
    Romance,
    ScienceFiction,
    Fantasy,
    Biography,
    History,
    SelfHelp,
    Business,
    Technology,
    Health,
    Travel,
    Cooking,
    Art,
    Philosophy,
    Psychology,
    Education,
    Children,
    YoungAdult,
}

impl Genre {
    pub const ALL: [Genre; 20] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Fantasy,
        Genre::Biography,
        Genre::History,
        Genre::SelfHelp,
        Genre::Business,
        Genre::Technology,
        Genre::Health,
        Genre::Travel,
        Genre::Cooking,
        Genre::Art,
        Genre::Philosophy,
        Genre::Psychology,
        Genre::Education,
        Genre::Children,
        Genre::YoungAdult,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::NonFiction => "non_fiction",
            Genre::Mystery => "mystery",
            Genre::Romance => "romance",
            Genre::ScienceFiction => "science_fiction",
            Genre::Fantasy => "fantasy",
            Genre::Biography => "biography",
            Genre::History => "history",
            Genre::SelfHelp => "self_help",
            Genre::Business => "business",
            Genre::Technology => "technology",
            Genre::Health => "health",
            Genre::Travel => "travel",
            Genre::Cooking => "cooking",
            Genre::Art => "art",
            Genre::Philosophy => "philosophy",
            Genre::Psychology => "psychology",
            Genre::Education => "education",
            Genre::Children => "children",
            Genre::YoungAdult => "young_adult",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Genre {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .iter()
            .copied()
            .find(|genre| genre.as_str() == value.trim())
            .ok_or_else(|| format!("Unknown genre: {}", value))
    }
}

/// A fully populated book record.
///
/// Built only through [`Book::from_draft`], so every attribute is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    pub title: String,
    pub author: String,
    /// `None` only for records imported or loaded without a recognizable genre
    pub genre: Option<Genre>,
    pub publication_year: i32,
    pub isbn: String,
    pub description: String,
    pub pages: Option<u32>,
    pub language: String,
    pub status: BookStatus,
    /// 1..=5 when present
    pub rating: Option<u8>,
    pub purchase_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub publisher: String,
    pub cover_image: String,
    pub notes: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Record-construction rule: fill every attribute the draft leaves out.
    pub fn from_draft(draft: BookDraft, now: DateTime<Utc>) -> Self {
        let id = draft
            .id
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(new_book_id);
        let created_at = draft.created_at.unwrap_or(now);
        let updated_at = draft.updated_at.unwrap_or(now).max(created_at);

        Book {
            id,
            title: draft.title.unwrap_or_default(),
            author: draft.author.unwrap_or_default(),
            genre: draft.genre.flatten(),
            publication_year: draft
                .publication_year
                .flatten()
                .unwrap_or_else(|| now.year()),
            isbn: draft.isbn.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            pages: draft.pages.flatten(),
            language: draft
                .language
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            status: draft.status.unwrap_or_default(),
            rating: draft.rating.flatten(),
            purchase_date: draft.purchase_date.flatten(),
            price: draft.price.flatten(),
            publisher: draft.publisher.unwrap_or_default(),
            cover_image: draft.cover_image.unwrap_or_default(),
            notes: draft.notes.unwrap_or_default(),
            is_favorite: draft.is_favorite.unwrap_or(false),
            created_at,
            updated_at,
        }
    }

    /// Merge a patch over this record. `id` and `createdAt` never change.
    pub fn apply(&mut self, patch: BookDraft, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(Some(year)) = patch.publication_year {
            self.publication_year = year;
        }
        if let Some(isbn) = patch.isbn {
            self.isbn = isbn;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(pages) = patch.pages {
            self.pages = pages;
        }
        if let Some(language) = patch.language {
            self.language = if language.trim().is_empty() {
                DEFAULT_LANGUAGE.to_string()
            } else {
                language
            };
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(purchase_date) = patch.purchase_date {
            self.purchase_date = purchase_date;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(publisher) = patch.publisher {
            self.publisher = publisher;
        }
        if let Some(cover_image) = patch.cover_image {
            self.cover_image = cover_image;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(is_favorite) = patch.is_favorite {
            self.is_favorite = is_favorite;
        }
        self.touch(now);
    }

    /// Stamp `updated_at`, always moving it forward.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at
                .checked_add_signed(Duration::milliseconds(1))
                .unwrap_or(self.updated_at)
        };
    }
}

pub fn new_book_id() -> String {
    Uuid::new_v4().to_string()
}

/// Partial book input.
///
/// Used both for creation and as an update patch: a `None` field is
/// "not provided" (default on create, keep on update). For nullable
/// attributes `Some(None)` clears the stored value. Deserialization is
/// lenient so stored snapshots, imports and form payloads all load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookDraft {
    #[serde(deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient::genre")]
    pub genre: Option<Option<Genre>>,
    #[serde(deserialize_with = "lenient::year")]
    pub publication_year: Option<Option<i32>>,
    #[serde(deserialize_with = "lenient::text")]
    pub isbn: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::pages")]
    pub pages: Option<Option<u32>>,
    #[serde(deserialize_with = "lenient::text")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient::status")]
    pub status: Option<BookStatus>,
    #[serde(deserialize_with = "lenient::rating")]
    pub rating: Option<Option<u8>>,
    #[serde(deserialize_with = "lenient::date")]
    pub purchase_date: Option<Option<NaiveDate>>,
    #[serde(deserialize_with = "lenient::price")]
    pub price: Option<Option<f64>>,
    #[serde(deserialize_with = "lenient::text")]
    pub publisher: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub cover_image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_favorite: Option<bool>,
    #[serde(deserialize_with = "lenient::instant")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::instant")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        BookDraft {
            title: Some(title.into()),
            author: Some(author.into()),
            ..BookDraft::default()
        }
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(Some(genre));
        self
    }

    pub fn with_status(mut self, status: BookStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.publication_year = Some(Some(year));
        self
    }

    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_pages(mut self, pages: u32) -> Self {
        self.pages = Some(lenient::positive_pages(pages));
        self
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(lenient::rating_in_scale(rating));
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(lenient::non_negative_price(price));
        self
    }

    pub fn with_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = Some(is_favorite);
        self
    }

    /// Has both a non-blank title and a non-blank author.
    pub fn has_title_and_author(&self) -> bool {
        let filled = |value: &Option<String>| {
            value
                .as_deref()
                .map(|text| !text.trim().is_empty())
                .unwrap_or(false)
        };
        filled(&self.title) && filled(&self.author)
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        BookDraft {
            id: Some(book.id.clone()),
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            genre: Some(book.genre),
            publication_year: Some(Some(book.publication_year)),
            isbn: Some(book.isbn.clone()),
            description: Some(book.description.clone()),
            pages: Some(book.pages),
            language: Some(book.language.clone()),
            status: Some(book.status),
            rating: Some(book.rating),
            purchase_date: Some(book.purchase_date),
            price: Some(book.price),
            publisher: Some(book.publisher.clone()),
            cover_image: Some(book.cover_image.clone()),
            notes: Some(book.notes.clone()),
            is_favorite: Some(book.is_favorite),
            created_at: Some(book.created_at),
            updated_at: Some(book.updated_at),
        }
    }
}

/// Coercions for loosely shaped JSON: numbers may arrive as strings,
/// blanks mean "no value", unknown enum slugs fall back.
mod lenient {
    use super::{BookStatus, Genre};
    use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn present<'de, D, T>(
        deserializer: D,
        convert: fn(&Value) -> Option<T>,
    ) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Some(convert(&value)))
    }

    fn number(value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
            _ => None,
        };
        parsed.filter(|number| number.is_finite())
    }

    fn integer(value: &Value) -> Option<i64> {
        number(value)
            .filter(|number| number.fract() == 0.0)
            .map(|number| number as i64)
    }

    pub(super) fn positive_pages(pages: u32) -> Option<u32> {
        (pages > 0).then_some(pages)
    }

    pub(super) fn rating_in_scale(rating: u8) -> Option<u8> {
        (1..=5).contains(&rating).then_some(rating)
    }

    pub(super) fn non_negative_price(price: f64) -> Option<f64> {
        (price.is_finite() && price >= 0.0).then_some(price)
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        })
    }

    pub fn year<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        present(deserializer, |value| {
            integer(value)
                .and_then(|year| i32::try_from(year).ok())
                .filter(|year| *year != 0)
        })
    }

    pub fn pages<'de, D>(deserializer: D) -> Result<Option<Option<u32>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        present(deserializer, |value| {
            integer(value)
                .and_then(|pages| u32::try_from(pages).ok())
                .and_then(positive_pages)
        })
    }

    pub fn rating<'de, D>(deserializer: D) -> Result<Option<Option<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        present(deserializer, |value| {
            integer(value)
                .and_then(|rating| u8::try_from(rating).ok())
                .and_then(rating_in_scale)
        })
    }

    pub fn price<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        present(deserializer, |value| number(value).and_then(non_negative_price))
    }

    pub fn genre<'de, D>(deserializer: D) -> Result<Option<Option<Genre>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        present(deserializer, |value| value.as_str()?.parse::<Genre>().ok())
    }

    pub fn status<'de, D>(deserializer: D) -> Result<Option<BookStatus>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().and_then(|raw| raw.parse::<BookStatus>().ok()))
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Bool(flag) => Some(flag),
            Value::String(text) => match text.trim() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        })
    }

    pub fn date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        present(deserializer, |value| {
            let raw = value.as_str()?.trim();
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .or_else(|| {
                    DateTime::parse_from_rfc3339(raw)
                        .ok()
                        .map(|instant| instant.with_timezone(&Utc).date_naive())
                })
        })
    }

    pub fn instant<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let instant = match value {
            Value::String(text) => parse_instant(text.trim()),
            Value::Number(number) => number
                .as_i64()
                .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
            _ => None,
        };
        Ok(instant.filter(storable))
    }

    /// RFC 3339 only carries four-digit years.
    fn storable(instant: &DateTime<Utc>) -> bool {
        (0..=9999).contains(&instant.year())
    }

    fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(instant.with_timezone(&Utc)).filter(storable);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
            .filter(storable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn construction_fills_every_default() {
        let now = at(2025, 3, 1);
        let book = Book::from_draft(BookDraft::default(), now);

        assert!(!book.id.is_empty());
        assert_eq!(book.title, "");
        assert_eq!(book.genre, None);
        assert_eq!(book.publication_year, 2025);
        assert_eq!(book.language, DEFAULT_LANGUAGE);
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(book.rating, None);
        assert!(!book.is_favorite);
        assert_eq!(book.created_at, now);
        assert_eq!(book.updated_at, now);
    }

    #[test]
    fn lenient_draft_coerces_numeric_strings() {
        let draft = BookDraft::from_json(
            r#"{"title":"Dune","author":"Frank Herbert","genre":"science_fiction",
                "publicationYear":"1965","pages":"412","rating":"4","price":"9.99",
                "purchaseDate":"2024-02-10","isFavorite":true,"legacyField":"dropped"}"#,
        )
        .expect("draft parses");

        assert_eq!(draft.publication_year, Some(Some(1965)));
        assert_eq!(draft.pages, Some(Some(412)));
        assert_eq!(draft.rating, Some(Some(4)));
        assert_eq!(draft.price, Some(Some(9.99)));
        assert_eq!(draft.genre, Some(Some(Genre::ScienceFiction)));
        assert_eq!(
            draft.purchase_date,
            Some(NaiveDate::from_ymd_opt(2024, 2, 10))
        );
        assert_eq!(draft.is_favorite, Some(true));
    }

    #[test]
    fn blanks_and_garbage_become_no_value() {
        let draft = BookDraft::from_json(
            r#"{"pages":"","rating":"abc","price":null,"genre":"poetry","status":"shelved"}"#,
        )
        .expect("draft parses");

        assert_eq!(draft.pages, Some(None));
        assert_eq!(draft.rating, Some(None));
        assert_eq!(draft.price, Some(None));
        assert_eq!(draft.genre, Some(None));
        assert_eq!(draft.status, None);

        let book = Book::from_draft(draft, at(2025, 1, 1));
        assert_eq!(book.status, BookStatus::Available);
        assert_eq!(book.pages, None);
    }

    #[test]
    fn apply_keeps_identity_and_absent_fields() {
        let created = at(2024, 1, 1);
        let mut book = Book::from_draft(
            BookDraft::new("Emma", "Jane Austen")
                .with_genre(Genre::Romance)
                .with_pages(474),
            created,
        );
        let original = book.clone();

        book.apply(BookDraft::default(), at(2024, 6, 1));

        assert_eq!(book.id, original.id);
        assert_eq!(book.created_at, created);
        assert_eq!(book.pages, Some(474));
        assert_eq!(book.updated_at, at(2024, 6, 1));
    }

    #[test]
    fn apply_clears_nullable_fields_explicitly() {
        let mut book = Book::from_draft(
            BookDraft::new("Emma", "Jane Austen").with_rating(3),
            at(2024, 1, 1),
        );
        let patch = BookDraft::from_json(r#"{"rating":"","publicationYear":""}"#).unwrap();
        book.apply(patch, at(2024, 1, 2));

        assert_eq!(book.rating, None);
        assert_eq!(book.publication_year, 2024);
    }

    #[test]
    fn builder_drops_out_of_range_numbers() {
        let draft = BookDraft::new("A", "B")
            .with_pages(0)
            .with_rating(9)
            .with_price(-3.0);
        assert_eq!(draft.pages, Some(None));
        assert_eq!(draft.rating, Some(None));
        assert_eq!(draft.price, Some(None));
        assert_eq!(BookDraft::new("A", "B").with_price(0.0).price, Some(Some(0.0)));
    }

    #[test]
    fn touch_moves_forward_even_when_clock_stalls() {
        let now = at(2024, 1, 1);
        let mut book = Book::from_draft(BookDraft::new("A", "B"), now);
        book.touch(now);
        assert!(book.updated_at > now);
        assert!(book.created_at <= book.updated_at);
    }

    #[test]
    fn touch_saturates_at_the_last_instant() {
        let mut book = Book::from_draft(BookDraft::new("A", "B"), at(2024, 1, 1));
        book.updated_at = DateTime::<Utc>::MAX_UTC;
        book.touch(at(2024, 1, 2));
        assert_eq!(book.updated_at, DateTime::<Utc>::MAX_UTC);
    }

    #[test]
    fn instants_past_year_9999_are_dropped() {
        let draft = BookDraft::from_json(
            r#"{"createdAt":"2024-05-01T00:00:00Z","updatedAt":8210266876799999}"#,
        )
        .unwrap();
        assert_eq!(draft.updated_at, None);
        assert!(draft.created_at.is_some());

        let draft = BookDraft::from_json(r#"{"updatedAt":253402300800000}"#).unwrap();
        assert_eq!(draft.updated_at, None);
        let draft = BookDraft::from_json(r#"{"updatedAt":253402300799999}"#).unwrap();
        assert_eq!(draft.updated_at.map(|instant| instant.year()), Some(9999));
    }

    #[test]
    fn stored_updated_at_never_precedes_created_at() {
        let draft = BookDraft::from_json(
            r#"{"createdAt":"2024-05-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        let book = Book::from_draft(draft, at(2025, 1, 1));
        assert_eq!(book.updated_at, book.created_at);
    }

    #[test]
    fn slugs_round_trip_through_from_str() {
        for genre in Genre::ALL {
            assert_eq!(genre.as_str().parse::<Genre>(), Ok(genre));
        }
        for status in BookStatus::ALL {
            assert_eq!(status.to_string().parse::<BookStatus>(), Ok(status));
        }
        assert!("poetry".parse::<Genre>().is_err());
    }
}
