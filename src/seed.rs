//! Fixed sample set used to populate a library that has never been saved.

use crate::models::{Book, BookDraft, BookStatus, Genre};
use chrono::{DateTime, NaiveDate, Utc};

struct Sample {
    id: &'static str,
    title: &'static str,
    author: &'static str,
    genre: Genre,
    year: i32,
    isbn: &'static str,
    description: &'static str,
    pages: u32,
    status: BookStatus,
    rating: Option<u8>,
    publisher: &'static str,
    cover_image: &'static str,
    notes: &'static str,
    favorite: bool,
    added_on: (i32, u32, u32),
}

const SAMPLES: [Sample; 8] = [
    Sample {
        id: "1",
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        genre: Genre::Fiction,
        year: 1960,
        isbn: "978-0-06-112008-4",
        description: "A gripping tale of racial injustice and childhood innocence in the American South.",
        pages: 376,
        status: BookStatus::Read,
        rating: Some(5),
        publisher: "J.B. Lippincott & Co.",
        cover_image: "/images/4img.jpg",
        notes: "A powerful story about justice and morality.",
        favorite: true,
        added_on: (2024, 1, 1),
    },
    Sample {
        id: "2",
        title: "1984",
        author: "George Orwell",
        genre: Genre::ScienceFiction,
        year: 1949,
        isbn: "978-0-452-28423-4",
        description: "A dystopian social science fiction novel about totalitarian control.",
        pages: 328,
        status: BookStatus::Read,
        rating: Some(5),
        publisher: "Secker & Warburg",
        cover_image: "https://images.pexels.com/photos/1029141/pexels-photo-1029141.jpeg?auto=compress&cs=tinysrgb&w=300&h=400&fit=crop",
        notes: "Thought-provoking and eerily relevant.",
        favorite: true,
        added_on: (2024, 1, 2),
    },
    Sample {
        id: "3",
        title: "Pride and Prejudice",
        author: "Jane Austen",
        genre: Genre::Romance,
        year: 1813,
        isbn: "978-0-14-143951-8",
        description: "A romantic novel about manners, upbringing, morality, and marriage.",
        pages: 432,
        status: BookStatus::Reading,
        rating: Some(4),
        publisher: "T. Egerton",
        cover_image: "/images/7img.jpg",
        notes: "Beautiful writing and character development.",
        favorite: false,
        added_on: (2024, 1, 3),
    },
    Sample {
        id: "4",
        title: "The Catcher in the Rye",
        author: "J.D. Salinger",
        genre: Genre::Fiction,
        year: 1951,
        isbn: "978-0-316-76948-0",
        description: "A coming-of-age story about teenage rebellion and alienation.",
        pages: 277,
        status: BookStatus::WantToRead,
        rating: None,
        publisher: "Little, Brown and Company",
        cover_image: "/images/2img.jpg",
        notes: "Heard great things about this classic.",
        favorite: false,
        added_on: (2024, 1, 4),
    },
    Sample {
        id: "5",
        title: "Sapiens",
        author: "Yuval Noah Harari",
        genre: Genre::History,
        year: 2011,
        isbn: "978-0-06-231609-7",
        description: "A brief history of humankind and how we came to dominate the world.",
        pages: 443,
        status: BookStatus::Available,
        rating: Some(4),
        publisher: "Harper",
        cover_image: "/images/8img.jpg",
        notes: "Fascinating insights into human evolution.",
        favorite: false,
        added_on: (2024, 1, 5),
    },
    Sample {
        id: "6",
        title: "Harry Potter and the Sorcerer's Stone",
        author: "J.K. Rowling",
        genre: Genre::Fantasy,
        year: 1997,
        isbn: "978-0-439-70818-8",
        description: "A young wizard discovers his magical heritage on his 11th birthday.",
        pages: 309,
        status: BookStatus::Read,
        rating: Some(5),
        publisher: "Bloomsbury",
        cover_image: "/images/6img.jpg",
        notes: "A magical adventure that started it all.",
        favorite: true,
        added_on: (2024, 1, 6),
    },
    Sample {
        id: "7",
        title: "The Alchemist",
        author: "Paulo Coelho",
        genre: Genre::Fiction,
        year: 1988,
        isbn: "978-0-06-231500-7",
        description: "A philosophical story about following your dreams.",
        pages: 163,
        status: BookStatus::Reading,
        rating: Some(4),
        publisher: "HarperOne",
        cover_image: "/images/1img.jpg",
        notes: "Inspiring and beautifully written.",
        favorite: false,
        added_on: (2024, 1, 7),
    },
    Sample {
        id: "8",
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        genre: Genre::Fiction,
        year: 1925,
        isbn: "978-0-7432-7356-5",
        description: "A classic American novel set in the Jazz Age.",
        pages: 180,
        status: BookStatus::Available,
        rating: Some(4),
        publisher: "Scribner",
        cover_image: "/images/3img.jpg",
        notes: "Beautiful prose and compelling characters.",
        favorite: false,
        added_on: (2024, 1, 8),
    },
];

fn added_on((year, month, day): (i32, u32, u32)) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

pub fn sample_books(now: DateTime<Utc>) -> Vec<Book> {
    SAMPLES
        .iter()
        .map(|sample| {
            let stamp = added_on(sample.added_on);
            let draft = BookDraft {
                id: Some(sample.id.to_string()),
                publisher: Some(sample.publisher.to_string()),
                cover_image: Some(sample.cover_image.to_string()),
                notes: Some(sample.notes.to_string()),
                rating: Some(sample.rating),
                created_at: stamp,
                updated_at: stamp,
                ..BookDraft::new(sample.title, sample.author)
                    .with_genre(sample.genre)
                    .with_year(sample.year)
                    .with_isbn(sample.isbn)
                    .with_description(sample.description)
                    .with_pages(sample.pages)
                    .with_status(sample.status)
                    .with_favorite(sample.favorite)
            };
            Book::from_draft(draft, now)
        })
        .collect()
}
