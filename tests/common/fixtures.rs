//! Book fixtures for integration tests.

#![allow(dead_code)]

use mongodb::bson::{Document, doc};

fn book(
    title: &str,
    author: &str,
    genre: &str,
    published_year: i32,
    price: f64,
    in_stock: bool,
) -> Document {
    doc! {
        "title": title,
        "author": author,
        "genre": genre,
        "published_year": published_year,
        "price": price,
        "in_stock": in_stock,
        "pages": 300,
        "publisher": "Fixture House",
    }
}

/// Twelve books covering every filter in the tour.
pub fn bookstore() -> Vec<Document> {
    vec![
        book("To Kill a Mockingbird", "Harper Lee", "Fiction", 1960, 12.99, true),
        book("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        book("The Great Gatsby", "F. Scott Fitzgerald", "Fiction", 1925, 9.99, true),
        book("Brave New World", "Aldous Huxley", "Dystopian", 1932, 11.50, false),
        book("The Hobbit", "J.R.R. Tolkien", "Fantasy", 1937, 14.99, true),
        book("The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951, 8.99, true),
        book("Pride and Prejudice", "Jane Austen", "Romance", 1813, 7.99, true),
        book("The Lord of the Rings", "J.R.R. Tolkien", "Fantasy", 1954, 19.99, true),
        book("Animal Farm", "George Orwell", "Political Satire", 1945, 8.50, false),
        book("The Alchemist", "Paulo Coelho", "Fiction", 1988, 10.99, true),
        book("The Road", "Cormac McCarthy", "Post-apocalyptic", 2006, 13.49, true),
        book("The Martian", "Andy Weir", "Science Fiction", 2011, 15.99, true),
    ]
}

/// Three books, one per decade.
pub fn one_book_per_decade() -> Vec<Document> {
    vec![
        book("1984", "George Orwell", "Dystopian", 1949, 10.99, true),
        book("The Catcher in the Rye", "J.D. Salinger", "Fiction", 1951, 8.99, true),
        book("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", "Fantasy", 1999, 12.99, true),
    ]
}

pub fn to_be_deleted() -> Document {
    book("To Be Deleted", "Nobody", "Fiction", 2020, 1.00, false)
}
