use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookEntity abstracts a book title in the store catalog. The id is owned by the
// repository: new entities carry 0 until the repository assigns one on add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: i64,
    pub title: String,
    pub author: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            book_id: 0,
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    pub fn with_id(book_id: i64, title: &str, author: &str) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("Pride and Prejudice", "Jane Austen");
        assert_eq!("Pride and Prejudice", book.title.as_str());
        assert_eq!("Jane Austen", book.author.as_str());
        assert_eq!(0, book.id());
    }

    #[tokio::test]
    async fn test_should_serialize_books() {
        let book = BookEntity::with_id(3, "The Great Gatsby", "F. Scott Fitzgerald");
        let val = serde_json::to_value(&book).expect("should serialize book");
        assert_eq!(json!({
            "book_id": 3,
            "title": "The Great Gatsby",
            "author": "F. Scott Fitzgerald",
        }), val);
    }
}
