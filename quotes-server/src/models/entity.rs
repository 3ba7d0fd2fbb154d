//! Authors and categories share one shape: an id, a case-insensitive name,
//! and a foreign key column on `quotes`.

/// Which name table a lookup targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Author,
    Category,
}

impl Entity {
    /// Table holding the names.
    pub fn table(self) -> &'static str {
        match self {
            Self::Author => "authors",
            Self::Category => "categories",
        }
    }

    /// Foreign key column on `quotes` referencing this table.
    pub fn quote_column(self) -> &'static str {
        match self {
            Self::Author => "authorID",
            Self::Category => "categoryID",
        }
    }

    /// Singular JSON key (`author` / `category`).
    pub fn singular(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Category => "category",
        }
    }

    /// Plural JSON key (`authors` / `categories`).
    pub fn plural(self) -> &'static str {
        match self {
            Self::Author => "authors",
            Self::Category => "categories",
        }
    }

    /// JSON key for the id echoed by the by-id endpoints.
    pub fn id_key(self) -> &'static str {
        match self {
            Self::Author => "authorID",
            Self::Category => "categoryID",
        }
    }

    /// JSON key for the stored name echoed by the by-id endpoints.
    pub fn name_key(self) -> &'static str {
        match self {
            Self::Author => "authorName",
            Self::Category => "categoryName",
        }
    }
}

/// Path segment of `/quotes/author/{..}` and `/quotes/category/{..}`.
///
/// Integer segments address a row by id, anything else by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Id(i32),
    Name(String),
}

impl Subject {
    pub fn parse(segment: &str) -> Self {
        match segment.parse::<i32>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(segment.to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_segment_is_id() {
        assert_eq!(Subject::parse("42"), Subject::Id(42));
    }

    #[test]
    fn text_segment_is_name() {
        assert_eq!(Subject::parse("Mark Twain"), Subject::Name("Mark Twain".into()));
        assert_eq!(Subject::parse("42b"), Subject::Name("42b".into()));
    }

    #[test]
    fn keys_are_symmetric() {
        assert_eq!(Entity::Author.id_key(), "authorID");
        assert_eq!(Entity::Category.name_key(), "categoryName");
        assert_eq!(Entity::Category.plural(), "categories");
    }
}
