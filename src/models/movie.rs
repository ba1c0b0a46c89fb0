use serde::{Deserialize, Serialize};

/// A movie record from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub runtime: i32,
    #[serde(default)]
    pub genres: Vec<String>,
    pub version: i32,
}

impl Movie {
    pub fn display_runtime(&self) -> String {
        format!("{} mins", self.runtime)
    }

    pub fn display_genres(&self) -> String {
        self.genres.join(", ")
    }
}

/// Pagination descriptor returned alongside every movie listing.
/// The server sends an empty object when the result set is empty,
/// so every field defaults to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub current_page: i64,
    #[serde(default)]
    pub page_size: i64,
    #[serde(default)]
    pub first_page: i64,
    #[serde(default)]
    pub last_page: i64,
    #[serde(default)]
    pub total_records: i64,
}

impl Metadata {
    pub fn has_previous_page(&self) -> bool {
        self.current_page > self.first_page
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Query parameters for `GET /v1/movies`. Unset fields are omitted
/// from the request URL.
#[derive(Debug, Clone, Default)]
pub struct MovieQuery {
    pub title: Option<String>,
    pub genres: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub sort: Option<String>,
}

impl MovieQuery {
    /// Query for a plain page of the catalog with no filters.
    pub fn page(page: i64, page_size: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    /// Build the query pairs in the order the API documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref title) = self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(ref genres) = self.genres {
            pairs.push(("genres", genres.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        if let Some(ref sort) = self.sort {
            pairs.push(("sort", sort.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_page_bounds() {
        let meta = Metadata {
            current_page: 2,
            page_size: 20,
            first_page: 1,
            last_page: 3,
            total_records: 45,
        };
        assert!(meta.has_previous_page());
        assert!(meta.has_next_page());

        let first = Metadata { current_page: 1, ..meta };
        assert!(!first.has_previous_page());
        assert!(first.has_next_page());

        let last = Metadata { current_page: 3, ..meta };
        assert!(last.has_previous_page());
        assert!(!last.has_next_page());
    }

    #[test]
    fn test_empty_metadata_has_no_pages() {
        // Empty result sets come back as `"metadata": {}`.
        let meta: Metadata = serde_json::from_str("{}").expect("empty metadata should parse");
        assert_eq!(meta.total_records, 0);
        assert!(!meta.has_previous_page());
        assert!(!meta.has_next_page());
    }

    #[test]
    fn test_query_pairs_omit_unset_fields() {
        let query = MovieQuery::page(2, 20);
        assert_eq!(
            query.to_pairs(),
            vec![("page", "2".to_string()), ("page_size", "20".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_full() {
        let query = MovieQuery {
            title: Some("godfather".to_string()),
            genres: Some("crime,drama".to_string()),
            page: Some(1),
            page_size: Some(10),
            sort: Some("-year".to_string()),
        };
        let pairs = query.to_pairs();
        assert_eq!(pairs.len(), 5);
        assert_eq!(pairs[0], ("title", "godfather".to_string()));
        assert_eq!(pairs[1], ("genres", "crime,drama".to_string()));
        assert_eq!(pairs[4], ("sort", "-year".to_string()));
    }

    #[test]
    fn test_movie_display_helpers() {
        let movie = Movie {
            id: 1,
            title: "Moana".to_string(),
            year: 2016,
            runtime: 107,
            genres: vec!["animation".to_string(), "adventure".to_string()],
            version: 1,
        };
        assert_eq!(movie.display_runtime(), "107 mins");
        assert_eq!(movie.display_genres(), "animation, adventure");
    }
}
