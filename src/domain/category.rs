//! Article categories.

/// Category used to filter article listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleCategory {
    News,

    Activities,

    Blog,

    /// No filter
    #[default]
    All,
}

impl ArticleCategory {
    /// Value for the `filters[Category]` query parameter, `None` for `All`
    pub fn filter_value(self) -> Option<&'static str> {
        match self {
            ArticleCategory::News => Some("news"),
            ArticleCategory::Activities => Some("activities"),
            ArticleCategory::Blog => Some("blog"),
            ArticleCategory::All => None,
        }
    }
}

impl std::fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.filter_value().unwrap_or("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_no_filter() {
        assert_eq!(ArticleCategory::All.filter_value(), None);
        assert_eq!(ArticleCategory::default(), ArticleCategory::All);
        assert_eq!(ArticleCategory::All.to_string(), "*");
        assert_eq!(ArticleCategory::Activities.to_string(), "activities");
    }
}
