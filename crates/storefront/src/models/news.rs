//! News feed records.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use sonero_core::{NewsId, NewsKind};

/// An announcement shown in the news section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: NewsId,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: NewsKind,
    #[serde(default)]
    pub desc: String,
    pub date: NaiveDate,
}

impl NewsItem {
    /// Create a news item with a fresh id, filling in defaults.
    ///
    /// A missing or blank `kind` becomes [`NewsKind::Announcement`]; `date`
    /// defaults to today (UTC).
    #[must_use]
    pub fn create(fields: NewNewsItem) -> Self {
        Self {
            id: NewsId::generate(),
            title: fields.title,
            kind: fields
                .kind
                .filter(|kind| !kind.as_str().trim().is_empty())
                .unwrap_or_default(),
            desc: fields.desc,
            date: fields.date.unwrap_or_else(today),
        }
    }
}

/// Fields for a new news item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct NewNewsItem {
    pub title: String,
    #[serde(default, rename = "type")]
    pub kind: Option<NewsKind>,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Today's calendar date in UTC.
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fills_defaults() {
        let item = NewsItem::create(NewNewsItem {
            title: "Colecția de toamnă".to_string(),
            ..NewNewsItem::default()
        });
        assert_eq!(item.kind, NewsKind::Announcement);
        assert_eq!(item.date, today());
    }

    #[test]
    fn test_create_keeps_given_values() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let item = NewsItem::create(NewNewsItem {
            title: "Reduceri".to_string(),
            kind: Some(NewsKind::from("promotie")),
            desc: "Până la 20%".to_string(),
            date: Some(date),
        });
        assert_eq!(item.kind.as_str(), "promotie");
        assert_eq!(item.date, date);
    }

    #[test]
    fn test_json_layout() {
        let json = r#"{"id":"n1","title":"Bine ai venit","type":"noutate","desc":"...","date":"2025-03-01"}"#;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, NewsKind::Announcement);
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "noutate");
        assert_eq!(back["date"], "2025-03-01");
    }
}
