use html_escape::decode_html_entities;

use crate::app::{OsonewsError, Result};
use crate::domain::Item;

/// Turns raw upstream bodies into domain values.
#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Parse the ranking body, keeping at most `limit` ids.
    pub fn id_list(&self, body: &[u8], limit: usize) -> Result<Vec<u64>> {
        let mut ids: Vec<u64> = serde_json::from_slice(body)
            .map_err(|e| OsonewsError::UpstreamUnavailable(format!("malformed id list: {}", e)))?;
        ids.truncate(limit);
        Ok(ids)
    }

    /// Parse one item body. The upstream answers `null` for ids it does not
    /// know; that and any id mismatch count as an unavailable item.
    pub fn item(&self, id: u64, body: &[u8]) -> Result<Item> {
        let parsed: Option<Item> = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Malformed payload for item {}: {}", id, e);
            OsonewsError::ItemUnavailable(id)
        })?;

        let mut item = parsed.ok_or(OsonewsError::ItemUnavailable(id))?;
        if item.id != id {
            tracing::debug!("Asked for item {} but got {}", id, item.id);
            return Err(OsonewsError::ItemUnavailable(id));
        }

        item.title = item
            .title
            .map(|t| decode_html_entities(&t).to_string());

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemKind;

    const STORY: &str = r#"{
      "by" : "dhouston",
      "descendants" : 71,
      "id" : 8863,
      "kids" : [ 8952, 9224, 8917 ],
      "score" : 111,
      "time" : 1175714200,
      "title" : "My YC app: Dropbox - Throw away your USB drive",
      "type" : "story",
      "url" : "http://www.getdropbox.com/u/2/screencast.html"
    }"#;

    const COMMENT: &str = r#"{
      "by" : "norvig",
      "id" : 2921983,
      "kids" : [ 2922097, 2922429 ],
      "parent" : 2921506,
      "text" : "Aw shucks, guys ... you make me blush with your compliments.",
      "time" : 1314211127,
      "type" : "comment"
    }"#;

    #[test]
    fn test_parse_story() {
        let item = Normalizer::new().item(8863, STORY.as_bytes()).unwrap();
        assert_eq!(item.kind, ItemKind::Story);
        assert_eq!(item.by, "dhouston");
        assert_eq!(item.score, Some(111));
        assert_eq!(item.comment_ids(), &[8952, 9224, 8917]);
    }

    #[test]
    fn test_parse_comment() {
        let item = Normalizer::new().item(2921983, COMMENT.as_bytes()).unwrap();
        assert_eq!(item.kind, ItemKind::Comment);
        assert_eq!(item.score, None);
        assert!(item.text.unwrap().starts_with("Aw shucks"));
    }

    #[test]
    fn test_null_item_is_unavailable() {
        let err = Normalizer::new().item(5, b"null").unwrap_err();
        assert!(matches!(err, OsonewsError::ItemUnavailable(5)));
    }

    #[test]
    fn test_malformed_item_is_unavailable() {
        let err = Normalizer::new().item(5, b"<html>oops").unwrap_err();
        assert!(matches!(err, OsonewsError::ItemUnavailable(5)));
    }

    #[test]
    fn test_id_mismatch_is_unavailable() {
        let err = Normalizer::new().item(1, STORY.as_bytes()).unwrap_err();
        assert!(matches!(err, OsonewsError::ItemUnavailable(1)));
    }

    #[test]
    fn test_deleted_comment_without_author() {
        let body = r#"{"id": 7, "deleted": true, "time": 1314211127, "type": "comment"}"#;
        let item = Normalizer::new().item(7, body.as_bytes()).unwrap();
        assert!(item.deleted);
        assert_eq!(item.by, "");
    }

    #[test]
    fn test_title_entities_decoded() {
        let body = r#"{"id": 9, "time": 1, "type": "story", "title": "Rust &amp; Go"}"#;
        let item = Normalizer::new().item(9, body.as_bytes()).unwrap();
        assert_eq!(item.title.as_deref(), Some("Rust & Go"));
    }

    #[test]
    fn test_id_list_truncates_without_padding() {
        let normalizer = Normalizer::new();
        let ids = normalizer.id_list(b"[1,2,3,4,5]", 3).unwrap();
        assert_eq!(ids, vec![1, 2, 3]);

        let ids = normalizer.id_list(b"[1,2]", 10).unwrap();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_malformed_id_list_is_upstream_error() {
        let err = Normalizer::new().id_list(br#"{"error":"nope"}"#, 10).unwrap_err();
        assert!(matches!(err, OsonewsError::UpstreamUnavailable(_)));
    }
}
