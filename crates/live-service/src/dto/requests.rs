//! Request DTOs

use serde::Deserialize;

/// Body of the post-reaction endpoint.
///
/// The emoji label is stored verbatim; any string is accepted. The owning
/// user is always the authenticated session identity, never part of the body.
#[derive(Debug, Clone, Deserialize)]
pub struct PostReactionRequest {
    pub emoji_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_body() {
        let req: PostReactionRequest = serde_json::from_str(r#"{"emoji_name": ":tada:"}"#).unwrap();
        assert_eq!(req.emoji_name, ":tada:");
    }

    #[test]
    fn test_arbitrary_label_accepted() {
        let req: PostReactionRequest =
            serde_json::from_str(r#"{"emoji_name": "not an emoji at all"}"#).unwrap();
        assert_eq!(req.emoji_name, "not an emoji at all");
    }
}
