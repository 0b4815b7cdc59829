//! Reaction entity - an emoji attached by a user to a livestream

/// Reaction row as stored. Immutable once created; never updated or deleted
/// by this flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: i64,
    pub emoji_name: String,
    pub user_id: i64,
    pub livestream_id: i64,
    /// Seconds since the Unix epoch, stamped at insert time.
    pub created_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_fields() {
        let reaction = Reaction {
            id: 1,
            emoji_name: ":tada:".to_string(),
            user_id: 10,
            livestream_id: 20,
            created_at: 1_700_000_000,
        };
        assert_eq!(reaction.emoji_name, ":tada:");
        assert_eq!(reaction.livestream_id, 20);
    }
}
