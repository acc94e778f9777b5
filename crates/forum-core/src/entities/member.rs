//! Member entity - the forum identity wrapping a user account

/// Forum member tied to exactly one user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub user_id: i64,
}

impl Member {
    pub fn new(id: i64, user_id: i64) -> Self {
        Self { id, user_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_new() {
        let member = Member::new(7, 3);
        assert_eq!(member.id, 7);
        assert_eq!(member.user_id, 3);
    }
}
