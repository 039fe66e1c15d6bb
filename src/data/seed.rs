use crate::models::user::UserRecord;

/// The demo dataset. Built once at startup and injected into application
/// state; nothing in the process mutates it afterwards.
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new(1, "Alice Chen", "alice.chen@example.com", "Admin"),
        UserRecord::new(2, "Ben Carter", "ben.carter@example.com", "Developer"),
        UserRecord::new(3, "Clara Diaz", "clara.diaz@example.com", "Designer"),
        UserRecord::new(4, "David Lee", "david.lee@example.com", "Developer"),
        UserRecord::new(5, "Eva Green", "eva.green@example.com", "Manager"),
        UserRecord::new(6, "Frank Moore", "frank.moore@example.com", "Developer"),
        UserRecord::new(7, "Grace Liu", "grace.liu@example.com", "Designer"),
        UserRecord::new(8, "Henry Garcia", "henry.garcia@example.com", "Admin"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let users = seed_users();
        let ids: HashSet<u32> = users.iter().map(|u| u.id).collect();

        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn test_seed_names_are_non_empty() {
        for user in seed_users() {
            assert!(!user.name.is_empty(), "user {} has an empty name", user.id);
        }
    }

    #[test]
    fn test_seed_order_is_stable() {
        let first = seed_users();
        let second = seed_users();

        assert_eq!(first, second);
        assert_eq!(first[0].name, "Alice Chen");
        assert_eq!(first.last().unwrap().name, "Henry Garcia");
    }
}
