//! Fuzzy entity-name matching.
//!
//! A token resolves through a fixed chain: exact name, then prefix, then
//! substring, all case-insensitive. Each level scans the whole list before
//! the next one is tried, and the first candidate in list order wins.

use crate::core::Named;

/// Find the entity a token refers to.
///
/// Returns `None` for an empty token or when no level of the chain matches.
///
/// # Examples
///
/// ```
/// use quickentry::core::{find_entity, Entity};
///
/// let contexts = vec![Entity::new("ctx-1", "Work"), Entity::new("ctx-2", "Personal")];
///
/// assert_eq!(find_entity("work", &contexts).map(|e| e.id.as_str()), Some("ctx-1"));
/// assert_eq!(find_entity("wo", &contexts).map(|e| e.id.as_str()), Some("ctx-1"));
/// assert_eq!(find_entity("ers", &contexts).map(|e| e.id.as_str()), Some("ctx-2"));
/// assert!(find_entity("gym", &contexts).is_none());
/// ```
#[must_use]
pub fn find_entity<'a, T: Named>(token: &str, entities: &'a [T]) -> Option<&'a T> {
    let needle = token.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let names: Vec<String> = entities.iter().map(|e| e.name().to_lowercase()).collect();

    first_where(&names, |name| name == needle)
        .or_else(|| first_where(&names, |name| name.starts_with(needle.as_str())))
        .or_else(|| first_where(&names, |name| name.contains(needle.as_str())))
        .and_then(|idx| entities.get(idx))
}

fn first_where(names: &[String], pred: impl Fn(&str) -> bool) -> Option<usize> {
    names.iter().position(|name| pred(name.as_str()))
}

/// Resolve a token to the id of the entity it refers to.
#[must_use]
pub fn match_entity<'a, T: Named>(token: &str, entities: &'a [T]) -> Option<&'a str> {
    find_entity(token, entities).map(Named::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;

    fn contexts() -> Vec<Entity> {
        vec![Entity::new("ctx-1", "Work"), Entity::new("ctx-2", "Personal")]
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(match_entity("Work", &contexts()), Some("ctx-1"));
        assert_eq!(match_entity("personal", &contexts()), Some("ctx-2"));
        assert_eq!(match_entity("PERSONAL", &contexts()), Some("ctx-2"));
    }

    #[test]
    fn test_prefix_match() {
        assert_eq!(match_entity("wo", &contexts()), Some("ctx-1"));
        assert_eq!(match_entity("Pers", &contexts()), Some("ctx-2"));
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(match_entity("ers", &contexts()), Some("ctx-2"));
        assert_eq!(match_entity("ORK", &contexts()), Some("ctx-1"));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(match_entity("gym", &contexts()), None);
        assert_eq!(match_entity("", &contexts()), None);
        assert_eq!(match_entity("   ", &contexts()), None);
        assert_eq!(match_entity::<Entity>("work", &[]), None);
    }

    #[test]
    fn test_exact_beats_earlier_prefix() {
        let entities = vec![Entity::new("a", "Homework"), Entity::new("b", "Home")];
        assert_eq!(match_entity("home", &entities), Some("b"));
    }

    #[test]
    fn test_prefix_beats_earlier_substring() {
        let entities = vec![Entity::new("a", "Deep Work"), Entity::new("b", "Workshop")];
        assert_eq!(match_entity("work", &entities), Some("b"));
    }

    #[test]
    fn test_list_order_breaks_ties() {
        let entities = vec![
            Entity::new("a", "Errands"),
            Entity::new("b", "Errands Weekend"),
            Entity::new("c", "Errands Town"),
        ];
        assert_eq!(match_entity("err", &entities), Some("a"));

        let reversed: Vec<Entity> = entities.into_iter().rev().collect();
        assert_eq!(match_entity("err", &reversed), Some("c"));
    }

    #[test]
    fn test_duplicate_names_first_wins() {
        let entities = vec![Entity::new("first", "Work"), Entity::new("second", "Work")];
        assert_eq!(match_entity("work", &entities), Some("first"));
    }

    #[test]
    fn test_unicode_names() {
        let entities = vec![Entity::new("u", "Überweisung"), Entity::new("c", "Café")];
        assert_eq!(match_entity("über", &entities), Some("u"));
        assert_eq!(match_entity("CAFÉ", &entities), Some("c"));
    }

    #[test]
    fn test_find_entity_returns_reference() {
        let list = contexts();
        let found = find_entity("per", &list).unwrap();
        assert_eq!(found.name, "Personal");
    }

    #[test]
    fn test_matches_through_references() {
        let list = contexts();
        let refs: Vec<&Entity> = list.iter().collect();
        assert_eq!(match_entity("work", &refs), Some("ctx-1"));
    }
}
