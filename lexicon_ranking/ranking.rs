use crate::models::ranking::{Ranking, RankingUser};

/// Maximum number of rankings stored in a single leaderboard page.
pub const RANKINGS_PER_PAGE: usize = 200;

/// Folds `user`'s latest `count` into `rankings` and returns the list sorted by
/// descending count, with positions reassigned from 1.
///
/// Returns an empty list when the input can't produce a ranking (empty uid or a
/// count outside `0..=u32::MAX`); callers treat that as "nothing to update".
///
/// The sort is stable: users with equal counts keep their prior relative order,
/// and a user ranked for the first time goes after existing users with the same count.
pub fn sort_rankings(rankings: &[Ranking], user: &RankingUser, count: i64) -> Vec<Ranking> {
    if user.uid.is_empty() {
        return vec![];
    }
    let Ok(count) = u32::try_from(count) else {
        return vec![];
    };

    let mut sorted = rankings.to_vec();
    match sorted.iter_mut().find(|r| r.uid == user.uid) {
        Some(existing) => existing.update(user, count),
        None => sorted.push(Ranking::new(user, count)),
    }

    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    for (index, ranking) in sorted.iter_mut().enumerate() {
        ranking.position = index as u32 + 1;
    }

    sorted
}

/// Splits sorted rankings into consecutive groups of at most `per_page`.
pub fn split_rankings(rankings: Vec<Ranking>, per_page: usize) -> Vec<Vec<Ranking>> {
    let per_page = per_page.max(1);
    let mut groups = Vec::with_capacity(rankings.len().div_ceil(per_page));
    let mut rest = rankings.into_iter().peekable();

    while rest.peek().is_some() {
        groups.push(rest.by_ref().take(per_page).collect());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RankingFactoryOptions, ranking_factory, rankings_factory, user_factory};

    fn ranking(uid: &str, count: u32, position: u32) -> Ranking {
        ranking_factory(RankingFactoryOptions {
            uid: Some(uid),
            count: Some(count),
            position: Some(position),
        })
    }

    fn summary(rankings: &[Ranking]) -> Vec<(&str, u32, u32)> {
        rankings
            .iter()
            .map(|r| (r.uid.as_str(), r.count, r.position))
            .collect()
    }

    #[test]
    fn test_sort_rankings_keeps_order_when_count_unchanged() {
        let rankings = vec![ranking("A", 123, 2), ranking("B", 45, 0), ranking("C", 3, 1)];

        let sorted = sort_rankings(&rankings, &user_factory("B"), 45);

        assert_eq!(summary(&sorted), vec![("A", 123, 1), ("B", 45, 2), ("C", 3, 3)]);
    }

    #[test]
    fn test_sort_rankings_moves_user_up() {
        let rankings = vec![ranking("A", 123, 2), ranking("B", 45, 0), ranking("C", 3, 1)];

        let sorted = sort_rankings(&rankings, &user_factory("B"), 300);

        assert_eq!(summary(&sorted), vec![("B", 300, 1), ("A", 123, 2), ("C", 3, 3)]);
    }

    #[test]
    fn test_sort_rankings_appends_new_user() {
        let rankings = vec![ranking("A", 10, 1), ranking("C", 2, 2)];

        let sorted = sort_rankings(&rankings, &user_factory("B"), 5);

        assert_eq!(summary(&sorted), vec![("A", 10, 1), ("B", 5, 2), ("C", 2, 3)]);
    }

    #[test]
    fn test_sort_rankings_new_user_goes_after_ties() {
        let rankings = vec![ranking("A", 5, 1), ranking("C", 5, 2)];

        let sorted = sort_rankings(&rankings, &user_factory("B"), 5);

        assert_eq!(summary(&sorted), vec![("A", 5, 1), ("C", 5, 2), ("B", 5, 3)]);
    }

    #[test]
    fn test_sort_rankings_refreshes_identity() {
        let rankings = vec![ranking("A", 1, 1)];
        let mut user = user_factory("A");
        user.display_name = "Adaeze".to_string();

        let sorted = sort_rankings(&rankings, &user, 2);

        assert_eq!(sorted[0].display_name, "Adaeze");
        assert_eq!(sorted[0].count, 2);
        // input is left untouched
        assert_eq!(rankings[0].count, 1);
    }

    #[test]
    fn test_sort_rankings_from_empty_list() {
        let sorted = sort_rankings(&[], &user_factory("A"), 0);
        assert_eq!(summary(&sorted), vec![("A", 0, 1)]);
    }

    #[test]
    fn test_sort_rankings_rejects_invalid_input() {
        let rankings = vec![ranking("A", 1, 1)];

        assert!(sort_rankings(&rankings, &user_factory(""), 3).is_empty());
        assert!(sort_rankings(&rankings, &user_factory("A"), -1).is_empty());
        assert!(sort_rankings(&rankings, &user_factory("A"), i64::from(u32::MAX) + 1).is_empty());
    }

    #[test]
    fn test_sort_rankings_positions_are_contiguous() {
        let rankings = rankings_factory(57);

        let sorted = sort_rankings(&rankings, &user_factory("someone-new"), 17);

        assert_eq!(sorted.len(), 58);
        for (index, pair) in sorted.windows(2).enumerate() {
            assert!(pair[0].count >= pair[1].count);
            assert_eq!(pair[0].position, index as u32 + 1);
            assert_eq!(pair[1].position, index as u32 + 2);
        }
    }

    #[test]
    fn test_split_rankings_into_pages() {
        let rankings = rankings_factory(434);

        let groups = split_rankings(rankings.clone(), RANKINGS_PER_PAGE);

        let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![200, 200, 34]);
        assert_eq!(groups.concat(), rankings);
    }

    #[test]
    fn test_split_rankings_exact_multiple() {
        let groups = split_rankings(rankings_factory(400), RANKINGS_PER_PAGE);
        assert_eq!(groups.len(), 2);
        assert!(groups.iter().all(|g| g.len() == 200));
    }

    #[test]
    fn test_split_rankings_empty() {
        assert!(split_rankings(vec![], RANKINGS_PER_PAGE).is_empty());
    }

    #[test]
    fn test_split_rankings_zero_page_size() {
        let groups = split_rankings(rankings_factory(3), 0);
        assert_eq!(groups.len(), 3);
    }
}
