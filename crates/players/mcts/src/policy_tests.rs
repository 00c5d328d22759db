use super::*;

#[test]
fn unvisited_children_get_a_dominating_exploration_bonus() {
    let policy = Ucb1::default();
    let fresh = policy.score(0.0, 0, 10);
    let visited = policy.score(5.0, 8, 10);
    assert!(fresh > visited);
}

#[test]
fn more_visits_shrink_the_exploration_term() {
    let policy = Ucb1::default();
    let few = policy.score(1.0, 2, 100);
    let many = policy.score(1.0, 50, 100);
    assert!(few > many);
}

#[test]
fn reward_breaks_ties_at_equal_visits() {
    let policy = Ucb1::default();
    let better = policy.score(3.0, 10, 100);
    let worse = policy.score(-3.0, 10, 100);
    assert!(better > worse);
}

#[test]
fn zero_parent_visits_do_not_divide_by_zero() {
    let policy = Ucb1::default();
    let score = policy.score(0.0, 0, 0);
    assert!(score.is_finite());
}
