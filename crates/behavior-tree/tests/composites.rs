mod common;

use behavior_tree::builder::{selector, sequence};
use behavior_tree::{Behavior, BehaviorTree, Status};
use common::{Journal, fail, scripted, succeed};

use Status::{Failure, Running, Success};

fn ready(root: Box<dyn Behavior>) -> BehaviorTree {
    let mut tree = BehaviorTree::new(root);
    tree.setup_tree().unwrap();
    tree
}

#[test]
fn sequence_stops_at_first_failure() {
    let j = Journal::new();
    let mut tree = ready(sequence(
        "seq",
        false,
        vec![succeed("a", &j), fail("b", &j), succeed("c", &j)],
    ));

    assert_eq!(tree.tick_once().unwrap(), Failure);
    assert_eq!(j.ticks(), ["a", "b"]);
    assert_eq!(tree.root().children()[2].status(), Status::Invalid);
}

#[test]
fn selector_stops_at_first_success() {
    let j = Journal::new();
    let mut tree = ready(selector(
        "sel",
        false,
        vec![fail("a", &j), succeed("b", &j)],
    ));

    assert_eq!(tree.tick_once().unwrap(), Success);
    assert_eq!(j.ticks(), ["a", "b"]);
}

#[test]
fn selector_fails_only_when_every_child_fails() {
    let j = Journal::new();
    let mut tree = ready(selector(
        "sel",
        false,
        vec![fail("a", &j), fail("b", &j), fail("c", &j)],
    ));

    assert_eq!(tree.tick_once().unwrap(), Failure);
    assert_eq!(j.ticks(), ["a", "b", "c"]);
}

#[test]
fn running_child_resumes_under_memory() {
    let j = Journal::new();
    let mut tree = ready(sequence(
        "seq",
        true,
        vec![
            scripted("slow", &j, &[Running, Success]),
            succeed("after", &j),
        ],
    ));

    assert_eq!(tree.tick_once().unwrap(), Running);
    assert_eq!(j.ticks(), ["slow"]);

    assert_eq!(tree.tick_once().unwrap(), Success);
    assert_eq!(j.ticks(), ["slow", "slow", "after"]);
}

#[test]
fn nested_fallback_skips_rest_of_failed_branch() {
    let j = Journal::new();
    let mut tree = ready(sequence(
        "root",
        false,
        vec![
            selector(
                "choose",
                false,
                vec![
                    sequence("ab", false, vec![fail("A", &j), succeed("B", &j)]),
                    succeed("C", &j),
                ],
            ),
            succeed("D", &j),
        ],
    ));

    assert_eq!(tree.tick_once().unwrap(), Success);
    assert_eq!(j.ticks(), ["A", "C", "D"]);
    assert!(!j.ticks().contains(&"B".to_owned()));
}

#[test]
fn memoryless_tree_replays_identically() {
    let j = Journal::new();
    let mut tree = ready(sequence(
        "root",
        false,
        vec![
            selector("pick", false, vec![fail("a", &j), succeed("b", &j)]),
            succeed("c", &j),
        ],
    ));

    let first = tree.tick_once().unwrap();
    let first_ticks = j.ticks();
    j.clear();

    let second = tree.tick_once().unwrap();
    assert_eq!(first, second);
    assert_eq!(first_ticks, j.ticks());
}

#[test]
fn composite_never_reports_invalid_after_tick() {
    let j = Journal::new();
    let mut tree = ready(sequence("empty", false, vec![]));
    assert_eq!(tree.tick_once().unwrap(), Success);

    let mut tree = ready(selector("one", false, vec![scripted("r", &j, &[Running])]));
    assert_eq!(tree.tick_once().unwrap(), Running);
    assert_eq!(tree.root().status(), Running);
}
