use std::cell::RefCell;
use std::rc::Rc;

use pagenav_core::{
    HtmlSurface, ItemKind, NavIntent, NavOutcome, PageChange, PageRequest, PaginationConfig,
    PaginationController, Rejection, WindowRequest, compute_window, last_page,
};
use proptest::prelude::*;

type Seen = Rc<RefCell<Vec<PageChange>>>;

fn pager_with(config: PaginationConfig) -> (PaginationController<HtmlSurface>, Seen) {
    let mut pager = PaginationController::new(HtmlSurface::new(), config);
    let seen: Seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    pager.set_on_page_change(move |change| sink.borrow_mut().push(change));
    (pager, seen)
}

fn pager() -> (PaginationController<HtmlSurface>, Seen) {
    pager_with(PaginationConfig::default())
}

#[test]
fn test_goto_page_scenario() {
    let (mut pager, seen) = pager();
    let snapshot = pager.goto_page(PageRequest::new(3, 500, 20));

    assert_eq!(snapshot.page_number, 3);
    assert_eq!(pager.last_page(), 25);
    assert_eq!(
        pager.view().pages().collect::<Vec<_>>(),
        (1..=11).collect::<Vec<_>>()
    );
    assert_eq!(pager.view().active_page(), Some(3));
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_empty_total_scenario() {
    let (mut pager, seen) = pager();
    let snapshot = pager.goto_page(PageRequest::default());

    assert_eq!(snapshot.page_number, 1);
    assert_eq!(pager.last_page(), 0);
    assert_eq!(pager.view().pages().count(), 0);
    assert!(pager.view().items.iter().all(|item| item.disabled));

    // Nothing to navigate to.
    for intent in [
        NavIntent::Prev,
        NavIntent::Next,
        NavIntent::Total,
        NavIntent::Page(1),
        NavIntent::Go("1".to_string()),
    ] {
        assert!(matches!(pager.dispatch(intent), NavOutcome::Rejected(_)));
    }
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_next_on_last_page_is_rejected() {
    let (mut pager, seen) = pager();
    pager.goto_page(PageRequest::new(25, 500, 20));

    let outcome = pager.dispatch(NavIntent::Next);
    assert_eq!(
        outcome,
        NavOutcome::Rejected(Rejection::BeyondLastPage {
            page: 26,
            last_page: 25
        })
    );
    // The rendered Next control is disabled as well.
    assert_eq!(pager.activate(ItemKind::Next), NavOutcome::Ignored);
    assert!(seen.borrow().is_empty());
    assert_eq!(pager.page_number(), 25);
}

#[test]
fn test_jump_with_enter_scenario() {
    let (mut pager, seen) = pager();
    pager.goto_page(PageRequest::new(3, 500, 20));

    pager.set_jump_input("7");
    let outcome = pager.submit_jump();

    assert!(outcome.is_accepted());
    assert!(pager.jump_focused());
    assert_eq!(
        seen.borrow().as_slice(),
        &[PageChange {
            new_page: 7,
            page_size: 20,
            old_page: Some(3)
        }]
    );
}

#[test]
fn test_invalid_jump_input_is_ignored() {
    let (mut pager, seen) = pager();
    pager.goto_page(PageRequest::new(3, 500, 20));

    for text in ["", "abc", "0", "-4", "26"] {
        pager.set_jump_input(text);
        assert!(!pager.submit_jump().is_accepted(), "accepted {text:?}");
    }
    assert!(seen.borrow().is_empty());
    assert_eq!(pager.page_number(), 3);
}

#[test]
fn test_label_clicks() {
    let (mut pager, seen) = pager();
    pager.goto_page(PageRequest::new(10, 500, 20));

    assert!(pager.activate_label("Prev").is_accepted());
    assert!(pager.activate_label("Next").is_accepted());
    assert!(pager.activate_label("12").is_accepted());
    assert!(pager.activate_label("Total:25").is_accepted());
    assert_eq!(pager.activate_label("Elsewhere"), NavOutcome::Ignored);

    let pages: Vec<u64> = seen.borrow().iter().map(|c| c.new_page).collect();
    assert_eq!(pages, vec![9, 11, 12, 10]);
    assert!(seen.borrow().iter().all(|c| c.old_page == Some(10)));
}

#[test]
fn test_host_commit_cycle() {
    let (mut pager, seen) = pager();
    pager.goto_page(PageRequest::new(1, 95, 10));

    for _ in 0..3 {
        pager.activate(ItemKind::Next);
        let requested = seen.borrow().last().copied().unwrap();
        pager.goto_page(PageRequest::new(requested.new_page, 95, requested.page_size));
    }

    assert_eq!(pager.page_number(), 4);
    assert_eq!(pager.view().active_page(), Some(4));
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn test_instances_are_independent() {
    let (mut first, first_seen) = pager();
    let (mut second, second_seen) = pager();
    first.goto_page(PageRequest::new(2, 100, 10));
    second.goto_page(PageRequest::new(5, 300, 30));

    first.dispatch(NavIntent::Next);

    assert_eq!(first_seen.borrow().len(), 1);
    assert!(second_seen.borrow().is_empty());
    assert_eq!(second.page_number(), 5);
    assert_eq!(second.page_size(), 30);
}

#[test]
fn test_min_page_number_floor() {
    let config = PaginationConfig::builder()
        .min_page_number(3u64)
        .build()
        .unwrap();
    let (mut pager, _) = pager_with(config);

    let snapshot = pager.goto_page(PageRequest::new(1, 500, 20));
    assert_eq!(snapshot.page_number, 3);

    let snapshot = pager.goto_page(PageRequest::new(1, 0, 20));
    assert_eq!(snapshot.page_number, 3);
}

#[test]
fn test_destroy_returns_empty_surface() {
    let (mut pager, _) = pager();
    pager.goto_page(PageRequest::new(2, 100, 20));
    assert!(!pager.surface().is_empty());

    let surface = pager.destroy();
    assert!(surface.is_empty());
}

proptest! {
    #[test]
    fn prop_last_page_is_ceiling(total in 0u64..100_000, page_size in 1u64..500) {
        let last = last_page(total, page_size);
        prop_assert!(last * page_size >= total);
        prop_assert!(last == 0 || (last - 1) * page_size < total);
    }

    #[test]
    fn prop_window_is_contiguous_and_bounded(
        page in 0u64..2_000,
        total in 0u64..20_000,
        page_size in 1u64..100,
        nav in 0u32..30,
    ) {
        let window = compute_window(&WindowRequest {
            page_number: page,
            total,
            page_size,
            min_page_number: 1,
            nav_page_number: nav,
        });
        let last = window.last_page;

        prop_assert_eq!(window.pages.len() as u64, (u64::from(nav) + 1).min(last));
        prop_assert!(window.pages.iter().all(|&p| p >= 1 && p <= last));
        prop_assert!(window.pages.windows(2).all(|w| w[1] == w[0] + 1));
        prop_assert!(window.page_number >= 1 && window.page_number <= last.max(1));
        if last > 0 {
            prop_assert!(window.shows_current());
        }
    }

    #[test]
    fn prop_window_is_idempotent(
        page in 0u64..500,
        total in 0u64..5_000,
        page_size in 1u64..50,
        min_page in 1u64..5,
        nav in 0u32..20,
    ) {
        let req = WindowRequest {
            page_number: page,
            total,
            page_size,
            min_page_number: min_page,
            nav_page_number: nav,
        };
        prop_assert_eq!(compute_window(&req), compute_window(&req));
        prop_assert!(compute_window(&req).page_number >= min_page);
    }

    #[test]
    fn prop_rejected_navigation_changes_nothing(
        current in 1u64..25,
        target in prop_oneof![-50i64..=0, 26i64..200],
    ) {
        let (mut pager, seen) = pager();
        pager.goto_page(PageRequest::new(current, 500, 20));
        let before = pager.state().clone();

        let outcome = pager.dispatch(NavIntent::Page(target));

        prop_assert!(matches!(outcome, NavOutcome::Rejected(_)));
        prop_assert_eq!(pager.state(), &before);
        prop_assert!(seen.borrow().is_empty());
    }
}
