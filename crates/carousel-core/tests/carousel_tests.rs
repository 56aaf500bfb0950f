// Scenario and property tests for the carousel state machine, driven through
// a fixed in-memory layout.

use carousel_core::*;
use proptest::prelude::*;

fn mount(cards: usize) -> (Carousel, MeasuredTrack) {
    let carousel = Carousel::new(cards, CarouselConfig::default()).expect("at least one card");
    let track = MeasuredTrack::uniform(600.0, cards, 200.0, 16.0);
    (carousel, track)
}

fn swipe(c: &mut Carousel, source: InputSource, from: f64, to: f64) -> Option<Swipe> {
    c.press(source, from);
    c.drag_to((from + to) / 2.0);
    c.drag_to(to);
    c.release(to)
}

#[test]
fn three_cards_start_in_the_middle() {
    let (mut c, track) = mount(3);
    let plan = c.render(&track);
    assert_eq!(plan.active_index, 1);
    assert!(!plan.prev_disabled);
    assert!(!plan.next_disabled);
    assert_eq!(plan.transition, Transition::Eased);
}

#[test]
fn next_twice_clamps_at_last_card() {
    let (mut c, track) = mount(3);
    c.render(&track);
    assert!(c.next());
    let plan = c.render(&track);
    assert_eq!(plan.active_index, 2);
    assert!(plan.next_disabled);

    assert!(!c.next());
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.render(&track), plan);
}

#[test]
fn previous_at_first_card_is_noop() {
    let (mut c, track) = mount(3);
    assert!(c.previous());
    let plan = c.render(&track);
    assert!(plan.prev_disabled);
    assert!(!c.previous());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn swipe_left_from_first_card_moves_forward() {
    let (mut c, track) = mount(3);
    c.previous();
    c.render(&track);

    let applied = swipe(&mut c, InputSource::Touch, 300.0, 240.0);
    assert_eq!(applied, Some(Swipe::Next));
    let plan = c.render(&track);
    assert_eq!(plan.active_index, 1);
    assert!(!plan.prev_disabled);
}

#[test]
fn swipe_right_past_first_card_snaps_back() {
    let (mut c, track) = mount(3);
    c.previous();
    c.render(&track);
    let applied = swipe(&mut c, InputSource::Mouse, 100.0, 400.0);
    assert_eq!(applied, Some(Swipe::SnapBack));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn short_drag_snaps_back_to_same_offset() {
    let (mut c, track) = mount(5);
    let before = c.render(&track);
    let applied = swipe(&mut c, InputSource::Mouse, 300.0, 340.0);
    assert_eq!(applied, Some(Swipe::SnapBack));
    let after = c.render(&track);
    assert_eq!(after, before);
}

#[test]
fn leave_while_dragging_restores_pre_drag_card() {
    let (mut c, track) = mount(3);
    let before = c.render(&track);
    c.press(InputSource::Mouse, 300.0);
    let held = c.drag_to(100.0);
    assert_eq!(held, before.offset.map(|o| o - 200.0));

    // far past the threshold, but an abort never navigates
    assert!(c.abort());
    assert!(!c.is_dragging());
    let after = c.render(&track);
    assert_eq!(after.active_index, before.active_index);
    assert_eq!(after.offset, before.offset);
    assert_eq!(after.transition, Transition::Eased);
}

#[test]
fn cancelled_touch_swipe_snaps_back() {
    let (mut c, track) = mount(3);
    let before = c.render(&track);
    c.press(InputSource::Touch, 400.0);
    c.drag_to(250.0);
    assert!(c.is_dragging());

    assert!(c.abort());
    assert_eq!(c.drag_to(100.0), None);
    assert_eq!(c.release(100.0), None);
    let after = c.render(&track);
    assert_eq!(after, before);
    assert_eq!(c.offset(), before.offset.unwrap());
}

#[test]
fn custom_threshold_is_respected() {
    let cfg = CarouselConfig {
        initial_index: 0,
        swipe_threshold_px: 120.0,
    };
    let mut c = Carousel::new(4, cfg).unwrap();
    assert_eq!(swipe(&mut c, InputSource::Touch, 300.0, 200.0), Some(Swipe::SnapBack));
    assert_eq!(swipe(&mut c, InputSource::Touch, 300.0, 150.0), Some(Swipe::Next));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn single_card_disables_both_buttons() {
    let (mut c, track) = mount(1);
    let plan = c.render(&track);
    assert_eq!(plan.active_index, 0);
    assert!(plan.prev_disabled);
    assert!(plan.next_disabled);
    assert!(!c.next());
    assert!(!c.previous());
}

#[test]
fn offset_centers_active_card() {
    let (mut c, track) = mount(3);
    let plan = c.render(&track);
    let card = track.card(1).unwrap();
    let offset = plan.offset.unwrap();
    assert!((card.center() + offset - track.container_width / 2.0).abs() < 1e-9);
}

#[derive(Clone, Debug)]
enum Op {
    Prev,
    Next,
    Swipe(f64),
    Abort(f64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Prev),
        Just(Op::Next),
        (-400.0f64..400.0).prop_map(Op::Swipe),
        (-400.0f64..400.0).prop_map(Op::Abort),
    ]
}

proptest! {
    #[test]
    fn render_keeps_index_and_buttons_consistent(
        cards in 1usize..12,
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let (mut c, track) = mount(cards);
        for op in ops {
            let before = c.current_index();
            match op {
                Op::Prev => { c.previous(); }
                Op::Next => { c.next(); }
                Op::Swipe(dx) => { swipe(&mut c, InputSource::Mouse, 500.0, 500.0 + dx); }
                Op::Abort(dx) => {
                    c.press(InputSource::Mouse, 500.0);
                    c.drag_to(500.0 + dx);
                    c.abort();
                    prop_assert_eq!(c.current_index(), before);
                }
            }
            let after = c.current_index();
            prop_assert!(after.abs_diff(before) <= 1);

            let plan = c.render(&track);
            prop_assert!(plan.active_index < cards);
            prop_assert_eq!(plan.active_index, c.current_index());
            prop_assert_eq!(plan.prev_disabled, plan.active_index == 0);
            prop_assert_eq!(plan.next_disabled, plan.active_index == cards - 1);
            prop_assert!(plan.offset.is_some());
        }
    }

    #[test]
    fn swipe_direction_follows_threshold(start in 0usize..6, dx in -300.0f64..300.0) {
        let mut c = Carousel::new(6, CarouselConfig { initial_index: start, ..Default::default() }).unwrap();
        let applied = swipe(&mut c, InputSource::Touch, 0.0, dx);
        let expected = if dx > 50.0 && start > 0 {
            start - 1
        } else if dx < -50.0 && start < 5 {
            start + 1
        } else {
            start
        };
        prop_assert_eq!(c.current_index(), expected);
        prop_assert!(applied.is_some());
    }
}
