//! Translate vs absolute placement, custom strategies and the manual position API.

use std::cell::RefCell;
use std::rc::Rc;

use grapple_core::math::Vec2;
use grapple_drag::{DragController, DragSettings, MoveFrame, Positioning, TranslateMode};
use grapple_input::{DragMethod, HostElement, Placement};
use grapple_test_utils::events::{mouse_down, mouse_move, mouse_up};
use grapple_test_utils::{MockElement, MockWindow};

type Controller = DragController<MockElement, MockWindow>;

fn settings() -> DragSettings<MockElement> {
    DragSettings::default().drag_method(DragMethod::Mouse)
}

fn framed() -> MockElement {
    MockElement::in_frame(Vec2::new(100.0, 50.0), Vec2::new(20.0, 30.0))
}

#[test]
fn test_translate_origin_is_element_offset() {
    let drag = Controller::attach(framed(), MockWindow::new(), settings()).unwrap();
    assert_eq!(drag.positioning(), Positioning::Translate(TranslateMode::Accelerated));
    assert_eq!(drag.origin(), Vec2::new(120.0, 80.0));
    assert_eq!(drag.get_position(), Vec2::ZERO);
}

#[test]
fn test_absolute_origin_is_frame() {
    let drag = Controller::attach(framed(), MockWindow::new(), settings().translate(false)).unwrap();
    assert_eq!(drag.positioning(), Positioning::Absolute);
    assert_eq!(drag.origin(), Vec2::new(100.0, 50.0));
    assert_eq!(drag.get_position(), Vec2::new(20.0, 30.0));
}

#[test]
fn test_set_get_round_trip() {
    for translate in [true, false] {
        let element = framed();
        let mut drag =
            Controller::attach(element.clone(), MockWindow::new(), settings().translate(translate))
                .unwrap();

        for (x, y) in [(0.0, 0.0), (15.0, -7.0), (-40.5, 12.25), (1000.0, 3.0)] {
            drag.set_position(x, y);
            assert_eq!(drag.get_position(), Vec2::new(x, y), "translate = {}", translate);
        }
    }
}

#[test]
fn test_set_position_after_drag_still_round_trips() {
    let element = framed();
    let mut drag = Controller::attach(element.clone(), MockWindow::new(), settings()).unwrap();

    drag.handle(&mut mouse_down(130.0, 90.0));
    drag.handle(&mut mouse_move(170.0, 95.0));
    drag.handle(&mut mouse_up(170.0, 95.0));
    assert_eq!(drag.get_position(), Vec2::new(40.0, 5.0));

    drag.set_position(3.0, 4.0);
    assert_eq!(drag.get_position(), Vec2::new(3.0, 4.0));
}

#[test]
fn test_set_position_is_constrained() {
    let element = MockElement::new();
    let mut drag = Controller::attach(
        element.clone(),
        MockWindow::new(),
        settings().constraints([0.0, 100.0, 0.0, 200.0]),
    )
    .unwrap();

    drag.set_position(250.0, -20.0);
    assert_eq!(drag.get_position(), Vec2::new(200.0, 0.0));
}

#[test]
fn test_programmatic_and_interactive_moves_match() {
    let interactive = MockElement::new();
    let mut drag = Controller::attach(interactive.clone(), MockWindow::new(), settings()).unwrap();
    drag.handle(&mut mouse_down(0.0, 0.0));
    drag.handle(&mut mouse_move(25.0, 35.0));

    let programmatic = MockElement::new();
    let mut manual = Controller::attach(programmatic.clone(), MockWindow::new(), settings()).unwrap();
    manual.set_position(25.0, 35.0);

    assert_eq!(interactive.last_placement(), programmatic.last_placement());
}

#[test]
fn test_continuing_drag_does_not_jump() {
    let element = framed();
    let mut drag = Controller::attach(element.clone(), MockWindow::new(), settings()).unwrap();

    drag.handle(&mut mouse_down(130.0, 90.0));
    drag.handle(&mut mouse_move(140.0, 95.0));
    drag.handle(&mut mouse_up(140.0, 95.0));
    assert_eq!(element.translation(), Vec2::new(10.0, 5.0));

    drag.handle(&mut mouse_down(140.0, 95.0));
    assert_eq!(drag.offset(), Vec2::new(130.0, 90.0));
    drag.handle(&mut mouse_move(150.0, 95.0));
    assert_eq!(element.translation(), Vec2::new(20.0, 5.0));
}

#[test]
fn test_absolute_drag_moves_with_pointer() {
    let element = framed();
    let mut drag =
        Controller::attach(element.clone(), MockWindow::new(), settings().translate(false)).unwrap();

    drag.handle(&mut mouse_down(125.0, 85.0));
    assert_eq!(drag.offset(), Vec2::new(105.0, 55.0));
    drag.handle(&mut mouse_move(135.0, 85.0));

    assert_eq!(
        element.last_placement(),
        Some(Placement::Absolute {
            top_left: Vec2::new(30.0, 30.0),
        })
    );
    assert_eq!(element.offset(), Vec2::new(130.0, 80.0));
}

#[test]
fn test_absolute_constraints_follow_local_position() {
    let element = framed();
    let mut drag = Controller::attach(
        element.clone(),
        MockWindow::new(),
        settings().translate(false).constraints([0.0, 10.0, 0.0, 10.0]),
    )
    .unwrap();

    drag.set_position(0.0, 0.0);
    assert_eq!(drag.get_position(), Vec2::new(20.0, 30.0));

    drag.set_position(100.0, 100.0);
    assert_eq!(drag.get_position(), Vec2::new(30.0, 40.0));
}

#[test]
fn test_plain_translate_mode() {
    let element = MockElement::new();
    let mut drag = Controller::attach(
        element.clone(),
        MockWindow::new(),
        settings().translate_mode(TranslateMode::Plain),
    )
    .unwrap();

    drag.set_position(4.0, 2.0);
    assert_eq!(
        element.last_placement(),
        Some(Placement::Translate {
            offset: Vec2::new(4.0, 2.0),
            accelerated: false,
        })
    );
}

#[test]
fn test_custom_move_function() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = seen.clone();

    let element = MockElement::new();
    let settings = settings().move_with(move |_el: &mut MockElement, frame: &MoveFrame, pointer| {
        log.borrow_mut().push(frame.target(pointer));
    });
    let mut drag = Controller::attach(element.clone(), MockWindow::new(), settings).unwrap();

    drag.handle(&mut mouse_down(10.0, 10.0));
    drag.handle(&mut mouse_move(11.0, 10.0));
    drag.handle(&mut mouse_move(20.0, 10.0));
    drag.handle(&mut mouse_move(30.0, 12.0));
    drag.handle(&mut mouse_up(30.0, 12.0));
    drag.set_position(7.0, 7.0);

    assert_eq!(
        *seen.borrow(),
        vec![Vec2::new(10.0, 0.0), Vec2::new(20.0, 2.0), Vec2::new(7.0, 7.0)]
    );
    assert!(element.placements().is_empty());
    assert_eq!(element.notifications().len(), 4);
}
