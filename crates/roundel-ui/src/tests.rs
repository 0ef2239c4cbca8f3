#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use roundel_core::animation::TestClock;
    use roundel_core::input::{InputEvent, Key, KeyEvent, PointerId};
    use roundel_core::*;
    use web_time::Duration;

    use crate::layout::{self, Anchors};
    use crate::slider::{INDICATOR_SIZE, THUMB_SIZE};
    use crate::*;

    fn slider() -> (BetterSlider, TestClock) {
        let clock = TestClock::new();
        (BetterSlider::with_clock(Arc::new(clock.clone())), clock)
    }

    /// Widget point over the thumb center for continuous position `p`.
    fn over(s: &BetterSlider, p: f32) -> Vec2 {
        let travel = s.track_bounds().w - THUMB_SIZE;
        let ratio = (p - s.minimum() as f32) / (s.maximum() - s.minimum()) as f32;
        Vec2::new(THUMB_SIZE / 2.0 + travel * ratio, 75.0)
    }

    fn recorder(s: &mut BetterSlider) -> Rc<RefCell<Vec<i32>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        s.set_on_value_changed(move |v| sink.borrow_mut().push(v));
        seen
    }

    fn settle(s: &mut BetterSlider, clock: &TestClock, ms: u64) {
        clock.advance(Duration::from_millis(ms));
        s.tick();
    }

    fn label<'a>(s: &'a BetterSlider) -> &'a Layer {
        s.layers().get(s.thumb_label().unwrap()).unwrap()
    }

    #[test]
    fn test_track_pinned_to_bottom() {
        let r = layout::resolve(Size::new(300.0, 100.0), Anchors::bottom_strip(50.0)).unwrap();
        assert_eq!(r, Rect::new(0.0, 50.0, 300.0, 50.0));

        let (s, _) = slider();
        assert_eq!(s.track_bounds(), r);
        assert_eq!(s.intrinsic_size(), Size::new(300.0, 100.0));
    }

    #[test]
    fn test_initial_state() {
        let (s, _) = slider();
        assert_eq!((s.minimum(), s.maximum(), s.value()), (1, 10, 1));
        assert_eq!(s.indicator_phase(), IndicatorPhase::Hidden);
        assert_eq!(s.thumb_text(), Some("1"));
        assert_eq!(label(&s).center(), Vec2::new(20.0, 75.0));
        assert_eq!(s.semantics().role, Role::Slider);
        assert_eq!(s.semantics().value.as_deref(), Some("1"));
    }

    #[test]
    fn test_set_value_clamps_and_moves_thumb() {
        let (mut s, _) = slider();
        for (v, want) in [(5, 5), (0, 1), (-40, 1), (11, 10), (i32::MAX, 10)] {
            s.set_value(v);
            assert_eq!(s.value(), want);
            assert_eq!(s.thumb_text(), Some(want.to_string().as_str()));
        }
        assert_eq!(label(&s).center().x, 280.0);
    }

    #[test]
    fn test_range_setters_keep_minimum_below_maximum() {
        let (mut s, _) = slider();
        s.set_value(10);
        s.set_minimum(20);
        assert_eq!((s.minimum(), s.maximum()), (9, 10));
        s.set_maximum(-3);
        assert_eq!((s.minimum(), s.maximum()), (9, 10));
        s.set_range(50, 50);
        assert_eq!((s.minimum(), s.maximum()), (50, 51));
        assert_eq!(s.value(), 50);
        assert_eq!(s.thumb_text(), Some("50"));
    }

    #[test]
    fn test_drag_release_inside_scenario() {
        let (mut s, clock) = slider();
        let seen = recorder(&mut s);

        let events = s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        assert_eq!(events, ControlEvents::TOUCH_DOWN);
        assert_eq!(s.indicator_phase(), IndicatorPhase::Appearing);
        assert_eq!(s.popup_text(), Some("1"));
        let popup = s.popup().unwrap();
        assert_eq!(s.layers().index_in_parent(popup), Some(0));

        let events = s.handle_pointer(&PointerEvent::touch_move(over(&s, 7.4)));
        assert!(events.contains(ControlEvents::TOUCH_DRAG_INSIDE | ControlEvents::VALUE_CHANGED));
        assert_eq!(*seen.borrow(), vec![7]);
        assert_eq!(s.value(), 7);
        assert_eq!(s.popup_text(), Some("7"));
        assert_eq!(s.thumb_text(), Some("7"));

        settle(&mut s, &clock, 600);
        assert_eq!(s.indicator_phase(), IndicatorPhase::Visible);
        assert_eq!(label(&s).alpha, 0.0);
        assert!(s.layers().get(popup).unwrap().transform.is_identity());

        s.handle_pointer(&PointerEvent::touch_up(over(&s, 7.4)));
        assert_eq!(s.indicator_phase(), IndicatorPhase::Disappearing);
        assert!(s.is_animating());

        settle(&mut s, &clock, 250);
        assert_eq!(s.indicator_phase(), IndicatorPhase::Hidden);
        assert_eq!(s.popup(), None);
        assert!(!s.layers().contains(popup));
        assert_eq!(s.thumb_text(), Some("7"));
        assert_eq!(label(&s).alpha, 1.0);
        assert!(label(&s).transform.is_identity());
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn test_popup_tracks_thumb() {
        let (mut s, _) = slider();
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        s.handle_pointer(&PointerEvent::touch_move(over(&s, 5.5)));
        let thumb = s.thumb_rect();
        let frame = s.layers().get(s.popup().unwrap()).unwrap().frame;
        assert!((frame.mid_x() - thumb.mid_x()).abs() < 1e-3);
        assert_eq!(frame.w, INDICATOR_SIZE);
        assert_eq!(frame.max_y(), thumb.mid_y());
    }

    #[test]
    fn test_thumb_and_popup_follow_a_taller_track() {
        let (mut s, _) = slider();
        s.layout(Size::new(300.0, 200.0));
        let track = s.track_bounds();
        assert_eq!(track, Rect::new(0.0, 150.0, 300.0, 50.0));
        assert_eq!(label(&s).center(), Vec2::new(20.0, track.mid_y()));

        let down = Vec2::new(20.0, track.mid_y());
        s.handle_pointer(&PointerEvent::touch_down(down));
        let popup = s.layers().get(s.popup().unwrap()).unwrap().frame;
        assert_eq!(popup.max_y(), track.mid_y());
        assert_eq!(popup.mid_x(), 20.0);

        let x = THUMB_SIZE / 2.0 + (track.w - THUMB_SIZE) * 0.5;
        s.handle_pointer(&PointerEvent::touch_move(Vec2::new(x, track.mid_y())));
        let thumb = s.thumb_rect();
        assert!((thumb.mid_x() - x).abs() < 1e-3);
        assert_eq!(thumb.mid_y(), track.mid_y());
        assert!((label(&s).center().x - x).abs() < 1e-3);
        let popup = s.layers().get(s.popup().unwrap()).unwrap().frame;
        assert_eq!(popup.max_y(), track.mid_y());
    }

    #[test]
    fn test_notifications_only_for_value_changing_drags() {
        let (mut s, _) = slider();
        let seen = recorder(&mut s);

        s.layout(Size::new(400.0, 100.0));
        s.layout(Size::new(300.0, 100.0));
        s.set_value(3);
        s.set_value(1);
        assert!(seen.borrow().is_empty());

        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        s.handle_pointer(&PointerEvent::touch_move(over(&s, 1.0)));
        assert!(seen.borrow().is_empty());

        s.handle_pointer(&PointerEvent::touch_move(over(&s, 4.2)));
        s.handle_pointer(&PointerEvent::touch_move(over(&s, 4.6)));
        s.handle_pointer(&PointerEvent::touch_move(over(&s, 6.1)));
        assert_eq!(*seen.borrow(), vec![4, 4, 6]);

        s.clear_on_value_changed();
        s.handle_pointer(&PointerEvent::touch_move(over(&s, 8.1)));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_drag_outside_release_outside_restores_at_once() {
        let (mut s, clock) = slider();
        let seen = recorder(&mut s);
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        s.handle_pointer(&PointerEvent::touch_move(over(&s, 4.5)));
        settle(&mut s, &clock, 100);
        let popup = s.popup().unwrap();

        let outside = Vec2::new(200.0, 10.0);
        let events = s.handle_pointer(&PointerEvent::touch_move(outside));
        assert!(events.contains(ControlEvents::TOUCH_DRAG_EXIT));
        assert_eq!(s.indicator_phase(), IndicatorPhase::Hidden);
        assert!(!s.layers().contains(popup));
        assert_eq!(s.value(), 4);

        let events = s.handle_pointer(&PointerEvent::touch_up(outside));
        assert_eq!(events, ControlEvents::TOUCH_UP_OUTSIDE);
        assert_eq!(s.indicator_phase(), IndicatorPhase::Hidden);
        assert_eq!(s.thumb_text(), Some("4"));
        assert_eq!(label(&s).alpha, 1.0);
        assert!(label(&s).transform.is_identity());
        assert_eq!(*seen.borrow(), vec![4]);

        settle(&mut s, &clock, 600);
        assert!(!s.is_animating());
        assert_eq!(label(&s).alpha, 1.0);
        assert_eq!(s.layers().children(s.layers().root()).len(), 2);
    }

    #[test]
    fn test_cancel_hides_immediately() {
        let (mut s, _) = slider();
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        assert_eq!(s.indicator_phase(), IndicatorPhase::Appearing);
        s.handle_pointer(&PointerEvent::touch_cancel(over(&s, 1.0)));
        assert_eq!(s.indicator_phase(), IndicatorPhase::Hidden);
        assert_eq!(s.popup(), None);
        assert!(!s.is_tracking());
    }

    #[test]
    fn test_quick_tap_goes_straight_to_disappearing() {
        let (mut s, clock) = slider();
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        s.handle_pointer(&PointerEvent::touch_up(over(&s, 1.0)));
        assert_eq!(s.indicator_phase(), IndicatorPhase::Disappearing);
        settle(&mut s, &clock, 10);
        assert_eq!(s.indicator_phase(), IndicatorPhase::Disappearing);
        settle(&mut s, &clock, 250);
        assert_eq!(s.indicator_phase(), IndicatorPhase::Hidden);
    }

    #[test]
    fn test_stale_disappear_never_detaches_newer_popup() {
        let (mut s, clock) = slider();
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        s.handle_pointer(&PointerEvent::touch_up(over(&s, 1.0)));
        let old = s.popup().unwrap();

        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        let new = s.popup().unwrap();
        assert_ne!(old, new);
        assert!(!s.layers().contains(old));

        settle(&mut s, &clock, 600);
        assert_eq!(s.popup(), Some(new));
        assert!(s.layers().contains(new));
        assert_eq!(s.indicator_phase(), IndicatorPhase::Visible);
    }

    #[test]
    fn test_second_pointer_is_ignored_while_tracking() {
        let (mut s, _) = slider();
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        let other = PointerEvent::touch_move(over(&s, 9.0)).with_id(PointerId(7));
        assert!(s.handle_pointer(&other).is_empty());
        assert_eq!(s.value(), 1);
    }

    #[test]
    fn test_programmatic_value_refreshes_popup_silently() {
        let (mut s, _) = slider();
        let seen = recorder(&mut s);
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        s.set_value(5);
        assert_eq!(s.popup_text(), Some("5"));
        assert_eq!(s.thumb_text(), Some("5"));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_appearance_applies_to_live_layers() {
        let (mut s, _) = slider();
        s.handle_pointer(&PointerEvent::touch_down(over(&s, 1.0)));
        s.set_thumb_color(Color::RED);
        s.set_value_color(Color::BLACK);
        s.set_track_color(Color::DARK_GRAY);

        assert_eq!(label(&s).background, Color::RED);
        let popup = s.layers().get(s.popup().unwrap()).unwrap();
        match &popup.content {
            Content::Shape(shape) => assert_eq!(shape.fill, Color::RED),
            other => panic!("popup content {other:?}"),
        }
        let popup_label = s.layers().children(s.popup().unwrap())[0];
        let text = match &s.layers().get(popup_label).unwrap().content {
            Content::Text(t) => t.color,
            other => panic!("popup label content {other:?}"),
        };
        assert_eq!(text, Color::BLACK);
        assert_eq!(s.appearance().track_color, Color::DARK_GRAY);
    }

    #[test]
    fn test_from_config() {
        let config = SliderConfig {
            range: SliderRange::new(0, 50),
            value: 80,
            appearance: SliderAppearance {
                thumb_color: Color::RED,
                ..SliderAppearance::default()
            },
        };
        let s = BetterSlider::from_config(config, Arc::new(TestClock::new()));
        assert_eq!(s.value(), 50);
        assert_eq!(label(&s).background, Color::RED);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_slider_config_json() {
        let config: SliderConfig = serde_json::from_str(
            r##"{
                "range": { "minimum": 5, "maximum": 2 },
                "appearance": { "thumb_color": "#FF0000" }
            }"##,
        )
        .unwrap();
        assert_eq!(config.range, SliderRange::new(5, 6));
        assert_eq!(config.value, 1);
        assert_eq!(config.appearance.thumb_color, Color::RED);
        assert_eq!(config.appearance.value_color, Color::WHITE);
    }

    #[test]
    fn test_control_tracker_enter_exit() {
        let mut t = ControlTracker::new();
        let bounds = Rect::new(0.0, 0.0, 100.0, 40.0);
        let ev = |e: PointerEvent, t: &mut ControlTracker| t.handle(&e, bounds);

        assert!(ev(PointerEvent::touch_down(Vec2::new(200.0, 10.0)), &mut t).is_empty());
        assert_eq!(
            ev(PointerEvent::touch_down(Vec2::new(10.0, 10.0)), &mut t),
            ControlEvents::TOUCH_DOWN
        );
        assert_eq!(
            ev(PointerEvent::touch_move(Vec2::new(150.0, 10.0)), &mut t),
            ControlEvents::TOUCH_DRAG_EXIT | ControlEvents::TOUCH_DRAG_OUTSIDE
        );
        assert_eq!(
            ev(PointerEvent::touch_move(Vec2::new(50.0, 10.0)), &mut t),
            ControlEvents::TOUCH_DRAG_ENTER | ControlEvents::TOUCH_DRAG_INSIDE
        );
        assert!(t.is_touch_inside());
        assert_eq!(
            ev(PointerEvent::touch_up(Vec2::new(50.0, 10.0)), &mut t),
            ControlEvents::TOUCH_UP_INSIDE
        );
        assert!(!t.is_tracking());
    }

    #[test]
    fn test_rounded_view_defaults() {
        let v = RoundedCornerView::new(Size::new(120.0, 40.0));
        let root = v.layers().root_layer();
        assert_eq!(root.border_width, 2.0);
        assert_eq!(root.border_color, Color::LIGHT_GRAY);
        assert_eq!(root.corner_radius, 4.0);
        assert!(root.masks_to_bounds);
    }

    #[test]
    fn test_button_click_and_corner_radius() {
        let mut b = RoundedCornerButton::new("Ok");
        assert!(!b.layers().root_layer().masks_to_bounds);
        b.set_corner_radius(10.0);
        assert!(b.layers().root_layer().masks_to_bounds);

        let clicks = Rc::new(RefCell::new(0));
        let c = clicks.clone();
        b.set_on_click(move || *c.borrow_mut() += 1);
        b.layout(Size::new(100.0, 40.0));
        b.handle_pointer(&PointerEvent::touch_down(Vec2::new(50.0, 20.0)));
        b.handle_pointer(&PointerEvent::touch_up(Vec2::new(50.0, 20.0)));
        b.handle_pointer(&PointerEvent::touch_down(Vec2::new(50.0, 20.0)));
        b.handle_pointer(&PointerEvent::touch_up(Vec2::new(150.0, 20.0)));
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn test_selectable_button_colors_follow_selection() {
        let mut b = SelectableButton::new("Pick");
        let root = b.layers().root_layer();
        assert_eq!((root.corner_radius, root.border_width), (4.0, 1.0));
        assert_eq!(root.background, Color::DARK_GRAY);
        assert_eq!(root.border_color, Color::LIGHT_GRAY);
        assert_eq!(b.button().title_color(ButtonState::Normal), Color::LIGHT_GRAY);
        assert_eq!(b.button().title_color(ButtonState::Selected), Color::DARK_GRAY);
        assert_eq!(b.button().image_tint(), Some(Color::LIGHT_GRAY));

        b.layout(Size::new(100.0, 40.0));
        b.handle_pointer(&PointerEvent::touch_down(Vec2::new(50.0, 20.0)));
        b.handle_pointer(&PointerEvent::touch_up(Vec2::new(50.0, 20.0)));
        assert!(b.is_selected());
        let root = b.layers().root_layer();
        assert_eq!(root.background, Color::LIGHT_GRAY);
        assert_eq!(root.border_color, Color::DARK_GRAY);
        assert_eq!(b.button().image_tint(), Some(Color::DARK_GRAY));
        match &b.layers().get(b.button().title_layer()).unwrap().content {
            Content::Text(t) => assert_eq!(t.color, Color::DARK_GRAY),
            other => panic!("title content {other:?}"),
        }
        assert_eq!(b.semantics().selected, Some(true));

        b.set_touch_to_select(false);
        b.handle_pointer(&PointerEvent::touch_down(Vec2::new(50.0, 20.0)));
        b.handle_pointer(&PointerEvent::touch_up(Vec2::new(50.0, 20.0)));
        assert!(b.is_selected());
    }

    #[test]
    fn test_stacked_button_stacks_image_over_title() {
        let mut b = StackedButton::new("Go");
        b.set_image(Some(("star", Size::new(30.0, 30.0))));
        b.layout(Size::new(100.0, 80.0));

        let button = b.selectable().button();
        let image = button.image_frame().unwrap();
        let title = button.title_frame();
        let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
        assert!(close(image.mid_x(), 50.0), "{image:?}");
        assert!(close(title.mid_x(), 50.0), "{title:?}");
        assert!(close(title.y - image.max_y(), 6.0));
        assert!(close(button.image_insets().top, -(title.h + 6.0)));

        b.set_padding(10.0);
        let button = b.selectable().button();
        assert!(close(button.title_frame().y - button.image_frame().unwrap().max_y(), 10.0));
    }

    #[test]
    fn test_stacked_button_without_image() {
        let b = StackedButton::new("Go");
        let insets = b.selectable().button().image_insets();
        let title = b.selectable().button().title_size();
        assert_eq!(insets.top, -(title.height + 6.0));
        assert_eq!(b.selectable().button().title_insets().left, 0.0);
    }

    #[test]
    fn test_placeholder_visibility_follows_text() {
        let mut v = PlaceholderTextView::new(Size::new(300.0, 100.0));
        v.set_placeholder_text("Say something");
        assert!(v.is_placeholder_visible());
        let frame = v.placeholder_frame();
        assert_eq!((frame.x, frame.y, frame.w), (5.0, 8.0, 295.0));

        let changes = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = changes.clone();
        v.set_on_text_change(move |t| sink.borrow_mut().push(t.to_string()));

        assert!(!v.handle_input(&InputEvent::Key(KeyEvent::new(Key::Character('x')))));
        v.handle_pointer(&PointerEvent::touch_down(Vec2::new(10.0, 10.0)));
        v.handle_pointer(&PointerEvent::touch_up(Vec2::new(10.0, 10.0)));
        assert!(v.is_editing());

        v.handle_input(&InputEvent::Key(KeyEvent::new(Key::Character('h'))));
        v.handle_input(&InputEvent::Key(KeyEvent::new(Key::Character('i'))));
        assert_eq!(v.text(), "hi");
        assert!(!v.is_placeholder_visible());

        v.handle_input(&InputEvent::Key(KeyEvent::new(Key::Backspace)));
        v.handle_input(&InputEvent::Key(KeyEvent::new(Key::Backspace)));
        v.handle_input(&InputEvent::Key(KeyEvent::new(Key::Backspace)));
        assert!(v.is_placeholder_visible());
        assert_eq!(*changes.borrow(), vec!["h", "hi", "h", ""]);

        v.end_editing();
        assert!(!v.is_editing());
        assert!(v.is_placeholder_visible());
    }

    #[test]
    fn test_placeholder_follows_font_and_inset() {
        let mut v = PlaceholderTextView::new(Size::new(200.0, 100.0));
        v.set_placeholder_text("Notes");
        v.set_font_size(20.0);
        let placeholder = v.layers().children(v.layers().root())[1];
        match &v.layers().get(placeholder).unwrap().content {
            Content::Text(t) => assert_eq!(t.font_size, 20.0),
            other => panic!("placeholder content {other:?}"),
        }
        assert!((v.placeholder_frame().h - 24.0).abs() < 1e-3);

        v.set_text_container_inset(Insets::new(4.0, 10.0, 4.0, 10.0));
        assert_eq!(v.placeholder_frame().x, 15.0);
        assert_eq!(v.placeholder_frame().y, 4.0);
    }

    #[test]
    fn test_bordered_text_view_animates_border() {
        let clock = TestClock::new();
        let mut v = BorderedTextView::with_clock(Size::new(200.0, 80.0), Arc::new(clock.clone()));
        let root = v.layers().root_layer();
        assert_eq!((root.corner_radius, root.border_width), (4.0, 1.0));
        assert_eq!(root.border_color, Color::LIGHT_GRAY);

        v.set_border_color(Color::RED);
        assert_eq!(v.border_color(), Color::RED);
        v.tick();
        assert_eq!(v.layers().root_layer().border_color, Color::LIGHT_GRAY);

        clock.advance(Duration::from_millis(125));
        v.tick();
        let mid = v.layers().root_layer().border_color;
        assert_ne!(mid, Color::LIGHT_GRAY);
        assert_ne!(mid, Color::RED);

        clock.advance(Duration::from_millis(125));
        v.tick();
        assert_eq!(v.layers().root_layer().border_color, Color::RED);
        assert!(!v.is_animating());
    }

    #[test]
    fn test_round_image_squares_and_rounds() {
        let mut v = RoundImageView::new();
        assert_eq!(v.intrinsic_size(), Size::new(150.0, 150.0));
        assert_eq!(v.layers().root_layer().corner_radius, 75.0);

        v.set_image(Some(("avatar", Size::new(300.0, 200.0))));
        v.layout(Size::new(200.0, 120.0));
        let root = v.layers().root_layer();
        assert_eq!(root.frame.size(), Size::new(120.0, 120.0));
        assert_eq!(root.corner_radius, 60.0);
        assert!(root.masks_to_bounds);
        assert_eq!(v.image_frame(), Rect::new(-30.0, 0.0, 180.0, 120.0));
        assert_eq!(v.semantics().label.as_deref(), Some("avatar"));
    }
}
