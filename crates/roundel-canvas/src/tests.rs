#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roundel_core::animation::TestClock;
    use roundel_core::*;
    use roundel_ui::*;
    use web_time::Duration;

    use crate::*;

    #[test]
    fn test_rounded_view_paints_fill_then_border() {
        let mut view = RoundedCornerView::new(Size::new(120.0, 40.0));
        view.control_mut().set_background(Color::WHITE);
        insta::assert_snapshot!(paint_widget(&view), @r"
        rect (0.0, 0.0, 120.0, 40.0) #FFFFFF r=4.0
        border (0.0, 0.0, 120.0, 40.0) #AAAAAA w=2.0 r=4.0
        ");
    }

    #[test]
    fn test_resting_slider_paints_track_and_thumb_label() {
        let slider = BetterSlider::with_clock(Arc::new(TestClock::new()));
        insta::assert_snapshot!(paint_widget(&slider), @r#"
        rect (0.0, 74.0, 300.0, 2.0) #AAAAAA r=1.0
        rect (0.0, 55.0, 40.0, 40.0) #0000FF r=20.0
        text (0.0, 55.0, 40.0, 40.0) "1" #FFFFFF 20.0
        "#);
    }

    #[test]
    fn test_popup_paints_behind_track_scaled_toward_its_tip() {
        let mut slider = BetterSlider::with_clock(Arc::new(TestClock::new()));
        slider.handle_pointer(&PointerEvent::touch_down(Vec2::new(20.0, 75.0)));
        let scene = paint_widget(&slider);

        let Some(SceneNode::Path { rect, source, color, .. }) = scene.nodes.first() else {
            panic!("popup should paint first:\n{scene}");
        };
        assert_eq!(*color, Color::BLUE);
        assert_eq!(*source, Size::new(80.0, 80.0));
        let close = |a: f32, b: f32| (a - b).abs() < 1e-3;
        assert!(close(rect.x, 12.0) && close(rect.y, 67.0), "{rect:?}");
        assert!(close(rect.w, 16.0) && close(rect.h, 16.0), "{rect:?}");
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["1", "1"]);
    }

    #[test]
    fn test_faded_layers_are_skipped() {
        let clock = TestClock::new();
        let mut slider = BetterSlider::with_clock(Arc::new(clock.clone()));
        slider.handle_pointer(&PointerEvent::touch_down(Vec2::new(20.0, 75.0)));
        clock.advance(Duration::from_millis(600));
        slider.tick();

        // Only the popup's label remains; the thumb label is fully faded.
        let scene = paint_widget(&slider);
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["1"]);
    }

    #[test]
    fn test_masking_layer_with_children_clips_them() {
        let mut image = RoundImageView::new();
        image.set_image(Some(("avatar", Size::new(300.0, 150.0))));
        insta::assert_snapshot!(paint_widget(&image), @r#"
        clip (0.0, 0.0, 150.0, 150.0) r=75.0
        image (-75.0, 0.0, 300.0, 150.0) "avatar"
        unclip
        border (0.0, 0.0, 150.0, 150.0) #AAAAAA w=1.0 r=75.0
        "#);
    }

    #[test]
    fn test_hidden_placeholder_is_not_painted() {
        let mut view = PlaceholderTextView::new(Size::new(200.0, 60.0));
        view.set_placeholder_text("Notes");
        assert_eq!(paint_widget(&view).texts().collect::<Vec<_>>(), vec!["Notes"]);
        view.set_text("hello");
        assert_eq!(paint_widget(&view).texts().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn test_paint_at_offsets_everything() {
        let view = RoundedCornerView::new(Size::new(10.0, 10.0));
        let scene = paint_at(view.layers(), Vec2::new(5.0, 7.0));
        assert_eq!(
            scene.nodes,
            vec![SceneNode::Border {
                rect: Rect::new(5.0, 7.0, 10.0, 10.0),
                color: Color::LIGHT_GRAY,
                width: 2.0,
                radius: 4.0,
            }]
        );
    }

    #[test]
    fn test_unbalanced_clips_are_closed() {
        let mut scope = DrawScope::new();
        scope.pop_clip();
        scope.push_clip(Rect::new(0.0, 0.0, 1.0, 1.0), 0.0);
        let scene = scope.finish();
        assert_eq!(scene.nodes.last(), Some(&SceneNode::PopClip));
        assert_eq!(scene.nodes.len(), 2);
    }
}
