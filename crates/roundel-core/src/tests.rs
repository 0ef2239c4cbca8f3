#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::animation::*;
    use crate::animator::*;
    use crate::*;
    use web_time::{Duration, Instant};

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#FF5733");
        assert_eq!(c, Color(255, 87, 51, 255));

        let c_alpha = Color::from_hex("#FF5733AA");
        assert_eq!(c_alpha, Color(255, 87, 51, 170));

        assert_eq!(Color::from_hex("nope"), Color::BLACK);
    }

    #[test]
    fn test_color_strict_parse() {
        assert!(matches!("#12345".parse::<Color>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#GG0000".parse::<Color>(), Err(Error::InvalidColor(_))));
        assert_eq!("0000FF".parse::<Color>().unwrap(), Color::BLUE);
        assert_eq!(Color::RED.to_hex(), "#FF0000");
        assert_eq!(Color::RED.with_alpha(0x80).to_string(), "#FF000080");
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
        };

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
    }

    #[test]
    fn test_transform_then_and_center_mapping() {
        let t = Transform::scale(0.2, 0.2).then(&Transform::translate(0.0, 40.0));
        assert_eq!(t.scale_x, 0.2);
        assert_eq!(t.translate_y, 40.0);

        let r = t.apply_about_center(Rect::new(0.0, 0.0, 80.0, 80.0));
        assert_eq!(r, Rect::new(32.0, 72.0, 16.0, 16.0));

        // Translation is scaled by what follows it.
        let t = Transform::translate(10.0, 0.0).then(&Transform::scale(0.5, 0.5));
        assert_eq!(t.translate_x, 5.0);
    }

    #[test]
    fn test_teardrop_outline() {
        let p = Path::teardrop(80.0);
        assert_eq!(p.segments().len(), 4);
        assert_eq!(p.segments()[0], PathSegment::MoveTo(Vec2::new(40.0, 80.0)));

        let b = p.bounds();
        assert!((b.y - 0.0).abs() < 0.01);
        assert!((b.max_y() - 80.0).abs() < 0.01);
        assert!(b.x > 0.0 && b.max_x() < 80.0);

        assert!(p.contains(Vec2::new(40.0, 20.0)));
        assert!(!p.contains(Vec2::new(2.0, 78.0)));
    }

    #[test]
    fn test_layer_tree_order_and_removal() {
        let mut tree = LayerTree::new(Layer::default());
        let a = tree.push(Layer::default());
        let b = tree.push(Layer::default());
        let behind = tree.insert_at_root(0, Layer::default());
        let nested = tree.add_child(behind, Layer::default()).unwrap();

        assert_eq!(tree.children(tree.root()), &[behind, a, b]);
        assert_eq!(tree.index_in_parent(behind), Some(0));

        assert!(tree.remove(behind).is_some());
        assert!(!tree.contains(nested));
        assert_eq!(tree.children(tree.root()), &[a, b]);
        assert!(tree.remove(behind).is_none());
        assert!(matches!(
            tree.add_child(behind, Layer::default()),
            Err(Error::UnknownLayer(_))
        ));
        assert!(tree.remove(tree.root()).is_none());
    }

    #[test]
    fn test_animation_deterministic() {
        let t0 = Instant::now();
        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, t0);
        // advance 250ms
        assert!(a.update(t0 + Duration::from_millis(250)));
        assert!((*a.get() - 2.5).abs() < 0.01);

        let cont = a.update(t0 + Duration::from_millis(1000));
        assert!(!cont);
        assert!((*a.get() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_spring_starts_and_settles() {
        let e = Easing::Spring {
            damping_ratio: 0.6,
            initial_velocity: 0.8,
        };
        assert!(e.interpolate(0.0).abs() < 1e-6);
        assert_eq!(e.interpolate(1.0), 1.0);
        assert!((e.interpolate(0.95) - 1.0).abs() < 0.01);
        // Underdamped springs overshoot.
        assert!((0..100).map(|i| e.interpolate(i as f32 / 100.0)).any(|v| v > 1.0));

        let stiff = Easing::Spring {
            damping_ratio: 1.0,
            initial_velocity: 0.0,
        };
        assert!((0..100).all(|i| stiff.interpolate(i as f32 / 100.0) <= 1.0));
    }

    #[test]
    fn test_spring_velocity_is_per_second() {
        let spec = AnimationSpec::spring(Duration::from_millis(500), 0.6, 0.8);
        assert_eq!(
            spec.easing,
            Easing::Spring {
                damping_ratio: 0.6,
                initial_velocity: 0.4,
            }
        );
        let slow = AnimationSpec::spring(Duration::from_millis(200), 0.9, 0.8);
        let Easing::Spring { initial_velocity, .. } = slow.easing else {
            panic!("expected a spring");
        };
        assert!((initial_velocity - 0.16).abs() < 1e-6);
    }

    #[test]
    fn test_animator_runs_and_reports_completion() {
        let clock = TestClock::new();
        let mut animator: Animator<u32> = Animator::new(Arc::new(clock.clone()));
        let mut tree = LayerTree::new(Layer::default());
        let dot = tree.push(Layer::default());

        animator.submit(
            &tree,
            Transition::new(AnimationSpec::tween(Duration::from_millis(200), Easing::Linear))
                .animate(dot, Target::Alpha(0.0))
                .animate(dot, Target::Transform(Transform::scale(0.5, 0.5)))
                .on_complete(7),
        );
        assert!(animator.is_animating(dot, Property::Alpha));

        clock.advance(Duration::from_millis(100));
        assert!(animator.tick(&mut tree).is_empty());
        let layer = tree.get(dot).unwrap();
        assert!((layer.alpha - 0.5).abs() < 0.01);
        assert!((layer.transform.scale_x - 0.75).abs() < 0.01);

        clock.advance(Duration::from_millis(100));
        let done = animator.tick(&mut tree);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].tag, Some(7));
        assert!(done[0].finished);
        assert_eq!(tree.get(dot).unwrap().alpha, 0.0);
        assert!(animator.is_idle());
    }

    #[test]
    fn test_animator_override_interrupts_previous() {
        let clock = TestClock::new();
        let mut animator: Animator<&str> = Animator::new(Arc::new(clock.clone()));
        let mut tree = LayerTree::new(Layer::default());
        let dot = tree.push(Layer::default());
        let spec = AnimationSpec::tween(Duration::from_millis(100), Easing::Linear);

        animator.submit(
            &tree,
            Transition::new(spec)
                .animate(dot, Target::Alpha(0.0))
                .on_complete("fade-out"),
        );
        clock.advance(Duration::from_millis(50));
        animator.tick(&mut tree);
        animator.submit(
            &tree,
            Transition::new(spec)
                .animate(dot, Target::Alpha(1.0))
                .on_complete("fade-in"),
        );

        let done = animator.tick(&mut tree);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].tag, Some("fade-out"));
        assert!(!done[0].finished);

        clock.advance(Duration::from_millis(100));
        let done = animator.tick(&mut tree);
        assert_eq!(done[0].tag, Some("fade-in"));
        assert_eq!(tree.get(dot).unwrap().alpha, 1.0);
    }

    #[test]
    fn test_animator_detached_layer_ends_unfinished() {
        let clock = TestClock::new();
        let mut animator: Animator<()> = Animator::new(Arc::new(clock.clone()));
        let mut tree = LayerTree::new(Layer::default());
        let dot = tree.push(Layer::default());

        animator.submit(
            &tree,
            Transition::new(AnimationSpec::default())
                .animate(dot, Target::BorderColor(Color::RED))
                .on_complete(()),
        );
        tree.remove(dot);
        let done = animator.tick(&mut tree);
        assert_eq!(done.len(), 1);
        assert!(!done[0].finished);
    }
}
