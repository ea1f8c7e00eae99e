#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::core::config::{CursorTuning, MotionConfig, TypewriterTiming};
    use crate::core::reveal::{
        Action, Binding, Pose, Rect, ScrollDispatcher, ToggleActions, TriggerWindow, Tween,
        Update, Viewport,
    };
    use crate::core::{Carousel, IdleStage, IdleTracker, Loader, LoaderStep, Typewriter};

    #[test]
    fn test_typewriter_full_cycle_sequence() {
        let mut tw = Typewriter::new(["A", "BB"], TypewriterTiming::default());
        let mut seen = vec![(tw.display().to_string(), Duration::ZERO)];
        for _ in 0..9 {
            let delay = tw.tick();
            seen.push((tw.display().to_string(), delay));
        }

        let ms = Duration::from_millis;
        let expected = vec![
            ("".to_string(), Duration::ZERO),
            ("A".to_string(), ms(2000)),
            ("".to_string(), ms(100)),
            ("B".to_string(), ms(100)),
            ("BB".to_string(), ms(2000)),
            ("B".to_string(), ms(50)),
            ("".to_string(), ms(100)),
            ("A".to_string(), ms(2000)),
            ("".to_string(), ms(100)),
            ("B".to_string(), ms(100)),
        ];
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_typewriter_display_is_always_a_role_prefix() {
        let roles = ["Quality Analyst", "TOSCA Automation Tester"];
        let mut tw = Typewriter::new(roles, TypewriterTiming::default());
        for _ in 0..500 {
            tw.tick();
            assert!(
                roles[tw.role_index()].starts_with(tw.display()),
                "{:?} is not a prefix",
                tw.display()
            );
        }
    }

    #[test]
    fn test_typewriter_role_index_cycles() {
        let mut tw = Typewriter::new(["ab", "c", "de"], TypewriterTiming::default());
        let mut indices = vec![tw.role_index()];
        for _ in 0..40 {
            tw.tick();
            if indices.last() != Some(&tw.role_index()) {
                indices.push(tw.role_index());
            }
        }
        assert_eq!(&indices[..6], &[0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_input_before_threshold_cancels_hint() {
        let mut tracker = IdleTracker::new(&CursorTuning::default(), 0.0);
        tracker.poll(5_000.0);
        assert_eq!(tracker.stage(), IdleStage::Idle);

        // a move at 19s pushes the first hint to 39s
        assert!(tracker.record_input(19_000.0));
        tracker.poll(20_000.0);
        assert_eq!(tracker.stage(), IdleStage::Active);
        tracker.poll(38_999.0);
        assert_eq!(tracker.stage(), IdleStage::Idle);
        tracker.poll(39_000.0);
        assert_eq!(tracker.stage(), IdleStage::Hint(1));
    }

    #[test]
    fn test_reveal_progress_stays_clamped() {
        let window = TriggerWindow::new(
            "top 80%".parse().unwrap(),
            "top 50%".parse().unwrap(),
        );
        let viewport = Viewport::new(1280.0, 720.0);
        let mut top = -5000.0;
        while top <= 5000.0 {
            let p = window.progress(&Rect::new(0.0, top, 100.0, 300.0), &viewport);
            assert!((0.0..=1.0).contains(&p), "progress {p} at top {top}");
            top += 37.5;
        }
    }

    #[test]
    fn test_reentering_window_replays_same_pose() {
        let window = TriggerWindow::new(
            "top 80%".parse().unwrap(),
            "top 50%".parse().unwrap(),
        );
        let tween = Tween::enter(Pose::IDENTITY.with_opacity(0.0).with_y(100.0));
        let mut dispatcher = ScrollDispatcher::new();
        dispatcher.register(Binding::scrub(window, tween), ());
        dispatcher.register(
            Binding::toggle(window, ToggleActions::PLAY_REVERSE, tween),
            (),
        );

        let viewport = Viewport::new(1000.0, 1000.0);
        let mut updates = Vec::new();
        for top in [650.0, 2000.0, 650.0] {
            dispatcher.dispatch(
                &viewport,
                |_| Some(Rect::new(0.0, top, 100.0, 100.0)),
                |_, binding, update| updates.push((binding.is_scrub(), update)),
            );
        }

        let scrubs: Vec<_> = updates.iter().filter(|(scrub, _)| *scrub).collect();
        assert_eq!(scrubs[0].1, Update::Scrub(0.5));
        assert_eq!(scrubs[2].1, Update::Scrub(0.5));
        assert_eq!(tween.pose_at(0.5).opacity, 0.5);

        let toggles: Vec<_> = updates
            .iter()
            .filter(|(scrub, _)| !*scrub)
            .map(|(_, update)| *update)
            .collect();
        assert_eq!(
            toggles,
            vec![
                Update::Toggle(Action::Play),
                Update::Toggle(Action::Reverse),
                Update::Toggle(Action::Play),
            ]
        );
    }

    #[test]
    fn test_carousel_translate_bounds_survive_resize() {
        let config = MotionConfig::default();
        let mut carousel = Carousel::new(
            3,
            1440.0,
            config.carousel.gap,
            1440.0,
            config.carousel.scroll_multiplier,
        );

        let check = |carousel: &Carousel| {
            let max = carousel.max_translate();
            let mut scrolled = -1000.0;
            while scrolled <= carousel.scroll_distance() + 1000.0 {
                let x = carousel.translate_for(scrolled);
                assert!(x <= 0.0 && x >= -max, "translate {x} outside [-{max}, 0]");
                scrolled += 97.0;
            }
        };

        check(&carousel);
        carousel.resize(900.0, 900.0);
        check(&carousel);
        assert_eq!(carousel.max_translate(), 1800.0);
        assert_eq!(carousel.translate_for(carousel.scroll_distance()), -1800.0);
    }

    #[test]
    fn test_loader_completes_once() {
        let mut loader = Loader::new();
        let mut last = 0;
        let mut completions = 0;
        for _ in 0..150 {
            match loader.tick() {
                LoaderStep::Advanced(p) => {
                    assert_eq!(p, last + 1);
                    last = p;
                }
                LoaderStep::Reached => {
                    assert_eq!(last, 99);
                    last = 100;
                }
                LoaderStep::Done => {}
            }
            if loader.finish() {
                completions += 1;
            }
        }
        assert_eq!(loader.progress(), 100);
        assert_eq!(completions, 1);
    }
}
