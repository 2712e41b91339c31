mod tests {
    use glowlink::{ButtonState, EffectEngine, EffectKind, EngineConfig, Millis, Rgb};

    const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn engine() -> EffectEngine<4> {
        EffectEngine::new(
            &[EffectKind::Strobe, EffectKind::RainbowFlash],
            &EngineConfig {
                pixel_count: 2,
                ..EngineConfig::default()
            },
        )
    }

    fn frame(engine: &mut EffectEngine<4>, now: u32) -> Vec<Rgb> {
        engine.render(Millis::from_ticks(now)).to_vec()
    }

    #[test]
    fn test_lowest_slot_wins_precedence() {
        let mut both = engine();
        both.trigger(0, ButtonState::Pressed, Millis::from_ticks(0));
        both.trigger(1, ButtonState::Pressed, Millis::from_ticks(0));

        let mut strobe_only = engine();
        strobe_only.trigger(0, ButtonState::Pressed, Millis::from_ticks(0));

        let mut rainbow_only = engine();
        rainbow_only.trigger(1, ButtonState::Pressed, Millis::from_ticks(0));

        let frame_both = frame(&mut both, 30);
        assert_eq!(frame_both, frame(&mut strobe_only, 30));
        assert_ne!(frame_both, frame(&mut rainbow_only, 30));
    }

    #[test]
    fn test_strobe_renders_white_on_phase() {
        let mut engine = engine();
        engine.trigger(0, ButtonState::Pressed, Millis::from_ticks(0));
        // 30 ms in: second strobe interval, lit.
        assert_eq!(frame(&mut engine, 30), vec![WHITE, WHITE]);
    }

    #[test]
    fn test_out_of_range_trigger_ignored() {
        let mut with_stray = engine();
        with_stray.trigger(7, ButtonState::Pressed, Millis::from_ticks(0));

        let mut idle = engine();
        assert_eq!(frame(&mut with_stray, 100), frame(&mut idle, 100));
    }

    #[test]
    fn test_background_full_before_any_effect() {
        let mut engine = engine();
        let first = frame(&mut engine, 0)[0];
        assert_ne!(first, BLACK);
        assert_eq!(first, engine.background().color_at(Millis::from_ticks(0), 0));
    }

    #[test]
    fn test_background_dark_after_effect_until_quiet_period() {
        let mut engine = engine();
        engine.trigger(0, ButtonState::Pressed, Millis::from_ticks(0));
        assert_eq!(frame(&mut engine, 30), vec![WHITE, WHITE]);

        engine.trigger(0, ButtonState::Released, Millis::from_ticks(40));
        // 70 ms after the last effect frame: inside the quiet period.
        assert_eq!(frame(&mut engine, 100), vec![BLACK, BLACK]);

        // Past quiet period plus fade-in: idle pattern is back at full.
        let restored = frame(&mut engine, 4200);
        assert_ne!(restored[0], BLACK);
    }

    #[test]
    fn test_released_stops_strobe_immediately() {
        let mut engine = engine();
        engine.trigger(0, ButtonState::Pressed, Millis::from_ticks(0));
        engine.trigger(0, ButtonState::Released, Millis::from_ticks(10));
        // No effect rendered in between, so the background never noted
        // activity and stays at full idle brightness.
        let mut idle = self::engine();
        assert_eq!(frame(&mut engine, 30), frame(&mut idle, 30));
    }

    #[test]
    fn test_hold_keeps_strobe_alive() {
        let mut engine = engine();
        engine.trigger(0, ButtonState::Pressed, Millis::from_ticks(0));
        frame(&mut engine, 30);
        engine.trigger(0, ButtonState::Hold, Millis::from_ticks(90));
        // 175 ms after the press: past the 100 ms sustain, but the hold
        // refresh at 90 re-anchored it. 175 / 25 is an odd interval: lit.
        assert_eq!(frame(&mut engine, 175), vec![WHITE, WHITE]);
    }

    #[test]
    fn test_pixel_count_clamped_to_capacity() {
        let engine: EffectEngine<2> = EffectEngine::new(
            &[EffectKind::Strobe],
            &EngineConfig {
                pixel_count: 10,
                ..EngineConfig::default()
            },
        );
        assert_eq!(engine.pixel_count(), 2);
    }
}
