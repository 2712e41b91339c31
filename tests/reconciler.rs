mod tests {
    use glowlink::{
        ButtonEvent, ButtonState, EventQueue, Millis, Reconciler, ReconcilerConfig, Report,
        SenderAddr,
    };

    const BTN_A: SenderAddr = SenderAddr::parse("3C:84:27:AD:E3:68");
    const BTN_B: SenderAddr = SenderAddr::parse("3C:84:27:AD:F1:0C");

    fn drain<const N: usize>(queue: &EventQueue<N>) -> Vec<ButtonEvent> {
        let receiver = queue.receiver();
        let mut out = Vec::new();
        while let Some(event) = receiver.try_receive() {
            out.push(event);
        }
        out
    }

    fn event(trigger: u8, state: ButtonState) -> ButtonEvent {
        ButtonEvent { trigger, state }
    }

    #[test]
    fn test_duplicate_press_suppressed() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(0));
        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(10));

        assert_eq!(drain(&queue), vec![event(0, ButtonState::Pressed)]);
    }

    #[test]
    fn test_dedup_window_measured_from_last_accepted() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(0));
        // Suppressed; must not refresh the timestamp.
        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(40));
        // 60 ms since the last accepted report: past the 50 ms window.
        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(60));

        assert_eq!(
            drain(&queue),
            vec![event(0, ButtonState::Pressed), event(0, ButtonState::Pressed)]
        );
    }

    #[test]
    fn test_hold_reports_never_deduplicated() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(0));
        reconciler.handle_report(&BTN_A, ButtonState::Hold, Millis::from_ticks(10));
        reconciler.handle_report(&BTN_A, ButtonState::Hold, Millis::from_ticks(15));

        assert_eq!(
            drain(&queue),
            vec![
                event(0, ButtonState::Pressed),
                event(0, ButtonState::Hold),
                event(0, ButtonState::Hold),
            ]
        );
    }

    #[test]
    fn test_hold_without_prior_press_injects_pressed() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_A, ButtonState::Hold, Millis::from_ticks(5));

        assert_eq!(
            drain(&queue),
            vec![event(0, ButtonState::Pressed), event(0, ButtonState::Hold)]
        );
    }

    #[test]
    fn test_unknown_sender_ignored() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_B, ButtonState::Pressed, Millis::from_ticks(0));

        assert!(drain(&queue).is_empty());
        assert_eq!(reconciler.stats().unknown_sender, 1);
    }

    #[test]
    fn test_trigger_binding_follows_sender_order() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A, BTN_B], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_B, ButtonState::Pressed, Millis::from_ticks(0));

        assert_eq!(drain(&queue), vec![event(1, ButtonState::Pressed)]);
    }

    #[test]
    fn test_stuck_sender_forced_released() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(0));
        drain(&queue);

        reconciler.sweep(Millis::from_ticks(150));
        assert!(drain(&queue).is_empty());

        reconciler.sweep(Millis::from_ticks(201));
        assert_eq!(drain(&queue), vec![event(0, ButtonState::Released)]);

        // Already released; nothing further.
        reconciler.sweep(Millis::from_ticks(500));
        assert!(drain(&queue).is_empty());
    }

    #[test]
    fn test_sweep_ignores_released_senders() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A, BTN_B], queue.sender(), &ReconcilerConfig::default());

        reconciler.sweep(Millis::from_ticks(100_000));
        assert!(drain(&queue).is_empty());
    }

    #[test]
    fn test_dedup_across_counter_wrap() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(0xFFFF_FFF0));
        // 36 ms later on the wrapped counter: still inside the window.
        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(20));
        // 56 ms later: accepted again.
        reconciler.handle_report(&BTN_A, ButtonState::Pressed, Millis::from_ticks(40));

        assert_eq!(
            drain(&queue),
            vec![event(0, ButtonState::Pressed), event(0, ButtonState::Pressed)]
        );
    }

    #[test]
    fn test_handle_packet_decodes_report() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        let report = Report {
            state: ButtonState::Pressed,
            battery_raw: 1800,
        };
        reconciler.handle_packet(&BTN_A, &report.encode(), Millis::from_ticks(0));

        assert_eq!(drain(&queue), vec![event(0, ButtonState::Pressed)]);
        assert_eq!(reconciler.stats().malformed, 0);
    }

    #[test]
    fn test_handle_packet_drops_malformed() {
        let queue = EventQueue::<8>::new();
        let mut reconciler =
            Reconciler::new(&[BTN_A], queue.sender(), &ReconcilerConfig::default());

        reconciler.handle_packet(&BTN_A, &[0x01, 0x02, 0x03], Millis::from_ticks(0));

        assert!(drain(&queue).is_empty());
        assert_eq!(reconciler.stats().malformed, 1);
    }
}
