#[cfg(test)]
mod tests {
    use crate::core::content::{DEMO_LINES, HERO_COMMANDS};
    use crate::core::counter::{COUNTER_STAGGER_MS, StatTarget};
    use crate::core::dispatch::{Animation, AnimationDispatcher, SectionKind};
    use crate::core::reveal::LineRevealer;
    use crate::core::typing::{
        NEXT_COMMAND_PAUSE_MS, TYPE_PAUSE_MS, TypingFrame, TypingSequencer,
    };

    /// Drive the sequencer with a virtual clock until the displayed text is
    /// empty again, returning (frames, virtual elapsed ms).
    fn run_one_command_cycle(seq: &mut TypingSequencer) -> (Vec<TypingFrame>, u64) {
        let mut frames = Vec::new();
        let mut elapsed: u64 = 0;
        loop {
            let frame = seq.tick(0.5);
            elapsed += u64::from(frame.delay_ms);
            let done = frame.text.is_empty() && !seq.is_deleting();
            frames.push(frame);
            if done {
                break;
            }
        }
        (frames, elapsed)
    }

    #[test]
    fn test_hero_command_loop_visits_every_command() {
        let mut seq =
            TypingSequencer::new(HERO_COMMANDS.iter().map(|c| c.to_string()).collect());

        for expected in HERO_COMMANDS {
            let (frames, _) = run_one_command_cycle(&mut seq);
            let longest = frames
                .iter()
                .map(|f| f.text.as_str())
                .max_by_key(|t| t.chars().count())
                .unwrap();
            assert_eq!(longest, expected);
        }
        // And it wraps around.
        assert_eq!(seq.command_index(), 0);
    }

    #[test]
    fn test_command_cycle_includes_both_pauses() {
        let mut seq = TypingSequencer::new(vec!["deploy".to_string()]);
        let (frames, elapsed) = run_one_command_cycle(&mut seq);

        let pauses: Vec<u32> = frames
            .iter()
            .map(|f| f.delay_ms)
            .filter(|&d| d == TYPE_PAUSE_MS || d == NEXT_COMMAND_PAUSE_MS)
            .collect();
        assert_eq!(pauses, vec![TYPE_PAUSE_MS, NEXT_COMMAND_PAUSE_MS]);

        // Six typed chars + hold + five deletes + final hold.
        assert!(elapsed >= u64::from(TYPE_PAUSE_MS + NEXT_COMMAND_PAUSE_MS));
    }

    #[test]
    fn test_demo_reveal_runs_once_end_to_end() {
        let mut dispatcher = AnimationDispatcher::new();

        let Some(Animation::DemoReveal { pre_delay_ms }) =
            dispatcher.on_intersect(SectionKind::CodeDemo, 0)
        else {
            panic!("first intersection must start the demo reveal");
        };
        assert_eq!(pre_delay_ms, 500);

        let mut revealer = LineRevealer::new(&DEMO_LINES);
        let mut revealed = Vec::new();
        while let Some(line) = revealer.next_line() {
            revealed.push(line.text);
        }
        assert_eq!(revealed.len(), DEMO_LINES.len());
        assert_eq!(revealed[0], DEMO_LINES[0].text);

        // Scrolling the panel back into view must not restart the script.
        assert!(dispatcher.on_intersect(SectionKind::CodeDemo, 0).is_none());
    }

    #[test]
    fn test_stats_batch_start_offsets() {
        let mut dispatcher = AnimationDispatcher::new();
        let Some(Animation::StatsBatch { stagger_ms }) =
            dispatcher.on_intersect(SectionKind::Stats, 0)
        else {
            panic!("first intersection must start the stats batch");
        };

        let starts: Vec<u32> = (0..4).map(|i| i as u32 * stagger_ms).collect();
        assert_eq!(starts, vec![0, 200, 400, 600]);
        assert_eq!(stagger_ms, COUNTER_STAGGER_MS);
    }

    #[test]
    fn test_counter_from_markup_attribute_to_final_display() {
        // The full markup-to-display path for both display modes.
        let integer = StatTarget::parse("500").unwrap().animation();
        assert_eq!(integer.display_at(2000.0), "500");

        let decimal = StatTarget::parse("99.5").unwrap().animation();
        assert_eq!(decimal.display_at(2000.0), "99.5");
    }
}
