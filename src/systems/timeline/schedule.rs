use crate::domain::TimelineSettings;

use super::cue::Cue;

#[derive(Clone, Debug, PartialEq)]
struct Scheduled {
    at_ms: f64,
    cue: Cue,
}

pub struct IntroTimeline {
    events: Vec<Scheduled>,
    cursor: usize,
    exit_ms: f64,
    exiting: bool,
}

impl IntroTimeline {
    /// Entrance schedule for `letter_count` logo letters, relative to mount.
    pub fn new(settings: &TimelineSettings, letter_count: u32) -> Self {
        let s = settings;
        let mut events = Vec::new();
        let mut push = |at_ms: f64, cue: Cue| events.push(Scheduled { at_ms, cue });

        let start = s.start_delay_ms;
        for index in 0..letter_count {
            push(start + s.letter_delay_ms + index as f64 * s.letter_stagger_ms, Cue::LetterEntered { index });
        }

        let tagline_at = start + s.tagline_delay_ms;
        push(tagline_at, Cue::TaglineVisible);

        // First character lands immediately, then one per interval.
        let chars: Vec<char> = s.tagline_text.chars().collect();
        for n in 1..=chars.len() {
            let text: String = chars[..n].iter().collect();
            push(tagline_at + (n - 1) as f64 * s.type_interval_ms, Cue::Typed { text });
        }

        let typed_done = tagline_at + chars.len() as f64 * s.type_interval_ms;
        push(typed_done, Cue::SubtitleVisible);
        push(typed_done + s.cta_delay_ms, Cue::CtaVisible);
        push(typed_done + s.enter_button_delay_ms, Cue::EnterButtonVisible);

        let antigravity_at = typed_done + s.antigravity_delay_ms;
        push(antigravity_at, Cue::Antigravity);
        push(antigravity_at + s.flash_ms, Cue::FlashDone);

        // Stable: ties keep insertion order (tagline before its first char).
        events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));

        Self {
            events,
            cursor: 0,
            exit_ms: s.exit_ms,
            exiting: false,
        }
    }

    /// Append every cue due at `elapsed_ms` to `out`, in schedule order.
    pub fn poll(&mut self, elapsed_ms: f64, out: &mut Vec<Cue>) {
        while let Some(ev) = self.events.get(self.cursor) {
            if ev.at_ms > elapsed_ms {
                break;
            }
            out.push(ev.cue.clone());
            self.cursor += 1;
        }
    }

    /// Drop pending entrance cues and schedule the exit. Only the first call counts.
    pub fn schedule_exit(&mut self, elapsed_ms: f64) -> bool {
        if self.exiting {
            return false;
        }
        self.exiting = true;
        self.events.truncate(self.cursor);
        self.events.push(Scheduled { at_ms: elapsed_ms, cue: Cue::Exiting });
        self.events.push(Scheduled { at_ms: elapsed_ms + self.exit_ms, cue: Cue::Hidden });
        true
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// Nothing left to emit
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }

    /// When antigravity is scheduled, if it has not been dropped
    pub fn antigravity_at_ms(&self) -> Option<f64> {
        self.events
            .iter()
            .find(|ev| ev.cue == Cue::Antigravity)
            .map(|ev| ev.at_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_settings() -> TimelineSettings {
        TimelineSettings {
            tagline_text: "AGS".to_string(),
            ..TimelineSettings::default()
        }
    }

    fn drain(tl: &mut IntroTimeline, at: f64) -> Vec<Cue> {
        let mut out = Vec::new();
        tl.poll(at, &mut out);
        out
    }

    #[test]
    fn letters_enter_staggered() {
        let mut tl = IntroTimeline::new(&short_settings(), 3);
        assert!(drain(&mut tl, 699.0).is_empty());
        assert_eq!(drain(&mut tl, 700.0), vec![Cue::LetterEntered { index: 0 }]);
        assert_eq!(drain(&mut tl, 1100.0), vec![Cue::LetterEntered { index: 1 }, Cue::LetterEntered { index: 2 }]);
    }

    #[test]
    fn tagline_types_one_char_per_interval() {
        let mut tl = IntroTimeline::new(&short_settings(), 0);
        assert_eq!(
            drain(&mut tl, 1600.0),
            vec![Cue::TaglineVisible, Cue::Typed { text: "A".to_string() }]
        );
        assert_eq!(drain(&mut tl, 1655.0), vec![Cue::Typed { text: "AG".to_string() }]);
        assert_eq!(drain(&mut tl, 1710.0), vec![Cue::Typed { text: "AGS".to_string() }]);
        // typing done at 1600 + 3 * 55
        assert_eq!(drain(&mut tl, 1765.0), vec![Cue::SubtitleVisible]);
        assert_eq!(drain(&mut tl, 1965.0), vec![Cue::CtaVisible]);
        assert_eq!(drain(&mut tl, 2165.0), vec![Cue::EnterButtonVisible]);
        assert_eq!(tl.antigravity_at_ms(), Some(2965.0));
        assert_eq!(drain(&mut tl, 2965.0), vec![Cue::Antigravity]);
        assert_eq!(drain(&mut tl, 4565.0), vec![Cue::FlashDone]);
        assert!(tl.is_finished());
    }

    #[test]
    fn each_cue_is_emitted_once() {
        let mut tl = IntroTimeline::new(&TimelineSettings::default(), 3);
        let all = drain(&mut tl, 1e9);
        let typed = all.iter().filter(|c| matches!(c, Cue::Typed { .. })).count();
        assert_eq!(typed, "AMERICAN GLOBAL SECURITY".len());
        assert!(drain(&mut tl, 2e9).is_empty());
    }

    #[test]
    fn exit_drops_pending_entrance() {
        let mut tl = IntroTimeline::new(&short_settings(), 3);
        drain(&mut tl, 800.0);
        assert!(tl.schedule_exit(800.0));
        assert!(!tl.schedule_exit(900.0));
        assert_eq!(drain(&mut tl, 800.0), vec![Cue::Exiting]);
        assert_eq!(tl.antigravity_at_ms(), None);
        assert!(drain(&mut tl, 1599.0).is_empty());
        assert_eq!(drain(&mut tl, 1600.0), vec![Cue::Hidden]);
        assert!(tl.is_finished());
    }

    #[test]
    fn cues_serialize_with_kind_tag() {
        let json = serde_json::to_string(&Cue::LetterEntered { index: 2 }).expect("cue serializes");
        assert_eq!(json, r#"{"kind":"letterEntered","index":2}"#);
        let json = serde_json::to_string(&Cue::Hidden).expect("cue serializes");
        assert_eq!(json, r#"{"kind":"hidden"}"#);
    }
}
