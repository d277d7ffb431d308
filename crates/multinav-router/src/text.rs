//! Expansion of broadcast text and key names into synthetic input events.

use unicode_segmentation::UnicodeSegmentation;

use crate::event::PaneInputEvent;

/// One `char` event per user-perceived character, left to right.
///
/// Splits on extended grapheme clusters, so surrogate pairs, combining
/// marks and ZWJ emoji sequences each stay a single event.
pub fn expand_text(text: &str) -> Vec<PaneInputEvent> {
    text.graphemes(true).map(PaneInputEvent::char).collect()
}

/// Key-down immediately followed by key-up for a named key.
pub fn key_press(key: &str) -> [PaneInputEvent; 2] {
    [PaneInputEvent::key_down(key), PaneInputEvent::key_up(key)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(events: &[PaneInputEvent]) -> Vec<String> {
        events
            .iter()
            .map(|e| match e {
                PaneInputEvent::Char { key_code } => key_code.clone(),
                other => panic!("expected char, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn ascii_in_order() {
        assert_eq!(chars(&expand_text("abc")), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(expand_text("").is_empty());
    }

    #[test]
    fn astral_code_point_stays_whole() {
        assert_eq!(chars(&expand_text("a😀b")), vec!["a", "😀", "b"]);
    }

    #[test]
    fn combining_sequence_stays_whole() {
        let text = "e\u{0301}x";
        assert_eq!(chars(&expand_text(text)), vec!["e\u{0301}", "x"]);
    }

    #[test]
    fn zwj_family_is_one_event() {
        let family = "👨\u{200D}👩\u{200D}👧";
        assert_eq!(chars(&expand_text(family)), vec![family]);
    }

    #[test]
    fn newline_is_its_own_event() {
        assert_eq!(chars(&expand_text("a\nb")), vec!["a", "\n", "b"]);
    }

    #[test]
    fn key_press_is_down_then_up() {
        let [down, up] = key_press("Enter");
        assert_eq!(down, PaneInputEvent::key_down("Enter"));
        assert_eq!(up, PaneInputEvent::key_up("Enter"));
    }
}
