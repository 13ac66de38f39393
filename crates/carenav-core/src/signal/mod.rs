//! Lexical signals extracted from raw utterances.
//!
//! All matching happens on a copy of the input with every whitespace
//! character removed, so "내 위치" and "내위치" are the same utterance.
//! The free functions use the built-in [`SignalTable`].

mod table;

pub use table::{Signal, SignalTable, normalize};

/// Whether the utterance needs the caller's position before it can be answered.
pub fn requires_location(text: &str) -> bool {
    SignalTable::builtin().requires_location(text)
}

/// 1-based index referenced by "N번 상세" style phrasing, if any.
pub fn parse_list_reference(text: &str) -> Option<usize> {
    SignalTable::builtin().parse_list_reference(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_location_for_recommendation_terms() {
        assert!(requires_location("추천"));
        assert!(requires_location("제일 가까운 곳 추천해줘"));
        assert!(requires_location("가장 먼 센터"));
        assert!(requires_location("근처에 있어?"));
    }

    #[test]
    fn test_requires_location_for_distance_tokens() {
        assert!(requires_location("3.5km"));
        assert!(requires_location("3km 안"));
        assert!(requires_location("반경 2 . 5 K M"));
        assert!(requires_location("10KM"));
    }

    #[test]
    fn test_requires_location_for_self_location_with_spacing() {
        assert!(requires_location("내 위치"));
        assert!(requires_location("내  위 치 알려줘"));
        assert!(requires_location("현재 위치"));
        assert!(requires_location("내가 어디야"));
        assert!(requires_location("지금 어디?"));
    }

    #[test]
    fn test_requires_location_false_for_plain_filters() {
        assert!(!requires_location("정원20"));
        assert!(!requires_location("토요일"));
        assert!(!requires_location("2번 상세"));
        assert!(!requires_location(""));
        assert!(!requires_location("km"));
    }

    #[test]
    fn test_parse_list_reference() {
        assert_eq!(parse_list_reference("2번 상세"), Some(2));
        assert_eq!(parse_list_reference("상세 보여줘"), None);
        assert_eq!(parse_list_reference("10번 자세히"), Some(10));
        assert_eq!(parse_list_reference("3 번 정보 알려줘"), Some(3));
        assert_eq!(parse_list_reference("1번 자세"), Some(1));
    }

    #[test]
    fn test_parse_list_reference_uses_digits_next_to_keyword() {
        assert_eq!(parse_list_reference("1번2번상세"), Some(2));
        assert_eq!(parse_list_reference("12 3번 상세"), Some(123));
    }

    #[test]
    fn test_parse_list_reference_requires_digit_run() {
        assert_eq!(parse_list_reference("번 상세"), None);
        assert_eq!(parse_list_reference("두번 상세"), None);
        assert_eq!(parse_list_reference("2번"), None);
    }

    #[test]
    fn test_parse_list_reference_is_deterministic() {
        let text = "4번 상세 알려줘";
        assert_eq!(parse_list_reference(text), parse_list_reference(text));
    }
}
