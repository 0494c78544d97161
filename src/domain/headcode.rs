pub const UNKNOWN_MEANING: &str = "Unknown";

/// Describes the train class encoded by the first character of a headcode.
pub fn headcode_meaning(headcode: &str) -> &'static str {
    match headcode.chars().next() {
        Some('1') => "Indicates an express train with limited stops, with exceptions (test trains, 1Z99 rescue trains)",
        Some('2') => "Indicates a slow train with frequent stops, with exceptions (2Z02 Caroline and 2Qxx test trains)",
        Some('3') => "Test trains (followed by a Q), priority ECS and railhead conditioning trains",
        Some('4') => "Fast freight usually 75mph max",
        Some('5') => "Empty coaching stock moves",
        Some('6') => "General freight with a max speed of 60mph",
        Some('7') => "Slower freight with a max speed of 45mph",
        Some('8') => "Severely limited trains and rail head conditioning trains",
        Some('9') => "Services that are subject to special operating requirements on certain parts of the network",
        _ => UNKNOWN_MEANING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_express_class() {
        assert!(headcode_meaning("1A23").starts_with("Indicates an express train"));
    }

    #[test]
    fn test_stopping_and_freight_classes() {
        assert!(headcode_meaning("2S80").starts_with("Indicates a slow train"));
        assert_eq!(headcode_meaning("6M50"), "General freight with a max speed of 60mph");
        assert_eq!(headcode_meaning("5Z01"), "Empty coaching stock moves");
    }

    #[test]
    fn test_unknown_leading_character() {
        assert_eq!(headcode_meaning("0B00"), UNKNOWN_MEANING);
        assert_eq!(headcode_meaning("X123"), UNKNOWN_MEANING);
        assert_eq!(headcode_meaning(""), UNKNOWN_MEANING);
    }
}
