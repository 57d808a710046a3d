use blaseball_core::at_bat;
use heapless::String;
use ufmt::{uDisplay, uwrite};

pub type Label = String<24>;

// Labels are short and bounded; an overflowing write just truncates.

pub fn text(value: &str) -> Label {
    let mut s = Label::new();
    let _ = s.push_str(value);
    s
}

pub fn number<T: uDisplay>(value: T) -> Label {
    let mut s = Label::new();
    let _ = uwrite!(s, "{}", value);
    s
}

/// "Ball 2!", "Out 1!" and friends.
pub fn count(word: &str, value: u8) -> Label {
    let mut s = Label::new();
    let _ = uwrite!(s, "{} {}!", word, value);
    s
}

/// Where a hit ends up, as shown under the bat and catch counters.
pub fn hit(base: i32) -> Label {
    let mut s = Label::new();
    if at_bat::is_homerun(base) {
        let _ = s.push_str("Homerun!");
    } else {
        let _ = uwrite!(s, "Base {}", base);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(text("Walk!").as_str(), "Walk!");
        assert_eq!(number(0u16).as_str(), "0");
        assert_eq!(number(1234u16).as_str(), "1234");
        assert_eq!(count("Strike", 2).as_str(), "Strike 2!");
        assert_eq!(hit(2).as_str(), "Base 2");
        assert_eq!(hit(4).as_str(), "Homerun!");
        assert_eq!(hit(9).as_str(), "Homerun!");
    }
}
