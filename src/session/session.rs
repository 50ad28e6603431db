use crate::domain::Selection;
use std::path::PathBuf;

pub const DEFAULT_REPEAT_COUNT: u32 = 15;

/// One play-through, possibly spanning several repeats
#[derive(Debug)]
pub struct Session {
    pub selection: Selection,
    pub path: PathBuf,
    pub repeat_count: u32,
    pub repeat_index: u32,
    pub paused: bool,
    pub stop_requested: bool,
    /// The player has been seen running for the current repeat. An end of
    /// media reported before that is stale.
    pub started: bool,
}

impl Session {
    pub fn new(selection: Selection, path: PathBuf, repeat_count: u32) -> Self {
        Session {
            selection,
            path,
            repeat_count: repeat_count.max(1),
            repeat_index: 0,
            paused: false,
            stop_requested: false,
            started: false,
        }
    }

    pub fn is_last_repeat(&self) -> bool {
        self.repeat_index + 1 >= self.repeat_count
    }
}

/// Anything that is not a positive integer counts as a single play
pub fn parse_repeat_count(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            tracing::debug!("Repeat count {input:?} invalid, playing once");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_count_parsing() {
        assert_eq!(parse_repeat_count("15"), 15);
        assert_eq!(parse_repeat_count(" 3 "), 3);

        assert_eq!(parse_repeat_count(""), 1);
        assert_eq!(parse_repeat_count("abc"), 1);
        assert_eq!(parse_repeat_count("0"), 1);
        assert_eq!(parse_repeat_count("-4"), 1);
        assert_eq!(parse_repeat_count("2.5"), 1);
    }

    #[test]
    fn last_repeat() {
        let mut session = Session::new(Selection::default(), PathBuf::new(), 2);
        assert!(!session.is_last_repeat());

        session.repeat_index = 1;
        assert!(session.is_last_repeat());
    }
}
