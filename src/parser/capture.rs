use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::model::RoomSeats;

static ANY_SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{2}_[A-Z]\b").unwrap());
// Handles 516, 517A, G26, 501A-L, ...
static ROOM_ROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([\w-]+)\s+(\d+)\s*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Capturing,
    Stopped,
}

/// What one page (plus its lookahead) yielded for the target section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capture {
    pub teacher: String,
    pub total: String,
    pub rooms: Vec<RoomSeats>,
}

impl Capture {
    /// A page only counts when both a teacher and at least one room were found.
    pub fn is_accepted(&self) -> bool {
        !self.teacher.is_empty() && !self.rooms.is_empty()
    }
}

/// Line-at-a-time scanner for one section row and the room rows under it.
pub struct SectionCapture<'a> {
    section: &'a str,
    state: State,
    capture: Capture,
}

impl<'a> SectionCapture<'a> {
    pub fn new(section: &'a str) -> Self {
        SectionCapture {
            section,
            state: State::Idle,
            capture: Capture::default(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn feed(&mut self, line: &str) {
        match self.state {
            State::Idle => self.try_start(line),
            State::Capturing => self.continue_capture(line),
            State::Stopped => {}
        }
    }

    /// Feed every line, stopping early once the machine reaches its terminal state.
    pub fn run<'l>(mut self, lines: impl IntoIterator<Item = &'l str>) -> Capture {
        for line in lines {
            self.feed(line);
            if self.state == State::Stopped {
                break;
            }
        }
        self.finish()
    }

    pub fn finish(self) -> Capture {
        self.capture
    }

    // e.g. "ASM 65_O 801B 3 51": teacher before the code, total last,
    // optionally the first room and its seats right after the code.
    fn try_start(&mut self, line: &str) {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(idx) = parts.iter().position(|p| *p == self.section) else {
            return;
        };
        self.state = State::Capturing;
        self.capture.teacher = idx
            .checked_sub(1)
            .map(|i| parts[i].to_string())
            .unwrap_or_default();
        self.capture.total = parts.last().map(|t| t.to_string()).unwrap_or_default();
        if idx + 3 < parts.len() {
            self.capture
                .rooms
                .push(RoomSeats::new(parts[idx + 1], parts[idx + 2]));
        }
    }

    fn continue_capture(&mut self, line: &str) {
        if ANY_SECTION_RE.is_match(line) && !self.names_target(line) {
            trace!(section = self.section, line, "capture stopped at another section");
            self.state = State::Stopped;
            return;
        }
        if let Some(caps) = ROOM_ROW_RE.captures(line) {
            let room = &caps[1];
            // grand total footer, e.g. "Total 1506"
            if room.eq_ignore_ascii_case("total") {
                return;
            }
            self.capture.rooms.push(RoomSeats::new(room, &caps[2]));
        }
    }

    fn names_target(&self, line: &str) -> bool {
        line.split_whitespace().any(|tok| tok == self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(section: &str, text: &str) -> Capture {
        SectionCapture::new(section).run(text.lines())
    }

    fn rooms(c: &Capture) -> Vec<(&str, &str)> {
        c.rooms
            .iter()
            .map(|r| (r.room.as_str(), r.seats.as_str()))
            .collect()
    }

    #[test]
    fn row_then_room_rows_until_next_section() {
        let text = "FSIT CSE227 Systems Analysis and Design NS 66_A 208 27 50\n\
                    301 23\n\
                    FSIT CSE227 Systems Analysis and Design KH 69_B 401 30 30\n\
                    402 10";
        let c = capture("66_A", text);
        assert_eq!(c.teacher, "NS");
        assert_eq!(c.total, "50");
        assert_eq!(rooms(&c), vec![("208", "27"), ("301", "23")]);
        assert!(c.is_accepted());
    }

    #[test]
    fn stops_at_other_section_with_one_room() {
        let text = "NS 66_A 208 27 50\nKH 69_B 401 30 30\n402 10";
        let c = capture("66_A", text);
        assert_eq!(rooms(&c), vec![("208", "27")]);
    }

    #[test]
    fn short_row_has_no_inline_room() {
        let text = "ASM 65_O 801B 51\n516 20\n517A 21\nG26 5\n501A-L 5";
        let c = capture("65_O", text);
        assert_eq!(c.teacher, "ASM");
        assert_eq!(c.total, "51");
        assert_eq!(
            rooms(&c),
            vec![("516", "20"), ("517A", "21"), ("G26", "5"), ("501A-L", "5")]
        );
    }

    #[test]
    fn total_footer_is_skipped() {
        let text = "NS 66_A 208 27 50\nTotal 1506\nTOTAL 12\n209 23";
        let c = capture("66_A", text);
        assert_eq!(rooms(&c), vec![("208", "27"), ("209", "23")]);
    }

    #[test]
    fn unrelated_lines_are_ignored() {
        let text = "NS 66_A 208 27 50\nRoom Seats\n\n 210 3 \nsigned by controller";
        let c = capture("66_A", text);
        assert_eq!(rooms(&c), vec![("208", "27"), ("210", "3")]);
    }

    #[test]
    fn code_as_first_token_yields_no_teacher() {
        let c = capture("66_A", "66_A 208 27 50\n209 10");
        assert!(c.teacher.is_empty());
        assert!(!c.is_accepted());
    }

    #[test]
    fn row_without_rooms_is_rejected() {
        let c = capture("66_A", "NS 66_A 50\nKH 66_B 401 30 30");
        assert_eq!(c.teacher, "NS");
        assert!(c.rooms.is_empty());
        assert!(!c.is_accepted());
    }

    #[test]
    fn state_transitions() {
        let mut sc = SectionCapture::new("66_A");
        sc.feed("header line");
        assert_eq!(sc.state(), State::Idle);
        sc.feed("NS 66_A 208 27 50");
        assert_eq!(sc.state(), State::Capturing);
        sc.feed("KH 66_A continued");
        assert_eq!(sc.state(), State::Capturing);
        sc.feed("KH 69_B 401 30 30");
        assert_eq!(sc.state(), State::Stopped);
        sc.feed("999 9");
        assert_eq!(rooms(&sc.finish()), vec![("208", "27")]);
    }
}
