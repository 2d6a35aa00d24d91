//! Demo panel line revealer
//!
//! Reveals a fixed, ordered list of pre-rendered terminal lines one at a
//! time at a constant cadence. Terminal by design: once the last line is out
//! there is nothing left to schedule. The dispatcher's animated-once flag
//! guarantees the sequence runs at most once per page load.

use derive_more::Display;

/// Cadence between successive line reveals
pub const LINE_REVEAL_INTERVAL_MS: u32 = 800;

/// Delay between the demo panel entering the viewport and the first line
pub const DEMO_PRE_DELAY_MS: u32 = 500;

/// Visual category of a demo line, rendered as its CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum DemoLineKind {
    #[display("prompt")]
    Prompt,
    #[display("success")]
    Success,
    #[display("info")]
    Info,
}

/// A single pre-rendered line of the demo panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoLine {
    pub text: &'static str,
    pub kind: DemoLineKind,
}

impl DemoLine {
    pub const fn new(text: &'static str, kind: DemoLineKind) -> Self {
        Self { text, kind }
    }
}

/// Steps through the demo lines in order, one per call.
#[derive(Debug)]
pub struct LineRevealer {
    lines: &'static [DemoLine],
    next: usize,
}

impl LineRevealer {
    pub fn new(lines: &'static [DemoLine]) -> Self {
        Self { lines, next: 0 }
    }

    /// Reveal the next line, or `None` once every line is out.
    pub fn next_line(&mut self) -> Option<DemoLine> {
        let line = self.lines.get(self.next).copied()?;
        self.next += 1;
        Some(line)
    }

    /// Number of lines revealed so far.
    pub fn revealed(&self) -> usize {
        self.next
    }

    pub fn is_done(&self) -> bool {
        self.next >= self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [DemoLine; 3] = [
        DemoLine::new("PS C:\\> Import-Module SilentInstall", DemoLineKind::Prompt),
        DemoLine::new("Deployment initiated.", DemoLineKind::Success),
        DemoLine::new("Zero downtime.", DemoLineKind::Info),
    ];

    #[test]
    fn test_reveals_all_lines_in_order() {
        let mut revealer = LineRevealer::new(&LINES);

        assert_eq!(revealer.next_line(), Some(LINES[0]));
        assert_eq!(revealer.next_line(), Some(LINES[1]));
        assert_eq!(revealer.next_line(), Some(LINES[2]));
        assert_eq!(revealer.revealed(), 3);
    }

    #[test]
    fn test_no_further_work_after_last_line() {
        let mut revealer = LineRevealer::new(&LINES);
        while revealer.next_line().is_some() {}

        assert!(revealer.is_done());
        assert_eq!(revealer.next_line(), None);
        assert_eq!(revealer.revealed(), 3);
    }

    #[test]
    fn test_empty_line_list_is_immediately_done() {
        let mut revealer = LineRevealer::new(&[]);

        assert!(revealer.is_done());
        assert_eq!(revealer.next_line(), None);
    }

    #[test]
    fn test_kind_renders_as_css_class() {
        assert_eq!(DemoLineKind::Prompt.to_string(), "prompt");
        assert_eq!(DemoLineKind::Success.to_string(), "success");
        assert_eq!(DemoLineKind::Info.to_string(), "info");
    }
}
