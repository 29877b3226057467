use color_print::cprintln;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    /// `idx` is 0-based; it is shown 1-based.
    pub fn diag(&self, file: &str, idx: usize, raw: &str) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
        let line = idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }

    pub fn text(&self) -> &str {
        match self {
            Msg::Error(msg) | Msg::Warn(msg) | Msg::Note(msg) => msg,
        }
    }
}

/// (errors, warnings)
pub fn count(msgs: &[(usize, Msg)]) -> (usize, usize) {
    msgs.iter().fold((0, 0), |(e, w), (_, msg)| match msg {
        Msg::Error(_) => (e + 1, w),
        Msg::Warn(_) => (e, w + 1),
        Msg::Note(_) => (e, w),
    })
}
