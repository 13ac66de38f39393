use carenav_core::report::ReportForm;

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Reset,
    List,
    Geo,
    Report(ReportForm),
    Refine(String),
    Unknown(String),
    Chat(String),
}

pub const COMMANDS: &[&str] = &["/report", "/refine", "/reset", "/list", "/geo", "/help"];

impl Command {
    /// `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if line == "quit" || line == "exit" {
            return Some(Command::Quit);
        }
        if !line.starts_with('/') {
            return Some(Command::Chat(line.to_string()));
        }

        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let command = match name {
            "/help" => Command::Help,
            "/reset" => Command::Reset,
            "/list" => Command::List,
            "/geo" => Command::Geo,
            "/report" => Command::Report(parse_report_form(rest)),
            "/refine" => Command::Refine(rest.to_string()),
            other => Command::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// `<district> <year_from> <year_to>`; unparseable years are left unset
/// so validation reports them.
fn parse_report_form(args: &str) -> ReportForm {
    let mut parts = args.split_whitespace();
    let district = parts.next().unwrap_or_default();
    let year = |part: Option<&str>| part.and_then(|p| p.parse::<i32>().ok());
    let year_from = year(parts.next());
    let year_to = year(parts.next());
    ReportForm::new(district, year_from, year_to)
}
