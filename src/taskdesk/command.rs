//! Classification of raw input lines into the fixed command vocabulary.
//!
//! Matching looks at the first whitespace-delimited token only, lower-cased,
//! and requires an exact keyword hit: `listall` is not `list`. Anything else,
//! including blank input, classifies as [`Command::Unknown`]. The historical
//! single-list spellings (`list`, `delete`, `find`) are kept as task-variant
//! aliases next to the split `listtask`/`listclient` vocabulary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Bye,
    ListTasks,
    Mark,
    Unmark,
    Todo,
    Deadline,
    Event,
    DeleteTask,
    OnDate,
    FindTask,
    AddClient,
    ListClients,
    DeleteClient,
    FindClient,
    Unknown,
}

const KEYWORDS: &[(&str, Command)] = &[
    ("bye", Command::Bye),
    ("list", Command::ListTasks),
    ("listtask", Command::ListTasks),
    ("mark", Command::Mark),
    ("unmark", Command::Unmark),
    ("todo", Command::Todo),
    ("deadline", Command::Deadline),
    ("event", Command::Event),
    ("delete", Command::DeleteTask),
    ("deletetask", Command::DeleteTask),
    ("ondate", Command::OnDate),
    ("find", Command::FindTask),
    ("findtask", Command::FindTask),
    ("addclient", Command::AddClient),
    ("listclient", Command::ListClients),
    ("deleteclient", Command::DeleteClient),
    ("findclient", Command::FindClient),
];

impl Command {
    /// Classifies one line of user input. Pure and total: never fails,
    /// unmatched input is [`Command::Unknown`].
    pub fn from_input(input: &str) -> Command {
        let head = match input.trim().split_whitespace().next() {
            Some(tok) => tok.to_lowercase(),
            None => return Command::Unknown,
        };
        KEYWORDS
            .iter()
            .find(|(kw, _)| *kw == head)
            .map(|(_, cmd)| *cmd)
            .unwrap_or(Command::Unknown)
    }
}
