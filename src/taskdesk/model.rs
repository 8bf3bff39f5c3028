//! Core record types and their storage-line codec.
//!
//! Tasks come in three kinds behind one tagged enum; the kind tag doubles as
//! the single-letter type field of the storage grammar. Records know both
//! encodings: `Display` is the human form, [`Record::to_line`] /
//! [`Record::from_line`] the pipe-delimited storage form. `from_line` never
//! panics and never errors loudly — a line that does not decode is simply
//! `None`, which the loader counts as corrupted.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use crate::datetime::{display_when, encode_storage, parse_storage};
use crate::error::{DeskError, Result};

/// One record kind's storage-line codec.
pub trait Record: Sized + Clone {
    /// Single-line pipe-delimited form for persistence.
    fn to_line(&self) -> String;

    /// Decodes one storage line. `None` means the line is corrupted: wrong
    /// field count, bad status digit, unparsable date, unknown type tag.
    fn from_line(line: &str) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Todo,
    Deadline { due: NaiveDateTime },
    Event { start: NaiveDateTime, end: NaiveDateTime },
}

impl TaskKind {
    /// Single-letter tag used in storage lines and display brackets.
    pub fn symbol(&self) -> &'static str {
        match self {
            TaskKind::Todo => "T",
            TaskKind::Deadline { .. } => "D",
            TaskKind::Event { .. } => "E",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    pub fn todo(description: impl Into<String>) -> Task {
        Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    pub fn deadline(description: impl Into<String>, due: NaiveDateTime) -> Task {
        Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Deadline { due },
        }
    }

    /// Fails if `end` precedes `start`; the range is inclusive on both sides.
    pub fn event(
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Task> {
        if end < start {
            return Err(DeskError::domain("End time cannot be before start time."));
        }
        Ok(Task {
            description: description.into(),
            done: false,
            kind: TaskKind::Event { start, end },
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn mark(&mut self) {
        self.done = true;
    }

    pub fn unmark(&mut self) {
        self.done = false;
    }

    /// Whether this task occurs on the given calendar day, time-of-day
    /// ignored. Todos never match; deadlines match their due date exactly;
    /// events match every day of `[start.date, end.date]` inclusive.
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        match &self.kind {
            TaskKind::Todo => false,
            TaskKind::Deadline { due } => due.date() == day,
            TaskKind::Event { start, end } => start.date() <= day && day <= end.date(),
        }
    }

    fn done_flag(&self) -> &'static str {
        if self.done {
            "X"
        } else {
            ""
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TaskKind::Todo => {
                write!(f, "[T][{}] {}", self.done_flag(), self.description)
            }
            TaskKind::Deadline { due } => write!(
                f,
                "[D][{}] {} (by: {})",
                self.done_flag(),
                self.description,
                display_when(*due)
            ),
            TaskKind::Event { start, end } => write!(
                f,
                "[E][{}] {} (from: {}) (to: {})",
                self.done_flag(),
                self.description,
                display_when(*start),
                display_when(*end)
            ),
        }
    }
}

impl Record for Task {
    fn to_line(&self) -> String {
        let done = if self.done { 1 } else { 0 };
        match &self.kind {
            TaskKind::Todo => format!("T | {} | {}", done, self.description),
            TaskKind::Deadline { due } => format!(
                "D | {} | {} | {}",
                done,
                self.description,
                encode_storage(*due)
            ),
            TaskKind::Event { start, end } => format!(
                "E | {} | {} | {} | {}",
                done,
                self.description,
                encode_storage(*start),
                encode_storage(*end)
            ),
        }
    }

    fn from_line(line: &str) -> Option<Task> {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 3 {
            return None;
        }
        let done = fields[1].parse::<i32>().ok()? == 1;
        let description = fields[2];

        let mut task = match fields[0] {
            "T" => Task::todo(description),
            "D" => {
                let due = parse_storage(fields.get(3)?)?;
                Task::deadline(description, due)
            }
            "E" => {
                let start = parse_storage(fields.get(3)?)?;
                let end = parse_storage(fields.get(4)?)?;
                // an inverted range on disk is corruption, not a task
                Task::event(description, start, end).ok()?
            }
            _ => return None,
        };
        if done {
            task.mark();
        }
        Some(task)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: String,
    phone: String,
    email: String,
}

impl Client {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Client {
        Client {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Client: {}\nPhone Number: {}\nEmail: {}",
            self.name, self.phone, self.email
        )
    }
}

impl Record for Client {
    fn to_line(&self) -> String {
        format!("{}|{}|{}", self.name, self.phone, self.email)
    }

    fn from_line(line: &str) -> Option<Client> {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() < 3 {
            return None;
        }
        Some(Client::new(fields[0], fields[1], fields[2]))
    }
}
