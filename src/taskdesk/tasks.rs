//! The task store and every task-facing command behavior.
//!
//! Each operation takes the full input line, validates and parses its
//! arguments, mutates or queries the in-memory sequence, and returns the
//! confirmation text. Indices are 1-based and always validated before the
//! sequence is touched; a failed operation never partially applies.
//!
//! Every mutation persists the whole sequence through the store before the
//! confirmation is returned. A save failure is logged and the in-memory
//! mutation stands — memory and disk may diverge after an I/O fault, which
//! is accepted rather than masked.

use log::warn;

use crate::datetime::{display_date, parse_on_date, parse_when};
use crate::error::{DeskError, Result};
use crate::model::Task;
use crate::store::DataStore;

pub struct TaskList<S: DataStore<Task>> {
    items: Vec<Task>,
    store: S,
}

impl<S: DataStore<Task>> TaskList<S> {
    pub fn new(items: Vec<Task>, store: S) -> TaskList<S> {
        TaskList { items, store }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Header plus every task with its 1-based index, in store order.
    pub fn list(&self) -> String {
        let mut out = String::from("Here are the tasks in your list:");
        for (i, task) in self.items.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, task));
        }
        out
    }

    /// `todo <description>`
    pub fn todo(&mut self, input: &str) -> Result<String> {
        let description = rest_of_line(input)
            .ok_or_else(|| DeskError::domain("You forgot to include what you're supposed to do"))?;
        self.push(Task::todo(description))
    }

    /// `deadline <description> /by <when>`
    pub fn deadline(&mut self, input: &str) -> Result<String> {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() < 2 {
            return Err(DeskError::domain("Provide a proper deadline,"));
        }
        let description = rest_of_line(parts[0]).unwrap_or_default();
        let (clause, when) = parts[1]
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| DeskError::domain("Use format: deadline <desc> / by <time>"))?;
        if !clause.eq_ignore_ascii_case("by") {
            return Err(DeskError::domain("Use format: deadline <desc> / by <time>"));
        }
        if description.is_empty() {
            return Err(DeskError::domain("Please provide a description"));
        }
        let due = parse_when(when)?;
        self.push(Task::deadline(description, due))
    }

    /// `event <description> /from <start> /to <end>`
    pub fn event(&mut self, input: &str) -> Result<String> {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() < 2 {
            return Err(DeskError::domain("There's nothing happening whenever"));
        }
        if parts.len() < 3 {
            return Err(DeskError::domain("So when does it end?"));
        }
        let description = rest_of_line(parts[0]).unwrap_or_default();
        if description.is_empty() {
            return Err(DeskError::domain("Please describe the event"));
        }
        let from_part = parts[1].trim();
        let to_part = parts[2].trim();
        if !from_part.to_lowercase().starts_with("from") || !to_part.to_lowercase().starts_with("to")
        {
            return Err(DeskError::domain(
                "Use format: event <desc> /from <start> /to <end>",
            ));
        }
        let start = parse_when(&from_part["from".len()..])?;
        let end = parse_when(&to_part["to".len()..])?;
        self.push(Task::event(description, start, end)?)
    }

    /// `mark <index>` — flips the task to done.
    pub fn mark(&mut self, input: &str) -> Result<String> {
        let i = self.checked_index(input, "Give me a task number, e.g. mark 2")?;
        self.items[i - 1].mark();
        self.persist();
        Ok(format!(
            "Nice! I've marked this task as done:\n{}",
            self.items[i - 1]
        ))
    }

    /// `unmark <index>` — flips the task back to not done.
    pub fn unmark(&mut self, input: &str) -> Result<String> {
        let i = self.checked_index(input, "Give me a task number, e.g. unmark 2")?;
        self.items[i - 1].unmark();
        self.persist();
        Ok(format!(
            "Ok, I've marked this task as not done yet:\n{}",
            self.items[i - 1]
        ))
    }

    /// `delete <index>` — removes the task; later indices shift down by one.
    pub fn delete(&mut self, input: &str) -> Result<String> {
        let i = index_arg(input, "Give me a task number, e.g. delete 2")?;
        if i < 1 || i > self.items.len() {
            return Err(DeskError::domain(
                "You're deleting something that doesn't exist",
            ));
        }
        let removed = self.items.remove(i - 1);
        self.persist();
        Ok(format!(
            "Ok, I've removed this task from the list:\n{}\nYou now have {} tasks in the list",
            removed,
            self.items.len()
        ))
    }

    /// `ondate <date>` — deadlines due that day and events overlapping it,
    /// listed with their original store indices. The date grammar here is
    /// narrower than the one `deadline`/`event` accept.
    pub fn on_date(&self, input: &str) -> Result<String> {
        let arg = rest_of_line(input)
            .ok_or_else(|| DeskError::domain("Use: onDate <yyyy-mm-dd | dd/MM/yyyy>"))?;
        let day = parse_on_date(arg)?;

        let mut out = format!("Items on {}:", display_date(day));
        let mut any = false;
        for (i, task) in self.items.iter().enumerate() {
            if task.occurs_on(day) {
                out.push_str(&format!("\n{}. {}", i + 1, task));
                any = true;
            }
        }
        if !any {
            out.push_str("\n(No items.)");
        }
        Ok(out)
    }

    /// `find <keyword(s)>` — case-insensitive substring match, OR across
    /// keywords, original indices preserved.
    pub fn find(&self, input: &str) -> Result<String> {
        let query =
            rest_of_line(input).ok_or_else(|| DeskError::domain("Use: find <keyword(s)>"))?;
        let keywords: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

        let mut out = String::from("Here are the matching tasks in your list:");
        let mut any = false;
        for (i, task) in self.items.iter().enumerate() {
            let description = task.description().to_lowercase();
            if keywords.iter().any(|k| description.contains(k)) {
                out.push_str(&format!("\n{}. {}", i + 1, task));
                any = true;
            }
        }
        if !any {
            out.push_str("\n(No matches.)");
        }
        Ok(out)
    }

    fn push(&mut self, task: Task) -> Result<String> {
        self.items.push(task);
        self.persist();
        Ok(format!(
            "Got it! I've added this task:\n{}\nYou now have {} tasks in the list",
            self.items[self.items.len() - 1],
            self.items.len()
        ))
    }

    fn checked_index(&self, input: &str, usage: &str) -> Result<usize> {
        let i = index_arg(input, usage)?;
        if i < 1 || i > self.items.len() {
            return Err(DeskError::domain("There's no such task in the list"));
        }
        Ok(i)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.items) {
            warn!("could not save tasks: {}", e);
        }
    }
}

/// Everything after the command keyword, trimmed; `None` when missing or
/// blank.
pub(crate) fn rest_of_line(input: &str) -> Option<&str> {
    let (_, rest) = input.trim().split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

/// Parses the trailing token of `mark 2`-shaped input as a 1-based index.
pub(crate) fn index_arg(input: &str, usage: &str) -> Result<usize> {
    rest_of_line(input)
        .and_then(|arg| arg.parse::<usize>().ok())
        .ok_or_else(|| DeskError::domain(usage))
}
