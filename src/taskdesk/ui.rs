//! The dispatcher: one input line in, one text block out.
//!
//! `Ui` owns both stores and is the error boundary of the core. Every
//! [`DeskError`] raised by an operation is rendered to its user-facing text
//! here; the caller only ever sees a [`Reply`]. The input source stays with
//! the caller — the front end reads lines however it likes and feeds them in
//! one at a time.

use crate::clients::ClientList;
use crate::command::Command;
use crate::error::DeskError;
use crate::model::{Client, Task};
use crate::store::{DataStore, LoadStats};
use crate::tasks::TaskList;

const BOT_NAME: &str = "Taskdesk";

/// One turn's output. `quit` is set only by the `bye` command.
#[derive(Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn message(text: String) -> Reply {
        Reply { text, quit: false }
    }
}

pub struct Ui<S: DataStore<Task>, C: DataStore<Client>> {
    tasks: TaskList<S>,
    clients: ClientList<C>,
}

impl<S: DataStore<Task>, C: DataStore<Client>> Ui<S, C> {
    pub fn new(tasks: TaskList<S>, clients: ClientList<C>) -> Ui<S, C> {
        Ui { tasks, clients }
    }

    /// Handles one line of input and returns the text to display. Never
    /// fails: domain errors come back as their message text.
    pub fn respond(&mut self, raw: &str) -> Reply {
        let input = raw.trim();
        let outcome = match Command::from_input(input) {
            Command::Bye => {
                return Reply {
                    text: "Bye. Hope to see you again soon!".to_string(),
                    quit: true,
                }
            }
            Command::ListTasks => Ok(self.tasks.list()),
            Command::Mark => self.tasks.mark(input),
            Command::Unmark => self.tasks.unmark(input),
            Command::Todo => self.tasks.todo(input),
            Command::Deadline => self.tasks.deadline(input),
            Command::Event => self.tasks.event(input),
            Command::DeleteTask => self.tasks.delete(input),
            Command::OnDate => self.tasks.on_date(input),
            Command::FindTask => self.tasks.find(input),
            Command::AddClient => self.clients.add(input),
            Command::ListClients => Ok(self.clients.list()),
            Command::DeleteClient => self.clients.delete(input),
            Command::FindClient => self.clients.find(input),
            Command::Unknown => Err(DeskError::domain(
                "Sorry! I have no idea what you're trying to do.",
            )),
        };
        Reply::message(outcome.unwrap_or_else(|e| e.to_string()))
    }

    /// The startup banner: greeting plus a summary of what came off disk.
    pub fn greet(&self, tasks: LoadStats, clients: LoadStats) -> String {
        let mut out = format!("Hello! I'm {}\nWhat can I do for you?", BOT_NAME);

        if tasks.loaded > 0 || tasks.skipped > 0 {
            out.push_str(&format!(
                "\n(Loaded {} tasks from disk{})",
                tasks.loaded,
                skipped_note(tasks.skipped)
            ));
            out.push('\n');
            out.push_str(&self.tasks.list());
        } else {
            out.push_str("\nThere are currently no tasks in your list");
        }

        if clients.loaded > 0 || clients.skipped > 0 {
            out.push_str(&format!(
                "\n(Loaded {} clients from disk{})",
                clients.loaded,
                skipped_note(clients.skipped)
            ));
            out.push('\n');
            out.push_str(&self.clients.list());
        } else {
            out.push_str("\nThere are currently no clients in your list");
        }
        out
    }
}

fn skipped_note(skipped: usize) -> String {
    if skipped > 0 {
        format!(", skipped {} corrupted lines", skipped)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn ui() -> Ui<InMemoryStore<Task>, InMemoryStore<Client>> {
        Ui::new(
            TaskList::new(Vec::new(), InMemoryStore::new()),
            ClientList::new(Vec::new(), InMemoryStore::new()),
        )
    }

    #[test]
    fn scenario_add_mark_list_bye() {
        let mut ui = ui();

        let r = ui.respond("todo buy milk");
        assert!(r.text.starts_with("Got it! I've added this task:"), "{}", r.text);
        assert!(r.text.contains("buy milk"), "{}", r.text);
        assert!(!r.quit);

        let r = ui.respond("deadline submit /by 2019-12-02 18:00");
        assert!(r.text.contains("(by: 2019-12-02 18:00)"), "{}", r.text);

        let r = ui.respond("mark 1");
        assert!(r.text.contains("[T][X] buy milk"), "{}", r.text);

        let r = ui.respond("list");
        let numbered = r.text.lines().filter(|l| {
            l.starts_with("1. ") || l.starts_with("2. ")
        });
        assert_eq!(numbered.count(), 2, "{}", r.text);

        let r = ui.respond("bye");
        assert_eq!(r.text, "Bye. Hope to see you again soon!");
        assert!(r.quit);
    }

    #[test]
    fn unknown_input_gets_the_generic_apology() {
        let mut ui = ui();
        let r = ui.respond("frobnicate 12");
        assert_eq!(r.text, "Sorry! I have no idea what you're trying to do.");
        assert!(!r.quit);
        let r = ui.respond("");
        assert_eq!(r.text, "Sorry! I have no idea what you're trying to do.");
    }

    #[test]
    fn domain_errors_come_back_as_plain_text() {
        let mut ui = ui();
        let r = ui.respond("mark 5");
        assert_eq!(r.text, "There's no such task in the list");
        assert!(!r.quit);
    }

    #[test]
    fn client_commands_route_to_the_client_store() {
        let mut ui = ui();
        let r = ui.respond("addclient Joe /phone 91234567 /email joe@example.com");
        assert!(r.text.contains("added this client"), "{}", r.text);
        let r = ui.respond("listclient");
        assert!(r.text.contains("1. Client: Joe"), "{}", r.text);
        let r = ui.respond("findclient joe");
        assert!(r.text.contains("1. Client: Joe"), "{}", r.text);
        let r = ui.respond("deleteclient 1");
        assert!(r.text.contains("removed this client"), "{}", r.text);
    }

    #[test]
    fn greet_summarizes_load_counts() {
        let mut ui = ui();
        ui.respond("todo buy milk");

        let with_tasks = ui.greet(
            LoadStats {
                loaded: 1,
                skipped: 2,
            },
            LoadStats::default(),
        );
        assert!(with_tasks.contains("Hello! I'm Taskdesk"), "{with_tasks}");
        assert!(
            with_tasks.contains("(Loaded 1 tasks from disk, skipped 2 corrupted lines)"),
            "{with_tasks}"
        );
        assert!(with_tasks.contains("1. [T][] buy milk"), "{with_tasks}");
        assert!(
            with_tasks.contains("There are currently no clients in your list"),
            "{with_tasks}"
        );

        let empty = ui.greet(LoadStats::default(), LoadStats::default());
        assert!(
            empty.contains("There are currently no tasks in your list"),
            "{empty}"
        );
    }
}
