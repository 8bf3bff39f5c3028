//! The client store: the same store pattern as tasks, narrower vocabulary.

use log::warn;

use crate::error::{DeskError, Result};
use crate::model::Client;
use crate::store::DataStore;
use crate::tasks::{index_arg, rest_of_line};

const ADD_USAGE: &str = "Use format: addclient <name> /phone <phone number> /email <email address>";

pub struct ClientList<S: DataStore<Client>> {
    items: Vec<Client>,
    store: S,
}

impl<S: DataStore<Client>> ClientList<S> {
    pub fn new(items: Vec<Client>, store: S) -> ClientList<S> {
        ClientList { items, store }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `addclient <name> /phone <p> /email <e>` — both clauses required, in
    /// that order.
    pub fn add(&mut self, input: &str) -> Result<String> {
        let parts: Vec<&str> = input.split('/').collect();
        if parts.len() < 3 {
            return Err(DeskError::domain(ADD_USAGE));
        }
        let name = rest_of_line(parts[0]).unwrap_or_default();
        let phone_part = parts[1].trim();
        let email_part = parts[2].trim();
        if name.is_empty() {
            return Err(DeskError::domain("Please give your client a name"));
        }
        if !phone_part.to_lowercase().starts_with("phone")
            || !email_part.to_lowercase().starts_with("email")
        {
            return Err(DeskError::domain(ADD_USAGE));
        }
        let phone = phone_part["phone".len()..].trim();
        let email = email_part["email".len()..].trim();

        self.items.push(Client::new(name, phone, email));
        self.persist();
        Ok(format!(
            "Got it! I've added this client:\n{}\nYou now have {} clients in the list",
            self.items[self.items.len() - 1],
            self.items.len()
        ))
    }

    pub fn list(&self) -> String {
        let mut out = String::from("Here are the clients in your list:");
        for (i, client) in self.items.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, client));
        }
        out
    }

    /// `deleteclient <index>` — same bounds rule as task deletion.
    pub fn delete(&mut self, input: &str) -> Result<String> {
        let i = index_arg(input, "Give me a client number, e.g. deleteclient 2")?;
        if i < 1 || i > self.items.len() {
            return Err(DeskError::domain(
                "You're deleting something that doesn't exist",
            ));
        }
        let removed = self.items.remove(i - 1);
        self.persist();
        Ok(format!(
            "Ok, I've removed this client from the list:\n{}\nYou now have {} clients in the list",
            removed,
            self.items.len()
        ))
    }

    /// `findclient <keyword(s)>` — case-insensitive name substring match, OR
    /// across keywords, original indices preserved.
    pub fn find(&self, input: &str) -> Result<String> {
        let query =
            rest_of_line(input).ok_or_else(|| DeskError::domain("Use: find <keyword(s)>"))?;
        let keywords: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();

        let mut out = String::from("Here are the matching clients in your list:");
        let mut any = false;
        for (i, client) in self.items.iter().enumerate() {
            let name = client.name().to_lowercase();
            if keywords.iter().any(|k| name.contains(k)) {
                out.push_str(&format!("\n{}. {}", i + 1, client));
                any = true;
            }
        }
        if !any {
            out.push_str("\n(No matches.)");
        }
        Ok(out)
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.items) {
            warn!("could not save clients: {}", e);
        }
    }
}
