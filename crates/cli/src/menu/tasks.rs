//! Task tracker menu

use std::io::{BufRead, Write};

use stockroom_domain::{RecordRepository, RepositoryError, Task};
use tracing::info;

use super::{Flow, Menu, Prompter};

const OPTIONS: &[&str] = &["Show tasks", "Add a task", "Delete a task", "Exit"];

/// Menu over a task repository
pub struct TaskMenu<R> {
    repo: R,
}

impl<R: RecordRepository<Task>> TaskMenu<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Print the numbered list. Returns false when there is nothing to show.
    fn show<I: BufRead, O: Write>(&self, io: &mut Prompter<I, O>) -> anyhow::Result<bool> {
        let tasks = self.repo.list();
        if tasks.is_empty() {
            io.say("The task list is empty.")?;
            return Ok(false);
        }

        io.say("Tasks:")?;
        for (number, task) in tasks.iter().enumerate() {
            io.say(format_args!("{}. {}", number + 1, task))?;
        }
        Ok(true)
    }

    fn add<I: BufRead, O: Write>(&mut self, io: &mut Prompter<I, O>) -> anyhow::Result<()> {
        let Some(title) = io.ask("Task: ")? else {
            return Ok(());
        };

        match self.repo.append(Task::new(&title)) {
            Ok(total) => {
                info!(total, "task added");
                io.success("Task added.")?;
            }
            Err(RepositoryError::Validation { .. }) => io.error("A task cannot be empty.")?,
            Err(err) => io.recover(err)?,
        }
        Ok(())
    }

    fn delete<I: BufRead, O: Write>(&mut self, io: &mut Prompter<I, O>) -> anyhow::Result<()> {
        if !self.show(io)? {
            return Ok(());
        }

        let Some(raw) = io.ask("Number of the task to delete: ")? else {
            return Ok(());
        };
        let Ok(number) = raw.trim().parse::<usize>() else {
            io.error("Please enter a number.")?;
            return Ok(());
        };

        // Numbers are shown from 1; 0 wraps to an index no list can hold
        let index = number.checked_sub(1).unwrap_or(usize::MAX);
        match self.repo.remove_at(index) {
            Ok(removed) => {
                info!(number, "task deleted");
                io.success(format_args!("Task \"{}\" deleted.", removed))?;
            }
            Err(RepositoryError::InvalidIndex { .. }) => {
                io.error(format_args!("Invalid index: no task number {}.", number))?;
            }
            Err(err) => io.recover(err)?,
        }
        Ok(())
    }
}

impl<R: RecordRepository<Task>> Menu for TaskMenu<R> {
    const TITLE: &'static str = "Tasks";

    fn options(&self) -> &'static [&'static str] {
        OPTIONS
    }

    fn dispatch<I: BufRead, O: Write>(
        &mut self,
        choice: &str,
        io: &mut Prompter<I, O>,
    ) -> anyhow::Result<Flow> {
        match choice {
            "1" => {
                self.show(io)?;
            }
            "2" => self.add(io)?,
            "3" => self.delete(io)?,
            "4" => {
                io.say("Goodbye!")?;
                return Ok(Flow::Exit);
            }
            _ => io.error(format_args!("Invalid choice '{}', try again.", choice))?,
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::run_menu;
    use crate::menu::test_support::{printed, prompter};
    use stockroom_adapter::InMemoryRepository;

    fn tracked() -> InMemoryRepository<Task> {
        InMemoryRepository::with_records(vec![Task::new("write report"), Task::new("call Anna")])
    }

    fn session(repo: &InMemoryRepository<Task>, input: &str) -> String {
        let mut menu = TaskMenu::new(repo.clone());
        let mut io = prompter(input);
        run_menu(&mut menu, &mut io).unwrap();
        printed(io)
    }

    #[test]
    fn test_show_numbers_from_one() {
        let out = session(&tracked(), "1\n4\n");

        assert!(out.contains("1. write report"));
        assert!(out.contains("2. call Anna"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_show_empty() {
        let out = session(&InMemoryRepository::new(), "1\n");
        assert!(out.contains("The task list is empty."));
    }

    #[test]
    fn test_add_trims_title() {
        let repo = InMemoryRepository::new();

        let out = session(&repo, "2\n  buy milk  \n");

        assert!(out.contains("Task added."));
        assert_eq!(repo.list(), vec![Task::new("buy milk")]);
    }

    #[test]
    fn test_add_rejects_empty_task() {
        let repo = tracked();

        let out = session(&repo, "2\n \t \n");

        assert!(out.contains("A task cannot be empty."));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_delete_by_number() {
        let repo = tracked();

        let out = session(&repo, "3\n1\n");

        assert!(out.contains("Task \"write report\" deleted."));
        assert_eq!(repo.list(), vec![Task::new("call Anna")]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let repo = tracked();

        let out = session(&repo, "3\n3\n3\n0\n");

        assert!(out.contains("Invalid index: no task number 3."));
        assert!(out.contains("Invalid index: no task number 0."));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_delete_requires_a_number() {
        let repo = tracked();

        let out = session(&repo, "3\nfirst\n");

        assert!(out.contains("Please enter a number."));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_delete_from_empty_list_asks_nothing() {
        let out = session(&InMemoryRepository::new(), "3\n4\n");

        assert!(out.contains("The task list is empty."));
        assert!(!out.contains("Number of the task to delete"));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice() {
        let out = session(&tracked(), "5\n");
        assert!(out.contains("Invalid choice '5', try again."));
    }
}
