//! Command loop: parses one line at a time and dispatches it to the admin.

use std::io::{self, BufRead, Write};

use birthday_core::{format_birth_date, BirthdayAdmin, BirthdayForm, Transport};
use chrono::NaiveDate;

use crate::terminal::Terminal;

const HELP: &str = "\
Команды:
  list                         показать список
  add <username> <ГГГГ-ММ-ДД>  добавить участника
  delete <id>                  удалить запись
  tomorrow                     у кого день рождения завтра
  help                         эта справка
  quit                         выход";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add(BirthdayForm),
    Delete(i64),
    Tomorrow,
    Help,
    Quit,
}

impl Command {
    /// Blank lines parse to `None`. Missing `add` arguments become empty
    /// fields so the admin's own presence check reports them.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let command = match name {
            "list" | "ls" => Command::List,
            "add" => {
                let username = words.next().unwrap_or_default();
                let birth_date = words.next().unwrap_or_default();
                Command::Add(BirthdayForm::new(username, birth_date))
            }
            "delete" | "rm" => {
                let id = words.next().ok_or_else(|| "usage: delete <id>".to_string())?;
                let id = id.parse().map_err(|_| format!("not a record id: {id}"))?;
                Command::Delete(id)
            }
            "tomorrow" => Command::Tomorrow,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("unknown command: {other}")),
        };
        Ok(Some(command))
    }
}

/// Initialize the admin, then serve commands until `quit` or end of input.
pub fn run<T, R, W>(
    admin: &mut BirthdayAdmin<T, Terminal<R, W>>,
    today: impl Fn() -> NaiveDate,
) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    admin.initialize();

    while let Some(line) = admin.view_mut().read_line("> ")? {
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                admin.view_mut().say(format_args!("{message}"));
                continue;
            }
        };
        tracing::debug!(?command, "dispatching");

        // Failures are already logged and, where it applies, alerted.
        match command {
            Command::List => {
                let _ = admin.load_and_render();
            }
            Command::Add(form) => {
                let _ = admin.submit(&form);
            }
            Command::Delete(id) => {
                let _ = admin.delete(id);
            }
            Command::Tomorrow => {
                let Some(day) = today().succ_opt() else {
                    continue;
                };
                if let Ok(hits) = admin.birthdays_on(day) {
                    let view = admin.view_mut();
                    view.say(format_args!("{}:", format_birth_date(day)));
                    for b in hits {
                        view.say(format_args!("  {}", b.username));
                    }
                }
            }
            Command::Help => admin.view_mut().say(format_args!("{HELP}")),
            Command::Quit => break,
        }
    }
    Ok(())
}
