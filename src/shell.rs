//! Interactive command loop.
//!
//! Reads menu choices and their follow-up answers line by line and drives the
//! inventory. Saving is left to the caller once [`Shell::run`] returns.

use crate::error::{MarinaError, Result};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::persistence;
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

const BANNER: &str = "Welcome to the Boat Management System\n-------------------------------------";
const MENU_PROMPT: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
const CSV_PROMPT: &str = "Please enter the boat data in CSV format                 : ";
const NAME_PROMPT: &str = "Please enter the boat name                               : ";
const AMOUNT_PROMPT: &str = "Please enter the amount to be paid                       : ";

/// A menu choice, selected by its first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Inventory,
    Add,
    Remove,
    Payment,
    Month,
    Exit,
}

impl Command {
    /// Parses a menu answer. Only the first character counts, in any case.
    pub fn parse(input: &str) -> Option<Command> {
        match input.chars().next()?.to_ascii_lowercase() {
            'i' => Some(Command::Inventory),
            'a' => Some(Command::Add),
            'r' => Some(Command::Remove),
            'p' => Some(Command::Payment),
            'm' => Some(Command::Month),
            'x' => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Command loop over any line source and sink.
pub struct Shell<'a, R, W> {
    inventory: &'a mut Inventory,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(inventory: &'a mut Inventory, input: R, output: W) -> Self {
        Shell {
            inventory,
            input,
            output,
        }
    }

    /// Runs until the exit command or end of input.
    ///
    /// Only failures to read input or write output end the loop early;
    /// everything else is reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            write!(self.output, "\n{}", MENU_PROMPT)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    debug!("Input closed, leaving command loop");
                    break;
                }
            };

            match Command::parse(&line) {
                Some(Command::Exit) => break,
                Some(command) => self.execute(command)?,
                None => writeln!(
                    self.output,
                    "Invalid option {}",
                    line.chars().next().map(String::from).unwrap_or_default()
                )?,
            }
        }

        writeln!(self.output, "\nExiting the Boat Management System")?;
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        debug!("Executing {:?}", command);

        match command {
            Command::Inventory => {
                for boat in self.inventory.list() {
                    writeln!(self.output, "{}", boat)?;
                }
                Ok(())
            }
            Command::Add => {
                let line = self.prompt(CSV_PROMPT)?;
                if self.inventory.len() >= self.inventory.capacity() {
                    return self.report(MarinaError::CapacityExceeded {
                        capacity: self.inventory.capacity(),
                    });
                }
                let result = persistence::parse_line(&line).and_then(|boat| self.inventory.insert(boat));
                match result {
                    Ok(()) => Ok(()),
                    Err(e) => self.report(e),
                }
            }
            Command::Remove => {
                let name = self.prompt(NAME_PROMPT)?;
                match self.inventory.remove(&name) {
                    Ok(_) => Ok(()),
                    Err(e) => self.report(e),
                }
            }
            Command::Payment => {
                let name = self.prompt(NAME_PROMPT)?;
                if self.inventory.find_index(&name).is_none() {
                    return self.report(MarinaError::NotFound { name });
                }

                let answer = self.prompt(AMOUNT_PROMPT)?;
                let amount = match Money::from_str(&answer) {
                    Ok(amount) => amount,
                    Err(_) => {
                        writeln!(self.output, "Invalid amount {}", answer.trim())?;
                        return Ok(());
                    }
                };

                match self.inventory.apply_payment(&name, amount) {
                    Ok(_) => Ok(()),
                    Err(e) => self.report(e),
                }
            }
            Command::Month => {
                for name in self.inventory.charge_monthly() {
                    let err = MarinaError::BalanceOverflow { name };
                    writeln!(self.output, "{}", err)?;
                }
                Ok(())
            }
            Command::Exit => Ok(()),
        }
    }

    /// Shows a recoverable error to the user. I/O errors are passed back up.
    fn report(&mut self, err: MarinaError) -> Result<()> {
        match err {
            MarinaError::Io(e) => Err(e.into()),
            MarinaError::Parse { message } => {
                debug!("Rejected boat data: {}", message);
                writeln!(self.output, "Invalid boat data format.")?;
                Ok(())
            }
            MarinaError::Csv(e) => {
                debug!("Rejected boat data: {}", e);
                writeln!(self.output, "Invalid boat data format.")?;
                Ok(())
            }
            other => {
                writeln!(self.output, "{}", other)?;
                Ok(())
            }
        }
    }

    /// Writes `prompt` and reads the answer. End of input reads as empty.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    /// Reads one line without its terminator. Bytes that are not UTF-8 are
    /// replaced rather than ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(Some(
            line.trim_end_matches(|c: char| c == '\n' || c == '\r')
                .to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(inventory: &mut Inventory, input: &str) -> String {
        let mut output = Vec::new();
        Shell::new(inventory, Cursor::new(input), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("i"), Some(Command::Inventory));
        assert_eq!(Command::parse("Add"), Some(Command::Add));
        assert_eq!(Command::parse("X"), Some(Command::Exit));
        assert_eq!(Command::parse("q"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_add_then_list() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "a\nBetty,20,slip,3,100\ni\nx\n");

        assert_eq!(inventory.len(), 1);
        assert!(output.contains("Betty                 20'  slip     #3     Owes $ 100.00"));
        assert!(output.ends_with("\nExiting the Boat Management System\n"));
    }

    #[test]
    fn test_add_reports_bad_format() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "A\nnot,a,boat\nX\n");

        assert!(inventory.is_empty());
        assert!(output.contains("Invalid boat data format."));
    }

    #[test]
    fn test_add_reports_full_marina() {
        let mut inventory = Inventory::with_capacity_limit(1);
        let output = run_session(&mut inventory, "a\nOne,20,slip,1,0\na\nTwo,20,slip,2,0\nx\n");

        assert_eq!(inventory.len(), 1);
        assert!(output.contains("Marina is full."));
    }

    #[test]
    fn test_payment_flow() {
        let mut inventory = Inventory::new();
        let output = run_session(
            &mut inventory,
            "a\nBetty,20,slip,3,100\np\nbetty\n150\np\nBetty\n100\nx\n",
        );

        assert!(output.contains("That is more than the amount owed, $100.00"));
        assert!(inventory.get("Betty").unwrap().amount_owed.is_zero());
    }

    #[test]
    fn test_payment_unknown_boat_skips_amount_prompt() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "p\nNobody\nx\n");

        assert!(output.contains("No boat with that name"));
        assert!(!output.contains(AMOUNT_PROMPT));
    }

    #[test]
    fn test_remove_and_month() {
        let mut inventory = Inventory::new();
        run_session(
            &mut inventory,
            "a\nKeep,10,trailor,TAG,0\na\nGone,10,land,C,0\nr\ngone\nm\nx\n",
        );

        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get("Keep").unwrap().amount_owed.to_string(), "250.00");
    }

    #[test]
    fn test_month_reports_overflowing_balance() {
        let mut inventory = Inventory::new();
        let output = run_session(
            &mut inventory,
            "a\nRich,10,slip,1,79228162514264337593543950335\nm\nx\n",
        );

        assert!(output.contains("The balance for Rich is too large to change"));
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_invalid_utf8_line_is_not_fatal() {
        let mut inventory = Inventory::new();
        inventory
            .insert(persistence::parse_line("Alpha,30,slip,4,200.00").unwrap())
            .unwrap();

        let mut output = Vec::new();
        Shell::new(&mut inventory, Cursor::new(&b"m\nr\n\xff\xfe\nx\n"[..]), &mut output)
            .run()
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No boat with that name"));
        assert!(output.contains("Exiting the Boat Management System"));
        assert_eq!(inventory.get("Alpha").unwrap().amount_owed.to_string(), "575.00");
    }

    #[test]
    fn test_unknown_option_and_eof() {
        let mut inventory = Inventory::new();
        let output = run_session(&mut inventory, "z\n");

        assert!(output.contains("Invalid option z"));
        assert!(output.contains("Exiting the Boat Management System"));
    }
}
