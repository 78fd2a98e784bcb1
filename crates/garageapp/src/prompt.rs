//! Blocking prompt loops over line-oriented input.
//!
//! A [`Prompter`] owns a reader and a writer. Each `ask_*` method writes a
//! prompt, reads one line, runs a validator from [`crate::validation`], and on
//! rejection prints the validator's message and asks again. It only returns
//! once a valid value has been entered.
//!
//! End of input is the one way out of a loop: it surfaces as
//! [`GarageError::InputClosed`], so a scripted session that runs out of lines
//! stops instead of spinning.

use crate::error::{GarageError, Result};
use crate::model::{Vehicle, VehicleDraft};
use crate::validation::{self, ValidationError, YearRange};
use std::io::{BufRead, Write};

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Hand back the writer, e.g. to inspect captured output in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a line of text.
    pub fn say(&mut self, message: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", message.as_ref())?;
        Ok(())
    }

    /// Write `prompt` and read one line, without its line ending.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GarageError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Re-ask `prompt` until `validate` accepts the line.
    pub fn ask_until<T, F>(&mut self, prompt: &str, mut validate: F) -> Result<T>
    where
        F: FnMut(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            let line = self.ask(prompt)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(format!("\n{}", err))?,
            }
        }
    }

    /// Wait for the user to press Enter.
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        self.ask(prompt).map(|_| ())
    }

    pub fn ask_required(&mut self, prompt: &str) -> Result<String> {
        self.ask_until(prompt, validation::validate_required)
    }

    pub fn ask_year(&mut self, prompt: &str, range: YearRange) -> Result<i32> {
        self.ask_until(prompt, |raw| validation::validate_year(raw, range))
    }

    pub fn ask_int_between(&mut self, prompt: &str, min: u64, max: u64) -> Result<u64> {
        self.ask_until(prompt, |raw| validation::validate_int_between(raw, min, max))
    }

    pub fn ask_float_at_least(&mut self, prompt: &str, min: f64) -> Result<f64> {
        self.ask_until(prompt, |raw| validation::validate_float_at_least(raw, min))
    }

    pub fn ask_registration(&mut self, prompt: &str, stock: &[Vehicle]) -> Result<String> {
        self.ask_until(prompt, |raw| validation::validate_registration(raw, stock))
    }

    pub fn ask_choice<'a>(&mut self, prompt: &str, options: &[&'a str]) -> Result<&'a str> {
        self.ask_until(prompt, |raw| validation::validate_choice(raw, options))
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        self.ask_until(prompt, validation::validate_yes_no)
    }

    /// Collect every field of a new vehicle, in sheet order:
    /// registration, make, model, year, mileage, purchase price, sale price.
    pub fn ask_vehicle(&mut self, stock: &[Vehicle], years: YearRange) -> Result<VehicleDraft> {
        let reg_number =
            self.ask_registration("\nEnter vehicle registration number (e.g., CN18 YGG): ", stock)?;
        let make = validation::title_case(&self.ask_required("\nEnter vehicle make (e.g., Ford): ")?);
        let model =
            validation::title_case(&self.ask_required("\nEnter vehicle model (e.g., Fiesta): ")?);
        let year = self.ask_year("\nEnter vehicle year (e.g., 2018): ", years)?;
        let mileage = self.ask_int_between(
            "\nEnter vehicle mileage (e.g., 50000): ",
            0,
            validation::MAX_MILEAGE,
        )?;
        let purchase_price =
            self.ask_float_at_least("\nEnter vehicle purchase price (e.g., 8000): ", 0.0)?;
        let sale_price = self.ask_float_at_least("\nEnter vehicle sale price (e.g., 10000): ", 0.0)?;

        Ok(VehicleDraft {
            reg_number,
            make,
            model,
            year,
            mileage,
            purchase_price,
            sale_price,
        })
    }
}

/// Prompter over in-memory input, capturing output. Used by tests.
#[cfg(any(test, feature = "test_utils"))]
pub fn scripted(lines: &[&str]) -> Prompter<std::io::Cursor<Vec<u8>>, Vec<u8>> {
    let mut script = lines.join("\n");
    script.push('\n');
    Prompter::new(std::io::Cursor::new(script.into_bytes()), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_of<R: BufRead>(prompter: Prompter<R, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn ask_strips_line_endings() {
        let mut p = Prompter::new(std::io::Cursor::new(b"hello\r\n".to_vec()), Vec::new());
        assert_eq!(p.ask("> ").unwrap(), "hello");
        assert_eq!(output_of(p), "> ");
    }

    #[test]
    fn eof_is_input_closed() {
        let mut p = Prompter::new(std::io::Cursor::new(Vec::new()), Vec::new());
        assert!(matches!(p.ask("> "), Err(GarageError::InputClosed)));
    }

    #[test]
    fn required_reprompts_until_non_empty() {
        let mut p = scripted(&["", "   ", "Ford"]);
        assert_eq!(p.ask_required("Make: ").unwrap(), "Ford");
        let out = output_of(p);
        assert_eq!(out.matches("Make: ").count(), 3);
        assert_eq!(out.matches("This field cannot be empty").count(), 2);
    }

    #[test]
    fn year_loop_explains_range() {
        let mut p = scripted(&["abc", "1999", "2018"]);
        assert_eq!(p.ask_year("Year: ", YearRange::new(2001, 2036)).unwrap(), 2018);
        let out = output_of(p);
        assert!(out.contains("Please enter a numeric year"));
        assert!(out.contains("between 2001 and 2036"));
    }

    #[test]
    fn loop_gives_up_only_when_input_ends() {
        let mut p = scripted(&["-5", "x"]);
        assert!(matches!(
            p.ask_int_between("Mileage: ", 0, validation::MAX_MILEAGE),
            Err(GarageError::InputClosed)
        ));
    }

    #[test]
    fn registration_loop_rejects_format_then_accepts() {
        let mut p = scripted(&["ABC", "cn18ygg"]);
        assert_eq!(p.ask_registration("Reg: ", &[]).unwrap(), "CN18YGG");
        assert!(output_of(p).contains("Invalid registration format"));
    }

    #[test]
    fn menu_choice_only_accepts_listed_options() {
        let mut p = scripted(&["0", "five", "4"]);
        assert_eq!(p.ask_choice("Choice: ", &["1", "2", "3", "4"]).unwrap(), "4");
        assert_eq!(output_of(p).matches("Invalid choice").count(), 2);
    }

    #[test]
    fn ask_vehicle_collects_fields_in_order() {
        let mut p = scripted(&[
            "cn18 ygg", "ford", "fiesta", "2018", "50000", "8000", "10000",
        ]);
        let draft = p
            .ask_vehicle(&[], YearRange::new(2001, 2036))
            .unwrap();
        assert_eq!(
            draft,
            VehicleDraft {
                reg_number: "CN18 YGG".into(),
                make: "Ford".into(),
                model: "Fiesta".into(),
                year: 2018,
                mileage: 50000,
                purchase_price: 8000.0,
                sale_price: 10000.0,
            }
        );
    }
}
