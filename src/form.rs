use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Numbered item fields, the terminal counterpart of the item entry page.
/// Fields are materialised only once something is written to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    slots: usize,
    fields: Vec<String>,
}

impl ItemForm {
    pub fn with_slots(slots: usize) -> Self {
        Self {
            slots,
            fields: Vec::new(),
        }
    }

    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            slots: 0,
            fields: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len().max(self.slots)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends an empty field and returns its index.
    pub fn add_field(&mut self) -> usize {
        let index = self.len();
        self.fields.resize(index + 1, String::new());
        index
    }

    pub fn set(&mut self, index: usize, value: impl Into<String>) {
        if index >= self.len() {
            return;
        }
        if index >= self.fields.len() {
            self.fields.resize(index + 1, String::new());
        }
        self.fields[index] = value.into();
    }

    pub fn placeholder(index: usize) -> String {
        format!("Item #{}", index + 1)
    }

    /// Filled fields in field order; blank fields are skipped.
    pub fn items(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .collect()
    }
}

pub fn load_items_file(path: &Path) -> Result<ItemForm> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(ItemForm::from_values(contents.lines()))
}

/// Prompts for every field, then offers to add more until declined.
/// End of input stops the form early and keeps what was entered.
pub fn fill_interactive<R, W>(form: &mut ItemForm, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Enter items (leave a field blank to skip it).")?;
    for index in 0..form.len() {
        match prompt_line(input, output, &format!("{}: ", ItemForm::placeholder(index)))? {
            Some(value) => form.set(index, value),
            None => return Ok(()),
        }
    }

    loop {
        match prompt_bool(input, output, "Add Item?", false)? {
            Some(true) => {
                let index = form.add_field();
                match prompt_line(input, output, &format!("{}: ", ItemForm::placeholder(index)))? {
                    Some(value) => form.set(index, value),
                    None => return Ok(()),
                }
            }
            Some(false) | None => return Ok(()),
        }
    }
}

pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(Some(trimmed.to_string()))
}

fn prompt_bool<R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: bool,
) -> Result<Option<bool>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let default_hint = if default { "[Y/n]" } else { "[y/N]" };
        let Some(answer) = prompt_line(input, output, &format!("{prompt} {default_hint}: "))? else {
            return Ok(None);
        };
        match answer.trim().to_lowercase().as_str() {
            "" => return Ok(Some(default)),
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => writeln!(output, "Answer 'y' or 'n'.")?,
        }
    }
}
