use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::cli::{CheckArgs, ItemArgs, ReportFormat, SaveArgs};
use crate::fingerprint::fingerprint_all;
use crate::form::{ItemForm, fill_interactive, load_items_file, prompt_line};
use crate::matcher::find_matches;
use crate::report::{MatchReport, summarize};
use crate::settings::Settings;
use crate::token_file::{export_file_name, read_tokens, resolve_out_dir, write_tokens};

/// Outcome of `check`: either no token file was chosen, or a report.
#[derive(Debug)]
pub enum CheckOutcome {
    NoFileSelected,
    Checked(MatchReport),
}

/// Current items from flags and `--items-file`, or the interactive form when
/// neither is given.
pub fn current_items<R, W>(
    args: &ItemArgs,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>>
where
    R: BufRead,
    W: Write,
{
    if args.items.is_empty() && args.items_file.is_none() {
        settings.validate()?;
        let mut form = ItemForm::with_slots(settings.slots);
        fill_interactive(&mut form, input, output)?;
        return Ok(form.items());
    }

    let mut form = ItemForm::from_values(args.items.iter().cloned());
    if let Some(path) = &args.items_file {
        for value in load_items_file(path)?.items() {
            let index = form.add_field();
            form.set(index, value);
        }
    }
    let items = form.items();
    debug!("collected {} items", items.len());
    Ok(items)
}

pub fn hash<R, W>(args: &ItemArgs, settings: &Settings, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let items = current_items(args, settings, input, output)?;
    for token in fingerprint_all(&items) {
        writeln!(output, "{token}")?;
    }
    Ok(())
}

pub fn save<R, W>(
    args: &SaveArgs,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    let items = current_items(&args.items, settings, input, output)?;
    let tokens = fingerprint_all(&items);

    let path = match &args.out {
        Some(path) => path.clone(),
        None => resolve_out_dir(args.out_dir.as_deref())
            .join(export_file_name(&settings.file_prefix, OffsetDateTime::now_utc())),
    };
    write_tokens(&path, &tokens)?;
    info!("exported {} fingerprints", tokens.len());

    writeln!(
        output,
        "Saved {} fingerprints to {}",
        tokens.len(),
        path.display()
    )?;
    Ok(path)
}

pub fn check<R, W>(
    args: &CheckArgs,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> Result<CheckOutcome>
where
    R: BufRead,
    W: Write,
{
    let items = current_items(&args.items, settings, input, output)?;

    let token_file = match &args.tokens {
        Some(path) => Some(path.clone()),
        None => prompt_line(input, output, "Token file (leave blank to cancel): ")?
            .map(|answer| answer.trim().to_string())
            .filter(|answer| !answer.is_empty())
            .map(PathBuf::from),
    };
    let Some(token_file) = token_file else {
        info!("no token file selected; nothing to check");
        return Ok(CheckOutcome::NoFileSelected);
    };

    let tokens = read_tokens(&token_file)?;
    let matches = find_matches(&items, &tokens);
    info!(
        "{} of {} items matched {}",
        matches.len(),
        items.len(),
        token_file.display()
    );

    let report = MatchReport {
        generated_at: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .context("format report timestamp")?,
        token_file,
        items_checked: items.len(),
        tokens_loaded: tokens.len(),
        matches,
    };

    match args.format {
        ReportFormat::Text => writeln!(output, "{}", summarize(&report.matches))?,
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize match report")?;
            writeln!(output, "{json}")?;
        }
    }

    Ok(CheckOutcome::Checked(report))
}
