// src/cli.rs
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
};

use crate::csv::Delim;
use crate::data::ComparisonTable;
use crate::file;
use crate::params::{Params, DEFAULT_TAG_FILE};
use crate::runner::{self, Progress};

pub enum Mode {
    Cli(Params),
    Gui(Params),
}

// Decide CLI vs GUI
pub fn detect_mode() -> Result<Mode, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    if env::args().len() == 1 {
        // only program name
        return Ok(Mode::Gui(params));
    }
    parse_cli(&mut params)?;
    Ok(Mode::Cli(params))
}

struct CliProgress;
impl Progress for CliProgress {
    fn update_status(&mut self, msg: &str) {
        println!("{msg}");
    }
}

pub fn run(mut params: Params) -> Result<(), Box<dyn std::error::Error>> {
    if params.url.is_empty() {
        prompt_inputs(&mut params)?;
    }
    if params.url.is_empty() {
        return Err("Keine URL angegeben".into());
    }

    let mut prog = CliProgress;
    let result = runner::compare(&params, Some(&mut prog))?;

    println!("\nProduktdaten von ofen.de:");
    for (label, value) in result.product.display_fields() {
        println!("  {label:<14} {value}");
    }

    println!("\nPreisvergleich:");
    print_table(&result.table);

    let out = file::resolve_out_path(params.out.as_deref(), &file::default_export_name(params.format))?;
    let path = file::write_export(
        &out,
        &Some(ComparisonTable::headers()),
        &result.table.to_rows(),
        params.include_headers,
        params.format,
    )?;
    println!("\nErgebnisse in {} gespeichert.", path.display());

    if params.tag {
        let bytes = crate::pricetag::generate(&result.product)?;
        let tag_out = file::resolve_out_path(params.tag_out.as_deref(), DEFAULT_TAG_FILE)?;
        std::fs::write(&tag_out, bytes)?;
        println!("Preisschild in {} gespeichert.", tag_out.display());
    }

    Ok(())
}

/// Interactive mode, same three questions the tool always asked.
fn prompt_inputs(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    params.url = prompt("ofen.de URL eingeben: ")?;
    if params.artikelnummer.is_none() {
        let v = prompt("Optional: Hersteller Artikelnummer eingeben: ")?;
        if !v.is_empty() { params.artikelnummer = Some(v); }
    }
    if params.ean.is_none() {
        let v = prompt("Optional: EAN eingeben (13-stellig): ")?;
        if !v.is_empty() { params.ean = Some(v); }
    }
    Ok(())
}

fn prompt(msg: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{msg}");
    io::stdout().flush()?;
    let mut line = s!();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Aligned dump of the comparison table. Long cells (URLs mostly)
/// are clipped; the CSV has the full values.
fn print_table(table: &ComparisonTable) {
    const MAX_W: usize = 36;

    let headers = ComparisonTable::headers();
    let rows = table.to_rows();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count().min(MAX_W));
        }
    }

    let print_row = |cells: &[String]| {
        let line = cells
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:<w$}", clip(c, MAX_W), w = widths[i]))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", line.trim_end());
    };

    print_row(&headers);
    for row in &rows {
        print_row(row);
    }
}

fn clip(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s!(s);
    }
    let cut: String = s.chars().take(max - 1).collect();
    join!(cut, "…")
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => params.url = args.next().ok_or("Missing value for --url")?,
            "-a" | "--artikelnummer" => {
                params.artikelnummer =
                    Some(args.next().ok_or("Missing value for --artikelnummer")?);
            }
            "-e" | "--ean" => params.ean = Some(args.next().ok_or("Missing value for --ean")?),
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.include_headers = false,
            "--preisschild" => params.tag = true,
            "--tag-out" => {
                params.tag = true;
                params.tag_out = Some(PathBuf::from(args.next().ok_or("Missing value for --tag-out")?));
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
