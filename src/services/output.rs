//! Command output. `--json` wraps data in the `{ ok, data }` envelope; text
//! mode prints whatever `TextRender` produces for each value.

use crate::domain::models::JsonOut;
use serde::Serialize;

/// Plain-text form of something a command prints.
pub trait TextRender {
    fn text(&self) -> String;
}

pub fn render_rows<T: Serialize + TextRender>(json: bool, rows: &[T]) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: rows,
        })?);
    }
    Ok(rows
        .iter()
        .map(TextRender::text)
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn render_report<T: Serialize + TextRender>(json: bool, report: &T) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&JsonOut {
            ok: true,
            data: report,
        })?);
    }
    Ok(report.text())
}

pub fn print_rows<T: Serialize + TextRender>(json: bool, rows: &[T]) -> anyhow::Result<()> {
    let out = render_rows(json, rows)?;
    if !out.is_empty() {
        println!("{}", out);
    }
    Ok(())
}

pub fn print_report<T: Serialize + TextRender>(json: bool, report: &T) -> anyhow::Result<()> {
    println!("{}", render_report(json, report)?);
    Ok(())
}
