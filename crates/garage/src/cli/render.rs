use colored::Colorize;
use garageapp::commands::{CmdMessage, MessageLevel};
use garageapp::model::{format_price, Vehicle};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest text cell before it is cut with an ellipsis.
const MAX_TEXT_WIDTH: usize = 15;
const COLUMN_GAP: &str = "  ";

const HEADERS: [&str; 10] = [
    "ID",
    "Reg Number",
    "Make",
    "Model",
    "Year",
    "Mileage",
    "Purchase Price",
    "Sale Price",
    "Status",
    "Date Added",
];

/// Which headers hold numbers; those are right aligned and never cut.
const NUMERIC: [bool; 10] = [true, false, false, false, true, true, true, true, false, false];

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// Render vehicles as a plain aligned table: header, rule, one line per vehicle.
pub(super) fn vehicle_table(vehicles: &[Vehicle]) -> String {
    let rows: Vec<[String; 10]> = vehicles.iter().map(cells).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn cells(v: &Vehicle) -> [String; 10] {
    [
        v.id.to_string(),
        truncate_to_width(&v.reg_number, MAX_TEXT_WIDTH),
        truncate_to_width(&v.make, MAX_TEXT_WIDTH),
        truncate_to_width(&v.model, MAX_TEXT_WIDTH),
        v.year.to_string(),
        v.mileage.to_string(),
        format_price(v.purchase_price),
        format_price(v.sale_price),
        truncate_to_width(&v.status, MAX_TEXT_WIDTH),
        truncate_to_width(&v.date_added, MAX_TEXT_WIDTH),
    ]
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(NUMERIC)
        .map(|((cell, width), numeric)| {
            let pad = " ".repeat(width.saturating_sub(cell.width()));
            if numeric {
                format!("{}{}", pad, cell)
            } else {
                format!("{}{}", cell, pad)
            }
        })
        .collect();
    out.push_str(line.join(COLUMN_GAP).trim_end());
    out.push('\n');
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
