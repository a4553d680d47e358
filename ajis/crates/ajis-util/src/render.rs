//! Caret-annotated rendering of diagnostics.
//!
//! Turns a [`Diagnostic`] plus the source buffer into a terminal report:
//!
//! ```text
//! error: invalid number (leading zero not allowed)
//!   --> data.ajis:20:9
//!    |
//! 20 | [9,10,011,12],
//!    |         ^ leading zero not allowed
//!    |
//! ```
//!
//! The renderer tolerates locations at end of input (the snippet re-anchors
//! to the last line and the caret sits at end-of-line), crops long lines
//! around the error byte, and expands tabs so the caret lines up with the
//! visual position of the offending byte.

use std::io::{self, Write};

use colored::Colorize;

use crate::error::Diagnostic;

/// Knobs for the renderer.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Colorize the header, arrows, and caret.
    pub color: bool,
    /// Number of columns a tab advances to (next multiple).
    pub tab_width: usize,
    /// Maximum number of source bytes shown on the snippet line; longer
    /// lines are cropped symmetrically around the error byte.
    pub max_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: false,
            tab_width: 4,
            max_width: 80,
        }
    }
}

/// Renders a caret-annotated report for `diag` to `out`.
///
/// `source` must be the buffer the diagnostic's offsets refer to. An offset
/// equal to `source.len()` is valid and anchors the caret at the end of the
/// last line.
pub fn render<W: Write>(
    out: &mut W,
    filename: &str,
    source: &[u8],
    diag: &Diagnostic,
    opts: &RenderOptions,
) -> io::Result<()> {
    let error_word = paint("error", opts.color, Paint::Error);
    let arrow = paint("-->", opts.color, Paint::Gutter);

    match diag.context {
        Some(ctx) => writeln!(out, "{}: {} ({})", error_word, diag.code, ctx)?,
        None => writeln!(out, "{}: {}", error_word, diag.code)?,
    }
    writeln!(
        out,
        "  {} {}:{}:{}",
        arrow, filename, diag.location.line, diag.location.column
    )?;

    let offset = diag.location.offset.min(source.len());

    // Line bounds around the error byte. For offsets at end of input this
    // re-anchors to the last line.
    let line_start = match source[..offset].iter().rposition(|&b| b == b'\n') {
        Some(i) => i + 1,
        None => 0,
    };
    let mut line_end = offset;
    while line_end < source.len() && source[line_end] != b'\n' && source[line_end] != b'\r' {
        line_end += 1;
    }

    // Symmetric crop window around the error byte.
    let half = opts.max_width / 2;
    let win_start = line_start.max(offset.saturating_sub(half));
    let win_end = line_end.min(win_start + opts.max_width);
    let cut_left = win_start > line_start;
    let cut_right = win_end < line_end;

    // Expand tabs while tracking the caret's visual column.
    let mut display = Vec::new();
    let mut caret_col = 0usize;
    let mut col = 0usize;
    for (i, &b) in source[win_start..win_end].iter().enumerate() {
        if win_start + i == offset {
            caret_col = col;
        }
        if b == b'\t' {
            let next_stop = (col / opts.tab_width + 1) * opts.tab_width;
            display.resize(display.len() + (next_stop - col), b' ');
            col = next_stop;
        } else {
            display.push(b);
            col += 1;
        }
    }
    if offset >= win_end {
        caret_col = col;
    }
    if cut_left {
        caret_col += 3;
    }

    let line_label = diag.location.line.to_string();
    let gutter_width = line_label.len().max(2);
    let bar = paint("|", opts.color, Paint::Gutter);

    writeln!(out, " {:>width$} {}", "", bar, width = gutter_width)?;
    write!(
        out,
        " {} ",
        paint(
            &format!("{:>width$} |", line_label, width = gutter_width),
            opts.color,
            Paint::Gutter
        )
    )?;
    if cut_left {
        out.write_all(b"...")?;
    }
    out.write_all(&display)?;
    if cut_right {
        out.write_all(b"...")?;
    }
    writeln!(out)?;

    write!(out, " {:>width$} {} ", "", bar, width = gutter_width)?;
    let caret = paint("^", opts.color, Paint::Error);
    match diag.context {
        Some(ctx) => writeln!(out, "{:>pad$}{} {}", "", caret, ctx, pad = caret_col)?,
        None => writeln!(out, "{:>pad$}{}", "", caret, pad = caret_col)?,
    }
    writeln!(out, " {:>width$} {}", "", bar, width = gutter_width)?;

    Ok(())
}

/// Renders the report into a `String`.
pub fn render_to_string(
    filename: &str,
    source: &[u8],
    diag: &Diagnostic,
    opts: &RenderOptions,
) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = render(&mut buf, filename, source, diag, opts);
    String::from_utf8_lossy(&buf).into_owned()
}

enum Paint {
    Error,
    Gutter,
}

fn paint(text: &str, color: bool, kind: Paint) -> String {
    if !color {
        return text.to_string();
    }
    match kind {
        Paint::Error => text.bright_red().bold().to_string(),
        Paint::Gutter => text.bright_blue().bold().to_string(),
    }
}
