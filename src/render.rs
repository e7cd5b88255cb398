use crate::algorithm::{Diff, DiffOp};
use crate::DynResult;
use colored::Colorize as _;
use std::io;
use unicode_width::UnicodeWidthStr as _;

/// Escapes text for embedding in HTML markup. Every token passes through
/// here before rendering, so markup-looking input cannot inject elements.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Blank run with the same display width as `text`, so the deleted and
/// inserted views stay column-aligned.
fn placeholder(text: &str) -> String {
    " ".repeat(text.width())
}

/// Two-line HTML fragment: the deleted view (old text, deletions
/// highlighted, insertions blanked out) and the inserted view (symmetric),
/// plus the elapsed time.
pub fn render_html(diff: &Diff) -> String {
    let mut deleted_view = String::new();
    let mut inserted_view = String::new();
    for entry in &diff.entries {
        let text = diff.entry_text(entry);
        match entry.op {
            DiffOp::Equal => {
                let escaped = escape_html(text);
                deleted_view.push_str(&escaped);
                inserted_view.push_str(&escaped);
            }
            DiffOp::Delete => {
                deleted_view.push_str("<span class=\"removed\">");
                deleted_view.push_str(&escape_html(text));
                deleted_view.push_str("</span>");
                inserted_view.push_str(&placeholder(text));
            }
            DiffOp::Insert => {
                deleted_view.push_str(&placeholder(text));
                inserted_view.push_str("<span class=\"added\">");
                inserted_view.push_str(&escape_html(text));
                inserted_view.push_str("</span>");
            }
        }
    }
    format!(
        "<div class=\"diff\">\n\
         <pre class=\"deleted\">{deleted_view}</pre>\n\
         <pre class=\"inserted\">{inserted_view}</pre>\n\
         <p class=\"elapsed\">computed in {:.3} ms</p>\n\
         </div>\n",
        diff.elapsed.as_secs_f64() * 1000.0
    )
}

/// Single-stream view: deletions red, insertions green, everything inline.
pub fn print_unified(diff: &Diff, output: &mut impl io::Write) -> DynResult<()> {
    for entry in &diff.entries {
        let text = diff.entry_text(entry);
        match entry.op {
            DiffOp::Equal => write!(output, "{}", text)?,
            DiffOp::Delete => write!(output, "{}", text.red().strikethrough())?,
            DiffOp::Insert => write!(output, "{}", text.green())?,
        }
    }
    writeln!(output)?;
    Ok(())
}

/// Two-stream view mirroring the HTML layout: the old text with deletions
/// red and insertions blanked, then the new text with insertions green and
/// deletions blanked.
pub fn print_two_line(diff: &Diff, output: &mut impl io::Write) -> DynResult<()> {
    for entry in &diff.entries {
        let text = diff.entry_text(entry);
        match entry.op {
            DiffOp::Equal => write!(output, "{}", text)?,
            DiffOp::Delete => write!(output, "{}", text.red())?,
            DiffOp::Insert => write!(output, "{}", placeholder(text))?,
        }
    }
    writeln!(output)?;
    for entry in &diff.entries {
        let text = diff.entry_text(entry);
        match entry.op {
            DiffOp::Equal => write!(output, "{}", text)?,
            DiffOp::Delete => write!(output, "{}", placeholder(text))?,
            DiffOp::Insert => write!(output, "{}", text.green())?,
        }
    }
    writeln!(output)?;
    Ok(())
}
