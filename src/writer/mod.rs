//! Translation file writer
//!
//! Emits the generated-file header followed by one `key: value` entry per
//! translation. Text values are written inline when short, otherwise as a
//! folded block scalar soft-wrapped at [`YamlStyle::width`].

use crate::error::{LibellesError, LibellesResult};
use crate::types::{ScalarStyle, TranslationValue, YamlStyle};
use serde_yaml::Value;
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Comment block written at the top of every generated file
pub const GENERATED_HEADER: [&str; 3] = [
    "# This file was automatically generated by the Evolution Generator.",
    "# The Evolution Generator is used to automate the creation of consistent, reliable code.",
    "# Any changes made to this file will be overwritten.",
];

/// Write translations to `path`, creating the language directory if needed.
///
/// Keys listed in `plain_keys` are written bare (`1:`, `true:`) instead of
/// quoted.
pub fn write_translation_file(
    path: &Path,
    entries: &[(String, TranslationValue)],
    plain_keys: &HashSet<String>,
    style: &YamlStyle,
) -> LibellesResult<()> {
    let content = render_translations(entries, plain_keys, style)?;

    let save_error = |source| LibellesError::Save {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(save_error)?;
    }
    fs::write(path, content).map_err(save_error)?;

    Ok(())
}

/// Render the full file content: header, blank line, then the mapping
pub fn render_translations(
    entries: &[(String, TranslationValue)],
    plain_keys: &HashSet<String>,
    style: &YamlStyle,
) -> LibellesResult<String> {
    let mut out = String::new();
    for line in GENERATED_HEADER {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');

    if entries.is_empty() {
        out.push_str("{}\n");
        return Ok(out);
    }

    for (key, value) in entries {
        if plain_keys.contains(key) {
            out.push_str(key);
        } else {
            out.push_str(&key_scalar(key)?);
        }
        out.push(':');
        match value {
            TranslationValue::Text(text) => render_text(&mut out, text, style)?,
            TranslationValue::Structured(value) => render_child(&mut out, value, style.indent, style)?,
        }
    }

    Ok(out)
}

fn render_text(out: &mut String, text: &str, style: &YamlStyle) -> LibellesResult<()> {
    out.push(' ');
    if ScalarStyle::for_text(text, style.inline_limit) == ScalarStyle::Folded
        && folded_allowed(text)
    {
        FoldedEmitter::new(out, style).emit(text);
    } else {
        out.push_str(&inline_scalar(text)?);
        out.push('\n');
    }
    Ok(())
}

fn is_block(value: &Value) -> bool {
    match value {
        Value::Mapping(m) => !m.is_empty(),
        Value::Sequence(s) => !s.is_empty(),
        _ => false,
    }
}

/// Value after `key:` or `-`, nested lines indented to `indent`
fn render_child(out: &mut String, value: &Value, indent: usize, style: &YamlStyle) -> LibellesResult<()> {
    if is_block(value) {
        out.push('\n');
        render_block(out, value, indent, style, false)
    } else {
        out.push(' ');
        out.push_str(&flow_value(value, false)?);
        out.push('\n');
        Ok(())
    }
}

/// Block mapping or sequence with every level `style.indent` deeper.
///
/// With `continues_line` the first entry goes on the current line, after a
/// sequence dash.
fn render_block(
    out: &mut String,
    value: &Value,
    indent: usize,
    style: &YamlStyle,
    mut continues_line: bool,
) -> LibellesResult<()> {
    let step = style.indent.max(2);
    let mut start_line = |out: &mut String| {
        if !std::mem::take(&mut continues_line) {
            out.push_str(&" ".repeat(indent));
        }
    };

    match value {
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                start_line(out);
                match key {
                    Value::String(text) => out.push_str(&key_scalar(text)?),
                    other => out.push_str(&flow_value(other, true)?),
                }
                out.push(':');
                render_child(out, child, indent + step, style)?;
            }
        }
        Value::Sequence(items) => {
            for item in items {
                start_line(out);
                out.push('-');
                if is_block(item) {
                    out.push_str(&" ".repeat(step - 1));
                    render_block(out, item, indent + step, style, true)?;
                } else {
                    out.push(' ');
                    out.push_str(&flow_value(item, false)?);
                    out.push('\n');
                }
            }
        }
        other => {
            start_line(out);
            out.push_str(&flow_value(other, false)?);
            out.push('\n');
        }
    }
    Ok(())
}

/// Single-line form of a value. Inside flow collections every string is
/// double-quoted.
fn flow_value(value: &Value, in_flow: bool) -> LibellesResult<String> {
    Ok(match value {
        Value::String(text) if in_flow => double_quoted(text),
        Value::String(text) => key_scalar(text)?,
        Value::Sequence(items) => {
            let items = items
                .iter()
                .map(|item| flow_value(item, true))
                .collect::<LibellesResult<Vec<_>>>()?;
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(mapping) => {
            let pairs = mapping
                .iter()
                .map(|(k, v)| Ok(format!("{}: {}", flow_value(k, true)?, flow_value(v, true)?)))
                .collect::<LibellesResult<Vec<_>>>()?;
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, flow_value(&tagged.value, in_flow)?),
        scalar => serde_yaml::to_string(scalar)?.trim_end_matches('\n').to_string(),
    })
}

/// Plain or quoted scalar as serde_yaml would emit it
fn inline_scalar(text: &str) -> LibellesResult<String> {
    let rendered = serde_yaml::to_string(text)?;
    Ok(rendered.trim_end_matches('\n').to_string())
}

/// One-line scalar usable as a mapping key.
///
/// Text holding line breaks or non-printable characters is double-quoted
/// with escapes; serde_yaml would pick a block scalar, which cannot be a key.
fn key_scalar(text: &str) -> LibellesResult<String> {
    if text.chars().any(|ch| is_break(ch) || !is_printable(ch)) {
        return Ok(double_quoted(text));
    }
    let rendered = inline_scalar(text)?;
    if rendered.contains('\n') {
        Ok(double_quoted(text))
    } else {
        Ok(rendered)
    }
}

fn double_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if is_printable(c) => out.push(c),
            c => {
                let code = c as u32;
                let _ = match code {
                    0..=0xFF => write!(out, "\\x{:02X}", code),
                    0x100..=0xFFFF => write!(out, "\\u{:04X}", code),
                    _ => write!(out, "\\U{:08X}", code),
                };
            }
        }
    }
    out.push('"');
    out
}

fn is_break(ch: char) -> bool {
    matches!(ch, '\n' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

fn is_printable(ch: char) -> bool {
    matches!(ch, '\n' | '\u{20}'..='\u{7E}' | '\u{85}' | '\u{A0}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
        && ch != '\u{FEFF}'
}

/// Whether `text` survives a folded block scalar unchanged.
///
/// Trailing spaces, a space right before a line break and non-printable
/// characters cannot be represented; such values fall back to quoting.
pub fn folded_allowed(text: &str) -> bool {
    if text.is_empty() || text.ends_with(' ') {
        return false;
    }
    let mut previous: Option<char> = None;
    for ch in text.chars() {
        if !is_printable(ch) {
            return false;
        }
        if is_break(ch) && previous == Some(' ') {
            return false;
        }
        previous = Some(ch);
    }
    true
}

/// Writes one folded block scalar (`>-` header and content lines)
struct FoldedEmitter<'a> {
    out: &'a mut String,
    column: usize,
    indent: usize,
    width: usize,
}

impl<'a> FoldedEmitter<'a> {
    fn new(out: &'a mut String, style: &YamlStyle) -> Self {
        Self {
            out,
            column: 0,
            indent: style.indent,
            width: style.width,
        }
    }

    fn emit(mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        let hints = self.block_hints(&chars);
        self.out.push('>');
        self.out.push_str(&hints);
        self.line_break(None);

        let mut leading_space = true;
        let mut spaces = false;
        let mut breaks = true;
        let mut start = 0;
        let mut end = 0;

        while end <= chars.len() {
            let ch = chars.get(end).copied();
            if breaks {
                if ch.map_or(true, |c| !is_break(c)) {
                    // A single line break folds into a space, so a real one
                    // needs an extra empty line unless the next line is
                    // more indented.
                    if !leading_space
                        && ch.is_some_and(|c| c != ' ')
                        && chars.get(start) == Some(&'\n')
                    {
                        self.line_break(None);
                    }
                    leading_space = ch == Some(' ');
                    for &br in &chars[start..end] {
                        self.line_break(Some(br));
                    }
                    if ch.is_some() {
                        self.write_indent();
                    }
                    start = end;
                }
            } else if spaces {
                if ch != Some(' ') {
                    // Lines starting with a space keep their breaks when
                    // read back, so they are never wrapped.
                    if start + 1 == end && self.column > self.width && !leading_space {
                        self.write_indent();
                    } else {
                        self.write(&chars[start..end]);
                    }
                    start = end;
                }
            } else if ch.map_or(true, |c| c == ' ' || is_break(c)) {
                self.write(&chars[start..end]);
                if ch.is_none() {
                    self.line_break(None);
                }
                start = end;
            }
            if let Some(c) = ch {
                breaks = is_break(c);
                spaces = c == ' ';
            }
            end += 1;
        }
    }

    /// Indentation and chomping indicators for the header
    fn block_hints(&self, chars: &[char]) -> String {
        let mut hints = String::new();
        if let Some(&first) = chars.first() {
            if first == ' ' || is_break(first) {
                hints.push_str(&self.indent.to_string());
            }
        }
        match chars {
            [.., last] if !is_break(*last) => hints.push('-'),
            [_] => hints.push('+'),
            [.., before, _] if is_break(*before) => hints.push('+'),
            _ => {}
        }
        hints
    }

    fn write(&mut self, data: &[char]) {
        self.out.extend(data);
        self.column += data.len();
    }

    fn line_break(&mut self, br: Option<char>) {
        self.out.push(br.unwrap_or('\n'));
        self.column = 0;
    }

    fn write_indent(&mut self) {
        if self.column > self.indent {
            self.line_break(None);
        }
        if self.column < self.indent {
            self.out.push_str(&" ".repeat(self.indent - self.column));
            self.column = self.indent;
        }
    }
}
