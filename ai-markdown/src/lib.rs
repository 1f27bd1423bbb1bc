//! Renders the constrained markdown dialect produced by the AI analysis
//! into HTML, and sanitizes the result before it reaches the document.
//!
//! This is deliberately not a general markdown parser. The AI summary
//! only uses level 2-3 headings, ordered/unordered lists, bold spans and
//! paragraphs; anything else falls through as plain paragraph text. Raw
//! text is HTML-escaped before bold substitution, and [`sanitize`] runs
//! over the final output as a second, independent line of defense.

/// Tags [`render`] produces and [`sanitize`] lets through. Everything
/// else is escaped so it displays as text.
const ALLOWED_TAGS: &[&str] = &["h4", "p", "ul", "ol", "li", "strong"];

#[derive(Clone, Copy, PartialEq)]
enum OpenList {
    None,
    Unordered,
    Ordered,
}

/// Convert the markdown subset to HTML, line by line.
///
/// Per line, first match wins: blank lines close any open list; `##` or
/// `###` headings become `<h4>`; `1.`-style lines become `<ol>` items;
/// `-`/`*` lines become `<ul>` items; everything else is a paragraph.
/// Empty input yields empty output.
pub fn render(markdown: &str) -> String {
    let mut html = String::new();
    let mut open = OpenList::None;

    for line in markdown.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            close_list(&mut html, &mut open);
            continue;
        }

        if let Some(heading) = strip_heading_marker(trimmed) {
            close_list(&mut html, &mut open);
            html.push_str("<h4>");
            html.push_str(&format_inline(heading));
            html.push_str("</h4>");
            continue;
        }

        if let Some(item) = strip_ordered_marker(trimmed) {
            if open != OpenList::Ordered {
                close_list(&mut html, &mut open);
                html.push_str("<ol>");
                open = OpenList::Ordered;
            }
            push_item(&mut html, item);
            continue;
        }

        if let Some(item) = strip_unordered_marker(trimmed) {
            if open != OpenList::Unordered {
                close_list(&mut html, &mut open);
                html.push_str("<ul>");
                open = OpenList::Unordered;
            }
            push_item(&mut html, item);
            continue;
        }

        close_list(&mut html, &mut open);
        html.push_str("<p>");
        html.push_str(&format_inline(trimmed));
        html.push_str("</p>");
    }

    close_list(&mut html, &mut open);
    html
}

/// Render and sanitize in one step. This is the only form the UI should
/// ever inject into the document.
pub fn render_sanitized(markdown: &str) -> String {
    sanitize(&render(markdown))
}

fn close_list(html: &mut String, open: &mut OpenList) {
    match open {
        OpenList::Unordered => html.push_str("</ul>"),
        OpenList::Ordered => html.push_str("</ol>"),
        OpenList::None => {}
    }
    *open = OpenList::None;
}

fn push_item(html: &mut String, item: &str) {
    html.push_str("<li>");
    html.push_str(&format_inline(item));
    html.push_str("</li>");
}

/// `^#{2,3}\s+` — exactly two or three hashes followed by whitespace.
/// Returns the heading text with the marker and its whitespace removed.
fn strip_heading_marker(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    if !(2..=3).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

/// `^\d+\.\s+` — an integer, a dot, whitespace.
fn strip_ordered_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let rest = rest.strip_prefix('.')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

/// `^[-*]\s+` — a dash or asterisk, whitespace.
fn strip_unordered_marker(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('-').or_else(|| line.strip_prefix('*'))?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    Some(rest.trim_start())
}

/// Escape raw text, then replace `**text**` spans with `<strong>`.
///
/// Escaping runs first so the inserted markup itself is never escaped;
/// the span content is the already-escaped text, with no nested
/// formatting.
fn format_inline(text: &str) -> String {
    bold_spans(&escape_html(text))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Minimal non-empty `**text**` spans become `<strong>text</strong>`.
fn bold_spans(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped;

    while let Some(start) = rest.find("**") {
        let after = &rest[start + 2..];
        match after.find("**") {
            // The span must contain at least one character
            Some(end) if end > 0 => {
                out.push_str(&rest[..start]);
                out.push_str("<strong>");
                out.push_str(&after[..end]);
                out.push_str("</strong>");
                rest = &after[end + 2..];
            }
            _ => break,
        }
    }

    out.push_str(rest);
    out
}

/// Strip any markup the renderer did not intend to produce.
///
/// Allowed tags are re-emitted bare, with any attributes dropped, so no
/// event-handler attribute can survive even if one somehow reached this
/// point. Every other `<` is escaped. The renderer already escapes raw
/// text; this pass exists so a future renderer bug cannot become an
/// injection.
pub fn sanitize(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let bytes = html.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'<' {
            let start = i;
            while i < bytes.len() && bytes[i] != b'<' {
                i += 1;
            }
            out.push_str(&html[start..i]);
            continue;
        }

        let tag_open = i;
        let mut j = i + 1;
        let closing = j < bytes.len() && bytes[j] == b'/';
        if closing {
            j += 1;
        }

        let name_start = j;
        while j < bytes.len() && bytes[j].is_ascii_alphanumeric() {
            j += 1;
        }
        let name = html[name_start..j].to_lowercase();

        // Find the end of the tag; an unterminated tag is not markup
        let gt = bytes[j..].iter().position(|&b| b == b'>');

        match gt {
            Some(offset)
                if ALLOWED_TAGS.contains(&name.as_str())
                    && name_start != j =>
            {
                out.push('<');
                if closing {
                    out.push('/');
                }
                out.push_str(&name);
                out.push('>');
                i = j + offset + 1;
            }
            _ => {
                out.push_str("&lt;");
                i = tag_open + 1;
            }
        }
    }

    out
}
