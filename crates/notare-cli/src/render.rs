//! HTML pages for a parsed batch.
//!
//! Each example page is a two-column table: docs on the left, highlighted code
//! on the right. A docs cell spans as many rows as its row's `DocSpan` says;
//! absorbed rows emit no docs cell at all.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use notare_engine::{DocSpan, Example, ExampleBatch, Row};

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 72em; }
table { border-collapse: collapse; width: 100%; }
td { vertical-align: top; padding: 0 1em; }
td.docs { width: 40%; color: #252519; }
td.code { background: #f8f8f8; }
td.code.empty { background: none; }
pre { margin: 0; }
button.copy { float: right; }
";

/// Page for the example at `index` in `batch`.
pub fn example_page(batch: &ExampleBatch, index: usize, title: &str) -> Option<String> {
    let example = batch.get(index)?;
    let root = root_prefix(&example.id);
    let mut html = String::new();

    page_head(&mut html, &format!("{title}: {}", example.name), &root);
    let _ = writeln!(
        html,
        "<div class=\"example\" id=\"{}\">",
        encode_double_quoted_attribute(&example.id)
    );
    let _ = writeln!(
        html,
        "<h2><a href=\"{}\">{}</a>: {}</h2>",
        if root.is_empty() { "./" } else { root.as_str() },
        encode_text(title),
        encode_text(&example.name)
    );
    html.push_str(
        "<button class=\"copy\" type=\"button\" onclick=\"copyCode()\">Copy code</button>\n",
    );

    html.push_str("<table>\n");
    for row in &example.rows {
        push_row(&mut html, row);
    }
    html.push_str("</table>\n");

    if let Some(next) = batch.next_of(index) {
        let _ = writeln!(
            html,
            "<p class=\"next\">Next example: <a href=\"{root}{}.html\">{}</a>.</p>",
            encode_double_quoted_attribute(&next.id),
            encode_text(&next.name)
        );
    }
    if let Some(previous) = batch.previous_of(index) {
        let _ = writeln!(
            html,
            "<p class=\"previous\">Previous example: <a href=\"{root}{}.html\">{}</a>.</p>",
            encode_double_quoted_attribute(&previous.id),
            encode_text(&previous.name)
        );
    }
    html.push_str("</div>\n");

    push_copy_script(&mut html, example);
    html.push_str("</body>\n</html>\n");
    Some(html)
}

/// Index page linking every example in batch order.
pub fn index_page(batch: &ExampleBatch, title: &str) -> String {
    let mut html = String::new();
    page_head(&mut html, title, "");
    let _ = writeln!(html, "<h2>{}</h2>", encode_text(title));

    html.push_str("<ul>\n");
    for example in batch.iter() {
        let _ = writeln!(
            html,
            "<li><a href=\"{}.html\">{}</a></li>",
            encode_double_quoted_attribute(&example.id),
            encode_text(&example.name)
        );
    }
    html.push_str("</ul>\n</body>\n</html>\n");
    html
}

/// Relative path from a page back to the output root. Ids from list entries in
/// subdirectories (`basics/maps`) land in matching subdirectories.
fn root_prefix(id: &str) -> String {
    "../".repeat(id.matches('/').count())
}

fn page_head(html: &mut String, title: &str, root: &str) {
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", encode_text(title));
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{root}highlight.css\">");
    let _ = writeln!(html, "<style>\n{PAGE_STYLE}</style>");
    html.push_str("</head>\n<body>\n");
}

fn push_row(html: &mut String, row: &Row) {
    html.push_str("<tr>\n");
    if let DocSpan::Owner(span) = row.doc_span {
        let _ = writeln!(
            html,
            "<td class=\"docs\" rowspan=\"{span}\">{}</td>",
            row.doc_html
        );
    }

    let class = if row.code_is_empty { "code empty" } else { "code" };
    let _ = writeln!(
        html,
        "<td class=\"{class}\"><pre class=\"chroma\">{}</pre></td>",
        row.code_html.as_deref().unwrap_or_default()
    );
    html.push_str("</tr>\n");
}

fn push_copy_script(html: &mut String, example: &Example) {
    // the code is already escaped for a template literal; keep `</script>` out too
    let code = example.full_code.replace("</", "<\\/");
    let _ = writeln!(
        html,
        "<script>\nconst code = `{code}`;\n\
         function copyCode() {{ navigator.clipboard.writeText(code); }}\n</script>"
    );
}
