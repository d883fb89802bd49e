use crate::refpage::RefPage;

pub const DEFAULT_PREFIX: &str = "///";

const NAME_TAG: &str = "\\name";
const PARAM_TAG: &str = "\\param";
const BRIEF_TAG: &str = "\\brief";

/// Render a page as a Doxygen-style comment block, one `\n`-terminated line per entry.
///
/// Layout:
/// ```text
/// /// \name <name>
/// /// \param <param> <description>
/// /// \brief <first description paragraph>
/// /// <further paragraphs>
/// ```
pub fn render(page: &RefPage, prefix: &str) -> String {
    let mut doc = String::new();

    push_line(&mut doc, prefix, Some(NAME_TAG), &page.name);

    for param in &page.params {
        let text = format!("{} {}", param.name, param.description);
        push_line(&mut doc, prefix, Some(PARAM_TAG), &text);
    }

    for (i, para) in page.description.iter().enumerate() {
        let tag = if i == 0 { Some(BRIEF_TAG) } else { None };
        push_line(&mut doc, prefix, tag, para);
    }

    doc
}

fn push_line(doc: &mut String, prefix: &str, tag: Option<&str>, text: &str) {
    doc.push_str(prefix);
    doc.push(' ');
    if let Some(tag) = tag {
        doc.push_str(tag);
        doc.push(' ');
    }
    doc.push_str(text);
    doc.push('\n');
}
