use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::text::normalize;

static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.refnamediv > p").unwrap());
static PARAMS_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#parameters > div > dl").unwrap());
static PARAM_NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("dt > span > em > code").unwrap());
static PARAM_DESC_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("dd > p").unwrap());
static DESCRIPTION_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#description p").unwrap());

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No `div.refnamediv > p` node; page does not look like a reference page")]
    MissingName,

    #[error("Found {names} parameter names but {descriptions} parameter descriptions")]
    ParameterMismatch { names: usize, descriptions: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub description: String,
}

/// Fields pulled from one reference page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefPage {
    pub name: String,
    pub params: Vec<Param>,
    pub description: Vec<String>,
}

pub fn extract(html: &str) -> Result<RefPage, ExtractError> {
    let doc = Html::parse_document(html);

    let name_nodes: Vec<String> = doc.select(&NAME_SEL).map(node_text).collect();
    if name_nodes.is_empty() {
        return Err(ExtractError::MissingName);
    }
    let name = normalize(&name_nodes.concat());

    let mut names = Vec::new();
    let mut descriptions = Vec::new();
    for list in doc.select(&PARAMS_SEL) {
        names.extend(list.select(&PARAM_NAME_SEL).map(|e| normalize(&node_text(e))));
        descriptions.extend(list.select(&PARAM_DESC_SEL).map(|e| normalize(&node_text(e))));
    }
    let params = pair_params(names, descriptions)?;

    let description: Vec<String> = doc
        .select(&DESCRIPTION_SEL)
        .map(|e| normalize(&node_text(e)))
        .collect();

    debug!(
        "Extracted {}: {} params, {} description paragraphs",
        name,
        params.len(),
        description.len()
    );

    Ok(RefPage { name, params, description })
}

fn node_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Zip the parallel name/description lists; counts must agree.
fn pair_params(names: Vec<String>, descriptions: Vec<String>) -> Result<Vec<Param>, ExtractError> {
    if names.len() != descriptions.len() {
        return Err(ExtractError::ParameterMismatch {
            names: names.len(),
            descriptions: descriptions.len(),
        });
    }
    Ok(names
        .into_iter()
        .zip(descriptions)
        .map(|(name, description)| Param { name, description })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> String {
        std::fs::read_to_string("tests/fixtures/glGetProgramInfoLog.xhtml").unwrap()
    }

    #[test]
    fn fixture_name() {
        let page = extract(&fixture()).unwrap();
        assert_eq!(
            page.name,
            "glGetProgramInfoLog — Returns the information log for a program object"
        );
    }

    #[test]
    fn fixture_params() {
        let page = extract(&fixture()).unwrap();
        let names: Vec<&str> = page.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["program", "maxLength", "length", "infoLog"]);
        assert_eq!(
            page.params[0].description,
            "Specifies the program object whose information log is to be queried."
        );
        assert_eq!(
            page.params[2].description,
            "Returns the length of the string returned in infoLog (excluding the null terminator)."
        );
    }

    #[test]
    fn fixture_description_scoped_to_section() {
        let page = extract(&fixture()).unwrap();
        assert_eq!(page.description.len(), 3);
        assert!(page.description[0].starts_with("glGetProgramInfoLog returns the information log"));
        // Notes section must not leak in
        assert!(page.description.iter().all(|p| !p.contains("implementer's")));
    }

    #[test]
    fn fixture_text_is_single_line() {
        let page = extract(&fixture()).unwrap();
        let all = std::iter::once(&page.name)
            .chain(page.params.iter().flat_map(|p| [&p.name, &p.description]))
            .chain(page.description.iter());
        for s in all {
            assert!(!s.contains('\n'), "line break in {s:?}");
            assert!(!s.contains("  "), "double space in {s:?}");
        }
    }

    #[test]
    fn missing_name() {
        let err = extract("<html><body><h1>404 Not Found</h1></body></html>").unwrap_err();
        assert_eq!(err, ExtractError::MissingName);
    }

    #[test]
    fn no_params_or_description() {
        let html = r#"<div class="refnamediv"><p>glFinish — block until all GL execution is complete</p></div>"#;
        let page = extract(html).unwrap();
        assert!(page.params.is_empty());
        assert!(page.description.is_empty());
    }

    #[test]
    fn parameter_mismatch() {
        let html = r#"
            <div class="refnamediv"><p>glFoo — does foo</p></div>
            <div id="parameters"><div class="variablelist"><dl>
              <dt><span><em><code>a</code></em></span></dt><dd><p>first</p></dd>
              <dt><span><em><code>b</code></em></span></dt>
            </dl></div></div>"#;
        let err = extract(html).unwrap_err();
        assert_eq!(err, ExtractError::ParameterMismatch { names: 2, descriptions: 1 });
    }

    #[test]
    fn multiple_parameter_lists() {
        let html = r#"
            <div class="refnamediv"><p>glBar — does bar</p></div>
            <div id="parameters">
              <div><dl><dt><span><em><code>x</code></em></span></dt><dd><p>the x</p></dd></dl></div>
              <div><dl><dt><span><em><code>y</code></em></span></dt><dd><p>the y</p></dd></dl></div>
            </div>"#;
        let page = extract(html).unwrap();
        assert_eq!(
            page.params,
            vec![
                Param { name: "x".into(), description: "the x".into() },
                Param { name: "y".into(), description: "the y".into() },
            ]
        );
    }
}
