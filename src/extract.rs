//! Best-effort extraction of auditable markup from component dialects.
//!
//! This is heuristic pattern matching, not a grammar: the contract is
//! `dialect text -> best-effort markup`, and the output may be lossy.
//! Ambiguous nested expression blocks are dropped rather than guessed at.
//! The audit and fix cores only ever see the HTML-shaped result.

use regex::Regex;

/// Normalize file content into HTML-shaped markup based on the extension.
/// Unrecognized extensions pass through unchanged.
pub fn auditable_markup(content: &str, filename: &str) -> String {
    let ext = filename
        .rsplit('.')
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "jsx" | "tsx" => normalize_component_markup(&extract_component_returns(content)),
        "vue" => normalize_component_markup(&extract_vue_template(content)),
        "svelte" => normalize_component_markup(&extract_svelte_content(content)),
        _ => content.to_string(),
    }
}

/// Collect markup from component return expressions: `return ( ... )`
/// bodies and parenthesized arrow-function bodies, with a tag-scan
/// fallback when neither is present.
fn extract_component_returns(content: &str) -> String {
    let mut blocks = Vec::new();

    let return_re = Regex::new(r"(?s)return\s*\(\s*(.*?)\s*\);?").expect("valid regex");
    for caps in return_re.captures_iter(content) {
        blocks.push(caps[1].to_string());
    }

    let arrow_re = Regex::new(r"(?s)=>\s*\(\s*(.*?)\s*\)(?:\s*[;,}]|\s*$)").expect("valid regex");
    for caps in arrow_re.captures_iter(content) {
        blocks.push(caps[1].to_string());
    }

    if !blocks.is_empty() {
        // Elements hidden inside expression blocks ({cond && <img />}) would
        // be stripped during normalization; hoist the self-closing ones out
        let combined = blocks.join("\n");
        let self_closing_re =
            Regex::new(r"(?i)<[a-z][a-z0-9]*\s+[^>]*/>").expect("valid regex");
        for m in self_closing_re.find_iter(&combined) {
            blocks.push(m.as_str().to_string());
        }
        return blocks.join("\n");
    }

    // No return expressions: scan for element-shaped fragments
    let self_closing_re = Regex::new(r"(?i)<[a-z][a-z0-9]*\s+[^>]*/>").expect("valid regex");
    for m in self_closing_re.find_iter(content) {
        blocks.push(m.as_str().to_string());
    }
    blocks.extend(paired_tag_fragments(content));

    blocks.join("\n")
}

/// Scan for `<tag ...>...</tag>` fragments by matching each opening tag to
/// its close tag by name.
fn paired_tag_fragments(content: &str) -> Vec<String> {
    let open_re = Regex::new(r"<([a-z][a-z0-9]*)(?:\s[^>]*)?>").expect("valid regex");
    let mut fragments = Vec::new();
    for caps in open_re.captures_iter(content) {
        let whole = caps.get(0).expect("match exists");
        let name = &caps[1];
        let close = format!("</{name}>");
        if let Some(rel) = content[whole.end()..].find(&close) {
            let end = whole.end() + rel + close.len();
            fragments.push(content[whole.start()..end].to_string());
        }
    }
    fragments
}

/// The first `<template>` block of a single-file component.
fn extract_vue_template(content: &str) -> String {
    let re = Regex::new(r"(?s)<template>(.*?)</template>").expect("valid regex");
    re.captures(content)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Component markup minus its script and style blocks.
fn extract_svelte_content(content: &str) -> String {
    let script_re = Regex::new(r"(?is)<script.*?</script>").expect("valid regex");
    let style_re = Regex::new(r"(?is)<style.*?</style>").expect("valid regex");
    let without_scripts = script_re.replace_all(content, "");
    style_re.replace_all(&without_scripts, "").to_string()
}

/// Rewrite component syntax into plain HTML: class attribute naming,
/// expression blocks, and fragment sugar.
fn normalize_component_markup(content: &str) -> String {
    let mut html = content.replace("className=", "class=");

    let expr_re = Regex::new(r"\{[^}]*\}").expect("valid regex");
    html = expr_re.replace_all(&html, "").to_string();

    html = html.replace("<>", "<div>").replace("</>", "</div>");
    html = html
        .replace("<React.Fragment>", "<div>")
        .replace("</React.Fragment>", "</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_jsx_return_block() {
        let jsx = r#"
            function Card() {
              return (
                <div className="card">
                  <img src="x.jpg" />
                </div>
              );
            }
        "#;
        let markup = auditable_markup(jsx, "Card.jsx");
        assert!(markup.contains("class=\"card\""));
        assert!(markup.contains("<img"));
        assert!(!markup.contains("className"));
    }

    #[test]
    fn extracts_arrow_component() {
        let tsx = r#"const Badge = () => (<span className="badge">New</span>);"#;
        let markup = auditable_markup(tsx, "Badge.tsx");
        assert!(markup.contains("<span class=\"badge\">New</span>"));
    }

    #[test]
    fn hoists_conditional_self_closing_elements() {
        let jsx = r#"
            function Hero() {
              return (
                <div>
                  {showLogo && <img src="logo.png" />}
                </div>
              );
            }
        "#;
        let markup = auditable_markup(jsx, "Hero.jsx");
        assert!(markup.contains("<img"));
    }

    #[test]
    fn rewrites_fragments() {
        let jsx = "const X = () => (<><p>a</p></>);";
        let markup = auditable_markup(jsx, "X.jsx");
        assert!(markup.contains("<div><p>a</p></div>"));
    }

    #[test]
    fn extracts_vue_template() {
        let vue = r#"
            <template>
              <form><input type="text" name="q"></form>
            </template>
            <script>export default {}</script>
        "#;
        let markup = auditable_markup(vue, "Search.vue");
        assert!(markup.contains("<form>"));
        assert!(!markup.contains("export default"));
    }

    #[test]
    fn strips_svelte_script_and_style() {
        let svelte = r#"
            <script>let name = 'world';</script>
            <h1>Hello</h1>
            <style>h1 { color: red; }</style>
        "#;
        let markup = auditable_markup(svelte, "App.svelte");
        assert!(markup.contains("<h1>Hello</h1>"));
        assert!(!markup.contains("let name"));
        assert!(!markup.contains("color: red"));
    }

    #[test]
    fn html_passes_through_verbatim() {
        let html = "<p>{literal braces}</p>";
        assert_eq!(auditable_markup(html, "page.html"), html);
    }

    #[test]
    fn unknown_extension_passes_through() {
        assert_eq!(auditable_markup("anything", "notes.txt"), "anything");
    }
}
