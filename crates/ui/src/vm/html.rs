use std::collections::{HashMap, HashSet};

/// Strip everything but simple formatting from server-supplied HTML.
///
/// `class` is kept on every allowed tag; inline `style` is not.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "u", "ul", "ol", "li", "a", "img",
        "h3", "h4", "blockquote",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("img", ["src", "alt"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .generic_attributes(["class"].into_iter().collect())
        .clean(html)
        .to_string()
}

/// Render plain lesson text as paragraphs. Any markup is stripped.
#[must_use]
pub fn paragraphs_html(text: &str) -> String {
    let text_only = ammonia::Builder::empty();
    text.split("\n\n")
        .map(str::trim)
        .filter(|para| !para.is_empty())
        .map(|para| format!("<p>{}</p>", text_only.clean(para).to_string().replace('\n', "<br>")))
        .collect()
}
