use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html};

pub trait PlainTextExtractor: Send + Sync {
    fn extract(&self, html: &str) -> String;
}

/// Flattens editor HTML into the plain text the metrics are computed on:
/// - text nodes are concatenated with whitespace collapsed
/// - block elements and `<br>` start a new line
/// - `<head>`, scripts, styles and templates contribute nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlPlainTextExtractor;

impl PlainTextExtractor for HtmlPlainTextExtractor {
    fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        let mut out = TextBuilder::default();
        for child in document.root_element().children() {
            visit_node(child, &mut out);
        }
        out.finish()
    }
}

fn visit_node(node: NodeRef<'_, Node>, out: &mut TextBuilder) {
    match node.value() {
        Node::Text(text) => out.append_text(text),
        Node::Element(_) => {
            if let Some(element) = ElementRef::wrap(node) {
                visit_element(element, out);
            }
        }
        _ => {
            for child in node.children() {
                visit_node(child, out);
            }
        }
    }
}

fn visit_element(element: ElementRef<'_>, out: &mut TextBuilder) {
    let tag = element.value().name().to_ascii_lowercase();
    match tag.as_str() {
        "head" | "script" | "style" | "noscript" | "template" | "iframe" => {}
        "br" | "hr" => out.ensure_newline(),
        "p" | "div" | "section" | "article" | "header" | "footer" | "nav" | "aside"
        | "figure" | "figcaption" | "blockquote" | "pre" | "ul" | "ol" | "li" | "table"
        | "tr" | "td" | "th" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "address" => {
            out.ensure_newline();
            visit_children(element, out);
            out.ensure_newline();
        }
        _ => visit_children(element, out),
    }
}

fn visit_children(element: ElementRef<'_>, out: &mut TextBuilder) {
    for child in element.children() {
        visit_node(child, out);
    }
}

#[derive(Default)]
struct TextBuilder {
    buffer: String,
    last_char: Option<char>,
}

impl TextBuilder {
    fn append_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if matches!(self.last_char, None | Some(' ') | Some('\n')) {
                    continue;
                }
                self.push(' ');
            } else {
                self.push(ch);
            }
        }
    }

    fn ensure_newline(&mut self) {
        match self.last_char {
            None | Some('\n') => {}
            Some(' ') => {
                self.buffer.pop();
                self.push('\n');
            }
            Some(_) => self.push('\n'),
        }
    }

    fn push(&mut self, ch: char) {
        self.buffer.push(ch);
        self.last_char = Some(ch);
    }

    fn finish(self) -> String {
        self.buffer.trim_end().to_string()
    }
}
