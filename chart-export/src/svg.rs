// A thin representation of the handful of SVG tags the chart renderer
// needs, rendered to markup by string concatenation.

use std::fmt::Write;

const FAILED_STRING_WRITE: &str = "unable to write to string buffer";

/// Attribute list. A Vec keeps the output order deterministic, which the
/// renderer tests rely on.
pub type Params = Vec<(String, String)>;

pub fn params(pairs: &[(&str, String)]) -> Params {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[derive(Debug)]
pub struct Tag {
    name: &'static str,
    parameters: Params,
    children: Vec<Tag>,
    /// Raw text content, written between the opening and closing tag.
    text: Option<String>,
}

impl Tag {
    pub fn new(name: &'static str, parameters: Params) -> Self {
        Self {
            name,
            parameters,
            children: Vec::new(),
            text: None,
        }
    }

    pub fn with_text(name: &'static str, parameters: Params, text: &str) -> Self {
        Self {
            name,
            parameters,
            children: Vec::new(),
            text: Some(escape(text)),
        }
    }

    pub fn add_child(&mut self, child: Tag) {
        self.children.push(child);
    }

    pub fn add_param(&mut self, key: &str, value: String) {
        self.parameters.push((key.to_string(), value));
    }

    pub fn render(&self, buf: &mut String) {
        write!(buf, "<{}", self.name).expect(FAILED_STRING_WRITE);
        for (key, value) in self.parameters.iter() {
            write!(buf, " {}=\"{}\"", key, value).expect(FAILED_STRING_WRITE);
        }
        if self.children.is_empty() && self.text.is_none() {
            write!(buf, " />").expect(FAILED_STRING_WRITE);
            return;
        }
        write!(buf, ">").expect(FAILED_STRING_WRITE);
        if let Some(text) = &self.text {
            buf.push_str(text);
        }
        for child in self.children.iter() {
            child.render(buf);
        }
        write!(buf, "</{}>", self.name).expect(FAILED_STRING_WRITE);
    }
}

pub fn root(width: u64, height: u64) -> Tag {
    Tag::new(
        "svg",
        params(&[
            ("width", format!("{width}")),
            ("height", format!("{height}")),
            ("viewBox", format!("0 0 {width} {height}")),
            ("xmlns", "http://www.w3.org/2000/svg".to_string()),
        ]),
    )
}

pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: &str) -> Tag {
    Tag::new(
        "rect",
        params(&[
            ("x", fmt_coord(x)),
            ("y", fmt_coord(y)),
            ("width", fmt_coord(width)),
            ("height", fmt_coord(height)),
            ("fill", fill.to_string()),
        ]),
    )
}

pub fn circle(cx: f64, cy: f64, r: f64, fill: &str) -> Tag {
    Tag::new(
        "circle",
        params(&[
            ("cx", fmt_coord(cx)),
            ("cy", fmt_coord(cy)),
            ("r", fmt_coord(r)),
            ("fill", fill.to_string()),
        ]),
    )
}

pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> Tag {
    Tag::new(
        "line",
        params(&[
            ("x1", fmt_coord(x1)),
            ("y1", fmt_coord(y1)),
            ("x2", fmt_coord(x2)),
            ("y2", fmt_coord(y2)),
            ("stroke", stroke.to_string()),
        ]),
    )
}

pub fn path(d: String, fill: &str, stroke: &str) -> Tag {
    Tag::new(
        "path",
        params(&[
            ("d", d),
            ("fill", fill.to_string()),
            ("stroke", stroke.to_string()),
        ]),
    )
}

pub fn text(x: f64, y: f64, anchor: &str, font_size: u32, content: &str) -> Tag {
    Tag::with_text(
        "text",
        params(&[
            ("x", fmt_coord(x)),
            ("y", fmt_coord(y)),
            ("text-anchor", anchor.to_string()),
            ("font-size", format!("{font_size}px")),
        ]),
        content,
    )
}

pub fn title(content: &str) -> Tag {
    Tag::with_text("title", Params::new(), content)
}

pub fn render(root: &Tag) -> String {
    let mut buf = String::new();
    root.render(&mut buf);
    buf
}

pub fn fmt_coord(value: f64) -> String {
    // Two decimals are plenty for pixel coordinates.
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing_and_nested_tags() {
        let mut svg = root(10, 20);
        svg.add_child(rect(0.0, 0.0, 5.0, 5.0, "steelblue"));
        let markup = render(&svg);
        assert!(markup.starts_with("<svg width=\"10\" height=\"20\""));
        assert!(markup.contains("<rect x=\"0\" y=\"0\" width=\"5\" height=\"5\" fill=\"steelblue\" />"));
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let tag = text(1.0, 2.0, "middle", 12, "A & B <C>");
        assert!(render(&tag).contains("A &amp; B &lt;C&gt;"));
    }
}
