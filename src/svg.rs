//! SVG document model and markup writer
//!
//! Output looks like:
//!
//! ```text
//! <svg width="200" height="200" preserveAspectRatio="xMidYMid meet" viewBox="0 0 200 200" xmlns="http://www.w3.org/2000/svg"><path fill="#3d73b7" d="M100,58L58,58L58,37Z..."/></svg>
//! ```

use crate::geometry::Shape;
use crate::Result;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Shapes drawn with a single fill
#[derive(Debug, Clone, PartialEq)]
pub struct FillGroup {
    pub fill: String,
    /// Set for the background rectangle only
    pub opacity: Option<f64>,
    pub shapes: Vec<Shape>,
}

impl FillGroup {
    /// Opaque group, mergeable with later shapes of the same fill
    pub fn new(fill: impl Into<String>, shapes: Vec<Shape>) -> Self {
        Self {
            fill: fill.into(),
            opacity: None,
            shapes,
        }
    }

    /// Group written with an explicit `opacity` attribute
    pub fn with_opacity(fill: impl Into<String>, opacity: f64, shapes: Vec<Shape>) -> Self {
        Self {
            fill: fill.into(),
            opacity: Some(opacity),
            shapes,
        }
    }

    /// Fully transparent or empty groups produce no element
    fn is_visible(&self) -> bool {
        !self.shapes.is_empty() && self.opacity != Some(0.0)
    }
}

/// A composed icon, ready to serialize
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: u32,
    pub height: u32,
    groups: Vec<FillGroup>,
}

impl Document {
    /// Empty document for a canvas of this size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            groups: Vec::new(),
        }
    }

    /// Groups in output order
    pub fn groups(&self) -> &[FillGroup] {
        &self.groups
    }

    /// Append a group as-is
    pub fn push(&mut self, group: FillGroup) {
        self.groups.push(group);
    }

    /// Add shapes to the opaque group with this fill, creating it on first use
    pub fn add_shapes(&mut self, fill: &str, shapes: Vec<Shape>) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.opacity.is_none() && g.fill == fill)
        {
            Some(group) => group.shapes.extend(shapes),
            None => self.groups.push(FillGroup::new(fill, shapes)),
        }
    }

    /// Serialize to SVG markup
    pub fn to_svg(&self) -> Result<String> {
        let mut out = String::new();
        self.write_svg(&mut out)?;
        Ok(out)
    }

    /// Write SVG markup to any `fmt::Write` sink
    pub fn write_svg<W: std::fmt::Write>(&self, out: &mut W) -> Result<()> {
        write!(
            out,
            r#"<svg width="{w}" height="{h}" preserveAspectRatio="xMidYMid meet" viewBox="0 0 {w} {h}" xmlns="{ns}">"#,
            w = self.width,
            h = self.height,
            ns = SVG_NAMESPACE,
        )?;
        for group in self.groups.iter().filter(|g| g.is_visible()) {
            write!(out, r#"<path fill="{}""#, escape_attr(&group.fill))?;
            if let Some(opacity) = group.opacity {
                write!(out, r#" opacity="{}""#, opacity)?;
            }
            out.write_str(r#" d=""#)?;
            for shape in &group.shapes {
                shape.write_path(out)?;
            }
            out.write_str(r#""/>"#)?;
        }
        out.write_str("</svg>")?;
        Ok(())
    }
}

/// Escape the characters that would end or break a double-quoted attribute
fn escape_attr(s: &str) -> std::borrow::Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"']) {
        return s.into();
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(c),
        }
    }
    out.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn square() -> Shape {
        Shape::rectangle(0.0, 0.0, 10.0, 10.0, true)
    }

    #[test]
    fn empty_document() {
        let doc = Document::new(64, 32);
        assert_eq!(
            doc.to_svg().unwrap(),
            r#"<svg width="64" height="32" preserveAspectRatio="xMidYMid meet" viewBox="0 0 64 32" xmlns="http://www.w3.org/2000/svg"></svg>"#
        );
    }

    #[test]
    fn shapes_concatenate_without_separator() {
        let mut doc = Document::new(20, 20);
        doc.add_shapes("#112233", vec![square()]);
        doc.add_shapes("#112233", vec![Shape::rectangle(10.0, 10.0, 10.0, 10.0, true)]);
        assert_eq!(doc.groups().len(), 1);
        assert_eq!(
            doc.to_svg().unwrap(),
            concat!(
                r#"<svg width="20" height="20" preserveAspectRatio="xMidYMid meet" viewBox="0 0 20 20" xmlns="http://www.w3.org/2000/svg">"#,
                r##"<path fill="#112233" d="M0,0L10,0L10,10L0,10ZM10,10L20,10L20,20L10,20Z"/>"##,
                "</svg>"
            )
        );
    }

    #[test]
    fn opacity_written_before_path_data() {
        let mut doc = Document::new(10, 10);
        doc.push(FillGroup::with_opacity("#ffffff", 0.5, vec![square()]));
        let svg = doc.to_svg().unwrap();
        assert!(svg.contains(r##"<path fill="#ffffff" opacity="0.5" d="M0,0"##));
    }

    #[test]
    fn transparent_and_empty_groups_are_skipped() {
        let mut doc = Document::new(10, 10);
        doc.push(FillGroup::with_opacity("#ffffff", 0.0, vec![square()]));
        doc.push(FillGroup::new("#000000", Vec::new()));
        assert!(!doc.to_svg().unwrap().contains("<path"));
    }

    #[test]
    fn background_is_not_merged_with_shapes() {
        let mut doc = Document::new(10, 10);
        doc.push(FillGroup::with_opacity("#ffffff", 1.0, vec![square()]));
        doc.add_shapes("#ffffff", vec![square()]);
        assert_eq!(doc.groups().len(), 2);
        assert_eq!(doc.to_svg().unwrap().matches("<path").count(), 2);
    }

    #[test]
    fn fill_is_escaped() {
        let mut doc = Document::new(10, 10);
        doc.add_shapes("a\"b", vec![square()]);
        assert!(doc.to_svg().unwrap().contains(r#"fill="a&#34;b""#));
    }
}
