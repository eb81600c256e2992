//! SVG document rendering for path lists.
//!
//! Two document flavours share one layout: a plain symbol document that is
//! just the geometry, and an editable document with a caption block below
//! the canvas. Callers pick a fill or stroke presentation via [`SvgStyle`].

/// Presentation of the path group in a rendered document.
#[derive(Debug, Clone)]
pub enum SvgStyle {
    /// Solid shapes filled with the even-odd rule so holes stay open.
    Filled { fill: String },
    /// Unfilled centerline strokes with round caps and joins.
    Stroked { stroke: String, stroke_width: f64 },
}

impl SvgStyle {
    pub fn filled(fill: &str) -> Self {
        Self::Filled {
            fill: fill.to_string(),
        }
    }

    pub fn stroked(stroke: &str, stroke_width: f64) -> Self {
        Self::Stroked {
            stroke: stroke.to_string(),
            stroke_width,
        }
    }

    fn group_open(&self) -> String {
        match self {
            Self::Filled { fill } => format!(
                "  <g fill=\"{}\" fill-rule=\"evenodd\" stroke=\"none\">\n",
                fill
            ),
            Self::Stroked {
                stroke,
                stroke_width,
            } => format!(
                "  <g fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\" \
                 stroke-linecap=\"round\" stroke-linejoin=\"round\">\n",
                stroke, stroke_width
            ),
        }
    }
}

/// Renders a standalone symbol document: just the styled path group.
pub fn render_symbol_svg(paths: &[String], width: u32, height: u32, style: &SvgStyle) -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {} {}\">\n",
        width, height
    ));
    doc.push_str(&style.group_open());
    for d in paths {
        doc.push_str(&format!("    <path d=\"{}\"/>\n", d));
    }
    doc.push_str("  </g>\n");
    doc.push_str("</svg>\n");
    doc
}

/// Renders an editable document: the styled path group plus a two-line
/// caption block appended below the canvas.
///
/// The caption area and font scale with the canvas width, with floors so
/// small canvases stay legible.
pub fn render_editable_svg(
    paths: &[String],
    width: u32,
    height: u32,
    style: &SvgStyle,
    line1: &str,
    line2: &str,
) -> String {
    let text_area = 220u32.max((width as f64 * 0.38) as u32);
    let full_height = height + text_area;
    let xmid = width as f64 / 2.0;
    let line1_y = height + (text_area as f64 * 0.38) as u32;
    let line2_y = height + (text_area as f64 * 0.74) as u32;
    let font_size = 56u32.max((width as f64 * 0.14) as u32);

    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {} {}\">\n",
        width, full_height
    ));
    doc.push_str(&style.group_open());
    for d in paths {
        doc.push_str(&format!("    <path d=\"{}\"/>\n", d));
    }
    doc.push_str("  </g>\n");
    for (id, y, text) in [("line1", line1_y, line1), ("line2", line2_y, line2)] {
        doc.push_str(&format!(
            "  <text id=\"{}\" x=\"{:.2}\" y=\"{}\" text-anchor=\"middle\" \
             font-family=\"Arial, Helvetica, sans-serif\" font-size=\"{}\" \
             font-weight=\"700\" letter-spacing=\"2\">{}</text>\n",
            id,
            xmid,
            y,
            font_size,
            escape_text(text)
        ));
    }
    doc.push_str("</svg>\n");
    doc
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_paths() -> Vec<String> {
        vec!["M 0.00 0.00 Z".to_string(), "M 1.00 1.00 Z".to_string()]
    }

    #[test]
    fn filled_document_layout_is_stable() {
        let doc = render_symbol_svg(&fake_paths(), 100, 80, &SvgStyle::filled("black"));
        assert_eq!(
            doc,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 100 80\">\n\
             \x20 <g fill=\"black\" fill-rule=\"evenodd\" stroke=\"none\">\n\
             \x20   <path d=\"M 0.00 0.00 Z\"/>\n\
             \x20   <path d=\"M 1.00 1.00 Z\"/>\n\
             \x20 </g>\n\
             </svg>\n"
        );
    }

    #[test]
    fn stroked_group_carries_line_attributes() {
        let doc = render_symbol_svg(&fake_paths(), 780, 794, &SvgStyle::stroked("#111111", 7.0));
        assert!(doc.contains("<g fill=\"none\" stroke=\"#111111\" stroke-width=\"7.00\""));
        assert!(doc.contains("stroke-linecap=\"round\" stroke-linejoin=\"round\""));
    }

    #[test]
    fn editable_layout_scales_with_canvas_width() {
        let doc = render_editable_svg(
            &fake_paths(),
            780,
            794,
            &SvgStyle::filled("black"),
            "AKSMED",
            "CLINIQUE",
        );
        assert!(doc.contains("viewBox=\"0 0 780 1090\""));
        assert!(doc.contains("<text id=\"line1\" x=\"390.00\" y=\"906\""));
        assert!(doc.contains("<text id=\"line2\" x=\"390.00\" y=\"1013\""));
        assert!(doc.contains("font-size=\"109\""));
        assert!(doc.contains(">AKSMED</text>"));
        assert!(doc.contains(">CLINIQUE</text>"));
    }

    #[test]
    fn editable_layout_floors_apply_on_small_canvases() {
        let doc = render_editable_svg(&[], 100, 80, &SvgStyle::filled("black"), "A", "B");
        assert!(doc.contains("viewBox=\"0 0 100 300\""));
        assert!(doc.contains("y=\"163\""));
        assert!(doc.contains("y=\"242\""));
        assert!(doc.contains("font-size=\"56\""));
        assert!(!doc.contains("<path"));
    }

    #[test]
    fn caption_text_is_escaped() {
        let doc = render_editable_svg(
            &[],
            100,
            80,
            &SvgStyle::filled("black"),
            "A&B",
            "<X>",
        );
        assert!(doc.contains(">A&amp;B</text>"));
        assert!(doc.contains(">&lt;X&gt;</text>"));
    }
}
