//! SVG backend for a composed [`Scene`].

use std::fmt::{self, Write as _};

use kindred_tree::{Canvas, Color, Renderer, Scene};
use tracing::error;

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" ?>"#;
const EDGE_WIDTH: f64 = 2.0;

/// Renders a scene as a standalone SVG document.
///
/// Edges become polylines stroked in the parent's color, nodes become
/// black-outlined circles with the id written to their right.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, canvas: &Canvas) -> String {
        let mut out = String::new();
        if let Err(e) = write_document(&mut out, scene, canvas) {
            error!(error = %e, "Failed to format SVG document");
        }
        out
    }
}

fn write_document(out: &mut String, scene: &Scene, canvas: &Canvas) -> fmt::Result {
    let black = Color::Named("black".to_string());

    out.push_str(XML_HEADER);
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{}" height="{}">"#,
        canvas.width, canvas.height
    )?;
    for edge in &scene.edges {
        write!(
            out,
            r#"<polyline fill="none" stroke="{}" stroke-width="{EDGE_WIDTH}" points="{},{} {},{}" />"#,
            edge.color, edge.from.x, edge.from.y, edge.to.x, edge.to.y
        )?;
    }
    for marker in &scene.markers {
        let (x, y) = (marker.position.x, marker.position.y);
        write!(
            out,
            r#"<circle fill="{}" stroke="{black}" stroke-width="1" cx="{x}" cy="{y}" r="{}" />"#,
            marker.fill, canvas.node_radius
        )?;
        write!(
            out,
            r#"<text fill="{black}" stroke="{black}" x="{}" y="{y}" font-size="{}">{}</text>"#,
            x + canvas.node_radius,
            canvas.node_radius,
            escape(&marker.label)
        )?;
    }
    out.push_str("</svg>");
    Ok(())
}

fn escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
        out
    })
}
