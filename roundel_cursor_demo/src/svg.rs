// Copyright 2026 the Roundel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `roundel_cursor_demo`.

use kurbo::{BezPath, Rect};
use peniko::Brush;

/// A path plus its paint, queued for output.
#[derive(Debug)]
struct SvgPath {
    d: String,
    fill: Option<Brush>,
    stroke: Option<(Brush, f64)>,
}

/// Collects paths and serializes them as a standalone SVG document.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    view_box: Rect,
    paths: Vec<SvgPath>,
}

impl SvgDoc {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            paths: Vec::new(),
        }
    }

    pub(crate) fn push_filled(&mut self, path: &BezPath, fill: Brush) {
        self.paths.push(SvgPath {
            d: path.to_svg(),
            fill: Some(fill),
            stroke: None,
        });
    }

    pub(crate) fn push_stroked(&mut self, path: &BezPath, stroke: Brush, stroke_width: f64) {
        self.paths.push(SvgPath {
            d: path.to_svg(),
            fill: None,
            stroke: Some((stroke, stroke_width)),
        });
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        ));
        out.push('\n');

        for path in &self.paths {
            out.push_str(&format!(r#"<path d="{}""#, path.d));
            match &path.fill {
                Some(brush) => write_paint_attr(&mut out, "fill", brush),
                None => out.push_str(r#" fill="none""#),
            }
            if let Some((brush, width)) = &path.stroke {
                write_paint_attr(&mut out, "stroke", brush);
                out.push_str(&format!(r#" stroke-width="{width}""#));
            }
            out.push_str("/>\n");
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}
