// SPDX: CC0-1.0

//! A [`Surface`] that records drawing as an SVG document.

use crate::{
    style::{Color, Style},
    surface::Surface,
    Number,
};
use core::{f64::consts::TAU, fmt::Write as _};

#[derive(Clone, Debug, PartialEq)]
struct State {
    stroke: Color,
    fill: Color,
    line_width: Number,
    font: String,
    dash: Vec<Number>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            fill: Color::BLACK,
            line_width: 1.0,
            font: String::from("10px sans-serif"),
            dash: Vec::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    background: Option<Color>,
    state: State,
    stack: Vec<State>,
    path: String,
    body: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32, background: Option<Color>) -> Self {
        Self {
            width,
            height,
            background,
            state: State::default(),
            stack: Vec::new(),
            path: String::new(),
            body: String::new(),
        }
    }

    /// The complete document drawn so far.
    pub fn finish(&self) -> String {
        let (w, h) = (self.width, self.height);
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if let Some(bg) = self.background {
            let _ = writeln!(
                out,
                r#"<rect width="100%" height="100%"{}/>"#,
                paint("fill", bg)
            );
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    fn stroke_attrs(&self) -> String {
        let mut attrs = paint("stroke", self.state.stroke);
        let _ = write!(attrs, r#" stroke-width="{}""#, self.state.line_width);
        if !self.state.dash.is_empty() {
            let dash: Vec<String> = self.state.dash.iter().map(|d| d.to_string()).collect();
            let _ = write!(attrs, r#" stroke-dasharray="{}""#, dash.join(" "));
        }
        attrs
    }

    fn push_path(&mut self, cmd: char, x: Number, y: Number) {
        if !self.path.is_empty() {
            self.path.push(' ');
        }
        let _ = write!(self.path, "{cmd}{x} {y}");
    }
}

fn paint(attr: &str, color: Color) -> String {
    let mut out = format!(r#" {attr}="{}""#, color.hex());
    if color.a != 255 {
        let _ = write!(out, r#" {attr}-opacity="{:.3}""#, color.opacity());
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        // unbalanced restores are ignored, like a 2d canvas context
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn apply_style(&mut self, style: &Style) {
        if let Some(c) = style.stroke {
            self.state.stroke = c;
        }
        if let Some(c) = style.fill {
            self.state.fill = c;
        }
        if let Some(w) = style.line_width {
            self.state.line_width = w;
        }
        if let Some(ref font) = style.font {
            self.state.font.clone_from(font);
        }
    }

    fn set_line_dash(&mut self, pattern: &[Number]) {
        self.state.dash = pattern.to_vec();
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: Number, y: Number) {
        self.push_path('M', x, y);
    }

    fn line_to(&mut self, x: Number, y: Number) {
        let cmd = if self.path.is_empty() { 'M' } else { 'L' };
        self.push_path(cmd, x, y);
    }

    fn arc(&mut self, cx: Number, cy: Number, r: Number, start: Number, end: Number) {
        let at = |a: Number| (cx + r * a.cos(), cy + r * a.sin());
        let (x0, y0) = at(start);
        self.line_to(x0, y0);

        let sweep = end - start;
        if sweep.abs() >= TAU {
            // a single arc command cannot close on itself
            let (xm, ym) = at(start + sweep.signum() * TAU / 2.0);
            let flag = u8::from(sweep > 0.0);
            let _ = write!(self.path, " A{r} {r} 0 0 {flag} {xm} {ym}");
            let _ = write!(self.path, " A{r} {r} 0 0 {flag} {x0} {y0}");
        } else {
            let (x1, y1) = at(end);
            let large = u8::from(sweep.abs() > TAU / 2.0);
            let flag = u8::from(sweep > 0.0);
            let _ = write!(self.path, " A{r} {r} 0 {large} {flag} {x1} {y1}");
        }
    }

    fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<path d="{}" fill="none"{}/>"#,
            self.path,
            self.stroke_attrs()
        );
    }

    fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"<path d="{}"{}/>"#,
            self.path,
            paint("fill", self.state.fill)
        );
    }

    fn stroke_rect(&mut self, x: Number, y: Number, w: Number, h: Number) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="none"{}/>"#,
            self.stroke_attrs()
        );
    }

    fn fill_rect(&mut self, x: Number, y: Number, w: Number, h: Number) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}"{}/>"#,
            paint("fill", self.state.fill)
        );
    }

    fn fill_text(&mut self, text: &str, x: Number, y: Number) {
        let _ = writeln!(
            self.body,
            r#"<text x="{x}" y="{y}"{} style="font: {}">{}</text>"#,
            paint("fill", self.state.fill),
            escape(&self.state.font),
            escape(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{draw, Point};

    #[test]
    fn test_empty_document() {
        let svg = SvgSurface::new(40, 30, Some(Color::BLACK)).finish();
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="30""#));
        assert!(svg.contains(r##"<rect width="100%" height="100%" fill="#000000"/>"##));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_polyline() {
        let mut s = SvgSurface::new(10, 10, None);
        draw::draw_line(
            &mut s,
            &Style::stroke(Color::RED).with_line_width(2.0),
            false,
            &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        );
        assert!(s
            .finish()
            .contains(r##"<path d="M0 0 L5 5" fill="none" stroke="#ff0000" stroke-width="2"/>"##));
    }

    #[test]
    fn test_style_is_restored() {
        let mut s = SvgSurface::new(10, 10, None);
        draw::draw_text(&mut s, "a", Point::new(1.0, 2.0), &Style::fill(Color::BLUE));
        draw::draw_text(&mut s, "b", Point::new(1.0, 2.0), &Style::default());
        let svg = s.finish();
        assert!(svg.contains(r##"fill="#0000ff" style="font: 10px sans-serif">a</text>"##));
        assert!(svg.contains(r##"fill="#000000" style="font: 10px sans-serif">b</text>"##));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut s = SvgSurface::new(10, 10, None);
        s.fill_text("x < 1 & y", 0.0, 0.0);
        assert!(s.finish().contains(">x &lt; 1 &amp; y</text>"));
    }

    #[test]
    fn test_full_circle_is_two_arcs() {
        let mut s = SvgSurface::new(10, 10, None);
        draw::draw_cycle(&mut s, 5.0, 5.0, 2.0, &Style::stroke(Color::WHITE));
        let svg = s.finish();
        assert_eq!(svg.matches(" A2 2 0 0 1 ").count(), 2);
        assert!(svg.contains(r#"<path d="M7 5 A2 2"#));
    }

    #[test]
    fn test_translucent_paint() {
        let mut s = SvgSurface::new(10, 10, None);
        draw::draw_rect(
            &mut s,
            0.0,
            0.0,
            4.0,
            4.0,
            &Style::fill(Color::rgba(255, 0, 0, 51)),
            None,
        );
        assert!(s
            .finish()
            .contains(r##"<rect x="0" y="0" width="4" height="4" fill="#ff0000" fill-opacity="0.200"/>"##));
    }
}
