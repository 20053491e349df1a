//! Standalone SVG markup: a single stroked path, optionally animated with SMIL.
//!
//! The animated variant never re-walks geometry. It emits the whole path once and animates
//! `stroke-dashoffset`, with the easing expressed as `keySplines`.

use std::fmt::Write as _;

use crate::{
    animation::{clock::LoopMode, ease::Ease},
    config::StrokeStyle,
    curve::path::{fmt_num, path_length, svg_path_data, view_box_attr},
    foundation::core::{Point, Rect},
    oscillate::color::ColorOscillation,
};

/// Width and height attributes of exported documents.
pub const SVG_SIZE: u32 = 800;

const GRADIENT_ID: &str = "stroke-gradient";
const GRADIENT_STOPS: usize = 16;

/// Geometry and styling shared by both SVG flavours.
#[derive(Clone, Copy, Debug)]
pub struct SvgDocument<'a> {
    pub points: &'a [Point],
    pub view_box: Rect,
    pub stroke: &'a StrokeStyle,
    pub colors: &'a ColorOscillation,
}

/// Timing of the animated variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorAnimation {
    pub duration_secs: f64,
    pub easing: Ease,
    pub loop_mode: LoopMode,
}

pub fn static_svg(doc: &SvgDocument<'_>) -> String {
    let mut out = open_document(doc);
    let _ = writeln!(out, "  <path {}/>", path_attrs(doc));
    out.push_str("</svg>\n");
    out
}

pub fn animated_svg(doc: &SvgDocument<'_>, anim: &VectorAnimation) -> String {
    let length = fmt_num(path_length(doc.points));
    let mut out = open_document(doc);
    let _ = write!(
        out,
        "  <style>\n    path {{\n      stroke-dasharray: {length};\n      \
         stroke-dashoffset: {length};\n    }}\n  </style>\n"
    );
    let _ = writeln!(out, "  <path {}>", path_attrs(doc));
    let _ = writeln!(out, "    {}", animate_element(&length, anim));
    out.push_str("  </path>\n</svg>\n");
    out
}

fn open_document(doc: &SvgDocument<'_>) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{}\" width=\"{SVG_SIZE}\" \
         height=\"{SVG_SIZE}\">",
        view_box_attr(doc.view_box)
    );
    if doc.colors.is_active() {
        out.push_str("  <defs>\n");
        let _ = writeln!(
            out,
            "    <linearGradient id=\"{GRADIENT_ID}\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">"
        );
        for stop in doc.colors.gradient_stops(GRADIENT_STOPS) {
            let _ = writeln!(
                out,
                "      <stop offset=\"{}%\" stop-color=\"{}\"/>",
                fmt_num(stop.offset * 100.0),
                stop.color
            );
        }
        out.push_str("    </linearGradient>\n  </defs>\n");
    }
    out
}

fn path_attrs(doc: &SvgDocument<'_>) -> String {
    let paint = if doc.colors.is_active() {
        format!("url(#{GRADIENT_ID})")
    } else {
        doc.stroke.color.to_hex()
    };
    format!(
        "d=\"{}\" fill=\"none\" stroke=\"{paint}\" stroke-width=\"{}\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\"",
        svg_path_data(doc.points),
        fmt_num(doc.stroke.width)
    )
}

/// The `<animate>` directive for `stroke-dashoffset`.
///
/// One-shot: `L -> 0` then freeze. Looping: `L;0;L` (pingpong undraws in reverse) or `L;0;-L`
/// (forward continuation slides the dash off the start) over two durations, repeating forever.
fn animate_element(length: &str, anim: &VectorAnimation) -> String {
    let spline = anim.easing.smil_key_spline();
    let spline_attrs = |splines: String, key_times: &str| {
        format!(" calcMode=\"spline\" keyTimes=\"{key_times}\" keySplines=\"{splines}\"")
    };

    if !anim.loop_mode.is_looping() {
        let timing = spline
            .map(|s| spline_attrs(fmt_spline(s), "0;1"))
            .unwrap_or_default();
        return format!(
            "<animate attributeName=\"stroke-dashoffset\" from=\"{length}\" to=\"0\" \
             dur=\"{}s\" repeatCount=\"1\" fill=\"freeze\"{timing}/>",
            fmt_num(anim.duration_secs)
        );
    }

    let end = match anim.loop_mode {
        LoopMode::Pingpong => length.to_string(),
        _ => format!("-{length}"),
    };
    let key_times = "0;0.5;1";
    let timing = match spline {
        Some(s) => spline_attrs(
            format!("{};{}", fmt_spline(s), fmt_spline(reflect_spline(s))),
            key_times,
        ),
        None => format!(" keyTimes=\"{key_times}\""),
    };
    format!(
        "<animate attributeName=\"stroke-dashoffset\" values=\"{length};0;{end}\" \
         dur=\"{}s\" repeatCount=\"indefinite\"{timing}/>",
        fmt_num(anim.duration_secs * 2.0)
    )
}

/// Spline for the falling half: progress runs `1 -> 0` through the same easing, which is the
/// original curve rotated half a turn about `(0.5, 0.5)`.
pub fn reflect_spline([x1, y1, x2, y2]: [f64; 4]) -> [f64; 4] {
    [1.0 - x2, 1.0 - y2, 1.0 - x1, 1.0 - y1]
}

fn fmt_spline(s: [f64; 4]) -> String {
    s.map(fmt_num).join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
