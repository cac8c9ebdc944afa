//! Typeface parsing and text geometry for body labels.
//!
//! Reads the three.js "typeface JSON" format: a `glyphs` map whose entries
//! carry an advance (`ha`) and an outline string (`o`) of whitespace
//! separated commands `m x y`, `l x y`, `q x y cx cy`, `b x y c1x c1y c2x c2y`
//! and `z`. Note the curve commands list the end point first.

use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;

use crate::error::TypefaceError;

/// Straight segments per curve when flattening outlines.
pub const CURVE_SEGMENTS: usize = 12;

/// One outline drawing command, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub advance: f32,
    pub outline: Vec<PathCommand>,
}

/// A parsed typeface, ready to lay out text.
#[derive(Debug, Clone, PartialEq)]
pub struct Typeface {
    pub family: String,
    /// Font units per em.
    pub resolution: f32,
    /// Distance between baselines in font units.
    pub line_height: f32,
    glyphs: HashMap<char, Glyph>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTypeface {
    glyphs: HashMap<String, RawGlyph>,
    resolution: f32,
    bounding_box: RawBox,
    #[serde(default)]
    underline_thickness: f32,
    #[serde(default)]
    family_name: String,
}

#[derive(Deserialize)]
struct RawGlyph {
    ha: f32,
    #[serde(default)]
    o: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBox {
    y_min: f32,
    y_max: f32,
}

impl Typeface {
    /// Parse a typeface JSON document.
    pub fn from_json(json: &str) -> Result<Self, TypefaceError> {
        let raw: RawTypeface = serde_json::from_str(json)?;
        if !(raw.resolution > 0.0) {
            return Err(TypefaceError::BadResolution(raw.resolution));
        }

        let mut glyphs = HashMap::with_capacity(raw.glyphs.len());
        for (key, glyph) in raw.glyphs {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                continue;
            };
            let outline = match glyph.o.as_deref() {
                Some(o) => parse_outline(ch, o)?,
                None => Vec::new(),
            };
            glyphs.insert(ch, Glyph { advance: glyph.ha, outline });
        }

        Ok(Self {
            family: raw.family_name,
            resolution: raw.resolution,
            line_height: raw.bounding_box.y_max - raw.bounding_box.y_min + raw.underline_thickness,
            glyphs,
        })
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

fn parse_outline(glyph: char, outline: &str) -> Result<Vec<PathCommand>, TypefaceError> {
    let mut tokens = outline.split_whitespace();
    let mut commands = Vec::new();

    let point = |tokens: &mut std::str::SplitWhitespace<'_>| -> Result<Vec2, TypefaceError> {
        let mut number = || -> Result<f32, TypefaceError> {
            let token = tokens.next().ok_or(TypefaceError::Truncated { glyph })?;
            token.parse::<f32>().map_err(|_| TypefaceError::BadNumber {
                glyph,
                token: token.to_string(),
            })
        };
        let x = number()?;
        let y = number()?;
        Ok(Vec2::new(x, y))
    };

    while let Some(command) = tokens.next() {
        let parsed = match command {
            "m" => PathCommand::MoveTo(point(&mut tokens)?),
            "l" => PathCommand::LineTo(point(&mut tokens)?),
            "q" => {
                let to = point(&mut tokens)?;
                let ctrl = point(&mut tokens)?;
                PathCommand::QuadTo { ctrl, to }
            }
            "b" => {
                let to = point(&mut tokens)?;
                let ctrl1 = point(&mut tokens)?;
                let ctrl2 = point(&mut tokens)?;
                PathCommand::CubicTo { ctrl1, ctrl2, to }
            }
            "z" => PathCommand::Close,
            other => {
                return Err(TypefaceError::UnknownCommand {
                    glyph,
                    command: other.to_string(),
                })
            }
        };
        commands.push(parsed);
    }
    Ok(commands)
}

/// Flattened 2D outline of a text string in label units.
///
/// `depth` is the extrusion the renderer applies along local +Z.
#[derive(Debug, Clone, PartialEq)]
pub struct TextGeometry {
    pub contours: Vec<Vec<Vec2>>,
    pub size: f32,
    pub depth: f32,
    pub min: Vec2,
    pub max: Vec2,
}

impl TextGeometry {
    /// Lay out `text` left to right at `size` units per em.
    /// Characters missing from the typeface are skipped; `\n` starts a new line.
    pub fn build(typeface: &Typeface, text: &str, size: f32, depth: f32) -> Self {
        let scale = size / typeface.resolution;
        let mut contours: Vec<Vec<Vec2>> = Vec::new();
        let mut pen = Vec2::ZERO;

        for ch in text.chars() {
            if ch == '\n' {
                pen.x = 0.0;
                pen.y -= typeface.line_height * scale;
                continue;
            }
            let Some(glyph) = typeface.glyph(ch) else {
                log::warn!("typeface {:?} has no glyph for {:?}", typeface.family, ch);
                continue;
            };
            flatten_glyph(glyph, pen, scale, &mut contours);
            pen.x += glyph.advance * scale;
        }

        let (min, max) = bounds(&contours);
        Self {
            contours,
            size,
            depth,
            min,
            max,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.contours.iter().map(Vec::len).sum()
    }

    pub fn width(&self) -> f32 {
        (self.max.x - self.min.x).max(0.0)
    }
}

fn flatten_glyph(glyph: &Glyph, origin: Vec2, scale: f32, out: &mut Vec<Vec<Vec2>>) {
    let place = |p: Vec2| origin + p * scale;
    let mut current: Vec<Vec2> = Vec::new();
    let mut cursor = Vec2::ZERO;

    for command in &glyph.outline {
        match *command {
            PathCommand::MoveTo(p) => {
                if current.len() > 1 {
                    out.push(std::mem::take(&mut current));
                }
                current.clear();
                current.push(place(p));
                cursor = p;
            }
            PathCommand::LineTo(p) => {
                current.push(place(p));
                cursor = p;
            }
            PathCommand::QuadTo { ctrl, to } => {
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    let u = 1.0 - t;
                    let p = cursor * (u * u) + ctrl * (2.0 * u * t) + to * (t * t);
                    current.push(place(p));
                }
                cursor = to;
            }
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                for i in 1..=CURVE_SEGMENTS {
                    let t = i as f32 / CURVE_SEGMENTS as f32;
                    let u = 1.0 - t;
                    let p = cursor * (u * u * u)
                        + ctrl1 * (3.0 * u * u * t)
                        + ctrl2 * (3.0 * u * t * t)
                        + to * (t * t * t);
                    current.push(place(p));
                }
                cursor = to;
            }
            PathCommand::Close => {
                if current.len() > 1 {
                    out.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if current.len() > 1 {
        out.push(current);
    }
}

fn bounds(contours: &[Vec<Vec2>]) -> (Vec2, Vec2) {
    let mut points = contours.iter().flatten();
    let Some(&first) = points.next() else {
        return (Vec2::ZERO, Vec2::ZERO);
    };
    points.fold((first, first), |(min, max), &p| (min.min(p), max.max(p)))
}
