//! Decomposition of computed CSS transform values.
//!
//! Only the scale and translation parts of a matrix are used: the grid never rotates or skews
//! its layers, so the diagonal and the translation column are enough to undo a transform.

use crate::foundation::core::{Affine, Point};
use crate::foundation::error::{GridError, GridResult};

/// A computed `transform` value as reported by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum CssTransform {
    /// `none` or an empty value.
    None,
    /// `matrix(a, b, c, d, e, f)`.
    Matrix(Affine),
    /// `matrix3d(...)` with 16 column-major components.
    Matrix3d([f64; 16]),
    /// Any other function list. Treated as "no usable transform".
    Other(String),
}

/// Scale and translation extracted from a matrix.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleTranslate {
    /// Horizontal scale.
    pub sx: f64,
    /// Vertical scale.
    pub sy: f64,
    /// Horizontal translation in px.
    pub dx: f64,
    /// Vertical translation in px.
    pub dy: f64,
}

impl ScaleTranslate {
    /// Scale and translation of the identity transform.
    pub const IDENTITY: Self = Self {
        sx: 1.0,
        sy: 1.0,
        dx: 0.0,
        dy: 0.0,
    };
}

impl CssTransform {
    /// Parse a computed transform string.
    pub fn parse(value: &str) -> GridResult<Self> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }

        if let Some(args) = function_args(value, "matrix3d") {
            return Ok(Self::Matrix3d(parse_components::<16>(args, "matrix3d")?));
        }
        if let Some(args) = function_args(value, "matrix") {
            return Ok(Self::Matrix(Affine::new(parse_components::<6>(
                args, "matrix",
            )?)));
        }

        Ok(Self::Other(value.to_owned()))
    }

    /// Scale and translation of this transform, or `None` when there is nothing to undo.
    pub fn scale_translate(&self) -> Option<ScaleTranslate> {
        match self {
            Self::None | Self::Other(_) => None,
            Self::Matrix(affine) => {
                let c = affine.as_coeffs();
                Some(ScaleTranslate {
                    sx: c[0],
                    sy: c[3],
                    dx: c[4],
                    dy: c[5],
                })
            }
            Self::Matrix3d(m) => Some(ScaleTranslate {
                sx: m[0],
                sy: m[5],
                dx: m[12],
                dy: m[13],
            }),
        }
    }
}

/// A computed `transform-origin`, in px relative to the element's border box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformOrigin(pub Point);

impl TransformOrigin {
    /// Parse `"<x> <y> [<z>]"` where each length is unitless or in px.
    ///
    /// A single value is used for both axes.
    pub fn parse(value: &str) -> GridResult<Self> {
        let mut parts = value.split_whitespace();
        let Some(first) = parts.next() else {
            return Err(GridError::transform("transform-origin must be non-empty"));
        };
        let x = parse_length(first)?;
        let y = match parts.next() {
            Some(second) => parse_length(second)?,
            None => x,
        };
        Ok(Self(Point::new(x, y)))
    }
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_components<const N: usize>(args: &str, name: &str) -> GridResult<[f64; N]> {
    let mut out = [0.0; N];
    let mut count = 0usize;
    for raw in args.split(',') {
        if count == N {
            return Err(GridError::transform(format!(
                "{name}() takes {N} components, got more"
            )));
        }
        let raw = raw.trim();
        let v: f64 = raw.parse().map_err(|_| {
            GridError::transform(format!("{name}() component '{raw}' is not a number"))
        })?;
        if !v.is_finite() {
            return Err(GridError::transform(format!(
                "{name}() component '{raw}' must be finite"
            )));
        }
        out[count] = v;
        count += 1;
    }
    if count != N {
        return Err(GridError::transform(format!(
            "{name}() takes {N} components, got {count}"
        )));
    }
    Ok(out)
}

fn parse_length(token: &str) -> GridResult<f64> {
    let number = token.strip_suffix("px").unwrap_or(token);
    let v: f64 = number
        .parse()
        .map_err(|_| GridError::transform(format!("unsupported origin length '{token}'")))?;
    if !v.is_finite() {
        return Err(GridError::transform(format!(
            "origin length '{token}' must be finite"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/matrix.rs"]
mod tests;
