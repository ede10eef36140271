use crate::buffer::*;
use crate::program::*;

///
/// A colour made up of 32-bit float channels, stored as alpha, red, green, blue
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct FloatColor {
    pub a: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32
}

impl FloatColor {
    /// All channels zero
    pub const TRANSPARENT: FloatColor = FloatColor { a: 0.0, r: 0.0, g: 0.0, b: 0.0 };

    ///
    /// Creates a colour from its channels in storage order
    ///
    pub const fn from_argb(a: f32, r: f32, g: f32, b: f32) -> FloatColor {
        FloatColor { a, r, g, b }
    }

    ///
    /// Creates a colour from red, green, blue and alpha channels
    ///
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> FloatColor {
        FloatColor { a, r, g, b }
    }

    ///
    /// The channels in the order they're uploaded to a `vec4` uniform
    ///
    pub fn to_rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

///
/// A colour matrix filter: `output = clamp(matrix * rgba + vector, 0, 1)`
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ColorMatrix {
    /// Applied to the colour as an `r, g, b, a` column vector
    pub matrix: Matrix,

    /// Added to the transformed colour
    pub vector: [f32; 4]
}

impl ColorMatrix {
    ///
    /// A colour matrix that leaves every colour unchanged
    ///
    pub fn identity() -> ColorMatrix {
        ColorMatrix {
            matrix: Matrix::identity(),
            vector: [0.0, 0.0, 0.0, 0.0]
        }
    }

    ///
    /// Applies this filter to a colour the way the fragment shader does
    ///
    pub fn transform_color(&self, color: FloatColor) -> FloatColor {
        let [r, g, b, a]    = self.matrix.transform_vector(color.to_rgba());
        let [vr, vg, vb, va] = self.vector;
        let clamp           = |c: f32| c.max(0.0).min(1.0);

        FloatColor::from_rgba(clamp(r+vr), clamp(g+vg), clamp(b+vb), clamp(a+va))
    }
}

///
/// The colour filter applied to each fragment of a fill
///
/// The filter's mode and its parameters are a single value, so they can never disagree.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ColorFilter {
    /// Fragments are not filtered
    None,

    /// Fragments are transformed by a colour matrix
    Matrix(ColorMatrix),

    /// Fragments are combined with a constant colour using a transfer mode
    Blend { mode: XferMode, color: FloatColor }
}

impl ColorFilter {
    ///
    /// The mode tag for this filter
    ///
    pub fn mode(&self) -> ColorFilterMode {
        match self {
            ColorFilter::None           => ColorFilterMode::None,
            ColorFilter::Matrix(_)      => ColorFilterMode::Matrix,
            ColorFilter::Blend { .. }   => ColorFilterMode::Blend
        }
    }

    ///
    /// The matrix parameters, if this is a matrix filter
    ///
    pub fn matrix(&self) -> Option<&ColorMatrix> {
        match self {
            ColorFilter::Matrix(matrix) => Some(matrix),
            _                           => None
        }
    }

    ///
    /// The filter colour, if this is a blend filter
    ///
    pub fn color(&self) -> Option<FloatColor> {
        match self {
            ColorFilter::Blend { color, .. }    => Some(*color),
            _                                   => None
        }
    }

    ///
    /// The transfer mode, if this is a blend filter
    ///
    pub fn xfer_mode(&self) -> Option<XferMode> {
        match self {
            ColorFilter::Blend { mode, .. }     => Some(*mode),
            _                                   => None
        }
    }
}

impl Default for ColorFilter {
    fn default() -> ColorFilter {
        ColorFilter::None
    }
}

///
/// Describes what each fragment of a draw becomes
///
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Fill<'frame> {
    /// The shader program, owned by the program cache
    pub program: Option<&'frame Program>,

    /// The constant fill colour (used when no texture or vertex colour overrides it)
    pub color: FloatColor,

    /// The colour filter applied after shading
    pub filter: ColorFilter
}

impl<'frame> Fill<'frame> {
    ///
    /// The mode of the colour filter for this fill
    ///
    pub fn filter_mode(&self) -> ColorFilterMode {
        self.filter.mode()
    }
}
