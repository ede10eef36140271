use super::xfer_mode::*;
use super::color_filter_mode::*;

use crate::glop::*;

///
/// Describes the features a shader program needs to support
///
/// Used as the key in the program cache: two fills with the same description can share a program.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct ProgramDescription {
    /// The mesh supplies texture coordinates
    pub has_texture: bool,

    /// The mesh supplies a colour per vertex
    pub has_colors: bool,

    /// The mesh supplies an alpha value per vertex
    pub has_vertex_alpha: bool,

    /// The colour filter applied to each fragment
    pub color_filter_mode: ColorFilterMode,

    /// For blend filters, the transfer mode used to combine the filter colour
    pub color_filter_xfer: Option<XferMode>
}

impl ProgramDescription {
    ///
    /// Creates the description of the program required to draw a mesh with the specified attributes and filter
    ///
    pub fn for_fill(attributes: VertexAttribFlags, filter: &ColorFilter) -> ProgramDescription {
        let color_filter_xfer = match filter {
            ColorFilter::Blend { mode, .. } => Some(*mode),
            _                               => None
        };

        ProgramDescription {
            has_texture:        attributes.contains(VertexAttribFlags::TEXTURE_COORD),
            has_colors:         attributes.contains(VertexAttribFlags::COLOR),
            has_vertex_alpha:   attributes.contains(VertexAttribFlags::ALPHA),
            color_filter_mode:  filter.mode(),
            color_filter_xfer:  color_filter_xfer
        }
    }
}
