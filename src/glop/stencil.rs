///
/// How a draw interacts with the stencil buffer
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum StencilMode {
    /// The stencil test is off
    Disabled,

    /// Writes the draw's coverage into the stencil buffer without touching the colour buffer
    DrawInto,

    /// Only draws where the stencil buffer has been written
    Mask,

    /// Increments the stencil buffer for every pixel covered (used for winding counts)
    Count
}

impl StencilMode {
    pub fn is_enabled(&self) -> bool {
        *self != StencilMode::Disabled
    }
}

impl Default for StencilMode {
    fn default() -> StencilMode {
        StencilMode::Disabled
    }
}
