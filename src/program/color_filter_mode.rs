///
/// Selects how the filter payload of a fill is interpreted
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum ColorFilterMode {
    /// No colour filter is applied
    None,

    /// Fragments are transformed by a 4x4 colour matrix plus an offset vector
    Matrix,

    /// Fragments are blended with a constant colour using a transfer mode
    Blend
}

impl Default for ColorFilterMode {
    fn default() -> ColorFilterMode {
        ColorFilterMode::None
    }
}
