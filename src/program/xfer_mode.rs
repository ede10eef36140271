///
/// The transfer modes that can be used to combine a source colour with a destination colour
///
/// The Porter-Duff modes (up to and including `Screen`) can be expressed as a pair of fixed-function
/// blend factors; the remaining modes need to be computed in a shader.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum XferMode {
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    DstIn,
    SrcOut,
    DstOut,
    SrcATop,
    DstATop,
    Xor,
    Plus,
    Modulate,
    Screen,

    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Multiply
}

impl XferMode {
    ///
    /// True if this mode can be performed by the fixed-function blend stage
    ///
    pub fn is_porter_duff(&self) -> bool {
        use self::XferMode::*;

        match self {
            Clear | Src | Dst | SrcOver | DstOver | SrcIn | DstIn | SrcOut | DstOut | SrcATop | DstATop | Xor | Plus | Modulate | Screen => true,
            _ => false
        }
    }
}

impl Default for XferMode {
    fn default() -> XferMode {
        XferMode::SrcOver
    }
}
