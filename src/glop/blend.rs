use crate::buffer::*;
use crate::program::*;

///
/// The factors available to the OpenGL ES 2.0 blend stage
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    SrcAlphaSaturate
}

impl BlendFactor {
    pub fn to_gl_enum(&self) -> GLenum {
        use self::BlendFactor::*;

        match self {
            Zero                => GL_ZERO,
            One                 => GL_ONE,
            SrcColor            => GL_SRC_COLOR,
            OneMinusSrcColor    => GL_ONE_MINUS_SRC_COLOR,
            DstColor            => GL_DST_COLOR,
            OneMinusDstColor    => GL_ONE_MINUS_DST_COLOR,
            SrcAlpha            => GL_SRC_ALPHA,
            OneMinusSrcAlpha    => GL_ONE_MINUS_SRC_ALPHA,
            DstAlpha            => GL_DST_ALPHA,
            OneMinusDstAlpha    => GL_ONE_MINUS_DST_ALPHA,
            SrcAlphaSaturate    => GL_SRC_ALPHA_SATURATE
        }
    }
}

///
/// The source and destination blend factors for a draw
///
/// `{ Zero, Zero }` means that the blend stage is switched off.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Blend {
    pub src: BlendFactor,
    pub dst: BlendFactor
}

impl Blend {
    /// Blending is switched off
    pub const DISABLED: Blend = Blend { src: BlendFactor::Zero, dst: BlendFactor::Zero };

    pub const fn new(src: BlendFactor, dst: BlendFactor) -> Blend {
        Blend { src, dst }
    }

    ///
    /// True if this is the 'blending disabled' sentinel
    ///
    pub fn is_disabled(&self) -> bool {
        *self == Blend::DISABLED
    }

    ///
    /// The blend factors that perform a transfer mode using the fixed-function blend stage
    ///
    /// Returns None for the modes that must be performed in a shader. When the source colour is not
    /// premultiplied, a source factor of `One` becomes `SrcAlpha`.
    ///
    pub fn from_xfer_mode(mode: XferMode, premultiplied: bool) -> Option<Blend> {
        use self::BlendFactor::*;
        use crate::program::XferMode as Xfer;

        let blend = match mode {
            Xfer::Clear         => Blend::new(Zero,             OneMinusSrcAlpha),
            Xfer::Src           => Blend::new(One,              Zero),
            Xfer::Dst           => Blend::new(Zero,             One),
            Xfer::SrcOver       => Blend::new(One,              OneMinusSrcAlpha),
            Xfer::DstOver       => Blend::new(OneMinusDstAlpha, One),
            Xfer::SrcIn         => Blend::new(DstAlpha,         Zero),
            Xfer::DstIn         => Blend::new(Zero,             SrcAlpha),
            Xfer::SrcOut        => Blend::new(OneMinusDstAlpha, Zero),
            Xfer::DstOut        => Blend::new(Zero,             OneMinusSrcAlpha),
            Xfer::SrcATop       => Blend::new(DstAlpha,         OneMinusSrcAlpha),
            Xfer::DstATop       => Blend::new(OneMinusDstAlpha, SrcAlpha),
            Xfer::Xor           => Blend::new(OneMinusDstAlpha, OneMinusSrcAlpha),
            Xfer::Plus          => Blend::new(One,              One),
            Xfer::Modulate      => Blend::new(Zero,             SrcColor),
            Xfer::Screen        => Blend::new(One,              OneMinusSrcColor),

            _                   => return None
        };

        if !premultiplied && blend.src == One {
            Some(Blend::new(SrcAlpha, blend.dst))
        } else {
            Some(blend)
        }
    }
}

impl Default for Blend {
    fn default() -> Blend {
        Blend::DISABLED
    }
}
