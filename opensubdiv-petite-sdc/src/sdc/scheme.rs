use crate::Error;
use derive_more::Display;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The subdivision scheme a set of
/// [`SubdivisionOptions`](super::SubdivisionOptions) is applied to.
///
/// Not every option is meaningful for every scheme. See
/// [`has_fractional_creasing()`](Scheme::has_fractional_creasing()) and
/// [`has_triangle_subdivision()`](Scheme::has_triangle_subdivision()).
#[repr(u8)]
#[derive(
    TryFromPrimitive,
    IntoPrimitive,
    Display,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[num_enum(error_type(name = Error, constructor = Scheme::invalid_code))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Scheme {
    /// *Bilinear* interpolation.
    #[display("bilinear")]
    Bilinear = 0,
    /// [*Catmull-Clark* subdivision](https://en.wikipedia.org/wiki/Catmull%E2%80%93Clark_subdivision_surface).
    #[display("catmull_clark")]
    CatmullClark = 1,
    /// [*Loop* subdivision](https://en.wikipedia.org/wiki/Loop_subdivision_surface).
    #[display("loop")]
    Loop = 2,
}

impl Scheme {
    /// All schemes, ordered by their integer code.
    pub const ALL: [Self; 3] = [Self::Bilinear, Self::CatmullClark, Self::Loop];

    const OPTION: &'static str = "scheme";

    /// Returns `true` if the scheme supports semi-sharp (fractional) creases
    /// and therefore honors the
    /// [`CreasingMethod`](super::CreasingMethod).
    #[inline]
    pub const fn has_fractional_creasing(&self) -> bool {
        matches!(self, Self::CatmullClark | Self::Loop)
    }

    /// Returns `true` if the scheme honors the
    /// [`TriangleSubdivision`](super::TriangleSubdivision) weights.
    ///
    /// This is the case for *Catmull-Clark* only.
    #[inline]
    pub const fn has_triangle_subdivision(&self) -> bool {
        matches!(self, Self::CatmullClark)
    }

    fn invalid_code(code: u8) -> Error {
        Error::invalid_code(Self::OPTION, code)
    }
}

impl Default for Scheme {
    /// [`CatmullClark`](Scheme::CatmullClark).
    fn default() -> Self {
        Self::CatmullClark
    }
}

impl std::str::FromStr for Scheme {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        super::options::parse_name(Self::OPTION, &Self::ALL, name)
    }
}
