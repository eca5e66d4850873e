//! Options applying to a subdivision scheme.
//!
//! [`SubdivisionOptions`] contains all supported options that can be applied
//! to a subdivision [`Scheme`] to affect the shape of the limit surface. These
//! differ from approximations that may be applied at a higher level -- options
//! to limit the level of feature adaptive subdivision, options to ignore
//! fractional creasing, or creasing entirely, etc.
//!
//! ## Example
//! ```
//! # use opensubdiv_petite_sdc::sdc::*;
//! let mut options = SubdivisionOptions::default();
//! assert_eq!(options.boundary_interpolation(), BoundaryInterpolation::None);
//!
//! options.set_face_varying_linear_interpolation(
//!     FaceVaryingLinearInterpolation::CornersOnly,
//! );
//!
//! // Options are plain values. Changing a copy leaves the original alone.
//! let mut copy = options;
//! copy.set_creasing_method(CreasingMethod::Chaikin);
//!
//! assert_eq!(options.creasing_method(), CreasingMethod::Uniform);
//! assert_eq!(copy.creasing_method(), CreasingMethod::Chaikin);
//! ```
use super::Scheme;
use crate::{Error, Result};
use bytemuck::NoUninit;
use derive_more::Display;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// How boundary edges and corners of the mesh are interpolated.
#[repr(u8)]
#[derive(
    TryFromPrimitive,
    IntoPrimitive,
    NoUninit,
    Display,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[num_enum(error_type(name = Error, constructor = BoundaryInterpolation::invalid_code))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BoundaryInterpolation {
    /// No boundary edge interpolation is applied by default.  Boundary faces
    /// are tagged as holes so that the boundary vertices continue to support
    /// the adjacent interior faces, but no surface corresponding to the
    /// boundary faces is generated.
    ///
    /// Boundary faces can be selectively interpolated by sharpening all
    /// boundary edges incident the vertices of the face.
    ///
    /// This is a legacy choice. It is kept for compatibility.
    #[display("none")]
    None = 0,
    /// A sequence of boundary vertices defines a smooth curve to which the
    /// limit surface along boundary faces extends.
    #[display("edge_only")]
    EdgeOnly = 1,
    /// Similar to edge-only but the smooth curve resulting on the boundary is
    /// made to interpolate corner vertices (vertices with exactly one incident
    /// face).
    #[display("edge_and_corner")]
    EdgeAndCorner = 2,
}

impl BoundaryInterpolation {
    /// All members, ordered by their integer code.
    pub const ALL: [Self; 3] = [Self::None, Self::EdgeOnly, Self::EdgeAndCorner];

    const OPTION: &'static str = "boundary interpolation";

    /// Returns `true` for [`None`](BoundaryInterpolation::None).
    ///
    /// Modern pipelines should prefer one of the sharpening modes.
    #[inline]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::None)
    }

    fn invalid_code(code: u8) -> Error {
        Error::invalid_code(Self::OPTION, code)
    }
}

/// How face-varying data (UVs, etc.) is interpolated.
///
/// This is independent of how the vertex positions of the mesh are smoothed.
#[repr(u8)]
#[derive(
    TryFromPrimitive,
    IntoPrimitive,
    NoUninit,
    Display,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[num_enum(error_type(name = Error, constructor = FaceVaryingLinearInterpolation::invalid_code))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FaceVaryingLinearInterpolation {
    /// Smooth everywhere the mesh is smooth.
    #[display("none")]
    None = 0,
    /// Linearly interpolate (sharpen or pin) corners only.
    ///
    /// Smooth boundaries are never sharpened.
    #[display("corners_only")]
    CornersOnly = 1,
    /// `CornersOnly` + sharpening of junctions of three or more regions.
    ///
    /// Legacy mode which may also sharpen boundaries at vertices with more
    /// than one face-varying value.
    #[display("corners_plus_one")]
    CornersPlusOne = 2,
    /// `CornersPlusOne` + sharpening of darts and concave corners.
    ///
    /// Legacy mode, see [`CornersPlusOne`](Self::CornersPlusOne).
    #[display("corners_plus_two")]
    CornersPlusTwo = 3,
    /// Linear interpolation along all boundary edges and corners.
    #[display("boundaries")]
    Boundaries = 4,
    /// Linear interpolation everywhere (boundaries and interior).
    #[display("all")]
    All = 5,
}

impl FaceVaryingLinearInterpolation {
    /// All members, ordered by their integer code.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::CornersOnly,
        Self::CornersPlusOne,
        Self::CornersPlusTwo,
        Self::Boundaries,
        Self::All,
    ];

    const OPTION: &'static str = "face-varying linear interpolation";

    /// Returns `true` for [`CornersPlusOne`](Self::CornersPlusOne) and
    /// [`CornersPlusTwo`](Self::CornersPlusTwo).
    #[inline]
    pub const fn is_legacy(&self) -> bool {
        matches!(self, Self::CornersPlusOne | Self::CornersPlusTwo)
    }

    fn invalid_code(code: u8) -> Error {
        Error::invalid_code(Self::OPTION, code)
    }
}

/// The rule used to subdivide semi-sharp (fractional) crease values.
///
/// Only meaningful for schemes with
/// [fractional creasing](Scheme::has_fractional_creasing()).
#[repr(u8)]
#[derive(
    TryFromPrimitive,
    IntoPrimitive,
    NoUninit,
    Display,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[num_enum(error_type(name = Error, constructor = CreasingMethod::invalid_code))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CreasingMethod {
    /// Apply regular, *Catmull-Clark* semi-sharp crease rules.
    ///
    /// * Note that this may give a jagged look when crease values vary along an [edge loop](https://en.wikipedia.org/wiki/Edge_loop).
    #[display("uniform")]
    Uniform = 0,
    /// Apply *Chaikin* semi-sharp crease rules.
    ///
    /// The *Chaikin Rule* is a variation of the semi-sharp creasing method
    /// that attempts to improve the appearance of creases along a sequence of
    /// connected edges when the sharpness values differ. This choice modifies
    /// the subdivision of sharpness values using Chaikin's curve subdivision
    /// algorithm to consider all sharpness values of edges around a common
    /// vertex when determining the sharpness of child edges.
    #[display("chaikin")]
    Chaikin = 1,
}

impl CreasingMethod {
    /// All members, ordered by their integer code.
    pub const ALL: [Self; 2] = [Self::Uniform, Self::Chaikin];

    const OPTION: &'static str = "creasing method";

    fn invalid_code(code: u8) -> Error {
        Error::invalid_code(Self::OPTION, code)
    }
}

/// The weights used at triangular faces.
///
/// Only meaningful for schemes with
/// [triangle subdivision](Scheme::has_triangle_subdivision()).
#[repr(u8)]
#[derive(
    TryFromPrimitive,
    IntoPrimitive,
    NoUninit,
    Display,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
#[num_enum(error_type(name = Error, constructor = TriangleSubdivision::invalid_code))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TriangleSubdivision {
    /// Default *Catmull-Clark* scheme weights at triangles.
    #[display("catmull_clark")]
    #[cfg_attr(feature = "serde", serde(alias = "catmark"))]
    CatmullClark = 0,
    /// Modifies the subdivision behavior at triangular faces to improve the
    /// undesirable surface artefacts that often result in such areas.
    #[display("smooth")]
    Smooth = 1,
}

impl TriangleSubdivision {
    /// All members, ordered by their integer code.
    pub const ALL: [Self; 2] = [Self::CatmullClark, Self::Smooth];

    const OPTION: &'static str = "triangle subdivision";

    fn invalid_code(code: u8) -> Error {
        Error::invalid_code(Self::OPTION, code)
    }
}

macro_rules! impl_default_and_from_str {
    ($($type:ident => $default:ident),* $(,)?) => {
        $(
            impl Default for $type {
                fn default() -> Self {
                    Self::$default
                }
            }

            impl std::str::FromStr for $type {
                type Err = Error;

                fn from_str(name: &str) -> Result<Self> {
                    parse_name(Self::OPTION, &Self::ALL, name)
                }
            }
        )*
    };
}

impl_default_and_from_str! {
    BoundaryInterpolation => None,
    FaceVaryingLinearInterpolation => All,
    CreasingMethod => Uniform,
}

impl Default for TriangleSubdivision {
    fn default() -> Self {
        Self::CatmullClark
    }
}

impl std::str::FromStr for TriangleSubdivision {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "catmark" => Ok(Self::CatmullClark),
            _ => parse_name(Self::OPTION, &Self::ALL, name),
        }
    }
}

/// Looks up the member of `all` whose `Display` name is `name`.
pub(super) fn parse_name<T: Copy + std::fmt::Display>(
    option: &'static str,
    all: &[T],
    name: &str,
) -> Result<T> {
    all.iter()
        .copied()
        .find(|member| member.to_string() == name)
        .ok_or_else(|| Error::unknown_name(option, name))
}

/// All supported options applying to a subdivision scheme.
///
/// The intent is that these options be defined at a high level and
/// propagated into the lowest-level computation in support of each
/// subdivision [`Scheme`]. Each field is stored as a single byte so the whole
/// struct remains light weight and is easily passed around by value.
///
/// Fields are read and written through the accessor pairs below. They are
/// independent of each other: setting one never touches another, and no cross
/// field consistency is checked.
///
/// See the [module level documentation](self) for an example.
#[repr(C)]
#[derive(NoUninit, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SubdivisionOptions {
    boundary_interpolation: BoundaryInterpolation,
    face_varying_linear_interpolation: FaceVaryingLinearInterpolation,
    creasing_method: CreasingMethod,
    triangle_subdivision: TriangleSubdivision,
}

impl Default for SubdivisionOptions {
    /// Create options with the following defaults:
    ///
    /// | Property                            | Value                                                  |
    /// |-------------------------------------|--------------------------------------------------------|
    /// | `boundary_interpolation`            | [`None`](BoundaryInterpolation::None)                  |
    /// | `face_varying_linear_interpolation` | [`All`](FaceVaryingLinearInterpolation::All)           |
    /// | `creasing_method`                   | [`Uniform`](CreasingMethod::Uniform)                   |
    /// | `triangle_subdivision`              | [`CatmullClark`](TriangleSubdivision::CatmullClark)    |
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SubdivisionOptions {
    /// Create options with the [defaults](#impl-Default-for-SubdivisionOptions).
    #[inline]
    pub const fn new() -> Self {
        Self {
            boundary_interpolation: BoundaryInterpolation::None,
            face_varying_linear_interpolation: FaceVaryingLinearInterpolation::All,
            creasing_method: CreasingMethod::Uniform,
            triangle_subdivision: TriangleSubdivision::CatmullClark,
        }
    }

    /// Returns the vertex boundary interpolation rule.
    #[inline]
    pub const fn boundary_interpolation(&self) -> BoundaryInterpolation {
        self.boundary_interpolation
    }

    /// Set the vertex boundary interpolation rule.
    #[inline]
    pub fn set_boundary_interpolation(&mut self, boundary_interpolation: BoundaryInterpolation) {
        self.boundary_interpolation = boundary_interpolation;
    }

    /// Returns the face-varying interpolation rule.
    #[inline]
    pub const fn face_varying_linear_interpolation(&self) -> FaceVaryingLinearInterpolation {
        self.face_varying_linear_interpolation
    }

    /// Set the face-varying interpolation rule.
    #[inline]
    pub fn set_face_varying_linear_interpolation(
        &mut self,
        face_varying_linear_interpolation: FaceVaryingLinearInterpolation,
    ) {
        self.face_varying_linear_interpolation = face_varying_linear_interpolation;
    }

    /// Returns the edge crease rule.
    #[inline]
    pub const fn creasing_method(&self) -> CreasingMethod {
        self.creasing_method
    }

    /// Set the edge crease rule.
    #[inline]
    pub fn set_creasing_method(&mut self, creasing_method: CreasingMethod) {
        self.creasing_method = creasing_method;
    }

    /// Returns the triangle subdivision weights rule (*Catmull-Clark* scheme
    /// only!).
    #[inline]
    pub const fn triangle_subdivision(&self) -> TriangleSubdivision {
        self.triangle_subdivision
    }

    /// Set the triangle subdivision weights rule (*Catmull-Clark* scheme
    /// only!).
    #[inline]
    pub fn set_triangle_subdivision(&mut self, triangle_subdivision: TriangleSubdivision) {
        self.triangle_subdivision = triangle_subdivision;
    }

    /// Set the vertex boundary interpolation rule.
    #[must_use]
    pub const fn with_boundary_interpolation(
        mut self,
        boundary_interpolation: BoundaryInterpolation,
    ) -> Self {
        self.boundary_interpolation = boundary_interpolation;
        self
    }

    /// Set the face-varying interpolation rule.
    #[must_use]
    pub const fn with_face_varying_linear_interpolation(
        mut self,
        face_varying_linear_interpolation: FaceVaryingLinearInterpolation,
    ) -> Self {
        self.face_varying_linear_interpolation = face_varying_linear_interpolation;
        self
    }

    /// Set the edge crease rule.
    #[must_use]
    pub const fn with_creasing_method(mut self, creasing_method: CreasingMethod) -> Self {
        self.creasing_method = creasing_method;
        self
    }

    /// Set the triangle subdivision weights rule.
    #[must_use]
    pub const fn with_triangle_subdivision(
        mut self,
        triangle_subdivision: TriangleSubdivision,
    ) -> Self {
        self.triangle_subdivision = triangle_subdivision;
        self
    }

    /// Returns a copy where every option `scheme` ignores is reset to its
    /// default.
    ///
    /// Two sets of options that yield the same limit surface for `scheme`
    /// compare equal after normalization. This makes the result suitable as
    /// (part of) a cache key.
    ///
    /// Nothing calls this implicitly. Options handed to a scheme that
    /// ignores some of them are still valid as they are.
    ///
    /// ```
    /// # use opensubdiv_petite_sdc::sdc::*;
    /// let options = SubdivisionOptions::new()
    ///     .with_triangle_subdivision(TriangleSubdivision::Smooth);
    ///
    /// assert_eq!(
    ///     options.normalized_for(Scheme::Loop),
    ///     SubdivisionOptions::default()
    /// );
    /// assert_eq!(options.normalized_for(Scheme::CatmullClark), options);
    /// ```
    #[must_use]
    pub fn normalized_for(&self, scheme: Scheme) -> Self {
        let mut options = *self;

        if !scheme.has_fractional_creasing()
            && options.creasing_method != CreasingMethod::default()
        {
            tracing::trace!(
                %scheme,
                creasing_method = %options.creasing_method,
                "ignoring creasing method"
            );
            options.creasing_method = CreasingMethod::default();
        }

        if !scheme.has_triangle_subdivision()
            && options.triangle_subdivision != TriangleSubdivision::default()
        {
            tracing::trace!(
                %scheme,
                triangle_subdivision = %options.triangle_subdivision,
                "ignoring triangle subdivision"
            );
            options.triangle_subdivision = TriangleSubdivision::default();
        }

        options
    }

    /// Returns the stable integer codes of all four options.
    ///
    /// The order is boundary interpolation, face-varying linear
    /// interpolation, creasing method, triangle subdivision.
    #[inline]
    pub fn to_codes(&self) -> [u8; 4] {
        bytemuck::cast(*self)
    }
}

impl TryFrom<[u8; 4]> for SubdivisionOptions {
    type Error = Error;

    /// Rebuild options from codes returned by
    /// [`to_codes()`](SubdivisionOptions::to_codes()).
    fn try_from(codes: [u8; 4]) -> Result<Self> {
        let [boundary, face_varying, creasing, triangle] = codes;

        Ok(Self {
            boundary_interpolation: boundary.try_into()?,
            face_varying_linear_interpolation: face_varying.try_into()?,
            creasing_method: creasing.try_into()?,
            triangle_subdivision: triangle.try_into()?,
        })
    }
}

impl From<SubdivisionOptions> for [u8; 4] {
    #[inline]
    fn from(options: SubdivisionOptions) -> Self {
        options.to_codes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_field_order() {
        let options = SubdivisionOptions::new()
            .with_boundary_interpolation(BoundaryInterpolation::EdgeAndCorner)
            .with_face_varying_linear_interpolation(FaceVaryingLinearInterpolation::CornersPlusTwo)
            .with_creasing_method(CreasingMethod::Chaikin)
            .with_triangle_subdivision(TriangleSubdivision::Smooth);

        assert_eq!(options.to_codes(), [2, 3, 1, 1]);
        assert_eq!(SubdivisionOptions::new().to_codes(), [0, 5, 0, 0]);
    }

    #[test]
    fn parse_name_rejects_case_mismatch() {
        assert_eq!(
            parse_name("creasing method", &CreasingMethod::ALL, "Chaikin"),
            Err(Error::UnknownName {
                option: "creasing method",
                name: "Chaikin".into(),
            })
        );
    }
}
