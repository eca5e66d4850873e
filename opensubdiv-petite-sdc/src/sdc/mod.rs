//! Subdivision core: the options and schemes shared by all higher level
//! refinement and evaluation code.
mod options;
mod scheme;

pub use options::{
    BoundaryInterpolation, CreasingMethod, FaceVaryingLinearInterpolation,
    SubdivisionOptions, TriangleSubdivision,
};
pub use scheme::Scheme;
