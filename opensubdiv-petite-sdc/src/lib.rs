//#![warn(missing_docs)]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/virtualritz/opensubdiv/master/osd-logo.png"
)]
//! # Pixar OpenSubdiv Scheme Options
//!
//! This crate carries the options of the `Sdc` (subdivision core) layer of
//! [*Pixar’s OpenSubdiv*](https://graphics.pixar.com/opensubdiv/) as plain,
//! `Copy`able Rust values.
//!
//! These options define the shape of a particular limit surface (including the
//! shape of primitive variable data associated with it). They are set up once,
//! at a high level, and then handed down by value into the lowest-level
//! computation of each subdivision [`Scheme`](sdc::Scheme).
//!
//! ```
//! use opensubdiv_petite_sdc::sdc::{
//!     BoundaryInterpolation, CreasingMethod, SubdivisionOptions,
//! };
//!
//! let mut options = SubdivisionOptions::default();
//! options.set_boundary_interpolation(BoundaryInterpolation::EdgeAndCorner);
//!
//! let chaikin = options.with_creasing_method(CreasingMethod::Chaikin);
//!
//! assert_eq!(options.creasing_method(), CreasingMethod::Uniform);
//! assert_eq!(chaikin.creasing_method(), CreasingMethod::Chaikin);
//! ```
//!
//! ## Features
#![doc = document_features::document_features!()]
//!
//! ## API Changes From C++
//!
//! * The C++ `Sdc::Options` class packs its four fields into a bit-field. On
//!   the Rust side every field is a `#[repr(u8)]` enum. This keeps the struct
//!   at four bytes while making invalid values unrepresentable.
//! * Getters drop the `Get` prefix (`GetCreasingMethod()` becomes
//!   [`creasing_method()`](sdc::SubdivisionOptions::creasing_method)).
//! * Abbreviations are spelled out (`VtxBoundaryInterpolation` becomes
//!   [`BoundaryInterpolation`](sdc::BoundaryInterpolation), `FVar` becomes
//!   `FaceVarying`).
//!
//! ## Stable Representations
//!
//! Options can be turned into stable names (via [`Display`](std::fmt::Display)
//! and [`FromStr`](std::str::FromStr)) or stable integer codes (via
//! `u8` conversions). The codes match the enumerator values of the C++
//! library. Use either when options need to be persisted, e.g. as part of a
//! cache key. Never persist the in-memory layout.
pub mod sdc;

mod error;
pub use error::{Error, Result};
