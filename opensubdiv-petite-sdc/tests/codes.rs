//! Tests for stable names and integer codes.

use opensubdiv_petite_sdc::sdc::*;
use opensubdiv_petite_sdc::Error;

#[test]
fn test_codes_match_declaration_order() {
    for (code, member) in BoundaryInterpolation::ALL.into_iter().enumerate() {
        assert_eq!(u8::from(member) as usize, code);
    }
    for (code, member) in FaceVaryingLinearInterpolation::ALL.into_iter().enumerate() {
        assert_eq!(u8::from(member) as usize, code);
    }
    for (code, member) in CreasingMethod::ALL.into_iter().enumerate() {
        assert_eq!(u8::from(member) as usize, code);
    }
    for (code, member) in TriangleSubdivision::ALL.into_iter().enumerate() {
        assert_eq!(u8::from(member) as usize, code);
    }
    for (code, member) in Scheme::ALL.into_iter().enumerate() {
        assert_eq!(u8::from(member) as usize, code);
    }
}

#[test]
fn test_known_codes() -> anyhow::Result<()> {
    assert_eq!(
        BoundaryInterpolation::try_from(2u8)?,
        BoundaryInterpolation::EdgeAndCorner
    );
    assert_eq!(
        FaceVaryingLinearInterpolation::try_from(5u8)?,
        FaceVaryingLinearInterpolation::All
    );
    assert_eq!(CreasingMethod::try_from(1u8)?, CreasingMethod::Chaikin);
    assert_eq!(TriangleSubdivision::try_from(0u8)?, TriangleSubdivision::CatmullClark);
    assert_eq!(Scheme::try_from(2u8)?, Scheme::Loop);
    Ok(())
}

#[test]
fn test_invalid_codes() {
    assert_eq!(
        BoundaryInterpolation::try_from(3u8),
        Err(Error::InvalidCode {
            option: "boundary interpolation",
            code: 3
        })
    );
    assert_eq!(
        FaceVaryingLinearInterpolation::try_from(6u8),
        Err(Error::InvalidCode {
            option: "face-varying linear interpolation",
            code: 6
        })
    );
    assert!(matches!(
        CreasingMethod::try_from(2u8),
        Err(Error::InvalidCode { code: 2, .. })
    ));
    assert!(matches!(
        TriangleSubdivision::try_from(255u8),
        Err(Error::InvalidCode { code: 255, .. })
    ));
    assert!(matches!(
        Scheme::try_from(3u8),
        Err(Error::InvalidCode { option: "scheme", .. })
    ));
}

#[test]
fn test_options_from_codes() -> anyhow::Result<()> {
    let options = SubdivisionOptions::try_from([1u8, 2, 1, 0])?;
    assert_eq!(options.boundary_interpolation(), BoundaryInterpolation::EdgeOnly);
    assert_eq!(
        options.face_varying_linear_interpolation(),
        FaceVaryingLinearInterpolation::CornersPlusOne
    );
    assert_eq!(options.creasing_method(), CreasingMethod::Chaikin);
    assert_eq!(options.triangle_subdivision(), TriangleSubdivision::CatmullClark);

    assert_eq!(options.to_codes(), [1, 2, 1, 0]);
    assert_eq!(<[u8; 4]>::from(options), [1, 2, 1, 0]);
    Ok(())
}

#[test]
fn test_options_from_invalid_codes() {
    assert!(matches!(
        SubdivisionOptions::try_from([0u8, 9, 0, 0]),
        Err(Error::InvalidCode {
            option: "face-varying linear interpolation",
            code: 9
        })
    ));
    assert!(matches!(
        SubdivisionOptions::try_from([0u8, 0, 0, 2]),
        Err(Error::InvalidCode {
            option: "triangle subdivision",
            code: 2
        })
    ));
}

#[test]
fn test_names() {
    assert_eq!(BoundaryInterpolation::EdgeAndCorner.to_string(), "edge_and_corner");
    assert_eq!(
        FaceVaryingLinearInterpolation::CornersPlusTwo.to_string(),
        "corners_plus_two"
    );
    assert_eq!(CreasingMethod::Chaikin.to_string(), "chaikin");
    assert_eq!(TriangleSubdivision::CatmullClark.to_string(), "catmull_clark");
    assert_eq!(Scheme::Bilinear.to_string(), "bilinear");
}

#[test]
fn test_parse_names() -> anyhow::Result<()> {
    for member in BoundaryInterpolation::ALL {
        assert_eq!(member.to_string().parse::<BoundaryInterpolation>()?, member);
    }
    for member in FaceVaryingLinearInterpolation::ALL {
        assert_eq!(
            member.to_string().parse::<FaceVaryingLinearInterpolation>()?,
            member
        );
    }

    assert_eq!("uniform".parse::<CreasingMethod>()?, CreasingMethod::Uniform);
    assert_eq!("smooth".parse::<TriangleSubdivision>()?, TriangleSubdivision::Smooth);
    assert_eq!(
        "catmark".parse::<TriangleSubdivision>()?,
        TriangleSubdivision::CatmullClark
    );
    assert_eq!("loop".parse::<Scheme>()?, Scheme::Loop);
    Ok(())
}

#[test]
fn test_parse_unknown_name() {
    let error = "edges".parse::<BoundaryInterpolation>().unwrap_err();
    assert_eq!(
        error,
        Error::UnknownName {
            option: "boundary interpolation",
            name: "edges".into()
        }
    );
    assert_eq!(
        error.to_string(),
        "Unknown name \"edges\" for boundary interpolation"
    );

    assert!("".parse::<CreasingMethod>().is_err());
    assert!("catmark".parse::<Scheme>().is_err());
}
