use std::fmt;

use crate::foundation::error::{AnalogonError, AnalogonResult};

/// Number of angles in [`ANGLE_CATALOG`].
pub const ANGLE_COUNT: usize = 46;

/// A catalog rotation angle, stored exactly as a count of half-degrees.
///
/// Every catalog angle is a multiple of 7.5°, so half-degree units keep keys exact under
/// hashing and comparison while converting losslessly to `f64` degrees for geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RotationAngle {
    half_degrees: u16,
}

impl RotationAngle {
    pub const fn from_half_degrees(half_degrees: u16) -> Self {
        Self { half_degrees }
    }

    /// Look up a catalog angle by its value in degrees.
    pub fn from_degrees(degrees: f64) -> AnalogonResult<Self> {
        ANGLE_CATALOG
            .into_iter()
            .find(|a| a.degrees() == degrees)
            .ok_or_else(|| {
                AnalogonError::validation(format!(
                    "{degrees} is not a catalog angle (15..=352.5 in steps of 7.5)"
                ))
            })
    }

    pub fn half_degrees(self) -> u16 {
        self.half_degrees
    }

    pub fn degrees(self) -> f64 {
        f64::from(self.half_degrees) / 2.0
    }
}

impl fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl serde::Serialize for RotationAngle {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.degrees())
    }
}

impl<'de> serde::Deserialize<'de> for RotationAngle {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let degrees = f64::deserialize(d)?;
        RotationAngle::from_degrees(degrees).map_err(serde::de::Error::custom)
    }
}

/// The 46 usable rotation angles: 15° through 352.5° in 7.5° steps, in ascending order.
pub const ANGLE_CATALOG: [RotationAngle; ANGLE_COUNT] = build_catalog();

const fn build_catalog() -> [RotationAngle; ANGLE_COUNT] {
    const FIRST_HALF_DEGREES: u16 = 30;
    const STEP_HALF_DEGREES: u16 = 15;

    let mut out = [RotationAngle::from_half_degrees(0); ANGLE_COUNT];
    let mut i = 0;
    while i < ANGLE_COUNT {
        out[i] = RotationAngle::from_half_degrees(FIRST_HALF_DEGREES + STEP_HALF_DEGREES * i as u16);
        i += 1;
    }
    out
}
