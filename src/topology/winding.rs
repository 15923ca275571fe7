/// Traversal direction of a closed loop.
///
/// The winding fixes the sign convention of segment normals: for a loop
/// whose tag agrees with its shoelace area, every normal points away from
/// the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Winding {
    Clockwise,
    #[default]
    CounterClockwise,
}

impl Winding {
    /// Returns the opposite winding.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }

    /// Winding implied by the sign of a shoelace area. Zero counts as counter-clockwise.
    #[must_use]
    pub fn from_signed_area(area: f64) -> Self {
        if area < 0.0 {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }

    /// `+1.0` for counter-clockwise, `-1.0` for clockwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_is_involution() {
        assert_eq!(Winding::Clockwise.reversed(), Winding::CounterClockwise);
        assert_eq!(Winding::Clockwise.reversed().reversed(), Winding::Clockwise);
    }

    #[test]
    fn from_area_sign() {
        assert_eq!(Winding::from_signed_area(12.0), Winding::CounterClockwise);
        assert_eq!(Winding::from_signed_area(-0.5), Winding::Clockwise);
    }
}
