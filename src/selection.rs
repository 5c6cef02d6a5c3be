use crate::config::SnapConvention;
use crate::geometry::SLOT_ANGLE;
use crate::zodiac::ZodiacSign;

/// Map a committed rotation to the slot index aligned with the selection
/// reference point. Total over all finite rotations by construction.
pub fn selection_index(rotation: f64, convention: SnapConvention) -> usize {
    match convention {
        SnapConvention::Nearest => {
            ((rotation / SLOT_ANGLE).round() as i64).rem_euclid(ZodiacSign::COUNT as i64) as usize
        }
        SnapConvention::OffsetFloor => {
            // Shift by half a slot so the slot straddling the reference wins.
            (((rotation + SLOT_ANGLE / 2.0).rem_euclid(360.0)) / SLOT_ANGLE).floor() as usize
                % ZodiacSign::COUNT
        }
    }
}

/// The sign currently aligned with the reference point.
pub fn soulmate(rotation: f64, convention: SnapConvention) -> ZodiacSign {
    ZodiacSign::from_index(selection_index(rotation, convention))
}
