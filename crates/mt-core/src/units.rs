// mt-core/src/units.rs

use uom::si::f64::{Length as UomLength, Velocity as UomVelocity};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

pub mod constants {
    /// Default characteristic length [m] for kc = Sh * DAB / L.
    pub const CHARACTERISTIC_LENGTH_M: f64 = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::length::meter;
    use uom::si::velocity::meter_per_second;

    #[test]
    fn constructors_smoke() {
        let l = m(constants::CHARACTERISTIC_LENGTH_M);
        assert_eq!(l.get::<meter>(), 1.0);
        let kc = mps(1.53e-7);
        assert!((kc.get::<meter_per_second>() - 1.53e-7).abs() < 1e-20);
    }
}
