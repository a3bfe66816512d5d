// ff-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, MassDensity as UomMassDensity,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Density = UomMassDensity;
pub type SpecificHeat = UomSpecificHeatCapacity;
pub type Conductivity = UomThermalConductivity;
pub type Time = UomTime;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn um(v: f64) -> Length {
    use uom::si::length::micrometer;
    Length::new::<micrometer>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecificHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecificHeat::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

/// Length expressed in micrometers, the natural scale for cloud droplets.
#[inline]
pub fn to_um(l: Length) -> f64 {
    use uom::si::length::micrometer;
    l.get::<micrometer>()
}

pub mod ice {
    //! Reference properties of solid water near 0 C.
    use super::*;

    pub const DENSITY_KG_M3: f64 = 920.0;
    pub const SPECIFIC_HEAT_J_KG_K: f64 = 2100.0;
    pub const CONDUCTIVITY_W_M_K: f64 = 2.2;

    #[inline]
    pub fn density() -> Density {
        kg_per_m3(DENSITY_KG_M3)
    }

    #[inline]
    pub fn specific_heat() -> SpecificHeat {
        j_per_kg_k(SPECIFIC_HEAT_J_KG_K)
    }

    #[inline]
    pub fn conductivity() -> Conductivity {
        w_per_m_k(CONDUCTIVITY_W_M_K)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_base_values() {
        assert_eq!(m(2.0).value, 2.0);
        assert_eq!(s(0.1).value, 0.1);
        assert_eq!(kg_per_m3(920.0).value, 920.0);
        assert_eq!(j_per_kg_k(2100.0).value, 2100.0);
        assert_eq!(w_per_m_k(2.2).value, 2.2);
    }

    #[test]
    fn micrometer_round_trip() {
        let r = um(20.0);
        assert!((r.value - 2e-5).abs() < 1e-18);
        assert!((to_um(r) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn ice_reference_values() {
        assert_eq!(ice::density().value, 920.0);
        assert_eq!(ice::specific_heat().value, 2100.0);
        assert_eq!(ice::conductivity().value, 2.2);
    }
}
