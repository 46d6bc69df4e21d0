use super::component::{CableComponent, CablePolynomialType};
use crate::polynomial::Polynomial;

/// Which strain region governed the last `load`/`strain` evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElongationRegion {
    /// Total strain below the unloaded point: the component carries no
    /// load, modeled as a line through the unloaded point with slope
    /// `Ec*A`.
    Compressed,
    /// Total strain between the unloaded point and the point where the
    /// component's own stretch load was recorded: a line with slope
    /// `Et*A`. Zero-width (and so never entered) for an unstretched
    /// component.
    Stretched,
    /// Total strain inside the fitted polynomial's valid range.
    Polynomial,
    /// Total strain beyond the fitted polynomial's valid range,
    /// extrapolated linearly at slope `Et*A`.
    Extrapolated,
}

/// Elongation behavior of a single [`CableComponent`] at a given
/// temperature and permanent stretch history.
///
/// Total strain is shifted thermally by `ε_thermal = α*(T - Tref)`, and the
/// active polynomial is evaluated in the resulting "mechanical strain"
/// frame. A component that has been permanently stretched by `load_stretch`
/// at `temperature_stretch` carries that history as a pair of boundary
/// points (the unloaded point and the stretch point) fixed on the total
/// strain axis, independent of the component's current temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct CableComponentElongationModel {
    pub component: CableComponent,
    pub polynomial_type: CablePolynomialType,
    pub temperature: f64,
    pub temperature_reference: f64,
    /// Permanent stretch load `L*` the component has accumulated (creep or
    /// a one-time load event). Zero for an as-manufactured component.
    pub load_stretch: f64,
    /// Temperature `T*` at which `load_stretch` was recorded. Unused when
    /// `load_stretch` is zero.
    pub temperature_stretch: f64,
}

impl CableComponentElongationModel {
    fn active_polynomial(&self) -> Polynomial {
        match self.polynomial_type {
            CablePolynomialType::LoadStrain => {
                Polynomial::new(self.component.coefficients_polynomial_load_strain.clone())
            }
            CablePolynomialType::Creep => {
                Polynomial::new(self.component.coefficients_polynomial_creep.clone())
            }
        }
    }

    fn strain_limit(&self) -> f64 {
        match self.polynomial_type {
            CablePolynomialType::LoadStrain => self.component.strain_limit_polynomial_load_strain,
            CablePolynomialType::Creep => self.component.strain_limit_polynomial_creep,
        }
    }

    fn thermal_strain_at(&self, temperature: f64) -> f64 {
        self.component.coefficient_thermal_expansion * (temperature - self.temperature_reference)
    }

    fn thermal_strain(&self) -> f64 {
        self.thermal_strain_at(self.temperature)
    }

    fn is_stretched(&self) -> bool {
        self.load_stretch > 0.0
    }

    /// Total strain at which the active polynomial, evaluated in the
    /// stretch temperature's own thermal frame, supports `load_stretch`.
    fn strain_at_stretch(&self) -> f64 {
        let polynomial = self.active_polynomial();
        let limit = self.strain_limit();
        let mechanical = polynomial
            .x(self.load_stretch, limit / 2.0, 6)
            .unwrap_or_else(|_| self.load_stretch / self.component.modulus_tension_area);
        self.thermal_strain_at(self.temperature_stretch) + mechanical
    }

    /// P_unloaded: total strain at which the component supplies zero load.
    fn point_unloaded(&self) -> f64 {
        if self.is_stretched() {
            self.strain_at_stretch() - self.load_stretch / self.component.modulus_tension_area
        } else {
            self.thermal_strain()
        }
    }

    /// P_stretched: total strain at which the polynomial reaches the
    /// recorded stretch load (the start of the polynomial region).
    fn point_stretched(&self) -> f64 {
        if self.is_stretched() {
            self.strain_at_stretch()
        } else {
            self.point_unloaded()
        }
    }

    /// P_polylimit: total strain at the active polynomial's own limit.
    fn point_polylimit(&self) -> f64 {
        self.thermal_strain() + self.strain_limit()
    }

    fn load_at_polylimit(&self) -> f64 {
        self.active_polynomial().y(self.strain_limit())
    }

    fn region_for_strain(&self, strain_total: f64) -> ElongationRegion {
        if strain_total <= self.point_unloaded() {
            ElongationRegion::Compressed
        } else if strain_total <= self.point_stretched() {
            ElongationRegion::Stretched
        } else if strain_total <= self.point_polylimit() {
            ElongationRegion::Polynomial
        } else {
            ElongationRegion::Extrapolated
        }
    }

    /// Load supported at `strain_total` (total strain, including thermal
    /// and permanent-stretch contributions).
    pub fn load(&self, strain_total: f64) -> f64 {
        match self.region_for_strain(strain_total) {
            ElongationRegion::Compressed => {
                (strain_total - self.point_unloaded()) * self.component.modulus_compression_area
            }
            ElongationRegion::Stretched => {
                (strain_total - self.point_unloaded()) * self.component.modulus_tension_area
            }
            ElongationRegion::Polynomial => {
                let mechanical = strain_total - self.thermal_strain();
                self.active_polynomial().y(mechanical)
            }
            ElongationRegion::Extrapolated => {
                let load_at_limit = self.load_at_polylimit();
                load_at_limit
                    + self.component.modulus_tension_area * (strain_total - self.point_polylimit())
            }
        }
    }

    /// Total strain that supports `load`, inverting [`Self::load`] by
    /// dispatching on the boundary loads rather than the boundary strains.
    pub fn strain(&self, load: f64) -> f64 {
        let load_at_stretched = if self.is_stretched() { self.load_stretch } else { 0.0 };
        let load_at_polylimit = self.load_at_polylimit();

        if load <= 0.0 {
            self.point_unloaded() + load / self.component.modulus_compression_area
        } else if load <= load_at_stretched {
            self.point_unloaded() + load / self.component.modulus_tension_area
        } else if load <= load_at_polylimit {
            let polynomial = self.active_polynomial();
            let limit = self.strain_limit();
            let mechanical = polynomial
                .x(load, limit / 2.0, 6)
                .unwrap_or_else(|_| load / self.component.modulus_tension_area);
            mechanical + self.thermal_strain()
        } else {
            self.point_polylimit() + (load - load_at_polylimit) / self.component.modulus_tension_area
        }
    }

    pub fn region(&self, strain_total: f64) -> ElongationRegion {
        self.region_for_strain(strain_total)
    }
}
