//! Fixed radial geometry of a fuel pin.
//!
//! Radii are measured from the pin axis. From the outside in:
//!
//! ```text
//!   r_clad_outer ─┐
//!   r_clad_mid    │ clad
//!   r_clad_inner ─┘─┐
//!                   │ gap (may be zero)
//!   r_fuel_outer ───┘─┐
//!     node N-1        │
//!     …               │ fuel pellet
//!     node 0          │
//!   r_fuel_inner ─────┘ (zero unless annular)
//! ```
//!
//! Fuel node `i` spans `[r_frac[i], r_frac[i+1]]` of the pellet radius; the
//! last node ends at the pellet surface. Conductivity parameters are known at
//! node midpoints, which also bound the annuli used to partition pin power.

use std::f64::consts::PI;

use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, NonNegative, StrictlyPositive, UnitInterval},
    units::{LinearHeatRate, VolumetricHeatRate},
};

use super::PinConfigError;

/// Smallest pellet radius accepted, relative to the clad inner radius.
const MIN_RELATIVE_RADIUS: f64 = 4.0 * f64::EPSILON;

/// Cladding radii and the log-radius coefficients of the shell solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CladGeometry {
    r_inner: f64,
    r_mid: f64,
    r_outer: f64,
    ln_outer_inner: f64,
    ln_mid_inner: f64,
    ln_outer_mid: f64,
}

impl CladGeometry {
    fn new(r_outer: f64, thickness: f64) -> Self {
        let r_inner = r_outer - thickness;
        let r_mid = r_outer - 0.5 * thickness;
        Self {
            r_inner,
            r_mid,
            r_outer,
            ln_outer_inner: (r_outer / r_inner).ln(),
            ln_mid_inner: (r_mid / r_inner).ln(),
            ln_outer_mid: (r_outer / r_mid).ln(),
        }
    }

    #[must_use]
    pub fn inner_radius(&self) -> Length {
        Length::new::<meter>(self.r_inner)
    }

    #[must_use]
    pub fn mid_radius(&self) -> Length {
        Length::new::<meter>(self.r_mid)
    }

    #[must_use]
    pub fn outer_radius(&self) -> Length {
        Length::new::<meter>(self.r_outer)
    }

    /// Half the wall thickness, the radial span of each clad half-wall.
    #[must_use]
    pub fn half_thickness(&self) -> Length {
        Length::new::<meter>(0.5 * (self.r_outer - self.r_inner))
    }

    /// `ln(r_outer / r_inner)`.
    #[must_use]
    pub fn ln_outer_inner(&self) -> f64 {
        self.ln_outer_inner
    }

    /// `ln(r_mid / r_inner)`.
    #[must_use]
    pub fn ln_mid_inner(&self) -> f64 {
        self.ln_mid_inner
    }

    /// `ln(r_outer / r_mid)`.
    #[must_use]
    pub fn ln_outer_mid(&self) -> f64 {
        self.ln_outer_mid
    }

    pub(super) fn r_outer_m(&self) -> f64 {
        self.r_outer
    }
}

/// Fuel-clad gap thickness and log-radius coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GapGeometry {
    thickness: f64,
    ln_clad_fuel: f64,
}

impl GapGeometry {
    #[must_use]
    pub fn thickness(&self) -> Length {
        Length::new::<meter>(self.thickness)
    }

    /// `ln(r_clad_inner / r_fuel_outer)`; zero for a closed gap.
    #[must_use]
    pub fn ln_clad_fuel(&self) -> f64 {
        self.ln_clad_fuel
    }

    /// Whether the gap stage takes part in the solve.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.thickness > 0.0
    }

    pub(super) fn thickness_m(&self) -> f64 {
        self.thickness
    }
}

/// One concentric fuel shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelNode {
    r_inner: f64,
    r_outer: f64,
    drsq_over_4: f64,
}

impl FuelNode {
    fn new(r_inner: f64, r_outer: f64) -> Self {
        Self {
            r_inner,
            r_outer,
            drsq_over_4: 0.25 * (r_outer * r_outer - r_inner * r_inner),
        }
    }

    #[must_use]
    pub fn inner_radius(&self) -> Length {
        Length::new::<meter>(self.r_inner)
    }

    #[must_use]
    pub fn outer_radius(&self) -> Length {
        Length::new::<meter>(self.r_outer)
    }

    #[must_use]
    pub fn span(&self) -> Length {
        Length::new::<meter>(self.r_outer - self.r_inner)
    }

    /// `(r_outer² − r_inner²) / 4` in m², the shell's conduction factor.
    #[must_use]
    pub fn drsq_over_4(&self) -> f64 {
        self.drsq_over_4
    }

    fn midpoint(&self) -> f64 {
        0.5 * (self.r_inner + self.r_outer)
    }
}

/// Fuel pellet nodes, area, midpoint radii, and surface emissivity.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelGeometry {
    nodes: Vec<FuelNode>,
    area: f64,
    midpoints: Vec<f64>,
    midpoint_drsq: Vec<f64>,
    emissivity: f64,
}

impl FuelGeometry {
    fn new(r_fuel: f64, r_frac: &[f64], emissivity: f64) -> Self {
        let nodes: Vec<FuelNode> = r_frac
            .iter()
            .enumerate()
            .map(|(i, &inner)| {
                let outer = r_frac.get(i + 1).copied().unwrap_or(1.0);
                FuelNode::new(inner * r_fuel, outer * r_fuel)
            })
            .collect();

        let r_void = nodes[0].r_inner;
        let area = PI * (r_fuel * r_fuel - r_void * r_void);

        let mut midpoints = Vec::with_capacity(nodes.len() + 2);
        midpoints.push(r_void);
        midpoints.extend(nodes.iter().map(FuelNode::midpoint));
        midpoints.push(r_fuel);

        let midpoint_drsq = midpoints
            .windows(2)
            .map(|pair| pair[1] * pair[1] - pair[0] * pair[0])
            .collect();

        Self {
            nodes,
            area,
            midpoints,
            midpoint_drsq,
            emissivity,
        }
    }

    /// Radial nodes ordered from the pellet center outward.
    #[must_use]
    pub fn nodes(&self) -> &[FuelNode] {
        &self.nodes
    }

    /// Pellet cross-sectional area less any central void.
    #[must_use]
    pub fn area(&self) -> Area {
        Area::new::<square_meter>(self.area)
    }

    /// Pellet outer radius.
    #[must_use]
    pub fn outer_radius(&self) -> Length {
        Length::new::<meter>(self.r_outer_m())
    }

    /// Pellet inner radius; zero for a solid pellet.
    #[must_use]
    pub fn inner_radius(&self) -> Length {
        Length::new::<meter>(self.nodes[0].r_inner)
    }

    /// Node midpoint radii with the pellet inner and outer radii at the ends.
    ///
    /// There are `N + 2` entries for `N` nodes, bounding `N + 1` annuli.
    #[must_use]
    pub fn midpoint_radii(&self) -> Vec<Length> {
        self.midpoints
            .iter()
            .map(|&r| Length::new::<meter>(r))
            .collect()
    }

    /// `r²[j+1] − r²[j]` (m²) between consecutive midpoint radii.
    #[must_use]
    pub fn midpoint_drsq(&self) -> &[f64] {
        &self.midpoint_drsq
    }

    /// Fraction of pin power deposited in each annulus between midpoint radii,
    /// assuming uniform power density. The fractions sum to one.
    #[must_use]
    pub fn power_fractions(&self) -> Vec<f64> {
        let total = self.area / PI;
        self.midpoint_drsq.iter().map(|d| d / total).collect()
    }

    /// Uniform power density of a linear heat rate spread over the pellet.
    #[must_use]
    pub fn volumetric_heat_rate(&self, linear_heat_rate: LinearHeatRate) -> VolumetricHeatRate {
        linear_heat_rate / self.area()
    }

    #[must_use]
    pub fn emissivity(&self) -> f64 {
        self.emissivity
    }

    pub(super) fn area_m2(&self) -> f64 {
        self.area
    }

    pub(super) fn r_outer_m(&self) -> f64 {
        self.nodes[self.nodes.len() - 1].r_outer
    }
}

/// Derived radial geometry of a pin, built once per pin design.
#[derive(Debug, Clone, PartialEq)]
pub struct PinGeometry {
    clad: CladGeometry,
    gap: GapGeometry,
    fuel: FuelGeometry,
}

impl PinGeometry {
    /// Validates pin dimensions and precomputes every geometric coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`PinConfigError`] if a dimension is out of range, the fractional
    /// radii are empty, outside `[0, 1]`, or decreasing, or the emissivity is
    /// outside `[0, 1]`.
    pub fn new(
        outer_diameter: Length,
        clad_thickness: Length,
        gap_thickness: Length,
        r_frac: &[f64],
        emissivity: f64,
    ) -> Result<Self, PinConfigError> {
        let dimension = |name| move |source| PinConfigError::InvalidDimension { name, source };

        let d = StrictlyPositive::new(outer_diameter.get::<meter>())
            .map_err(dimension("outer diameter"))?
            .into_inner();
        let t = StrictlyPositive::new(clad_thickness.get::<meter>())
            .map_err(dimension("clad thickness"))?
            .into_inner();
        let gap = NonNegative::new(gap_thickness.get::<meter>())
            .map_err(dimension("gap thickness"))?
            .into_inner();

        let r_outer = 0.5 * d;
        if t >= r_outer {
            return Err(dimension("clad thickness")(ConstraintError::AboveMaximum));
        }
        let clad = CladGeometry::new(r_outer, t);

        // Rounding in r_inner can leave a sub-ulp pellet when the gap fills the clad bore.
        let r_fuel = clad.r_inner - gap;
        if r_fuel <= MIN_RELATIVE_RADIUS * clad.r_inner {
            return Err(dimension("gap thickness")(ConstraintError::AboveMaximum));
        }
        let gap = GapGeometry {
            thickness: gap,
            ln_clad_fuel: (clad.r_inner / r_fuel).ln(),
        };

        check_fractional_radii(r_frac)?;

        UnitInterval::check(&emissivity).map_err(PinConfigError::Emissivity)?;

        Ok(Self {
            clad,
            gap,
            fuel: FuelGeometry::new(r_fuel, r_frac, emissivity),
        })
    }

    #[must_use]
    pub fn clad(&self) -> &CladGeometry {
        &self.clad
    }

    #[must_use]
    pub fn gap(&self) -> &GapGeometry {
        &self.gap
    }

    #[must_use]
    pub fn fuel(&self) -> &FuelGeometry {
        &self.fuel
    }
}

/// Fractional radii must be non-empty, in `[0, 1]`, non-decreasing, and leave
/// some pellet: the first node cannot start at the surface.
fn check_fractional_radii(r_frac: &[f64]) -> Result<(), PinConfigError> {
    let Some(&first) = r_frac.first() else {
        return Err(PinConfigError::NoFuelNodes);
    };
    if first >= 1.0 {
        return Err(PinConfigError::FractionalRadius {
            index: 0,
            value: first,
        });
    }

    let mut previous = 0.0;
    for (index, &value) in r_frac.iter().enumerate() {
        if UnitInterval::check(&value).is_err() || value < previous {
            return Err(PinConfigError::FractionalRadius { index, value });
        }
        previous = value;
    }
    Ok(())
}
