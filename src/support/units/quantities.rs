use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N3, P1, Z0},
};

/// Heat generated per unit pin length, W/m in SI.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Convective film coefficient, W/m²·K in SI.
pub type HeatTransferCoefficient = Quantity<ISQ<Z0, P1, N3, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Heat generated per unit volume, W/m³ in SI.
pub type VolumetricHeatRate = Quantity<ISQ<N1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
