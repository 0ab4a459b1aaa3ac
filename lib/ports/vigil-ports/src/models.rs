use anyhow::Result;
use ndarray::{Array1, Array2};

use vigil_domain::FeatureView;

/// A trained binary classifier. Returns one row per input row and one
/// column per class; column 1 is the positive ("failure") class.
pub trait ProbabilityModel: Send + Sync {
    fn predict_proba(&self, view: &FeatureView) -> Result<Array2<f64>>;
}

/// A trained regressor producing one point estimate per input row.
pub trait PointModel: Send + Sync {
    fn predict(&self, view: &FeatureView) -> Result<Array1<f64>>;
}

impl<T: ProbabilityModel + ?Sized> ProbabilityModel for Box<T> {
    fn predict_proba(&self, view: &FeatureView) -> Result<Array2<f64>> {
        (**self).predict_proba(view)
    }
}

impl<T: PointModel + ?Sized> PointModel for Box<T> {
    fn predict(&self, view: &FeatureView) -> Result<Array1<f64>> {
        (**self).predict(view)
    }
}
