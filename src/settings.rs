use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

/// Error type returned by settings validation
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Bad value assigned to a settings field
    #[error("bad value for settings field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Equilibration settings.
///
/// Construct with [`Settings::default`] or via [`SettingsBuilder`]:
///
/// ```no_run
/// use conicprep::SettingsBuilder;
///
/// let settings = SettingsBuilder::<f64>::default()
///     .max_iter(6)
///     .min_scaling(1e-5)
///     .build()
///     .unwrap();
/// ```
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Settings<T: FloatT> {
    ///enable data equilibration pre-scaling
    #[builder(default = "true")]
    pub enable: bool,

    ///number of equilibration scaling passes
    #[builder(default = "10")]
    pub max_iter: u32,

    ///minimum equilibration scaling allowed
    #[builder(default = "(1e-4).as_T()")]
    pub min_scaling: T,

    ///maximum equilibration scaling allowed
    #[builder(default = "(1e+4).as_T()")]
    pub max_scaling: T,

    ///restore problem data to original units on reverse scaling
    #[builder(default = "false")]
    pub restore_data: bool,

    ///verbose printing of the equilibration summary
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for Settings<T>
where
    T: FloatT,
{
    fn default() -> Settings<T> {
        SettingsBuilder::<T>::default().build().unwrap()
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> SettingsBuilder<T>
where
    T: FloatT,
{
    /// check that the scaling clip range satisfies `0 < min <= 1 <= max`
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(v) = self.min_scaling {
            if !(v > T::zero() && v <= T::one()) {
                return Err(SettingsError::BadFieldValue("min_scaling"));
            }
        }
        if let Some(v) = self.max_scaling {
            if v < T::one() {
                return Err(SettingsError::BadFieldValue("max_scaling"));
            }
        }
        Ok(())
    }
}
