//! # Solver parameters
//!
//! Parameters are named once, independent of any backend. Each backend has a table that maps
//! every parameter it supports to a native key and to the kind of value that it takes.
use std::fmt;
use std::fmt::{Display, Formatter};

use enum_map::{Enum, EnumMap};

use crate::error::SolverError;
use crate::solver::LinearProgramSolver;

/// Backend independent parameter name.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Parameter {
    /// Number of threads the backend may use.
    ThreadCount,
    /// Direction of optimization, in the native encoding of the backend.
    ObjectiveSense,
    /// Stop once the objective provably can't be better than this value.
    Cutoff,
    /// Values beyond this magnitude are considered infinite.
    Infinity,
    /// Limit on the solve time in seconds.
    TimeLimit,
    /// Stop once the objective value drops below this value.
    ObjectiveLowerLimit,
    /// Stop once the objective value exceeds this value.
    ObjectiveUpperLimit,
    /// Amount of output, zero is silent.
    Verbosity,
    /// Which algorithm to use, in the native encoding of the backend.
    PrimalOrDual,
    /// Limit on the number of iterations.
    IterationLimit,
}

/// Kind of value a parameter takes.
///
/// Integer and real parameters are set through distinct operations.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ParameterKind {
    Integer,
    Real,
}

impl Display for ParameterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParameterKind::Integer => "integer",
            ParameterKind::Real => "real",
        })
    }
}

/// Value of a parameter.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Integer(i32),
    Real(f64),
}

impl ParameterValue {
    #[must_use]
    #[allow(missing_docs)]
    pub fn kind(self) -> ParameterKind {
        match self {
            ParameterValue::Integer(_) => ParameterKind::Integer,
            ParameterValue::Real(_) => ParameterKind::Real,
        }
    }
}

impl From<i32> for ParameterValue {
    fn from(value: i32) -> Self {
        ParameterValue::Integer(value)
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Real(value)
    }
}

impl Display for ParameterValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Integer(value) => value.fmt(f),
            ParameterValue::Real(value) => value.fmt(f),
        }
    }
}

/// How a backend identifies a parameter.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NativeKey {
    Name(&'static str),
    Id(i32),
}

/// Native key of a supported parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ParameterKey {
    /// Key under which the backend knows the parameter.
    pub key: NativeKey,
    /// Kind of value the caller provides.
    pub kind: ParameterKind,
    /// Kind of value the backend stores.
    ///
    /// Differs from `kind` when an integer setting is stored natively as a real number.
    pub native_kind: ParameterKind,
}

impl ParameterKey {
    /// Integer parameter, stored natively as an integer.
    #[must_use]
    pub const fn integer(key: NativeKey) -> Self {
        Self { key, kind: ParameterKind::Integer, native_kind: ParameterKind::Integer }
    }

    /// Real parameter, stored natively as a real.
    #[must_use]
    pub const fn real(key: NativeKey) -> Self {
        Self { key, kind: ParameterKind::Real, native_kind: ParameterKind::Real }
    }

    /// Integer parameter, stored natively as a real.
    #[must_use]
    pub const fn integer_as_real(key: NativeKey) -> Self {
        Self { key, kind: ParameterKind::Integer, native_kind: ParameterKind::Real }
    }
}

/// Parameters supported by one backend.
#[derive(Debug)]
pub struct ParameterTable {
    backend: &'static str,
    keys: EnumMap<Parameter, Option<ParameterKey>>,
}

impl ParameterTable {
    /// Create a table, unsupported parameters map to `None`.
    #[must_use]
    pub fn new(backend: &'static str, keys: EnumMap<Parameter, Option<ParameterKey>>) -> Self {
        Self { backend, keys }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn backend(&self) -> &'static str {
        self.backend
    }

    /// Native key of a parameter, if it is supported for values of this kind.
    ///
    /// # Errors
    ///
    /// `UnsupportedParameter` if there is no mapping, or only one for the other kind of value.
    pub fn lookup(&self, parameter: Parameter, kind: ParameterKind) -> Result<ParameterKey, SolverError> {
        match self.keys[parameter] {
            Some(key) if key.kind == kind => Ok(key),
            _ => Err(SolverError::UnsupportedParameter { parameter, kind }),
        }
    }

    /// Whether values of this kind can be set for the parameter.
    #[must_use]
    pub fn supports(&self, parameter: Parameter, kind: ParameterKind) -> bool {
        self.lookup(parameter, kind).is_ok()
    }

    /// All supported parameters with their native key.
    pub fn supported(&self) -> impl Iterator<Item = (Parameter, ParameterKey)> + '_ {
        self.keys.iter().filter_map(|(parameter, key)| key.map(|key| (parameter, key)))
    }
}

/// A bundle of settings that can be applied to any backend.
///
/// Each parameter is set at most once, later settings replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet {
    settings: Vec<(Parameter, ParameterValue)>,
}

impl ParameterSet {
    #[must_use]
    #[allow(missing_docs)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder style `set`.
    #[must_use]
    pub fn with(mut self, parameter: Parameter, value: impl Into<ParameterValue>) -> Self {
        self.set(parameter, value);
        self
    }

    /// Set a parameter, replacing an earlier value.
    pub fn set(&mut self, parameter: Parameter, value: impl Into<ParameterValue>) {
        let value = value.into();
        match self.settings.iter_mut().find(|(existing, _)| *existing == parameter) {
            Some((_, existing)) => *existing = value,
            None => self.settings.push((parameter, value)),
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn get(&self, parameter: Parameter) -> Option<ParameterValue> {
        self.settings.iter()
            .find(|(existing, _)| *existing == parameter)
            .map(|&(_, value)| value)
    }

    /// Settings in the order in which they were first set.
    pub fn iter(&self) -> impl Iterator<Item = (Parameter, ParameterValue)> + '_ {
        self.settings.iter().copied()
    }

    /// Apply all settings to a solver.
    ///
    /// Settings the backend doesn't support are skipped and reported, all others are applied.
    ///
    /// # Return value
    ///
    /// The parameters that were not supported, in order.
    ///
    /// # Errors
    ///
    /// Any error other than `UnsupportedParameter`, such as an invalid value.
    pub fn apply<S: LinearProgramSolver + ?Sized>(&self, solver: &mut S) -> Result<Vec<Parameter>, SolverError> {
        let mut unsupported = Vec::new();
        for (parameter, value) in self.iter() {
            match solver.set_parameter(parameter, value) {
                Ok(()) => {},
                Err(SolverError::UnsupportedParameter { .. }) => unsupported.push(parameter),
                Err(error) => return Err(error),
            }
        }

        Ok(unsupported)
    }
}
