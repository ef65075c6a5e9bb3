//! Typed argument values — the closed set of things a parse can produce.

use std::any::{Any, TypeId};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// An enum usable as an argument value.
///
/// Each constant supplies the token that selects it on the command line:
///
/// ```
/// use argkit::ArgEnum;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Mode {
///     Fast,
///     Slow,
/// }
///
/// impl ArgEnum for Mode {
///     fn variants() -> &'static [Self] {
///         &[Mode::Fast, Mode::Slow]
///     }
///
///     fn arg_name(&self) -> &'static str {
///         match self {
///             Mode::Fast => "fast",
///             Mode::Slow => "slow",
///         }
///     }
/// }
/// ```
pub trait ArgEnum: Sized + Clone + 'static {
    /// Every constant of the enum.
    fn variants() -> &'static [Self];
    /// Token used for this constant on the command line.
    fn arg_name(&self) -> &'static str;
}

/// Stored value of an enumeration argument.
///
/// `choice` is `None` when the supplied token matched no constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    type_id: Option<TypeId>,
    type_name: &'static str,
    choice: Option<String>,
}

impl EnumValue {
    pub(crate) fn new(type_id: Option<TypeId>, type_name: &'static str, choice: Option<String>) -> Self {
        Self {
            type_id,
            type_name,
            choice,
        }
    }

    /// The matched token, if any.
    pub fn choice(&self) -> Option<&str> {
        self.choice.as_deref()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Resolve the stored token back to a constant of `T`.
    ///
    /// Returns `None` if this value was not produced by an enumeration of `T`.
    pub(crate) fn resolve<T: ArgEnum>(&self) -> Option<Option<T>> {
        if self.type_id != Some(TypeId::of::<T>()) {
            return None;
        }
        let constant = self.choice.as_deref().and_then(|choice| {
            T::variants()
                .iter()
                .find(|constant| constant.arg_name() == choice)
                .cloned()
        });
        Some(constant)
    }
}

/// Value produced by a user-supplied conversion.
#[derive(Clone)]
pub struct CustomValue {
    value: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl CustomValue {
    pub(crate) fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            value: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for CustomValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A converted argument value, tagged with its type.
#[derive(Debug, Clone)]
pub enum ArgValue {
    /// Flag was present.
    Flag,
    String(String),
    Integer(i64),
    Double(f64),
    File(PathBuf),
    Enum(EnumValue),
    Custom(CustomValue),
}

impl ArgValue {
    /// Human-readable type name, used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Flag => "flag",
            ArgValue::String(_) => "string",
            ArgValue::Integer(_) => "integer",
            ArgValue::Double(_) => "double",
            ArgValue::File(_) => "file",
            ArgValue::Enum(value) => value.type_name(),
            ArgValue::Custom(value) => value.type_name(),
        }
    }
}
