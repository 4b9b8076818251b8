//! Two-variant success/error container with a combinator algebra.
//!
//! `Outcome<T, E>` holds exactly one of `Ok(T)` or `Err(E)`. Every
//! combinator consumes the value; borrowing variants go through
//! [`Outcome::as_ref`] / [`Outcome::as_mut`] first, so
//! `r.as_ref().map(f)` is the borrowing form of `r.map(f)`.
//!
//! `T` and `E` must be distinct types. The named constructors check this
//! in debug builds; the enum tag itself is never ambiguous.

use std::any::type_name;

use crate::error::InvalidAccess;

/// Result of a fallible step: exactly one of a success or an error payload.
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

#[inline]
fn debug_assert_distinct<T, E>() {
    debug_assert_ne!(
        type_name::<T>(),
        type_name::<E>(),
        "Outcome<T, E>: T and E must not be the same type"
    );
}

#[cold]
#[track_caller]
fn access_fault(kind: InvalidAccess) -> ! {
    panic!("{kind}")
}

impl<T, E> Outcome<T, E> {
    /// Wrap a success value.
    pub fn ok(value: T) -> Self {
        debug_assert_distinct::<T, E>();
        Outcome::Ok(value)
    }

    /// Wrap an error value.
    pub fn err(value: E) -> Self {
        debug_assert_distinct::<T, E>();
        Outcome::Err(value)
    }

    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Borrow both sides: `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Outcome::Ok(v) => Outcome::Ok(v),
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Take the success value.
    ///
    /// # Panics
    /// With [`InvalidAccess::UnwrapOnErr`] if this is an `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => access_fault(InvalidAccess::UnwrapOnErr),
        }
    }

    /// Take the error value.
    ///
    /// # Panics
    /// With [`InvalidAccess::UnwrapErrOnOk`] if this is an `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Outcome::Ok(_) => access_fault(InvalidAccess::UnwrapErrOnOk),
            Outcome::Err(e) => e,
        }
    }

    /// Checked form of [`unwrap`](Self::unwrap).
    pub fn try_unwrap(self) -> Result<T, InvalidAccess> {
        match self {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(_) => Err(InvalidAccess::UnwrapOnErr),
        }
    }

    /// Checked form of [`unwrap_err`](Self::unwrap_err).
    pub fn try_unwrap_err(self) -> Result<E, InvalidAccess> {
        match self {
            Outcome::Ok(_) => Err(InvalidAccess::UnwrapErrOnOk),
            Outcome::Err(e) => Ok(e),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(_) => default,
        }
    }

    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(v) => v,
            Outcome::Err(e) => f(e),
        }
    }

    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Outcome::Ok(_) => default,
            Outcome::Err(e) => e,
        }
    }

    pub fn ok_value(self) -> Option<T> {
        match self {
            Outcome::Ok(v) => Some(v),
            Outcome::Err(_) => None,
        }
    }

    pub fn err_value(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(e) => Some(e),
        }
    }

    /// Transform the success value; an `Err` passes through untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(v) => Outcome::ok(f(v)),
            Outcome::Err(e) => Outcome::err(e),
        }
    }

    /// Transform the error value; an `Ok` passes through untouched.
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(v) => Outcome::ok(v),
            Outcome::Err(e) => Outcome::err(f(e)),
        }
    }

    /// Chain a fallible step. `f` only runs on `Ok` and must keep the error type.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Ok(v) => f(v),
            Outcome::Err(e) => Outcome::err(e),
        }
    }

    /// Collapse into a single value by running exactly one of the two arms.
    #[doc(alias = "match")]
    pub fn match_with<R, OkFn, ErrFn>(self, on_ok: OkFn, on_err: ErrFn) -> R
    where
        OkFn: FnOnce(T) -> R,
        ErrFn: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(v) => on_ok(v),
            Outcome::Err(e) => on_err(e),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Outcome::ok(v),
            Err(e) => Outcome::err(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(v) => Ok(v),
            Outcome::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<&Outcome<T, E>> for bool {
    fn from(outcome: &Outcome<T, E>) -> Self {
        outcome.is_ok()
    }
}
