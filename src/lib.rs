#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(rust_2024_compatibility)]
#![allow(edition_2024_expr_fragment_specifier)]

#[cfg(test)]
extern crate std;

#[cfg(test)]
extern crate self as tvariant;

use core::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::{self, ManuallyDrop, MaybeUninit},
    ptr,
};

mod apply;
pub mod derive;
mod error;
pub mod index;
mod macros;
pub mod pack;
pub mod repr;
pub mod tuple;

/// Builds a [`Visitor`] out of closures, one per combination of argument
/// types.
///
/// Every closure parameter needs a type annotation, and all closures return
/// the same type.
///
/// # Examples
///
/// ```rust
/// use tvariant::{Variant, apply, visitor};
///
/// let mut v: Variant![i32, String] = Variant::new(20i32);
/// let doubled = apply(
///     visitor!(
///         |n: &mut i32| {
///             *n *= 2;
///             n.to_string()
///         },
///         |s: &mut String| s.clone(),
///     ),
///     (&mut v,),
/// );
/// assert_eq!(doubled.as_deref(), Ok("40"));
/// assert_eq!(v.get::<i32, _>(), Some(&40));
/// ```
pub use tvariant_macros::visitor;

pub use self::{
    apply::{Convert, Dispatch, Operand, Operands, Project, Resolve, Visitor, apply, apply_as},
    error::BadAccess,
};
use self::{
    index::{Index, UTerm},
    repr::{Split, SumList},
};

pub type Repr<S> = <S as SumList>::Repr;

/// The discriminant of an empty variant.
const EMPTY: u8 = u8::MAX;

/// A tagged union holding at most one value out of the alternative types in
/// the type list `S`.
///
/// Usually spelled with the [`Variant!`] macro: `Variant![i32, String]` is
/// `Variant<(i32, (String, ()))>`.
///
/// Alternatives are addressed by a type `T` and its index tag `U`. The tag is
/// normally inferred from `T`; it has to be spelled out (`U0`, `U1`, ..) when
/// `T` occurs more than once in `S`, or when only the position is known.
///
/// The discriminant is a `u8` with `u8::MAX` reserved for the empty state, so
/// a list has at most 255 alternatives. Lists are resolved by the trait
/// solver, and with the compiler's default recursion limit they work up to 32
/// alternatives. Longer lists need a higher limit in the crate that names
/// them, e.g. `#![recursion_limit = "512"]` for 64 alternatives.
pub struct Variant<S: SumList> {
    tag: u8,
    data: MaybeUninit<Repr<S>>,
}

impl<T> From<T> for Variant![T] {
    /// Wraps a value in a single-alternative variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tvariant::Variant;
    ///
    /// let v: Variant![i32] = 42i32.into();
    /// assert_eq!(v.get::<i32, _>(), Some(&42));
    /// ```
    fn from(value: T) -> Self {
        Variant::new::<T, UTerm>(value)
    }
}

impl<S: SumList> Variant<S> {
    /// An empty variant.
    pub const fn empty() -> Self {
        const { assert!(S::LEN < EMPTY as usize, "too many alternatives") };
        Variant {
            tag: EMPTY,
            data: MaybeUninit::uninit(),
        }
    }

    /// A variant holding `value` as the alternative at `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tvariant::{Variant, index::U2};
    ///
    /// let v: Variant![u8, String, u8] = Variant::new::<_, U2>(7);
    /// assert_eq!(v.which(), Some(2));
    /// ```
    pub const fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Index,
    {
        const { assert!(S::LEN < EMPTY as usize, "too many alternatives") };
        let mut data = MaybeUninit::<Repr<S>>::uninit();
        unsafe { data.as_mut_ptr().cast::<T>().write(value) };
        Variant { tag: U::TAG, data }
    }

    /// The index of the held alternative, or `None` if empty.
    pub const fn which(&self) -> Option<usize> {
        if self.tag == EMPTY {
            None
        } else {
            Some(self.tag as usize)
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.tag == EMPTY
    }

    /// Whether the alternative at `U` is held.
    pub const fn holds<T, U>(&self) -> bool
    where
        S: Split<T, U>,
        U: Index,
    {
        self.tag == U::TAG
    }

    pub const fn get<T, U>(&self) -> Option<&T>
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag == U::TAG {
            Some(unsafe { &*self.data.as_ptr().cast::<T>() })
        } else {
            None
        }
    }

    pub fn get_mut<T, U>(&mut self) -> Option<&mut T>
    where
        S: Split<T, U>,
        U: Index,
    {
        (self.tag == U::TAG).then(|| unsafe { &mut *S::as_mut_ptr(self.data.as_mut_ptr()) })
    }

    /// Like [`get`](Self::get), treating absence as an error.
    pub fn try_get<T, U>(&self) -> Result<&T, BadAccess>
    where
        S: Split<T, U>,
        U: Index,
    {
        self.get::<T, U>().ok_or(BadAccess)
    }

    pub fn try_get_mut<T, U>(&mut self) -> Result<&mut T, BadAccess>
    where
        S: Split<T, U>,
        U: Index,
    {
        self.get_mut::<T, U>().ok_or(BadAccess)
    }

    /// Moves the held value out if it is the alternative at `U`.
    pub fn into_inner<T, U>(self) -> Result<T, Self>
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag != U::TAG {
            return Err(self);
        }
        let this = ManuallyDrop::new(self);
        Ok(unsafe { ptr::read(S::as_ptr(this.data.as_ptr())) })
    }

    /// Drops the held value, if any.
    pub fn clear(&mut self) {
        let tag = mem::replace(&mut self.tag, EMPTY);
        if S::NEEDS_DROP && tag != EMPTY {
            unsafe { S::drop(self.data.as_mut_ptr(), tag) }
        }
    }

    /// Moves the whole variant out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    pub fn replace(&mut self, other: Self) -> Self {
        mem::replace(self, other)
    }

    /// Drops the held value, then stores `value` as the alternative at `U`.
    pub fn emplace<T, U>(&mut self, value: T) -> &mut T
    where
        S: Split<T, U>,
        U: Index,
    {
        self.clear();
        let slot = S::as_mut_ptr(self.data.as_mut_ptr());
        unsafe { slot.write(value) };
        self.tag = U::TAG;
        unsafe { &mut *slot }
    }

    /// Drops the held value, then stores the value built by `f`.
    ///
    /// The variant is empty while `f` runs, so it stays empty if `f` panics.
    pub fn emplace_with<T, U>(&mut self, f: impl FnOnce() -> T) -> &mut T
    where
        S: Split<T, U>,
        U: Index,
    {
        self.clear();
        let value = f();
        self.emplace::<T, U>(value)
    }

    /// Drops the held value, then stores the value built by `f`, or leaves the
    /// variant empty and returns the error if `f` fails.
    pub fn try_emplace_with<T, U, E>(
        &mut self,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<&mut T, E>
    where
        S: Split<T, U>,
        U: Index,
    {
        self.clear();
        match f() {
            Ok(value) => Ok(self.emplace::<T, U>(value)),
            Err(err) => {
                log::debug!(
                    "constructing {} failed, variant left empty",
                    core::any::type_name::<T>()
                );
                Err(err)
            }
        }
    }

    /// Stores `value` as the alternative at `U`, assigning in place if that
    /// alternative is already held.
    pub fn assign<T, U>(&mut self, value: T) -> &mut T
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag != U::TAG {
            return self.emplace::<T, U>(value);
        }
        let slot = unsafe { &mut *S::as_mut_ptr(self.data.as_mut_ptr()) };
        *slot = value;
        slot
    }

    /// Exchanges the contents of two variants.
    ///
    /// Values are moved, never cloned. When both hold the same alternative
    /// only the values are exchanged.
    pub fn swap(&mut self, other: &mut Self) {
        match (self.which(), other.which()) {
            (None, None) => {}
            (Some(a), Some(b)) if a == b => {
                log::trace!("swapping values of alternative {a}");
                mem::swap(&mut self.data, &mut other.data)
            }
            (a, b) => {
                log::trace!("swapping alternatives {a:?} and {b:?}");
                mem::swap(self, other)
            }
        }
    }

    /// The name of the held alternative's type.
    pub fn type_name(&self) -> Option<&'static str>
    where
        S: derive::TypeMeta,
    {
        (!self.is_empty()).then(|| S::type_name(self.tag))
    }

    pub fn type_id(&self) -> Option<TypeId>
    where
        S: derive::TypeMeta + 'static,
    {
        (!self.is_empty()).then(|| S::type_id(self.tag))
    }

    pub fn as_any(&self) -> Option<&dyn Any>
    where
        S: derive::TypeMeta + 'static,
    {
        (!self.is_empty()).then(|| unsafe { S::as_any(self.data.as_ptr(), self.tag) })
    }

    pub fn as_any_mut(&mut self) -> Option<&mut dyn Any>
    where
        S: derive::TypeMeta + 'static,
    {
        let tag = self.tag;
        (tag != EMPTY).then(|| unsafe { S::as_any_mut(self.data.as_mut_ptr(), tag) })
    }
}

impl<S: SumList> Default for Variant<S> {
    fn default() -> Self {
        Variant::empty()
    }
}

impl<S: SumList> Drop for Variant<S> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<S: derive::SumClone> Clone for Variant<S> {
    fn clone(&self) -> Self {
        let mut data = MaybeUninit::uninit();
        if self.tag != EMPTY {
            unsafe { S::clone(self.data.as_ptr(), self.tag, data.as_mut_ptr()) }
        }
        Variant {
            tag: self.tag,
            data,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.tag == source.tag && self.tag != EMPTY {
            unsafe { S::clone_from(self.data.as_mut_ptr(), source.data.as_ptr(), self.tag) }
        } else {
            *self = source.clone();
        }
    }
}

impl<S: derive::SumDebug> fmt::Debug for Variant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag == EMPTY {
            return f.write_str("Empty");
        }
        unsafe { S::fmt(self.data.as_ptr(), self.tag, f) }
    }
}

impl<S: derive::SumPartialEq> PartialEq for Variant<S> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && (self.tag == EMPTY
                || unsafe { S::eq(self.data.as_ptr(), other.data.as_ptr(), self.tag) })
    }
}

impl<S: derive::SumPartialEq + Eq> Eq for Variant<S> {}

impl<S: derive::SumPartialOrd> PartialOrd for Variant<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.which().cmp(&other.which()) {
            Ordering::Equal if self.tag != EMPTY => unsafe {
                S::partial_cmp(self.data.as_ptr(), other.data.as_ptr(), self.tag)
            },
            ordering => Some(ordering),
        }
    }
}

impl<S: derive::SumOrd + Eq> Ord for Variant<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.which().cmp(&other.which()).then_with(|| {
            if self.tag == EMPTY {
                Ordering::Equal
            } else {
                unsafe { S::cmp(self.data.as_ptr(), other.data.as_ptr(), self.tag) }
            }
        })
    }
}

impl<S: derive::SumHash> Hash for Variant<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.which().hash(state);
        if self.tag != EMPTY {
            unsafe { S::hash(self.data.as_ptr(), self.tag, state) }
        }
    }
}
