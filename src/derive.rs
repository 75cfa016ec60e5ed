//! Per-alternative trait dispatch used by the trait implementations of
//! [`Variant`](crate::Variant).
//!
//! Each trait walks the type list down to the alternative selected by `tag`.
//! Callers guarantee that `tag` is in range and that the representation holds
//! a live value of that alternative.

use core::{
    any::{Any, TypeId},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use crate::repr::{Nil, SumList};

pub trait TypeMeta: SumList {
    fn type_name(tag: u8) -> &'static str;

    fn type_id(tag: u8) -> TypeId
    where
        Self: 'static;

    #[doc(hidden)]
    unsafe fn as_any<'a>(this: *const Self::Repr, tag: u8) -> &'a dyn Any
    where
        Self: 'static;

    #[doc(hidden)]
    unsafe fn as_any_mut<'a>(this: *mut Self::Repr, tag: u8) -> &'a mut dyn Any
    where
        Self: 'static;
}

impl TypeMeta for () {
    fn type_name(tag: u8) -> &'static str {
        unreachable!("type name of tag {tag} in an empty list")
    }

    fn type_id(tag: u8) -> TypeId {
        unreachable!("type id of tag {tag} in an empty list")
    }

    unsafe fn as_any<'a>(this: *const Nil, _: u8) -> &'a dyn Any {
        match unsafe { (*this).0 } {}
    }

    unsafe fn as_any_mut<'a>(this: *mut Nil, _: u8) -> &'a mut dyn Any {
        match unsafe { (*this).0 } {}
    }
}

impl<Head, Tail: TypeMeta> TypeMeta for (Head, Tail)
where
    Self: SumList,
{
    fn type_name(tag: u8) -> &'static str {
        match tag {
            0 => core::any::type_name::<Head>(),
            _ => Tail::type_name(tag - 1),
        }
    }

    fn type_id(tag: u8) -> TypeId
    where
        Self: 'static,
    {
        match tag {
            0 => TypeId::of::<Head>(),
            _ => Tail::type_id(tag - 1),
        }
    }

    unsafe fn as_any<'a>(this: *const Self::Repr, tag: u8) -> &'a dyn Any
    where
        Self: 'static,
    {
        match tag {
            0 => unsafe { &*this.cast::<Head>() },
            _ => unsafe { Tail::as_any(this.cast(), tag - 1) },
        }
    }

    unsafe fn as_any_mut<'a>(this: *mut Self::Repr, tag: u8) -> &'a mut dyn Any
    where
        Self: 'static,
    {
        match tag {
            0 => unsafe { &mut *this.cast::<Head>() },
            _ => unsafe { Tail::as_any_mut(this.cast(), tag - 1) },
        }
    }
}

pub trait SumDebug: SumList {
    #[doc(hidden)]
    unsafe fn fmt(this: *const Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl SumDebug for () {
    unsafe fn fmt(this: *const Nil, _: u8, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match unsafe { (*this).0 } {}
    }
}

impl<Head: fmt::Debug, Tail: SumDebug> SumDebug for (Head, Tail)
where
    Self: SumList,
{
    unsafe fn fmt(this: *const Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match tag {
            0 => fmt::Debug::fmt(unsafe { &*this.cast::<Head>() }, f),
            _ => unsafe { Tail::fmt(this.cast(), tag - 1, f) },
        }
    }
}

pub trait SumClone: SumList {
    /// Writes a clone of the value at `this` into `out`. Nothing is written if
    /// the clone panics.
    #[doc(hidden)]
    unsafe fn clone(this: *const Self::Repr, tag: u8, out: *mut Self::Repr);

    #[doc(hidden)]
    unsafe fn clone_from(this: *mut Self::Repr, source: *const Self::Repr, tag: u8);
}

impl SumClone for () {
    unsafe fn clone(this: *const Nil, _: u8, _: *mut Nil) {
        match unsafe { (*this).0 } {}
    }

    unsafe fn clone_from(this: *mut Nil, _: *const Nil, _: u8) {
        match unsafe { (*this).0 } {}
    }
}

impl<Head: Clone, Tail: SumClone> SumClone for (Head, Tail)
where
    Self: SumList,
{
    unsafe fn clone(this: *const Self::Repr, tag: u8, out: *mut Self::Repr) {
        match tag {
            0 => unsafe {
                let value = (*this.cast::<Head>()).clone();
                out.cast::<Head>().write(value);
            },
            _ => unsafe { Tail::clone(this.cast(), tag - 1, out.cast()) },
        }
    }

    unsafe fn clone_from(this: *mut Self::Repr, source: *const Self::Repr, tag: u8) {
        match tag {
            0 => unsafe { (*this.cast::<Head>()).clone_from(&*source.cast::<Head>()) },
            _ => unsafe { Tail::clone_from(this.cast(), source.cast(), tag - 1) },
        }
    }
}

pub trait SumPartialEq: SumList {
    #[doc(hidden)]
    unsafe fn eq(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> bool;
}

impl SumPartialEq for () {
    unsafe fn eq(this: *const Nil, _: *const Nil, _: u8) -> bool {
        match unsafe { (*this).0 } {}
    }
}

impl<Head: PartialEq, Tail: SumPartialEq> SumPartialEq for (Head, Tail)
where
    Self: SumList,
{
    unsafe fn eq(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> bool {
        match tag {
            0 => unsafe { *this.cast::<Head>() == *other.cast::<Head>() },
            _ => unsafe { Tail::eq(this.cast(), other.cast(), tag - 1) },
        }
    }
}

pub trait SumPartialOrd: SumPartialEq {
    #[doc(hidden)]
    unsafe fn partial_cmp(
        this: *const Self::Repr,
        other: *const Self::Repr,
        tag: u8,
    ) -> Option<Ordering>;
}

impl SumPartialOrd for () {
    unsafe fn partial_cmp(this: *const Nil, _: *const Nil, _: u8) -> Option<Ordering> {
        match unsafe { (*this).0 } {}
    }
}

impl<Head: PartialOrd, Tail: SumPartialOrd> SumPartialOrd for (Head, Tail)
where
    Self: SumList,
{
    unsafe fn partial_cmp(
        this: *const Self::Repr,
        other: *const Self::Repr,
        tag: u8,
    ) -> Option<Ordering> {
        match tag {
            0 => unsafe { (*this.cast::<Head>()).partial_cmp(&*other.cast::<Head>()) },
            _ => unsafe { Tail::partial_cmp(this.cast(), other.cast(), tag - 1) },
        }
    }
}

pub trait SumOrd: SumPartialOrd {
    #[doc(hidden)]
    unsafe fn cmp(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> Ordering;
}

impl SumOrd for () {
    unsafe fn cmp(this: *const Nil, _: *const Nil, _: u8) -> Ordering {
        match unsafe { (*this).0 } {}
    }
}

impl<Head: Ord, Tail: SumOrd> SumOrd for (Head, Tail)
where
    Self: SumList,
{
    unsafe fn cmp(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> Ordering {
        match tag {
            0 => unsafe { (*this.cast::<Head>()).cmp(&*other.cast::<Head>()) },
            _ => unsafe { Tail::cmp(this.cast(), other.cast(), tag - 1) },
        }
    }
}

pub trait SumHash: SumList {
    #[doc(hidden)]
    unsafe fn hash<H: Hasher>(this: *const Self::Repr, tag: u8, state: &mut H);
}

impl SumHash for () {
    unsafe fn hash<H: Hasher>(this: *const Nil, _: u8, _: &mut H) {
        match unsafe { (*this).0 } {}
    }
}

impl<Head: Hash, Tail: SumHash> SumHash for (Head, Tail)
where
    Self: SumList,
{
    unsafe fn hash<H: Hasher>(this: *const Self::Repr, tag: u8, state: &mut H) {
        match tag {
            0 => unsafe { (*this.cast::<Head>()).hash(state) },
            _ => unsafe { Tail::hash(this.cast(), tag - 1, state) },
        }
    }
}
