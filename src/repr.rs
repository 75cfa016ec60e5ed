//! Storage of the held value of a [`Variant`].
//!
//! A non-empty type list is stored as a tree of unions built by halving the
//! list, ending in an uninhabited terminator. For `(T0, (T1, (T2, ())))`:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::{ManuallyDrop, MaybeUninit};
//! struct Nil(Infallible);
//!
//! #[repr(C)]
//! union Cons<T, Next> {
//!     data: ManuallyDrop<T>,
//!     next: ManuallyDrop<Next>,
//! }
//!
//! // What `Variant![T0, T1, T2]` amounts to.
//! struct Stored<T0, T1, T2> {
//!     tag: u8,
//!     data: MaybeUninit<Cons<Cons<Cons<T0, Nil>, Cons<T1, Nil>>, Cons<T2, Nil>>>,
//! }
//! ```
//!
//! Every field of a `#[repr(C)]` union sits at offset 0, so a pointer to the
//! representation, or to any union nested in it, is also a pointer to
//! whichever alternative is live. Halving keeps the nesting `O(log N)` deep,
//! which bounds the work the compiler does to lay out long lists.
//!
//! [`Variant`]: crate::Variant

use core::{convert::Infallible, mem::ManuallyDrop, ptr};

use crate::{
    index::Index,
    pack::{Find, Halve, TypeList, any_of},
};

/// End of a representation. Never constructed.
pub struct Nil(pub(crate) Infallible);

/// Two representations overlaid at offset 0.
#[repr(C)]
pub union Cons<T, U> {
    pub(crate) data: ManuallyDrop<T>,
    pub(crate) next: ManuallyDrop<U>,
}

/// The union tree of a non-empty list: a leaf for one alternative, otherwise
/// the trees of both halves overlaid.
pub trait Layout {
    type Tree;
}

impl<T> Layout for (T, ()) {
    type Tree = Cons<T, Nil>;
}

impl<A, B, C> Layout for (A, (B, C))
where
    Self: Halve,
    <Self as Halve>::Left: Layout,
    <Self as Halve>::Right: Layout,
{
    type Tree = Cons<
        <<Self as Halve>::Left as Layout>::Tree,
        <<Self as Halve>::Right as Layout>::Tree,
    >;
}

/// A type list that can be stored in a [`Variant`](crate::Variant).
pub trait SumList: TypeList {
    /// Unions of every alternative, see [`Layout`].
    type Repr;

    /// Whether any alternative has drop glue.
    const NEEDS_DROP: bool;

    #[doc(hidden)]
    unsafe fn drop(this: *mut Self::Repr, tag: u8);
}

impl SumList for () {
    type Repr = Nil;

    const NEEDS_DROP: bool = false;

    unsafe fn drop(_: *mut Nil, _: u8) {}
}

impl<Head, Tail> SumList for (Head, Tail)
where
    Tail: SumList,
    Self: Layout,
{
    type Repr = <Self as Layout>::Tree;

    const NEEDS_DROP: bool = any_of(&[core::mem::needs_drop::<Head>(), Tail::NEEDS_DROP]);

    unsafe fn drop(this: *mut Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { ptr::drop_in_place(this.cast::<Head>()) };
        } else {
            unsafe { Tail::drop(this.cast(), tag - 1) }
        }
    }
}

/// Access to the alternative `T` at index tag `U`.
pub trait Split<T, U: Index>: SumList + Find<T, U> {
    #[doc(hidden)]
    fn as_ptr(this: *const Self::Repr) -> *const T {
        this.cast()
    }

    #[doc(hidden)]
    fn as_mut_ptr(this: *mut Self::Repr) -> *mut T {
        this.cast()
    }
}

impl<S, T, U: Index> Split<T, U> for S where S: SumList + Find<T, U> {}
