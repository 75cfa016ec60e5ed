//! Type list algebra.
//!
//! Type lists are inductive: `(T0, (T1, (T2, ())))`, usually written with
//! [`T!`](crate::T). Everything in this module is resolved by the trait solver
//! and has no runtime representation.

use core::marker::PhantomData;

use crate::index::{Add, Half, Index, UInt, UTerm};

/// A type list with a statically known length.
pub trait TypeList {
    /// The length of the list as an index tag.
    type Len: Index;

    /// The length of the list.
    const LEN: usize = <Self::Len as Index>::VALUE;
}

impl TypeList for () {
    type Len = UTerm;
}

impl<Head, Tail> TypeList for (Head, Tail)
where
    Tail: TypeList,
{
    type Len = UInt<Tail::Len>;
}

/// Looks up the type at index tag `U`.
pub trait At<U> {
    type Output;
}

impl<Head, Tail> At<UTerm> for (Head, Tail) {
    type Output = Head;
}

impl<Head, Tail, U> At<UInt<U>> for (Head, Tail)
where
    Tail: At<U>,
{
    type Output = Tail::Output;
}

pub type AtIndex<L, U> = <L as At<U>>::Output;

/// Locates type `T` in a list at index tag `U`.
///
/// When `U` is left to inference it resolves only if `T` occurs exactly once,
/// so repeated alternatives must be addressed by an explicit tag.
pub trait Find<T, U: Index> {}

impl<T, Tail> Find<T, UTerm> for (T, Tail) {}

impl<Head, Tail, T, U: Index> Find<T, UInt<U>> for (Head, Tail) where Tail: Find<T, U> {}

/// The position of `T` in `L`.
///
/// # Examples
///
/// ```rust
/// use tvariant::{T, pack::index_of};
///
/// assert_eq!(index_of::<T![i32, String, u8], String, _>(), 1);
/// ```
pub const fn index_of<L, T, U>() -> usize
where
    L: Find<T, U>,
    U: Index,
{
    U::VALUE
}

/// Concatenation of two lists.
pub trait Concat<R> {
    type Output;
}

impl<R> Concat<R> for () {
    type Output = R;
}

impl<Head, Tail, R> Concat<R> for (Head, Tail)
where
    Tail: Concat<R>,
{
    type Output = (Head, Tail::Output);
}

/// Adds `K` to every index tag of a list.
pub trait Shift<K> {
    type Output;
}

impl<K> Shift<K> for () {
    type Output = ();
}

impl<I, Is, K> Shift<K> for (I, Is)
where
    I: Add<K>,
    Is: Shift<K>,
{
    type Output = (I::Sum, Is::Output);
}

/// The list of index tags `U0, .., N - 1`.
///
/// The list for `N` joins the lists for `N / 2` and `N - N / 2`, so the
/// depth of the construction is logarithmic in `N`.
pub trait IndexPack {
    type Output;
}

impl IndexPack for UTerm {
    type Output = ();
}

impl IndexPack for UInt<UTerm> {
    type Output = (UTerm, ());
}

impl<U> IndexPack for UInt<UInt<U>>
where
    Self: Half,
    <Self as Half>::Floor: IndexPack,
    <Self as Half>::Ceil: IndexPack,
    Pack<<Self as Half>::Ceil>: Shift<<Self as Half>::Floor>,
    Pack<<Self as Half>::Floor>: Concat<<Pack<<Self as Half>::Ceil> as Shift<<Self as Half>::Floor>>::Output>,
{
    type Output = <Pack<<Self as Half>::Floor> as Concat<
        <Pack<<Self as Half>::Ceil> as Shift<<Self as Half>::Floor>>::Output,
    >>::Output;
}

pub type Pack<N> = <N as IndexPack>::Output;

/// An alternative `T` paired with its index tag `U`.
pub struct Slot<T, U>(PhantomData<(fn() -> T, U)>);

/// Pairs every type of a list with the index tag at the same position.
pub trait Zip<Is> {
    type Output;
}

impl Zip<()> for () {
    type Output = ();
}

impl<Head, Tail, I, Is> Zip<(I, Is)> for (Head, Tail)
where
    Tail: Zip<Is>,
{
    type Output = (Slot<Head, I>, Tail::Output);
}

/// The slots of a list: `(Slot<T0, U0>, (Slot<T1, U1>, ..))`.
pub trait Indexed: TypeList {
    type Slots;
}

impl<L> Indexed for L
where
    L: TypeList,
    L::Len: IndexPack,
    L: Zip<Pack<L::Len>>,
{
    type Slots = <L as Zip<Pack<L::Len>>>::Output;
}

/// Splits a list after its first `N` elements.
pub trait SplitAt<N> {
    type Left;
    type Right;
}

impl<L> SplitAt<UTerm> for L {
    type Left = ();
    type Right = L;
}

impl<Head, Tail, N> SplitAt<UInt<N>> for (Head, Tail)
where
    Tail: SplitAt<N>,
{
    type Left = (Head, Tail::Left);
    type Right = Tail::Right;
}

/// Splits a list into its first `⌈N / 2⌉` elements and the rest.
pub trait Halve {
    type Left;
    type Right;
}

impl<L> Halve for L
where
    L: TypeList,
    L::Len: Half,
    L: SplitAt<<L::Len as Half>::Ceil>,
{
    type Left = <L as SplitAt<<L::Len as Half>::Ceil>>::Left;
    type Right = <L as SplitAt<<L::Len as Half>::Ceil>>::Right;
}

/// The index tag of the first slot in a slot list.
pub trait Lowest {
    const TAG: u8;
}

impl<T, U: Index, Rest> Lowest for (Slot<T, U>, Rest) {
    const TAG: u8 = U::TAG;
}

pub const fn all_of(flags: &[bool]) -> bool {
    let mut i = 0;
    while i < flags.len() {
        if !flags[i] {
            return false;
        }
        i += 1;
    }
    true
}

pub const fn any_of(flags: &[bool]) -> bool {
    let mut i = 0;
    while i < flags.len() {
        if flags[i] {
            return true;
        }
        i += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;
    use std::string::String;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::index::*;

    fn same<A: 'static, B: 'static>() -> bool {
        TypeId::of::<A>() == TypeId::of::<B>()
    }

    type L = crate::T![u8, i16, String, u32, char];

    #[test]
    fn length() {
        assert_eq!(<() as TypeList>::LEN, 0);
        assert_eq!(<crate::T![u8] as TypeList>::LEN, 1);
        assert_eq!(<L as TypeList>::LEN, 5);
    }

    #[test]
    fn lookup() {
        assert!(same::<AtIndex<L, U0>, u8>());
        assert!(same::<AtIndex<L, U2>, String>());
        assert!(same::<AtIndex<L, U4>, char>());

        assert_eq!(index_of::<L, u8, _>(), 0);
        assert_eq!(index_of::<L, u32, _>(), 3);
        assert_eq!(index_of::<L, char, _>(), 4);
    }

    #[test]
    fn repeated_alternatives_by_tag() {
        type D = crate::T![u8, String, u8];
        assert_eq!(index_of::<D, u8, U0>(), 0);
        assert_eq!(index_of::<D, u8, U2>(), 2);
        assert!(same::<AtIndex<D, U2>, u8>());
    }

    #[test]
    fn index_packs() {
        assert!(same::<Pack<U0>, ()>());
        assert!(same::<Pack<U1>, crate::T![U0]>());
        assert!(same::<Pack<U2>, crate::T![U0, U1]>());
        assert!(same::<Pack<U5>, crate::T![U0, U1, U2, U3, U4]>());
        assert!(same::<
            Pack<U11>,
            crate::T![U0, U1, U2, U3, U4, U5, U6, U7, U8, U9, U10],
        >());
    }

    #[test]
    fn slots() {
        assert!(same::<
            <crate::T![u8, String] as Indexed>::Slots,
            crate::T![Slot<u8, U0>, Slot<String, U1>],
        >());
        assert!(same::<<() as Indexed>::Slots, ()>());
    }

    #[test]
    fn halving() {
        assert!(same::<<L as Halve>::Left, crate::T![u8, i16, String]>());
        assert!(same::<<L as Halve>::Right, crate::T![u32, char]>());

        type Four = crate::T![u8, i16, u32, u64];
        assert!(same::<<Four as Halve>::Left, crate::T![u8, i16]>());
        assert!(same::<<Four as Halve>::Right, crate::T![u32, u64]>());

        assert!(same::<<crate::T![u8] as Halve>::Left, crate::T![u8]>());
        assert!(same::<<crate::T![u8] as Halve>::Right, ()>());
    }

    #[test]
    fn lowest_slot() {
        type S = <L as Indexed>::Slots;
        assert_eq!(<<S as Halve>::Right as Lowest>::TAG, 3);
    }

    #[test]
    fn predicates() {
        const ALL: bool = all_of(&[true, true, true]);
        const NONE: bool = any_of(&[false, false]);
        assert!(ALL);
        assert!(!NONE);
        assert!(all_of(&[]));
        assert!(!any_of(&[]));
        assert!(!all_of(&[true, false]));
        assert!(any_of(&[false, true]));
    }
}
