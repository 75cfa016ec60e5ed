//! Type-level natural numbers used as index tags into type lists.
//!
//! An index tag `U` names a position in a type list: [`U0`] is the head,
//! `UInt<U>` is one past `U`. The runtime discriminant of a
//! [`Variant`](crate::Variant) is the [`Index::TAG`] of the alternative it
//! holds.

use core::marker::PhantomData;

pub struct UTerm;

pub struct UInt<U>(PhantomData<U>);

pub trait Index {
    const TAG: u8;
    const VALUE: usize = Self::TAG as usize;
}

impl Index for UTerm {
    const TAG: u8 = 0;
}

impl<U: Index> Index for UInt<U> {
    const TAG: u8 = 1 + U::TAG;
}

/// Floor and ceiling of halving an index.
pub trait Half {
    type Floor: Index;
    type Ceil: Index;
}

impl Half for UTerm {
    type Floor = UTerm;
    type Ceil = UTerm;
}

impl Half for UInt<UTerm> {
    type Floor = UTerm;
    type Ceil = UInt<UTerm>;
}

impl<U: Half> Half for UInt<UInt<U>> {
    type Floor = UInt<U::Floor>;
    type Ceil = UInt<U::Ceil>;
}

/// Addition of two indices.
pub trait Add<B> {
    type Sum: Index;
}

impl<B: Index> Add<B> for UTerm {
    type Sum = B;
}

impl<A: Add<B>, B> Add<B> for UInt<A> {
    type Sum = UInt<A::Sum>;
}

pub type U0 = UTerm;
pub type U1 = UInt<U0>;
pub type U2 = UInt<U1>;
pub type U3 = UInt<U2>;
pub type U4 = UInt<U3>;
pub type U5 = UInt<U4>;
pub type U6 = UInt<U5>;
pub type U7 = UInt<U6>;
pub type U8 = UInt<U7>;
pub type U9 = UInt<U8>;

pub type U10 = UInt<U9>;
pub type U11 = UInt<U10>;
pub type U12 = UInt<U11>;
pub type U13 = UInt<U12>;
pub type U14 = UInt<U13>;
pub type U15 = UInt<U14>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halving() {
        assert_eq!(<<U0 as Half>::Floor as Index>::VALUE, 0);
        assert_eq!(<<U1 as Half>::Ceil as Index>::VALUE, 1);
        assert_eq!(<<U7 as Half>::Floor as Index>::VALUE, 3);
        assert_eq!(<<U7 as Half>::Ceil as Index>::VALUE, 4);
        assert_eq!(<<U12 as Half>::Floor as Index>::VALUE, 6);
        assert_eq!(<<U12 as Half>::Ceil as Index>::VALUE, 6);
    }

    #[test]
    fn addition() {
        assert_eq!(<<U0 as Add<U0>>::Sum as Index>::VALUE, 0);
        assert_eq!(<<U3 as Add<U4>>::Sum as Index>::VALUE, 7);
        assert_eq!(<<U9 as Add<U0>>::Sum as Index>::TAG, 9);
    }
}
