//! Conversions back and forth between flat tuples like `(P, Q, R)` and their
//! corresponding inductive lists like `(P, (Q, (R, ())))`.
//!
//! Dispatch works on inductive lists, but operands are passed to
//! [`apply`](crate::apply) and arguments handed to visitors as flat tuples.
//! Tuples up to arity 8 are supported.

/// Convert a flat tuple into its inductive list.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type List: List<Tuple = Self>;

    fn into_list(self) -> Self::List;
}

/// Convert an inductive list into its flat tuple.
pub trait List: Sized {
    /// The corresponding flat tuple.
    type Tuple: Tuple<List = Self>;

    fn into_tuple(self) -> Self::Tuple;
}

/// Appends a value at the end of an inductive list.
pub trait Append<X> {
    type Output;

    fn append(self, x: X) -> Self::Output;
}

impl<X> Append<X> for () {
    type Output = (X, ());

    fn append(self, x: X) -> Self::Output {
        (x, ())
    }
}

impl<Head, Tail, X> Append<X> for (Head, Tail)
where
    Tail: Append<X>,
{
    type Output = (Head, Tail::Output);

    fn append(self, x: X) -> Self::Output {
        (self.0, self.1.append(x))
    }
}

macro_rules! list_pat {
    [] => [()];
    [$head:ident $(, $t:ident)*] => [($head, list_pat!($($t),*))];
}

macro_rules! impl_tuple {
    ($($t:ident),*) => {
        #[allow(non_snake_case, clippy::unused_unit)]
        impl<$($t),*> Tuple for ($($t,)*) {
            type List = crate::T![$($t),*];

            fn into_list(self) -> Self::List {
                let ($($t,)*) = self;
                crate::t![$($t),*]
            }
        }

        #[allow(non_snake_case, clippy::unused_unit)]
        impl<$($t),*> List for crate::T![$($t),*] {
            type Tuple = ($($t,)*);

            fn into_tuple(self) -> Self::Tuple {
                let list_pat![$($t),*] = self;
                ($($t,)*)
            }
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
