//! Visitation of one or more [`Variant`]s.
//!
//! [`apply`] resolves the runtime discriminant of every operand to a single
//! statically typed [`Visitor::visit`] call. Each operand's alternatives are
//! enumerated into a slot list which is halved recursively: the discriminant
//! is compared against the first index of the right half until one slot is
//! left. The operand is then projected to that slot's type and the next
//! operand is resolved the same way, so `k` operands cost
//! `O(log N_1 + .. + log N_k)` comparisons and no product-sized table.

use core::{marker::PhantomData, mem::ManuallyDrop, ptr};

use crate::{
    BadAccess, EMPTY, Variant,
    index::Index,
    pack::{Halve, Indexed, Lowest, Slot},
    repr::{Split, SumList},
    tuple::{Append, List, Tuple},
};

/// A callable that accepts the held values of a set of operands.
///
/// `Args` is the flat tuple of values, one per operand: `&T` for a shared
/// operand, `&mut T` for an exclusive one and `T` for an owned one. A visitor
/// used with [`apply`] must be implemented for every combination of
/// alternatives the operands may hold, and all of those implementations must
/// agree on `Output`.
///
/// # Examples
///
/// ```rust
/// use tvariant::{Variant, Visitor, apply};
///
/// struct Describe;
///
/// impl Visitor<(&i32,)> for Describe {
///     type Output = String;
///
///     fn visit(&mut self, (n,): (&i32,)) -> String {
///         format!("int {n}")
///     }
/// }
///
/// impl Visitor<(&String,)> for Describe {
///     type Output = String;
///
///     fn visit(&mut self, (s,): (&String,)) -> String {
///         format!("string {s:?}")
///     }
/// }
///
/// let v: Variant![i32, String] = Variant::new(7i32);
/// assert_eq!(apply(Describe, (&v,)), Ok("int 7".to_string()));
/// ```
pub trait Visitor<Args> {
    type Output;

    fn visit(&mut self, args: Args) -> Self::Output;
}

impl<V, Args> Visitor<Args> for &mut V
where
    V: Visitor<Args> + ?Sized,
{
    type Output = V::Output;

    fn visit(&mut self, args: Args) -> Self::Output {
        V::visit(&mut **self, args)
    }
}

/// Adapts a visitor so that every output is converted into `R`.
pub struct Convert<F, R> {
    visitor: F,
    _marker: PhantomData<fn() -> R>,
}

impl<F, R> Convert<F, R> {
    pub fn new(visitor: F) -> Self {
        Convert {
            visitor,
            _marker: PhantomData,
        }
    }
}

impl<F, R, Args> Visitor<Args> for Convert<F, R>
where
    F: Visitor<Args>,
    F::Output: Into<R>,
{
    type Output = R;

    fn visit(&mut self, args: Args) -> R {
        self.visitor.visit(args).into()
    }
}

/// A variant passed to [`apply`]: `&Variant`, `&mut Variant` or `Variant`.
pub trait Operand {
    type List: SumList;

    #[doc(hidden)]
    fn tag(&self) -> u8;
}

impl<S: SumList> Operand for &Variant<S> {
    type List = S;

    fn tag(&self) -> u8 {
        self.tag
    }
}

impl<S: SumList> Operand for &mut Variant<S> {
    type List = S;

    fn tag(&self) -> u8 {
        self.tag
    }
}

impl<S: SumList> Operand for Variant<S> {
    type List = S;

    fn tag(&self) -> u8 {
        self.tag
    }
}

/// Projects an operand onto its alternative `T` at index tag `U`.
pub trait Project<T, U: Index>: Operand {
    /// What the visitor receives for this operand.
    type Item;

    /// # Safety
    ///
    /// The operand must hold the alternative at `U`.
    #[doc(hidden)]
    unsafe fn project(self) -> Self::Item;
}

impl<'a, S, T: 'a, U: Index> Project<T, U> for &'a Variant<S>
where
    S: Split<T, U>,
{
    type Item = &'a T;

    unsafe fn project(self) -> &'a T {
        unsafe { &*S::as_ptr(self.data.as_ptr()) }
    }
}

impl<'a, S, T: 'a, U: Index> Project<T, U> for &'a mut Variant<S>
where
    S: Split<T, U>,
{
    type Item = &'a mut T;

    unsafe fn project(self) -> &'a mut T {
        unsafe { &mut *S::as_mut_ptr(self.data.as_mut_ptr()) }
    }
}

impl<S, T, U: Index> Project<T, U> for Variant<S>
where
    S: Split<T, U>,
{
    type Item = T;

    unsafe fn project(self) -> T {
        let this = ManuallyDrop::new(self);
        unsafe { ptr::read(S::as_ptr(this.data.as_ptr())) }
    }
}

/// An inductive list of operands.
pub trait Operands {
    /// Fails if any operand is empty.
    fn ensure_held(&self) -> Result<(), BadAccess>;
}

impl Operands for () {
    fn ensure_held(&self) -> Result<(), BadAccess> {
        Ok(())
    }
}

impl<O: Operand, Rest: Operands> Operands for (O, Rest) {
    fn ensure_held(&self) -> Result<(), BadAccess> {
        if self.0.tag() == EMPTY {
            log::trace!("apply rejected an empty operand");
            return Err(BadAccess);
        }
        self.1.ensure_held()
    }
}

/// Resolves the operands of an inductive list one after another, collecting
/// the projected values into `Acc`.
pub trait Dispatch<F, Acc, R> {
    #[doc(hidden)]
    fn dispatch(self, f: &mut F, acc: Acc) -> Result<R, BadAccess>;
}

impl<F, Acc, R> Dispatch<F, Acc, R> for ()
where
    Acc: List,
    F: Visitor<Acc::Tuple, Output = R>,
{
    fn dispatch(self, f: &mut F, acc: Acc) -> Result<R, BadAccess> {
        Ok(<F as Visitor<Acc::Tuple>>::visit(f, acc.into_tuple()))
    }
}

impl<F, Acc, R, O, Rest> Dispatch<F, Acc, R> for (O, Rest)
where
    O: Operand,
    O::List: Indexed,
    <O::List as Indexed>::Slots: Resolve<O, Rest, F, Acc, R>,
{
    fn dispatch(self, f: &mut F, acc: Acc) -> Result<R, BadAccess> {
        let (operand, rest) = self;
        let tag = operand.tag();
        if tag == EMPTY {
            return Err(BadAccess);
        }
        <<O::List as Indexed>::Slots as Resolve<O, Rest, F, Acc, R>>::resolve(
            tag, operand, rest, f, acc,
        )
    }
}

/// Narrows a slot list down to the slot matching `tag`.
pub trait Resolve<O, Rest, F, Acc, R> {
    #[doc(hidden)]
    fn resolve(tag: u8, operand: O, rest: Rest, f: &mut F, acc: Acc) -> Result<R, BadAccess>;
}

impl<O, Rest, F, Acc, R> Resolve<O, Rest, F, Acc, R> for () {
    fn resolve(_: u8, _: O, _: Rest, _: &mut F, _: Acc) -> Result<R, BadAccess> {
        Err(BadAccess)
    }
}

impl<T, U, O, Rest, F, Acc, R> Resolve<O, Rest, F, Acc, R> for (Slot<T, U>, ())
where
    U: Index,
    O: Project<T, U>,
    Acc: Append<O::Item>,
    Rest: Dispatch<F, <Acc as Append<O::Item>>::Output, R>,
{
    fn resolve(tag: u8, operand: O, rest: Rest, f: &mut F, acc: Acc) -> Result<R, BadAccess> {
        debug_assert_eq!(tag, U::TAG);
        let item = unsafe { operand.project() };
        rest.dispatch(f, acc.append(item))
    }
}

impl<A, B, C, O, Rest, F, Acc, R> Resolve<O, Rest, F, Acc, R> for (A, (B, C))
where
    Self: Halve,
    <Self as Halve>::Left: Resolve<O, Rest, F, Acc, R>,
    <Self as Halve>::Right: Resolve<O, Rest, F, Acc, R> + Lowest,
{
    fn resolve(tag: u8, operand: O, rest: Rest, f: &mut F, acc: Acc) -> Result<R, BadAccess> {
        if tag < <<Self as Halve>::Right as Lowest>::TAG {
            <<Self as Halve>::Left as Resolve<O, Rest, F, Acc, R>>::resolve(
                tag, operand, rest, f, acc,
            )
        } else {
            <<Self as Halve>::Right as Resolve<O, Rest, F, Acc, R>>::resolve(
                tag, operand, rest, f, acc,
            )
        }
    }
}

/// Calls `visitor` with the values held by `operands`.
///
/// `operands` is a flat tuple of `&Variant`, `&mut Variant` or `Variant`
/// values. The visitor receives a flat tuple of `&T`, `&mut T` or `T`
/// accordingly, in the same order. Fails with [`BadAccess`] without calling
/// the visitor if any operand is empty.
///
/// # Examples
///
/// ```rust
/// use tvariant::{BadAccess, Variant, apply, visitor};
///
/// let a: Variant![i32, String] = Variant::new(42i32);
/// let b: Variant![String, i32] = Variant::new("43".to_string());
///
/// let joined = apply(
///     visitor!(
///         |x: &i32, y: &String| format!("{x},{y}"),
///         |x: &i32, y: &i32| format!("{x},{y}"),
///         |x: &String, y: &String| format!("{x},{y}"),
///         |x: &String, y: &i32| format!("{x},{y}"),
///     ),
///     (&a, &b),
/// );
/// assert_eq!(joined.as_deref(), Ok("42,43"));
///
/// let empty: Variant![i32] = Variant::empty();
/// assert_eq!(apply(visitor!(|x: &i32| *x), (&empty,)), Err(BadAccess));
/// ```
pub fn apply<F, O, R>(mut visitor: F, operands: O) -> Result<R, BadAccess>
where
    O: Tuple,
    O::List: Operands + Dispatch<F, (), R>,
{
    let operands = operands.into_list();
    operands.ensure_held()?;
    operands.dispatch(&mut visitor, ())
}

/// Like [`apply`], converting the output of every visitor implementation
/// into `R`.
pub fn apply_as<R, F, O>(visitor: F, operands: O) -> Result<R, BadAccess>
where
    O: Tuple,
    O::List: Operands + Dispatch<Convert<F, R>, (), R>,
{
    apply(Convert::new(visitor), operands)
}
