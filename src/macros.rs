/// The [`struct@Variant`] type over the given alternatives, in order.
///
/// `Variant![]` has no alternatives and is always empty.
///
/// # Examples
///
/// ```rust
/// use tvariant::Variant;
///
/// type Number = Variant![i32, u32, f64];
/// let n: Number = Variant::new(42u32);
/// assert_eq!(n.which(), Some(1));
///
/// assert!(<Variant![]>::empty().is_empty());
/// ```
#[macro_export]
macro_rules! Variant {
    [$($t:ty),* $(,)?] => [$crate::Variant::<$crate::T![$($t,)*]>];
}

/// Spells an inductive type list: `T![A, B]` is `(A, (B, ()))`.
///
/// See [`t`] for values of such a list.
///
/// ```rust
/// use tvariant::{T, pack::TypeList};
///
/// assert_eq!(<T![u8, char, bool] as TypeList>::LEN, 3);
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Builds a value of an inductive list: `t![a, b]` is `(a, (b, ()))`.
///
/// ```rust
/// use tvariant::{T, t};
///
/// let list: T![u8, &str] = t![1, "two"];
/// assert_eq!(list, (1, ("two", ())));
/// ```
#[macro_export]
macro_rules! t {
    [] => [()];
    [$head:expr $(, $t:expr)* $(,)?] => [($head, $crate::t!($($t,)*))];
}
