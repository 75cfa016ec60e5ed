use proc_macro::TokenStream;

mod visitor;

/// Builds a visitor out of closures, one per combination of argument types.
///
/// Every closure parameter must carry a type annotation. The closures must
/// all return the same type. Use it through `tvariant::visitor`, whose
/// documentation has runnable examples.
#[proc_macro]
pub fn visitor(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as visitor::VisitorArms);
    visitor::expand(input).into()
}
