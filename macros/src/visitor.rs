use const_random::const_random;
use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{parse::Parse, punctuated::Punctuated, *};

struct VisitorArm {
    closure: ExprClosure,
    tys: Vec<Type>,
}

impl VisitorArm {
    fn new(closure: ExprClosure) -> syn::Result<Self> {
        if let Some(asyncness) = &closure.asyncness {
            return Err(syn::Error::new_spanned(
                asyncness,
                "async closures are not supported as visitor arms",
            ));
        }

        let tys = (closure.inputs.iter())
            .map(|input| match input {
                Pat::Type(PatType { ty, .. }) => Ok((**ty).clone()),
                _ => Err(syn::Error::new_spanned(
                    input,
                    "please specify the type of every visitor arm parameter",
                )),
            })
            .collect::<syn::Result<_>>()?;

        Ok(VisitorArm { closure, tys })
    }
}

pub struct VisitorArms {
    arms: Vec<VisitorArm>,
}

impl Parse for VisitorArms {
    fn parse(input: syn::parse::ParseStream<'_>) -> syn::Result<Self> {
        let closures = Punctuated::<ExprClosure, Token![,]>::parse_terminated(input)?;

        if closures.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "a visitor needs at least one closure",
            ));
        }

        let arms = (closures.into_iter())
            .map(VisitorArm::new)
            .collect::<syn::Result<_>>()?;
        Ok(VisitorArms { arms })
    }
}

pub fn expand(input: VisitorArms) -> TokenStream {
    let VisitorArms { arms } = input;

    let name = format_ident!("__Visitor{}", const_random!(u32));
    let ret = format_ident!("__R{}", const_random!(u32));
    let generics = (0..arms.len())
        .map(|index| format_ident!("__F{}", index))
        .collect::<Vec<_>>();

    let impls = arms.iter().zip(&generics).enumerate().map(|(index, (arm, generic))| {
        let tys = &arm.tys;
        let args = (0..tys.len())
            .map(|i| format_ident!("__arg{}", i))
            .collect::<Vec<_>>();
        let field = Index::from(index + 1);

        quote! {
            impl<#ret, #(#generics),*> ::tvariant::Visitor<(#(#tys,)*)> for #name<#ret, #(#generics),*>
            where
                #generic: ::core::ops::FnMut(#(#tys),*) -> #ret,
            {
                type Output = #ret;

                #[inline]
                fn visit(&mut self, (#(#args,)*): (#(#tys,)*)) -> #ret {
                    (self.#field)(#(#args),*)
                }
            }
        }
    });

    let closures = arms.iter().map(|arm| &arm.closure);

    quote! {{
        #[allow(non_camel_case_types)]
        struct #name<#ret, #(#generics),*>(::core::marker::PhantomData<fn() -> #ret>, #(#generics),*);

        #(#impls)*

        #name(::core::marker::PhantomData, #(#closures),*)
    }}
}
