use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;

/// Generate a color model struct. Every field is a component of the color
/// and is made public. The CSS function name of the model is the kebab-case
/// form of the struct name, e.g. `DeviceCmyk` is written as `device-cmyk`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.is_empty() {
        return quote! {
            compile_error!("Models must have at least one field for a color component.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();

    if field_names.len() != input.fields.len() {
        return quote! {
            compile_error!("Model components must be named fields.")
        }
        .into();
    }

    // Make sure the component fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let derive: syn::Attribute = syn::parse_quote! {
        #[derive(Clone, Debug, PartialEq)]
    };
    input.attrs.push(derive);

    let struct_name = input.ident.clone();
    let function = syn::LitStr::new(
        &struct_name.to_string().to_case(Case::Kebab),
        Span::call_site(),
    );

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color model from its components.
            pub fn new(
                #(#field_names: crate::color::Component,)*
            ) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            /// Return a new model with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::color::Component) -> crate::color::Component) -> Self {
                Self {
                    #(#field_names: f(self.#field_names),)*
                }
            }
        }

        impl From<#struct_name> for crate::color::Model {
            fn from(value: #struct_name) -> Self {
                crate::color::Model::#struct_name(value)
            }
        }

        impl crate::models::ColorModel for #struct_name {
            const FUNCTION: &'static str = #function;
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
