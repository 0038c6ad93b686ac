use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::Parser;

/// Turn a struct with exactly three named fields into a color model.
///
/// The fields are made public, the usual value derives are added and the
/// struct gets a `new` constructor, tuple conversions and an implementation of
/// `crate::models::Model` labeled with the uppercased struct name (`Hsb`
/// becomes `"HSB"`).
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
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
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = input
        .fields
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    let type1 = &field_types[0];
    let type2 = &field_types[1];
    let type3 = &field_types[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let label = syn::LitStr::new(
        struct_name.to_string().to_case(Case::Upper).as_str(),
        Span::call_site(),
    );

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub fn new(#field1: #type1, #field2: #type2, #field3: #type3) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Return the three components of this color in declaration order.
            pub fn to_components(&self) -> (#type1, #type2, #type3) {
                (self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<(#type1, #type2, #type3)> for #struct_name {
            fn from(value: (#type1, #type2, #type3)) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl crate::models::Model for #struct_name {
            const LABEL: &'static str = #label;

            fn to_color(&self) -> crate::color::Color {
                crate::color::Color::from(*self)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
