//! Accessor macros for node enums
//!
//! These macros eliminate repetitive match code on node sum types.
//! They use `paste` internally for identifier concatenation.

/// Generate `is_xxx` and `as_xxx` for enums with single-field variants
///
/// Uses paste's `:camel` modifier to convert the method name to the variant
/// name. The payload is dereferenced once, so a `Box<ViewElement>` payload
/// is exposed as `&ViewElement` and a `CompactString` payload as `&str`.
///
/// # Example
/// ```ignore
/// impl ViewNode {
///     // element -> Element, text -> Text
///     impl_enum_accessors!(element => ViewElement, text => str);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident => $target:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                pub fn [<as_ $variant>](&self) -> Option<&$target> {
                    match self {
                        Self::[<$variant:camel>](v) => Some(&**v),
                        _ => None,
                    }
                }
            )*
        }
    };
}
