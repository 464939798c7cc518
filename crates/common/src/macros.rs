/// Declares structs whose fields are all `pub`.
///
/// Field-level attributes (doc comments included) are forwarded, and the
/// trailing comma after the last field is optional.
#[macro_export]
macro_rules! pub_fields_struct {
    {
        $(
            $(#[$($attr:tt)*])*
            struct $name:ident {
                $(
                    $(#[$($field_attr:tt)*])*
                    $field:ident: $t:ty
                ),* $(,)?
            }
        )*
    } => {
        $(
            $(#[$($attr)*])*
            pub struct $name {
                $(
                    $(#[$($field_attr)*])*
                    pub $field: $t
                ),*
            }
        )*
    }
}
