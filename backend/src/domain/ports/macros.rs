//! `define_port_error!`: declares a port error enum with snake_case
//! constructors.
//!
//! Every variant carries named fields; the generated constructor for
//! `Variant { a: A, b: B }` is `fn variant(a: impl Into<A>, b: impl Into<B>)`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    /// Construct the variant of the same name.
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Unreachable { message: String } => "unreachable: {message}",
            Rejected { status: u16 } => "rejected with {status}",
            RetryLater { message: String, after_secs: u64 } =>
                "retry after {after_secs}s: {message}",
        }
    }

    #[test]
    fn string_fields_accept_str() {
        assert_eq!(
            SamplePortError::unreachable("dns").to_string(),
            "unreachable: dns"
        );
    }

    #[test]
    fn numeric_fields_keep_their_type() {
        assert_eq!(
            SamplePortError::rejected(503_u16),
            SamplePortError::Rejected { status: 503 }
        );
    }

    #[test]
    fn multi_field_variants_format_all_fields() {
        assert_eq!(
            SamplePortError::retry_later("busy", 30_u64).to_string(),
            "retry after 30s: busy"
        );
    }
}
