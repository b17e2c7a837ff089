//! Helper macro generating port error enums with `thiserror` messages and
//! snake_case constructors accepting `impl Into<_>` fields.

macro_rules! define_port_error {
    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Unavailable { message: String } => "store unavailable: {message}",
            Rejected { table: String, code: u16 } => "{table} rejected write ({code})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StoreError::unavailable("pool drained");
        assert_eq!(err.to_string(), "store unavailable: pool drained");
    }

    #[test]
    fn constructors_support_mixed_field_types() {
        let err = StoreError::rejected("policies", 23_u16);
        assert_eq!(err.to_string(), "policies rejected write (23)");
        assert_eq!(
            err,
            StoreError::Rejected {
                table: "policies".to_owned(),
                code: 23
            }
        );
    }
}
