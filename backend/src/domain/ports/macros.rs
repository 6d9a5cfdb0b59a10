//! `define_port_error!` generates port error enums with snake-case
//! constructors, so adapters can write `XError::query(msg)`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
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
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation for port error enums.

    define_port_error! {
        pub enum LedgerPortError {
            Offline => "ledger offline",
            Rejected { reason: String } => "rejected: {reason}",
            Throttled { retry_after: u64 } => "retry after {retry_after}s",
            Clash { key: String, attempts: u8 } => "clash on {key} after {attempts}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(LedgerPortError::offline(), LedgerPortError::Offline);
    }

    #[test]
    fn string_fields_accept_borrowed_input() {
        let err = LedgerPortError::rejected("quota");
        assert_eq!(err.to_string(), "rejected: quota");
    }

    #[test]
    fn numeric_and_mixed_fields_keep_their_types() {
        assert_eq!(LedgerPortError::throttled(5_u64).to_string(), "retry after 5s");
        assert_eq!(
            LedgerPortError::clash("code", 3_u8).to_string(),
            "clash on code after 3"
        );
    }
}
