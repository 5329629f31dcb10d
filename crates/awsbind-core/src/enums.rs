//! Open string enumerations.
//!
//! AWS adds enum values without bumping API versions, so every modelled
//! enum carries an `Unknown(String)` variant that preserves values this
//! crate does not know about and writes them back verbatim.

/// Declare a string enum with known wire values and an `Unknown(String)`
/// fallback.
///
/// Generates `as_str`, `values`, `From<&str>`, `From<String>`, `FromStr`,
/// `Display`, `Serialize` and `Deserialize`.
///
/// # Examples
///
/// ```
/// awsbind_core::string_enum! {
///     /// Storage media.
///     pub enum StorageType {
///         /// Solid state.
///         Ssd => "SSD",
///         /// Spinning disk.
///         Hdd => "HDD",
///     }
/// }
///
/// assert_eq!(StorageType::from("SSD"), StorageType::Ssd);
/// assert_eq!(StorageType::from("TAPE").as_str(), "TAPE");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value this version of the client does not know about.
            Unknown(::std::string::String),
        }

        impl $name {
            /// The wire value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// All known wire values, in declaration order.
            #[must_use]
            pub fn values() -> &'static [&'static str] {
                &[$($value),+]
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(value),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from(value))
            }
        }
    };
}
