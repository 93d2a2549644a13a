//! Declarative implementations of `Reflect` for user types

/// Implement [`Reflect`](crate::reflect::Reflect) for a struct
///
/// Fields are listed in declaration order. `..name` marks an embedded field
/// whose members are flattened into the parent; other fields take an
/// optional list of tags.
///
/// ```
/// use schemadoc::prototype;
///
/// #[derive(Default)]
/// struct Paging {
///     page: i32,
/// }
///
/// prototype!(Paging {
///     page: [json = "page", doc = "minimum(1)"],
/// });
///
/// #[derive(Default)]
/// struct ListUsers {
///     paging: Paging,
///     query: String,
///     trace_id: String,
/// }
///
/// prototype!(ListUsers {
///     ..paging,
///     query: [json = "q", doc = "required desc(search text)"],
///     trace_id,
/// });
/// ```
#[macro_export]
macro_rules! prototype {
    (@fields $self:ident, $out:ident; ) => {};
    (@fields $self:ident, $out:ident; .. $field:ident $(, $($rest:tt)*)?) => {
        $out.push($crate::reflect::Field::embedded(stringify!($field), &$self.$field));
        $crate::prototype!(@fields $self, $out; $($($rest)*)?);
    };
    (@fields $self:ident, $out:ident;
        $field:ident $(: [$($tag:ident = $val:literal),* $(,)?])? $(, $($rest:tt)*)?) => {
        $out.push(
            $crate::reflect::Field::new(stringify!($field), &$self.$field)
                $($(.tag(stringify!($tag), $val))*)?
        );
        $crate::prototype!(@fields $self, $out; $($($rest)*)?);
    };
    ($ty:ty { $($fields:tt)* }) => {
        impl $crate::reflect::Typed for $ty {
            fn type_info() -> $crate::reflect::TypeInfo {
                $crate::reflect::TypeInfo::of::<Self>($crate::reflect::Kind::Struct)
            }
        }

        impl $crate::reflect::Reflect for $ty {
            fn type_info(&self) -> $crate::reflect::TypeInfo {
                <Self as $crate::reflect::Typed>::type_info()
            }

            fn reflect(&self) -> $crate::reflect::Value<'_> {
                #[allow(unused_mut)]
                let mut fields = ::std::vec::Vec::new();
                $crate::prototype!(@fields self, fields; $($fields)*);
                $crate::reflect::Value::Struct($crate::reflect::StructValue::new(fields))
            }
        }
    };
}

/// Implement [`Reflect`](crate::reflect::Reflect) for a single-field tuple
/// struct, classified by the kind of the wrapped type
///
/// ```
/// use schemadoc::reflect::{classify, SemanticKind};
/// use schemadoc::reflect_newtype;
///
/// struct UserId(i64);
/// reflect_newtype!(UserId => i64);
///
/// assert_eq!(classify(&UserId(7)).kind, SemanticKind::Integer);
/// ```
#[macro_export]
macro_rules! reflect_newtype {
    ($ty:ty => $inner:ty) => {
        impl $crate::reflect::Typed for $ty {
            fn type_info() -> $crate::reflect::TypeInfo {
                <$inner as $crate::reflect::Typed>::type_info().named::<Self>()
            }
        }

        impl $crate::reflect::Reflect for $ty {
            fn type_info(&self) -> $crate::reflect::TypeInfo {
                <Self as $crate::reflect::Typed>::type_info()
            }

            fn reflect(&self) -> $crate::reflect::Value<'_> {
                $crate::reflect::Reflect::reflect(&self.0)
            }
        }
    };
}
