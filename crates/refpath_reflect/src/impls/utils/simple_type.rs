/// Implements [`Reflect`](crate::Reflect) for a `Clone + Debug + Default`
/// type by delegating to those traits.
macro_rules! impl_simple_type_reflect {
    ($kind:ident) => {
        $crate::reflection::impl_reflect_cast_fn!($kind);

        #[inline]
        fn reflect_clone(&self) -> ::alloc::boxed::Box<dyn $crate::Reflect> {
            ::alloc::boxed::Box::new(Clone::clone(self))
        }

        fn try_apply(
            &mut self,
            value: &dyn $crate::Reflect,
        ) -> Result<(), $crate::ops::ApplyError> {
            if let Some(value) = <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Clone::clone_from(self, value);
                Ok(())
            } else {
                Err($crate::ops::ApplyError::MismatchedTypes {
                    from_type: ::alloc::borrow::Cow::Borrowed(
                        $crate::info::DynamicTypePath::reflect_type_path(value),
                    ),
                    to_type: ::alloc::borrow::Cow::Borrowed(
                        <Self as $crate::info::TypePath>::type_path(),
                    ),
                })
            }
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_simple_type_reflect;
