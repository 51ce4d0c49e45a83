/// Implements [`CssVariables`](crate::CssVariables) for a flat struct.
///
/// Each entry maps a field to a logical name; prefix the name with `var` to
/// register a full custom property name instead.
///
/// ```ignore
/// css_variables!(CardVariables {
///     background => "card-bg",
///     legacy => var "--bs-card-bg",
/// });
/// ```
#[macro_export]
macro_rules! css_variables {
    ($type:ty { $($field:ident => $($kind:ident)? $name:literal),* $(,)? }) => {
        impl $crate::CssVariables for $type {
            fn register(registry: &mut $crate::AccessorRegistry<Self>) {
                $(
                    $crate::__register_variable!(registry, $type, $field, $($kind)? $name);
                )*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __register_variable {
    ($registry:ident, $type:ty, $field:ident, var $name:literal) => {
        $registry.variable($name, |source: &$type| {
            $crate::CssValue::css_value(&source.$field)
        });
    };
    ($registry:ident, $type:ty, $field:ident, $name:literal) => {
        $registry.field($name, |source: &$type| {
            $crate::CssValue::css_value(&source.$field)
        });
    };
}
