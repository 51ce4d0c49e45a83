/// Generates named fluent setters on a family's rule list.
///
/// ```ignore
/// fluent_values!(TextAlign {
///     start => Align::Start,
///     center => Align::Center,
/// });
/// ```
macro_rules! fluent_values {
    ($family:ty { $($method:ident => $value:expr),* $(,)? }) => {
        impl $crate::builder::RuleList<$family> {
            $(
                pub fn $method(self) -> Self {
                    self.value($value)
                }
            )*
        }
    };
}

/// Declares a unit-struct family marker plus a constructor for its rule list
macro_rules! family_marker {
    ($(#[$meta:meta])* $name:ident, $ctor:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        #[doc = concat!("Empty rule list for [`", stringify!($name), "`]")]
        pub fn $ctor() -> $crate::builder::RuleList<$name> {
            $crate::builder::RuleList::new()
        }
    };
}
