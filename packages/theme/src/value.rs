/// Conversion of a field into a CSS value; `None` means "write nothing"
pub trait CssValue {
    fn css_value(&self) -> Option<String>;
}

impl CssValue for str {
    fn css_value(&self) -> Option<String> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl CssValue for String {
    fn css_value(&self) -> Option<String> {
        self.as_str().css_value()
    }
}

impl<T: CssValue + ?Sized> CssValue for &T {
    fn css_value(&self) -> Option<String> {
        (**self).css_value()
    }
}

impl<T: CssValue> CssValue for Option<T> {
    fn css_value(&self) -> Option<String> {
        self.as_ref().and_then(CssValue::css_value)
    }
}

macro_rules! numeric_css_value {
    ($($ty:ty),*) => {
        $(
            impl CssValue for $ty {
                fn css_value(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

numeric_css_value!(u8, u16, u32, i32, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_strings_are_skipped() {
        assert_eq!("".css_value(), None);
        assert_eq!(String::from("  ").css_value(), None);
        assert_eq!(" 4px ".css_value(), Some("4px".to_string()));
    }

    #[test]
    fn test_option() {
        let none: Option<String> = None;
        assert_eq!(none.css_value(), None);
        assert_eq!(Some(String::new()).css_value(), None);
        assert_eq!(Some("red".to_string()).css_value(), Some("red".to_string()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(1.5f32.css_value(), Some("1.5".to_string()));
        assert_eq!(Some(700u16).css_value(), Some("700".to_string()));
    }
}
