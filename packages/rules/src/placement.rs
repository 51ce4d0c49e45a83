/// Where a breakpoint token goes relative to a base class name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// `text-center` + `md` → `text-md-center`; `truncate` + `sm` → `sm-truncate`
    Infix,
    /// `gap-4` + `xl` → `xl:gap-4`; the `xxl` token is written `2xl`
    Prefix,
}

impl Placement {
    /// Return `class` with `token` injected
    pub fn inject(self, class: &str, token: &str) -> String {
        let mut out = String::with_capacity(class.len() + token.len() + 1);
        self.write(class, token, &mut out);
        out
    }

    /// Append `class` with `token` injected onto `out`.
    ///
    /// An empty token is the base tier and leaves the class untouched.
    pub fn write(self, class: &str, token: &str, out: &mut String) {
        if token.is_empty() {
            out.push_str(class);
            return;
        }

        match self {
            Placement::Infix => match class.find('-') {
                Some(dash) => {
                    out.push_str(&class[..dash]);
                    out.push('-');
                    out.push_str(token);
                    out.push_str(&class[dash..]);
                }
                None => {
                    out.push_str(token);
                    out.push('-');
                    out.push_str(class);
                }
            },
            Placement::Prefix => {
                out.push_str(prefix_token(token));
                out.push(':');
                out.push_str(class);
            }
        }
    }
}

fn prefix_token(token: &str) -> &str {
    match token {
        "xxl" => "2xl",
        other => other,
    }
}
