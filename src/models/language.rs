macro_rules! define_languages {
    ($(($variant:ident, $display_name:literal, $code:literal)),* $(,)?) => {
        /// Display languages the catalog text is written in.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum Language {
            #[default]
            $($variant,)*
        }

        impl Language {
            pub const COUNT: usize = count_items!($($variant)*);

            /// Accepts either the language code or its display name, ignoring case.
            #[must_use]
            pub fn parse(string: &str) -> Option<Self> {
                let string = string.trim();
                $(
                    if string.eq_ignore_ascii_case($code) || string.eq_ignore_ascii_case($display_name) {
                        return Some(Language::$variant);
                    }
                )*
                None
            }

            #[must_use]
            pub const fn display_name(&self) -> &'static str {
                match self {
                    $(Language::$variant => $display_name,)*
                }
            }

            #[must_use]
            pub const fn code(&self) -> &'static str {
                match self {
                    $(Language::$variant => $code,)*
                }
            }

            #[must_use]
            pub const fn all() -> &'static [Self; Self::COUNT] {
                &[$(Language::$variant,)*]
            }
        }

        impl std::fmt::Display for Language {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{code}", code = self.code())
            }
        }

        impl std::str::FromStr for Language {
            type Err = ();

            fn from_str(string: &str) -> Result<Self, Self::Err> {
                Self::parse(string).ok_or(())
            }
        }
    };
}

macro_rules! count_items {
    () => { 0 };
    ($head:tt $($tail:tt)*) => { 1 + count_items!($($tail)*) };
}

// The first language listed is the default.
define_languages! {
    (English, "English", "en"),
    (German, "Deutsch", "de"),
}
