// src/macros.rs

/// `String` shorthand: `s!()` is empty, `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string slices into a new `String`, first argument owned.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($first);
        $(
            out.push_str($rest);
        )+
        out
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn shorthand() {
        assert_eq!(s!(), "");
        assert_eq!(s!("Date"), "Date");
        assert_eq!(join!("1 ", "Mar", " 2024"), "1 Mar 2024");
    }
}
