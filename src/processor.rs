use once_cell::sync::Lazy;
use regex::Regex;

// Anything that looks like an opening or closing tag: `<i>`, `</font>`, `<font color="red">`.
static MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<\S[^<>]*>").expect("markup pattern is valid"));

/// Trims the line and removes inline markup tags from it.
pub fn strip_markup(line: &str) -> String {
    MARKUP.replace_all(line.trim(), "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_strip_markup {
        ($($name:ident: $value:expr,)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;

                assert_eq!(strip_markup(input), expected);
            }
        )*
        }
    }

    test_strip_markup! {
        test_strip_markup_plain: ("Hello World", "Hello World"),
        test_strip_markup_bold: ("<b>Hello</b> World", "Hello World"),
        test_strip_markup_italic: ("<i>Line two</i>", "Line two"),
        test_strip_markup_uppercase: ("<I>Loud</I>", "Loud"),
        test_strip_markup_attributes: (r##"<font color="#ff0000">red</font>"##, "red"),
        test_strip_markup_trims: ("   padded  ", "padded"),
        test_strip_markup_inner_spacing: ("a <b>b</b>  c", "a b  c"),
        test_strip_markup_less_than: ("1 < 2 and 3 > 2", "1 < 2 and 3 > 2"),
        test_strip_markup_unclosed: ("<b unclosed", "<b unclosed"),
        test_strip_markup_only_tags: ("<i></i>", ""),
        test_strip_markup_cjk: ("<i>你好</i>，世界", "你好，世界"),
    }
}
