//! Parsing for the subset of CSS used in inline `style` attributes.

use nom::{
    branch::alt,
    bytes::complete::{tag, take, take_until, take_while},
    character::complete::{alpha1, digit1, multispace0},
    combinator::{all_consuming, map, map_opt, map_res, rest, verify},
    multi::separated_list0,
    sequence::delimited,
    IResult, Parser,
};

use crate::properties::Colour;

fn segment(text: &str) -> IResult<&str, &str> {
    take_while(|c: char| c != ';').parse(text)
}

fn name_value(segment: &str) -> IResult<&str, (&str, &str)> {
    map(
        (take_until(":"), tag(":"), rest),
        |(name, _colon, value): (&str, &str, &str)| (name.trim(), value.trim()),
    )
    .parse(segment)
}

/// Split a style string into `(name, value)` pairs, in source order.
/// Segments with no `:` separator are skipped.
pub fn declaration_list(text: &str) -> IResult<&str, Vec<(&str, &str)>> {
    let (remaining, segments) = separated_list0(tag(";"), segment).parse(text)?;
    let pairs = segments
        .into_iter()
        .filter_map(|seg| match name_value(seg) {
            Ok((_, pair)) => Some(pair),
            Err(_) => {
                html_trace!("Dropping style segment without separator: {:?}", seg);
                None
            }
        })
        .collect();
    Ok((remaining, pairs))
}

fn hex1(text: &str) -> IResult<&str, u8> {
    map_res(
        verify(take(1usize), |s: &str| s.chars().all(|c| c.is_ascii_hexdigit())),
        |digit: &str| u8::from_str_radix(digit, 16),
    )
    .parse(text)
}

fn hex2(text: &str) -> IResult<&str, u8> {
    map_res(
        verify(take(2usize), |s: &str| s.chars().all(|c| c.is_ascii_hexdigit())),
        |digits: &str| u8::from_str_radix(digits, 16),
    )
    .parse(text)
}

fn hex_colour3(text: &str) -> IResult<&str, Colour> {
    let (rest, (_, r, g, b)) = (tag("#"), hex1, hex1, hex1).parse(text)?;
    Ok((
        rest,
        Colour {
            r: r * 0x11,
            g: g * 0x11,
            b: b * 0x11,
        },
    ))
}

fn hex_colour6(text: &str) -> IResult<&str, Colour> {
    let (rest, (_, r, g, b)) = (tag("#"), hex2, hex2, hex2).parse(text)?;
    Ok((rest, Colour { r, g, b }))
}

fn rgb_component(text: &str) -> IResult<&str, u8> {
    delimited(
        multispace0,
        map_res(digit1, |digits: &str| digits.parse::<u8>()),
        multispace0,
    )
    .parse(text)
}

fn rgb_func_colour(text: &str) -> IResult<&str, Colour> {
    let (rest, (_, r, _, g, _, b, _)) = (
        tag("rgb("),
        rgb_component,
        tag(","),
        rgb_component,
        tag(","),
        rgb_component,
        tag(")"),
    )
        .parse(text)?;
    Ok((rest, Colour { r, g, b }))
}

fn colour_by_name(name: &str) -> Option<Colour> {
    let (r, g, b) = match name.to_ascii_lowercase().as_str() {
        "aqua" => (0, 0xff, 0xff),
        "black" => (0, 0, 0),
        "blue" => (0, 0, 0xff),
        "fuchsia" => (0xff, 0, 0xff),
        "gray" | "grey" => (0x80, 0x80, 0x80),
        "green" => (0, 0x80, 0),
        "lime" => (0, 0xff, 0),
        "maroon" => (0x80, 0, 0),
        "navy" => (0, 0, 0x80),
        "olive" => (0x80, 0x80, 0),
        "orange" => (0xff, 0xa5, 0),
        "purple" => (0x80, 0, 0x80),
        "red" => (0xff, 0, 0),
        "silver" => (0xc0, 0xc0, 0xc0),
        "teal" => (0, 0x80, 0x80),
        "white" => (0xff, 0xff, 0xff),
        "yellow" => (0xff, 0xff, 0),
        _ => return None,
    };
    Some(Colour { r, g, b })
}

fn named_colour(text: &str) -> IResult<&str, Colour> {
    map_opt(alpha1, colour_by_name).parse(text)
}

fn colour(text: &str) -> IResult<&str, Colour> {
    delimited(
        multispace0,
        alt((named_colour, hex_colour6, hex_colour3, rgb_func_colour)),
        multispace0,
    )
    .parse(text)
}

/// Parse a CSS colour literal: a basic colour keyword, `#rgb`, `#rrggbb`
/// or `rgb(r, g, b)`.  Anything left over after the colour is a failure.
pub fn parse_colour(text: &str) -> Option<Colour> {
    all_consuming(colour).parse(text).ok().map(|(_, c)| c)
}

#[cfg(test)]
mod test {
    use super::{declaration_list, parse_colour};
    use crate::properties::Colour;

    #[test]
    fn test_declaration_list() {
        assert_eq!(
            declaration_list("color: red ; font-weight:bold"),
            Ok(("", vec![("color", "red"), ("font-weight", "bold")]))
        );
    }

    #[test]
    fn test_declaration_value_keeps_later_colons() {
        assert_eq!(
            declaration_list("name: a:b"),
            Ok(("", vec![("name", "a:b")]))
        );
    }

    #[test]
    fn test_declaration_without_colon_dropped() {
        assert_eq!(
            declaration_list("bogus; ;text-align: left;"),
            Ok(("", vec![("text-align", "left")]))
        );
    }

    #[test]
    fn test_declaration_list_empty() {
        assert_eq!(declaration_list(""), Ok(("", vec![])));
    }

    #[test]
    fn test_parse_hex_colours() {
        assert_eq!(parse_colour("#123"), Some(Colour { r: 0x11, g: 0x22, b: 0x33 }));
        assert_eq!(parse_colour("#ABcdEf"), Some(Colour { r: 0xab, g: 0xcd, b: 0xef }));
        assert_eq!(parse_colour("#abcd"), None);
        assert_eq!(parse_colour("#12g"), None);
    }

    #[test]
    fn test_parse_named_colour() {
        assert_eq!(parse_colour(" white"), Some(Colour { r: 0xff, g: 0xff, b: 0xff }));
        assert_eq!(parse_colour("Red"), Some(Colour { r: 0xff, g: 0, b: 0 }));
        assert_eq!(parse_colour("rebeccapurple"), None);
    }

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            parse_colour("rgb(10, 20 ,255)"),
            Some(Colour { r: 10, g: 20, b: 255 })
        );
        assert_eq!(parse_colour("rgb(10, 20, 256)"), None);
        assert_eq!(parse_colour("rgb(10, 20)"), None);
    }

    #[test]
    fn test_parse_colour_rejects_garbage() {
        assert_eq!(parse_colour(""), None);
        assert_eq!(parse_colour("red blue"), None);
    }
}
