//! Parse CSS color syntax into a [`Color`].
//!
//! Supported are hex colors and the `rgb()`, `rgba()`, `hsl()`, `hsla()`,
//! `hwb()`, `lab()`, `lch()`, `device-cmyk()` and `gray()` functions, in
//! both the legacy comma separated and the modern space separated syntax.

use cssparser::{
    match_ignore_ascii_case, BasicParseErrorKind, ParseErrorKind, Parser, ParserInput,
    SourceLocation, ToCss as _, Token,
};
use thiserror::Error;

use crate::{
    color::{Color, Component, Flags, Model},
    error::{ParseError, Position, Span},
    math::{clamp_unit, hex_pair_to_unit, normalize_hue, normalize_hue_fraction},
    models::{DeviceCmyk, Gray, Hex, Hsl, Hwb, Lab, Lch, Rgb},
};

/// The result of parsing a color, taken and returned by all the conversion
/// functions.
pub type ParseResult = Result<Color, ParseError>;

/// Errors detected by this parser on top of the tokenizer errors.
#[derive(Clone, Debug, Error)]
enum Invalid {
    #[error("Invalid hex color {0}")]
    Hex(String),
    #[error("Unknown color function {0}()")]
    Function(String),
}

impl Invalid {
    /// The source text the error refers to.
    fn source_text(&self) -> String {
        match self {
            Invalid::Hex(literal) => literal.clone(),
            Invalid::Function(name) => format!("{name}("),
        }
    }
}

type CssError<'i> = cssparser::ParseError<'i, Invalid>;

/// Parse a CSS color.
///
/// ```rust
/// use tincture::{parse, models::Rgb, Model};
/// let color = parse("rgb(255 0 0 / 50%)").unwrap();
/// assert_eq!(color.model, Model::Rgb(Rgb::new(1.0, 0.0, 0.0)));
/// assert_eq!(color.alpha, 0.5);
/// ```
pub fn parse(input: &str) -> ParseResult {
    if input.is_empty() {
        log::debug!("cannot parse an empty string");
        return Err(ParseError {
            message: "Cannot parse an empty string".to_string(),
            input: String::new(),
            location: Span {
                start: Position::START,
                end: Position::START,
            },
        });
    }

    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);

    parser.parse_entirely(parse_color).map_err(|error| {
        let error = to_parse_error(input, error);
        log::debug!("could not parse {input:?}: {error}");
        error
    })
}

fn parse_color<'i>(input: &mut Parser<'i, '_>) -> Result<Color, CssError<'i>> {
    input.skip_whitespace();
    let location = input.current_source_location();
    let token = input.next()?.clone();

    let color: Result<Color, CssError<'i>> = match token {
        Token::Hash(ref digits) | Token::IDHash(ref digits) => {
            parse_hash(digits)
                .ok_or_else(|| location.new_custom_error(Invalid::Hex(format!("#{digits}"))))
        }
        Token::Function(ref name) => {
            let Some(function) = Function::from_name(name) else {
                return Err(location.new_custom_error(Invalid::Function(name.to_string())));
            };
            input.parse_nested_block(|arguments| function.parse(arguments))
        }
        token => Err(location.new_unexpected_token_error(token)),
    };

    // Trailing whitespace is not part of the color.
    input.skip_whitespace();
    color
}

/// Parse the digits of a hex color, without the leading `#`.
fn parse_hash(digits: &str) -> Option<Color> {
    let pairs: Vec<String> = match digits.len() {
        3 | 4 => digits.chars().map(|c| c.to_string().repeat(2)).collect(),
        6 | 8 => digits
            .as_bytes()
            .chunks(2)
            .map(|pair| String::from_utf8_lossy(pair).into_owned())
            .collect(),
        _ => return None,
    };

    let values = pairs
        .iter()
        .map(|pair| hex_pair_to_unit(pair))
        .collect::<Option<Vec<_>>>()?;

    let (red, green, blue, alpha) = match values[..] {
        [red, green, blue] => (red, green, blue, 1.0),
        [red, green, blue, alpha] => (red, green, blue, alpha),
        _ => return None,
    };

    Some(Color::new(
        Hex::new(red, green, blue, format!("#{digits}")),
        alpha,
    ))
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Function {
    Rgb { qualified: bool },
    Hsl { qualified: bool },
    Hwb,
    Lab,
    Lch,
    DeviceCmyk,
    Gray,
}

impl Function {
    fn from_name(name: &str) -> Option<Self> {
        Some(match_ignore_ascii_case! { name,
            "rgb" => Function::Rgb { qualified: false },
            "rgba" => Function::Rgb { qualified: true },
            "hsl" => Function::Hsl { qualified: false },
            "hsla" => Function::Hsl { qualified: true },
            "hwb" => Function::Hwb,
            "lab" => Function::Lab,
            "lch" => Function::Lch,
            "device-cmyk" => Function::DeviceCmyk,
            "gray" => Function::Gray,
            _ => return None,
        })
    }

    fn parse<'i>(self, arguments: &mut Parser<'i, '_>) -> Result<Color, CssError<'i>> {
        let mut components = Arguments::new(arguments);

        let model: Model = match self {
            Function::Rgb { .. } => Rgb::new(
                components.byte_or_percentage()?,
                components.byte_or_percentage()?,
                components.byte_or_percentage()?,
            )
            .into(),
            Function::Hsl { .. } => Hsl::new(
                components.hue_fraction()?,
                components.percentage()?,
                components.percentage()?,
            )
            .into(),
            Function::Hwb => Hwb::new(
                components.hue_fraction()?,
                components.percentage()?,
                components.percentage()?,
            )
            .into(),
            Function::Lab => Lab::new(
                components.lightness()?,
                components.number_or_scaled_percentage(125.0)?,
                components.number_or_scaled_percentage(125.0)?,
            )
            .into(),
            Function::Lch => Lch::new(
                components.lightness()?,
                components.number_or_scaled_percentage(150.0)?.max(0.0),
                normalize_hue(components.degrees()?),
            )
            .into(),
            Function::DeviceCmyk => DeviceCmyk::new(
                components.unit()?,
                components.unit()?,
                components.unit()?,
                components.unit()?,
            )
            .into(),
            Function::Gray => Gray::new(components.percentage()?).into(),
        };

        let alpha = components.alpha()?;
        let color = Color::new(model, alpha);

        Ok(match self {
            Function::Rgb { qualified: true } | Function::Hsl { qualified: true } => {
                color.with_flags(Flags::ALPHA_FUNCTION)
            }
            _ => color,
        })
    }
}

/// Reads the components of a color function, tracking whether the legacy
/// comma separated syntax is used.
struct Arguments<'a, 'i, 't> {
    input: &'a mut Parser<'i, 't>,
    index: usize,
    uses_commas: bool,
}

impl<'a, 'i, 't> Arguments<'a, 'i, 't> {
    fn new(input: &'a mut Parser<'i, 't>) -> Self {
        Self {
            input,
            index: 0,
            uses_commas: false,
        }
    }

    /// Consume the separator in front of the next component.
    fn separator(&mut self) -> Result<(), CssError<'i>> {
        match self.index {
            0 => {}
            1 => {
                self.uses_commas = self.input.try_parse(|i| i.expect_comma()).is_ok();
            }
            _ if self.uses_commas => self.input.expect_comma()?,
            _ => {}
        }
        self.index += 1;
        Ok(())
    }

    fn next(&mut self) -> Result<(SourceLocation, Token<'i>), CssError<'i>> {
        self.separator()?;
        self.input.skip_whitespace();
        let location = self.input.current_source_location();
        let token = self.input.next()?.clone();
        Ok((location, token))
    }

    /// A `<number>` in the `0..=255` range or a `<percentage>`, scaled to
    /// the unit range.
    fn byte_or_percentage(&mut self) -> Result<Component, CssError<'i>> {
        Ok(clamp_unit(match self.next()? {
            (_, Token::Number { value, .. }) => value as Component / 255.0,
            (_, Token::Percentage { unit_value, .. }) => unit_value as Component,
            (location, token) => return Err(location.new_unexpected_token_error(token)),
        }))
    }

    /// A `<percentage>`, or a `<number>` read as a percentage, scaled to the
    /// unit range.
    fn percentage(&mut self) -> Result<Component, CssError<'i>> {
        Ok(clamp_unit(match self.next()? {
            (_, Token::Number { value, .. }) => value as Component / 100.0,
            (_, Token::Percentage { unit_value, .. }) => unit_value as Component,
            (location, token) => return Err(location.new_unexpected_token_error(token)),
        }))
    }

    /// A `<number>` or `<percentage>` in the unit range.
    fn unit(&mut self) -> Result<Component, CssError<'i>> {
        Ok(clamp_unit(match self.next()? {
            (_, Token::Number { value, .. }) => value as Component,
            (_, Token::Percentage { unit_value, .. }) => unit_value as Component,
            (location, token) => return Err(location.new_unexpected_token_error(token)),
        }))
    }

    /// The CIE lightness, a `<number>` or `<percentage>` in the `0..=100`
    /// range.
    fn lightness(&mut self) -> Result<Component, CssError<'i>> {
        Ok(self.number_or_scaled_percentage(100.0)?.clamp(0.0, 100.0))
    }

    /// A `<number>`, or a `<percentage>` where 100% is `scale`.
    fn number_or_scaled_percentage(&mut self, scale: Component) -> Result<Component, CssError<'i>> {
        match self.next()? {
            (_, Token::Number { value, .. }) => Ok(value as Component),
            (_, Token::Percentage { unit_value, .. }) => Ok(unit_value as Component * scale),
            (location, token) => Err(location.new_unexpected_token_error(token)),
        }
    }

    /// An `<angle>` or a `<number>` of degrees.
    fn degrees(&mut self) -> Result<Component, CssError<'i>> {
        match self.next()? {
            (_, Token::Number { value, .. }) => Ok(value as Component),
            (location, Token::Dimension { value, ref unit, .. }) => {
                let value = value as Component;
                Ok(match_ignore_ascii_case! { &**unit,
                    "deg" => value,
                    "grad" => value * 360.0 / 400.0,
                    "rad" => value.to_degrees(),
                    "turn" => value * 360.0,
                    _ => return Err(location.new_unexpected_token_error(Token::Ident(unit.clone()))),
                })
            }
            (location, token) => Err(location.new_unexpected_token_error(token)),
        }
    }

    /// A hue as a fraction of a full turn.
    fn hue_fraction(&mut self) -> Result<Component, CssError<'i>> {
        Ok(normalize_hue_fraction(self.degrees()?))
    }

    /// The optional alpha component, which defaults to fully opaque.
    fn alpha(&mut self) -> Result<Component, CssError<'i>> {
        if self.input.is_exhausted() {
            return Ok(1.0);
        }

        if self.uses_commas {
            self.input.expect_comma()?;
        } else {
            self.input.expect_delim('/')?;
        }

        // The separator is already consumed.
        self.index = 0;
        self.unit()
    }
}

/// Convert a position reported by the tokenizer to a [`Position`] in the
/// input.
fn position(input: &str, location: SourceLocation) -> Position {
    let line_start: usize = input
        .split_inclusive('\n')
        .take(location.line as usize)
        .map(str::len)
        .sum();
    let line = input.get(line_start..).unwrap_or_default();

    // Columns are counted in UTF-16 code units.
    let mut units = 1;
    let column_offset = line
        .char_indices()
        .find(|&(_, c)| {
            if units >= location.column {
                return true;
            }
            units += c.len_utf16() as u32;
            false
        })
        .map_or(line.len(), |(index, _)| index);

    Position {
        offset: line_start + column_offset,
        line: location.line + 1,
        column: location.column,
    }
}

fn to_parse_error(input: &str, error: CssError<'_>) -> ParseError {
    let start = position(input, error.location);

    let (message, text) = match error.kind {
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(ref token)) => {
            let text = token.to_css_string();
            (format!("Unexpected token {text}"), text)
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => {
            ("Unexpected end of input".to_string(), String::new())
        }
        ParseErrorKind::Basic(_) => ("Invalid color".to_string(), String::new()),
        ParseErrorKind::Custom(ref invalid) => (invalid.to_string(), invalid.source_text()),
    };

    let end = Position {
        offset: start.offset + text.len(),
        line: start.line,
        column: start.column + text.encode_utf16().count() as u32,
    };

    ParseError {
        message,
        input: input.to_string(),
        location: Span { start, end },
    }
}
