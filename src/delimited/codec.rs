//! Delimited-record codec.

use thiserror::Error;

/// A record could not be parsed back into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DelimitedError {
    /// A quoted field was opened but never closed.
    #[error("unterminated quoted field starting at byte {position}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        position: usize,
    },

    /// A closing quote was followed by something other than a delimiter
    /// or the end of the record.
    #[error("unexpected character after closing quote at byte {position}")]
    UnexpectedAfterQuote {
        /// Byte offset of the offending character.
        position: usize,
    },
}

/// Joins optional string fields into a delimited record and splits such
/// records back.
///
/// Encoding rules, chosen so that `split(join(v)) == v`:
///
/// - `None` is an unquoted empty field.
/// - `Some("")` is a quoted empty field (`""`), keeping it distinct
///   from `None`.
/// - A value containing the delimiter or the quote character is quoted,
///   with embedded quotes doubled.
/// - Any other value is emitted verbatim.
///
/// The delimiter and quote characters are configurable and must differ;
/// they default to `,` and `"`.
///
/// # Examples
///
/// ```
/// use u_seqkit::delimited::DelimitedCodec;
///
/// let codec = DelimitedCodec::new();
/// let fields = vec![Some("a,b".to_string()), None, Some(String::new())];
///
/// let record = codec.join(&fields);
/// assert_eq!(record, "\"a,b\",,\"\"");
/// assert_eq!(codec.split(&record).unwrap(), fields);
/// ```
#[derive(Debug, Clone)]
pub struct DelimitedCodec {
    delimiter: char,
    quote: char,
}

impl DelimitedCodec {
    /// Creates a codec with `,` as delimiter and `"` as quote.
    pub fn new() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }

    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character.
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Makes a single value safe for embedding in a record: quotes it
    /// when it is empty or contains the delimiter or quote character,
    /// doubling embedded quotes.
    pub fn escape(&self, value: &str) -> String {
        let needs_quoting =
            value.is_empty() || value.contains(self.delimiter) || value.contains(self.quote);
        if !needs_quoting {
            return value.to_string();
        }
        let mut escaped = String::with_capacity(value.len() + 2);
        escaped.push(self.quote);
        for c in value.chars() {
            if c == self.quote {
                escaped.push(self.quote);
            }
            escaped.push(c);
        }
        escaped.push(self.quote);
        escaped
    }

    /// Joins `values` into one record, encoding `None` as an unquoted
    /// empty field.
    pub fn join(&self, values: &[Option<String>]) -> String {
        let mut record = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                record.push(self.delimiter);
            }
            if let Some(value) = value {
                record.push_str(&self.escape(value));
            }
        }
        record
    }

    /// Splits a record produced by [`join`](DelimitedCodec::join) back
    /// into its fields.
    ///
    /// A record always holds at least one field: the empty record parses
    /// as a single `None`.
    pub fn split(&self, record: &str) -> Result<Vec<Option<String>>, DelimitedError> {
        let mut fields = Vec::new();
        let mut chars = record.char_indices().peekable();
        loop {
            match chars.peek().copied() {
                Some((start, c)) if c == self.quote => {
                    chars.next();
                    let mut text = String::new();
                    let mut closed = false;
                    while let Some((_, c)) = chars.next() {
                        if c == self.quote {
                            match chars.peek() {
                                Some(&(_, next)) if next == self.quote => {
                                    chars.next();
                                    text.push(self.quote);
                                }
                                _ => {
                                    closed = true;
                                    break;
                                }
                            }
                        } else {
                            text.push(c);
                        }
                    }
                    if !closed {
                        return Err(DelimitedError::UnterminatedQuote { position: start });
                    }
                    fields.push(Some(text));
                    match chars.next() {
                        None => break,
                        Some((_, c)) if c == self.delimiter => {}
                        Some((position, _)) => {
                            return Err(DelimitedError::UnexpectedAfterQuote { position });
                        }
                    }
                }
                _ => {
                    let mut text = String::new();
                    let mut saw_delimiter = false;
                    for (_, c) in chars.by_ref() {
                        if c == self.delimiter {
                            saw_delimiter = true;
                            break;
                        }
                        text.push(c);
                    }
                    fields.push(if text.is_empty() { None } else { Some(text) });
                    if !saw_delimiter {
                        break;
                    }
                }
            }
        }
        Ok(fields)
    }
}

impl Default for DelimitedCodec {
    fn default() -> Self {
        Self::new()
    }
}
