use serde_json::Value;

use super::{RatingRecord, RatingValue};

/// Parse a raw ratings cell such as `{'overall': 4.5, 'service': 4}`.
///
/// Strict JSON goes through serde_json, anything else through a decoder for
/// flat mappings of quoted keys to scalars. Bad input gives an empty record.
pub fn parse_ratings(raw: Option<&str>) -> RatingRecord {
    let Some(raw) = raw else {
        return RatingRecord::new();
    };
    match parse_json(raw).or_else(|| LiteralParser::new(raw).parse_mapping()) {
        Some(record) => record,
        None => {
            tracing::debug!("Unparsable ratings literal: {raw:?}");
            RatingRecord::new()
        }
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

fn parse_json(raw: &str) -> Option<RatingRecord> {
    let map = match serde_json::from_str::<Value>(raw).ok()? {
        Value::Object(map) => map,
        _ => return None,
    };
    let mut record = RatingRecord::new();
    for (key, value) in map {
        let value = match value {
            Value::Number(n) => RatingValue::Number(n.as_f64()?),
            Value::String(s) => RatingValue::Text(s),
            Value::Bool(b) => RatingValue::Bool(b),
            Value::Null => RatingValue::Null,
            Value::Array(_) | Value::Object(_) => return None,
        };
        record.insert(normalize_key(&key), value);
    }
    Some(record)
}

/// Recursive-descent decoder for `{ 'key': scalar, ... }`.
struct LiteralParser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse_mapping(mut self) -> Option<RatingRecord> {
        let mut record = RatingRecord::new();
        self.expect('{')?;
        loop {
            self.skip_ws();
            if self.eat('}') {
                break;
            }
            let key = self.parse_string()?;
            self.expect(':')?;
            let value = self.parse_value()?;
            record.insert(normalize_key(&key), value);
            self.skip_ws();
            if self.eat(',') {
                continue;
            }
            self.expect('}')?;
            break;
        }
        self.skip_ws();
        self.rest().is_empty().then_some(record)
    }

    fn parse_value(&mut self) -> Option<RatingValue> {
        self.skip_ws();
        match self.peek()? {
            '\'' | '"' => self.parse_string().map(RatingValue::Text),
            c if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number().map(RatingValue::Number)
            }
            _ => self.parse_keyword(),
        }
    }

    fn parse_keyword(&mut self) -> Option<RatingValue> {
        let word: String = self
            .rest()
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect();
        let value = match word.as_str() {
            "True" | "true" => RatingValue::Bool(true),
            "False" | "false" => RatingValue::Bool(false),
            "None" | "null" => RatingValue::Null,
            _ => return None,
        };
        self.pos += word.len();
        Some(value)
    }

    fn parse_number(&mut self) -> Option<f64> {
        let len = self
            .rest()
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
            .unwrap_or(self.rest().len());
        let n = self.rest()[..len].parse::<f64>().ok()?;
        self.pos += len;
        Some(n)
    }

    fn parse_string(&mut self) -> Option<String> {
        self.skip_ws();
        let quote = self.peek().filter(|c| *c == '\'' || *c == '"')?;
        self.pos += quote.len_utf8();
        let mut out = String::new();
        let mut chars = self.rest().char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    let (_, escaped) = chars.next()?;
                    out.push(match escaped {
                        'n' => '\n',
                        't' => '\t',
                        'r' => '\r',
                        other => other,
                    });
                }
                c if c == quote => {
                    self.pos += i + c.len_utf8();
                    return Some(out);
                }
                c => out.push(c),
            }
        }
        None
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_ws(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.src.len() - trimmed.len();
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Option<()> {
        self.skip_ws();
        self.eat(c).then_some(())
    }
}
