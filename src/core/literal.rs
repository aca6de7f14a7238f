//! Go string literal decoding.
//!
//! Handles the two Go string literal forms:
//! - interpreted: `"..."` with backslash escapes
//! - raw: `` `...` `` taken verbatim (carriage returns are discarded)

use anyhow::{Result, anyhow, bail};

/// Decode a Go string literal token into its value.
///
/// Mirrors Go's `strconv.Unquote` for string literals. Byte escapes (`\x`, octal)
/// may produce arbitrary bytes; the result must still be valid UTF-8.
pub fn unquote(token: &str) -> Result<String> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 {
        bail!("invalid string literal {}", token);
    }

    let quote = bytes[0];
    if bytes[bytes.len() - 1] != quote {
        bail!("invalid string literal {}", token);
    }
    let body = &token[1..token.len() - 1];

    match quote {
        b'`' => {
            if body.contains('`') {
                bail!("invalid raw string literal {}", token);
            }
            Ok(body.replace('\r', ""))
        }
        b'"' => unquote_interpreted(body).map_err(|e| anyhow!("{} in {}", e, token)),
        _ => bail!("not a string literal: {}", token),
    }
}

fn unquote_interpreted(body: &str) -> Result<String> {
    if body.contains('\n') {
        bail!("newline in string literal");
    }
    if !body.contains('\\') {
        if body.contains('"') {
            bail!("unescaped quote");
        }
        return Ok(body.to_string());
    }

    let mut out: Vec<u8> = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => bail!("unescaped quote"),
            '\\' => {
                let escape = chars.next().ok_or_else(|| anyhow!("trailing backslash"))?;
                match escape {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => {
                        let value = take_hex(&mut chars, 2)?;
                        out.push(value as u8);
                    }
                    'u' | 'U' => {
                        let digits = if escape == 'u' { 4 } else { 8 };
                        let value = take_hex(&mut chars, digits)?;
                        let decoded = char::from_u32(value)
                            .ok_or_else(|| anyhow!("invalid code point \\{}{:x}", escape, value))?;
                        let mut buf = [0u8; 4];
                        out.extend_from_slice(decoded.encode_utf8(&mut buf).as_bytes());
                    }
                    '0'..='7' => {
                        let mut value = escape.to_digit(8).unwrap_or_default();
                        for _ in 0..2 {
                            let digit = chars
                                .next()
                                .and_then(|d| d.to_digit(8))
                                .ok_or_else(|| anyhow!("invalid octal escape"))?;
                            value = value * 8 + digit;
                        }
                        if value > 0xff {
                            bail!("octal escape value {} > 255", value);
                        }
                        out.push(value as u8);
                    }
                    other => bail!("unknown escape sequence \\{}", other),
                }
            }
            _ => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8(out).map_err(|_| anyhow!("escapes produce invalid UTF-8"))
}

fn take_hex(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        let digit = chars
            .next()
            .and_then(|d| d.to_digit(16))
            .ok_or_else(|| anyhow!("invalid hex escape"))?;
        value = value * 16 + digit;
    }
    Ok(value)
}
