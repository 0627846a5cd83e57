use std::{borrow::Cow, fmt::Display};

#[inline]
fn escape_of(ch: u8) -> &'static str {
    match ch {
        b'~' => "~0",
        b'/' => "~1",
        _ => unreachable!(),
    }
}

/// Escapes a reference token as per RFC 6901.
///
/// Every `~` becomes `~0` and every `/` becomes `~1`. The input is scanned
/// once, so the output of one substitution is never escaped again. Tokens
/// without special characters are returned borrowed.
pub fn encode_segment(segment: &str) -> Cow<'_, str> {
    let value = segment.as_bytes();
    let idx = match memchr::memchr2(b'~', b'/', value) {
        Some(idx) => idx,
        None => return Cow::Borrowed(segment),
    };

    let mut s = String::with_capacity(value.len() + 4);
    let mut start = 0;
    let mut idx = Some(idx);

    while let Some(p) = idx {
        let p = start + p;
        s.push_str(&segment[start..p]);
        s.push_str(escape_of(value[p]));
        start = p + 1;
        idx = memchr::memchr2(b'~', b'/', &value[start..]);
    }
    s.push_str(&segment[start..]);

    Cow::Owned(s)
}

/// Appends `segment` to `base`, producing a patch path.
///
/// `segment` is formatted with [`Display`] and then escaped, `base` is taken
/// as is. An empty `base` yields `/<segment>`, and a `base` ending with `/` is
/// not given a second separator.
pub fn make_patch_path(base: &str, segment: impl Display) -> String {
    let segment = segment.to_string();
    let key = encode_segment(&segment);

    let mut path = String::with_capacity(base.len() + key.len() + 1);
    path.push_str(base);
    if !base.ends_with('/') {
        path.push('/');
    }
    path.push_str(&key);
    path
}

#[cfg(test)]
pub(crate) fn decode_segment(segment: &str) -> String {
    let mut s = String::with_capacity(segment.len());
    let mut chars = segment.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '~' => match chars.next() {
                Some('0') => s.push('~'),
                Some('1') => s.push('/'),
                Some(c) => {
                    s.push('~');
                    s.push(c);
                }
                None => s.push('~'),
            },
            _ => s.push(ch),
        }
    }

    s
}
